//! Musician entity
//!
//! `email` is the identity. Genre and instrument lists behave like sets
//! but keep insertion order, which is also display order.

use serde::Serialize;

/// Serializes with the registry file's keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Musician {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "generos_musicais")]
    pub genres: Vec<String>,
    #[serde(rename = "instrumentos")]
    pub instruments: Vec<String>,
}

impl Musician {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        genres: Vec<String>,
        instruments: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            genres,
            instruments,
        }
    }

    pub fn plays(&self, genre: &str, instrument: &str) -> bool {
        self.genres.iter().any(|g| g == genre) && self.instruments.iter().any(|i| i == instrument)
    }
}
