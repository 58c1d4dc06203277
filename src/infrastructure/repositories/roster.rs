//! JSON Roster Repository
//!
//! Persists the musician store as `{"musicos": [...]}`. The whole file is
//! rewritten on every save: 4-space indentation, keys in sorted order,
//! non-ASCII text written as-is.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Musician, Roster};
use crate::domain::ports::{RepositoryError, RosterRepository};
use crate::infrastructure::fs::{atomic_write, direct_write};

// Field order is alphabetical so serialization emits sorted keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonMusician {
    email: String,
    generos_musicais: Vec<String>,
    instrumentos: Vec<String>,
    nome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonRoster {
    musicos: Vec<JsonMusician>,
}

pub struct JsonRosterRepository {
    path: PathBuf,
    atomic_writes: bool,
}

impl JsonRosterRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            atomic_writes: true,
        }
    }

    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn access_error(&self, e: impl ToString) -> RepositoryError {
        RepositoryError::AccessError {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}

impl RosterRepository for JsonRosterRepository {
    fn load(&self) -> Result<Roster, RepositoryError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "creating empty registry");
            let roster = Roster::new();
            self.save(&roster)?;
            return Ok(roster);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.access_error(e))?;
        let json: JsonRoster =
            serde_json::from_str(&content).map_err(|e| RepositoryError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let roster = from_json(json);
        tracing::debug!(
            path = %self.path.display(),
            musicians = roster.len(),
            "registry loaded"
        );
        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> Result<(), RepositoryError> {
        let content = to_pretty_json(&to_json(roster)).map_err(|e| {
            RepositoryError::SerializationError {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;

        let written = if self.atomic_writes {
            atomic_write(&self.path, &content)
        } else {
            direct_write(&self.path, &content)
        };
        written.map_err(|e| self.access_error(e))?;

        tracing::debug!(
            path = %self.path.display(),
            musicians = roster.len(),
            "registry saved"
        );
        Ok(())
    }
}

fn to_pretty_json(value: &impl Serialize) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

fn from_json(json: JsonRoster) -> Roster {
    Roster::from_musicians(
        json.musicos
            .into_iter()
            .map(|m| Musician {
                name: m.nome,
                email: m.email,
                genres: m.generos_musicais,
                instruments: m.instrumentos,
            })
            .collect(),
    )
}

fn to_json(roster: &Roster) -> JsonRoster {
    JsonRoster {
        musicos: roster
            .all()
            .iter()
            .cloned()
            .map(|m| JsonMusician {
                email: m.email,
                generos_musicais: m.genres,
                instrumentos: m.instruments,
                nome: m.name,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Musician {
        Musician::new(
            "JOÃO",
            "JOAO@X.COM",
            vec!["ROCK".to_string()],
            vec!["GUITARRA".to_string()],
        )
    }

    #[test]
    fn load_missing_creates_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        let repo = JsonRosterRepository::new(&path);

        let roster = repo.load().unwrap();

        assert!(roster.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n    \"musicos\": []\n}");
    }

    #[test]
    fn save_writes_sorted_keys_with_four_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        let repo = JsonRosterRepository::new(&path);

        repo.save(&Roster::from_musicians(vec![sample()])).unwrap();

        let expected = r#"{
    "musicos": [
        {
            "email": "JOAO@X.COM",
            "generos_musicais": [
                "ROCK"
            ],
            "instrumentos": [
                "GUITARRA"
            ],
            "nome": "JOÃO"
        }
    ]
}"#;
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn save_and_load_roundtrip_without_atomic_writes() {
        let dir = tempdir().unwrap();
        let repo = JsonRosterRepository::new(dir.path().join("db.json")).with_atomic_writes(false);

        let roster = Roster::from_musicians(vec![sample()]);
        repo.save(&roster).unwrap();

        assert_eq!(repo.load().unwrap(), roster);
    }

    #[test]
    fn load_corrupted_returns_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, "{ not json").unwrap();

        let repo = JsonRosterRepository::new(path.clone());
        let err = repo.load().unwrap_err();
        assert!(matches!(err, RepositoryError::Corrupted { .. }));

        let msg = err.to_string();
        assert!(msg.contains("data file corrupted"));
        assert!(msg.contains(&path.display().to_string()));
    }

    #[test]
    fn load_without_musicos_key_is_corrupted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, r#"{"bandas": []}"#).unwrap();

        let err = JsonRosterRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, RepositoryError::Corrupted { .. }));
    }
}
