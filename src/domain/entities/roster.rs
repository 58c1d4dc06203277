//! Roster entity
//!
//! The in-memory musician store. Operations here never touch the disk;
//! `RosterUseCase` loads a `Roster`, calls one of these and saves it back.

use crate::domain::errors::RegistryError;
use crate::domain::value_objects::{FieldOp, ListField, MatchMode, SearchFilters};

use super::Musician;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    musicians: Vec<Musician>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_musicians(musicians: Vec<Musician>) -> Self {
        Self { musicians }
    }

    pub fn all(&self) -> &[Musician] {
        &self.musicians
    }

    pub fn len(&self) -> usize {
        self.musicians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.musicians.is_empty()
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Musician> {
        self.musicians.iter().find(|m| m.email == email)
    }

    pub fn register(&mut self, musician: Musician) -> Result<(), RegistryError> {
        if self.find_by_email(&musician.email).is_some() {
            return Err(RegistryError::DuplicateEmail {
                email: musician.email,
            });
        }
        self.musicians.push(musician);
        Ok(())
    }

    /// Musicians matching `filters`, in store order.
    pub fn search(
        &self,
        mode: MatchMode,
        filters: &SearchFilters,
    ) -> Result<Vec<&Musician>, RegistryError> {
        if filters.is_empty() {
            return Err(RegistryError::EmptySearch);
        }
        Ok(self
            .musicians
            .iter()
            .filter(|m| filters.matches(m, mode))
            .collect())
    }

    /// Apply `updates` to the musician identified by `email`.
    ///
    /// All updates are applied to a copy first; on any failure the store is
    /// left untouched. On success the record moves to the end of the store.
    pub fn modify(
        &mut self,
        email: &str,
        op: FieldOp,
        updates: &[(ListField, String)],
    ) -> Result<&Musician, RegistryError> {
        let index = self
            .musicians
            .iter()
            .position(|m| m.email == email)
            .ok_or_else(|| RegistryError::MusicianNotFound {
                email: email.to_string(),
            })?;

        let mut updated = self.musicians[index].clone();
        for (field, value) in updates {
            apply(&mut updated, *field, op, value)?;
        }

        self.musicians.remove(index);
        self.musicians.push(updated);
        Ok(&self.musicians[self.musicians.len() - 1])
    }
}

fn apply(
    musician: &mut Musician,
    field: ListField,
    op: FieldOp,
    value: &str,
) -> Result<(), RegistryError> {
    let values = field.values_mut(musician);
    match op {
        FieldOp::Add => values.push(value.to_string()),
        FieldOp::Remove => {
            let pos = values.iter().position(|v| v == value).ok_or_else(|| {
                RegistryError::ValueNotPresent {
                    field,
                    value: value.to_string(),
                }
            })?;
            if values.len() == 1 {
                return Err(RegistryError::EmptyField { field });
            }
            values.remove(pos);
        }
    }
    Ok(())
}
