//! Roster Use Case
//!
//! Application-layer orchestration for the musician registry. Every call
//! loads the store through the repository; mutating calls save it back in
//! full. Failed mutations never reach `save`.

use std::sync::Arc;

use crate::domain::entities::Musician;
use crate::domain::ports::RosterRepository;
use crate::domain::services::assemble_bands;
use crate::domain::value_objects::{FieldOp, ListField, MatchMode, SearchFilters};
use crate::error::RosterResult;

/// One filled slot of an assembled band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandMember {
    pub instrument: String,
    pub musician: Musician,
}

pub struct RosterUseCase {
    repository: Arc<dyn RosterRepository>,
}

impl RosterUseCase {
    pub fn new(repository: Arc<dyn RosterRepository>) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> RosterResult<Vec<Musician>> {
        Ok(self.repository.load()?.all().to_vec())
    }

    pub fn register(&self, musician: Musician) -> RosterResult<()> {
        let mut roster = self.repository.load()?;
        let email = musician.email.clone();
        roster.register(musician)?;
        self.repository.save(&roster)?;
        tracing::info!(%email, "musician registered");
        Ok(())
    }

    pub fn search(&self, mode: MatchMode, filters: &SearchFilters) -> RosterResult<Vec<Musician>> {
        let roster = self.repository.load()?;
        let found = roster.search(mode, filters)?;
        Ok(found.into_iter().cloned().collect())
    }

    pub fn modify(
        &self,
        email: &str,
        op: FieldOp,
        updates: &[(ListField, String)],
    ) -> RosterResult<Musician> {
        let mut roster = self.repository.load()?;
        let updated = roster.modify(email, op, updates)?.clone();
        self.repository.save(&roster)?;
        tracing::info!(%email, ?op, "musician modified");
        Ok(updated)
    }

    pub fn assemble_bands(
        &self,
        genre: &str,
        instruments: &[String],
    ) -> RosterResult<Vec<Vec<BandMember>>> {
        let roster = self.repository.load()?;
        let bands = assemble_bands(&roster, genre, instruments)?;
        Ok(bands
            .iter()
            .map(|band| {
                band.slots
                    .iter()
                    .map(|slot| BandMember {
                        instrument: slot.instrument.to_string(),
                        musician: slot.musician.clone(),
                    })
                    .collect()
            })
            .collect())
    }
}
