//! Roster application module

mod use_case;

pub use use_case::{BandMember, RosterUseCase};
