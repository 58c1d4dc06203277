//! Band matcher
//!
//! Builds every band that fills a list of instrument slots for one genre.
//! Each slot draws from the musicians who play both the genre and the
//! slot's instrument; a band is valid when no musician fills two slots.
//!
//! The enumeration is a plain Cartesian product with no upper bound. Slot
//! order is kept inside each band and the last slot varies fastest.

use std::collections::HashSet;

use crate::domain::entities::{Musician, Roster};
use crate::domain::errors::BandError;
use crate::domain::value_objects::{MatchMode, SearchField, SearchFilters};

/// One filled position of a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandSlot<'a> {
    pub instrument: &'a str,
    pub musician: &'a Musician,
}

/// A complete line-up, one slot per requested instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band<'a> {
    pub slots: Vec<BandSlot<'a>>,
}

impl<'a> Band<'a> {
    pub fn members(&self) -> impl Iterator<Item = &'a Musician> + '_ {
        self.slots.iter().map(|slot| slot.musician)
    }
}

/// Musicians of `genre` that play `instrument`, in roster order.
pub fn slot_candidates<'a>(roster: &'a Roster, genre: &str, instrument: &str) -> Vec<&'a Musician> {
    let filters = SearchFilters::new()
        .with(SearchField::Genres, genre)
        .with(SearchField::Instruments, instrument);
    roster
        .all()
        .iter()
        .filter(|m| filters.matches(m, MatchMode::Exact))
        .collect()
}

/// Assemble every valid band for `genre` and the given instrument slots.
pub fn assemble_bands<'a>(
    roster: &'a Roster,
    genre: &str,
    instruments: &'a [String],
) -> Result<Vec<Band<'a>>, BandError> {
    if instruments.is_empty() {
        return Err(BandError::NoSlots);
    }

    let mut pools: Vec<Vec<&Musician>> = Vec::with_capacity(instruments.len());
    for instrument in instruments {
        let candidates = slot_candidates(roster, genre, instrument);
        if candidates.is_empty() {
            return Err(BandError::NoEligibleMusician {
                genre: genre.to_string(),
                instrument: instrument.clone(),
            });
        }
        pools.push(candidates);
    }

    let combinations: usize = pools.iter().map(Vec::len).product();
    tracing::debug!(
        genre,
        slots = instruments.len(),
        combinations,
        "enumerating band line-ups"
    );

    let bands: Vec<Band<'a>> = CartesianProduct::new(&pools)
        .filter(|members| all_distinct(members))
        .map(|members| Band {
            slots: instruments
                .iter()
                .zip(members)
                .map(|(instrument, musician)| BandSlot {
                    instrument: instrument.as_str(),
                    musician,
                })
                .collect(),
        })
        .collect();

    tracing::debug!(valid = bands.len(), "band enumeration finished");

    if bands.is_empty() {
        return Err(BandError::NoValidBand {
            genre: genre.to_string(),
        });
    }
    Ok(bands)
}

fn all_distinct(members: &[&Musician]) -> bool {
    let mut seen = HashSet::with_capacity(members.len());
    members.iter().all(|m| seen.insert(m.email.as_str()))
}

/// Lazy Cartesian product over a list of pools.
///
/// Works like an odometer: the last pool advances on every step and carries
/// into the previous one when it wraps.
pub struct CartesianProduct<'p, T> {
    pools: &'p [Vec<T>],
    indices: Vec<usize>,
    done: bool,
}

impl<'p, T: Copy> CartesianProduct<'p, T> {
    pub fn new(pools: &'p [Vec<T>]) -> Self {
        Self {
            pools,
            indices: vec![0; pools.len()],
            done: pools.iter().any(Vec::is_empty),
        }
    }
}

impl<T: Copy> Iterator for CartesianProduct<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self
            .indices
            .iter()
            .zip(self.pools)
            .map(|(&i, pool)| pool[i])
            .collect();

        self.done = true;
        for slot in (0..self.indices.len()).rev() {
            self.indices[slot] += 1;
            if self.indices[slot] < self.pools[slot].len() {
                self.done = false;
                break;
            }
            self.indices[slot] = 0;
        }

        Some(item)
    }
}
