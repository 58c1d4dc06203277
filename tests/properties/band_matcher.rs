//! Property tests for band assembly.

use std::collections::HashSet;

use proptest::prelude::*;

use roster::domain::services::{assemble_bands, slot_candidates, CartesianProduct};
use roster::{BandError, Musician, Roster};

const INSTRUMENTS: [&str; 3] = ["GUITARRA", "BAIXO", "VOCAL"];

fn registry() -> impl Strategy<Value = Roster> {
    prop::collection::vec(prop::sample::subsequence(INSTRUMENTS.to_vec(), 1..=3), 0..=6).prop_map(
        |plays| {
            Roster::from_musicians(
                plays
                    .into_iter()
                    .enumerate()
                    .map(|(i, instruments)| {
                        Musician::new(
                            format!("M{i}"),
                            format!("M{i}@X"),
                            vec!["ROCK".to_string()],
                            instruments.into_iter().map(String::from).collect(),
                        )
                    })
                    .collect(),
            )
        },
    )
}

fn slots() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(INSTRUMENTS.to_vec()), 1..=3)
        .prop_map(|s| s.into_iter().map(String::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every band fills each slot with an eligible, distinct musician.
    #[test]
    fn property_bands_are_valid_and_distinct(roster in registry(), instruments in slots()) {
        match assemble_bands(&roster, "ROCK", &instruments) {
            Ok(bands) => {
                prop_assert!(!bands.is_empty());
                for band in &bands {
                    prop_assert_eq!(band.slots.len(), instruments.len());
                    let emails: HashSet<&str> = band.members().map(|m| m.email.as_str()).collect();
                    prop_assert_eq!(emails.len(), instruments.len());
                    for slot in &band.slots {
                        prop_assert!(slot.musician.plays("ROCK", slot.instrument));
                    }
                }
            }
            Err(BandError::NoEligibleMusician { instrument, .. }) => {
                prop_assert!(slot_candidates(&roster, "ROCK", &instrument).is_empty());
            }
            Err(BandError::NoValidBand { .. }) => {
                prop_assert!(instruments.len() > 1);
            }
            Err(BandError::NoSlots) => prop_assert!(false, "slots are never empty here"),
        }
    }

    /// PROPERTY: the product yields every combination, last pool fastest.
    #[test]
    fn property_cartesian_product_is_lexicographic(
        sizes in prop::collection::vec(1usize..4, 1..=4),
    ) {
        let pools: Vec<Vec<usize>> = sizes.iter().map(|&n| (0..n).collect()).collect();
        let all: Vec<Vec<usize>> = CartesianProduct::new(&pools).collect();

        prop_assert_eq!(all.len(), sizes.iter().product::<usize>());
        for pair in all.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }
}
