//! Property tests for the ledger merge rules.
#![allow(clippy::unwrap_used, clippy::panic)]

use biosurvey::{Observation, ObservationLedger, SpeciesCatalog, ValueRange};
use proptest::prelude::*;

/// Species pool the generated events draw from; covers three genera.
const SPECIES_POOL: [&str; 5] = [
    "Bacterium Acies",
    "Bacterium Tela",
    "Concha Labiata",
    "Osseus Fractus",
    "Osseus Pumice",
];

const GENUS_POOL: [&str; 3] = ["Bacterium", "Concha", "Osseus"];

/// One generated ledger event.
#[derive(Debug, Clone)]
enum LedgerEvent {
    Raw(u32),
    /// Full genus survey; always lists every genus in the pool, the
    /// way a surface scan lists every genus on the body.
    GenusSurvey,
    Species {
        index: usize,
        analysed: bool,
    },
}

fn ledger_event() -> impl Strategy<Value = LedgerEvent> {
    prop_oneof![
        (1u32..6).prop_map(LedgerEvent::Raw),
        Just(LedgerEvent::GenusSurvey),
        ((0..SPECIES_POOL.len()), any::<bool>())
            .prop_map(|(index, analysed)| LedgerEvent::Species { index, analysed }),
    ]
}

fn apply(ledger: &mut ObservationLedger, event: &LedgerEvent) {
    let catalog = SpeciesCatalog::builtin();
    match event {
        LedgerEvent::Raw(count) => ledger.emplace(Observation::raw(*count)),
        LedgerEvent::GenusSurvey => {
            let entries = GENUS_POOL
                .iter()
                .map(|genus| Observation::genus(*genus, ValueRange::new(1.0, 19.0)))
                .collect();
            ledger.replace_with_genus_list(entries);
        },
        LedgerEvent::Species { index, analysed } => {
            ledger.emplace(Observation::species(
                catalog,
                SPECIES_POOL[*index],
                u8::from(*analysed),
            ));
        },
    }
}

fn analysed_names(events: &[LedgerEvent]) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = events
        .iter()
        .filter_map(|event| match event {
            LedgerEvent::Species {
                index,
                analysed: true,
            } => Some(SPECIES_POOL[*index]),
            _ => None,
        })
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

fn species_entry<'a>(ledger: &'a ObservationLedger, wanted: &str) -> Option<&'a Observation> {
    ledger
        .entries()
        .iter()
        .find(|entry| matches!(entry, Observation::Species { name, .. } if name == wanted))
}

proptest! {
    /// Once a species is fully analysed, no later event sequence may
    /// remove it or lower its sample count.
    #[test]
    fn analysed_species_never_regress(events in prop::collection::vec(ledger_event(), 1..40)) {
        let mut ledger = ObservationLedger::new();
        for event in &events {
            apply(&mut ledger, event);
        }
        for name in analysed_names(&events) {
            let entry = species_entry(&ledger, name);
            prop_assert!(entry.is_some(), "analysed {} vanished from the ledger", name);
            prop_assert!(entry.unwrap().is_complete(), "analysed {} regressed", name);
        }
    }

    /// Emplacing the same analysed species any number of times leaves
    /// exactly one complete entry.
    #[test]
    fn analysed_emplace_is_idempotent(repeats in 1usize..8, index in 0..SPECIES_POOL.len()) {
        let catalog = SpeciesCatalog::builtin();
        let mut ledger = ObservationLedger::new();
        for _ in 0..repeats {
            ledger.emplace(Observation::species(catalog, SPECIES_POOL[index], 1));
        }
        prop_assert_eq!(ledger.len(), 1);
        prop_assert!(ledger.entries()[0].is_complete());
    }

    /// The ledger never holds two species entries with the same name.
    #[test]
    fn species_entries_stay_unique(events in prop::collection::vec(ledger_event(), 1..40)) {
        let mut ledger = ObservationLedger::new();
        for event in &events {
            apply(&mut ledger, event);
        }
        let mut names: Vec<&str> = ledger
            .entries()
            .iter()
            .filter_map(|entry| match entry {
                Observation::Species { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(before, names.len());
    }
}
