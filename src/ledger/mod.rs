//! Per-body observation ledger and its persisted form.
//!
//! The ledger owns the merge rules that keep a body's evidence
//! monotonically more precise: confidence only ever increases, and a
//! fully analysed organism is never displaced by vaguer data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::SpeciesCatalog;
use crate::models::{Body, Observation};
use crate::valuation;

/// Ordered sequence of observations for one body.
///
/// Order is significant: the most recently upgraded entry moves to the
/// front. The ledger is mutated only through [`emplace`] and
/// [`replace_with_genus_list`].
///
/// [`emplace`]: ObservationLedger::emplace
/// [`replace_with_genus_list`]: ObservationLedger::replace_with_genus_list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationLedger {
    entries: Vec<Observation>,
}

impl ObservationLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The recorded observations, most recently promoted first.
    #[must_use]
    pub fn entries(&self) -> &[Observation] {
        &self.entries
    }

    /// Returns true if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reconciles a new observation with the recorded evidence.
    ///
    /// A species observation first tries to promote a genus-level
    /// entry of the same genus (the entry is removed and the species
    /// inserted at the front), then to raise the sample count of an
    /// entry for the same species (a count of `1` is never lowered
    /// back to `0`), and otherwise appends. Raw signals and genus
    /// entries append; genus lists normally arrive wholesale through
    /// [`Self::replace_with_genus_list`] instead.
    pub fn emplace(&mut self, new: Observation) {
        enum Merge {
            Promote(usize),
            Raise(usize),
            Append,
        }

        let (new_genus, new_name, new_samples) = match &new {
            Observation::Species {
                name,
                genus,
                samples,
                ..
            } => (genus.clone(), name.clone(), *samples),
            _ => {
                self.entries.push(new);
                return;
            },
        };

        let mut merge = Merge::Append;
        for (index, existing) in self.entries.iter().enumerate() {
            match existing {
                Observation::Genus { genus, .. } if *genus == new_genus => {
                    merge = Merge::Promote(index);
                    break;
                },
                Observation::Species { name, .. } if *name == new_name => {
                    merge = Merge::Raise(index);
                    break;
                },
                _ => {},
            }
        }

        match merge {
            Merge::Promote(index) => {
                // vague sighting upgraded to the exact species;
                // promoted entries move to the front
                self.entries.remove(index);
                self.entries.insert(0, new);
            },
            Merge::Raise(index) => {
                if let Some(Observation::Species { samples, .. }) = self.entries.get_mut(index) {
                    if new_samples > *samples {
                        *samples = new_samples;
                    }
                }
            },
            Merge::Append => self.entries.push(new),
        }
    }

    /// Applies a full genus-list survey to the ledger.
    ///
    /// The incoming list wholesale-replaces the current entries,
    /// except when an exact species sighting for one of the incoming
    /// genera is already recorded: the whole update then carries
    /// strictly less information and is dropped. Returns whether the
    /// ledger was replaced.
    pub fn replace_with_genus_list(&mut self, new_entries: Vec<Observation>) -> bool {
        let outranked = self.entries.iter().any(|existing| match existing {
            Observation::Species { genus, .. } => new_entries
                .iter()
                .any(|new| new.genus_name() == Some(genus)),
            _ => false,
        });
        if outranked {
            return false;
        }
        self.entries = new_entries;
        true
    }

    /// Renders the ledger in its persisted wire form.
    ///
    /// Genus entries always persist with a count of `1`; their worth
    /// range is re-derived from the catalog and the body on read.
    #[must_use]
    pub fn to_wire(&self, body_id: u64) -> WireLedger {
        let scan_results = self
            .entries
            .iter()
            .map(|entry| {
                let (name, count) = match entry {
                    Observation::RawSignal { count } => ("any".to_string(), u64::from(*count)),
                    Observation::Genus { genus, .. } => (genus.clone(), 1),
                    Observation::Species { name, samples, .. } => {
                        (name.clone(), u64::from(*samples))
                    },
                };
                let mut element = Map::new();
                element.insert(name, Value::from(count));
                element
            })
            .collect();
        WireLedger {
            body_id,
            scan_results,
        }
    }

    /// Rebuilds a ledger from its persisted wire form, resolving entry
    /// names against the catalog in the context of the given body.
    #[must_use]
    pub fn from_wire(catalog: &SpeciesCatalog, wire: &WireLedger, body: &Body) -> Self {
        let entries = wire
            .scan_results
            .iter()
            .map(|element| decode_entry(catalog, element, body))
            .collect();
        Self { entries }
    }
}

/// Persisted form of one body's ledger: one JSON object per body,
/// each scan result a single-key `{"<name>": count}` element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireLedger {
    /// Body identifier the results belong to.
    #[serde(rename = "BodyID")]
    pub body_id: u64,
    /// Scan result elements, ledger order.
    #[serde(rename = "ScanResults")]
    pub scan_results: Vec<Map<String, Value>>,
}

/// Poison count marking a persisted entry that no longer matches the
/// catalog.
const CORRUPT_SIGNAL_COUNT: u32 = 99;

/// Decodes a single persisted scan-result element.
///
/// The variant is resolved purely by matching the element's name
/// against the catalog: `"any"` is a raw signal, a genus name a genus
/// sighting (with its range recomputed for the body), a species
/// display name an exact sighting. Anything unresolvable degrades to a
/// poison `RawSignal` instead of failing.
fn decode_entry(catalog: &SpeciesCatalog, element: &Map<String, Value>, body: &Body) -> Observation {
    let (name, count) = match element.iter().next() {
        Some((name, count)) if element.len() == 1 => (name, count.as_u64()),
        _ => {
            tracing::warn!("persisted scan result is not a single-key element");
            return Observation::raw(CORRUPT_SIGNAL_COUNT);
        },
    };
    let Some(count) = count else {
        tracing::warn!(name = %name, "persisted scan result has a non-numeric count");
        return Observation::raw(CORRUPT_SIGNAL_COUNT);
    };

    if name == "any" {
        return Observation::raw(u32::try_from(count).unwrap_or(CORRUPT_SIGNAL_COUNT));
    }
    if catalog.is_genus(name) {
        let range = valuation::value_range_for_genus(catalog, name, Some(body));
        return Observation::genus(name.clone(), range);
    }
    if catalog.find_species(name).is_some() {
        return Observation::species(catalog, name, u8::from(count == 1));
    }

    tracing::warn!(name = %name, "persisted scan result matches no catalog entry, marking corrupt");
    Observation::raw(CORRUPT_SIGNAL_COUNT)
}
