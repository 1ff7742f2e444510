//! Organism observations at their three confidence levels.

use super::ValueRange;
use crate::catalog::SpeciesCatalog;

/// Evidence about organisms on one body.
///
/// The three variants form a one-way upgrade chain:
///
/// `RawSignal` → `Genus` → `Species { samples: 0 }` → `Species { samples: 1 }`
///
/// A ledger entry for a given organism only ever moves rightward along
/// this chain; the merge rules in [`crate::ledger`] enforce that.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    /// Least specific: N biological signals exist, nothing is known
    /// about genus or species.
    RawSignal {
        /// Number of detected signals.
        count: u32,
    },
    /// A genus is known, narrowed to the worth range the catalog
    /// allowed for the body at capture time.
    Genus {
        /// Localised genus name.
        genus: String,
        /// Worth range captured when the genus was sighted.
        range: ValueRange,
    },
    /// The exact species is known.
    Species {
        /// Full display name, the merge and persistence key.
        name: String,
        /// Genus the species belongs to. For a species the catalog
        /// does not know, this is the full requested name.
        genus: String,
        /// Worth in millions of credits; `999.0` when unknown.
        worth: f64,
        /// Whether the catalog recognized the species.
        known: bool,
        /// `1` once the organism is fully analysed, else `0`.
        samples: u8,
    },
}

impl Observation {
    /// Creates a raw signal-count observation.
    #[must_use]
    pub const fn raw(count: u32) -> Self {
        Self::RawSignal { count }
    }

    /// Creates a genus observation with the range captured for it.
    #[must_use]
    pub fn genus(genus: impl Into<String>, range: ValueRange) -> Self {
        Self::Genus {
            genus: genus.into(),
            range,
        }
    }

    /// Creates a species observation, resolving worth and genus
    /// against the catalog.
    ///
    /// A species the catalog does not know degrades to a wide-open
    /// worth of `999.0` instead of failing; newly added in-game
    /// content is expected to be missing from the catalog.
    #[must_use]
    pub fn species(catalog: &SpeciesCatalog, full_name: &str, samples: u8) -> Self {
        catalog.find_species(full_name).map_or_else(
            || Self::Species {
                name: full_name.to_string(),
                genus: full_name.to_string(),
                worth: 999.0,
                known: false,
                samples,
            },
            |row| Self::Species {
                name: full_name.to_string(),
                genus: row.genus.to_string(),
                worth: row.net_worth,
                known: true,
                samples,
            },
        )
    }

    /// Returns the genus this observation is evidence for, if any.
    #[must_use]
    pub fn genus_name(&self) -> Option<&str> {
        match self {
            Self::RawSignal { .. } => None,
            Self::Genus { genus, .. } | Self::Species { genus, .. } => Some(genus),
        }
    }

    /// Returns the worth range this observation pins down.
    ///
    /// `None` for raw signals: their range depends on the body and has
    /// to be computed anonymously at valuation time.
    #[must_use]
    pub fn value_range(&self) -> Option<ValueRange> {
        match self {
            Self::RawSignal { .. } => None,
            Self::Genus { range, .. } => Some(*range),
            Self::Species { worth, .. } => Some(ValueRange::exact(*worth)),
        }
    }

    /// Returns true once the organism is fully analysed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Species { samples: 1, .. })
    }

    /// Display color per confidence level.
    #[must_use]
    pub const fn display_color(&self) -> &'static str {
        match self {
            Self::RawSignal { .. } => "black",
            Self::Genus { .. } => "blue",
            Self::Species { .. } => "green",
        }
    }

    /// One-line display text per confidence level.
    #[must_use]
    pub fn display_string(&self) -> String {
        match self {
            Self::RawSignal { count } => format!("({count} bios)"),
            Self::Genus { genus, range } => {
                if range.is_unknown() {
                    format!("{genus} (?)")
                } else if range.is_exact() {
                    format!("{genus} ({:.0} M)", range.min)
                } else {
                    format!("{genus} ({:.0}-{:.0} M)", range.min, range.max)
                }
            },
            Self::Species {
                name, worth, known, ..
            } => {
                if *known {
                    format!("{name} ({worth:.0} M)")
                } else {
                    format!("{name} ? ({worth:.0} M)")
                }
            },
        }
    }
}
