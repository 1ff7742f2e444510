//! Worth estimation from the species catalog.
//!
//! All functions here are pure, deterministic computations over the
//! immutable catalog; unknown organisms and missing body attributes
//! degrade to sentinel ranges, never to errors.

use crate::catalog::SpeciesCatalog;
use crate::models::{Body, ValueRange};

/// Worth range for one genus, optionally narrowed to a body.
///
/// Takes min/max of `net_worth` over the genus rows the body accepts.
/// A genus the catalog knows but which cannot grow on the body yields
/// [`ValueRange::CANNOT_GROW`]; a genus the catalog does not know at
/// all yields [`ValueRange::UNKNOWN`].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn value_range_for_genus(
    catalog: &SpeciesCatalog,
    genus: &str,
    body: Option<&Body>,
) -> ValueRange {
    let mut min = 999.0_f64;
    let mut max = 0.0_f64;
    let mut genus_known = false;

    for species in catalog.rows() {
        if species.genus != genus {
            continue;
        }
        genus_known = true;
        if let Some(body) = body {
            if !species.can_grow_on(body) {
                continue;
            }
        }
        min = min.min(species.net_worth);
        max = max.max(species.net_worth);
    }

    if min == 999.0 {
        return if genus_known {
            ValueRange::CANNOT_GROW
        } else {
            ValueRange::UNKNOWN
        };
    }
    ValueRange::new(min, max)
}

/// Worth range for `count` unidentified signals on a body.
///
/// Computes per-genus ranges, drops genera that cannot grow here, then
/// selects independently per bound: the lower bound sums the `count`
/// smallest minima, the upper bound sums the `count` largest maxima.
/// The two selections may pick overlapping genus sets; that is part of
/// the estimate's contract, not an oversight. A `count` beyond the
/// number of surviving genera sums them all.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn value_range_anonymous(catalog: &SpeciesCatalog, body: &Body, count: usize) -> ValueRange {
    let mut genus_ranges: Vec<(&str, f64, f64)> = Vec::new();
    for genus in catalog.genera() {
        let range = value_range_for_genus(catalog, genus, Some(body));
        if range.min == 0.0 {
            // genus can not grow on that body
            continue;
        }
        genus_ranges.push((genus, range.min, range.max));
    }

    if genus_ranges.is_empty() {
        return ValueRange::CANNOT_GROW;
    }

    genus_ranges.sort_by(|a, b| a.1.total_cmp(&b.1));
    let min = genus_ranges.iter().take(count).map(|r| r.1).sum();

    genus_ranges.sort_by(|a, b| a.2.total_cmp(&b.2));
    let max = genus_ranges.iter().rev().take(count).map(|r| r.2).sum();

    ValueRange::new(min, max)
}
