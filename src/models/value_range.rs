//! Worth ranges, in millions of credits.

use serde::{Deserialize, Serialize};

/// An estimated worth range in millions of credits.
///
/// Ranges narrow as evidence about a body accumulates; an exact worth
/// is represented as `min == max`. Two sentinel ranges communicate the
/// outcome of a catalog lookup without an error path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl ValueRange {
    /// Sentinel: the organism is known but cannot grow on this body.
    pub const CANNOT_GROW: Self = Self { min: 0.0, max: 0.0 };

    /// Sentinel: the organism is unknown to the catalog, assume wide
    /// uncertainty.
    pub const UNKNOWN: Self = Self {
        min: 1.0,
        max: 999.0,
    };

    /// Creates a range from explicit bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Creates a degenerate range for an exactly known worth.
    #[must_use]
    pub const fn exact(worth: f64) -> Self {
        Self {
            min: worth,
            max: worth,
        }
    }

    /// Returns true if the bounds coincide.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_exact(&self) -> bool {
        self.min == self.max
    }

    /// Returns true if this is the unknown-organism sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_range() {
        let range = ValueRange::exact(12.9);
        assert!(range.is_exact());
        assert!(!range.is_unknown());
    }

    #[test]
    fn test_sentinels_are_distinct() {
        assert_ne!(ValueRange::CANNOT_GROW, ValueRange::UNKNOWN);
        assert!(ValueRange::CANNOT_GROW.is_exact());
        assert!(ValueRange::UNKNOWN.is_unknown());
    }
}
