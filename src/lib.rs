//! # Biosurvey
//!
//! Exobiology survey ledger and valuation engine.
//!
//! Biosurvey classifies partially-observed organisms on planetary bodies
//! and estimates their monetary worth from incomplete evidence gathered
//! over time. Observations arrive at three confidence levels (a raw
//! signal count, a genus sighting, an exact species scan) and are merged
//! into a per-body ledger that never loses previously earned certainty,
//! while the valuation engine narrows a worth range as evidence
//! accumulates.
//!
//! ## Example
//!
//! ```rust
//! use biosurvey::{Body, SpeciesCatalog, valuation};
//!
//! let body = Body {
//!     planet_class: Some("Rocky body".to_string()),
//!     ..Body::default()
//! };
//! let range = valuation::value_range_for_genus(
//!     SpeciesCatalog::builtin(),
//!     "Stratum",
//!     Some(&body),
//! );
//! assert!(range.min > 0.0);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod catalog;
pub mod config;
pub mod ledger;
pub mod models;
pub mod report;
pub mod services;
pub mod valuation;

// Re-exports for convenience
pub use catalog::{AcceptanceRule, Filter, Species, SpeciesCatalog};
pub use config::BiosurveyConfig;
pub use ledger::ObservationLedger;
pub use models::{Body, JournalEvent, Observation, ValueRange};
pub use services::SystemTracker;

/// Error type for biosurvey operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait
/// implementations. The classification and valuation core is
/// infallible by design: unknown organisms and missing attributes
/// degrade to conservative sentinel values instead of failing, so
/// errors only surface from the ambient edges of the crate.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Malformed journal records, unparseable state or config files |
/// | `OperationFailed` | State-file or config-file I/O fails |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A journal record has no `event` field
    /// - A known event record is missing a required field
    /// - A persisted state file or config file fails to parse
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Filesystem I/O on the state file fails
    /// - The config file cannot be read
    /// - Serializing a snapshot fails
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for biosurvey operations.
pub type Result<T> = std::result::Result<T, Error>;
