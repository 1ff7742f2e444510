//! Survey services.
//!
//! Services orchestrate the models, catalog and ledger into the
//! per-system event loop and its snapshot persistence.

mod persistence;
mod tracker;

pub use tracker::{BodySummary, EntrySummary, SystemTracker};
