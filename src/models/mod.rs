//! Data models for biosurvey.
//!
//! This module contains the core data structures used throughout the
//! system: planetary bodies, organism observations, worth ranges, and
//! the journal event records the tracker consumes.

mod body;
mod events;
mod observation;
mod value_range;

pub use body::Body;
pub use events::{
    BIOLOGICAL_SIGNAL, CodexEntryEvent, FsdJumpEvent, FssBodySignalsEvent, GasShare, GenusEntry,
    JournalEvent, ORGANIC_STRUCTURES, SaaSignalsFoundEvent, ScanEvent, ScanOrganicEvent,
    SignalEntry,
};
pub use observation::Observation;
pub use value_range::ValueRange;
