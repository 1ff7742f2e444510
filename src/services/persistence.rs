//! Snapshot persistence for the system tracker.
//!
//! The snapshot keeps bodies as their typed records and ledgers in the
//! per-body wire form; ledger entries are resolved against the catalog
//! and their associated body again on load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::SpeciesCatalog;
use crate::ledger::{ObservationLedger, WireLedger};
use crate::models::Body;

use super::SystemTracker;

/// On-disk snapshot of one tracked system.
#[derive(Debug, Serialize, Deserialize)]
struct StateFile {
    current_system: String,
    bodies: Vec<Body>,
    scan_results: Vec<WireLedger>,
}

fn io_failed(operation: &str) -> impl Fn(std::io::Error) -> crate::Error + '_ {
    move |e| crate::Error::OperationFailed {
        operation: operation.to_string(),
        cause: e.to_string(),
    }
}

impl SystemTracker {
    /// Writes the tracker state to a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OperationFailed`] when serializing or
    /// writing the snapshot fails.
    pub fn save_state(&self, path: &Path) -> crate::Result<()> {
        let state = StateFile {
            current_system: self.current_system.clone(),
            bodies: self.bodies.values().cloned().collect(),
            scan_results: self
                .ledgers
                .iter()
                .map(|(body_id, ledger)| ledger.to_wire(*body_id))
                .collect(),
        };
        let json =
            serde_json::to_string_pretty(&state).map_err(|e| crate::Error::OperationFailed {
                operation: "serialize_state".to_string(),
                cause: e.to_string(),
            })?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_failed("create_state_dir"))?;
            }
        }
        fs::write(path, json).map_err(io_failed("write_state"))
    }

    /// Restores a tracker from a snapshot file.
    ///
    /// Bodies load first so ledger entries can resolve their worth
    /// against the body they belong to; a ledger without a matching
    /// body resolves against an attribute-less stand-in.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OperationFailed`] when the file cannot
    /// be read and [`crate::Error::InvalidInput`] when it does not
    /// parse. Unrecognized ledger entry names do not fail; they
    /// degrade per the wire-format rules.
    pub fn load_state(catalog: &'static SpeciesCatalog, path: &Path) -> crate::Result<Self> {
        let contents = fs::read_to_string(path).map_err(io_failed("read_state"))?;
        let state: StateFile = serde_json::from_str(&contents)
            .map_err(|e| crate::Error::InvalidInput(format!("malformed state file: {e}")))?;

        let mut tracker = Self::with_catalog(catalog);
        tracker.current_system = state.current_system;
        for body in state.bodies {
            tracker.bodies.insert(body.id(), body);
        }

        let unknown_body = Body::default();
        for wire in state.scan_results {
            let body = tracker.bodies.get(&wire.body_id).unwrap_or(&unknown_body);
            let ledger = ObservationLedger::from_wire(catalog, &wire, body);
            tracing::info!(
                body_id = wire.body_id,
                entries = ledger.len(),
                "loaded biological scan results"
            );
            tracker.ledgers.insert(wire.body_id, ledger);
        }
        Ok(tracker)
    }
}
