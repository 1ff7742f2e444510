//! Per-system survey state and event dispatch.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::catalog::SpeciesCatalog;
use crate::ledger::ObservationLedger;
use crate::models::{
    Body, CodexEntryEvent, FsdJumpEvent, FssBodySignalsEvent, JournalEvent, Observation,
    ORGANIC_STRUCTURES, SaaSignalsFoundEvent, ScanEvent, ScanOrganicEvent,
};
use crate::{report, valuation};

/// Tracks every body and its biological evidence for the current star
/// system.
///
/// Events are processed to completion one at a time; the tracker is
/// the single writer for all per-body state it owns. The catalog is
/// shared and read-only.
#[derive(Debug)]
pub struct SystemTracker {
    pub(crate) catalog: &'static SpeciesCatalog,
    pub(crate) current_system: String,
    pub(crate) bodies: BTreeMap<u64, Body>,
    pub(crate) ledgers: BTreeMap<u64, ObservationLedger>,
}

impl Default for SystemTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemTracker {
    /// Creates a tracker over the built-in catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(SpeciesCatalog::builtin())
    }

    /// Creates a tracker over an explicit catalog.
    #[must_use]
    pub const fn with_catalog(catalog: &'static SpeciesCatalog) -> Self {
        Self {
            catalog,
            current_system: String::new(),
            bodies: BTreeMap::new(),
            ledgers: BTreeMap::new(),
        }
    }

    /// Name of the system currently surveyed.
    #[must_use]
    pub fn current_system(&self) -> &str {
        &self.current_system
    }

    /// Known bodies, keyed by body identifier.
    #[must_use]
    pub const fn bodies(&self) -> &BTreeMap<u64, Body> {
        &self.bodies
    }

    /// Observation ledgers, keyed by body identifier.
    #[must_use]
    pub const fn ledgers(&self) -> &BTreeMap<u64, ObservationLedger> {
        &self.ledgers
    }

    /// Parses and applies one raw journal record.
    ///
    /// Returns whether the record was consumed; event types the survey
    /// does not care about are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] when the record is not a
    /// journal event, or a consumed event type misses required fields.
    pub fn apply_record(&mut self, record: &Value) -> crate::Result<bool> {
        match JournalEvent::from_value(record)? {
            Some(event) => {
                self.apply(event);
                Ok(true)
            },
            None => Ok(false),
        }
    }

    /// Applies one parsed journal event.
    pub fn apply(&mut self, event: JournalEvent) {
        match event {
            JournalEvent::FsdJump(jump) => self.on_system_jump(jump),
            JournalEvent::Scan(scan) => self.on_body_scan(scan),
            JournalEvent::FssBodySignals(signals) => self.on_signal_count(&signals),
            JournalEvent::SaaSignalsFound(scan) => self.on_detail_scan(scan),
            JournalEvent::ScanOrganic(organic) => self.on_organic(&organic),
            JournalEvent::CodexEntry(entry) => self.on_codex_entry(&entry),
        }
    }

    /// Arrival in a new system invalidates all per-body state.
    fn on_system_jump(&mut self, jump: FsdJumpEvent) {
        tracing::debug!(system = %jump.star_system, "entering system");
        self.current_system = jump.star_system;
        self.bodies.clear();
        self.ledgers.clear();
    }

    /// A body identification scan creates or enriches the body record.
    fn on_body_scan(&mut self, scan: ScanEvent) {
        let body = Body::from(scan);
        let id = body.id();
        match self.bodies.entry(id) {
            std::collections::btree_map::Entry::Occupied(mut entry) => {
                entry.get_mut().absorb(body);
            },
            std::collections::btree_map::Entry::Vacant(entry) => {
                entry.insert(body);
            },
        }
    }

    /// A signal-count scan records an anonymous raw observation.
    fn on_signal_count(&mut self, signals: &FssBodySignalsEvent) {
        let count = signals.biological_count();
        if count == 0 {
            return;
        }
        tracing::warn!(body = %signals.body_name, count, "found biological signals");

        // the signal count may arrive before the body description does
        self.bodies
            .entry(signals.body_id)
            .or_insert_with(|| Body::stub(signals.body_id, signals.body_name.clone()));
        self.ledgers
            .entry(signals.body_id)
            .or_default()
            .emplace(Observation::raw(count));
    }

    /// A detailed surface scan replaces the ledger with the full genus
    /// list, unless richer evidence is already recorded.
    fn on_detail_scan(&mut self, scan: SaaSignalsFoundEvent) {
        let Some(genuses) = scan.genuses else {
            // not a scan we are interested in
            return;
        };

        let body = self
            .bodies
            .entry(scan.body_id)
            .or_insert_with(|| Body::stub(scan.body_id, scan.body_name.clone()));

        let entries: Vec<Observation> = genuses
            .iter()
            .map(|entry| {
                let range =
                    valuation::value_range_for_genus(self.catalog, &entry.genus, Some(body));
                Observation::genus(entry.genus.clone(), range)
            })
            .collect();

        let ledger = self.ledgers.entry(scan.body_id).or_default();
        if !ledger.replace_with_genus_list(entries) {
            tracing::info!(body = %body.display_name(), "ignoring genus survey, exact species already recorded");
        }
    }

    /// A close-up organic scan pins the exact species down.
    fn on_organic(&mut self, organic: &ScanOrganicEvent) {
        let samples = u8::from(organic.scan_type == "Analyse");
        let observation = Observation::species(self.catalog, &organic.species, samples);
        self.ledgers
            .entry(organic.body_id)
            .or_default()
            .emplace(observation);
    }

    /// A codex discovery of an organic structure identifies a species
    /// remotely, without samples.
    fn on_codex_entry(&mut self, entry: &CodexEntryEvent) {
        if entry.sub_category != ORGANIC_STRUCTURES {
            return;
        }
        tracing::info!(target = %entry.name, "ship identified organic target");

        let Some((genus, species)) = self.catalog.strip_variant(&entry.name) else {
            tracing::warn!(name = %entry.name, "codex name cannot be split into genus and species");
            return;
        };
        let full_name = format!("{genus} {species}");
        self.ledgers
            .entry(entry.body_id)
            .or_default()
            .emplace(Observation::species(self.catalog, &full_name, 0));
    }

    /// Renders the current system as displayable per-body summaries.
    ///
    /// Bodies whose discovery value stays below `min_listed_value` and
    /// which carry no observations are not worth listing and skipped.
    #[must_use]
    pub fn summaries(&self, min_listed_value: f64) -> Vec<BodySummary> {
        let no_observations = ObservationLedger::new();
        self.bodies
            .iter()
            .filter_map(|(id, body)| {
                let ledger = self.ledgers.get(id).unwrap_or(&no_observations);
                if !report::worth_listing(body, ledger, min_listed_value) {
                    return None;
                }
                let name = body.display_name();
                let name = name
                    .strip_prefix(self.current_system.as_str())
                    .unwrap_or(&name)
                    .to_string();
                Some(BodySummary {
                    body_id: *id,
                    name,
                    color: report::display_color(body),
                    mapped: body.is_mapped(),
                    value_range: report::value_range_string(self.catalog, body, ledger),
                    entries: ledger
                        .entries()
                        .iter()
                        .map(|entry| EntrySummary {
                            text: entry.display_string(),
                            color: entry.display_color(),
                            emphasized: entry.is_complete(),
                        })
                        .collect(),
                })
            })
            .collect()
    }
}

/// One displayable row of the system summary.
#[derive(Debug, Clone)]
pub struct BodySummary {
    /// Body identifier within the system.
    pub body_id: u64,
    /// Body name with the system prefix stripped.
    pub name: String,
    /// Display color for the body name.
    pub color: &'static str,
    /// Whether somebody already mapped the body.
    pub mapped: bool,
    /// Rendered total worth range.
    pub value_range: String,
    /// One summary per recorded observation.
    pub entries: Vec<EntrySummary>,
}

/// One displayable observation of a body summary.
#[derive(Debug, Clone)]
pub struct EntrySummary {
    /// Rendered observation text.
    pub text: String,
    /// Display color for the observation.
    pub color: &'static str,
    /// Whether the entry should render emphasized (fully analysed).
    pub emphasized: bool,
}
