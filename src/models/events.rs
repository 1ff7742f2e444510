//! Journal event records consumed by the tracker.
//!
//! Records are deserialized straight from journal lines; only the
//! fields the survey consumes are typed, everything else rides along
//! in the `extra` bags where kept at all.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Signal type marking biological presences in `FSSBodySignals`.
///
/// The trailing semicolon is part of the journal identifier.
pub const BIOLOGICAL_SIGNAL: &str = "$SAA_SignalType_Biological;";

/// Codex subcategory for organic structures.
pub const ORGANIC_STRUCTURES: &str = "$Codex_SubCategory_Organic_Structures;";

/// Arrival in a new star system; all per-body state becomes stale.
#[derive(Debug, Clone, Deserialize)]
pub struct FsdJumpEvent {
    /// Name of the system jumped to.
    #[serde(rename = "StarSystem")]
    pub star_system: String,
}

/// One gas entry of an atmosphere composition.
#[derive(Debug, Clone, Deserialize)]
pub struct GasShare {
    /// Gas name, e.g. `"CarbonDioxide"`.
    #[serde(rename = "Name")]
    pub name: String,
}

/// Full Spectrum Scanner identification of a body.
///
/// ```json
/// { "event":"Scan", "BodyName":"Stock 1 Sector AW-J b10-0 3", "BodyID":8,
///   "TerraformState":"", "PlanetClass":"Icy body",
///   "AtmosphereComposition":[ { "Name":"Neon", "Percent":100.0 } ],
///   "Volcanism":"", "SurfaceGravity":3.294706, "SurfaceTemperature":33.784779,
///   "Periapsis":162.693849, "WasDiscovered":true, "WasMapped":false }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ScanEvent {
    /// Body identifier within the system.
    #[serde(rename = "BodyID")]
    pub body_id: u64,
    /// Full body name.
    #[serde(rename = "BodyName")]
    pub body_name: String,
    /// Planet class, absent for stars and belt clusters.
    #[serde(rename = "PlanetClass")]
    pub planet_class: Option<String>,
    /// Atmosphere composition entries.
    #[serde(rename = "AtmosphereComposition")]
    pub atmosphere_composition: Option<Vec<GasShare>>,
    /// Volcanism description; an empty string means none.
    #[serde(rename = "Volcanism")]
    pub volcanism: Option<String>,
    /// Surface gravity in m/s².
    #[serde(rename = "SurfaceGravity")]
    pub surface_gravity: Option<f64>,
    /// Surface temperature in kelvin.
    #[serde(rename = "SurfaceTemperature")]
    pub surface_temperature: Option<f64>,
    /// Orbital periapsis.
    #[serde(rename = "Periapsis")]
    pub periapsis: Option<f64>,
    /// Terraform state; an empty string means not terraformable.
    #[serde(rename = "TerraformState")]
    pub terraform_state: Option<String>,
    /// Whether someone discovered this body before.
    #[serde(rename = "WasDiscovered")]
    pub was_discovered: Option<bool>,
    /// Whether someone mapped this body before.
    #[serde(rename = "WasMapped")]
    pub was_mapped: Option<bool>,
    /// Remaining journal fields, kept for display only.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One signal entry of an `FSSBodySignals` event.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalEntry {
    /// Signal type identifier.
    #[serde(rename = "Type")]
    pub signal_type: String,
    /// Number of signals of this type.
    #[serde(rename = "Count")]
    pub count: u32,
}

/// Full Spectrum Scanner signal counts for a body.
#[derive(Debug, Clone, Deserialize)]
pub struct FssBodySignalsEvent {
    /// Body identifier within the system.
    #[serde(rename = "BodyID")]
    pub body_id: u64,
    /// Full body name.
    #[serde(rename = "BodyName")]
    pub body_name: String,
    /// Signal entries by type.
    #[serde(rename = "Signals")]
    pub signals: Vec<SignalEntry>,
}

impl FssBodySignalsEvent {
    /// Returns the number of biological signals, `0` when none were
    /// reported.
    #[must_use]
    pub fn biological_count(&self) -> u32 {
        self.signals
            .iter()
            .find(|s| s.signal_type == BIOLOGICAL_SIGNAL)
            .map_or(0, |s| s.count)
    }
}

/// One genus entry of an `SAASignalsFound` event.
#[derive(Debug, Clone, Deserialize)]
pub struct GenusEntry {
    /// Localised genus name, e.g. `"Bacterium"`.
    #[serde(rename = "Genus_Localised")]
    pub genus: String,
}

/// Detailed surface scan listing every genus present on a body.
#[derive(Debug, Clone, Deserialize)]
pub struct SaaSignalsFoundEvent {
    /// Body identifier within the system.
    #[serde(rename = "BodyID")]
    pub body_id: u64,
    /// Full body name.
    #[serde(rename = "BodyName")]
    pub body_name: String,
    /// Genus list; absent on scans without biological content.
    #[serde(rename = "Genuses")]
    pub genuses: Option<Vec<GenusEntry>>,
}

/// Close-up organic scan from the suit or SRV.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanOrganicEvent {
    /// Body identifier within the system.
    #[serde(rename = "Body")]
    pub body_id: u64,
    /// Localised species name, e.g. `"Concha Biconcavis"`.
    #[serde(rename = "Species_Localised")]
    pub species: String,
    /// `"Log"`, `"Sample"` or `"Analyse"`; the last one marks full
    /// confirmation.
    #[serde(rename = "ScanType")]
    pub scan_type: String,
}

/// Codex discovery, emitted when the ship's composition scanner
/// identifies something.
#[derive(Debug, Clone, Deserialize)]
pub struct CodexEntryEvent {
    /// Body identifier within the system.
    #[serde(rename = "BodyID")]
    pub body_id: u64,
    /// Localised entry name, including a color-variant suffix, e.g.
    /// `"Bacterium Acies - Aquamarine"`.
    #[serde(rename = "Name_Localised")]
    pub name: String,
    /// Codex subcategory identifier.
    #[serde(rename = "SubCategory")]
    pub sub_category: String,
}

/// A parsed journal event the tracker knows how to apply.
#[derive(Debug, Clone)]
pub enum JournalEvent {
    /// Jump into a new star system.
    FsdJump(FsdJumpEvent),
    /// Body identification scan.
    Scan(ScanEvent),
    /// Per-body signal counts.
    FssBodySignals(FssBodySignalsEvent),
    /// Genus list from a detailed surface scan.
    SaaSignalsFound(SaaSignalsFoundEvent),
    /// Close-up organic scan.
    ScanOrganic(ScanOrganicEvent),
    /// Codex discovery.
    CodexEntry(CodexEntryEvent),
}

impl JournalEvent {
    /// Parses a raw journal record.
    ///
    /// Returns `Ok(None)` for event types the survey does not consume.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] when the record has no
    /// `event` field, or when a consumed event type is missing a
    /// required field.
    pub fn from_value(value: &Value) -> crate::Result<Option<Self>> {
        let Some(event) = value.get("event").and_then(Value::as_str) else {
            return Err(crate::Error::InvalidInput(
                "journal record without an event field".to_string(),
            ));
        };

        fn decode<T: serde::de::DeserializeOwned>(event: &str, value: &Value) -> crate::Result<T> {
            serde_json::from_value(value.clone())
                .map_err(|e| crate::Error::InvalidInput(format!("malformed {event} record: {e}")))
        }

        let parsed = match event {
            "FSDJump" => Self::FsdJump(decode(event, value)?),
            "Scan" => Self::Scan(decode(event, value)?),
            "FSSBodySignals" => Self::FssBodySignals(decode(event, value)?),
            "SAASignalsFound" => Self::SaaSignalsFound(decode(event, value)?),
            "ScanOrganic" => Self::ScanOrganic(decode(event, value)?),
            "CodexEntry" => Self::CodexEntry(decode(event, value)?),
            _ => return Ok(None),
        };
        Ok(Some(parsed))
    }
}
