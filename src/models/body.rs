//! Planetary body records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::events::ScanEvent;

/// One standard gravity in m/s².
///
/// Journal scans report surface gravity in m/s²; the catalog's gravity
/// bounds are denominated in g, so scans are normalized on ingest.
pub(crate) const STANDARD_GRAVITY: f64 = 9.80665;

/// A single planetary or lunar body, assembled from scan events.
///
/// Every physical attribute is optional. A missing attribute never
/// excludes an organism: acceptance predicates treat `None` as a pass,
/// favoring showing a possible organism over hiding one. Fields that
/// the predicates do not consult are kept verbatim in `extra` for
/// display and forward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
    /// Journal body identifier, unique within a star system.
    pub body_id: Option<u64>,
    /// Full body name, including the system prefix.
    pub name: Option<String>,
    /// Planet class string, e.g. `"Rocky body"`.
    pub planet_class: Option<String>,
    /// Gas names present in the atmosphere composition.
    pub atmosphere_gases: Option<Vec<String>>,
    /// Free-text volcanism description; empty means no volcanism.
    pub volcanism: Option<String>,
    /// Surface gravity in g.
    pub surface_gravity: Option<f64>,
    /// Surface temperature in kelvin.
    pub surface_temperature: Option<f64>,
    /// Orbital periapsis, used as a distance proxy by the catalog.
    pub periapsis: Option<f64>,
    /// Terraform state string; empty means not terraformable.
    pub terraform_state: Option<String>,
    /// Whether the body was already discovered by someone.
    pub was_discovered: Option<bool>,
    /// Whether the body was already mapped by someone.
    pub was_mapped: Option<bool>,
    /// Raw journal fields not consulted by any predicate.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Body {
    /// Creates a minimal body from an event that precedes the full
    /// scan of the body it mentions.
    #[must_use]
    pub fn stub(body_id: u64, name: impl Into<String>) -> Self {
        Self {
            body_id: Some(body_id),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns the body identifier, `0` when none was recorded.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.body_id.unwrap_or(0)
    }

    /// Returns a printable name for the body.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.name, self.body_id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("# {id}"),
            (None, None) => "(unnamed body)".to_string(),
        }
    }

    /// Returns true if the body has already been mapped.
    ///
    /// What is actually wanted is "has first footfall", but the journal
    /// does not record that; mapped status is the closest available
    /// signal.
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        if self.was_discovered == Some(false) {
            // not discovered? can't be mapped or explored yet
            return false;
        }
        self.was_mapped.unwrap_or(false)
    }

    /// Returns true if the body is terraformable.
    #[must_use]
    pub fn is_terraformable(&self) -> bool {
        self.terraform_state.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Folds a newer scan of the same body into this record.
    ///
    /// Attributes already known are kept when the newer scan omits
    /// them: a discovered body is only ever enriched, never replaced
    /// with less information.
    pub fn absorb(&mut self, newer: Self) {
        fn keep<T>(slot: &mut Option<T>, newer: Option<T>) {
            if newer.is_some() {
                *slot = newer;
            }
        }

        keep(&mut self.body_id, newer.body_id);
        keep(&mut self.name, newer.name);
        keep(&mut self.planet_class, newer.planet_class);
        keep(&mut self.atmosphere_gases, newer.atmosphere_gases);
        keep(&mut self.volcanism, newer.volcanism);
        keep(&mut self.surface_gravity, newer.surface_gravity);
        keep(&mut self.surface_temperature, newer.surface_temperature);
        keep(&mut self.periapsis, newer.periapsis);
        keep(&mut self.terraform_state, newer.terraform_state);
        keep(&mut self.was_discovered, newer.was_discovered);
        keep(&mut self.was_mapped, newer.was_mapped);
        self.extra.extend(newer.extra);
    }
}

impl From<ScanEvent> for Body {
    fn from(scan: ScanEvent) -> Self {
        Self {
            body_id: Some(scan.body_id),
            name: Some(scan.body_name),
            planet_class: scan.planet_class,
            atmosphere_gases: scan
                .atmosphere_composition
                .map(|gases| gases.into_iter().map(|g| g.name).collect()),
            volcanism: scan.volcanism,
            surface_gravity: scan.surface_gravity.map(|g| g / STANDARD_GRAVITY),
            surface_temperature: scan.surface_temperature,
            periapsis: scan.periapsis,
            terraform_state: scan.terraform_state,
            was_discovered: scan.was_discovered,
            was_mapped: scan.was_mapped,
            extra: scan.extra,
        }
    }
}
