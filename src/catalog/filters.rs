//! Planet-acceptance predicates.

use crate::models::Body;

/// A reusable boolean predicate over a body's physical attributes.
///
/// Every predicate passes when the attribute it tests is unknown.
/// Missing data must never hide a possible organism; only positively
/// contradicting data excludes one.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Gas must be present in the atmosphere composition.
    Atmosphere(&'static str),
    /// Keyword must occur in the volcanism text, or `"None"` paired
    /// with an empty text. Matching is plain case-sensitive substring
    /// containment.
    Volcanism(&'static str),
    /// Substring of the planet class string.
    PlanetClass(&'static str),
    /// Surface temperature in `[min, max)` kelvin.
    Temperature(f64, f64),
    /// Surface gravity in `[min, max)` g.
    Gravity(f64, f64),
    /// Orbital periapsis in `[min, max)`.
    ///
    /// Periapsis stands in for the distance from the orbited body,
    /// which only holds up for bodies orbiting a star directly; moons
    /// and co-orbiting pairs would need a walk over the parent chain.
    Distance(f64, f64),
}

impl Filter {
    /// Evaluates the predicate against a body.
    #[must_use]
    pub fn accepts(&self, body: &Body) -> bool {
        match self {
            Self::Atmosphere(gas) => body
                .atmosphere_gases
                .as_ref()
                .is_none_or(|gases| gases.iter().any(|g| g == gas)),
            Self::Volcanism(keyword) => body
                .volcanism
                .as_deref()
                .is_none_or(|text| text.contains(keyword) || (*keyword == "None" && text.is_empty())),
            Self::PlanetClass(class) => body
                .planet_class
                .as_deref()
                .is_none_or(|c| c.contains(class)),
            Self::Temperature(min, max) => half_open(body.surface_temperature, *min, *max),
            Self::Gravity(min, max) => half_open(body.surface_gravity, *min, *max),
            Self::Distance(min, max) => half_open(body.periapsis, *min, *max),
        }
    }
}

fn half_open(value: Option<f64>, min: f64, max: f64) -> bool {
    value.is_none_or(|v| min <= v && v < max)
}
