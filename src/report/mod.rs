//! Body-level valuation summary.
//!
//! Composes a body's intrinsic discovery bonus with the summed worth
//! ranges of its recorded observations into a displayable range.

use crate::catalog::SpeciesCatalog;
use crate::ledger::ObservationLedger;
use crate::models::{Body, Observation, ValueRange};
use crate::valuation;

/// Baseline exploration payout for a body, in millions of credits,
/// independent of any organisms found on it.
///
/// A first mapping doubles-and-then-some the bonus factor; the
/// class/terraform factors are fixed business constants.
#[must_use]
pub fn discovery_value(body: &Body) -> f64 {
    let discovery_bonus = if body.is_mapped() { 1.0 } else { 2.88 };
    let terraform = body.is_terraformable();

    let class_factor = match body.planet_class.as_deref().unwrap_or("") {
        "Water world" => {
            if terraform {
                1.119
            } else {
                0.416
            }
        },
        "Earthlike body" => 1.126,
        "Ammonia world" => 0.598,
        "High metal content body" => {
            if terraform {
                0.683
            } else {
                0.059
            }
        },
        "Rocky body" => {
            if terraform {
                0.540
            } else {
                0.001
            }
        },
        _ => 0.0,
    };
    discovery_bonus * class_factor
}

/// Renders the total worth range of a body and its recorded
/// observations.
///
/// Organism worth is multiplied by the first-find factor of `5` while
/// nobody has mapped the body. Raw signal counts carry no range of
/// their own and are revalued anonymously against the catalog at
/// render time. Values are rounded to whole millions for display.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn value_range_string(catalog: &SpeciesCatalog, body: &Body, ledger: &ObservationLedger) -> String {
    let mut min_sum = discovery_value(body);
    let mut max_sum = min_sum;
    // first finder's fee
    let factor = if body.is_mapped() { 1.0 } else { 5.0 };

    for entry in ledger.entries() {
        let range = match entry {
            Observation::RawSignal { count } => {
                valuation::value_range_anonymous(catalog, body, *count as usize)
            },
            other => other.value_range().unwrap_or(ValueRange::CANNOT_GROW),
        };
        min_sum += range.min * factor;
        max_sum += range.max * factor;
    }

    if min_sum == max_sum {
        format!("[{min_sum:.0} M]")
    } else {
        format!("[{min_sum:.0}-{max_sum:.0} M]")
    }
}

/// Display base color for a body, from its physical properties.
#[must_use]
pub fn display_color(body: &Body) -> &'static str {
    let is_water = body.planet_class.as_deref() == Some("Water world");
    if body.is_terraformable() {
        return if is_water { "cyan" } else { "saddle brown" };
    }
    if body.planet_class.as_deref() == Some("Earthlike body") {
        return "forest green";
    }
    if is_water { "blue" } else { "black" }
}

/// Returns true if the body is interesting enough to list: either its
/// discovery value reaches the threshold, or organisms were recorded.
#[must_use]
pub fn worth_listing(body: &Body, ledger: &ObservationLedger, min_value: f64) -> bool {
    discovery_value(body) >= min_value || !ledger.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn body(class: &str, terraform: &str, mapped: bool) -> Body {
        Body {
            planet_class: Some(class.to_string()),
            terraform_state: Some(terraform.to_string()),
            was_discovered: Some(true),
            was_mapped: Some(mapped),
            ..Body::default()
        }
    }

    #[test]
    fn test_discovery_value_of_nothing() {
        assert!((discovery_value(&Body::default()) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_discovery_value_inequalities() {
        assert!(discovery_value(&body("Rocky body", "", false)) < 1.0);
        assert!(discovery_value(&body("Rocky body", "Terraformable", false)) > 1.0);
        assert!(discovery_value(&body("Rocky body", "Terraformable", true)) < 1.0);
        assert!(discovery_value(&body("Earthlike body", "", true)) > 1.0);
        assert!(
            discovery_value(&body("Earthlike body", "", true))
                < discovery_value(&body("Earthlike body", "", false))
        );
    }

    #[test_case("Water world", "", 0.416; "water")]
    #[test_case("Water world", "Terraformable", 1.119; "water terraformable")]
    #[test_case("Earthlike body", "", 1.126; "earthlike")]
    #[test_case("Ammonia world", "", 0.598; "ammonia")]
    #[test_case("High metal content body", "", 0.059; "high metal")]
    #[test_case("High metal content body", "Terraformable", 0.683; "high metal terraformable")]
    #[test_case("Rocky body", "", 0.001; "rocky")]
    #[test_case("Rocky body", "Terraformable", 0.540; "rocky terraformable")]
    #[test_case("Icy body", "", 0.0; "icy is worthless")]
    fn test_discovery_value_table(class: &str, terraform: &str, factor: f64) {
        let mapped = discovery_value(&body(class, terraform, true));
        let unmapped = discovery_value(&body(class, terraform, false));
        assert!((mapped - factor).abs() < 1e-9);
        assert!((unmapped - factor * 2.88).abs() < 1e-9);
    }

    #[test]
    fn test_value_range_string_exact_value() {
        let catalog = SpeciesCatalog::builtin();
        let body = body("Icy body", "", true);
        let mut ledger = ObservationLedger::new();
        ledger.emplace(Observation::species(catalog, "Fonticulua Segmentatus", 1));

        // mapped body: no first-find factor, icy discovery is zero
        assert_eq!(value_range_string(catalog, &body, &ledger), "[19 M]");
    }

    #[test]
    fn test_value_range_string_applies_first_find_factor() {
        let catalog = SpeciesCatalog::builtin();
        let body = body("Icy body", "", false);
        let mut ledger = ObservationLedger::new();
        ledger.emplace(Observation::species(catalog, "Fonticulua Segmentatus", 1));

        assert_eq!(value_range_string(catalog, &body, &ledger), "[95 M]");
    }

    #[test]
    fn test_display_color() {
        assert_eq!(display_color(&body("Water world", "", false)), "blue");
        assert_eq!(display_color(&body("Water world", "Terraformable", false)), "cyan");
        assert_eq!(
            display_color(&body("Rocky body", "Terraformable", false)),
            "saddle brown"
        );
        assert_eq!(display_color(&body("Earthlike body", "", false)), "forest green");
        assert_eq!(display_color(&body("Icy body", "", false)), "black");
    }

    #[test]
    fn test_worth_listing() {
        let catalog = SpeciesCatalog::builtin();
        let dull = body("Icy body", "", true);
        let mut ledger = ObservationLedger::new();
        assert!(!worth_listing(&dull, &ledger, 1.0));

        ledger.emplace(Observation::species(catalog, "Bacterium Acies", 0));
        assert!(worth_listing(&dull, &ledger, 1.0));

        let shiny = body("Earthlike body", "", false);
        assert!(worth_listing(&shiny, &ObservationLedger::new(), 1.0));
    }
}
