//! Species catalog and planet-acceptance rules.
//!
//! The catalog is an immutable, process-wide table of species rows.
//! It is constructed once and handed around by reference; nothing in
//! the crate mutates it after load.

mod data;
mod filters;

pub use filters::Filter;

use once_cell::sync::Lazy;

use crate::models::Body;

/// One alternative group of predicates; all of them must accept.
pub type FilterGroup = Vec<Filter>;

/// Acceptance rule for a species row: OR over AND-groups.
///
/// The rule evaluates to true iff at least one group has all of its
/// predicates accepting. The common case is a single group, i.e. a
/// plain conjunction; species whose habitat allows alternatives (two
/// planet classes, two atmospheres) carry one group per alternative.
/// New composite rules are plain data, no new types involved.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptanceRule {
    groups: Vec<FilterGroup>,
}

impl AcceptanceRule {
    /// A plain conjunction: every predicate must accept.
    ///
    /// An empty predicate list accepts every body.
    #[must_use]
    pub fn all_of(filters: Vec<Filter>) -> Self {
        Self {
            groups: vec![filters],
        }
    }

    /// A disjunction of conjunction groups.
    #[must_use]
    pub const fn any_of(groups: Vec<FilterGroup>) -> Self {
        Self { groups }
    }

    /// Evaluates the rule against a body.
    #[must_use]
    pub fn evaluate(&self, body: &Body) -> bool {
        self.groups
            .iter()
            .any(|group| group.iter().all(|filter| filter.accepts(body)))
    }
}

/// A single catalog row: one species with one acceptance rule.
///
/// Several rows may share a display name when a species grows under
/// unrelated conditions, occasionally with a different worth (Osseus
/// Spiralis, Recepta Umbrux). Rows are never merged; lookups by
/// display name resolve to the first row.
#[derive(Debug, Clone)]
pub struct Species {
    /// Genus the species belongs to.
    pub genus: &'static str,
    /// Species name within the genus.
    pub species: &'static str,
    /// Net worth in millions of credits.
    pub net_worth: f64,
    /// Where the species can grow.
    pub rule: AcceptanceRule,
}

impl Species {
    /// Full display name, `"<genus> <species>"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.genus, self.species)
    }

    /// Returns true if this species can grow on the given body.
    #[must_use]
    pub fn can_grow_on(&self, body: &Body) -> bool {
        self.rule.evaluate(body)
    }
}

/// The immutable species table.
#[derive(Debug)]
pub struct SpeciesCatalog {
    rows: Vec<Species>,
}

static BUILTIN: Lazy<SpeciesCatalog> = Lazy::new(|| SpeciesCatalog {
    rows: data::builtin_rows(),
});

impl SpeciesCatalog {
    /// Returns the built-in catalog, constructed on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Constructs a catalog from explicit rows.
    #[must_use]
    pub const fn from_rows(rows: Vec<Species>) -> Self {
        Self { rows }
    }

    /// All rows, in catalog order.
    #[must_use]
    pub fn rows(&self) -> &[Species] {
        &self.rows
    }

    /// Distinct genus names, in first-appearance order.
    #[must_use]
    pub fn genera(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.genus) {
                seen.push(row.genus);
            }
        }
        seen
    }

    /// Returns true if the name matches a catalog genus.
    #[must_use]
    pub fn is_genus(&self, name: &str) -> bool {
        self.rows.iter().any(|row| row.genus == name)
    }

    /// Looks a species up by its full display name; the first matching
    /// row wins.
    #[must_use]
    pub fn find_species(&self, display_name: &str) -> Option<&Species> {
        self.rows
            .iter()
            .find(|row| row.display_name() == display_name)
    }

    /// Splits a full variant name like `"Bacterium Acies - Aquamarine"`
    /// into its genus and species parts.
    ///
    /// The color-variant suffix is dropped, then the remainder is
    /// resolved against the catalog; names the catalog does not know
    /// fall back to a whitespace split over the first two tokens.
    /// Returns `None` only when even the fallback has too few tokens.
    #[must_use]
    pub fn strip_variant(&self, variant_name: &str) -> Option<(String, String)> {
        let species_name = variant_name.split(" - ").next().unwrap_or(variant_name);
        if let Some(row) = self.find_species(species_name) {
            return Some((row.genus.to_string(), row.species.to_string()));
        }
        let mut tokens = variant_name.split_whitespace();
        let genus = tokens.next()?;
        let species = tokens.next()?;
        Some((genus.to_string(), species.to_string()))
    }
}
