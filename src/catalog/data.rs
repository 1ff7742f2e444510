//! Built-in species table.
//!
//! Worth figures and habitat criteria follow the community exobiology
//! sample-value tables
//! (<https://elite-dangerous.fandom.com/wiki/Exobiology_Sample_Values_and_Details>).
//! Volcanism keywords are lowercase single words matched against the
//! journal's free-text descriptions as-is.

use super::{AcceptanceRule, Species};
use crate::catalog::Filter::{
    self, Atmosphere, Distance, Gravity, PlanetClass, Temperature, Volcanism,
};

fn row(genus: &'static str, species: &'static str, net_worth: f64, filters: Vec<Filter>) -> Species {
    Species {
        genus,
        species,
        net_worth,
        rule: AcceptanceRule::all_of(filters),
    }
}

/// Aleoida grow on rocky or high-metal-content worlds with at most
/// 0.27 g, plus per-species atmosphere and temperature constraints.
fn aleoida(species: &'static str, net_worth: f64, extra: &[Filter]) -> Species {
    let groups = ["Rocky", "High metal content"]
        .into_iter()
        .map(|class| {
            let mut group = vec![Gravity(0.0, 0.27), PlanetClass(class)];
            group.extend_from_slice(extra);
            group
        })
        .collect();
    Species {
        genus: "Aleoida",
        species,
        net_worth,
        rule: AcceptanceRule::any_of(groups),
    }
}

/// Clypeus grow on rocky or high-metal-content worlds above 190 K
/// with a water or carbon-dioxide atmosphere and at most 0.27 g.
fn clypeus(species: &'static str, net_worth: f64, extra: &[Filter]) -> Species {
    let mut groups = Vec::with_capacity(4);
    for class in ["Rocky", "High metal content"] {
        for gas in ["Water", "CarbonDioxide"] {
            let mut group = vec![
                Gravity(0.0, 0.27),
                Temperature(190.0, 999.0),
                PlanetClass(class),
                Atmosphere(gas),
            ];
            group.extend_from_slice(extra);
            groups.push(group);
        }
    }
    Species {
        genus: "Clypeus",
        species,
        net_worth,
        rule: AcceptanceRule::any_of(groups),
    }
}

#[allow(clippy::too_many_lines)]
pub(super) fn builtin_rows() -> Vec<Species> {
    vec![
        aleoida("Arcus", 7.3, &[Atmosphere("CarbonDioxide"), Temperature(175.0, 180.0)]),
        aleoida("Coronamus", 6.3, &[Atmosphere("CarbonDioxide"), Temperature(180.0, 190.0)]),
        aleoida("Gravis", 12.9, &[Atmosphere("CarbonDioxide"), Temperature(190.0, 195.0)]),
        aleoida("Laminiae", 3.4, &[Atmosphere("Ammonia")]),
        aleoida("Spica", 3.4, &[Atmosphere("Ammonia")]),
        //
        row("Bacterium", "Nebulus", 9.1, vec![Atmosphere("Helium"), Volcanism("None")]),
        row("Bacterium", "Acies", 1.0, vec![Atmosphere("Neon"), Volcanism("None")]),
        row("Bacterium", "Acies", 1.0, vec![Atmosphere("Neon"), Volcanism("nitrogen")]),
        row("Bacterium", "Omentum", 4.6, vec![Atmosphere("Neon"), Volcanism("nitrogen")]),
        row("Bacterium", "Omentum", 4.6, vec![Atmosphere("Neon"), Volcanism("ammonia")]),
        row("Bacterium", "Scopulum", 8.6, vec![Atmosphere("Neon"), Volcanism("carbon")]),
        row("Bacterium", "Scopulum", 8.6, vec![Atmosphere("Neon"), Volcanism("methane")]),
        row("Bacterium", "Verrata", 3.9, vec![Atmosphere("Neon"), Volcanism("water")]),
        row("Bacterium", "Bullaris", 1.1, vec![Atmosphere("Methane"), Volcanism("None")]),
        row("Bacterium", "Vesicula", 1.0, vec![Atmosphere("Argon"), Volcanism("None")]),
        row("Bacterium", "Informem", 8.4, vec![Atmosphere("Nitrogen"), Volcanism("None")]),
        row("Bacterium", "Volu", 7.7, vec![Atmosphere("Oxygen"), Volcanism("None")]),
        row("Bacterium", "Alcyoneum", 1.7, vec![Atmosphere("Ammonia"), Volcanism("None")]),
        row("Bacterium", "Aurasus", 1.0, vec![Atmosphere("CarbonDioxide"), Volcanism("None")]),
        row("Bacterium", "Cerbrus", 1.7, vec![Atmosphere("Water"), Volcanism("None")]),
        row("Bacterium", "Cerbrus", 1.7, vec![Atmosphere("CarbonDioxide"), Volcanism("None")]),
        row("Bacterium", "Tela", 1.9, vec![Volcanism("None")]),
        row("Bacterium", "Tela", 1.9, vec![Volcanism("helium")]),
        row("Bacterium", "Tela", 1.9, vec![Volcanism("iron")]),
        row("Bacterium", "Tela", 1.9, vec![Volcanism("silicate")]),
        row("Bacterium", "Tela", 1.9, vec![Volcanism("methane")]),
        //
        row("Cactoida", "Cortexum", 3.7, vec![Atmosphere("CarbonDioxide")]),
        row("Cactoida", "Lapis", 2.5, vec![Atmosphere("Ammonia")]),
        row("Cactoida", "Peperatis", 2.5, vec![Atmosphere("Ammonia")]),
        row("Cactoida", "Pullulanta", 3.7, vec![Atmosphere("CarbonDioxide"), Temperature(180.0, 195.0)]),
        row("Cactoida", "Vermis", 16.2, vec![Atmosphere("Water")]),
        //
        clypeus("Lacrimam", 8.4, &[]),
        clypeus("Margaritus", 11.9, &[]),
        clypeus("Speculumi", 16.2, &[Distance(2500.0, 999_999.0)]),
        //
        row("Concha", "Aureolas", 7.8, vec![Atmosphere("Ammonia")]),
        row("Concha", "Biconcavis", 16.8, vec![Atmosphere("Nitrogen")]),
        row("Concha", "Labiata", 2.4, vec![Atmosphere("CarbonDioxide")]),
        row("Concha", "Renibus", 4.6, vec![Atmosphere("Water"), Temperature(180.0, 195.0)]),
        //
        row("Fonticulua", "Campestris", 1.0, vec![Atmosphere("Argon")]),
        row("Fonticulua", "Digitos", 1.8, vec![Atmosphere("Methane")]),
        row("Fonticulua", "Fluctus", 16.8, vec![Atmosphere("Oxygen")]),
        row("Fonticulua", "Lapida", 3.1, vec![Atmosphere("Nitrogen")]),
        row("Fonticulua", "Segmentatus", 19.0, vec![Atmosphere("Neon")]),
        row("Fonticulua", "Upupam", 5.7, vec![Atmosphere("Argon")]),
        //
        row("Frutexa", "Acus", 7.8, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Temperature(0.0, 195.0)]),
        row("Frutexa", "Collum", 1.6, vec![PlanetClass("Rocky"), Atmosphere("SulphurDioxide")]),
        row("Frutexa", "Fera", 1.6, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Temperature(0.0, 195.0)]),
        row("Frutexa", "Flabellum", 1.8, vec![PlanetClass("Rocky"), Atmosphere("Ammonia")]),
        row("Frutexa", "Flammasis", 10.3, vec![PlanetClass("Rocky"), Atmosphere("Ammonia")]),
        row("Frutexa", "Metallicum", 1.6, vec![PlanetClass("High metal content"), Atmosphere("Ammonia"), Temperature(0.0, 195.0)]),
        row("Frutexa", "Metallicum", 1.6, vec![PlanetClass("High metal content"), Atmosphere("CarbonDioxide"), Temperature(0.0, 195.0)]),
        row("Frutexa", "Sponsae", 6.0, vec![PlanetClass("Rocky"), Atmosphere("Water")]),
        //
        row("Fungoida", "Bullarum", 3.7, vec![Atmosphere("Argon")]),
        row("Fungoida", "Gelata", 3.3, vec![Atmosphere("CarbonDioxide"), Temperature(180.0, 195.0)]),
        row("Fungoida", "Gelata", 3.3, vec![Atmosphere("Water")]),
        row("Fungoida", "Setisis", 1.7, vec![Atmosphere("Ammonia")]),
        row("Fungoida", "Setisis", 1.7, vec![Atmosphere("Methane")]),
        row("Fungoida", "Stabitis", 2.7, vec![Atmosphere("CarbonDioxide"), Temperature(180.0, 195.0)]),
        row("Fungoida", "Stabitis", 2.7, vec![Atmosphere("Water")]),
        //
        row("Osseus", "Cornibus", 1.5, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Temperature(180.0, 195.0)]),
        row("Osseus", "Cornibus", 1.5, vec![PlanetClass("High metal content"), Atmosphere("CarbonDioxide"), Temperature(180.0, 195.0)]),
        row("Osseus", "Discus", 12.9, vec![PlanetClass("Rocky"), Atmosphere("Water")]),
        row("Osseus", "Discus", 12.9, vec![PlanetClass("High metal content"), Atmosphere("Water")]),
        row("Osseus", "Fractus", 4.0, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Temperature(180.0, 195.0)]),
        row("Osseus", "Fractus", 4.0, vec![PlanetClass("High metal content"), Atmosphere("CarbonDioxide"), Temperature(180.0, 190.0)]),
        row("Osseus", "Pellebantus", 9.7, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Temperature(190.0, 195.0)]),
        row("Osseus", "Pellebantus", 9.7, vec![PlanetClass("High metal content"), Atmosphere("CarbonDioxide"), Temperature(190.0, 195.0)]),
        row("Osseus", "Pumice", 3.2, vec![PlanetClass("Rocky"), Atmosphere("Methane")]),
        row("Osseus", "Pumice", 3.2, vec![PlanetClass("Rocky"), Atmosphere("Argon")]),
        row("Osseus", "Pumice", 3.2, vec![PlanetClass("Rocky"), Atmosphere("Nitrogen")]),
        row("Osseus", "Pumice", 3.2, vec![PlanetClass("Ice"), Atmosphere("Methane")]),
        row("Osseus", "Pumice", 3.2, vec![PlanetClass("Ice"), Atmosphere("Argon")]),
        row("Osseus", "Pumice", 3.2, vec![PlanetClass("Ice"), Atmosphere("Nitrogen")]),
        row("Osseus", "Spiralis", 2.4, vec![PlanetClass("Rocky"), Atmosphere("Ammonia")]),
        row("Osseus", "Spiralis", 2.5, vec![PlanetClass("High metal content"), Atmosphere("Ammonia")]),
        //
        row("Recepta", "Conditivus", 14.3, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Gravity(0.0, 0.27)]),
        row("Recepta", "Conditivus", 14.3, vec![PlanetClass("Icy"), Atmosphere("CarbonDioxide"), Gravity(0.0, 0.27)]),
        row("Recepta", "Deltahedronix", 16.2, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Gravity(0.0, 0.27)]),
        row("Recepta", "Deltahedronix", 16.2, vec![PlanetClass("High metal content"), Atmosphere("CarbonDioxide"), Gravity(0.0, 0.27)]),
        row("Recepta", "Umbrux", 12.9, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Gravity(0.0, 0.27)]),
        row("Recepta", "Umbrux", 12.9, vec![PlanetClass("High metal content"), Atmosphere("CarbonDioxide"), Gravity(0.0, 0.27)]),
        row("Recepta", "Umbrux", 14.3, vec![PlanetClass("Icy"), Atmosphere("CarbonDioxide"), Gravity(0.0, 0.27)]),
        //
        row("Stratum", "Araneamus", 2.4, vec![PlanetClass("Rocky"), Atmosphere("SulphurDioxide"), Temperature(165.0, 999.0)]),
        row("Stratum", "Cucumisis", 16.2, vec![PlanetClass("Rocky"), Atmosphere("SulphurDioxide"), Temperature(190.0, 999.0)]),
        row("Stratum", "Cucumisis", 16.2, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Temperature(190.0, 999.0)]),
        row("Stratum", "Excutitus", 2.4, vec![PlanetClass("Rocky"), Atmosphere("SulphurDioxide"), Temperature(165.0, 190.0)]),
        row("Stratum", "Excutitus", 2.4, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Temperature(165.0, 190.0)]),
        row("Stratum", "Frigus", 2.4, vec![PlanetClass("Rocky"), Atmosphere("SulphurDioxide"), Temperature(190.0, 999.0)]),
        row("Stratum", "Frigus", 2.4, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Temperature(190.0, 999.0)]),
        row("Stratum", "Laminamus", 2.8, vec![PlanetClass("Rocky"), Atmosphere("Ammonia"), Temperature(165.0, 999.0)]),
        row("Stratum", "Limaxus", 1.4, vec![PlanetClass("Rocky"), Atmosphere("SulphurDioxide"), Temperature(165.0, 999.0)]),
        row("Stratum", "Limaxus", 1.4, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Temperature(165.0, 190.0)]),
        row("Stratum", "Limaxus", 1.4, vec![PlanetClass("Rocky"), Atmosphere("SulphurDioxide"), Temperature(165.0, 999.0)]),
        row("Stratum", "Paleas", 1.4, vec![PlanetClass("Rocky"), Atmosphere("Ammonia"), Temperature(165.0, 999.0)]),
        row("Stratum", "Paleas", 1.4, vec![PlanetClass("Rocky"), Atmosphere("Water")]),
        row("Stratum", "Tectonicas", 19.0, vec![PlanetClass("High metal content"), Temperature(165.0, 999.0)]),
        //
        row("Tubus", "Cavas", 11.9, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Temperature(160.0, 190.0)]),
        row("Tubus", "Compagibus", 7.8, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Temperature(160.0, 190.0)]),
        row("Tubus", "Conifer", 2.4, vec![PlanetClass("Rocky"), Atmosphere("CarbonDioxide"), Temperature(160.0, 190.0)]),
        row("Tubus", "Rosarium", 2.6, vec![PlanetClass("Rocky"), Atmosphere("Ammonia"), Temperature(160.0, 999.0)]),
        row("Tubus", "Sororibus", 11.9, vec![PlanetClass("High metal content"), Atmosphere("Ammonia"), Temperature(160.0, 190.0)]),
        row("Tubus", "Sororibus", 11.9, vec![PlanetClass("High metal content"), Atmosphere("CarbonDioxide"), Temperature(160.0, 190.0)]),
        //
        row("Tussock", "Albata", 3.3, vec![Atmosphere("CarbonDioxide"), Temperature(175.0, 180.0)]),
        row("Tussock", "Capillum", 7.0, vec![Atmosphere("Methane")]),
        row("Tussock", "Capillum", 7.0, vec![Atmosphere("Argon")]),
        row("Tussock", "Caputus", 3.5, vec![Atmosphere("CarbonDioxide"), Temperature(180.0, 190.0)]),
        row("Tussock", "Catena", 1.8, vec![Atmosphere("Ammonia")]),
        row("Tussock", "Cultro", 1.8, vec![Atmosphere("Ammonia")]),
        row("Tussock", "Divisa", 1.8, vec![Atmosphere("Ammonia")]),
        row("Tussock", "Ignis", 1.8, vec![Atmosphere("CarbonDioxide"), Temperature(160.0, 170.0)]),
        row("Tussock", "Pennata", 5.9, vec![Atmosphere("CarbonDioxide"), Temperature(145.0, 155.0)]),
        row("Tussock", "Pennatis", 1.0, vec![Atmosphere("CarbonDioxide"), Temperature(0.0, 195.0)]),
        row("Tussock", "Propagito", 1.0, vec![Atmosphere("CarbonDioxide"), Temperature(0.0, 195.0)]),
        row("Tussock", "Serrati", 4.5, vec![Atmosphere("CarbonDioxide"), Temperature(170.0, 175.0)]),
        row("Tussock", "Stigmasis", 19.0, vec![Atmosphere("SulphurDioxide")]),
        row("Tussock", "Triticum", 7.8, vec![Atmosphere("CarbonDioxide"), Temperature(190.0, 195.0)]),
        row("Tussock", "Ventusa", 3.3, vec![Atmosphere("CarbonDioxide"), Temperature(155.0, 160.0)]),
        row("Tussock", "Virgam", 14.3, vec![Atmosphere("Water")]),
    ]
}
