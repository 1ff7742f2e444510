//! Journal replay and snapshot round-trip tests.
#![allow(clippy::unwrap_used, clippy::panic)]

use biosurvey::{Observation, SpeciesCatalog, SystemTracker};
use serde_json::json;

fn replay(tracker: &mut SystemTracker, records: &[serde_json::Value]) {
    for record in records {
        tracker.apply_record(record).unwrap();
    }
}

fn survey_session() -> Vec<serde_json::Value> {
    vec![
        json!({ "event": "FSDJump", "StarSystem": "Vulpecula Dark Region QT-R b4-4" }),
        json!({
            "event": "Scan",
            "BodyID": 10,
            "BodyName": "Vulpecula Dark Region QT-R b4-4 4 a",
            "PlanetClass": "Rocky body",
            "AtmosphereComposition": [{ "Name": "CarbonDioxide", "Percent": 100.0 }],
            "Volcanism": "",
            "SurfaceGravity": 1.766784,
            "SurfaceTemperature": 192.311401,
            "Periapsis": 210.266562,
            "TerraformState": "",
            "WasDiscovered": true,
            "WasMapped": false
        }),
        json!({
            "event": "FSSBodySignals",
            "BodyID": 10,
            "BodyName": "Vulpecula Dark Region QT-R b4-4 4 a",
            "Signals": [
                { "Type": "$SAA_SignalType_Biological;", "Type_Localised": "Biological", "Count": 3 }
            ]
        }),
        json!({
            "event": "SAASignalsFound",
            "BodyID": 10,
            "BodyName": "Vulpecula Dark Region QT-R b4-4 4 a",
            "Signals": [
                { "Type": "$SAA_SignalType_Biological;", "Type_Localised": "Biological", "Count": 3 }
            ],
            "Genuses": [
                { "Genus": "$Codex_Ent_Bacterial_Genus_Name;", "Genus_Localised": "Bacterium" },
                { "Genus": "$Codex_Ent_Conchas_Genus_Name;", "Genus_Localised": "Concha" },
                { "Genus": "$Codex_Ent_Osseus_Genus_Name;", "Genus_Localised": "Osseus" }
            ]
        }),
        json!({
            "event": "ScanOrganic",
            "ScanType": "Sample",
            "Genus": "$Codex_Ent_Conchas_Genus_Name;",
            "Genus_Localised": "Concha",
            "Species": "$Codex_Ent_Conchas_02_Name;",
            "Species_Localised": "Concha Labiata",
            "Body": 10
        }),
        json!({
            "event": "ScanOrganic",
            "ScanType": "Analyse",
            "Genus": "$Codex_Ent_Conchas_Genus_Name;",
            "Genus_Localised": "Concha",
            "Species": "$Codex_Ent_Conchas_02_Name;",
            "Species_Localised": "Concha Labiata",
            "Body": 10
        }),
    ]
}

#[test]
fn full_session_upgrades_confidence_monotonically() {
    let mut tracker = SystemTracker::new();
    replay(&mut tracker, &survey_session());

    let ledger = &tracker.ledgers()[&10];
    // the analysed concha was promoted to the front, the two untouched
    // genera survived the upgrade
    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger.entries()[0].display_string(), "Concha Labiata (2 M)");
    assert!(ledger.entries()[0].is_complete());
    assert_eq!(ledger.entries()[1].genus_name(), Some("Bacterium"));
    assert_eq!(ledger.entries()[2].genus_name(), Some("Osseus"));

    // a late genus survey no longer replaces anything
    tracker
        .apply_record(&json!({
            "event": "SAASignalsFound",
            "BodyID": 10,
            "BodyName": "Vulpecula Dark Region QT-R b4-4 4 a",
            "Genuses": [
                { "Genus_Localised": "Bacterium" },
                { "Genus_Localised": "Concha" },
                { "Genus_Localised": "Osseus" }
            ]
        }))
        .unwrap();
    let ledger = &tracker.ledgers()[&10];
    assert_eq!(ledger.len(), 3);
    assert!(ledger.entries()[0].is_complete());
}

#[test]
fn jump_to_next_system_forgets_everything() {
    let mut tracker = SystemTracker::new();
    replay(&mut tracker, &survey_session());
    assert!(!tracker.bodies().is_empty());

    tracker
        .apply_record(&json!({ "event": "FSDJump", "StarSystem": "Stock 1 Sector AZ-P b6-1" }))
        .unwrap();
    assert_eq!(tracker.current_system(), "Stock 1 Sector AZ-P b6-1");
    assert!(tracker.bodies().is_empty());
    assert!(tracker.ledgers().is_empty());
}

#[test]
fn snapshot_round_trip_preserves_confidence_and_value() {
    let mut tracker = SystemTracker::new();
    replay(&mut tracker, &survey_session());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    tracker.save_state(&path).unwrap();

    let restored = SystemTracker::load_state(SpeciesCatalog::builtin(), &path).unwrap();
    assert_eq!(restored.current_system(), tracker.current_system());

    let before = &tracker.ledgers()[&10];
    let after = &restored.ledgers()[&10];
    assert_eq!(after.len(), before.len());
    for (restored_entry, original_entry) in after.entries().iter().zip(before.entries()) {
        assert_eq!(restored_entry.display_string(), original_entry.display_string());
        assert_eq!(restored_entry.value_range(), original_entry.value_range());
        assert_eq!(restored_entry.is_complete(), original_entry.is_complete());
    }

    // the summaries render identically too
    let before_rows = tracker.summaries(1.0);
    let after_rows = restored.summaries(1.0);
    assert_eq!(before_rows.len(), after_rows.len());
    assert_eq!(before_rows[0].value_range, after_rows[0].value_range);
}

#[test]
fn corrupt_snapshot_entry_degrades_to_poison_signal() {
    let mut tracker = SystemTracker::new();
    replay(&mut tracker, &survey_session());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    tracker.save_state(&path).unwrap();

    // vandalize one persisted name
    let contents = std::fs::read_to_string(&path).unwrap();
    let contents = contents.replace("Concha Labiata", "Meteorite Fragment");
    std::fs::write(&path, contents).unwrap();

    let restored = SystemTracker::load_state(SpeciesCatalog::builtin(), &path).unwrap();
    let ledger = &restored.ledgers()[&10];
    assert_eq!(ledger.entries()[0], Observation::raw(99));
}

#[test]
fn summaries_skip_worthless_bodies() {
    let mut tracker = SystemTracker::new();
    replay(
        &mut tracker,
        &[
            json!({ "event": "FSDJump", "StarSystem": "Stock 1 Sector AW-J b10-0" }),
            json!({
                "event": "Scan",
                "BodyID": 3,
                "BodyName": "Stock 1 Sector AW-J b10-0 1",
                "PlanetClass": "Icy body",
                "WasDiscovered": true,
                "WasMapped": true
            }),
            json!({
                "event": "Scan",
                "BodyID": 4,
                "BodyName": "Stock 1 Sector AW-J b10-0 2",
                "PlanetClass": "Earthlike body",
                "WasDiscovered": true,
                "WasMapped": true
            }),
        ],
    );

    let rows = tracker.summaries(1.0);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].body_id, 4);
    // the system prefix is stripped for display
    assert_eq!(rows[0].name, " 2");

    // but a biological signal makes even a worthless body interesting
    tracker
        .apply_record(&json!({
            "event": "FSSBodySignals",
            "BodyID": 3,
            "BodyName": "Stock 1 Sector AW-J b10-0 1",
            "Signals": [{ "Type": "$SAA_SignalType_Biological;", "Count": 1 }]
        }))
        .unwrap();
    let rows = tracker.summaries(1.0);
    assert_eq!(rows.len(), 2);
}
