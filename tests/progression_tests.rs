use arena::combat::{
    experience_for_level, level_from_experience, resolve_fight, AbilitySet, BASE_HEALTH,
};
use arena::data::{CharacterRecord, WeaponCatalog};

#[test]
fn level_curve_golden_values() {
    assert_eq!(level_from_experience(0), 1);
    assert_eq!(level_from_experience(4), 2);
    assert_eq!(level_from_experience(12), 3);
    assert_eq!(level_from_experience(199), 10);

    assert_eq!(experience_for_level(2), 4);
    assert_eq!(experience_for_level(3), 12);
    assert_eq!(experience_for_level(10), 199);
}

#[test]
fn generated_characters_fight_deterministically_end_to_end() {
    let catalog = WeaponCatalog::builtin();
    let ragnar = CharacterRecord::generate(
        1,
        "Ragnar",
        120,
        AbilitySet::from_aliases(["firstStrike"]).expect("alias should parse"),
        vec!["sword".to_string()],
    );
    let bjorn = CharacterRecord::generate(
        2,
        "Bjorn",
        90,
        AbilitySet::from_aliases(["resistant"]).expect("alias should parse"),
        vec!["hammer".to_string(), "shuriken".to_string()],
    );

    let attacker = ragnar.snapshot(&catalog).expect("snapshot should build");
    let defender = bjorn.snapshot(&catalog).expect("snapshot should build");

    let first = resolve_fight(&attacker, &defender, Some(77)).expect("fight should resolve");
    let second = resolve_fight(&attacker, &defender, Some(77)).expect("fight should resolve");
    assert_eq!(first, second);

    // Ragnar carries FirstStrike and Bjorn does not: turn 1 is always his.
    assert_eq!(first.log[0].attacker_id, 1);
}

#[test]
fn snapshot_health_reflects_level_and_abilities() {
    let catalog = WeaponCatalog::builtin();
    let plain = CharacterRecord::generate(1, "Plain", 0, AbilitySet::new(), Vec::new());
    let vital = CharacterRecord::generate(
        2,
        "Vital",
        0,
        AbilitySet::from_aliases(["vitality", "immortality"]).expect("alias should parse"),
        Vec::new(),
    );

    let plain_snapshot = plain.snapshot(&catalog).expect("snapshot should build");
    let vital_snapshot = vital.snapshot(&catalog).expect("snapshot should build");

    assert_eq!(plain_snapshot.max_health, BASE_HEALTH);
    // Endurance 3 -> 9 (vitality) -> 22 (immortality): +3 complementary health.
    assert_eq!(vital_snapshot.max_health, BASE_HEALTH + 3);
    assert!(vital_snapshot.endurance > plain_snapshot.endurance);
}

#[test]
fn applying_results_drives_level_ups() {
    let mut record = CharacterRecord::generate(1, "Climber", 0, AbilitySet::new(), Vec::new());
    assert_eq!(record.level(), 1);

    while !record.can_level_up() {
        record.apply_fight_outcome(true, 10);
    }
    // The record's stored experience now crosses the next threshold; the
    // caller would re-derive the level the same way the snapshot builder does.
    assert!(record.experience >= experience_for_level(2));
    assert_eq!(level_from_experience(record.experience), record.level());
    assert!(record.wins > 0);
}

#[test]
fn serialized_record_round_trips() {
    let record = CharacterRecord::generate(
        5,
        "Keeper",
        250,
        AbilitySet::from_aliases(["armor", "toughenedSkin"]).expect("alias should parse"),
        vec!["mace".to_string()],
    );

    let json = serde_json::to_string(&record).expect("record should serialize");
    let parsed: CharacterRecord = serde_json::from_str(&json).expect("record should parse");
    assert_eq!(parsed, record);
}
