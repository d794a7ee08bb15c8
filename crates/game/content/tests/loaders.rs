use std::fs;

use tempfile::TempDir;
use vyuha_content::{AbilityCatalog, ContentFactory};
use vyuha_core::{
    AbilityId, AbilityOracle, CombatEngine, Env, ExecutionRequest, InventoryOracle, ItemCategory,
    ParticipantId, PcgRng, SessionId, TargetSpec,
};

fn write_data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("rules.toml"),
        "bonus_actions_per_turn = 2\nevasion_base = 12\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("abilities.ron"),
        r#"(abilities: [
            (
                id: "ward",
                name: "Ward",
                action_type: Bonus,
                cost: Some((resource: Essence, amount: 1)),
                target: Ally,
                effect: Status,
                range: 2,
                status: Some("warded"),
            ),
        ])"#,
    )
    .unwrap();
    fs::create_dir(dir.path().join("rosters")).unwrap();
    fs::write(
        dir.path().join("rosters").join("duel.ron"),
        r#"(participants: [
            (id: 1, name: "Arjun", owner: 1, position: Some((x: 0, y: 0)),
             vitality: 20, stamina: 4, essence: 3, equipped: [Shield]),
            (id: 2, name: "Mira", owner: 1, position: Some((x: 1, y: 1)),
             vitality: 12, stamina: 2, essence: 6),
        ])"#,
    )
    .unwrap();
    dir
}

#[test]
fn factory_loads_every_file() {
    let dir = write_data_dir();
    let factory = ContentFactory::new(dir.path());

    let rules = factory.load_rules().unwrap();
    assert_eq!(rules.bonus_actions_per_turn, 2);
    assert_eq!(rules.evasion_base, 12);
    assert_eq!(rules.check_die, 20);

    let catalog = factory.load_abilities().unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.ability(&AbilityId::from("ward")).is_some());

    let roster = factory.load_roster("duel").unwrap();
    assert_eq!(roster.participants.len(), 2);
    assert!(
        roster
            .inventory
            .has_equipped(ParticipantId(1), ItemCategory::Shield)
    );
}

#[test]
fn parse_errors_name_the_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("abilities.ron"), "(abilities: [ (id: 5) ])").unwrap();

    let err = ContentFactory::new(dir.path())
        .load_abilities()
        .unwrap_err()
        .to_string();
    assert!(err.contains("abilities.ron"));
    assert!(err.contains("Failed to parse ability catalog RON"));
}

#[test]
fn loaded_content_drives_the_engine() {
    let dir = write_data_dir();
    let factory = ContentFactory::new(dir.path());
    let catalog = factory.load_abilities().unwrap();
    let rules = factory.load_rules().unwrap();
    let (mut state, inventory) = factory
        .load_roster("duel")
        .unwrap()
        .into_session(SessionId(1), 99);
    let rng = PcgRng;
    let env = Env::with_all(&catalog, &inventory, &rules, &rng).into_game_env();

    let mut engine = CombatEngine::new(&mut state);
    engine.begin_combat(&env).unwrap();
    let result = engine.execute_ability(
        &env,
        &ExecutionRequest::new(
            ParticipantId(2),
            "ward",
            TargetSpec::participant(ParticipantId(1)),
        ),
    );
    assert!(result.success, "{}", result.message);

    let arjun = state.participant(ParticipantId(1)).unwrap();
    assert!(arjun.has_condition("warded"));
    // The file grants two bonus actions per turn.
    let mira = state.participant(ParticipantId(2)).unwrap();
    assert_eq!(mira.economy.bonus, 1);
    assert_eq!(mira.essence.current, 5);
}

#[test]
fn embedded_catalog_is_available_without_files() {
    let catalog = AbilityCatalog::embedded().unwrap();
    assert!(catalog.contains(&AbilityId::from("call_of_the_pole")));
}
