mod common;

use common::*;
use vyuha_core::{
    Ability, AbilityError, ActionType, CombatEngine, EffectKind, EmptyInventory, Env,
    ExecutionRequest, ItemCategory, LogEvent, ParticipantStatus, Pole, Position, ResonanceAffinity,
    ResourceCost, ResourceKind, RulesConfig, ScriptedRng, TargetKind, TargetSpec,
};

#[test]
fn strike_hits_and_deals_damage() {
    let mut state = skirmish();
    let catalog = catalog();
    let rules = RulesConfig::default();
    let rng = ScriptedRng::new([15, 5]);
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    let request = ExecutionRequest::new(HERO, "strike", TargetSpec::participant(BRUTE));
    let result = CombatEngine::new(&mut state).execute_ability(&env, &request);

    assert!(result.success, "{}", result.message);
    assert_eq!(result.message, "Arjun used Strike!");
    assert_eq!(result.affected, vec![BRUTE]);
    assert_eq!(
        result.events,
        vec![LogEvent::AttackHit {
            actor: "Arjun".into(),
            target: "Raksha".into(),
            ability: "Strike".into(),
            roll: 15,
            modifier: 2,
            total: 17,
            threshold: 11,
            damage: 7,
        }]
    );

    let brute = state.participant(BRUTE).unwrap();
    assert_eq!(brute.vitality.current, 13);
    let hero = state.participant(HERO).unwrap();
    assert_eq!(hero.stamina.current, 3);
    assert_eq!(hero.economy.standard, 0);
    assert_eq!(state.nonce, 1);
}

#[test]
fn miss_still_costs_the_resource() {
    let mut state = skirmish();
    let catalog = catalog();
    let rules = RulesConfig::default();
    let rng = ScriptedRng::new([2]);
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    let request = ExecutionRequest::new(HERO, "strike", TargetSpec::participant(BRUTE));
    let result = CombatEngine::new(&mut state).execute_ability(&env, &request);

    assert!(result.success);
    assert!(matches!(
        result.events.as_slice(),
        [LogEvent::AttackMiss { total: 4, threshold: 11, .. }]
    ));
    assert_eq!(state.participant(BRUTE).unwrap().vitality.current, 20);
    assert_eq!(state.participant(HERO).unwrap().stamina.current, 3);
}

#[test]
fn out_of_range_point_leaves_state_untouched() {
    let mut state = skirmish();
    let before = state.clone();
    let catalog = catalog();
    let rules = RulesConfig::default();
    let rng = ScriptedRng::new([20, 6]);
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    let request = ExecutionRequest::new(HERO, "cleave", TargetSpec::point(Position::new(7, 3)));
    let err = CombatEngine::new(&mut state)
        .try_execute_ability(&env, &request)
        .unwrap_err();

    assert_eq!(err, AbilityError::OutOfRange { distance: 7, max: 5 });
    assert_eq!(state, before);
    assert_eq!(rng.remaining(), 2);
}

#[test]
fn failure_is_reported_in_the_result() {
    let mut state = skirmish();
    let catalog = catalog();
    let rules = RulesConfig::default();
    let rng = ScriptedRng::default();
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    let request = ExecutionRequest::new(HERO, "nonexistent", TargetSpec::NONE);
    let result = CombatEngine::new(&mut state).execute_ability(&env, &request);

    assert!(!result.success);
    assert_eq!(result.message, "ability 'nonexistent' not found");
    assert_eq!(result.error_code.as_deref(), Some("ABILITY_NOT_FOUND"));
    assert!(result.events.is_empty());
}

#[test]
fn area_damage_includes_allies_in_radius() {
    let mut state = skirmish();
    let catalog = catalog();
    let rules = RulesConfig::default();
    // Two attack rolls, each followed by a damage roll on hit.
    let rng = ScriptedRng::new([18, 3, 18, 4]);
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    // (2, 1) is within 1 square of Mira (1, 0) and Raksha (1, 1) but not Arjun.
    let request = ExecutionRequest::new(HERO, "cleave", TargetSpec::point(Position::new(2, 1)));
    let result = CombatEngine::new(&mut state).execute_ability(&env, &request);

    assert!(result.success, "{}", result.message);
    assert_eq!(result.affected, vec![SAGE, BRUTE]);
    assert_eq!(result.events.len(), 2);
    assert_eq!(state.participant(SAGE).unwrap().vitality.current, 9);
    assert_eq!(state.participant(BRUTE).unwrap().vitality.current, 16);
}

#[test]
fn damage_to_zero_downs_and_downed_cannot_act() {
    let mut state = skirmish();
    state.participant_mut(BRUTE).unwrap().vitality.current = 3;
    let catalog = catalog();
    let rules = RulesConfig::default();
    let rng = ScriptedRng::new([19, 8]);
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    let mut engine = CombatEngine::new(&mut state);
    let result = engine.execute_ability(
        &env,
        &ExecutionRequest::new(HERO, "strike", TargetSpec::participant(BRUTE)),
    );
    assert!(result.success);

    let brute = engine.state().participant(BRUTE).unwrap();
    assert_eq!(brute.vitality.current, 0);
    assert_eq!(brute.status, ParticipantStatus::Downed);

    let err = engine
        .try_execute_ability(
            &env,
            &ExecutionRequest::new(BRUTE, "strike", TargetSpec::participant(HERO)),
        )
        .unwrap_err();
    assert_eq!(
        err,
        AbilityError::ActorIncapacitated {
            name: "Raksha".into()
        }
    );
}

#[test]
fn healing_is_clamped_to_maximum() {
    let mut state = skirmish();
    state.participant_mut(HERO).unwrap().vitality.current = 17;
    let catalog = catalog();
    let rules = RulesConfig::default();
    // 2d4 = 4 + 4, insight 16 adds +3.
    let rng = ScriptedRng::new([4, 4]);
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    let request = ExecutionRequest::new(SAGE, "mend", TargetSpec::participant(HERO));
    let result = CombatEngine::new(&mut state).execute_ability(&env, &request);

    assert!(result.success, "{}", result.message);
    assert!(matches!(
        result.events.as_slice(),
        [LogEvent::Heal { healing: 3, .. }]
    ));
    let hero = state.participant(HERO).unwrap();
    assert_eq!(hero.vitality.current, hero.vitality.maximum);
    let sage = state.participant(SAGE).unwrap();
    assert_eq!(sage.essence.current, 4);
    assert_eq!(sage.economy.bonus, 0);
}

#[test]
fn heal_rejects_enemy_target() {
    let mut state = skirmish();
    let catalog = catalog();
    let rules = RulesConfig::default();
    let rng = ScriptedRng::default();
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    let request = ExecutionRequest::new(SAGE, "mend", TargetSpec::participant(BRUTE));
    let err = CombatEngine::new(&mut state)
        .try_execute_ability(&env, &request)
        .unwrap_err();
    assert!(matches!(err, AbilityError::InvalidTarget(_)));
}

#[test]
fn teleport_beyond_remaining_movement_fails_without_moving() {
    let mut state = skirmish();
    state.participant_mut(HERO).unwrap().economy.movement = 3;
    let before = state.clone();
    let catalog = catalog();
    let rules = RulesConfig::default();
    let rng = ScriptedRng::default();
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    let request = ExecutionRequest::new(HERO, "blink", TargetSpec::point(Position::new(4, 0)));
    let err = CombatEngine::new(&mut state)
        .try_execute_ability(&env, &request)
        .unwrap_err();

    assert_eq!(
        err,
        AbilityError::InsufficientResource {
            resource: ResourceKind::Movement,
            need: 4,
            have: 3
        }
    );
    assert_eq!(state, before);
}

#[test]
fn teleport_moves_actor_and_pays_distance() {
    let mut state = skirmish();
    state.participant_mut(HERO).unwrap().economy.movement = 3;
    let catalog = catalog();
    let rules = RulesConfig::default();
    let rng = ScriptedRng::default();
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    let request = ExecutionRequest::new(HERO, "blink", TargetSpec::point(Position::new(-3, 2)));
    let result = CombatEngine::new(&mut state).execute_ability(&env, &request);

    assert!(result.success, "{}", result.message);
    assert_eq!(result.message, "Arjun used Blink and moved!");
    assert_eq!(result.affected, vec![HERO]);

    let hero = state.participant(HERO).unwrap();
    assert_eq!(hero.position, Some(Position::new(-3, 2)));
    assert_eq!(hero.economy.movement, 0);
    assert_eq!(hero.economy.bonus, 0);
    assert!(hero.has_condition("shimmering"));
}

#[test]
fn equipment_requirement_consults_inventory() {
    let mut state = skirmish();
    let catalog = catalog();
    let rules = RulesConfig::default();
    let rng = ScriptedRng::default();
    let request = ExecutionRequest::new(SAGE, "hex", TargetSpec::participant(BRUTE));

    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();
    let err = CombatEngine::new(&mut state)
        .try_execute_ability(&env, &request)
        .unwrap_err();
    assert_eq!(
        err,
        AbilityError::RequirementUnmet("requires a focus to be equipped".into())
    );

    let armory = Armory::default().equip(SAGE, ItemCategory::Focus);
    let env = Env::with_all(&catalog, &armory, &rules, &rng).into_game_env();
    let result = CombatEngine::new(&mut state).execute_ability(&env, &request);
    assert!(result.success, "{}", result.message);
    assert!(state.participant(BRUTE).unwrap().has_condition("hexed"));
}

#[test]
fn exhausted_standard_action_is_rejected() {
    let mut state = skirmish();
    let catalog = catalog();
    let rules = RulesConfig::default();
    let rng = ScriptedRng::new([1, 1]);
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();
    let request = ExecutionRequest::new(HERO, "strike", TargetSpec::participant(BRUTE));

    let mut engine = CombatEngine::new(&mut state);
    assert!(engine.execute_ability(&env, &request).success);
    let result = engine.execute_ability(&env, &request);
    assert!(!result.success);
    assert_eq!(
        result.message,
        "no standard actions remaining this turn (need 1, have 0)"
    );
}

#[test]
fn empty_area_is_rejected_before_payment() {
    let mut state = skirmish();
    let before = state.clone();
    let catalog = catalog();
    let rules = RulesConfig::default();
    let rng = ScriptedRng::new([20, 6]);
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    // (4, 0) is in range but nobody stands within a square of it.
    let request = ExecutionRequest::new(HERO, "cleave", TargetSpec::point(Position::new(4, 0)));
    let err = CombatEngine::new(&mut state)
        .try_execute_ability(&env, &request)
        .unwrap_err();

    assert_eq!(
        err,
        AbilityError::InvalidTarget("Cleave affects no participants".into())
    );
    assert_eq!(state, before);
    assert_eq!(rng.remaining(), 2);
}

#[test]
fn area_summon_resolves_once_on_the_caster() {
    let beacon = Ability::new(
        "beacon",
        "Beacon",
        ActionType::Standard,
        TargetKind::Point,
        EffectKind::SummonResonance,
    )
    .with_cost(ResourceCost::essence(1))
    .with_range(5)
    .with_radius(2);
    let catalog = catalog().with(beacon);
    let mut state = skirmish();
    state.participant_mut(SAGE).unwrap().affinity = ResonanceAffinity::attuned(Pole::Celestial);
    let rules = RulesConfig::default();
    let rng = ScriptedRng::default();
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    // Everyone stands within two squares of (1, 1).
    let request = ExecutionRequest::new(SAGE, "beacon", TargetSpec::point(Position::new(1, 1)));
    let result = CombatEngine::new(&mut state).execute_ability(&env, &request);

    assert!(result.success, "{}", result.message);
    assert_eq!(result.affected, vec![SAGE]);
    assert!(matches!(
        result.events.as_slice(),
        [LogEvent::ResonanceSummoned {
            pole: Pole::Celestial,
            ..
        }]
    ));
    let zone = state.resonance.active_zone().unwrap();
    assert_eq!(zone.caster, SAGE);
    assert_eq!(zone.center, Position::new(1, 0));
    let sage = state.participant(SAGE).unwrap();
    assert_eq!(sage.essence.current, 5);
    assert_eq!(sage.economy.standard, 0);
    assert_eq!(state.nonce, 1);
}

#[test]
fn area_summon_on_an_empty_point_still_summons() {
    let beacon = Ability::new(
        "beacon",
        "Beacon",
        ActionType::Standard,
        TargetKind::Point,
        EffectKind::SummonResonance,
    )
    .with_range(5);
    let catalog = catalog().with(beacon);
    let mut state = skirmish();
    state.participant_mut(HERO).unwrap().affinity = ResonanceAffinity::attuned(Pole::Abyssal);
    let rules = RulesConfig::default();
    let rng = ScriptedRng::default();
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    let request = ExecutionRequest::new(HERO, "beacon", TargetSpec::point(Position::new(4, 0)));
    let result = CombatEngine::new(&mut state).execute_ability(&env, &request);

    assert!(result.success, "{}", result.message);
    assert_eq!(result.affected, vec![HERO]);
    assert_eq!(state.resonance.active_zone().unwrap().pole, Pole::Abyssal);
}

#[test]
fn self_targeted_teleport_is_bounded_by_range() {
    let step = Ability::new(
        "step",
        "Shadow Step",
        ActionType::Bonus,
        TargetKind::SelfOnly,
        EffectKind::Teleport,
    )
    .with_cost(ResourceCost::stamina(1))
    .with_range(3);
    let catalog = catalog().with(step);
    let mut state = skirmish();
    let before = state.clone();
    let rules = RulesConfig::default();
    let rng = ScriptedRng::default();
    let env = Env::with_all(&catalog, &EmptyInventory, &rules, &rng).into_game_env();

    let far = ExecutionRequest::new(HERO, "step", TargetSpec::point(Position::new(5, 0)));
    let err = CombatEngine::new(&mut state)
        .try_execute_ability(&env, &far)
        .unwrap_err();
    assert_eq!(err, AbilityError::OutOfRange { distance: 5, max: 3 });
    assert_eq!(state, before);

    let near = ExecutionRequest::new(HERO, "step", TargetSpec::point(Position::new(-3, 0)));
    let result = CombatEngine::new(&mut state).execute_ability(&env, &near);
    assert!(result.success, "{}", result.message);
    let hero = state.participant(HERO).unwrap();
    assert_eq!(hero.position, Some(Position::new(-3, 0)));
    assert_eq!(hero.stamina.current, 3);
    assert_eq!(hero.economy.movement, 6);
}
