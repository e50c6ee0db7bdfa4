//! Battle engine integration tests
//!
//! End-to-end resolution through the public API, including the
//! intentionally attacker-biased tie-breaks.

use warforge::battle::*;
use warforge::core::CombatConfig;

fn hero(name: &str, element: Option<Element>, speed: i64) -> Hero {
    Hero {
        name: name.to_string(),
        faction: "dragon".to_string(),
        element,
        rarity: Rarity::Legendary,
        level: 10,
        attack: 100,
        defense: 80,
        speed,
        hp: 500,
    }
}

fn side(troops: Vec<TroopCount>, hero: Option<Hero>) -> SideDescriptor {
    SideDescriptor {
        owner_id: 1,
        faction: "unaligned".to_string(),
        hero,
        troops,
        resources: None,
    }
}

fn context(attacker: SideDescriptor, defender: SideDescriptor) -> CombatContext {
    CombatContext {
        battle_type: BattleType::Pvp,
        terrain_bonus: 1.0,
        attacker,
        defender,
        seed: 1,
    }
}

#[test]
fn test_outnumbered_defender_loses_and_is_looted() {
    let config = CombatConfig::default();
    let mut defender = side(vec![TroopCount::new(1, 50)], None);
    defender.resources = Some(Resources {
        food: 1000,
        iron: 500,
        gold: 100,
    });
    let ctx = context(side(vec![TroopCount::new(1, 100)], None), defender);

    let result = resolve_battle(&config, &ctx).unwrap();

    assert_eq!(result.attacker_initial_power, 1000);
    assert_eq!(result.defender_initial_power, 500);
    assert_eq!(result.winner, Side::Attacker);

    // The loser bleeds at least the 50% base rate.
    let defender_lost =
        result.defender_casualties.total_dead() + result.defender_casualties.total_wounded();
    assert!(defender_lost >= 25, "lost {} of 50", defender_lost);

    assert_eq!(
        result.loot,
        Resources {
            food: 200,
            iron: 100,
            gold: 20,
        }
    );
}

#[test]
fn test_unrelated_elements_give_no_advantage() {
    // Wind beats fire, but wind and water have no relation either way.
    let config = CombatConfig::default();
    let ctx = context(
        side(
            vec![TroopCount::new(2, 100)],
            Some(hero("Saitama", Some(Element::Wind), 50)),
        ),
        side(
            vec![TroopCount::new(2, 100)],
            Some(hero("Undine", Some(Element::Water), 50)),
        ),
    );

    let result = resolve_battle(&config, &ctx).unwrap();
    assert_eq!(result.elemental_advantage, ElementalAdvantage::None);
}

#[test]
fn test_titanium_armor_preserves_defender_power() {
    let config = CombatConfig::default();
    let attacker_troops = vec![TroopCount::new(3, 100)];
    let defender_troops = vec![TroopCount::new(3, 80)];

    let without_armor = resolve_battle(
        &config,
        &context(
            side(attacker_troops.clone(), None),
            side(defender_troops.clone(), None),
        ),
    )
    .unwrap();

    let with_armor = resolve_battle(
        &config,
        &context(
            side(attacker_troops, None),
            side(
                defender_troops,
                Some(hero("T-800 Terminator", None, 10)),
            ),
        ),
    )
    .unwrap();

    assert!(with_armor.defender_final_power > without_armor.defender_final_power);
    assert!(with_armor
        .phases
        .iter()
        .any(|p| p.skill_note.as_deref().is_some_and(|n| n.contains("Titanium Armor"))));
}

#[test]
fn test_empty_armies_terminate_round_one_attacker_wins() {
    let config = CombatConfig::default();
    let ctx = context(side(vec![], None), side(vec![], None));
    let result = resolve_battle(&config, &ctx).unwrap();

    assert_eq!(result.winner, Side::Attacker);
    assert!(result.phases.is_empty());
    assert!(result.attacker_casualties.dead.is_empty());
    assert!(result.attacker_casualties.wounded.is_empty());
    assert!(result.defender_casualties.dead.is_empty());
    assert!(result.defender_casualties.wounded.is_empty());
}

#[test]
fn test_scout_blurs_exact_counts() {
    let config = CombatConfig::default();
    let troops = vec![TroopCount::new(2, 37)];
    let report = scout_location(&config, &troops, None, "unaligned").unwrap();

    assert_eq!(report.troops[0].approximate, "10-50");
    assert_eq!(report.power, 1110);
}

#[test]
fn test_hero_xp_matches_formula() {
    let config = CombatConfig::default();
    let mut ctx = context(
        side(vec![TroopCount::new(1, 100)], None),
        side(vec![TroopCount::new(1, 50)], None),
    );
    ctx.battle_type = BattleType::Conquest;

    let result = resolve_battle(&config, &ctx).unwrap();
    assert_eq!(result.winner, Side::Attacker);
    // (50 base + 500/100) * 2.5
    assert_eq!(result.hero_xp_gained, 137);
}

#[test]
fn test_dragon_fire_heals_winner_wounded() {
    let config = CombatConfig::default();
    let ctx = context(
        side(
            vec![TroopCount::new(3, 200)],
            Some(hero("Daenerys", Some(Element::Fire), 40)),
        ),
        side(vec![TroopCount::new(3, 100)], None),
    );

    let result = resolve_battle(&config, &ctx).unwrap();
    assert_eq!(result.winner, Side::Attacker);
    assert!(result
        .skills_activated
        .iter()
        .any(|a| a.skill == "Dragon Fire"));

    // Reconstruct the unhealed casualties from the reported powers and
    // check the heal was applied on top of them.
    let army = Army::build(
        &config,
        1,
        "unaligned",
        ctx.attacker.hero.clone(),
        &ctx.attacker.troops,
    )
    .unwrap();
    let mut expected = calculate_casualties(
        &config,
        &army.troops,
        false,
        result.attacker_initial_power,
        result.attacker_final_power,
    );
    let unhealed_wounded = expected.total_wounded();
    warforge::battle::casualties::apply_post_battle_heal(&mut expected, 0.05);

    assert_eq!(result.attacker_casualties, expected);
    assert!(result.attacker_casualties.total_wounded() < unhealed_wounded);
}

#[test]
fn test_first_strike_defender_leads_turn_order() {
    let config = CombatConfig::default();
    let ctx = context(
        side(
            vec![TroopCount::new(2, 100)],
            Some(hero("Swift", None, 99)),
        ),
        side(
            vec![TroopCount::new(2, 100)],
            Some(hero("The Flash", None, 1)),
        ),
    );

    let result = resolve_battle(&config, &ctx).unwrap();
    assert_eq!(result.turn_order, [Side::Defender, Side::Attacker]);
    assert_eq!(result.phases[0].actor, Side::Defender);
    assert!(result
        .skills_activated
        .iter()
        .any(|a| a.skill == "Speed Force"));
}

#[test]
fn test_invalid_tier_rejected_before_resolution() {
    let config = CombatConfig::default();
    let ctx = context(side(vec![TroopCount::new(7, 10)], None), side(vec![], None));
    assert!(resolve_battle(&config, &ctx).is_err());
}
