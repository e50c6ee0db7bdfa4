//! Round-by-round battle resolution
//!
//! `resolve_battle` composes the leaf systems in a fixed sequence: build
//! armies, compute powers, apply elemental advantage, resolve turn order,
//! apply pre-battle skills, run the bounded combat loop, then derive
//! casualties, loot, and hero XP. Everything is a pure function of the
//! context (seed included); nothing persists between calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::battle::army::{Army, Hero, TroopCount};
use crate::battle::casualties::{apply_post_battle_heal, calculate_casualties, CasualtyReport};
use crate::battle::elements::{resolve_elemental_advantage, ElementalAdvantage};
use crate::battle::power::army_power;
use crate::battle::rewards::{calculate_hero_xp, calculate_loot, Resources};
use crate::battle::skills::{prebattle_power_bonus, Skill, SkillActivation};
use crate::battle::turn_order::resolve_turn_order;
use crate::core::config::CombatConfig;
use crate::core::error::{EngineError, Result};
use crate::core::rng::BattleRng;

/// One of the two battle roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }
}

/// Battle classification; only used to scale hero XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleType {
    Pvp,
    Pve,
    Arena,
    Conquest,
    Rally,
}

/// One side of a battle, as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideDescriptor {
    pub owner_id: u64,
    pub faction: String,
    pub hero: Option<Hero>,
    pub troops: Vec<TroopCount>,
    /// Defender stockpile exposed to looting; ignored for the attacker.
    pub resources: Option<Resources>,
}

/// Everything the engine needs to resolve one battle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatContext {
    pub battle_type: BattleType,
    /// Defender's ground advantage at the location; 1.0 is neutral ground.
    pub terrain_bonus: f64,
    pub attacker: SideDescriptor,
    pub defender: SideDescriptor,
    /// Determinism holds only for a fixed seed; callers without replay
    /// needs should supply a unique value per battle.
    pub seed: u64,
}

/// What happened in one logged phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseAction {
    Attack,
    Blocked,
}

/// One logged attack event within the combat loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattlePhase {
    pub turn: u32,
    pub action: PhaseAction,
    pub actor: Side,
    pub damage: i64,
    pub critical: bool,
    pub skill_note: Option<String>,
}

/// Running state threaded through the combat loop, one value per step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatState {
    pub attacker_power: i64,
    pub defender_power: i64,
    pub attacker_immunity_consumed: bool,
    pub defender_immunity_consumed: bool,
}

impl CombatState {
    fn new(attacker_power: i64, defender_power: i64) -> Self {
        Self {
            attacker_power,
            defender_power,
            attacker_immunity_consumed: false,
            defender_immunity_consumed: false,
        }
    }

    fn power(&self, side: Side) -> i64 {
        match side {
            Side::Attacker => self.attacker_power,
            Side::Defender => self.defender_power,
        }
    }

    fn set_power(&mut self, side: Side, value: i64) {
        match side {
            Side::Attacker => self.attacker_power = value,
            Side::Defender => self.defender_power = value,
        }
    }

    fn immunity_consumed(&self, side: Side) -> bool {
        match side {
            Side::Attacker => self.attacker_immunity_consumed,
            Side::Defender => self.defender_immunity_consumed,
        }
    }

    fn consume_immunity(&mut self, side: Side) {
        match side {
            Side::Attacker => self.attacker_immunity_consumed = true,
            Side::Defender => self.defender_immunity_consumed = true,
        }
    }
}

/// The complete outcome of one resolved battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedBattleResult {
    pub winner: Side,
    pub attacker_casualties: CasualtyReport,
    pub defender_casualties: CasualtyReport,
    pub loot: Resources,
    pub hero_xp_gained: i64,
    pub phases: Vec<BattlePhase>,
    pub attacker_initial_power: i64,
    pub defender_initial_power: i64,
    pub attacker_final_power: i64,
    pub defender_final_power: i64,
    pub elemental_advantage: ElementalAdvantage,
    pub skills_activated: Vec<SkillActivation>,
    pub turn_order: [Side; 2],
}

/// Record a skill activation once per hero; repeats of the same skill in
/// later phases stay visible through the phase log instead.
fn record_activation(activations: &mut Vec<SkillActivation>, army: &Army, effect: String) {
    let (Some(hero), Some(spec)) = (army.hero.as_ref(), army.skill.as_ref()) else {
        return;
    };
    if activations
        .iter()
        .any(|a| a.hero == hero.name && a.skill == spec.name)
    {
        return;
    }
    activations.push(SkillActivation {
        hero: hero.name.clone(),
        skill: spec.name.clone(),
        effect,
    });
}

/// Resolve one attack, returning the next combat state.
///
/// RNG draw order is fixed per resolved attack: the critical roll first,
/// then the damage-skill roll only when the actor carries a damage skill.
/// An immunity block consumes the attack before any roll happens.
#[allow(clippy::too_many_arguments)]
fn resolve_attack(
    config: &CombatConfig,
    mut state: CombatState,
    actor: Side,
    attacker: &Army,
    defender: &Army,
    turn: u32,
    rng: &mut BattleRng,
    phases: &mut Vec<BattlePhase>,
    activations: &mut Vec<SkillActivation>,
) -> CombatState {
    let target = actor.opponent();
    let (acting_army, target_army) = match actor {
        Side::Attacker => (attacker, defender),
        Side::Defender => (defender, attacker),
    };

    // Immunity swallows the first incoming attack whole.
    if let Some(spec) = target_army.skill.as_ref() {
        if spec.skill == Skill::Immunity && !state.immunity_consumed(target) {
            state.consume_immunity(target);
            record_activation(activations, target_army, "absorbed one attack".to_string());
            phases.push(BattlePhase {
                turn,
                action: PhaseAction::Blocked,
                actor,
                damage: 0,
                critical: false,
                skill_note: Some(format!("{} absorbed the attack", spec.name)),
            });
            return state;
        }
    }

    let acting_power = state.power(actor);
    let target_power = state.power(target);
    let mut notes: Vec<String> = Vec::new();

    let critical = rng.chance(config.critical_hit_chance);
    let crit_multiplier = if critical {
        config.critical_hit_multiplier
    } else {
        1.0
    };

    // Defense mitigation saturates: a huge defender power still lets
    // a sliver through, and every attack lands for at least 1.
    let mitigation = 1.0 - target_power as f64 / (target_power as f64 + 100.0);
    let raw = acting_power as f64 * mitigation * crit_multiplier * 0.1;
    let mut damage = raw.max(1.0).floor() as i64;

    if let Some(spec) = acting_army.skill.as_ref() {
        if let Skill::DamageMultiplier(multiplier) = spec.skill {
            if rng.chance(config.damage_skill_chance) {
                damage = (damage as f64 * multiplier).floor() as i64;
                notes.push(format!("{} x{}", spec.name, multiplier));
                record_activation(
                    activations,
                    acting_army,
                    format!("damage x{}", multiplier),
                );
            }
        }
    }

    if let Some(spec) = target_army.skill.as_ref() {
        if let Skill::DamageReduction(factor) = spec.skill {
            damage = (damage as f64 * factor).floor() as i64;
            notes.push(format!("{} dampened the hit", spec.name));
            record_activation(
                activations,
                target_army,
                format!("incoming damage x{}", factor),
            );
        }
    }

    state.set_power(target, (target_power - damage).max(0));

    if let Some(spec) = target_army.skill.as_ref() {
        if let Skill::Counterattack(pct) = spec.skill {
            let reflected = (damage as f64 * pct).floor() as i64;
            if reflected > 0 {
                state.set_power(actor, (acting_power - reflected).max(0));
                notes.push(format!("{} reflected {}", spec.name, reflected));
                record_activation(
                    activations,
                    target_army,
                    format!("reflects {}% of damage taken", pct * 100.0),
                );
            }
        }
    }

    phases.push(BattlePhase {
        turn,
        action: PhaseAction::Attack,
        actor,
        damage,
        critical,
        skill_note: if notes.is_empty() {
            None
        } else {
            Some(notes.join("; "))
        },
    });

    state
}

/// Resolve a full battle between two armies.
pub fn resolve_battle(config: &CombatConfig, context: &CombatContext) -> Result<DetailedBattleResult> {
    config.validate()?;

    if !context.terrain_bonus.is_finite() || context.terrain_bonus < 0.0 {
        return Err(EngineError::InvalidTerrainBonus(context.terrain_bonus));
    }

    let attacker = Army::build(
        config,
        context.attacker.owner_id,
        &context.attacker.faction,
        context.attacker.hero.clone(),
        &context.attacker.troops,
    )?;
    let defender = Army::build(
        config,
        context.defender.owner_id,
        &context.defender.faction,
        context.defender.hero.clone(),
        &context.defender.troops,
    )?;

    let mut rng = BattleRng::new(context.seed);

    // Terrain reflects the defender's ground advantage at the location.
    let mut attacker_power = army_power(config, &attacker, 1.0);
    let mut defender_power = army_power(config, &defender, context.terrain_bonus);

    let elemental_advantage =
        resolve_elemental_advantage(config, attacker.hero_element(), defender.hero_element());
    let elemental_factor = 1.0 + config.elemental_damage_bonus;
    match elemental_advantage {
        ElementalAdvantage::Attacker => {
            attacker_power = (attacker_power as f64 * elemental_factor).floor() as i64;
        }
        ElementalAdvantage::Defender => {
            defender_power = (defender_power as f64 * elemental_factor).floor() as i64;
        }
        ElementalAdvantage::None => {}
    }

    let turn_order = resolve_turn_order(&attacker, &defender);

    let mut activations: Vec<SkillActivation> = Vec::new();

    let attacker_first_strike =
        matches!(attacker.skill.as_ref().map(|s| s.skill), Some(Skill::FirstStrike));
    let defender_first_strike =
        matches!(defender.skill.as_ref().map(|s| s.skill), Some(Skill::FirstStrike));
    if attacker_first_strike && !defender_first_strike {
        record_activation(&mut activations, &attacker, "strikes first".to_string());
    } else if defender_first_strike && !attacker_first_strike {
        record_activation(&mut activations, &defender, "strikes first".to_string());
    }

    // Pre-battle buffs; both sides checked, effects do not interact.
    let attacker_buff = prebattle_power_bonus(attacker_power, attacker.skill.as_ref());
    if attacker_buff > 0 {
        record_activation(&mut activations, &attacker, format!("+{} power", attacker_buff));
        attacker_power += attacker_buff;
    }
    let defender_buff = prebattle_power_bonus(defender_power, defender.skill.as_ref());
    if defender_buff > 0 {
        record_activation(&mut activations, &defender, format!("+{} power", defender_buff));
        defender_power += defender_buff;
    }

    let attacker_initial_power = attacker_power;
    let defender_initial_power = defender_power;

    debug!(
        seed = context.seed,
        battle_type = ?context.battle_type,
        attacker_power,
        defender_power,
        ?elemental_advantage,
        "resolving battle"
    );

    let mut state = CombatState::new(attacker_power, defender_power);
    let mut phases: Vec<BattlePhase> = Vec::new();

    'combat: for turn in 1..=config.max_rounds {
        for actor in turn_order {
            if state.attacker_power <= 0 || state.defender_power <= 0 {
                break 'combat;
            }
            state = resolve_attack(
                config,
                state,
                actor,
                &attacker,
                &defender,
                turn,
                &mut rng,
                &mut phases,
                &mut activations,
            );
        }
    }

    // Attacker wins ties; the bias is intentional and matches turn order.
    let winner = if state.attacker_power >= state.defender_power {
        Side::Attacker
    } else {
        Side::Defender
    };

    let mut attacker_casualties = calculate_casualties(
        config,
        &attacker.troops,
        winner == Side::Defender,
        attacker_initial_power,
        state.attacker_power,
    );
    let mut defender_casualties = calculate_casualties(
        config,
        &defender.troops,
        winner == Side::Attacker,
        defender_initial_power,
        state.defender_power,
    );

    let (winner_army, winner_casualties) = match winner {
        Side::Attacker => (&attacker, &mut attacker_casualties),
        Side::Defender => (&defender, &mut defender_casualties),
    };
    if let Some(spec) = winner_army.skill.as_ref() {
        if let Skill::PostBattleHeal(pct) = spec.skill {
            apply_post_battle_heal(winner_casualties, pct);
            record_activation(
                &mut activations,
                winner_army,
                format!("recovered {}% of wounded", pct * 100.0),
            );
        }
    }

    let loot = calculate_loot(config, winner, context.defender.resources.as_ref());
    let hero_xp_gained = calculate_hero_xp(
        config,
        context.battle_type,
        winner == Side::Attacker,
        defender_initial_power,
    );

    debug!(
        ?winner,
        rounds = phases.last().map_or(0, |p| p.turn),
        attacker_final = state.attacker_power,
        defender_final = state.defender_power,
        "battle resolved"
    );

    Ok(DetailedBattleResult {
        winner,
        attacker_casualties,
        defender_casualties,
        loot,
        hero_xp_gained,
        phases,
        attacker_initial_power,
        defender_initial_power,
        attacker_final_power: state.attacker_power,
        defender_final_power: state.defender_power,
        elemental_advantage,
        skills_activated: activations,
        turn_order,
    })
}
