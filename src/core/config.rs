//! Combat configuration with documented constants
//!
//! Every table the engine consults (troop-tier power, faction bonuses,
//! element advantage, XP multipliers, the hero-skill registry) and every
//! tuning constant lives here and is passed into `resolve_battle`
//! explicitly. The engine holds no global state, so tests and game modes
//! can swap configurations freely.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::battle::army::FactionBonus;
use crate::battle::elements::{default_advantage_cycle, Element};
use crate::battle::skills::{default_skill_registry, SkillSpec};
use crate::core::error::{EngineError, Result};

/// Hero XP multipliers per battle type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpMultipliers {
    pub pvp: f64,
    pub pve: f64,
    pub arena: f64,
    pub conquest: f64,
    pub rally: f64,
}

impl Default for XpMultipliers {
    fn default() -> Self {
        Self {
            pvp: 1.5,
            pve: 1.0,
            arena: 2.0,
            conquest: 2.5,
            rally: 1.5,
        }
    }
}

/// Configuration for battle resolution
///
/// These values have been tuned against the live game's balance.
/// Changing them changes battle pacing and casualty feel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatConfig {
    // === POWER MODEL ===
    /// Base power per troop of each tier, indexed by `tier - 1`.
    ///
    /// The jump between tiers is deliberately super-linear so a small
    /// high-tier force can beat a large low-tier one.
    pub tier_power: [i64; 4],

    /// Power bonus for the side whose hero element beats the other's.
    ///
    /// Only one side can receive this per battle.
    pub elemental_damage_bonus: f64,

    // === COMBAT LOOP ===
    /// Chance per attack of a critical hit.
    pub critical_hit_chance: f64,

    /// Damage multiplier applied on a critical hit.
    pub critical_hit_multiplier: f64,

    /// Chance per attack that a damage-type hero skill triggers.
    pub damage_skill_chance: f64,

    /// Hard ceiling on combat rounds; the loop always terminates here.
    pub max_rounds: u32,

    // === CASUALTIES & REWARDS ===
    /// Fraction of troop losses that become wounded (recoverable)
    /// instead of dead.
    pub hospital_recovery_rate: f64,

    /// Fraction of each defender resource captured when the attacker wins.
    pub loot_rate: f64,

    /// Base hero XP on a won battle.
    pub base_xp_win: i64,

    /// Base hero XP on a lost battle.
    pub base_xp_loss: i64,

    /// Hero XP scaling per battle type.
    pub xp_multipliers: XpMultipliers,

    // === INJECTED TABLES ===
    /// Element -> the element it beats.
    pub element_beats: HashMap<Element, Element>,

    /// Faction name -> (attack, defense) power multipliers.
    /// Factions absent from the table fight with neutral 1.0 bonuses.
    pub faction_bonuses: HashMap<String, FactionBonus>,

    /// Hero name -> skill. Heroes without an entry fight skill-less.
    pub skill_registry: HashMap<String, SkillSpec>,
}

impl Default for CombatConfig {
    fn default() -> Self {
        let mut faction_bonuses = HashMap::new();
        faction_bonuses.insert(
            "dragon".to_string(),
            FactionBonus {
                attack: 1.10,
                defense: 1.0,
            },
        );
        faction_bonuses.insert(
            "phoenix".to_string(),
            FactionBonus {
                attack: 1.05,
                defense: 1.05,
            },
        );
        faction_bonuses.insert(
            "titan".to_string(),
            FactionBonus {
                attack: 1.0,
                defense: 1.10,
            },
        );

        Self {
            tier_power: [10, 30, 100, 300],
            elemental_damage_bonus: 0.25,
            critical_hit_chance: 0.15,
            critical_hit_multiplier: 1.5,
            damage_skill_chance: 0.20,
            max_rounds: 10,
            hospital_recovery_rate: 0.6,
            loot_rate: 0.2,
            base_xp_win: 50,
            base_xp_loss: 25,
            xp_multipliers: XpMultipliers::default(),
            element_beats: default_advantage_cycle(),
            faction_bonuses,
            skill_registry: default_skill_registry(),
        }
    }
}

impl CombatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        for (i, power) in self.tier_power.iter().enumerate() {
            if *power <= 0 {
                return Err(EngineError::InvalidConfig(format!(
                    "tier_power[{}] must be positive, got {}",
                    i, power
                )));
            }
        }

        for (name, value) in [
            ("critical_hit_chance", self.critical_hit_chance),
            ("damage_skill_chance", self.damage_skill_chance),
            ("hospital_recovery_rate", self.hospital_recovery_rate),
            ("loot_rate", self.loot_rate),
        ] {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(EngineError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        if !self.critical_hit_multiplier.is_finite() || self.critical_hit_multiplier < 1.0 {
            return Err(EngineError::InvalidConfig(format!(
                "critical_hit_multiplier must be >= 1.0, got {}",
                self.critical_hit_multiplier
            )));
        }

        if !self.elemental_damage_bonus.is_finite() || self.elemental_damage_bonus < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "elemental_damage_bonus must be >= 0, got {}",
                self.elemental_damage_bonus
            )));
        }

        if self.max_rounds == 0 {
            return Err(EngineError::InvalidConfig(
                "max_rounds must be at least 1".to_string(),
            ));
        }

        let mults = &self.xp_multipliers;
        for (name, value) in [
            ("pvp", mults.pvp),
            ("pve", mults.pve),
            ("arena", mults.arena),
            ("conquest", mults.conquest),
            ("rally", mults.rally),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::InvalidConfig(format!(
                    "xp_multipliers.{} must be positive, got {}",
                    name, value
                )));
            }
        }

        for (faction, bonus) in &self.faction_bonuses {
            if !bonus.attack.is_finite()
                || !bonus.defense.is_finite()
                || bonus.attack < 0.0
                || bonus.defense < 0.0
            {
                return Err(EngineError::InvalidFactionBonus {
                    faction: faction.clone(),
                    attack: bonus.attack,
                    defense: bonus.defense,
                });
            }
        }

        for (hero, spec) in &self.skill_registry {
            if let Some(value) = spec.skill.numeric_value() {
                if !value.is_finite() || value < 0.0 {
                    return Err(EngineError::InvalidConfig(format!(
                        "skill '{}' for hero '{}' has invalid value {}",
                        spec.name, hero, value
                    )));
                }
            }
        }

        Ok(())
    }
}
