//! Loot and hero experience
//!
//! Resources change hands only when the attacker takes the fight and wins;
//! hero XP is earned either way, scaled by the kind of battle and the size
//! of the enemy that was fought.

use serde::{Deserialize, Serialize};

use crate::battle::engine::{BattleType, Side};
use crate::core::config::CombatConfig;

/// A stockpile of the three lootable resources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub food: i64,
    pub iron: i64,
    pub gold: i64,
}

impl Resources {
    pub fn is_empty(&self) -> bool {
        self.food == 0 && self.iron == 0 && self.gold == 0
    }
}

/// Resources captured by the attacker. Zero unless the attacker won and the
/// defender actually held something.
pub fn calculate_loot(
    config: &CombatConfig,
    winner: Side,
    defender_resources: Option<&Resources>,
) -> Resources {
    match (winner, defender_resources) {
        (Side::Attacker, Some(resources)) => Resources {
            food: (resources.food as f64 * config.loot_rate).floor() as i64,
            iron: (resources.iron as f64 * config.loot_rate).floor() as i64,
            gold: (resources.gold as f64 * config.loot_rate).floor() as i64,
        },
        _ => Resources::default(),
    }
}

fn battle_type_multiplier(config: &CombatConfig, battle_type: BattleType) -> f64 {
    let mults = &config.xp_multipliers;
    match battle_type {
        BattleType::Pvp => mults.pvp,
        BattleType::Pve => mults.pve,
        BattleType::Arena => mults.arena,
        BattleType::Conquest => mults.conquest,
        BattleType::Rally => mults.rally,
    }
}

/// Hero XP from the attacker's perspective.
pub fn calculate_hero_xp(
    config: &CombatConfig,
    battle_type: BattleType,
    attacker_won: bool,
    enemy_power: i64,
) -> i64 {
    let base = if attacker_won {
        config.base_xp_win
    } else {
        config.base_xp_loss
    };
    let power_bonus = enemy_power / 100;

    ((base + power_bonus) as f64 * battle_type_multiplier(config, battle_type)).floor() as i64
}
