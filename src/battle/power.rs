//! Army power calculation
//!
//! Power is the single scalar the combat loop fights over: troops weighted
//! by tier, plus the hero's derived contribution, scaled by the better of
//! the faction's two multipliers and the terrain factor.

use crate::battle::army::Army;
use crate::core::config::CombatConfig;

/// Total power of an army under a terrain factor.
///
/// Troop tiers must already be validated; `Army::build` guarantees that.
pub fn army_power(config: &CombatConfig, army: &Army, terrain_bonus: f64) -> i64 {
    let troop_power: i64 = army
        .troops
        .iter()
        .map(|t| t.count as i64 * config.tier_power[(t.tier - 1) as usize])
        .sum();

    let hero_power = army.hero.as_ref().map_or(0, |h| h.power());

    let combined_bonus = army.faction_bonus.combined();

    ((troop_power + hero_power) as f64 * combined_bonus * terrain_bonus).floor() as i64
}
