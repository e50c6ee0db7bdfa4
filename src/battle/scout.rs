//! Location scouting
//!
//! A read-only preview of a defending force: total power computed the same
//! way the battle engine computes it, but troop counts blurred into display
//! bands so reconnaissance never reveals exact numbers.

use serde::{Deserialize, Serialize};

use crate::battle::army::{Army, Hero, TroopCount};
use crate::battle::power::army_power;
use crate::core::config::CombatConfig;
use crate::core::error::Result;

/// A troop tier with its count blurred into a display range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TroopEstimate {
    pub tier: u8,
    pub approximate: String,
}

/// What a scout reports back about a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutReport {
    pub power: i64,
    pub troops: Vec<TroopEstimate>,
    pub hero_name: Option<String>,
}

/// Bucket an exact count into its display band.
pub fn approximate_count(count: u32) -> &'static str {
    match count {
        0..=9 => "<10",
        10..=49 => "10-50",
        50..=99 => "50-100",
        100..=249 => "100-250",
        250..=499 => "250-500",
        _ => "500+",
    }
}

/// Preview a defending force without running combat.
pub fn scout_location(
    config: &CombatConfig,
    troops: &[TroopCount],
    hero: Option<&Hero>,
    faction: &str,
) -> Result<ScoutReport> {
    let army = Army::build(config, 0, faction, hero.cloned(), troops)?;

    let power = army_power(config, &army, 1.0);

    let troops = army
        .troops
        .iter()
        .map(|t| TroopEstimate {
            tier: t.tier,
            approximate: approximate_count(t.count).to_string(),
        })
        .collect();

    Ok(ScoutReport {
        power,
        troops,
        hero_name: army.hero.map(|h| h.name),
    })
}
