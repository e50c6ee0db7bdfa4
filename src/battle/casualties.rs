//! Casualty calculation
//!
//! Converts power lost during the battle into dead and wounded troop counts
//! per tier. Losers bleed harder than winners, and the rate scales with how
//! much of the side's power was actually destroyed, capped so an army is
//! never fully wiped by the formula alone.

use serde::{Deserialize, Serialize};

use crate::battle::army::TroopCount;
use crate::core::config::CombatConfig;

/// Casualty rate floor for the losing side
const LOSER_BASE_RATE: f64 = 0.5;

/// Casualty rate floor for the winning side
const WINNER_BASE_RATE: f64 = 0.1;

/// Extra casualty rate per unit of power-loss ratio
const POWER_LOSS_SCALING: f64 = 0.3;

/// Hard cap on the casualty rate
const MAX_CASUALTY_RATE: f64 = 0.8;

/// Dead and wounded troops for one side, per tier.
/// Tiers with zero losses are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasualtyReport {
    pub dead: Vec<TroopCount>,
    pub wounded: Vec<TroopCount>,
}

impl CasualtyReport {
    pub fn total_dead(&self) -> u64 {
        self.dead.iter().map(|t| t.count as u64).sum()
    }

    pub fn total_wounded(&self) -> u64 {
        self.wounded.iter().map(|t| t.count as u64).sum()
    }
}

/// Fraction of a side's troops lost, given the battle outcome and how much
/// of its power was destroyed.
pub fn casualty_rate(is_loser: bool, initial_power: i64, final_power: i64) -> f64 {
    let power_loss_ratio = if initial_power > 0 {
        1.0 - final_power as f64 / initial_power as f64
    } else {
        0.0
    };

    let base = if is_loser {
        LOSER_BASE_RATE
    } else {
        WINNER_BASE_RATE
    };

    (base + power_loss_ratio * POWER_LOSS_SCALING).min(MAX_CASUALTY_RATE)
}

/// Compute one side's casualties.
pub fn calculate_casualties(
    config: &CombatConfig,
    troops: &[TroopCount],
    is_loser: bool,
    initial_power: i64,
    final_power: i64,
) -> CasualtyReport {
    let rate = casualty_rate(is_loser, initial_power, final_power);

    let mut report = CasualtyReport::default();
    for troop in troops {
        let total_lost = (troop.count as f64 * rate).floor() as u32;
        if total_lost == 0 {
            continue;
        }

        let dead = (total_lost as f64 * (1.0 - config.hospital_recovery_rate)).floor() as u32;
        let wounded = total_lost - dead;

        if dead > 0 {
            report.dead.push(TroopCount::new(troop.tier, dead));
        }
        if wounded > 0 {
            report.wounded.push(TroopCount::new(troop.tier, wounded));
        }
    }

    report
}

/// Post-battle heal skill: the winner's wounded counts shrink by `recover_pct`.
pub fn apply_post_battle_heal(report: &mut CasualtyReport, recover_pct: f64) {
    for wounded in &mut report.wounded {
        wounded.count = (wounded.count as f64 * (1.0 - recover_pct)).floor() as u32;
    }
    report.wounded.retain(|t| t.count > 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loser_rate_floor() {
        // No power lost at all: loser still bleeds at the base rate.
        assert_eq!(casualty_rate(true, 1000, 1000), 0.5);
        assert_eq!(casualty_rate(false, 1000, 1000), 0.1);
    }

    #[test]
    fn test_rate_caps_at_point_eight() {
        // Total power loss as loser: 0.5 + 0.3 = 0.8, exactly the cap.
        assert_eq!(casualty_rate(true, 1000, 0), 0.8);
        // Degenerate zero-power army contributes no loss ratio.
        assert_eq!(casualty_rate(true, 0, 0), 0.5);
    }

    #[test]
    fn test_dead_wounded_split() {
        let config = CombatConfig::default();
        let troops = vec![TroopCount::new(1, 100)];
        // Loser, half power lost: rate = 0.5 + 0.5*0.3 = 0.65 -> 65 lost.
        // dead = floor(65 * 0.4) = 26, wounded = 39.
        let report = calculate_casualties(&config, &troops, true, 1000, 500);
        assert_eq!(report.dead, vec![TroopCount::new(1, 26)]);
        assert_eq!(report.wounded, vec![TroopCount::new(1, 39)]);
    }

    #[test]
    fn test_zero_loss_tiers_omitted() {
        let config = CombatConfig::default();
        let troops = vec![TroopCount::new(1, 1), TroopCount::new(4, 100)];
        // Winner, no power lost: rate 0.1; tier 1 loses floor(0.1) = 0.
        let report = calculate_casualties(&config, &troops, false, 1000, 1000);
        assert!(report.dead.iter().all(|t| t.tier == 4));
        assert!(report.wounded.iter().all(|t| t.tier == 4));
    }

    #[test]
    fn test_losses_never_exceed_troops_sent() {
        let config = CombatConfig::default();
        for count in [0u32, 1, 7, 50, 999] {
            let troops = vec![TroopCount::new(2, count)];
            let report = calculate_casualties(&config, &troops, true, 500, 0);
            let lost = report.total_dead() + report.total_wounded();
            assert!(lost <= count as u64);
        }
    }

    #[test]
    fn test_post_battle_heal_shrinks_wounded() {
        let mut report = CasualtyReport {
            dead: vec![TroopCount::new(1, 10)],
            wounded: vec![TroopCount::new(1, 40), TroopCount::new(2, 1)],
        };
        apply_post_battle_heal(&mut report, 0.05);
        // 40 * 0.95 = 38; 1 * 0.95 floors to 0 and the entry is dropped.
        assert_eq!(report.wounded, vec![TroopCount::new(1, 38)]);
        assert_eq!(report.dead, vec![TroopCount::new(1, 10)]);
    }
}
