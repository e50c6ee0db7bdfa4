//! Turn order resolution
//!
//! The same two-slot order repeats every round. A lone first-strike skill
//! overrides everything; otherwise the faster hero leads, and speed ties go
//! to the attacker. The attacker bias on ties is intentional and mirrored
//! by the final-power tie-break in the combat loop.

use crate::battle::army::Army;
use crate::battle::engine::Side;
use crate::battle::skills::Skill;

fn has_first_strike(army: &Army) -> bool {
    matches!(army.skill.as_ref().map(|s| s.skill), Some(Skill::FirstStrike))
}

/// Decide who acts first each round.
pub fn resolve_turn_order(attacker: &Army, defender: &Army) -> [Side; 2] {
    let attacker_first = match (has_first_strike(attacker), has_first_strike(defender)) {
        (true, false) => true,
        (false, true) => false,
        // Both or neither: fall back to hero speed, ties favor the attacker.
        _ => attacker.hero_speed() >= defender.hero_speed(),
    };

    if attacker_first {
        [Side::Attacker, Side::Defender]
    } else {
        [Side::Defender, Side::Attacker]
    }
}
