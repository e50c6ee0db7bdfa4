//! Hero skills
//!
//! Skills are a closed set of tagged variants rather than name-keyed
//! behavior: the registry maps a hero name to a `SkillSpec` exactly once
//! while the army is built, and all dispatch afterwards is on the enum.
//! Each hero carries at most one skill.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A hero ability and when it applies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Skill {
    /// Pre-battle: adds `floor(own_power * pct)` to own power.
    Buff(f64),
    /// Per attack, 20% trigger chance: multiplies base damage.
    DamageMultiplier(f64),
    /// Consumes the first incoming attack for zero damage.
    Immunity,
    /// All incoming damage multiplied by this factor, whole battle.
    DamageReduction(f64),
    /// Reflects this fraction of each hit back at the attacker.
    Counterattack(f64),
    /// If this side wins, wounded counts reduced by this fraction.
    PostBattleHeal(f64),
    /// Consumed during turn-order resolution; never re-triggers in combat.
    FirstStrike,
}

impl Skill {
    /// The tunable value carried by the variant, if any.
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Skill::Buff(v)
            | Skill::DamageMultiplier(v)
            | Skill::DamageReduction(v)
            | Skill::Counterattack(v)
            | Skill::PostBattleHeal(v) => Some(*v),
            Skill::Immunity | Skill::FirstStrike => None,
        }
    }
}

/// Registry entry: display name, behavior, flavor description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSpec {
    pub name: String,
    pub skill: Skill,
    pub description: String,
}

impl SkillSpec {
    fn new(name: &str, skill: Skill, description: &str) -> Self {
        Self {
            name: name.to_string(),
            skill,
            description: description.to_string(),
        }
    }
}

/// One recorded skill activation in a battle result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillActivation {
    pub hero: String,
    pub skill: String,
    pub effect: String,
}

/// Built-in hero roster. Callers can replace or extend this table through
/// `CombatConfig::skill_registry`.
pub fn default_skill_registry() -> HashMap<String, SkillSpec> {
    let entries = [
        (
            "Saitama",
            SkillSpec::new(
                "One Punch",
                Skill::DamageMultiplier(10.0),
                "A single serious punch. Usually ends the argument.",
            ),
        ),
        (
            "Goku",
            SkillSpec::new(
                "Kamehameha",
                Skill::DamageMultiplier(3.0),
                "Channelled energy wave that triples the blow.",
            ),
        ),
        (
            "Ryu",
            SkillSpec::new(
                "Hadouken",
                Skill::Counterattack(0.10),
                "Answers every hit with a surge of its own.",
            ),
        ),
        (
            "T-800 Terminator",
            SkillSpec::new(
                "Titanium Armor",
                Skill::DamageReduction(0.7),
                "Hyperalloy chassis shrugs off part of every impact.",
            ),
        ),
        (
            "Natsu",
            SkillSpec::new(
                "Flame Shield",
                Skill::Immunity,
                "A wall of fire swallows the first strike whole.",
            ),
        ),
        (
            "Daenerys",
            SkillSpec::new(
                "Dragon Fire",
                Skill::PostBattleHeal(0.05),
                "Victory's warmth mends part of the wounded ranks.",
            ),
        ),
        (
            "The Flash",
            SkillSpec::new(
                "Speed Force",
                Skill::FirstStrike,
                "Moves before anyone else has decided to.",
            ),
        ),
        (
            "Leonidas",
            SkillSpec::new(
                "Battle Cry",
                Skill::Buff(0.15),
                "A roar that hardens the whole line before contact.",
            ),
        ),
    ];

    entries
        .into_iter()
        .map(|(hero, spec)| (hero.to_string(), spec))
        .collect()
}

/// Pre-battle buff: extra power for a side whose hero carries `Buff`.
///
/// Both sides are checked independently; effects do not interact.
pub fn prebattle_power_bonus(power: i64, skill: Option<&SkillSpec>) -> i64 {
    match skill.map(|s| s.skill) {
        Some(Skill::Buff(pct)) => (power as f64 * pct).floor() as i64,
        _ => 0,
    }
}
