//! Army data model for battle resolution
//!
//! Armies are built fresh from caller-owned descriptors at the start of each
//! `resolve_battle` call and discarded with the result. The engine never
//! mutates or retains them.

use serde::{Deserialize, Serialize};

use crate::battle::elements::Element;
use crate::battle::skills::SkillSpec;
use crate::core::config::CombatConfig;
use crate::core::error::{EngineError, Result};

/// Troop tiers run 1 (weakest) through 4 (strongest).
pub const MIN_TIER: u8 = 1;
pub const MAX_TIER: u8 = 4;

/// A count of troops of a single tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TroopCount {
    pub tier: u8,
    pub count: u32,
}

impl TroopCount {
    pub fn new(tier: u8, count: u32) -> Self {
        Self { tier, count }
    }
}

/// Per-faction power multipliers; the larger of the two is used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactionBonus {
    pub attack: f64,
    pub defense: f64,
}

impl Default for FactionBonus {
    fn default() -> Self {
        Self {
            attack: 1.0,
            defense: 1.0,
        }
    }
}

impl FactionBonus {
    pub fn combined(&self) -> f64 {
        self.attack.max(self.defense)
    }
}

/// Hero rarity grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Combat-relevant subset of a hero
///
/// `name` is the lookup key into the skill registry: a hero whose name has
/// an entry carries exactly that one skill, anyone else fights skill-less.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub faction: String,
    pub element: Option<Element>,
    pub rarity: Rarity,
    pub level: u32,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
    pub hp: i64,
}

impl Hero {
    /// Derived power contribution: attack + defense + speed + hp/10 + (level-1)*5
    pub fn power(&self) -> i64 {
        self.attack + self.defense + self.speed + self.hp / 10 + (self.level.saturating_sub(1) as i64) * 5
    }
}

/// An army assembled for a single battle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Army {
    pub owner_id: u64,
    pub hero: Option<Hero>,
    /// The hero's skill, resolved once from the registry at build time.
    pub skill: Option<SkillSpec>,
    pub troops: Vec<TroopCount>,
    pub faction_bonus: FactionBonus,
}

impl Army {
    /// Build an army from a battle descriptor, validating troop tiers and
    /// resolving the faction bonus and hero skill from config tables.
    pub fn build(
        config: &CombatConfig,
        owner_id: u64,
        faction: &str,
        hero: Option<Hero>,
        troops: &[TroopCount],
    ) -> Result<Self> {
        validate_troops(troops)?;
        if let Some(hero) = &hero {
            validate_hero(hero)?;
        }

        let faction_bonus = config
            .faction_bonuses
            .get(faction)
            .copied()
            .unwrap_or_default();

        let skill = hero
            .as_ref()
            .and_then(|h| config.skill_registry.get(&h.name))
            .cloned();

        Ok(Self {
            owner_id,
            hero,
            skill,
            troops: troops.to_vec(),
            faction_bonus,
        })
    }

    pub fn hero_speed(&self) -> i64 {
        self.hero.as_ref().map_or(0, |h| h.speed)
    }

    pub fn hero_element(&self) -> Option<Element> {
        self.hero.as_ref().and_then(|h| h.element)
    }
}

/// Reject out-of-range tiers before any combat computation runs.
pub fn validate_troops(troops: &[TroopCount]) -> Result<()> {
    for troop in troops {
        if !(MIN_TIER..=MAX_TIER).contains(&troop.tier) {
            return Err(EngineError::InvalidTier(troop.tier));
        }
    }
    Ok(())
}

fn validate_hero(hero: &Hero) -> Result<()> {
    for (field, value) in [
        ("attack", hero.attack),
        ("defense", hero.defense),
        ("speed", hero.speed),
        ("hp", hero.hp),
    ] {
        if value < 0 {
            return Err(EngineError::InvalidHero {
                hero: hero.name.clone(),
                reason: format!("{} must be >= 0, got {}", field, value),
            });
        }
    }
    Ok(())
}
