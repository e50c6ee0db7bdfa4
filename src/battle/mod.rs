//! Battle resolution engine
//!
//! Pure, deterministic resolution of two-army battles: no I/O, no retained
//! state, no hidden configuration. Callers build a `CombatContext`, pass a
//! `CombatConfig`, and apply the returned result to their own persisted
//! state.

pub mod army;
pub mod casualties;
pub mod elements;
pub mod engine;
pub mod power;
pub mod rewards;
pub mod scout;
pub mod skills;
pub mod turn_order;

// Re-exports for convenient access
pub use army::{Army, FactionBonus, Hero, Rarity, TroopCount};
pub use casualties::{calculate_casualties, casualty_rate, CasualtyReport};
pub use elements::{resolve_elemental_advantage, Element, ElementalAdvantage};
pub use engine::{
    resolve_battle, BattlePhase, BattleType, CombatContext, DetailedBattleResult, PhaseAction,
    Side, SideDescriptor,
};
pub use power::army_power;
pub use rewards::{calculate_hero_xp, calculate_loot, Resources};
pub use scout::{scout_location, ScoutReport, TroopEstimate};
pub use skills::{default_skill_registry, Skill, SkillActivation, SkillSpec};
pub use turn_order::resolve_turn_order;
