//! Hero elements and the elemental advantage cycle
//!
//! A fixed one-way cycle decides whether one hero's element beats the
//! other's; the advantaged side gets a flat power bonus. At most one side
//! can hold the advantage in a battle, and the relation needs both heroes
//! to carry an element at all.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::config::CombatConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wind,
    Fire,
    Earth,
    Lightning,
    Water,
    Ice,
}

/// Which side, if any, holds the elemental advantage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementalAdvantage {
    Attacker,
    Defender,
    None,
}

/// Default advantage cycle: Wind > Fire > Earth > Lightning > Water > Ice > Wind.
///
/// Adjacent elements beat each other one way; elements two or more steps
/// apart are neutral (wind and water have no relation, in either direction).
pub fn default_advantage_cycle() -> HashMap<Element, Element> {
    use Element::*;
    HashMap::from([
        (Wind, Fire),
        (Fire, Earth),
        (Earth, Lightning),
        (Lightning, Water),
        (Water, Ice),
        (Ice, Wind),
    ])
}

/// Resolve which side holds the elemental advantage.
pub fn resolve_elemental_advantage(
    config: &CombatConfig,
    attacker: Option<Element>,
    defender: Option<Element>,
) -> ElementalAdvantage {
    let (Some(attacker), Some(defender)) = (attacker, defender) else {
        return ElementalAdvantage::None;
    };

    if config.element_beats.get(&attacker) == Some(&defender) {
        ElementalAdvantage::Attacker
    } else if config.element_beats.get(&defender) == Some(&attacker) {
        ElementalAdvantage::Defender
    } else {
        ElementalAdvantage::None
    }
}
