pub mod config;
pub mod error;
pub mod rng;

pub use config::CombatConfig;
pub use error::{EngineError, Result};
pub use rng::BattleRng;
