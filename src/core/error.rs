use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid troop tier: {0} (expected 1-4)")]
    InvalidTier(u8),

    #[error("Invalid terrain bonus: {0} (must be finite and >= 0)")]
    InvalidTerrainBonus(f64),

    #[error("Invalid faction bonus for '{faction}': attack {attack}, defense {defense} (must be finite and >= 0)")]
    InvalidFactionBonus {
        faction: String,
        attack: f64,
        defense: f64,
    },

    #[error("Invalid hero '{hero}': {reason}")]
    InvalidHero { hero: String, reason: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
