//! Warforge - deterministic battle resolution for persistent strategy games

pub mod battle;
pub mod core;
