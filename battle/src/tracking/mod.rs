//! Per-creature progression tracking across a run

mod progression;

pub use progression::{BattleSummary, LEVEL_CAP, Progression, Transition};
