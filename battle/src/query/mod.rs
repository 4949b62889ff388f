//! Query helpers for battle decision making
//!
//! Matchmaking tier selection and opponent picking.

mod opponent;
mod tier;

pub use opponent::select_weakest;
pub use tier::Tier;
