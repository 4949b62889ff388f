//! Battle automation for the Metamon game.
//!
//! This crate holds the decision logic of an auto-battling run; network
//! access and the clock are reached through the [`GameClient`] and
//! [`Pacer`] traits.
//!
//! # Overview
//!
//! ```text
//! metamon-protocol (wire format)
//!        │
//!        ▼
//! metamon-battle (domain types + run logic) ← THIS CRATE
//!        │
//!        └─> metamon-client (HTTP GameClient + binary)
//! ```
//!
//! # Main Types
//!
//! - [`Backoff`] - Jittered exponential pause before each entry fee
//! - [`select_weakest`] - Lowest-rated opponent in a pool
//! - [`Tier`] - Level-banded matchmaking bracket
//! - [`Progression`] - One creature's experience and wins across its battles
//! - [`AutoBattler`] - The run itself: teams, battles, minting
//!
//! # Example Usage
//!
//! ```ignore
//! use metamon_battle::{AutoBattler, RunOptions, TokioPacer};
//! use rand::SeedableRng;
//!
//! let rng = rand::rngs::StdRng::from_entropy();
//! let mut battler = AutoBattler::new(&client, &session, TokioPacer, rng, RunOptions::default());
//! let report = battler.run().await?;
//!
//! for summary in &report.summaries {
//!     println!("{}", summary);
//! }
//! ```

pub mod error;
pub mod game;
pub mod query;
pub mod run;
pub mod tracking;
pub mod types;

#[cfg(test)]
mod test_support;

pub use error::AutomationError;
pub use game::{GameClient, Pacer, TokioPacer};
pub use query::{Tier, select_weakest};
pub use run::{
    AutoBattler, Backoff, MINT_THRESHOLD, MintReport, RunOptions, RunReport, TEAM_RATING_CEILING,
};
pub use tracking::{BattleSummary, LEVEL_CAP, Progression, Transition};
pub use types::{
    BagItem, BagItemKind, BattleOutcome, Creature, OpponentCandidate, PaymentReceipt, Team,
};

// Re-export the session so GameClient implementors need only this crate
pub use metamon_protocol::Session;
