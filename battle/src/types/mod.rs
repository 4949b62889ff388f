//! Domain types built from the game API's wire types

mod creature;
mod inventory;

pub use creature::{BattleOutcome, Creature, OpponentCandidate, PaymentReceipt};
pub use inventory::{BagItem, BagItemKind, Team};
