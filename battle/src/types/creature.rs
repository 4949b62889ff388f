//! Creatures, opponents and battle results

use metamon_protocol::{BattleResult, Monster, PayResult};

/// One of the account's own creatures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub id: String,
    pub token_id: String,
    /// Address of the owning account
    pub owner: String,
    pub rarity: String,
    pub level: i64,
    pub exp: i64,
    /// Experience cap for the current level, as reported by the service
    pub exp_max: i64,
    /// Battles this run may fight (the creature's remaining tickets)
    pub attempts_allowed: u32,
    pub rating: i64,
}

impl From<Monster> for Creature {
    fn from(monster: Monster) -> Self {
        Self {
            id: monster.id,
            token_id: monster.token_id,
            owner: monster.owner,
            rarity: monster.rarity,
            level: monster.level,
            exp: monster.exp.max(0),
            exp_max: monster.exp_max,
            attempts_allowed: u32::try_from(monster.tear.max(0)).unwrap_or(u32::MAX),
            rating: monster.sca,
        }
    }
}

/// A creature offered as a battle target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentCandidate {
    pub id: String,
    pub token_id: String,
    pub rarity: String,
    pub rating: i64,
}

impl From<Monster> for OpponentCandidate {
    fn from(monster: Monster) -> Self {
        Self {
            id: monster.id,
            token_id: monster.token_id,
            rarity: monster.rarity,
            rating: monster.sca,
        }
    }
}

/// Result of paying a battle's entry fee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub paid: bool,
    pub amount: i64,
}

impl From<PayResult> for PaymentReceipt {
    fn from(result: PayResult) -> Self {
        Self {
            paid: result.pay,
            amount: result.amount,
        }
    }
}

/// Result of a single battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BattleOutcome {
    pub won: bool,
    pub exp_gained: i64,
    /// Egg fragments awarded
    pub fragments: i64,
}

impl From<BattleResult> for BattleOutcome {
    fn from(result: BattleResult) -> Self {
        Self {
            won: result.challenge_result,
            exp_gained: result.challenge_exp.max(0),
            fragments: result.bp_fragment_num,
        }
    }
}
