//! Seams to the outside world: the remote game and the clock

use std::time::Duration;

use anyhow::Result;
use metamon_protocol::Session;

use crate::query::Tier;
use crate::types::{BagItem, BattleOutcome, Creature, OpponentCandidate, PaymentReceipt, Team};

/// Remote game operations the automation depends on.
///
/// Every call receives the authenticated [`Session`] explicitly; an
/// implementation holds no per-account state of its own.
#[allow(async_fn_in_trait)]
pub trait GameClient {
    /// List the creatures owned by the session's account
    async fn list_owned_creatures(&self, session: &Session) -> Result<Vec<Creature>>;

    /// Fetch opponents for `creature_id` in `tier`
    async fn fetch_opponents(
        &self,
        session: &Session,
        owner: &str,
        creature_id: &str,
        tier: Tier,
    ) -> Result<Vec<OpponentCandidate>>;

    /// Pay the entry fee for a battle against `opponent_id`
    async fn pay_entry_fee(
        &self,
        session: &Session,
        creature_id: &str,
        opponent_id: &str,
        tier: Tier,
    ) -> Result<PaymentReceipt>;

    /// Fight a paid battle against `opponent_id`
    async fn fight_battle(
        &self,
        session: &Session,
        creature_id: &str,
        opponent_id: &str,
        tier: Tier,
    ) -> Result<BattleOutcome>;

    async fn level_up_creature(&self, session: &Session, creature_id: &str) -> Result<()>;

    async fn reset_creature_exp(&self, session: &Session, creature_id: &str) -> Result<()>;

    async fn list_bag_items(&self, session: &Session) -> Result<Vec<BagItem>>;

    async fn list_teams(&self, session: &Session) -> Result<Vec<Team>>;

    /// List the account's creatures rated below `rating_threshold` for `team_id`
    async fn screen_eligible_creatures(
        &self,
        session: &Session,
        team_id: &str,
        rating_threshold: i64,
    ) -> Result<Vec<Creature>>;

    async fn join_team(&self, session: &Session, team_id: &str, creature_ids: &[String])
    -> Result<()>;

    async fn mint_asset(&self, session: &Session) -> Result<()>;
}

/// Suspends the run between paid actions
#[allow(async_fn_in_trait)]
pub trait Pacer {
    async fn pause(&self, delay: Duration);
}

/// Pacer backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}
