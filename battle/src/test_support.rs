//! Scripted game and clock doubles for tests

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Result, anyhow};
use metamon_protocol::Session;

use crate::game::{GameClient, Pacer};
use crate::query::Tier;
use crate::types::{
    BagItem, BagItemKind, BattleOutcome, Creature, OpponentCandidate, PaymentReceipt, Team,
};

/// A call the automation made, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListCreatures,
    FetchOpponents { creature: String, tier: Tier },
    Pay { creature: String, opponent: String, tier: Tier },
    Fight { creature: String, opponent: String, tier: Tier },
    LevelUp(String),
    ResetExp(String),
    ListBag,
    ListTeams,
    Screen { team: String, threshold: i64 },
    Join { team: String, creatures: Vec<String> },
    Mint,
}

/// In-memory game with canned responses.
///
/// Battles pop from the outcome queue and default to a loss with no
/// experience once it runs dry. Creature listings are served in order and
/// the last one repeats.
#[derive(Default)]
pub struct ScriptedGame {
    listings: Mutex<VecDeque<Vec<Creature>>>,
    opponents: Vec<OpponentCandidate>,
    outcomes: Mutex<VecDeque<BattleOutcome>>,
    bag: Vec<BagItem>,
    teams: Vec<Team>,
    screened: Vec<Creature>,
    failing: HashSet<&'static str>,
    decline_payment: bool,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creatures(self, creatures: Vec<Creature>) -> Self {
        self.listings.lock().unwrap().push_front(creatures);
        self
    }

    /// Listing returned by the next creature lookup after the current ones
    pub fn then_listing(self, creatures: Vec<Creature>) -> Self {
        self.listings.lock().unwrap().push_back(creatures);
        self
    }

    pub fn with_opponents(mut self, opponents: Vec<OpponentCandidate>) -> Self {
        self.opponents = opponents;
        self
    }

    pub fn with_outcomes(self, outcomes: Vec<BattleOutcome>) -> Self {
        *self.outcomes.lock().unwrap() = outcomes.into();
        self
    }

    pub fn with_bag(mut self, bag: Vec<BagItem>) -> Self {
        self.bag = bag;
        self
    }

    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = teams;
        self
    }

    pub fn with_screened(mut self, screened: Vec<Creature>) -> Self {
        self.screened = screened;
        self
    }

    /// Make the named trait method return an error
    pub fn failing(mut self, method: &'static str) -> Self {
        self.failing.insert(method);
        self
    }

    pub fn declining_payment(mut self) -> Self {
        self.decline_payment = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(*c)).count()
    }

    fn record(&self, method: &'static str, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.contains(method) {
            return Err(anyhow!("scripted {} failure", method));
        }
        Ok(())
    }
}

impl GameClient for ScriptedGame {
    async fn list_owned_creatures(&self, _session: &Session) -> Result<Vec<Creature>> {
        self.record("list_owned_creatures", Call::ListCreatures)?;
        let mut listings = self.listings.lock().unwrap();
        if listings.len() > 1 {
            return Ok(listings.pop_front().unwrap_or_default());
        }
        Ok(listings.front().cloned().unwrap_or_default())
    }

    async fn fetch_opponents(
        &self,
        _session: &Session,
        _owner: &str,
        creature_id: &str,
        tier: Tier,
    ) -> Result<Vec<OpponentCandidate>> {
        self.record(
            "fetch_opponents",
            Call::FetchOpponents {
                creature: creature_id.to_string(),
                tier,
            },
        )?;
        Ok(self.opponents.clone())
    }

    async fn pay_entry_fee(
        &self,
        _session: &Session,
        creature_id: &str,
        opponent_id: &str,
        tier: Tier,
    ) -> Result<PaymentReceipt> {
        self.record(
            "pay_entry_fee",
            Call::Pay {
                creature: creature_id.to_string(),
                opponent: opponent_id.to_string(),
                tier,
            },
        )?;
        Ok(PaymentReceipt {
            paid: !self.decline_payment,
            amount: if self.decline_payment { 0 } else { 5 },
        })
    }

    async fn fight_battle(
        &self,
        _session: &Session,
        creature_id: &str,
        opponent_id: &str,
        tier: Tier,
    ) -> Result<BattleOutcome> {
        self.record(
            "fight_battle",
            Call::Fight {
                creature: creature_id.to_string(),
                opponent: opponent_id.to_string(),
                tier,
            },
        )?;
        Ok(self.outcomes.lock().unwrap().pop_front().unwrap_or_default())
    }

    async fn level_up_creature(&self, _session: &Session, creature_id: &str) -> Result<()> {
        self.record("level_up_creature", Call::LevelUp(creature_id.to_string()))
    }

    async fn reset_creature_exp(&self, _session: &Session, creature_id: &str) -> Result<()> {
        self.record("reset_creature_exp", Call::ResetExp(creature_id.to_string()))
    }

    async fn list_bag_items(&self, _session: &Session) -> Result<Vec<BagItem>> {
        self.record("list_bag_items", Call::ListBag)?;
        Ok(self.bag.clone())
    }

    async fn list_teams(&self, _session: &Session) -> Result<Vec<Team>> {
        self.record("list_teams", Call::ListTeams)?;
        Ok(self.teams.clone())
    }

    async fn screen_eligible_creatures(
        &self,
        _session: &Session,
        team_id: &str,
        rating_threshold: i64,
    ) -> Result<Vec<Creature>> {
        self.record(
            "screen_eligible_creatures",
            Call::Screen {
                team: team_id.to_string(),
                threshold: rating_threshold,
            },
        )?;
        Ok(self.screened.clone())
    }

    async fn join_team(
        &self,
        _session: &Session,
        team_id: &str,
        creature_ids: &[String],
    ) -> Result<()> {
        self.record(
            "join_team",
            Call::Join {
                team: team_id.to_string(),
                creatures: creature_ids.to_vec(),
            },
        )
    }

    async fn mint_asset(&self, _session: &Session) -> Result<()> {
        self.record("mint_asset", Call::Mint)
    }
}

/// Pacer that records requested delays instead of sleeping
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPacer {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

impl Pacer for RecordingPacer {
    async fn pause(&self, delay: Duration) {
        self.delays.lock().unwrap().push(delay);
    }
}

pub fn session() -> Session {
    Session::new("0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf", "token")
}

pub fn creature(id: &str, level: i64, exp: i64, exp_max: i64, attempts: u32) -> Creature {
    Creature {
        id: id.to_string(),
        token_id: format!("t-{id}"),
        owner: session().address,
        rarity: "R".to_string(),
        level,
        exp,
        exp_max,
        attempts_allowed: attempts,
        rating: 300,
    }
}

pub fn opponent(id: &str, rating: i64) -> OpponentCandidate {
    OpponentCandidate {
        id: id.to_string(),
        token_id: format!("t-{id}"),
        rarity: "N".to_string(),
        rating,
    }
}

pub fn outcome(won: bool, exp_gained: i64) -> BattleOutcome {
    BattleOutcome {
        won,
        exp_gained,
        fragments: if won { 10 } else { 0 },
    }
}

pub fn bag_item(kind: BagItemKind, quantity: i64) -> BagItem {
    BagItem { kind, quantity }
}

pub fn team(id: &str, locked: bool, rating_threshold: i64) -> Team {
    Team {
        id: id.to_string(),
        name: None,
        locked,
        rating_threshold,
    }
}
