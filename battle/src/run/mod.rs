//! The automation run: team enrollment, battles, minting
//!
//! Everything is sequential. One creature at a time, one battle at a time,
//! and the only deliberate suspension is the [`Backoff`] pause before each
//! entry fee is paid.

mod backoff;
mod mint;
mod team;

use metamon_protocol::Session;
use rand::Rng;

pub use backoff::Backoff;
pub use mint::{MINT_THRESHOLD, MintReport, mint_from_bag, mintable};
pub use team::{TEAM_RATING_CEILING, enroll_teams, pick_team};

use crate::error::AutomationError;
use crate::game::{GameClient, Pacer};
use crate::query::select_weakest;
use crate::tracking::{BattleSummary, Progression, Transition};
use crate::types::Creature;

/// Knobs of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub backoff: Backoff,
    /// Run the team enrollment pass before battling
    pub join_teams: bool,
    /// Run the mint pass after battling
    pub mint: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            backoff: Backoff::default(),
            join_teams: true,
            mint: true,
        }
    }
}

/// What a completed run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub summaries: Vec<BattleSummary>,
    pub team_enrollments: usize,
    pub mint: MintReport,
}

/// Drives every owned creature through its battle allotment
pub struct AutoBattler<'a, C, P, R> {
    client: &'a C,
    session: &'a Session,
    pacer: P,
    rng: R,
    options: RunOptions,
}

impl<'a, C, P, R> AutoBattler<'a, C, P, R>
where
    C: GameClient,
    P: Pacer,
    R: Rng,
{
    pub fn new(client: &'a C, session: &'a Session, pacer: P, rng: R, options: RunOptions) -> Self {
        Self {
            client,
            session,
            pacer,
            rng,
            options,
        }
    }

    /// Run to completion: teams, then every creature's battles, then minting.
    ///
    /// Any fatal error stops the run where it happened.
    pub async fn run(&mut self) -> Result<RunReport, AutomationError> {
        let mut report = RunReport::default();

        if self.options.join_teams {
            report.team_enrollments = enroll_teams(self.client, self.session).await?;
        }

        report.summaries = self.battle_all().await?;

        if self.options.mint {
            report.mint = mint_from_bag(self.client, self.session).await;
        }

        Ok(report)
    }

    /// Battle with every creature the account owns
    pub async fn battle_all(&mut self) -> Result<Vec<BattleSummary>, AutomationError> {
        let creatures = self
            .client
            .list_owned_creatures(self.session)
            .await
            .map_err(|e| AutomationError::account("list owned creatures", e))?;

        tracing::info!(count = creatures.len(), "Loaded creatures");

        let mut summaries = Vec::with_capacity(creatures.len());
        for creature in &creatures {
            summaries.push(self.battle_creature(creature).await?);
        }
        Ok(summaries)
    }

    /// Spend all of one creature's attempts
    pub async fn battle_creature(
        &mut self,
        creature: &Creature,
    ) -> Result<BattleSummary, AutomationError> {
        let mut progression = Progression::new(creature);
        let mut attempt: i64 = 0;

        while !progression.is_done() {
            self.prepare(&mut progression).await?;
            self.fight_once(creature, &mut progression, attempt).await?;
            attempt += 1;
        }

        let summary = progression.summary();
        if summary.battles > 0 {
            tracing::info!(
                creature = %summary.creature_id,
                battles = summary.battles,
                wins = summary.wins,
                win_rate = summary.win_rate().unwrap_or(0),
                "{}",
                summary
            );
        }
        Ok(summary)
    }

    /// Level up or reset experience if the creature is full
    async fn prepare(&self, progression: &mut Progression) -> Result<(), AutomationError> {
        let id = progression.creature_id().to_string();

        match progression.pending_transition() {
            None => {}
            Some(Transition::ResetExp) => {
                tracing::info!(creature = %id, "Creature at level cap needs an EXP reset");
                self.client
                    .reset_creature_exp(self.session, &id)
                    .await
                    .map_err(|e| AutomationError::call("reset exp", &id, e))?;
            }
            Some(Transition::LevelUp) => {
                match self.client.level_up_creature(self.session, &id).await {
                    Ok(()) => {
                        progression.level_up_succeeded();
                        tracing::info!(creature = %id, level = progression.level(), "Levelled up");
                        self.refresh(progression).await;
                    }
                    Err(e) => {
                        tracing::warn!(creature = %id, error = %e, "Level up failed, fighting anyway");
                    }
                }
            }
        }

        Ok(())
    }

    /// Reload level and experience cap from the service after a level-up.
    ///
    /// A failed or empty lookup is not fatal; the cap then stays unknown and
    /// no further transitions are requested for this creature this run.
    async fn refresh(&self, progression: &mut Progression) {
        let creatures = match self.client.list_owned_creatures(self.session).await {
            Ok(creatures) => creatures,
            Err(e) => {
                tracing::warn!(creature = %progression.creature_id(), error = %e, "Could not reload creature after level up");
                return;
            }
        };

        match creatures.iter().find(|c| c.id == progression.creature_id()) {
            Some(creature) => {
                progression.refresh(creature);
                tracing::debug!(
                    creature = %creature.id,
                    level = creature.level,
                    exp = creature.exp,
                    exp_max = creature.exp_max,
                    "Reloaded creature"
                );
            }
            None => {
                tracing::warn!(creature = %progression.creature_id(), "Creature missing from listing after level up");
            }
        }
    }

    /// Pick an opponent, pay, fight and record the outcome
    async fn fight_once(
        &mut self,
        creature: &Creature,
        progression: &mut Progression,
        attempt: i64,
    ) -> Result<(), AutomationError> {
        let id = creature.id.as_str();
        let tier = progression.tier();

        let candidates = self
            .client
            .fetch_opponents(self.session, &creature.owner, id, tier)
            .await
            .map_err(|e| AutomationError::call("fetch opponents", id, e))?;

        let opponent = select_weakest(id, &candidates)?;
        tracing::info!(
            creature = %id,
            opponent = %opponent.id,
            token = %opponent.token_id,
            rarity = %opponent.rarity,
            rating = opponent.rating,
            tier = %tier,
            "Picked weakest opponent"
        );

        let delay = self.options.backoff.next(attempt, &mut self.rng);
        self.pacer.pause(delay).await;

        let receipt = self
            .client
            .pay_entry_fee(self.session, id, &opponent.id, tier)
            .await
            .map_err(|e| AutomationError::call("pay entry fee", id, e))?;

        if !receipt.paid {
            return Err(AutomationError::PaymentDeclined {
                creature: id.to_string(),
            });
        }
        tracing::info!(creature = %id, amount = receipt.amount, "Paid entry fee");

        let outcome = self
            .client
            .fight_battle(self.session, id, &opponent.id, tier)
            .await
            .map_err(|e| AutomationError::call("fight battle", id, e))?;

        progression.record(&outcome);
        tracing::info!(
            creature = %id,
            won = outcome.won,
            exp = outcome.exp_gained,
            fragments = outcome.fragments,
            "Battle finished"
        );

        Ok(())
    }
}
