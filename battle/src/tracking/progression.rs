//! Progression - session state of one creature's battle sequence

use std::fmt;

use crate::query::Tier;
use crate::types::{BattleOutcome, Creature};

/// Level at which a full creature has its experience reset instead of
/// levelling up
pub const LEVEL_CAP: i64 = 60;

/// Maintenance a creature needs before its next battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    LevelUp,
    ResetExp,
}

/// Mutable battle-session state of one creature.
///
/// Experience only grows between battles, except when a level-up lands;
/// wins never go down. The service stays authoritative for everything else.
#[derive(Debug, Clone)]
pub struct Progression {
    creature_id: String,
    level: i64,
    exp: i64,
    /// Cap for the current level; unknown after a local level-up until the
    /// service reports the new one
    exp_max: Option<i64>,
    attempts_allowed: u32,
    battles: u32,
    wins: u32,
}

impl Progression {
    pub fn new(creature: &Creature) -> Self {
        Self {
            creature_id: creature.id.clone(),
            level: creature.level,
            exp: creature.exp,
            exp_max: Some(creature.exp_max),
            attempts_allowed: creature.attempts_allowed,
            battles: 0,
            wins: 0,
        }
    }

    pub fn creature_id(&self) -> &str {
        &self.creature_id
    }

    pub fn level(&self) -> i64 {
        self.level
    }

    pub fn exp(&self) -> i64 {
        self.exp
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn battles(&self) -> u32 {
        self.battles
    }

    /// Matchmaking tier for the current level
    pub fn tier(&self) -> Tier {
        Tier::for_level(self.level)
    }

    /// Whether every allowed attempt has been used
    pub fn is_done(&self) -> bool {
        self.battles >= self.attempts_allowed
    }

    /// Transition required before the next battle, if any.
    ///
    /// Nothing is requested while the cap is unknown.
    pub fn pending_transition(&self) -> Option<Transition> {
        let exp_max = self.exp_max?;
        if self.exp < exp_max {
            return None;
        }

        if self.level >= LEVEL_CAP {
            Some(Transition::ResetExp)
        } else {
            Some(Transition::LevelUp)
        }
    }

    /// Whether the experience cap of the current level is known
    pub fn cap_known(&self) -> bool {
        self.exp_max.is_some()
    }

    /// Apply a level-up the service accepted.
    ///
    /// The old cap no longer applies, so it is forgotten until
    /// [`Progression::refresh`] supplies the new one.
    pub fn level_up_succeeded(&mut self) {
        self.level += 1;
        self.exp = 0;
        self.exp_max = None;
    }

    /// Adopt the service's view of level, experience and cap
    pub fn refresh(&mut self, creature: &Creature) {
        self.level = creature.level;
        self.exp = creature.exp;
        self.exp_max = Some(creature.exp_max);
    }

    /// Fold a battle outcome into the session state
    pub fn record(&mut self, outcome: &BattleOutcome) {
        self.battles += 1;
        self.exp += outcome.exp_gained.max(0);
        if outcome.won {
            self.wins += 1;
        }
    }

    pub fn summary(&self) -> BattleSummary {
        BattleSummary {
            creature_id: self.creature_id.clone(),
            battles: self.battles,
            wins: self.wins,
        }
    }
}

/// End-of-sequence totals for one creature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleSummary {
    pub creature_id: String,
    pub battles: u32,
    pub wins: u32,
}

impl BattleSummary {
    /// Win rate as a whole percentage, rounded down
    pub fn win_rate(&self) -> Option<u32> {
        if self.battles == 0 {
            return None;
        }
        Some(self.wins * 100 / self.battles)
    }
}

impl fmt::Display for BattleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "creature {}: total battles: {}, win: {}, win rate: {}%",
            self.creature_id,
            self.battles,
            self.wins,
            self.win_rate().unwrap_or(0)
        )
    }
}
