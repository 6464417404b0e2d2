//! XP accrual and level-transition detection.

use crate::{
    ResultEngine,
    error::EngineError,
    leveling::{UserLevel, benefits_between, calculate_level},
};

use super::Engine;

/// A level transition, detected by comparing the level view before and after
/// a grant. One grant reports at most one transition, even when it spans
/// several levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelUp {
    pub from: u32,
    pub to: u32,
    /// Benefits newly unlocked in the crossed range.
    pub rewards: Vec<String>,
}

/// The outcome of an XP grant.
#[derive(Clone, Debug, PartialEq)]
pub struct XpAward {
    pub amount: i64,
    pub reason: String,
    pub total_xp: i64,
    pub level: UserLevel,
    pub level_up: Option<LevelUp>,
}

impl Engine {
    /// Grant XP and recompute the level view wholesale.
    ///
    /// The previous view is replaced, never patched. Rejects non-positive
    /// amounts. Every grant is attributed in the history ledger with the
    /// given reason.
    pub fn add_xp(&mut self, amount: i64, reason: &str) -> ResultEngine<XpAward> {
        if amount <= 0 {
            return Err(EngineError::InvalidAmount(
                "xp amount must be > 0".to_string(),
            ));
        }

        let previous_level = self.level.level;
        self.total_xp += amount;
        self.level = calculate_level(self.total_xp, &self.config);
        self.history.record(amount, reason, self.total_xp);
        tracing::debug!(amount, reason, total_xp = self.total_xp, "xp granted");

        let level_up = (self.level.level > previous_level).then(|| LevelUp {
            from: previous_level,
            to: self.level.level,
            rewards: benefits_between(previous_level, self.level.level),
        });
        if let Some(up) = &level_up {
            tracing::info!(from = up.from, to = up.to, "level up");
        }

        Ok(XpAward {
            amount,
            reason: reason.to_string(),
            total_xp: self.total_xp,
            level: self.level.clone(),
            level_up,
        })
    }
}
