//! The module contains the representation of a challenge.
//!
//! A challenge is a time-boxed task with a progress counter and a completion
//! threshold. Progress may overshoot the target; only `completed` gates on
//! `progress >= target`, and completion is sticky once reached.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ResultEngine, error::EngineError};

/// A progress-tracked task with a fixed XP reward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub xp: i64,
    pub progress: i64,
    pub target: i64,
    pub deadline: NaiveDate,
    pub active: bool,
    pub completed: bool,
}

impl Challenge {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        xp: i64,
        target: i64,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            xp,
            progress: 0,
            target,
            deadline,
            active: true,
            completed: false,
        }
    }

    /// Set the progress counter and recompute completion.
    ///
    /// Returns whether this update is the one that completed the challenge.
    /// Overshooting the target is allowed and stored as given.
    pub fn set_progress(&mut self, progress: i64) -> ResultEngine<bool> {
        if progress < 0 {
            return Err(EngineError::InvalidProgress(format!(
                "progress for '{}' must be >= 0",
                self.id
            )));
        }

        let was_completed = self.completed;
        self.progress = progress;
        self.completed = was_completed || progress >= self.target;

        Ok(self.completed && !was_completed)
    }
}

/// The built-in challenge catalog.
pub fn default_challenges() -> Vec<Challenge> {
    let deadline = |year, month, day| {
        // The catalog is static, the dates are known valid.
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    };

    vec![
        Challenge::new(
            "no-spend-week",
            "No-Spend Week",
            "Seven consecutive days without discretionary spending",
            200,
            7,
            deadline(2026, 9, 30),
        ),
        Challenge::new(
            "save-500",
            "Save 500",
            "Put 500 aside this quarter",
            300,
            500,
            deadline(2026, 12, 31),
        ),
        Challenge::new(
            "log-30-transactions",
            "Habit Tracker",
            "Log thirty transactions this month",
            150,
            30,
            deadline(2026, 8, 31),
        ),
        Challenge::new(
            "five-lessons",
            "Study Sprint",
            "Finish five literacy lessons",
            180,
            5,
            deadline(2026, 10, 31),
        ),
        Challenge::new(
            "trim-dining",
            "Trim Dining Out",
            "Keep dining out under 100 this month",
            120,
            100,
            deadline(2026, 8, 31),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge() -> Challenge {
        Challenge::new(
            "save-500",
            "Save 500",
            "Put 500 aside",
            300,
            500,
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        )
    }

    #[test]
    fn below_target_is_not_completed() {
        let mut challenge = challenge();
        let completed_now = challenge.set_progress(499).unwrap();

        assert!(!completed_now);
        assert!(!challenge.completed);
        assert_eq!(challenge.progress, 499);
    }

    #[test]
    fn reaching_target_completes_once() {
        let mut challenge = challenge();

        assert!(challenge.set_progress(500).unwrap());
        assert!(challenge.completed);

        // Further updates never report the transition again.
        assert!(!challenge.set_progress(650).unwrap());
        assert_eq!(challenge.progress, 650);
    }

    #[test]
    fn completion_is_sticky() {
        let mut challenge = challenge();
        challenge.set_progress(500).unwrap();

        let completed_now = challenge.set_progress(120).unwrap();

        assert!(!completed_now);
        assert!(challenge.completed);
        assert_eq!(challenge.progress, 120);
    }

    #[test]
    fn negative_progress_is_rejected() {
        let mut challenge = challenge();

        assert_eq!(
            challenge.set_progress(-1),
            Err(EngineError::InvalidProgress(
                "progress for 'save-500' must be >= 0".to_string()
            ))
        );
    }
}
