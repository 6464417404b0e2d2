//! Badge unlocks.

use chrono::Utc;

use crate::{
    ResultEngine,
    badges::{Badge, RECENT_UNLOCKS_CAP, RecentUnlock},
    error::EngineError,
};

use super::{Engine, xp::XpAward};

/// The outcome of a badge unlock attempt.
///
/// A second unlock of the same badge is a no-op: `newly_unlocked` is false
/// and no XP is granted.
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeUnlock {
    pub badge: Badge,
    pub newly_unlocked: bool,
    pub award: Option<XpAward>,
}

impl Engine {
    /// Unlock a badge and grant its configured reward.
    ///
    /// The unlock state is set first, then the grant is attributed as
    /// "unlocked <badge title>" in the history ledger.
    pub fn unlock_badge(&mut self, badge_id: &str) -> ResultEngine<BadgeUnlock> {
        let index = self
            .badges
            .iter()
            .position(|badge| badge.id == badge_id)
            .ok_or_else(|| EngineError::KeyNotFound(badge_id.to_string()))?;

        if self.badges[index].unlocked {
            return Ok(BadgeUnlock {
                badge: self.badges[index].clone(),
                newly_unlocked: false,
                award: None,
            });
        }

        let unlocked_at = Utc::now();
        let (title, xp) = {
            let badge = &mut self.badges[index];
            badge.unlocked = true;
            badge.unlocked_at = Some(unlocked_at);
            (badge.title.clone(), badge.xp)
        };

        self.recent_unlocks.push_back(RecentUnlock {
            badge_id: badge_id.to_string(),
            title: title.clone(),
            unlocked_at,
        });
        while self.recent_unlocks.len() > RECENT_UNLOCKS_CAP {
            self.recent_unlocks.pop_front();
        }

        let award = self.add_xp(xp, &format!("unlocked {title}"))?;
        tracing::info!(badge = badge_id, xp, "badge unlocked");

        Ok(BadgeUnlock {
            badge: self.badges[index].clone(),
            newly_unlocked: true,
            award: Some(award),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::builder().build().unwrap()
    }

    #[test]
    fn unlock_grants_the_configured_reward() {
        let mut engine = engine();
        let unlock = engine.unlock_badge("first-transaction").unwrap();

        assert!(unlock.newly_unlocked);
        assert!(unlock.badge.unlocked);
        assert!(unlock.badge.unlocked_at.is_some());

        let award = unlock.award.unwrap();
        assert_eq!(award.amount, 50);
        assert_eq!(award.reason, "unlocked First Steps");
        assert_eq!(engine.total_xp(), 50);
    }

    #[test]
    fn double_unlock_is_a_no_op() {
        let mut engine = engine();
        engine.unlock_badge("goal-getter").unwrap();
        let before = engine.snapshot();

        let unlock = engine.unlock_badge("goal-getter").unwrap();

        assert!(!unlock.newly_unlocked);
        assert!(unlock.award.is_none());
        // Same final state: no extra XP, history entry or queue append.
        let after = engine.snapshot();
        assert_eq!(after.total_xp, before.total_xp);
        assert_eq!(after.history.len(), before.history.len());
        assert_eq!(after.recent_unlocks.len(), before.recent_unlocks.len());
    }

    #[test]
    fn unlock_feeds_the_recent_queue() {
        let mut engine = engine();
        engine.unlock_badge("first-transaction").unwrap();
        engine.unlock_badge("curious-mind").unwrap();

        let recent: Vec<_> = engine.recent_unlocks().collect();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].badge_id, "first-transaction");
        assert_eq!(recent[1].badge_id, "curious-mind");
    }

    #[test]
    fn unknown_badge_fails() {
        let mut engine = engine();

        assert_eq!(
            engine.unlock_badge("missing"),
            Err(EngineError::KeyNotFound("missing".to_string()))
        );
    }
}
