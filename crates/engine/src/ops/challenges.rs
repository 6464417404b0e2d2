//! Challenge progress updates.

use crate::{ResultEngine, challenges::Challenge, error::EngineError};

use super::Engine;

/// The outcome of a progress update.
///
/// `completed_now` is true only on the transition to completed; callers use
/// it to grant the challenge's static reward exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct ChallengeUpdate {
    pub challenge: Challenge,
    pub completed_now: bool,
}

impl Engine {
    /// Set a challenge's progress and recompute completion.
    ///
    /// Grants no XP itself: the reward follows from a separate
    /// [`Engine::add_xp`] call by the caller, attributed to the challenge.
    pub fn update_challenge_progress(
        &mut self,
        challenge_id: &str,
        progress: i64,
    ) -> ResultEngine<ChallengeUpdate> {
        let challenge = self
            .challenges
            .iter_mut()
            .find(|challenge| challenge.id == challenge_id)
            .ok_or_else(|| EngineError::KeyNotFound(challenge_id.to_string()))?;

        let completed_now = challenge.set_progress(progress)?;
        if completed_now {
            tracing::info!(challenge = challenge_id, "challenge completed");
        }

        Ok(ChallengeUpdate {
            challenge: challenge.clone(),
            completed_now,
        })
    }
}
