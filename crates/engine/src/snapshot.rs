//! The module contains the persisted profile schema.
//!
//! A snapshot carries the cumulative XP total plus the per-item mutable
//! fields of the catalogs (unlock state, challenge progress, completed
//! lessons). The stored [`UserLevel`] view is advisory: on restore the
//! engine recomputes it from `total_xp` and trusts the recomputation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    badges::{Badge, RecentUnlock},
    challenges::Challenge,
    courses::Course,
    history::XpEntry,
    leveling::UserLevel,
};

/// Mutable badge fields, keyed by catalog id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BadgeState {
    pub id: String,
    pub unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Mutable challenge fields, keyed by catalog id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChallengeState {
    pub id: String,
    pub progress: i64,
    pub active: bool,
    pub completed: bool,
}

/// Completed lessons, keyed by course id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseState {
    pub id: String,
    pub completed_lessons: Vec<String>,
}

/// The serialized profile: everything needed to survive a reload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub total_xp: i64,
    /// Advisory level view for external readers; recomputed on restore.
    pub level: Option<UserLevel>,
    #[serde(default)]
    pub badges: Vec<BadgeState>,
    #[serde(default)]
    pub challenges: Vec<ChallengeState>,
    #[serde(default)]
    pub lessons: Vec<CourseState>,
    #[serde(default)]
    pub recent_unlocks: Vec<RecentUnlock>,
    #[serde(default)]
    pub history: Vec<XpEntry>,
}

impl BadgeState {
    pub fn of(badge: &Badge) -> Self {
        Self {
            id: badge.id.clone(),
            unlocked: badge.unlocked,
            unlocked_at: badge.unlocked_at,
        }
    }
}

impl ChallengeState {
    pub fn of(challenge: &Challenge) -> Self {
        Self {
            id: challenge.id.clone(),
            progress: challenge.progress,
            active: challenge.active,
            completed: challenge.completed,
        }
    }
}

impl CourseState {
    pub fn of(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            completed_lessons: course.completed_lessons.clone(),
        }
    }
}
