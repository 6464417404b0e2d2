//! FinQuest gamification engine.
//!
//! A pure, synchronous rules library: cumulative XP drives a derived level
//! view, badges unlock once, challenges track progress towards a target and
//! literacy lessons grant XP on first completion. All state is in memory;
//! persistence happens through [`ProfileSnapshot`] at the edges.

pub use badges::{Badge, BadgeCategory, BadgeRarity, RecentUnlock, default_badges};
pub use challenges::{Challenge, default_challenges};
pub use courses::{Course, Lesson, default_courses};
pub use error::EngineError;
pub use history::{History, XpEntry};
pub use leveling::{
    DEFAULT_MAX_LEVEL, LevelingConfig, UserLevel, benefits_between, benefits_for, calculate_level,
    title_for, xp_required,
};
pub use ops::{
    BadgeUnlock, ChallengeUpdate, Engine, EngineBuilder, LessonOutcome, LevelUp, XpAward,
};
pub use snapshot::{BadgeState, ChallengeState, CourseState, ProfileSnapshot};

mod badges;
pub mod calculators;
mod challenges;
mod courses;
mod error;
mod history;
mod leveling;
mod ops;
mod snapshot;

type ResultEngine<T> = Result<T, EngineError>;
