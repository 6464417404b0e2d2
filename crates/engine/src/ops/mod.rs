use std::collections::VecDeque;

use crate::{
    ResultEngine,
    badges::{Badge, RecentUnlock, default_badges},
    challenges::{Challenge, default_challenges},
    courses::{Course, default_courses},
    error::EngineError,
    history::History,
    leveling::{LevelingConfig, UserLevel, calculate_level},
    snapshot::{BadgeState, ChallengeState, CourseState, ProfileSnapshot},
};

mod badges;
mod challenges;
mod lessons;
mod xp;

pub use badges::BadgeUnlock;
pub use challenges::ChallengeUpdate;
pub use lessons::LessonOutcome;
pub use xp::{LevelUp, XpAward};

/// The gamification engine: one owned profile plus the static catalogs.
///
/// All state lives in memory; persistence is the caller's concern through
/// [`Engine::snapshot`] and [`EngineBuilder::snapshot`]. There is exactly one
/// writer: every mutation goes through `&mut self` and returns an explicit
/// outcome describing what changed.
#[derive(Debug)]
pub struct Engine {
    config: LevelingConfig,
    total_xp: i64,
    level: UserLevel,
    badges: Vec<Badge>,
    challenges: Vec<Challenge>,
    courses: Vec<Course>,
    recent_unlocks: VecDeque<RecentUnlock>,
    history: History,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn config(&self) -> &LevelingConfig {
        &self.config
    }

    pub fn total_xp(&self) -> i64 {
        self.total_xp
    }

    /// The current derived level view.
    pub fn level(&self) -> &UserLevel {
        &self.level
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn recent_unlocks(&self) -> impl Iterator<Item = &RecentUnlock> {
        self.recent_unlocks.iter()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Return a badge by id.
    pub fn badge(&self, badge_id: &str) -> ResultEngine<&Badge> {
        self.badges
            .iter()
            .find(|badge| badge.id == badge_id)
            .ok_or_else(|| EngineError::KeyNotFound(badge_id.to_string()))
    }

    /// Return a challenge by id.
    pub fn challenge(&self, challenge_id: &str) -> ResultEngine<&Challenge> {
        self.challenges
            .iter()
            .find(|challenge| challenge.id == challenge_id)
            .ok_or_else(|| EngineError::KeyNotFound(challenge_id.to_string()))
    }

    /// Return a course by id.
    pub fn course(&self, course_id: &str) -> ResultEngine<&Course> {
        self.courses
            .iter()
            .find(|course| course.id == course_id)
            .ok_or_else(|| EngineError::KeyNotFound(course_id.to_string()))
    }

    /// Serialize the whole profile for persistence.
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            total_xp: self.total_xp,
            level: Some(self.level.clone()),
            badges: self.badges.iter().map(BadgeState::of).collect(),
            challenges: self.challenges.iter().map(ChallengeState::of).collect(),
            lessons: self.courses.iter().map(CourseState::of).collect(),
            recent_unlocks: self.recent_unlocks.iter().cloned().collect(),
            history: self.history.entries().to_vec(),
        }
    }
}

/// The builder for `Engine`.
///
/// Catalogs default to the built-in ones; a snapshot, when given, is applied
/// on top of the catalogs by id. Unknown snapshot ids are skipped with a
/// warning so a catalog revision never breaks a restore.
#[derive(Default)]
pub struct EngineBuilder {
    config: LevelingConfig,
    badges: Option<Vec<Badge>>,
    challenges: Option<Vec<Challenge>>,
    courses: Option<Vec<Course>>,
    snapshot: Option<ProfileSnapshot>,
}

impl EngineBuilder {
    pub fn config(mut self, config: LevelingConfig) -> EngineBuilder {
        self.config = config;
        self
    }

    pub fn badges(mut self, badges: Vec<Badge>) -> EngineBuilder {
        self.badges = Some(badges);
        self
    }

    pub fn challenges(mut self, challenges: Vec<Challenge>) -> EngineBuilder {
        self.challenges = Some(challenges);
        self
    }

    pub fn courses(mut self, courses: Vec<Course>) -> EngineBuilder {
        self.courses = Some(courses);
        self
    }

    /// Restore a previously persisted profile.
    pub fn snapshot(mut self, snapshot: ProfileSnapshot) -> EngineBuilder {
        self.snapshot = Some(snapshot);
        self
    }

    /// Construct `Engine`.
    pub fn build(self) -> ResultEngine<Engine> {
        let badges = self.badges.unwrap_or_else(default_badges);
        let challenges = self.challenges.unwrap_or_else(default_challenges);
        let courses = self.courses.unwrap_or_else(default_courses);

        validate_badges(&badges)?;
        validate_challenges(&challenges)?;
        validate_courses(&courses)?;

        let mut engine = Engine {
            config: self.config,
            total_xp: 0,
            level: calculate_level(0, &self.config),
            badges,
            challenges,
            courses,
            recent_unlocks: VecDeque::new(),
            history: History::default(),
        };

        if let Some(snapshot) = self.snapshot {
            engine.restore(snapshot);
        }

        Ok(engine)
    }
}

impl Engine {
    fn restore(&mut self, snapshot: ProfileSnapshot) {
        self.total_xp = snapshot.total_xp.max(0);
        self.level = calculate_level(self.total_xp, &self.config);

        if let Some(stored) = snapshot.level
            && stored != self.level
        {
            tracing::warn!(
                stored = stored.level,
                recomputed = self.level.level,
                "stored level view is stale, trusting the recomputation"
            );
        }

        for state in snapshot.badges {
            match self.badges.iter_mut().find(|badge| badge.id == state.id) {
                Some(badge) => {
                    badge.unlocked = state.unlocked;
                    badge.unlocked_at = state.unlocked_at;
                }
                None => tracing::warn!(id = %state.id, "unknown badge id in snapshot, skipped"),
            }
        }

        for state in snapshot.challenges {
            match self
                .challenges
                .iter_mut()
                .find(|challenge| challenge.id == state.id)
            {
                Some(challenge) => {
                    challenge.progress = state.progress;
                    challenge.active = state.active;
                    challenge.completed = state.completed;
                }
                None => {
                    tracing::warn!(id = %state.id, "unknown challenge id in snapshot, skipped");
                }
            }
        }

        for state in snapshot.lessons {
            match self.courses.iter_mut().find(|course| course.id == state.id) {
                Some(course) => {
                    let mut kept = Vec::with_capacity(state.completed_lessons.len());
                    for lesson_id in state.completed_lessons {
                        if course.lessons.iter().any(|l| l.id == lesson_id) {
                            kept.push(lesson_id);
                        } else {
                            tracing::warn!(
                                course = %course.id,
                                lesson = %lesson_id,
                                "unknown lesson id in snapshot, skipped"
                            );
                        }
                    }
                    course.completed_lessons = kept;
                }
                None => tracing::warn!(id = %state.id, "unknown course id in snapshot, skipped"),
            }
        }

        self.recent_unlocks = snapshot.recent_unlocks.into_iter().collect();
        self.history = History::from(snapshot.history);
    }
}

fn validate_badges(badges: &[Badge]) -> ResultEngine<()> {
    for (index, badge) in badges.iter().enumerate() {
        if badges[index + 1..].iter().any(|other| other.id == badge.id) {
            return Err(EngineError::ExistingKey(badge.id.clone()));
        }
        if badge.xp <= 0 {
            return Err(EngineError::InvalidAmount(format!(
                "badge '{}' reward must be > 0",
                badge.id
            )));
        }
    }
    Ok(())
}

fn validate_challenges(challenges: &[Challenge]) -> ResultEngine<()> {
    for (index, challenge) in challenges.iter().enumerate() {
        if challenges[index + 1..]
            .iter()
            .any(|other| other.id == challenge.id)
        {
            return Err(EngineError::ExistingKey(challenge.id.clone()));
        }
        if challenge.xp <= 0 {
            return Err(EngineError::InvalidAmount(format!(
                "challenge '{}' reward must be > 0",
                challenge.id
            )));
        }
        if challenge.target <= 0 {
            return Err(EngineError::InvalidProgress(format!(
                "challenge '{}' target must be > 0",
                challenge.id
            )));
        }
    }
    Ok(())
}

fn validate_courses(courses: &[Course]) -> ResultEngine<()> {
    for (index, course) in courses.iter().enumerate() {
        if courses[index + 1..].iter().any(|other| other.id == course.id) {
            return Err(EngineError::ExistingKey(course.id.clone()));
        }
        for (lesson_index, lesson) in course.lessons.iter().enumerate() {
            if course.lessons[lesson_index + 1..]
                .iter()
                .any(|other| other.id == lesson.id)
            {
                return Err(EngineError::ExistingKey(lesson.id.clone()));
            }
            if lesson.xp <= 0 {
                return Err(EngineError::InvalidAmount(format!(
                    "lesson '{}' reward must be > 0",
                    lesson.id
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badges::{BadgeCategory, BadgeRarity};

    #[test]
    fn build_with_defaults() {
        let engine = Engine::builder().build().unwrap();

        assert_eq!(engine.total_xp(), 0);
        assert_eq!(engine.level().level, 1);
        assert!(!engine.badges().is_empty());
        assert!(!engine.challenges().is_empty());
        assert!(!engine.courses().is_empty());
    }

    #[test]
    fn duplicated_badge_id_is_rejected() {
        let badge = |id| {
            Badge::new(
                id,
                "Twin",
                "Twin badge",
                "star",
                "#ffffff",
                BadgeRarity::Common,
                BadgeCategory::Milestones,
                10,
            )
        };

        let result = Engine::builder()
            .badges(vec![badge("twin"), badge("twin")])
            .build();

        assert!(matches!(result, Err(EngineError::ExistingKey(id)) if id == "twin"));
    }

    #[test]
    fn unknown_snapshot_ids_are_skipped() {
        let snapshot = ProfileSnapshot {
            total_xp: 120,
            badges: vec![BadgeState {
                id: "retired-badge".to_string(),
                unlocked: true,
                unlocked_at: None,
            }],
            ..ProfileSnapshot::default()
        };

        let engine = Engine::builder().snapshot(snapshot).build().unwrap();

        assert_eq!(engine.total_xp(), 120);
        assert!(engine.badges().iter().all(|badge| !badge.unlocked));
    }

    #[test]
    fn restore_recomputes_stale_level_view() {
        let mut snapshot = ProfileSnapshot {
            total_xp: 2340,
            ..ProfileSnapshot::default()
        };
        snapshot.level = Some(calculate_level(100, &LevelingConfig::default()));

        let engine = Engine::builder().snapshot(snapshot).build().unwrap();

        assert_eq!(engine.level().level, 5);
        assert_eq!(engine.level().current_xp, 637);
    }
}
