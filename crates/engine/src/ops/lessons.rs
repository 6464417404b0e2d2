//! Lesson completion.

use crate::{ResultEngine, error::EngineError};

use super::{Engine, xp::XpAward};

/// The outcome of a lesson completion.
#[derive(Clone, Debug, PartialEq)]
pub struct LessonOutcome {
    pub course_id: String,
    pub lesson_id: String,
    pub newly_completed: bool,
    /// Whether the whole course is complete after this call.
    pub course_completed: bool,
    pub award: Option<XpAward>,
}

impl Engine {
    /// Mark a lesson as completed and grant its XP.
    ///
    /// Idempotent: re-completing a lesson grants nothing.
    pub fn complete_lesson(
        &mut self,
        course_id: &str,
        lesson_id: &str,
    ) -> ResultEngine<LessonOutcome> {
        let course = self
            .courses
            .iter_mut()
            .find(|course| course.id == course_id)
            .ok_or_else(|| EngineError::KeyNotFound(course_id.to_string()))?;

        let completed = course
            .complete_lesson(lesson_id)?
            .map(|lesson| (lesson.title.clone(), lesson.xp));
        let course_completed = course.is_completed();

        let (newly_completed, award) = match completed {
            Some((title, xp)) => {
                let award = self.add_xp(xp, &format!("completed lesson {title}"))?;
                (true, Some(award))
            }
            None => (false, None),
        };

        Ok(LessonOutcome {
            course_id: course_id.to_string(),
            lesson_id: lesson_id.to_string(),
            newly_completed,
            course_completed,
            award,
        })
    }
}
