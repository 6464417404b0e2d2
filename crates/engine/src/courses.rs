//! The module contains the literacy course catalog and lesson progress.
//!
//! Courses are static definitions; the only mutable state is the list of
//! completed lesson ids per course. Completing a lesson is idempotent.

use serde::{Deserialize, Serialize};

use super::{ResultEngine, error::EngineError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub xp: i64,
}

impl Lesson {
    pub fn new(id: &str, title: &str, xp: i64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            xp,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub lessons: Vec<Lesson>,
    /// Ids of completed lessons, in completion order.
    pub completed_lessons: Vec<String>,
}

impl Course {
    pub fn new(id: &str, title: &str, lessons: Vec<Lesson>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            lessons,
            completed_lessons: Vec::new(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.lessons
            .iter()
            .all(|lesson| self.completed_lessons.iter().any(|id| *id == lesson.id))
    }

    /// Mark a lesson as completed.
    ///
    /// Returns the lesson when this call is the first completion, `None` when
    /// the lesson was already done.
    pub fn complete_lesson(&mut self, lesson_id: &str) -> ResultEngine<Option<&Lesson>> {
        let index = self
            .lessons
            .iter()
            .position(|lesson| lesson.id == lesson_id)
            .ok_or_else(|| EngineError::KeyNotFound(lesson_id.to_string()))?;

        if self.completed_lessons.iter().any(|id| id == lesson_id) {
            return Ok(None);
        }

        self.completed_lessons.push(lesson_id.to_string());
        Ok(Some(&self.lessons[index]))
    }
}

/// The built-in course catalog.
pub fn default_courses() -> Vec<Course> {
    vec![
        Course::new(
            "budgeting-basics",
            "Budgeting Basics",
            vec![
                Lesson::new("what-is-a-budget", "What Is a Budget", 40),
                Lesson::new("fifty-thirty-twenty", "The 50/30/20 Rule", 40),
                Lesson::new("tracking-spending", "Tracking Your Spending", 40),
                Lesson::new("sticking-to-the-plan", "Sticking to the Plan", 60),
            ],
        ),
        Course::new(
            "saving-and-investing",
            "Saving and Investing",
            vec![
                Lesson::new("emergency-funds", "Emergency Funds", 40),
                Lesson::new("compound-interest", "Compound Interest", 50),
                Lesson::new("index-funds-and-sips", "Index Funds and SIPs", 50),
                Lesson::new("risk-and-diversification", "Risk and Diversification", 60),
            ],
        ),
    ]
}
