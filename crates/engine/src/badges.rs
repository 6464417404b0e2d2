//! The module contains the badge catalog and the one-shot unlock state.
//!
//! Badge definitions are static and versioned: the engine only ever mutates
//! the per-badge `unlocked`/`unlocked_at` fields, never the catalog shape.
//! Unlocking is irreversible.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many entries the recent-unlocks queue keeps for display.
pub const RECENT_UNLOCKS_CAP: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl BadgeRarity {
    /// Returns the canonical rarity string used by clients.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCategory {
    Saving,
    Budgeting,
    Learning,
    Consistency,
    Milestones,
}

impl BadgeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Saving => "saving",
            Self::Budgeting => "budgeting",
            Self::Learning => "learning",
            Self::Consistency => "consistency",
            Self::Milestones => "milestones",
        }
    }
}

/// An achievement with a fixed XP reward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub rarity: BadgeRarity,
    pub category: BadgeCategory,
    pub xp: i64,
    pub unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Badge {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        icon: &str,
        color: &str,
        rarity: BadgeRarity,
        category: BadgeCategory,
        xp: i64,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            rarity,
            category,
            xp,
            unlocked: false,
            unlocked_at: None,
        }
    }
}

/// A badge recently unlocked, kept in a bounded queue for the UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentUnlock {
    pub badge_id: String,
    pub title: String,
    pub unlocked_at: DateTime<Utc>,
}

/// The built-in badge catalog.
pub fn default_badges() -> Vec<Badge> {
    vec![
        Badge::new(
            "first-transaction",
            "First Steps",
            "Log your first transaction",
            "footprints",
            "#22c55e",
            BadgeRarity::Common,
            BadgeCategory::Milestones,
            50,
        ),
        Badge::new(
            "budget-builder",
            "Budget Builder",
            "Create a budget for every spending category",
            "bricks",
            "#3b82f6",
            BadgeRarity::Common,
            BadgeCategory::Budgeting,
            100,
        ),
        Badge::new(
            "curious-mind",
            "Curious Mind",
            "Finish your first literacy lesson",
            "book-open",
            "#a855f7",
            BadgeRarity::Common,
            BadgeCategory::Learning,
            50,
        ),
        Badge::new(
            "week-streak",
            "Consistent Saver",
            "Log expenses seven days in a row",
            "flame",
            "#f97316",
            BadgeRarity::Rare,
            BadgeCategory::Consistency,
            150,
        ),
        Badge::new(
            "goal-getter",
            "Goal Getter",
            "Complete your first savings goal",
            "target",
            "#eab308",
            BadgeRarity::Rare,
            BadgeCategory::Milestones,
            200,
        ),
        Badge::new(
            "challenge-champion",
            "Challenge Champion",
            "Complete three challenges",
            "trophy",
            "#f59e0b",
            BadgeRarity::Rare,
            BadgeCategory::Milestones,
            250,
        ),
        Badge::new(
            "safety-net",
            "Safety Net",
            "Build an emergency fund of three months of expenses",
            "shield",
            "#14b8a6",
            BadgeRarity::Epic,
            BadgeCategory::Saving,
            300,
        ),
        Badge::new(
            "money-scholar",
            "Money Scholar",
            "Complete a whole literacy course",
            "graduation-cap",
            "#8b5cf6",
            BadgeRarity::Epic,
            BadgeCategory::Learning,
            400,
        ),
        Badge::new(
            "big-saver",
            "Big Saver",
            "Save 5000 over your lifetime",
            "gem",
            "#ec4899",
            BadgeRarity::Legendary,
            BadgeCategory::Saving,
            500,
        ),
    ]
}
