//! Output formatting: engine outcomes rendered as text lines or as
//! `api_types` JSON payloads for machine consumption.

use engine::{Badge, Challenge, Engine, UserLevel, XpAward, XpEntry};
use serde::Serialize;

use crate::error::Result;

pub fn level_view(level: &UserLevel) -> api_types::level::UserLevelView {
    api_types::level::UserLevelView {
        level: level.level,
        current_xp: level.current_xp,
        xp_to_next_level: level.xp_to_next_level,
        total_xp: level.total_xp,
        title: level.title.clone(),
        benefits: level.benefits.clone(),
    }
}

pub fn badge_view(badge: &Badge) -> api_types::badge::BadgeView {
    api_types::badge::BadgeView {
        id: badge.id.clone(),
        title: badge.title.clone(),
        description: badge.description.clone(),
        icon: badge.icon.clone(),
        color: badge.color.clone(),
        rarity: match badge.rarity {
            engine::BadgeRarity::Common => api_types::badge::BadgeRarity::Common,
            engine::BadgeRarity::Rare => api_types::badge::BadgeRarity::Rare,
            engine::BadgeRarity::Epic => api_types::badge::BadgeRarity::Epic,
            engine::BadgeRarity::Legendary => api_types::badge::BadgeRarity::Legendary,
        },
        category: match badge.category {
            engine::BadgeCategory::Saving => api_types::badge::BadgeCategory::Saving,
            engine::BadgeCategory::Budgeting => api_types::badge::BadgeCategory::Budgeting,
            engine::BadgeCategory::Learning => api_types::badge::BadgeCategory::Learning,
            engine::BadgeCategory::Consistency => api_types::badge::BadgeCategory::Consistency,
            engine::BadgeCategory::Milestones => api_types::badge::BadgeCategory::Milestones,
        },
        xp: badge.xp,
        unlocked: badge.unlocked,
        unlocked_at: badge.unlocked_at,
    }
}

pub fn challenge_view(challenge: &Challenge) -> api_types::challenge::ChallengeView {
    api_types::challenge::ChallengeView {
        id: challenge.id.clone(),
        title: challenge.title.clone(),
        description: challenge.description.clone(),
        xp: challenge.xp,
        progress: challenge.progress,
        target: challenge.target,
        deadline: challenge.deadline,
        active: challenge.active,
        completed: challenge.completed,
    }
}

pub fn history_view(entry: &XpEntry) -> api_types::history::XpEntryView {
    api_types::history::XpEntryView {
        id: entry.id,
        amount: entry.amount,
        reason: entry.reason.clone(),
        total_after: entry.total_after,
        awarded_at: entry.awarded_at,
    }
}

/// The celebration modal payload for a level transition.
pub fn level_up_payload(award: &XpAward) -> Option<api_types::level::LevelUpPayload> {
    award.level_up.as_ref().map(|up| api_types::level::LevelUpPayload {
        new_level: up.to,
        xp_earned: award.amount,
        xp_to_next_level: award.level.xp_to_next_level,
        rewards: up.rewards.clone(),
    })
}

pub fn print_status(engine: &Engine, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&level_view(engine.level()))?);
        return Ok(());
    }

    let level = engine.level();
    println!("Level {} ({})", level.level, level.title);
    println!(
        "XP: {} / {} (total {})",
        level.current_xp, level.xp_to_next_level, level.total_xp
    );
    if !level.benefits.is_empty() {
        println!("Benefits: {}", level.benefits.join(", "));
    }

    let unlocked = engine.badges().iter().filter(|b| b.unlocked).count();
    println!("Badges: {}/{} unlocked", unlocked, engine.badges().len());

    let completed = engine.challenges().iter().filter(|c| c.completed).count();
    println!(
        "Challenges: {}/{} completed",
        completed,
        engine.challenges().len()
    );

    for course in engine.courses() {
        println!(
            "Course {}: {}/{} lessons",
            course.title,
            course.completed_lessons.len(),
            course.lessons.len()
        );
    }

    Ok(())
}

pub fn print_badges(engine: &Engine, json: bool) -> Result<()> {
    if json {
        let response = api_types::badge::BadgesResponse {
            badges: engine.badges().iter().map(badge_view).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    for badge in engine.badges() {
        let state = if badge.unlocked { "unlocked" } else { "locked" };
        println!(
            "[{state}] {} ({} {}, {} XP): {}",
            badge.title,
            badge.rarity.as_str(),
            badge.category.as_str(),
            badge.xp,
            badge.description
        );
    }
    Ok(())
}

pub fn print_challenges(engine: &Engine, json: bool) -> Result<()> {
    if json {
        let response = api_types::challenge::ChallengesResponse {
            challenges: engine.challenges().iter().map(challenge_view).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    for challenge in engine.challenges() {
        let state = if challenge.completed { "done" } else { "open" };
        println!(
            "[{state}] {}: {}/{} by {} ({} XP)",
            challenge.title, challenge.progress, challenge.target, challenge.deadline, challenge.xp
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct AwardResponse {
    amount: i64,
    reason: String,
    level: api_types::level::UserLevelView,
    level_up: Option<api_types::level::LevelUpPayload>,
}

/// One-shot celebration lines for a grant; the level-up payload doubles as
/// the modal body in JSON mode.
pub fn print_award(award: &XpAward, json: bool) -> Result<()> {
    if json {
        let response = AwardResponse {
            amount: award.amount,
            reason: award.reason.clone(),
            level: level_view(&award.level),
            level_up: level_up_payload(award),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("+{} XP for {}", award.amount, award.reason);
    if let Some(up) = &award.level_up {
        println!("Level up! {} -> {} ({})", up.from, up.to, award.level.title);
        for reward in &up.rewards {
            println!("New benefit: {reward}");
        }
    }
    Ok(())
}
