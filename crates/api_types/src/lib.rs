use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod level {
    use super::*;

    /// The derived level view shown on dashboards and progress bars.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserLevelView {
        pub level: u32,
        pub current_xp: i64,
        pub xp_to_next_level: i64,
        pub total_xp: i64,
        pub title: String,
        pub benefits: Vec<String>,
    }

    /// Payload of the level-up celebration modal.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct LevelUpPayload {
        pub new_level: u32,
        /// XP of the grant that triggered the transition.
        pub xp_earned: i64,
        pub xp_to_next_level: i64,
        /// Benefits newly unlocked by the transition.
        pub rewards: Vec<String>,
    }
}

pub mod badge {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum BadgeRarity {
        Common,
        Rare,
        Epic,
        Legendary,
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

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BadgeView {
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

    /// Response body for listing badges.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BadgesResponse {
        pub badges: Vec<BadgeView>,
    }
}

pub mod challenge {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ChallengeView {
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

    /// Response body for listing challenges.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ChallengesResponse {
        pub challenges: Vec<ChallengeView>,
    }
}

pub mod history {
    use super::*;

    /// A single XP grant with its audit attribution.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct XpEntryView {
        pub id: Uuid,
        pub amount: i64,
        pub reason: String,
        pub total_after: i64,
        /// RFC3339 timestamp.
        pub awarded_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HistoryResponse {
        pub entries: Vec<XpEntryView>,
    }
}

pub mod recommendation {
    use super::*;

    /// A budget recommendation produced by the external ML service.
    ///
    /// The service is an opaque collaborator: these types only pin the wire
    /// contract consumed and produced by clients.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetRecommendation {
        pub category: String,
        pub current_allocation: f64,
        pub recommended: f64,
        pub reason: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RecommendationsResponse {
        pub recommendations: Vec<BudgetRecommendation>,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum RecommendationVerdict {
        Accept,
        Reject,
    }

    /// Request body for accepting or rejecting a recommendation.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct RecommendationAction {
        pub category: String,
        pub action: RecommendationVerdict,
    }
}

#[cfg(test)]
mod tests {
    use super::recommendation::*;

    #[test]
    fn recommendation_contract_shape() {
        let payload = r#"{
            "recommendations": [
                {
                    "category": "dining",
                    "current_allocation": 220.0,
                    "recommended": 150.0,
                    "reason": "Spending trends 30% above budget"
                }
            ]
        }"#;

        let parsed: RecommendationsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.recommendations[0].category, "dining");

        let action = serde_json::to_string(&RecommendationAction {
            category: "dining".to_string(),
            action: RecommendationVerdict::Reject,
        })
        .unwrap();
        assert_eq!(action, r#"{"category":"dining","action":"reject"}"#);
    }
}
