//! The module contains the append-only XP ledger.
//!
//! Every grant is recorded with its human-readable attribution
//! ("unlocked Goal Getter", "completed lesson Emergency Funds", ...) so the
//! history can be audited and exported.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single XP grant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XpEntry {
    pub id: Uuid,
    pub amount: i64,
    pub reason: String,
    /// Cumulative total after this grant was applied.
    pub total_after: i64,
    pub awarded_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<XpEntry>,
}

impl History {
    pub fn record(&mut self, amount: i64, reason: &str, total_after: i64) -> &XpEntry {
        self.entries.push(XpEntry {
            id: Uuid::new_v4(),
            amount,
            reason: reason.to_string(),
            total_after,
            awarded_at: Utc::now(),
        });

        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[XpEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<XpEntry>> for History {
    fn from(entries: Vec<XpEntry>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_attribution_and_order() {
        let mut history = History::default();
        history.record(50, "unlocked First Steps", 50);
        history.record(40, "completed lesson What Is a Budget", 90);

        let entries = history.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].reason, "unlocked First Steps");
        assert_eq!(entries[1].total_after, 90);
    }
}
