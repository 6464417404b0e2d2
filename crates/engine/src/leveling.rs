//! The module contains the leveling curve and the derived level view.
//!
//! Levels are never stored as independent state: [`calculate_level`] projects
//! the whole [`UserLevel`] view from the cumulative XP total on every change.
//! The curve is super-linear, `xp_required(level) = round(100 * level^1.5)`,
//! so each level costs more than the previous one.
//!
//! ** Examples
//!
//! With 2340 total XP the user has paid for levels 1 to 4
//! (100 + 283 + 520 + 800 = 1703) and sits at level 5 with 637 XP towards
//! the 1118 required by the current level.

use serde::{Deserialize, Serialize};

/// Default level cap. Excess XP past the cap stays in `current_xp`.
pub const DEFAULT_MAX_LEVEL: u32 = 50;

/// Inclusive level bands mapped to a display title. The last matching band
/// wins; anything above every band falls back to the last title.
const TITLE_BANDS: &[(u32, u32, &str)] = &[
    (1, 5, "Beginner"),
    (6, 10, "Budgeter"),
    (11, 15, "Saver"),
    (16, 20, "Planner"),
    (21, 25, "Investor"),
    (26, 30, "Strategist"),
    (31, 35, "Advisor"),
    (36, 40, "Expert"),
    (41, 50, "Legend"),
];

/// Monotonic benefit thresholds: a benefit is granted at its level and kept
/// forever after.
const BENEFIT_THRESHOLDS: &[(u32, &str)] = &[
    (5, "Custom budget categories"),
    (10, "Weekly insights report"),
    (15, "Advanced analytics dashboard"),
    (20, "Custom savings goals"),
    (25, "Priority advisor chat"),
    (30, "Exclusive course content"),
    (40, "Beta feature access"),
];

/// Tunables for the leveling engine.
///
/// The cap is deliberately configuration, not a constant: raising it must not
/// require a code change.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LevelingConfig {
    pub max_level: u32,
}

impl Default for LevelingConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

/// The derived, read-only level view.
///
/// Invariant: `current_xp < xp_to_next_level`, except when `level` has
/// reached the cap, where the excess is simply retained in `current_xp`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLevel {
    pub level: u32,
    pub current_xp: i64,
    pub xp_to_next_level: i64,
    pub total_xp: i64,
    pub title: String,
    pub benefits: Vec<String>,
}

/// XP required to complete `level` and move to the next one.
///
/// Strictly increasing in `level`. The pinned reference values are
/// `xp_required(1) = 100`, `xp_required(2) = 283`, `xp_required(3) = 520`.
pub fn xp_required(level: u32) -> i64 {
    (100.0 * f64::from(level).powf(1.5)).round() as i64
}

/// Project the full [`UserLevel`] view from a cumulative XP total.
///
/// Pure and deterministic. A negative total is treated as zero so the
/// projection never reports a negative `current_xp`.
pub fn calculate_level(total_xp: i64, config: &LevelingConfig) -> UserLevel {
    let total_xp = total_xp.max(0);
    let mut level = 1u32;
    let mut remaining = total_xp;

    while level < config.max_level && remaining >= xp_required(level) {
        remaining -= xp_required(level);
        level += 1;
    }

    UserLevel {
        level,
        current_xp: remaining,
        xp_to_next_level: xp_required(level),
        total_xp,
        title: title_for(level).to_string(),
        benefits: benefits_for(level),
    }
}

/// Resolve the display title for a level.
pub fn title_for(level: u32) -> &'static str {
    let mut title = TITLE_BANDS[TITLE_BANDS.len() - 1].2;
    for (low, high, band_title) in TITLE_BANDS {
        if (*low..=*high).contains(&level) {
            title = band_title;
        }
    }
    title
}

/// All benefits unlocked at or below `level`, in threshold order.
pub fn benefits_for(level: u32) -> Vec<String> {
    BENEFIT_THRESHOLDS
        .iter()
        .filter(|(threshold, _)| *threshold <= level)
        .map(|(_, benefit)| (*benefit).to_string())
        .collect()
}

/// Benefits newly unlocked when moving from `from` (exclusive) to `to`
/// (inclusive). Used to fill the rewards of a level-up celebration.
pub fn benefits_between(from: u32, to: u32) -> Vec<String> {
    BENEFIT_THRESHOLDS
        .iter()
        .filter(|(threshold, _)| *threshold > from && *threshold <= to)
        .map(|(_, benefit)| (*benefit).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LevelingConfig {
        LevelingConfig::default()
    }

    #[test]
    fn curve_reference_values() {
        assert_eq!(xp_required(1), 100);
        assert_eq!(xp_required(2), 283);
        assert_eq!(xp_required(3), 520);
        assert_eq!(xp_required(4), 800);
        assert_eq!(xp_required(5), 1118);
    }

    #[test]
    fn curve_is_strictly_increasing() {
        for level in 1..DEFAULT_MAX_LEVEL {
            assert!(xp_required(level) < xp_required(level + 1));
        }
    }

    #[test]
    fn zero_xp_is_level_one() {
        let view = calculate_level(0, &config());

        assert_eq!(view.level, 1);
        assert_eq!(view.current_xp, 0);
        assert_eq!(view.xp_to_next_level, 100);
        assert_eq!(view.title, "Beginner");
        assert!(view.benefits.is_empty());
    }

    #[test]
    fn regression_pin_2340() {
        let view = calculate_level(2340, &config());

        assert_eq!(view.level, 5);
        assert_eq!(view.current_xp, 637);
        assert_eq!(view.xp_to_next_level, 1118);
        assert_eq!(view.title, "Beginner");
        assert_eq!(view.benefits, vec!["Custom budget categories".to_string()]);
    }

    #[test]
    fn current_xp_stays_below_requirement() {
        for total_xp in [0, 1, 99, 100, 101, 382, 383, 2340, 50_000, 500_000] {
            let view = calculate_level(total_xp, &config());
            if view.level < DEFAULT_MAX_LEVEL {
                assert!(view.current_xp < view.xp_to_next_level, "total {total_xp}");
            }
        }
    }

    #[test]
    fn level_is_monotonic_in_total_xp() {
        let mut previous = 0;
        for total_xp in (0..200_000).step_by(37) {
            let level = calculate_level(total_xp, &config()).level;
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn consumed_plus_current_reconstructs_total() {
        for total_xp in [0, 99, 383, 2340, 123_456] {
            let view = calculate_level(total_xp, &config());
            let consumed: i64 = (1..view.level).map(xp_required).sum();
            assert_eq!(consumed + view.current_xp, total_xp);
        }
    }

    #[test]
    fn cap_retains_excess_xp() {
        let view = calculate_level(10_000_000, &config());

        assert_eq!(view.level, DEFAULT_MAX_LEVEL);
        assert_eq!(view.title, "Legend");
        // At the cap the invariant is relaxed: the remainder may exceed the
        // current level requirement.
        assert!(view.current_xp >= view.xp_to_next_level);

        let consumed: i64 = (1..view.level).map(xp_required).sum();
        assert_eq!(consumed + view.current_xp, 10_000_000);
    }

    #[test]
    fn raised_cap_keeps_leveling() {
        let config = LevelingConfig { max_level: 60 };
        let view = calculate_level(10_000_000, &config);

        assert!(view.level > DEFAULT_MAX_LEVEL);
        // Above every band the last title wins.
        assert_eq!(view.title, "Legend");
    }

    #[test]
    fn negative_total_is_treated_as_zero() {
        assert_eq!(calculate_level(-42, &config()), calculate_level(0, &config()));
    }

    #[test]
    fn benefits_accumulate_in_threshold_order() {
        let benefits = benefits_for(25);

        assert_eq!(
            benefits,
            vec![
                "Custom budget categories".to_string(),
                "Weekly insights report".to_string(),
                "Advanced analytics dashboard".to_string(),
                "Custom savings goals".to_string(),
                "Priority advisor chat".to_string(),
            ]
        );
    }

    #[test]
    fn benefits_between_covers_only_the_crossed_range() {
        assert_eq!(
            benefits_between(4, 10),
            vec![
                "Custom budget categories".to_string(),
                "Weekly insights report".to_string(),
            ]
        );
        assert!(benefits_between(5, 9).is_empty());
    }
}
