//! Growth, category and ranking score for one hashtag's window counts.

use lumen_core::constants::NEW_TOPIC_GROWTH;
use lumen_core::models::TrendCategory;

use super::WindowCounts;

const RISING_GROWTH: f64 = 150.0;
const RISING_MIN_RECENT: u64 = 3;
const HOT_MIN_RECENT: u64 = 8;
const HOT_MIN_WEEKLY: u64 = 15;
const RECENT_WEIGHT: f64 = 2.0;
const GROWTH_WEIGHT: f64 = 0.1;

/// Percentage change of `recent` over `previous`. A topic with no previous
/// activity but some recent activity reports 100.
pub fn growth(counts: &WindowCounts) -> f64 {
    if counts.previous > 0 {
        let (recent, previous) = (counts.recent as f64, counts.previous as f64);
        (recent - previous) / previous * 100.0
    } else if counts.recent > 0 {
        NEW_TOPIC_GROWTH
    } else {
        0.0
    }
}

pub fn category(growth: f64, counts: &WindowCounts) -> TrendCategory {
    if growth > RISING_GROWTH && counts.recent >= RISING_MIN_RECENT {
        TrendCategory::Rising
    } else if counts.recent >= HOT_MIN_RECENT || counts.weekly >= HOT_MIN_WEEKLY {
        TrendCategory::Hot
    } else {
        TrendCategory::Steady
    }
}

pub fn rank_score(recent: u64, growth: f64, category: TrendCategory) -> f64 {
    recent as f64 * RECENT_WEIGHT + growth.max(0.0) * GROWTH_WEIGHT + category.rank_bonus()
}
