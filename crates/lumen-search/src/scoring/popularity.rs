//! Logarithmic popularity terms, added only on top of a textual match.

/// Post multiplier on `ln(radiance + 1)`.
pub const POST_RADIANCE_FACTOR: f64 = 0.1;
/// User multiplier on `ln(trust_score / 100 + 1)`.
pub const USER_TRUST_FACTOR: f64 = 0.5;
/// Hashtag multiplier on `ln(count + 1)`.
pub const HASHTAG_COUNT_FACTOR: f64 = 0.5;

/// `ln(popularity + 1) × factor`, with negative or NaN popularity treated as 0.
pub fn log_boost(popularity: f64, factor: f64) -> f64 {
    (popularity.max(0.0) + 1.0).ln() * factor
}

pub fn post_boost(radiance: f64) -> f64 {
    log_boost(radiance, POST_RADIANCE_FACTOR)
}

pub fn user_boost(trust_score: f64) -> f64 {
    log_boost(trust_score / 100.0, USER_TRUST_FACTOR)
}

pub fn hashtag_boost(count: u64) -> f64 {
    log_boost(count as f64, HASHTAG_COUNT_FACTOR)
}
