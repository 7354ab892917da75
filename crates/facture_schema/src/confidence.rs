//! Confidence tiers and the field alert threshold
//!
//! Scores are normalized to `[0.0, 1.0]` by the extractor. Tier boundaries
//! are inclusive on the lower edge: 0.90 is High, 0.70 is Medium.

use serde::{Deserialize, Serialize};

/// Scores at or above this are High tier.
pub const HIGH_TIER_FLOOR: f64 = 0.90;

/// Scores at or above this (and below [`HIGH_TIER_FLOOR`]) are Medium tier.
pub const MEDIUM_TIER_FLOOR: f64 = 0.70;

/// Scores below this get the warning treatment on their field row.
///
/// Not the same cutoff as [`MEDIUM_TIER_FLOOR`]: a 0.75 field is Medium tier
/// and still flagged. Keep the two thresholds separate.
pub const FIELD_ALERT_FLOOR: f64 = 0.80;

/// Coarse quality bucket shown next to every extracted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High",
            ConfidenceTier::Medium => "Medium",
            ConfidenceTier::Low => "Low",
        }
    }
}

/// Classify a normalized score into its display tier.
pub fn classify(score: f64) -> ConfidenceTier {
    if score >= HIGH_TIER_FLOOR {
        ConfidenceTier::High
    } else if score >= MEDIUM_TIER_FLOOR {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

/// Whole-number percentage for display, rounded.
pub fn percent(score: f64) -> u8 {
    (score * 100.0).round() as u8
}

/// True when the field row should carry the warning treatment.
pub fn needs_alert(score: f64) -> bool {
    score < FIELD_ALERT_FLOOR
}

/// Combined tier + percentage badge, e.g. `High 98%`.
pub fn badge(score: f64) -> String {
    format!("{} {}%", classify(score).label(), percent(score))
}
