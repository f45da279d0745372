//! Classification and numeric presentation of user similarity scores.
//!
//! Scores are expected in `[0, 1]` but nothing here validates or clamps them:
//! out-of-range input is extrapolated and NaN flows through unchanged.

use std::fmt;

/// Upper bound (inclusive) of the low tier.
pub const LOW_MAX: f64 = 0.3;
/// Upper bound (inclusive) of the medium tier.
pub const MEDIUM_MAX: f64 = 0.7;

/// Visual severity tier derived from a similarity score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimilarityTier {
    Low,
    Medium,
    High,
}

impl SimilarityTier {
    /// NaN compares false against both bounds and therefore lands in `High`.
    pub fn classify(score: f64) -> Self {
        if score <= LOW_MAX {
            SimilarityTier::Low
        } else if score <= MEDIUM_MAX {
            SimilarityTier::Medium
        } else {
            SimilarityTier::High
        }
    }

    /// Stylesheet token applied to the filled part of the bar.
    pub fn class_name(&self) -> &'static str {
        match self {
            SimilarityTier::Low => "progress-bar-danger",
            SimilarityTier::Medium => "progress-bar-warning",
            SimilarityTier::High => "progress-bar-success",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SimilarityTier::Low => "low",
            SimilarityTier::Medium => "medium",
            SimilarityTier::High => "high",
        }
    }
}

impl fmt::Display for SimilarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score on the 0–100 scale used by the bar width and `aria-valuenow`.
pub fn percent(score: f64) -> f64 {
    score * 100.0
}

/// Score on the 0–10 scale used by the caption.
pub fn out_of_ten(score: f64) -> f64 {
    score * 10.0
}

/// Shortest round-trip decimal form, no rounding applied.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // covers -0.0
        "0".to_string()
    } else {
        value.to_string()
    }
}
