//! How far a score is from a target percentile, and how hard closing
//! that gap is likely to be.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::normalize::percentile::{clamp_unit, percentile_to_score, score_to_percentile};

/// Target percentile used when the caller does not supply one.
pub const DEFAULT_TARGET_PERCENTILE: f64 = 90.0;

/// Qualitative effort tier for an improvement gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
    Difficult,
}

impl Difficulty {
    /// Tiers a point gap. Each bound is inclusive on the easier tier.
    ///
    /// | Points needed | Tier        |
    /// |---------------|-------------|
    /// | <= 5          | easy        |
    /// | <= 15         | moderate    |
    /// | <= 30         | challenging |
    /// | > 30          | difficult   |
    pub fn from_gap(points: f64) -> Self {
        match points {
            p if p <= 5.0 => Difficulty::Easy,
            p if p <= 15.0 => Difficulty::Moderate,
            p if p <= 30.0 => Difficulty::Challenging,
            _ => Difficulty::Difficult,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Challenging => "challenging",
            Difficulty::Difficult => "difficult",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`calculate_improvement_potential`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImprovementAssessment {
    pub current_percentile: f64,
    pub target_score: f64,
    pub improvement_needed: f64,
    pub improvement_percentage: f64,
    pub difficulty: Difficulty,
}

/// Computes the raw-score gap between `current_score` and the score that
/// reaches `target_percentile` on the calibration curve.
///
/// The current score is clamped to 0–100 (NaN as 0) before use. A score so
/// close to zero that the percentage overflows is reported as 0%, the same
/// as a zero score, so the gap and percentage are always finite and
/// non-negative.
pub fn calculate_improvement_potential(
    current_score: f64,
    target_percentile: f64,
) -> ImprovementAssessment {
    let current_score = clamp_unit(current_score);
    let current_percentile = score_to_percentile(current_score);
    let target_score = percentile_to_score(target_percentile);

    let improvement_needed = (target_score - current_score).max(0.0);
    let improvement_percentage = if current_score > 0.0 {
        let ratio = improvement_needed / current_score * 100.0;
        if ratio.is_finite() { ratio } else { 0.0 }
    } else {
        0.0
    };

    ImprovementAssessment {
        current_percentile,
        target_score,
        improvement_needed,
        improvement_percentage,
        difficulty: Difficulty::from_gap(improvement_needed),
    }
}
