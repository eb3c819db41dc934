use serde::{Deserialize, Serialize};
use std::fmt;

use crate::normalize::calibration::{GRADE_BANDS, GradeBand};
use crate::normalize::percentile::{clamp_unit, score_to_percentile};

/// Letter grade assigned to a percentile rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "C-")]
    CMinus,
    D,
    F,
}

impl Grade {
    pub const ALL: [Grade; 11] = [
        Grade::APlus,
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::CMinus,
        Grade::D,
        Grade::F,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a percentile (0–100) into a letter grade using [`GRADE_BANDS`].
pub fn percentile_to_grade(percentile: f64) -> Grade {
    percentile_to_grade_in(GRADE_BANDS, percentile)
}

/// Scans `bands` in order and returns the first grade whose range holds
/// the clamped percentile, or [`Grade::F`] if none does.
pub fn percentile_to_grade_in(bands: &[GradeBand], percentile: f64) -> Grade {
    let percentile = clamp_unit(percentile);
    bands
        .iter()
        .find(|band| band.contains(percentile))
        .map_or(Grade::F, |band| band.grade)
}

/// Converts a raw 0–100 score straight into a letter grade.
pub fn score_to_grade(score: f64) -> Grade {
    percentile_to_grade(score_to_percentile(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(percentile_to_grade(100.0), Grade::APlus);
        assert_eq!(percentile_to_grade(97.0), Grade::APlus);
        assert_eq!(percentile_to_grade(96.0), Grade::A);
        assert_eq!(percentile_to_grade(95.0), Grade::A);
        assert_eq!(percentile_to_grade(93.0), Grade::A);
        assert_eq!(percentile_to_grade(92.0), Grade::AMinus);
        assert_eq!(percentile_to_grade(90.0), Grade::AMinus);
        assert_eq!(percentile_to_grade(89.0), Grade::BPlus);
        assert_eq!(percentile_to_grade(87.0), Grade::BPlus);
        assert_eq!(percentile_to_grade(86.0), Grade::B);
        assert_eq!(percentile_to_grade(83.0), Grade::B);
        assert_eq!(percentile_to_grade(82.0), Grade::BMinus);
        assert_eq!(percentile_to_grade(80.0), Grade::BMinus);
        assert_eq!(percentile_to_grade(79.0), Grade::CPlus);
        assert_eq!(percentile_to_grade(77.0), Grade::CPlus);
        assert_eq!(percentile_to_grade(76.0), Grade::C);
        assert_eq!(percentile_to_grade(73.0), Grade::C);
        assert_eq!(percentile_to_grade(72.0), Grade::CMinus);
        assert_eq!(percentile_to_grade(70.0), Grade::CMinus);
        assert_eq!(percentile_to_grade(69.0), Grade::D);
        assert_eq!(percentile_to_grade(60.0), Grade::D);
        assert_eq!(percentile_to_grade(59.0), Grade::F);
        assert_eq!(percentile_to_grade(0.0), Grade::F);
    }

    #[test]
    fn test_fractional_percentiles_use_lower_band() {
        assert_eq!(percentile_to_grade(96.5), Grade::A);
        assert_eq!(percentile_to_grade(92.5), Grade::AMinus);
        assert_eq!(percentile_to_grade(89.5), Grade::BPlus);
        assert_eq!(percentile_to_grade(72.5), Grade::CMinus);
        assert_eq!(percentile_to_grade(69.5), Grade::D);
        assert_eq!(percentile_to_grade(59.99), Grade::F);
        assert_eq!(percentile_to_grade(99.9), Grade::APlus);
    }

    #[test]
    fn test_out_of_range_percentiles_clamp() {
        assert_eq!(percentile_to_grade(-5.0), Grade::F);
        assert_eq!(percentile_to_grade(140.0), Grade::APlus);
        assert_eq!(percentile_to_grade(f64::NAN), Grade::F);
    }

    #[test]
    fn test_every_integer_percentile_hits_one_band() {
        for p in 0..=100u8 {
            let hits = GRADE_BANDS
                .iter()
                .filter(|b| b.contains(f64::from(p)))
                .count();
            assert_eq!(hits, 1, "percentile {p}");
        }
    }

    #[test]
    fn test_unmatched_percentile_falls_back_to_f() {
        let gapped = [
            GradeBand::new(90, 100, Grade::A),
            GradeBand::new(0, 50, Grade::D),
        ];
        assert_eq!(percentile_to_grade_in(&gapped, 70.0), Grade::F);
        assert_eq!(percentile_to_grade_in(&[], 99.0), Grade::F);
        assert_eq!(percentile_to_grade_in(&gapped, 95.0), Grade::A);
    }

    #[test]
    fn test_score_to_grade() {
        assert_eq!(score_to_grade(100.0), Grade::APlus);
        assert_eq!(score_to_grade(90.0), Grade::AMinus);
        assert_eq!(score_to_grade(75.0), Grade::BMinus);
        assert_eq!(score_to_grade(60.0), Grade::F);
        assert_eq!(score_to_grade(0.0), Grade::F);
    }

    #[test]
    fn test_score_to_grade_matches_composition() {
        for s in 0..=100 {
            let s = f64::from(s);
            assert_eq!(
                score_to_grade(s),
                percentile_to_grade(score_to_percentile(s))
            );
        }
    }

    #[test]
    fn test_grade_string_forms() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(serde_json::to_string(&Grade::CPlus).unwrap(), "\"C+\"");
    }
}
