//! Static calibration tables and their invariant checks.

use serde::Serialize;
use thiserror::Error;

use crate::normalize::grade::Grade;

/// A single knot on the score → percentile curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibrationPoint {
    pub score: f64,
    pub percentile: f64,
}

impl CalibrationPoint {
    pub const fn new(score: f64, percentile: f64) -> Self {
        Self { score, percentile }
    }
}

/// An integer percentile range mapped to a letter grade.
///
/// `max` is the last whole percentile in the band; fractional values up to
/// the next band's `min` still belong here, so 96.5 falls in a 93–96 band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeBand {
    pub min: u8,
    pub max: u8,
    pub grade: Grade,
}

impl GradeBand {
    pub const fn new(min: u8, max: u8, grade: Grade) -> Self {
        Self { min, max, grade }
    }

    pub fn contains(&self, percentile: f64) -> bool {
        percentile >= f64::from(self.min) && percentile < f64::from(self.max) + 1.0
    }
}

/// Score → percentile curve, ordered by score.
///
/// The last knot sits at the 99th percentile: a perfect score is not
/// ranked above the whole reference population.
pub static CALIBRATION_CURVE: &[CalibrationPoint] = &[
    CalibrationPoint::new(0.0, 0.0),
    CalibrationPoint::new(10.0, 4.0),
    CalibrationPoint::new(20.0, 8.0),
    CalibrationPoint::new(30.0, 12.0),
    CalibrationPoint::new(40.0, 20.0),
    CalibrationPoint::new(50.0, 32.0),
    CalibrationPoint::new(60.0, 50.0),
    CalibrationPoint::new(70.0, 70.0),
    CalibrationPoint::new(75.0, 80.0),
    CalibrationPoint::new(80.0, 85.0),
    CalibrationPoint::new(85.0, 88.0),
    CalibrationPoint::new(90.0, 90.0),
    CalibrationPoint::new(95.0, 95.0),
    CalibrationPoint::new(100.0, 99.0),
];

/// Percentile → grade bands, highest first.
///
/// | Percentile | Grade |
/// |------------|-------|
/// | 97–100     | A+    |
/// | 93–96      | A     |
/// | 90–92      | A-    |
/// | 87–89      | B+    |
/// | 83–86      | B     |
/// | 80–82      | B-    |
/// | 77–79      | C+    |
/// | 73–76      | C     |
/// | 70–72      | C-    |
/// | 60–69      | D     |
/// | 0–59       | F     |
pub static GRADE_BANDS: &[GradeBand] = &[
    GradeBand::new(97, 100, Grade::APlus),
    GradeBand::new(93, 96, Grade::A),
    GradeBand::new(90, 92, Grade::AMinus),
    GradeBand::new(87, 89, Grade::BPlus),
    GradeBand::new(83, 86, Grade::B),
    GradeBand::new(80, 82, Grade::BMinus),
    GradeBand::new(77, 79, Grade::CPlus),
    GradeBand::new(73, 76, Grade::C),
    GradeBand::new(70, 72, Grade::CMinus),
    GradeBand::new(60, 69, Grade::D),
    GradeBand::new(0, 59, Grade::F),
];

/// A broken invariant in a calibration or grade-band table.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("table is empty")]
    Empty,

    #[error("calibration curve must start at score 0 / percentile 0, found ({score}, {percentile})")]
    BadStart { score: f64, percentile: f64 },

    #[error("calibration curve must end at score 100, found {score}")]
    BadEnd { score: f64 },

    #[error("calibration scores must strictly increase: {prev} then {next} at index {index}")]
    ScoreOrder { index: usize, prev: f64, next: f64 },

    #[error("calibration percentiles must not decrease: {prev} then {next} at index {index}")]
    PercentileOrder { index: usize, prev: f64, next: f64 },

    #[error("calibration point out of range at index {index}")]
    OutOfRange { index: usize },

    #[error("grade band {grade} has min {min} above max {max}")]
    InvertedBand { grade: Grade, min: u8, max: u8 },

    #[error("percentile {percentile} matches {matches} grade bands, expected exactly one")]
    Coverage { percentile: u8, matches: usize },
}

/// Checks that a calibration curve is usable by the interpolators.
pub fn validate_calibration(points: &[CalibrationPoint]) -> Result<(), TableError> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(TableError::Empty),
    };

    if first.score != 0.0 || first.percentile != 0.0 {
        return Err(TableError::BadStart {
            score: first.score,
            percentile: first.percentile,
        });
    }
    if last.score != 100.0 {
        return Err(TableError::BadEnd { score: last.score });
    }

    for (index, point) in points.iter().enumerate() {
        let in_range = (0.0..=100.0).contains(&point.score)
            && (0.0..=100.0).contains(&point.percentile);
        if !in_range {
            return Err(TableError::OutOfRange { index });
        }
    }

    for (index, pair) in points.windows(2).enumerate() {
        let (prev, next) = (pair[0], pair[1]);
        if next.score <= prev.score {
            return Err(TableError::ScoreOrder {
                index: index + 1,
                prev: prev.score,
                next: next.score,
            });
        }
        if next.percentile < prev.percentile {
            return Err(TableError::PercentileOrder {
                index: index + 1,
                prev: prev.percentile,
                next: next.percentile,
            });
        }
    }

    Ok(())
}

/// Checks that grade bands partition every integer percentile 0–100.
pub fn validate_grade_bands(bands: &[GradeBand]) -> Result<(), TableError> {
    if bands.is_empty() {
        return Err(TableError::Empty);
    }

    if let Some(band) = bands.iter().find(|b| b.min > b.max) {
        return Err(TableError::InvertedBand {
            grade: band.grade,
            min: band.min,
            max: band.max,
        });
    }

    for percentile in 0..=100u8 {
        let matches = bands
            .iter()
            .filter(|b| b.contains(f64::from(percentile)))
            .count();
        if matches != 1 {
            return Err(TableError::Coverage {
                percentile,
                matches,
            });
        }
    }

    Ok(())
}
