//! Score normalization engine.
//!
//! Converts a raw 0–100 resume score into a percentile rank along a
//! piecewise-linear calibration curve, maps the percentile to a letter
//! grade, and estimates how many points are needed to reach a target
//! percentile. Every function here is pure and reads only the static
//! tables in [`calibration`].

pub mod calibration;
pub mod color;
pub mod description;
pub mod grade;
pub mod improvement;
pub mod percentile;

pub use calibration::{CALIBRATION_CURVE, CalibrationPoint, GRADE_BANDS, GradeBand, TableError};
pub use color::{grade_color, score_color};
pub use description::percentile_description;
pub use grade::{Grade, percentile_to_grade, score_to_grade};
pub use improvement::{
    DEFAULT_TARGET_PERCENTILE, Difficulty, ImprovementAssessment, calculate_improvement_potential,
};
pub use percentile::{percentile_to_score, score_to_percentile};

/// Checks both built-in tables.
pub fn validate_builtin_tables() -> Result<(), TableError> {
    calibration::validate_calibration(CALIBRATION_CURVE)?;
    calibration::validate_grade_bands(GRADE_BANDS)
}
