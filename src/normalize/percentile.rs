//! Forward (score → percentile) and inverse (percentile → score)
//! interpolation over the calibration curve.

use tracing::trace;

use crate::normalize::calibration::{CALIBRATION_CURVE, CalibrationPoint};

/// Maps any real into [0, 100]. NaN becomes 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        trace!("NaN input treated as 0");
        return 0.0;
    }
    if !(0.0..=100.0).contains(&value) {
        trace!(value, "clamping out-of-range input");
    }
    value.clamp(0.0, 100.0)
}

/// Converts a raw 0–100 score into a whole-number percentile rank.
///
/// | Score | Percentile |
/// |-------|------------|
/// | 0     | 0          |
/// | 60    | 50         |
/// | 75    | 80         |
/// | 90    | 90         |
/// | 100   | 99         |
pub fn score_to_percentile(score: f64) -> f64 {
    score_to_percentile_in(CALIBRATION_CURVE, score)
}

/// [`score_to_percentile`] over an arbitrary curve ordered by score.
pub fn score_to_percentile_in(curve: &[CalibrationPoint], score: f64) -> f64 {
    let score = clamp_unit(score);

    for pair in curve.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if lo.score <= score && score <= hi.score {
            if lo.score == hi.score {
                return lo.percentile;
            }
            let ratio = (score - lo.score) / (hi.score - lo.score);
            return (lo.percentile + ratio * (hi.percentile - lo.percentile)).round();
        }
    }

    curve.last().map_or(0.0, |p| p.percentile)
}

/// Finds the whole-number score at which the curve reaches `percentile`.
///
/// Returns 100 when the percentile lies above the curve's ceiling.
pub fn percentile_to_score(percentile: f64) -> f64 {
    percentile_to_score_in(CALIBRATION_CURVE, percentile)
}

/// [`percentile_to_score`] over an arbitrary curve ordered by score.
pub fn percentile_to_score_in(curve: &[CalibrationPoint], percentile: f64) -> f64 {
    let percentile = clamp_unit(percentile);

    for pair in curve.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if lo.percentile <= percentile && percentile <= hi.percentile {
            if lo.percentile == hi.percentile {
                return lo.score;
            }
            let ratio = (percentile - lo.percentile) / (hi.percentile - lo.percentile);
            return (lo.score + ratio * (hi.score - lo.score)).round();
        }
    }

    100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knots() {
        assert_eq!(score_to_percentile(0.0), 0.0);
        assert_eq!(score_to_percentile(60.0), 50.0);
        assert_eq!(score_to_percentile(75.0), 80.0);
        assert_eq!(score_to_percentile(90.0), 90.0);
        assert_eq!(score_to_percentile(100.0), 99.0);
    }

    #[test]
    fn test_interpolates_between_knots() {
        // 55 is halfway between (50, 32) and (60, 50)
        assert_eq!(score_to_percentile(55.0), 41.0);
        // 72 is 2/5 of the way from (70, 70) to (75, 80)
        assert_eq!(score_to_percentile(72.0), 74.0);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 6.25 lands exactly on 2.5
        assert_eq!(score_to_percentile(6.25), 3.0);
        assert_eq!(score_to_percentile(2.5), 1.0);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(score_to_percentile(-10.0), score_to_percentile(0.0));
        assert_eq!(score_to_percentile(150.0), score_to_percentile(100.0));
        assert_eq!(score_to_percentile(f64::INFINITY), 99.0);
        assert_eq!(score_to_percentile(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_nan_is_zero() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(score_to_percentile(f64::NAN), 0.0);
        assert_eq!(percentile_to_score(f64::NAN), 0.0);
    }

    #[test]
    fn test_degenerate_segment_returns_lower_percentile() {
        let curve = [
            CalibrationPoint::new(0.0, 0.0),
            CalibrationPoint::new(0.0, 10.0),
            CalibrationPoint::new(100.0, 99.0),
        ];
        assert_eq!(score_to_percentile_in(&curve, 0.0), 0.0);
    }

    #[test]
    fn test_short_curve_falls_back_to_last_point() {
        let curve = [
            CalibrationPoint::new(0.0, 0.0),
            CalibrationPoint::new(80.0, 90.0),
        ];
        assert_eq!(score_to_percentile_in(&curve, 95.0), 90.0);
        assert_eq!(score_to_percentile_in(&[], 50.0), 0.0);
    }

    #[test]
    fn test_inverse_knots() {
        assert_eq!(percentile_to_score(0.0), 0.0);
        assert_eq!(percentile_to_score(50.0), 60.0);
        assert_eq!(percentile_to_score(80.0), 75.0);
        assert_eq!(percentile_to_score(90.0), 90.0);
        assert_eq!(percentile_to_score(99.0), 100.0);
    }

    #[test]
    fn test_inverse_above_ceiling_is_100() {
        assert_eq!(percentile_to_score(99.5), 100.0);
        assert_eq!(percentile_to_score(100.0), 100.0);
        assert_eq!(percentile_to_score(250.0), 100.0);
    }

    #[test]
    fn test_inverse_clamps_negative_target() {
        assert_eq!(percentile_to_score(-5.0), 0.0);
    }

    #[test]
    fn test_inverse_flat_segment_returns_lower_score() {
        let curve = [
            CalibrationPoint::new(0.0, 0.0),
            CalibrationPoint::new(30.0, 0.0),
            CalibrationPoint::new(100.0, 99.0),
        ];
        assert_eq!(percentile_to_score_in(&curve, 0.0), 0.0);
    }

    #[test]
    fn test_round_trip_every_integer_score() {
        for s in 0..=100 {
            let s = f64::from(s);
            let back = percentile_to_score(score_to_percentile(s));
            assert!((back - s).abs() <= 1.0, "score {s} came back as {back}");
        }
    }
}
