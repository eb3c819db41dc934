use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::benchmarks::{DEFAULT_INDUSTRY, Standing, industry_benchmarks, is_known_industry};
use crate::normalize::{
    Difficulty, Grade, calculate_improvement_potential, grade_color, percentile::clamp_unit,
    percentile_description, percentile_to_grade, score_color, score_to_percentile,
};

/// Everything the engine says about one resume score, flattened so it
/// serializes to a single CSV row.
#[derive(Debug, Default, Serialize)]
pub struct ScoreReport {
    pub timestamp: DateTime<Utc>,
    pub candidate_id: Option<String>,
    pub industry: Option<String>,

    pub score: f64,
    pub percentile: f64,
    pub grade: Option<Grade>,
    pub description: Option<&'static str>,
    pub grade_color: Option<&'static str>,
    pub score_color: Option<&'static str>,

    // improvement potential
    pub target_percentile: f64,
    pub target_score: f64,
    pub improvement_needed: f64,
    pub improvement_percentage: f64,
    pub difficulty: Option<Difficulty>,

    pub benchmark_standing: Option<Standing>,

    // error tracking
    pub error_type: Option<String>,
    pub error_message: Option<String>,
}

impl ScoreReport {
    pub fn from_score(score: f64, industry: &str, target_percentile: f64) -> Self {
        let score = clamp_unit(score);
        let percentile = score_to_percentile(score);
        let grade = percentile_to_grade(percentile);
        let improvement = calculate_improvement_potential(score, target_percentile);

        let industry = if is_known_industry(industry) {
            industry.trim().to_lowercase()
        } else {
            DEFAULT_INDUSTRY.to_string()
        };
        let standing = industry_benchmarks(&industry).standing(score);

        ScoreReport {
            timestamp: Utc::now(),
            candidate_id: None,
            industry: Some(industry),
            score,
            percentile,
            grade: Some(grade),
            description: Some(percentile_description(percentile)),
            grade_color: Some(grade_color(grade)),
            score_color: Some(score_color(score)),
            target_percentile: clamp_unit(target_percentile),
            target_score: improvement.target_score,
            improvement_needed: improvement.improvement_needed,
            improvement_percentage: improvement.improvement_percentage,
            difficulty: Some(improvement.difficulty),
            benchmark_standing: Some(standing),
            error_type: None,
            error_message: None,
        }
    }

    /// Create an error record with timestamp and error information
    pub fn from_error(error_type: &str, error_message: &str) -> Self {
        ScoreReport {
            timestamp: Utc::now(),
            error_type: Some(error_type.to_string()),
            error_message: Some(error_message.to_string()),
            ..Default::default()
        }
    }

    pub fn with_candidate_info(mut self, candidate_id: &str) -> Self {
        self.candidate_id = Some(candidate_id.to_string());
        self
    }
}
