//! CSS class tags the presentation layer renders next to a grade or score.

use crate::normalize::grade::Grade;

pub fn grade_color(grade: Grade) -> &'static str {
    match grade {
        Grade::APlus | Grade::A | Grade::AMinus => "text-green-600",
        Grade::BPlus | Grade::B | Grade::BMinus => "text-blue-600",
        Grade::CPlus | Grade::C | Grade::CMinus => "text-yellow-600",
        Grade::D => "text-orange-600",
        Grade::F => "text-red-600",
    }
}

/// Color tag for a raw 0–100 score. NaN is treated as 0.
pub fn score_color(score: f64) -> &'static str {
    match score {
        s if s >= 80.0 => "text-green-600",
        s if s >= 60.0 => "text-yellow-600",
        s if s >= 40.0 => "text-orange-600",
        _ => "text-red-600",
    }
}
