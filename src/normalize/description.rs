/// Returns a one-line, human-readable summary of a percentile rank.
///
/// Values outside 0–100 fall into the top or bottom rung.
pub fn percentile_description(percentile: f64) -> &'static str {
    match percentile {
        p if p >= 95.0 => "Exceptional - top 5% of resumes",
        p if p >= 90.0 => "Excellent - top 10% of resumes",
        p if p >= 80.0 => "Very strong - top 20% of resumes",
        p if p >= 70.0 => "Strong - above most resumes",
        p if p >= 50.0 => "Above average - better than half of resumes",
        p if p >= 30.0 => "Average - room for targeted improvements",
        p if p >= 10.0 => "Below average - needs significant improvement",
        _ => "Needs work - major revisions recommended",
    }
}
