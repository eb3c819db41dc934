//! CSV parser for batches of raw resume scores.

use anyhow::{Context, Result};
use serde::Deserialize;

/// One row of an input score file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoreRow {
    pub candidate_id: String,
    pub score: f64,
    #[serde(default)]
    pub industry: Option<String>,
}

/// Decodes a headered `candidate_id,score[,industry]` CSV from raw bytes.
///
/// # Errors
///
/// Returns an error naming the first row whose fields do not decode.
pub fn parse_scores(bytes: &[u8]) -> Result<Vec<ScoreRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for (index, result) in rdr.deserialize().enumerate() {
        let row: ScoreRow = result.with_context(|| format!("invalid score row {}", index + 1))?;
        rows.push(row);
    }

    Ok(rows)
}
