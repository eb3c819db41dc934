//! Per-industry raw-score thresholds.

use serde::Serialize;
use std::fmt;

use crate::normalize::percentile::clamp_unit;

/// Raw-score thresholds for one industry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Benchmark {
    pub average: f64,
    pub good: f64,
    pub excellent: f64,
}

/// Where a raw score sits relative to a [`Benchmark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    BelowAverage,
    Average,
    Good,
    Excellent,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Standing::BelowAverage => "below_average",
            Standing::Average => "average",
            Standing::Good => "good",
            Standing::Excellent => "excellent",
        })
    }
}

impl Benchmark {
    const fn new(average: f64, good: f64, excellent: f64) -> Self {
        Self {
            average,
            good,
            excellent,
        }
    }

    pub fn standing(&self, score: f64) -> Standing {
        match clamp_unit(score) {
            s if s >= self.excellent => Standing::Excellent,
            s if s >= self.good => Standing::Good,
            s if s >= self.average => Standing::Average,
            _ => Standing::BelowAverage,
        }
    }
}

pub const DEFAULT_INDUSTRY: &str = "default";

/// Known industries, keyed by lower-case label.
pub static INDUSTRY_BENCHMARKS: &[(&str, Benchmark)] = &[
    ("technology", Benchmark::new(70.0, 80.0, 90.0)),
    ("finance", Benchmark::new(72.0, 82.0, 91.0)),
    ("healthcare", Benchmark::new(68.0, 78.0, 88.0)),
    ("education", Benchmark::new(65.0, 75.0, 85.0)),
    ("marketing", Benchmark::new(66.0, 76.0, 86.0)),
    ("sales", Benchmark::new(64.0, 74.0, 84.0)),
    ("engineering", Benchmark::new(71.0, 81.0, 90.0)),
    ("consulting", Benchmark::new(73.0, 83.0, 92.0)),
    (DEFAULT_INDUSTRY, Benchmark::new(65.0, 75.0, 85.0)),
];

const FALLBACK: Benchmark = Benchmark::new(65.0, 75.0, 85.0);

/// Looks up an industry's thresholds, ignoring case and surrounding
/// whitespace. Unknown or empty labels get the `"default"` entry.
pub fn industry_benchmarks(industry: &str) -> Benchmark {
    let key = industry.trim().to_lowercase();
    lookup(&key)
        .or_else(|| lookup(DEFAULT_INDUSTRY))
        .unwrap_or(FALLBACK)
}

/// Returns `true` if `industry` has its own entry in [`INDUSTRY_BENCHMARKS`].
pub fn is_known_industry(industry: &str) -> bool {
    lookup(&industry.trim().to_lowercase()).is_some()
}

fn lookup(key: &str) -> Option<Benchmark> {
    INDUSTRY_BENCHMARKS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, b)| *b)
}
