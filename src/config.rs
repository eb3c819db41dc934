use anyhow::{Context, Result, bail};

use crate::benchmarks::DEFAULT_INDUSTRY;
use crate::normalize::DEFAULT_TARGET_PERCENTILE;

/// Runtime settings loaded from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub target_percentile: f64,
    pub default_industry: String,
    pub api_token: Option<String>,
    pub log_file_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let target_percentile = match lookup("RESUME_RATER_TARGET_PERCENTILE") {
            Some(raw) => parse_percentile(&raw)
                .context("RESUME_RATER_TARGET_PERCENTILE must be a number between 0 and 100")?,
            None => DEFAULT_TARGET_PERCENTILE,
        };

        Ok(Config {
            target_percentile,
            default_industry: lookup("RESUME_RATER_DEFAULT_INDUSTRY")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_INDUSTRY.to_string()),
            api_token: lookup("RESUME_RATER_API_TOKEN").filter(|s| !s.is_empty()),
            log_file_path: lookup("LOG_FILE_PATH")
                .unwrap_or_else(|| "logs/resume_rater.log".to_string()),
        })
    }
}

fn parse_percentile(raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse()?;
    if !(0.0..=100.0).contains(&value) {
        bail!("{value} is outside 0-100");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.target_percentile, 90.0);
        assert_eq!(config.default_industry, "default");
        assert_eq!(config.api_token, None);
        assert_eq!(config.log_file_path, "logs/resume_rater.log");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("RESUME_RATER_TARGET_PERCENTILE", " 75 "),
            ("RESUME_RATER_DEFAULT_INDUSTRY", "finance"),
            ("RESUME_RATER_API_TOKEN", "tok"),
            ("LOG_FILE_PATH", "/tmp/rater.log"),
        ]))
        .unwrap();
        assert_eq!(config.target_percentile, 75.0);
        assert_eq!(config.default_industry, "finance");
        assert_eq!(config.api_token.as_deref(), Some("tok"));
        assert_eq!(config.log_file_path, "/tmp/rater.log");
    }

    #[test]
    fn test_invalid_target_percentile() {
        for bad in ["ninety", "101", "-1", "NaN"] {
            let err = Config::from_lookup(lookup_from(&[("RESUME_RATER_TARGET_PERCENTILE", bad)]))
                .unwrap_err();
            assert!(
                err.to_string().contains("RESUME_RATER_TARGET_PERCENTILE"),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("RESUME_RATER_DEFAULT_INDUSTRY", "  "),
            ("RESUME_RATER_API_TOKEN", ""),
        ]))
        .unwrap();
        assert_eq!(config.default_industry, "default");
        assert_eq!(config.api_token, None);
    }
}
