//! CLI entry point for the resume rater.
//!
//! Provides subcommands for grading a single score, estimating the points
//! needed to reach a target percentile, listing industry benchmarks, and
//! grading a CSV of scores from a file or URL.

use anyhow::Result;
use clap::{Parser, Subcommand};
use resume_rater::benchmarks::{INDUSTRY_BENCHMARKS, industry_benchmarks, is_known_industry};
use resume_rater::config::Config;
use resume_rater::normalize::{self, Grade, calculate_improvement_potential};
use resume_rater::{
    fetch::read_source,
    output::{append_record, print_json, print_pretty},
    parser::parse_scores,
    report::ScoreReport,
};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "resume_rater")]
#[command(about = "Turn raw resume scores into percentiles, grades and improvement targets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a single raw score
    Evaluate {
        /// Raw score, 0-100 (out-of-range values are clamped)
        #[arg(allow_negative_numbers = true)]
        score: f64,

        /// Industry to compare against
        #[arg(short, long)]
        industry: Option<String>,

        /// Target percentile for the improvement estimate
        #[arg(short, long)]
        target: Option<f64>,

        /// Log the report as JSON instead of a summary
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show how many points a score needs to reach a target percentile
    Improve {
        #[arg(allow_negative_numbers = true)]
        score: f64,

        /// Target percentile (defaults to RESUME_RATER_TARGET_PERCENTILE or 90)
        #[arg(short, long)]
        target: Option<f64>,
    },
    /// List industry benchmarks, or show one industry's thresholds
    Benchmarks {
        industry: Option<String>,
    },
    /// Grade every row of a score CSV and append the reports to a CSV file
    Batch {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// CSV file to append results to
        #[arg(short, long, default_value = "results.csv")]
        output: PathBuf,

        /// Target percentile for the improvement estimate
        #[arg(short, long)]
        target: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logging setup: colored stderr + JSON rolling log file
    let log_path = Path::new(&config.log_file_path);
    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = log_path
        .file_name()
        .unwrap_or(OsStr::new("resume_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive(LevelFilter::INFO.into()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive(LevelFilter::DEBUG.into()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    if let Err(e) = normalize::validate_builtin_tables() {
        error!(error = %e, "Built-in calibration tables are inconsistent");
        return Err(e.into());
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            score,
            industry,
            target,
            json,
        } => {
            let industry = industry.unwrap_or_else(|| config.default_industry.clone());
            let target = target.unwrap_or(config.target_percentile);
            evaluate(score, &industry, target, json)?;
        }
        Commands::Improve { score, target } => {
            improve(score, target.unwrap_or(config.target_percentile));
        }
        Commands::Benchmarks { industry } => match industry {
            Some(industry) => {
                if !is_known_industry(&industry) {
                    warn!(industry = %industry, "Unknown industry, showing default benchmark");
                }
                let b = industry_benchmarks(&industry);
                info!(
                    industry = %industry,
                    average = b.average,
                    good = b.good,
                    excellent = b.excellent,
                    "Benchmark"
                );
            }
            None => {
                for (name, b) in INDUSTRY_BENCHMARKS {
                    info!(
                        industry = name,
                        average = b.average,
                        good = b.good,
                        excellent = b.excellent,
                        "Benchmark"
                    );
                }
            }
        },
        Commands::Batch {
            source,
            output,
            target,
        } => {
            let target = target.unwrap_or(config.target_percentile);
            batch(&source, &output, &config, target).await?;
        }
    }

    Ok(())
}

#[tracing::instrument(skip(json))]
fn evaluate(score: f64, industry: &str, target: f64, json: bool) -> Result<()> {
    let report = ScoreReport::from_score(score, industry, target);

    if json {
        print_json(&report)?;
    } else {
        print_pretty(&report);
        info!(
            score = report.score,
            percentile = report.percentile,
            grade = %report.grade.unwrap_or(Grade::F),
            description = report.description.unwrap_or_default(),
            target_score = report.target_score,
            improvement_needed = report.improvement_needed,
            difficulty = ?report.difficulty,
            standing = ?report.benchmark_standing,
            "Score evaluated"
        );
    }

    Ok(())
}

#[tracing::instrument]
fn improve(score: f64, target: f64) {
    let a = calculate_improvement_potential(score, target);
    info!(
        current_percentile = a.current_percentile,
        target_score = a.target_score,
        improvement_needed = a.improvement_needed,
        improvement_percentage = a.improvement_percentage,
        difficulty = %a.difficulty,
        "Improvement potential"
    );
}

/// Grades every row of a score CSV, appending one report per row.
///
/// A source that cannot be loaded or parsed is recorded as a single error
/// row before the error is returned.
#[tracing::instrument(skip(output, config), fields(output = %output.display()))]
async fn batch(source: &str, output: &Path, config: &Config, target: f64) -> Result<()> {
    let bytes = match read_source(source, config.api_token.as_deref()).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(error = %e, "Score source could not be loaded");
            append_record(output, &ScoreReport::from_error("fetch_error", &e.to_string()))?;
            return Err(e);
        }
    };

    let rows = match parse_scores(&bytes) {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, "Score source could not be parsed");
            append_record(output, &ScoreReport::from_error("parse_error", &format!("{e:#}")))?;
            return Err(e);
        }
    };

    let mut grade_counts: BTreeMap<String, usize> = BTreeMap::new();

    for row in &rows {
        let industry = row
            .industry
            .as_deref()
            .unwrap_or(config.default_industry.as_str());
        if !row.score.is_finite() || !(0.0..=100.0).contains(&row.score) {
            warn!(candidate_id = %row.candidate_id, score = row.score, "Score outside 0-100, clamping");
        }

        let report =
            ScoreReport::from_score(row.score, industry, target).with_candidate_info(&row.candidate_id);
        if let Some(grade) = report.grade {
            *grade_counts.entry(grade.to_string()).or_default() += 1;
        }
        append_record(output, &report)?;
    }

    info!(rows = rows.len(), grades = ?grade_counts, "Batch graded");
    Ok(())
}
