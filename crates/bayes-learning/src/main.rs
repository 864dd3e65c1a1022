//! CLI entry point for the categorical Naive Bayes classification pipeline.

use anyhow::{Result, anyhow};
use bayes_learning::{DEFAULT_UNSEEN_LIKELIHOOD, EvaluationReport, Pipeline, PipelineConfig};
use bayes_processing::UndefinedModePolicy;
use bayes_processing::dataset::{read_key_table, read_table, write_predictions};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

/// CLI-compatible policy for feature columns whose values are all missing.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliUndefinedMode {
    /// Fail when a feature column has no observable mode
    Fail,
    /// Leave such a column's missing markers in place
    Leave,
}

impl From<CliUndefinedMode> for UndefinedModePolicy {
    fn from(cli: CliUndefinedMode) -> Self {
        match cli {
            CliUndefinedMode::Fail => UndefinedModePolicy::Fail,
            CliUndefinedMode::Leave => UndefinedModePolicy::LeaveMissing,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Categorical Naive Bayes classification pipeline",
    long_about = "Trains a categorical Naive Bayes classifier on a delimited table,\n\
                  scores a held-out table against a key file, and writes the\n\
                  (identifier, predicted label) pairs as CSV.\n\n\
                  EXAMPLES:\n  \
                  # Train, evaluate and write predictions.csv\n  \
                  bayes-learning --train genes.data --test genes.test --keys keys.txt\n\n  \
                  # Machine-readable report on stdout\n  \
                  bayes-learning --train genes.data --test genes.test --keys keys.txt --json"
)]
struct Args {
    /// Path to the delimited training table (identifier, features..., label)
    #[arg(short, long)]
    train: String,

    /// Path to the delimited test table (labels may be the '?' placeholder)
    #[arg(long)]
    test: String,

    /// Path to the identifier -> label key table used to backfill test labels
    #[arg(short, long)]
    keys: String,

    /// Output path for the (identifier, predicted label) CSV
    #[arg(short, long, default_value = "predictions.csv")]
    output: String,

    /// Pseudo-probability charged for feature values unseen during training
    #[arg(long, default_value_t = DEFAULT_UNSEEN_LIKELIHOOD)]
    smoothing: f64,

    /// Handling of feature columns whose values are all missing
    #[arg(long, value_enum, default_value = "fail")]
    undefined_mode: CliUndefinedMode,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Output the evaluation report as JSON on stdout instead of the summary
    ///
    /// Disables all progress logs; only the JSON report is written to stdout.
    #[arg(long)]
    json: bool,

    /// Write the JSON evaluation report next to the predictions file
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    for path in [&args.train, &args.test, &args.keys] {
        if !Path::new(path).exists() {
            return Err(anyhow!("Input file not found: {}", path));
        }
    }

    let config = PipelineConfig::builder()
        .unseen_likelihood(args.smoothing)
        .undefined_mode_policy(args.undefined_mode.into())
        .build()?;

    info!("Loading training table from: {}", args.train);
    let training = read_table(&args.train)?;
    info!(
        "Training table loaded: {} rows x {} columns",
        training.height(),
        training.width()
    );

    info!("Loading test table from: {}", args.test);
    let test = read_table(&args.test)?;
    info!(
        "Test table loaded: {} rows x {} columns",
        test.height(),
        test.width()
    );

    let keys = read_key_table(&args.keys)?;
    info!("Key table loaded: {} entries", keys.len());

    let pipeline = Pipeline::builder().config(config).build()?;
    let outcome = pipeline.run(training, test, &keys)?;

    write_predictions(&args.output, &outcome.evaluation.as_records())?;
    info!("Predictions written to: {}", args.output);

    let report = EvaluationReport::new(
        &args.train,
        &args.test,
        &args.keys,
        Some(args.output.clone()),
        &outcome,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.emit_report {
        report.write_to_file(report_path_for(&args.output))?;
    }

    print_summary(&report);

    Ok(())
}

/// Derive the report path from the predictions path, e.g.
/// `out/predictions.csv` becomes `out/predictions_report.json`.
fn report_path_for(output: &str) -> PathBuf {
    let path = Path::new(output);
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("predictions");
    path.with_file_name(format!("{}_report.json", stem))
}

/// Print a human-readable summary of the evaluation results.
///
/// This uses `println!` intentionally for user-facing CLI output; unlike
/// logging it should always be visible regardless of log level settings.
fn print_summary(report: &EvaluationReport) {
    let summary = &report.summary;

    println!();
    println!("{}", "=".repeat(80));
    println!("EVALUATION COMPLETE");
    println!("{}", "=".repeat(80));
    println!();

    println!(
        "Training: {} ({} rows x {} columns)",
        report.training_file, summary.training_rows, summary.columns
    );
    println!(
        "Test:     {} ({} rows, {} labels backfilled from {})",
        report.test_file, summary.test_rows, summary.merged_labels, report.keys_file
    );
    if let Some(ref predictions_file) = report.predictions_file {
        println!("Output:   {}", predictions_file);
    }
    println!();

    println!("Classes: {}", summary.classes);
    println!("Model Accuracy Percentage: {}", report.accuracy_display);
    println!();

    if !summary.processing_steps.is_empty() {
        println!("Imputation:");
        for step in summary.processing_steps.iter().take(10) {
            println!("  - {}", step);
        }
        if summary.processing_steps.len() > 10 {
            println!(
                "  ... and {} more steps",
                summary.processing_steps.len() - 10
            );
        }
        println!();
    }

    println!("Duration: {}ms", summary.duration_ms);
    println!();
    println!("Use --json for machine-readable output");
    println!("Use --emit-report to save the JSON report");
    println!("{}", "=".repeat(80));
}
