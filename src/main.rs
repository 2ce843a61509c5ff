//! CLI entry point for the class grade reporter.
//!
//! Reads every per-class CSV file in the input directory, ranks classes by
//! mean grade and writes a summary report. Every setting has an environment
//! variable and a default, so the tool runs with no arguments.

use anyhow::{Context, Result};
use clap::Parser;
use class_grades::analyzers::analyzer::{RunOptions, run};
use class_grades::output::ReportFormat;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code when `--strict` is set and at least one file was skipped.
const EXIT_SKIPPED_FILES: u8 = 2;

#[derive(Parser)]
#[command(name = "class_grades")]
#[command(about = "Rank classes by mean grade from per-class CSV files", long_about = None)]
struct Cli {
    /// Directory containing one CSV file per class
    #[arg(short, long, env = "INPUT_LOCATION", default_value = "input")]
    input: PathBuf,

    /// File to write the report to
    #[arg(short, long, env = "REPORT_PATH", default_value = "report.txt")]
    output: PathBuf,

    /// Report format
    #[arg(short, long, env = "REPORT_FORMAT", value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Exit with a non-zero code if any input file was skipped
    #[arg(long, env = "STRICT", default_value_t = false)]
    strict: bool,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok(); // Load .env file

    let _log_guard = init_logging();

    let cli = Cli::parse();
    let options = RunOptions {
        input_dir: cli.input,
        output_path: cli.output,
        format: cli.format,
    };

    let outcome = run(&options).with_context(|| {
        format!(
            "failed to build grade report from {}",
            options.input_dir.display()
        )
    })?;

    info!(
        report = %options.output_path.display(),
        generated_at = %outcome.summary.generated_at(),
        classes = outcome.summary.classes().len(),
        skipped = outcome.skipped.len(),
        "Finished"
    );

    if cli.strict && !outcome.skipped.is_empty() {
        warn!(
            skipped = outcome.skipped.len(),
            "Input files were skipped in strict mode"
        );
        return Ok(ExitCode::from(EXIT_SKIPPED_FILES));
    }

    Ok(ExitCode::SUCCESS)
}

/// Logging setup: colored stderr, plus a JSON rolling log file when
/// `LOG_FILE_PATH` is set.
fn init_logging() -> Option<WorkerGuard> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", "info"));

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let path = Path::new(&log_file_path);
            let log_dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let log_file_name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "class_grades.log".into());

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(env_filter("RUST_LOG_JSON", "debug"));
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}

/// Reads a filter from `var`, falling back to `default` when unset or invalid.
fn env_filter(var: &str, default: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default))
}
