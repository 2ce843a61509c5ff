use crate::analyzers::aggregate::{ReportState, compute_class_result};
use crate::analyzers::summary::build_summary;
use crate::analyzers::types::{ClassResult, SkippedFile, Summary};
use crate::collector::collect_files;
use crate::error::Result;
use crate::output::{ReportFormat, write_report};
use crate::parser::{derive_class_name, parse_rows};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Where to read grade files from and where to write the report.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub format: ReportFormat,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct RunOutcome {
    pub summary: Summary,
    pub skipped: Vec<SkippedFile>,
}

/// Reads one class file and aggregates it into a [`ClassResult`].
#[tracing::instrument(skip_all, fields(file = %path.display()))]
pub fn process_file(path: &Path) -> Result<ClassResult> {
    let class_name = derive_class_name(path)?;
    info!(class = %class_name, "Processing class");

    let file = File::open(path)?;
    let rows = parse_rows(BufReader::new(file))?;

    compute_class_result(&class_name, rows)
}

/// Aggregates every file, skipping the ones that fail.
///
/// Per-file failures are logged and returned alongside the state; they never
/// abort the loop.
pub fn aggregate_files(paths: &[PathBuf]) -> (ReportState, Vec<SkippedFile>) {
    let mut state = ReportState::new();
    let mut skipped = Vec::new();

    for path in paths {
        match process_file(path) {
            Ok(result) => {
                info!(
                    class = %result.class_name(),
                    mean = %result.mean_grade(),
                    included = result.included_students(),
                    excluded = result.excluded_students().len(),
                    "Class processed"
                );
                state.accumulate(result);
            }
            Err(e) => {
                if e.is_per_file() {
                    warn!(file = %path.display(), kind = e.kind(), error = %e, "Skipping input file");
                } else {
                    error!(file = %path.display(), kind = e.kind(), error = %e, "Failed to process input file");
                }
                skipped.push(SkippedFile {
                    path: path.clone(),
                    error: e,
                });
            }
        }
    }

    info!(
        classes = state.len(),
        skipped = skipped.len(),
        "Aggregation complete"
    );
    (state, skipped)
}

/// Collects, aggregates, summarizes and writes the report.
///
/// # Errors
///
/// Fails if the input directory is missing, if no class produced a result
/// (before anything is written), or if the report cannot be written.
pub fn run(options: &RunOptions) -> Result<RunOutcome> {
    let files = collect_files(&options.input_dir)?;
    let (state, skipped) = aggregate_files(&files);
    let summary = build_summary(state)?;

    write_report(&options.output_path, &summary, options.format)?;

    Ok(RunOutcome { summary, skipped })
}
