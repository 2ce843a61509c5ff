//! Error taxonomy for grade aggregation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradeError {
    #[error("Input directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("File name does not end in .csv: {}", path.display())]
    MalformedFilename { path: PathBuf },

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Class {class_name} has no students with a non-zero grade")]
    NoGradableStudents { class_name: String },

    #[error("No class produced a result; nothing to report")]
    EmptyReport,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GradeError>;

impl GradeError {
    /// Whether the error only invalidates the file being processed.
    ///
    /// The aggregation loop skips the file and moves on for these; every
    /// other variant aborts the run.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            GradeError::MalformedFilename { .. }
                | GradeError::MalformedRow { .. }
                | GradeError::NoGradableStudents { .. }
                | GradeError::Io(_)
                | GradeError::Csv(_)
        )
    }

    /// Short machine-friendly tag used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GradeError::DirectoryNotFound { .. } => "directory_not_found",
            GradeError::MalformedFilename { .. } => "malformed_filename",
            GradeError::MalformedRow { .. } => "malformed_row",
            GradeError::NoGradableStudents { .. } => "no_gradable_students",
            GradeError::EmptyReport => "empty_report",
            GradeError::Io(_) => "io",
            GradeError::Csv(_) => "csv",
            GradeError::Json(_) => "json",
        }
    }
}
