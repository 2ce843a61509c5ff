//! Parsers for per-class grade files: class name from the file name, and
//! student rows from the CSV body.

use std::io::Read;
use std::path::Path;

use crate::analyzers::types::GradeRow;
use crate::error::{GradeError, Result};

const CSV_SUFFIX: &str = ".csv";

/// Derives the class name by stripping `.csv` from the file's base name.
///
/// # Errors
///
/// Returns [`GradeError::MalformedFilename`] if the base name is not UTF-8,
/// does not end in `.csv`, or is nothing but the suffix.
pub fn derive_class_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(CSV_SUFFIX))
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| GradeError::MalformedFilename {
            path: path.to_path_buf(),
        })
}

/// Parses `<student>,<grade>` rows, skipping the header row.
///
/// Grades are truncated toward zero (`85.7` becomes 85).
///
/// # Errors
///
/// Returns [`GradeError::MalformedRow`] for a row without exactly two
/// fields or with a blank, negative or non-numeric grade, and
/// [`GradeError::Csv`] if the input cannot be decoded as CSV at all.
pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<GradeRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let student = record.get(0).unwrap_or_default();
        let raw_grade = record.get(1).ok_or_else(|| GradeError::MalformedRow {
            line,
            reason: format!("missing grade for student '{student}'"),
        })?;

        if record.len() > 2 {
            return Err(GradeError::MalformedRow {
                line,
                reason: format!("expected 2 fields, found {}", record.len()),
            });
        }

        let grade = parse_grade(raw_grade).ok_or_else(|| GradeError::MalformedRow {
            line,
            reason: format!("grade '{raw_grade}' for student '{student}' is not a valid number"),
        })?;

        rows.push(GradeRow::new(student, grade));
    }

    Ok(rows)
}

fn parse_grade(raw: &str) -> Option<u32> {
    let value: f64 = raw.parse().ok()?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value.trunc() as u32)
}
