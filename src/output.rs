//! Report rendering and persistence.
//!
//! Supports a fixed-format text report and pretty-printed JSON.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use tracing::{debug, info};

use crate::analyzers::types::{ClassResult, Summary};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Renders the summary as the plain-text report.
pub fn render_text(summary: &Summary) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Congratulations to {} for the highest mean grade of {}!",
        join_names(summary.top_classes()),
        summary.top_mean()
    );
    let _ = writeln!(
        out,
        "Overall weighted average: {} across {} graded students",
        summary.overall_mean(),
        summary.total_included()
    );

    for class in summary.classes() {
        out.push('\n');
        write_class_block(&mut out, class);
    }

    let _ = writeln!(
        out,
        "\nGenerated at {}",
        summary.generated_at().format("%Y-%m-%d %H:%M:%S UTC")
    );

    out
}

/// Renders the summary as pretty-printed JSON.
pub fn render_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Renders the summary and writes it to `path`, creating parent
/// directories as needed.
pub fn write_report(path: &Path, summary: &Summary, format: ReportFormat) -> Result<()> {
    let body = match format {
        ReportFormat::Text => render_text(summary),
        ReportFormat::Json => render_json(summary)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    debug!(path = %path.display(), bytes = body.len(), ?format, "Writing report");
    fs::write(path, body)?;
    info!(path = %path.display(), classes = summary.classes().len(), "Report written");

    Ok(())
}

fn write_class_block(out: &mut String, class: &ClassResult) {
    let excluded = if class.excluded_students().is_empty() {
        "none".to_string()
    } else {
        class.excluded_students().join(", ")
    };

    let _ = writeln!(out, "Class: {}", class.class_name());
    let _ = writeln!(
        out,
        "  Mean grade: {} ({})",
        class.mean_grade(),
        class.letter_grade()
    );
    let _ = writeln!(out, "  Total students: {}", class.total_students());
    let _ = writeln!(out, "  Included students: {}", class.included_students());
    let _ = writeln!(
        out,
        "  Excluded students: {}",
        class.excluded_students().len()
    );
    let _ = writeln!(out, "  Excluded: {excluded}");
}

fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::aggregate::{ReportState, compute_class_result};
    use crate::analyzers::summary::build_summary;
    use crate::analyzers::types::GradeRow;
    use tempfile::TempDir;

    fn sample_summary() -> Summary {
        let mut state = ReportState::new();
        state.accumulate(
            compute_class_result(
                "MathA",
                vec![
                    GradeRow::new("Alice", 90),
                    GradeRow::new("Bob", 0),
                    GradeRow::new("Carol", 80),
                ],
            )
            .unwrap(),
        );
        state.accumulate(
            compute_class_result(
                "History",
                vec![GradeRow::new("Dan", 70), GradeRow::new("Eve", 75)],
            )
            .unwrap(),
        );
        build_summary(state).unwrap()
    }

    #[test]
    fn test_render_text_layout() {
        let summary = sample_summary();
        let text = render_text(&summary);

        let expected = format!(
            "\
Congratulations to MathA for the highest mean grade of 85.00!
Overall weighted average: 78.75 across 4 graded students

Class: MathA
  Mean grade: 85.00 (B)
  Total students: 3
  Included students: 2
  Excluded students: 1
  Excluded: Bob

Class: History
  Mean grade: 72.50 (C)
  Total students: 2
  Included students: 2
  Excluded students: 0
  Excluded: none

Generated at {}
",
            summary.generated_at().format("%Y-%m-%d %H:%M:%S UTC")
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_join_names() {
        assert_eq!(join_names(&["A".to_string()]), "A");
        assert_eq!(join_names(&["A".to_string(), "B".to_string()]), "A and B");
        assert_eq!(
            join_names(&["A".to_string(), "B".to_string(), "C".to_string()]),
            "A, B and C"
        );
    }

    #[test]
    fn test_render_json_fields() {
        let json = render_json(&sample_summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["top_classes"][0], "MathA");
        assert_eq!(value["overall_mean"], 78.75);
        assert_eq!(value["classes"][0]["excluded_students"][0], "Bob");
        assert_eq!(value["classes"][1]["mean_grade"], 72.5);
    }

    #[test]
    fn test_write_report_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out").join("report.txt");

        write_report(&path, &sample_summary(), ReportFormat::Text).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Congratulations to MathA"));
    }
}
