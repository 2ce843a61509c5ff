//! Data types used by the aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// A single student row parsed from a per-class CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeRow {
    pub student: String,
    pub grade: u32,
}

impl GradeRow {
    pub fn new(student: impl Into<String>, grade: u32) -> Self {
        Self {
            student: student.into(),
            grade,
        }
    }
}

/// A mean grade rounded to two decimal places.
///
/// Stored as hundredths so that means are totally ordered and rounding is
/// exact. Halves round up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MeanGrade(u64);

impl MeanGrade {
    /// Rounded mean of `count` grades adding up to `sum`.
    ///
    /// `count` must be non-zero.
    pub fn from_ratio(sum: u64, count: u64) -> Self {
        debug_assert!(count > 0);
        let (sum, count) = (u128::from(sum), u128::from(count));
        let hundredths = (sum * 200 + count) / (2 * count);
        Self(u64::try_from(hundredths).unwrap_or(u64::MAX))
    }

    pub fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths)
    }

    pub fn hundredths(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

#[cfg(test)]
impl MeanGrade {
    /// Rounds an arbitrary value. Negative and non-finite input becomes 0.
    pub(crate) fn from_f64(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self(0);
        }
        Self((value * 100.0).round() as u64)
    }
}

impl fmt::Display for MeanGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for MeanGrade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Aggregated result for one class (one input file).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassResult {
    pub(crate) class_name: String,
    pub(crate) total_students: usize,
    pub(crate) included_students: usize,
    pub(crate) excluded_students: Vec<String>,
    pub(crate) mean_grade: MeanGrade,
    pub(crate) letter_grade: &'static str,
    pub(crate) grade_sum: u64,
}

impl ClassResult {
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn total_students(&self) -> usize {
        self.total_students
    }

    pub fn included_students(&self) -> usize {
        self.included_students
    }

    /// Students with a zero grade, in file order.
    pub fn excluded_students(&self) -> &[String] {
        &self.excluded_students
    }

    pub fn mean_grade(&self) -> MeanGrade {
        self.mean_grade
    }

    pub fn letter_grade(&self) -> &'static str {
        self.letter_grade
    }

    /// Exact sum of the included grades.
    pub fn grade_sum(&self) -> u64 {
        self.grade_sum
    }
}

/// Ranked summary across every class that produced a result.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub(crate) generated_at: DateTime<Utc>,
    /// Every class tied at the highest mean, by name.
    pub(crate) top_classes: Vec<String>,
    pub(crate) top_mean: MeanGrade,
    /// Mean over every included student of every class.
    pub(crate) overall_mean: MeanGrade,
    pub(crate) total_included: usize,
    /// Highest mean first.
    pub(crate) classes: Vec<ClassResult>,
}

impl Summary {
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn top_classes(&self) -> &[String] {
        &self.top_classes
    }

    pub fn top_mean(&self) -> MeanGrade {
        self.top_mean
    }

    pub fn overall_mean(&self) -> MeanGrade {
        self.overall_mean
    }

    pub fn total_included(&self) -> usize {
        self.total_included
    }

    pub fn classes(&self) -> &[ClassResult] {
        &self.classes
    }
}

/// A file dropped at the per-file boundary, with the reason.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: crate::error::GradeError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ratio_rounds_half_up() {
        assert_eq!(MeanGrade::from_ratio(170, 2).hundredths(), 8500);
        assert_eq!(MeanGrade::from_ratio(1, 3).hundredths(), 33);
        assert_eq!(MeanGrade::from_ratio(2, 3).hundredths(), 67);
        // 0.125 -> 0.13
        assert_eq!(MeanGrade::from_ratio(1, 8).hundredths(), 13);
    }

    #[test]
    fn test_from_ratio_large_sums_do_not_wrap() {
        let count = 30_000_000u64;
        let sum = u64::from(u32::MAX) * count;
        assert_eq!(
            MeanGrade::from_ratio(sum, count).hundredths(),
            u64::from(u32::MAX) * 100
        );
    }

    #[test]
    fn test_display_pads_hundredths() {
        assert_eq!(MeanGrade::from_hundredths(8500).to_string(), "85.00");
        assert_eq!(MeanGrade::from_hundredths(7205).to_string(), "72.05");
        assert_eq!(MeanGrade::from_hundredths(7).to_string(), "0.07");
    }

    #[test]
    fn test_rounding_is_idempotent() {
        for (sum, count) in [(255u64, 3u64), (1000, 7), (299, 4), (1, 8), (97, 1)] {
            let once = MeanGrade::from_ratio(sum, count);
            let twice = MeanGrade::from_f64(once.as_f64());
            assert_eq!(once, twice, "sum={sum} count={count}");
        }
    }

    #[test]
    fn test_from_f64_clamps_invalid_input() {
        assert_eq!(MeanGrade::from_f64(-3.0), MeanGrade::default());
        assert_eq!(MeanGrade::from_f64(f64::NAN), MeanGrade::default());
        assert_eq!(MeanGrade::from_f64(72.346).hundredths(), 7235);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&MeanGrade::from_hundredths(8125)).unwrap();
        assert_eq!(json, "81.25");
    }
}
