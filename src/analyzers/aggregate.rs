use crate::analyzers::grade::letter_grade;
use crate::analyzers::types::{ClassResult, GradeRow, MeanGrade};
use crate::error::{GradeError, Result};
use std::collections::BTreeMap;

/// Aggregates the rows of one class into a [`ClassResult`].
///
/// Students with a zero grade are listed as excluded and left out of the
/// mean; they still count toward `total_students`.
///
/// # Errors
///
/// Returns [`GradeError::NoGradableStudents`] when no row has a positive
/// grade, since the mean would be undefined.
pub fn compute_class_result(class_name: &str, rows: Vec<GradeRow>) -> Result<ClassResult> {
    let total_students = rows.len();

    let mut excluded_students = Vec::new();
    let mut included_students = 0usize;
    let mut grade_sum = 0u64;

    for row in rows {
        if row.grade == 0 {
            excluded_students.push(row.student);
            continue;
        }

        included_students += 1;
        grade_sum += u64::from(row.grade);
    }

    if included_students == 0 {
        return Err(GradeError::NoGradableStudents {
            class_name: class_name.to_string(),
        });
    }

    let mean_grade = MeanGrade::from_ratio(grade_sum, included_students as u64);

    Ok(ClassResult {
        class_name: class_name.to_string(),
        total_students,
        included_students,
        excluded_students,
        mean_grade,
        letter_grade: letter_grade(mean_grade),
        grade_sum,
    })
}

/// Class results accumulated across a run, keyed by mean grade.
///
/// Classes that share a mean are all kept, ordered by class name, so the
/// final ranking does not depend on the order files were read in.
#[derive(Debug, Default)]
pub struct ReportState {
    by_mean: BTreeMap<MeanGrade, Vec<ClassResult>>,
}

impl ReportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulate(&mut self, result: ClassResult) {
        let bucket = self.by_mean.entry(result.mean_grade).or_default();
        let pos = bucket.partition_point(|existing| existing.class_name <= result.class_name);
        bucket.insert(pos, result);
    }

    /// Number of classes held.
    pub fn len(&self) -> usize {
        self.by_mean.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_mean.is_empty()
    }

    /// Consumes the state, yielding `(mean, classes)` buckets highest first.
    pub(crate) fn into_ranked_buckets(self) -> impl Iterator<Item = (MeanGrade, Vec<ClassResult>)> {
        self.by_mean.into_iter().rev()
    }
}
