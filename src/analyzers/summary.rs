use crate::analyzers::aggregate::ReportState;
use crate::analyzers::types::{MeanGrade, Summary};
use crate::error::{GradeError, Result};
use chrono::Utc;

/// Ranks the accumulated classes and computes the overall weighted mean.
///
/// The overall mean weights each class by its included-student count,
/// computed from exact grade sums rather than the rounded class means.
///
/// # Errors
///
/// Returns [`GradeError::EmptyReport`] if no class was accumulated.
pub fn build_summary(state: ReportState) -> Result<Summary> {
    if state.is_empty() {
        return Err(GradeError::EmptyReport);
    }

    let mut classes = Vec::with_capacity(state.len());
    let mut top: Option<(MeanGrade, Vec<String>)> = None;

    for (mean, bucket) in state.into_ranked_buckets() {
        if top.is_none() {
            top = Some((mean, bucket.iter().map(|c| c.class_name.clone()).collect()));
        }
        classes.extend(bucket);
    }

    let (top_mean, top_classes) = top.ok_or(GradeError::EmptyReport)?;

    let total_included: usize = classes.iter().map(|c| c.included_students).sum();
    let total_sum: u64 = classes.iter().map(|c| c.grade_sum).sum();
    let overall_mean = MeanGrade::from_ratio(total_sum, total_included as u64);

    Ok(Summary {
        generated_at: Utc::now(),
        top_classes,
        top_mean,
        overall_mean,
        total_included,
        classes,
    })
}
