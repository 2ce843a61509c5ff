use crate::analyzers::types::MeanGrade;

/// Converts a class mean (0–100 scale) into a letter grade.
///
/// | Range       | Grade |
/// |-------------|-------|
/// | >= 90       | A     |
/// | >= 80       | B     |
/// | >= 70       | C     |
/// | >= 60       | D     |
/// | < 60        | F     |
pub fn letter_grade(mean: MeanGrade) -> &'static str {
    match mean.hundredths() {
        h if h >= 9000 => "A",
        h if h >= 8000 => "B",
        h if h >= 7000 => "C",
        h if h >= 6000 => "D",
        _ => "F",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade_of(hundredths: u64) -> &'static str {
        letter_grade(MeanGrade::from_hundredths(hundredths))
    }

    #[test]
    fn test_letter_grade_boundaries() {
        assert_eq!(grade_of(10000), "A");
        assert_eq!(grade_of(9000), "A");
        assert_eq!(grade_of(8999), "B");
        assert_eq!(grade_of(8000), "B");
        assert_eq!(grade_of(7999), "C");
        assert_eq!(grade_of(7000), "C");
        assert_eq!(grade_of(6999), "D");
        assert_eq!(grade_of(6000), "D");
        assert_eq!(grade_of(5999), "F");
        assert_eq!(grade_of(0), "F");
    }
}
