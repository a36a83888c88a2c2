//! Grade-point conversion and credit-weighted GPA

use crate::core::models::Course;
use std::fmt;

/// Grade-point breakpoints on a 4.0 scale, highest threshold first.
/// A percentage maps to the first entry whose threshold it meets or exceeds.
pub const GRADE_POINT_TABLE: [(f64, f64); 10] = [
    (97.0, 4.0),
    (93.0, 3.7),
    (90.0, 3.3),
    (87.0, 3.0),
    (83.0, 2.7),
    (80.0, 2.3),
    (77.0, 2.0),
    (73.0, 1.7),
    (70.0, 1.3),
    (67.0, 1.0),
];

/// Convert a course percentage into grade points (0.0 below 67)
#[must_use]
pub fn grade_points(percentage: f64) -> f64 {
    GRADE_POINT_TABLE
        .iter()
        .find(|(threshold, _)| percentage >= *threshold)
        .map_or(0.0, |(_, points)| *points)
}

/// A credit-weighted grade-point average over graded courses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gpa {
    value: f64,
    credits: u64,
}

impl Gpa {
    /// The unrounded GPA
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The GPA rounded to two decimal places
    #[must_use]
    pub fn rounded(&self) -> f64 {
        (self.value * 100.0).round() / 100.0
    }

    /// Total credit hours that contributed to the GPA
    #[must_use]
    pub const fn credits(&self) -> u64 {
        self.credits
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

/// Compute the overall GPA from courses paired with their percentage grade.
///
/// Courses without a grade contribute neither points nor credits. Returns
/// `None` when no course has a grade (or the graded credits sum to zero).
/// Credits are summed as `u64`, so any number of `u32` credit hours fits.
#[allow(clippy::cast_precision_loss)]
pub fn overall_gpa<'a, I>(courses: I) -> Option<Gpa>
where
    I: IntoIterator<Item = (&'a Course, Option<f64>)>,
{
    let mut total_points = 0.0;
    let mut total_credits: u64 = 0;

    for (course, percentage) in courses {
        let Some(percentage) = percentage else {
            continue;
        };
        total_points += grade_points(percentage) * f64::from(course.credits);
        total_credits += u64::from(course.credits);
    }

    (total_credits > 0).then(|| Gpa {
        value: total_points / total_credits as f64,
        credits: total_credits,
    })
}

/// Format an optional GPA for display, `N/A` when undefined
#[must_use]
pub fn format_gpa(gpa: Option<Gpa>) -> String {
    gpa.map_or_else(|| "N/A".to_string(), |g| g.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: u32, credits: u32) -> Course {
        Course::new(id, format!("Course {id}"), credits)
    }

    #[test]
    fn test_grade_points_boundaries() {
        assert!((grade_points(83.0) - 2.7).abs() < f64::EPSILON);
        assert!((grade_points(82.99) - 2.3).abs() < f64::EPSILON);
        assert!((grade_points(100.0) - 4.0).abs() < f64::EPSILON);
        assert!((grade_points(66.99) - 0.0).abs() < f64::EPSILON);
        assert!((grade_points(-5.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exact_thresholds_take_higher_tier() {
        for (threshold, points) in GRADE_POINT_TABLE {
            assert!(
                (grade_points(threshold) - points).abs() < f64::EPSILON,
                "{threshold} should map to {points}"
            );
        }
    }

    #[test]
    fn test_ungraded_course_excluded() {
        let a = course(1, 3);
        let b = course(2, 4);
        let gpa = overall_gpa([(&a, None), (&b, Some(90.0))]).expect("gpa should exist");

        assert!((gpa.value() - 3.3).abs() < 1e-9);
        assert_eq!(gpa.credits(), 4);
    }

    #[test]
    fn test_no_graded_courses_is_undefined() {
        let a = course(1, 3);
        assert!(overall_gpa([(&a, None)]).is_none());
        assert!(overall_gpa(Vec::<(&Course, Option<f64>)>::new()).is_none());
        assert_eq!(format_gpa(None), "N/A");
    }

    #[test]
    fn test_credit_weighting_and_rounding() {
        let a = course(1, 3);
        let b = course(2, 4);
        // (4.0 * 3 + 2.7 * 4) / 7 = 22.8 / 7 = 3.2571...
        let gpa = overall_gpa([(&a, Some(98.0)), (&b, Some(85.0))]).expect("gpa should exist");

        assert!((gpa.value() - 22.8 / 7.0).abs() < 1e-9);
        assert!((gpa.rounded() - 3.26).abs() < 1e-9);
        assert_eq!(gpa.to_string(), "3.26");
        assert_eq!(format_gpa(Some(gpa)), "3.26");
    }

    #[test]
    fn test_credit_sum_beyond_u32() {
        let a = course(1, u32::MAX);
        let b = course(2, 1);
        let gpa = overall_gpa([(&a, Some(90.0)), (&b, Some(90.0))]).expect("gpa should exist");

        assert_eq!(gpa.credits(), u64::from(u32::MAX) + 1);
        assert!((gpa.value() - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_zero_credit_course_only_is_undefined() {
        let seminar = course(1, 0);
        assert!(overall_gpa([(&seminar, Some(95.0))]).is_none());
    }
}
