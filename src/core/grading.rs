//! Weighted course grade aggregation
//!
//! A course grade is the weight-normalized mean of its graded items'
//! percentages. Only the weights actually present form the denominator, so a
//! course with partial weight coverage still gets a grade.

use crate::core::models::{CourseId, Grade, GradeId};
use thiserror::Error;

/// Errors raised while aggregating graded items
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// A graded item cannot be weighed because its maximum is not positive
    #[error("grade {grade_id} has non-positive max points ({max_points})")]
    NonPositiveMaxPoints {
        /// Offending grade
        grade_id: GradeId,
        /// The value found
        max_points: f64,
    },
    /// A graded item carries `nan` or an infinite `points`, `max_points` or `weight`
    #[error("grade {grade_id} has non-finite {field} ({value})")]
    NonFiniteValue {
        /// Offending grade
        grade_id: GradeId,
        /// Name of the field
        field: &'static str,
        /// The value found
        value: f64,
    },
    /// Finite items whose weighted percentage still overflows
    #[error("weighted percentage is not finite ({value})")]
    NonFinitePercentage {
        /// The value computed
        value: f64,
    },
}

fn require_finite(grade: &Grade, field: &'static str, value: f64) -> Result<f64, GradeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GradeError::NonFiniteValue {
            grade_id: grade.id,
            field,
            value,
        })
    }
}

/// Filter the full grade collection down to one course's items
pub fn grades_for_course(grades: &[Grade], course_id: CourseId) -> Vec<&Grade> {
    grades.iter().filter(|g| g.course_id == course_id).collect()
}

/// Percentage score of a single graded item (`points / max_points * 100`)
///
/// # Errors
///
/// Returns [`GradeError::NonPositiveMaxPoints`] if `max_points` is zero,
/// negative or NaN, and [`GradeError::NonFiniteValue`] if `max_points` is
/// infinite or `points` is infinite or NaN.
pub fn item_percentage(grade: &Grade) -> Result<f64, GradeError> {
    if grade.max_points.is_nan() || grade.max_points <= 0.0 {
        return Err(GradeError::NonPositiveMaxPoints {
            grade_id: grade.id,
            max_points: grade.max_points,
        });
    }
    let max_points = require_finite(grade, "max_points", grade.max_points)?;
    let points = require_finite(grade, "points", grade.points)?;
    Ok(points / max_points * 100.0)
}

/// Compute the unrounded weighted percentage for one course's items.
///
/// Returns `Ok(None)` when the list is empty or the weights sum to zero.
/// Values above 100 are kept as is.
///
/// # Errors
///
/// Fails the whole computation if any item has a non-positive maximum or a
/// non-finite value, or if the result overflows.
pub fn weighted_percentage<'a, I>(items: I) -> Result<Option<f64>, GradeError>
where
    I: IntoIterator<Item = &'a Grade>,
{
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for grade in items {
        let percentage = item_percentage(grade)?;
        let weight = require_finite(grade, "weight", grade.weight)?;
        weighted_sum += percentage * weight;
        total_weight += weight;
    }

    if total_weight <= 0.0 {
        return Ok(None);
    }
    let value = weighted_sum / total_weight;
    if value.is_finite() {
        Ok(Some(value))
    } else {
        Err(GradeError::NonFinitePercentage { value })
    }
}

/// Compute the rounded course grade for one course's items.
///
/// # Errors
///
/// See [`weighted_percentage`].
pub fn course_grade<'a, I>(items: I) -> Result<Option<i64>, GradeError>
where
    I: IntoIterator<Item = &'a Grade>,
{
    Ok(weighted_percentage(items)?.map(round_half_up))
}

/// Round to the nearest integer with halves going up (83.5 -> 84, -2.5 -> -2)
///
/// Meant for finite percentages, which [`weighted_percentage`] guarantees.
/// Values beyond the `i64` range saturate and NaN becomes 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
