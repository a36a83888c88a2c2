//! Graded item model

use super::course::CourseId;
use serde::{Deserialize, Serialize};

/// Unique grade identifier
pub type GradeId = u32;

/// One weighted component of a course's final grade (e.g., "Midterm", weight 0.3)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Grade identifier
    pub id: GradeId,

    /// Owning course
    pub course_id: CourseId,

    /// Category label
    #[serde(default)]
    pub category: String,

    /// Points earned
    pub points: f64,

    /// Maximum points; must be positive
    pub max_points: f64,

    /// Fractional weight of this item in the course grade
    pub weight: f64,
}

impl Grade {
    /// Create a new graded item
    #[must_use]
    pub fn new(
        id: GradeId,
        course_id: CourseId,
        category: &str,
        points: f64,
        max_points: f64,
        weight: f64,
    ) -> Self {
        Self {
            id,
            course_id,
            category: category.to_string(),
            points,
            max_points,
            weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_deserialize_integer_points() {
        let grade: Grade = toml::from_str(
            r#"
id = 1
course_id = 2
category = "Final"
points = 45
max_points = 50
weight = 0.4
"#,
        )
        .expect("grade should parse");

        assert!((grade.points - 45.0).abs() < f64::EPSILON);
        assert!((grade.max_points - 50.0).abs() < f64::EPSILON);
        assert_eq!(grade.category, "Final");
    }
}
