//! Records file loader
//!
//! The records file is a TOML document with optional `[[courses]]`,
//! `[[assignments]]` and `[[grades]]` arrays, already using the field names
//! of the core models.

use crate::core::models::{Assignment, Course, CourseId, Grade};
use crate::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// All records for one student
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Records {
    /// Enrolled courses
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Assignments across all courses
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    /// Graded items across all courses
    #[serde(default)]
    pub grades: Vec<Grade>,
}

impl Records {
    /// Parse records from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the record schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Look up a course by identifier
    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Course name for display, falling back for dangling references
    #[must_use]
    pub fn course_name(&self, id: CourseId) -> String {
        self.course(id)
            .map_or_else(|| format!("Unknown course #{id}"), |c| c.name.clone())
    }
}

/// Load a records file
///
/// # Arguments
/// * `path` - Path to the TOML records file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Records, Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("cannot read records file {}: {e}", path.display()))?;
    let records = Records::from_toml(&content)
        .map_err(|e| format!("invalid records file {}: {e}", path.display()))?;

    debug!(
        "Loaded {} courses, {} assignments, {} grades from {}",
        records.courses.len(),
        records.assignments.len(),
        records.grades.len(),
        path.display()
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let records = Records::from_toml("").expect("empty records should parse");
        assert_eq!(records, Records::default());
    }

    #[test]
    fn test_dangling_course_name() {
        let records = Records::from_toml(
            r#"
[[courses]]
id = 1
name = "Statistics"
credits = 3
"#,
        )
        .expect("records should parse");

        assert_eq!(records.course_name(1), "Statistics");
        assert_eq!(records.course_name(42), "Unknown course #42");
    }

    #[test]
    fn test_bad_status_rejected() {
        let result = Records::from_toml(
            r#"
[[assignments]]
id = 1
title = "x"
course_id = 1
due_date = "2026-01-01T10:00:00"
status = "archived"
"#,
        );
        assert!(result.is_err());
    }
}
