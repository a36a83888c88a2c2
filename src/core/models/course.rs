//! Course model

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Unique course identifier
pub type CourseId = u32;

/// Weekly meeting pattern of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Days the course meets (e.g., Monday, Wednesday)
    #[serde(default)]
    pub days: Vec<Weekday>,

    /// Meeting time as entered (e.g., "09:30"); compared lexically
    #[serde(default)]
    pub time: String,

    /// Room or building
    #[serde(default)]
    pub location: String,
}

/// Represents a course the student is enrolled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier
    pub id: CourseId,

    /// Course name (e.g., "Calculus I")
    pub name: String,

    /// Instructor name
    #[serde(default)]
    pub instructor: String,

    /// Credit hours
    pub credits: u32,

    /// Display color tag (e.g., "#6366f1")
    #[serde(default)]
    pub color: String,

    /// Optional weekly schedule
    #[serde(default)]
    pub schedule: Option<WeeklySchedule>,
}

impl Course {
    /// Create a new course without instructor, color or schedule
    ///
    /// # Arguments
    /// * `id` - Course identifier
    /// * `name` - Course name
    /// * `credits` - Credit hours
    #[must_use]
    pub const fn new(id: CourseId, name: String, credits: u32) -> Self {
        Self {
            id,
            name,
            instructor: String::new(),
            credits,
            color: String::new(),
            schedule: None,
        }
    }

    /// Set the instructor
    #[must_use]
    pub fn with_instructor(mut self, instructor: &str) -> Self {
        self.instructor = instructor.to_string();
        self
    }

    /// Set the weekly schedule
    #[must_use]
    pub fn with_schedule(mut self, schedule: WeeklySchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(7, "Organic Chemistry".to_string(), 4);

        assert_eq!(course.id, 7);
        assert_eq!(course.name, "Organic Chemistry");
        assert_eq!(course.credits, 4);
        assert!(course.instructor.is_empty());
        assert!(course.schedule.is_none());
    }

    #[test]
    fn test_course_builders() {
        let course = Course::new(1, "Physics".to_string(), 3)
            .with_instructor("Dr. Chen")
            .with_schedule(WeeklySchedule {
                days: vec![Weekday::Tue, Weekday::Thu],
                time: "13:00".to_string(),
                location: "Lab 4".to_string(),
            });

        assert_eq!(course.instructor, "Dr. Chen");
        let schedule = course.schedule.expect("schedule should be set");
        assert_eq!(schedule.days, vec![Weekday::Tue, Weekday::Thu]);
        assert_eq!(schedule.location, "Lab 4");
    }

    #[test]
    fn test_course_deserialize_defaults() {
        let course: Course = toml::from_str(
            r#"
id = 3
name = "History"
credits = 2
"#,
        )
        .expect("course should parse");

        assert_eq!(course.id, 3);
        assert!(course.color.is_empty());
        assert!(course.schedule.is_none());
    }

    #[test]
    fn test_schedule_weekday_names() {
        let course: Course = toml::from_str(
            r#"
id = 4
name = "Art"
credits = 1
schedule = { days = ["Monday", "Friday"], time = "10:00", location = "Studio" }
"#,
        )
        .expect("course should parse");

        let schedule = course.schedule.expect("schedule should parse");
        assert_eq!(schedule.days, vec![Weekday::Mon, Weekday::Fri]);
    }
}
