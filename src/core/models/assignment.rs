//! Assignment model

use super::course::CourseId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique assignment identifier
pub type AssignmentId = u32;

/// Assignment priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority
    #[default]
    Medium,
    /// High priority
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown priority '{s}' (expected low, medium or high)")),
        }
    }
}

/// Assignment workflow status. Any status may move to any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
    /// Not started
    #[default]
    Pending,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(format!(
                "Unknown status '{s}' (expected pending, in-progress or completed)"
            )),
        }
    }
}

/// Represents an assignment belonging to a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assignment identifier
    pub id: AssignmentId,

    /// Assignment title
    pub title: String,

    /// Owning course; may reference a course that no longer exists
    pub course_id: CourseId,

    /// Due timestamp in local wall-clock time
    pub due_date: NaiveDateTime,

    /// Priority
    #[serde(default)]
    pub priority: Priority,

    /// Status
    #[serde(default)]
    pub status: AssignmentStatus,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Optional recorded grade percentage
    #[serde(default)]
    pub grade: Option<f64>,
}

impl Assignment {
    /// Create a new pending, medium-priority assignment
    #[must_use]
    pub const fn new(
        id: AssignmentId,
        title: String,
        course_id: CourseId,
        due_date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            title,
            course_id,
            due_date,
            priority: Priority::Medium,
            status: AssignmentStatus::Pending,
            description: None,
            grade: None,
        }
    }

    /// Set the status
    #[must_use]
    pub const fn with_status(mut self, status: AssignmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the assignment is completed
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == AssignmentStatus::Completed
    }
}
