//! Data models for `StudyTrack`

pub mod assignment;
pub mod course;
pub mod grade;

pub use assignment::{Assignment, AssignmentId, AssignmentStatus, Priority};
pub use course::{Course, CourseId, WeeklySchedule};
pub use grade::{Grade, GradeId};
