//! Shared library for `StudyTrack`
//! Contains the grade, GPA and deadline computations used by the CLI.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
