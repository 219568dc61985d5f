//! Query errors.

use super::error_code::{self, CourserecErrorCode};

/// Errors that can occur when resolving a recommendation query.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    /// No catalog row carries the (normalized) course title and instructor.
    #[error("No catalog entry for course {course:?} taught by {instructor:?}")]
    NotFound { course: String, instructor: String },
}

impl CourserecErrorCode for QueryError {
    fn error_code(&self) -> &'static str {
        error_code::NOT_FOUND
    }
}
