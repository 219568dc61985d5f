//! Dataset loading errors. All of them are fatal at startup.

use super::error_code::{self, CourserecErrorCode};

/// Errors that can occur while reading and aggregating the dataset tables.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed table {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("Missing required column {column:?} in {path}")]
    MissingColumn { path: String, column: String },

    #[error("Invalid number {value:?} in {path}, row {row}, column {column:?}")]
    InvalidNumber {
        path: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("Grade table {path} has no usable rows")]
    EmptyDataset { path: String },
}

impl CourserecErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingColumn { .. } => error_code::SCHEMA_MISMATCH,
            _ => error_code::LOAD_ERROR,
        }
    }
}
