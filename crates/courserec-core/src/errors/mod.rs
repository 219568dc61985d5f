//! Error handling for the recommender.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod build_error;
pub mod config_error;
pub mod error_code;
pub mod load_error;
pub mod query_error;
pub mod recommender_error;

pub use build_error::BuildError;
pub use config_error::ConfigError;
pub use error_code::CourserecErrorCode;
pub use load_error::LoadError;
pub use query_error::QueryError;
pub use recommender_error::RecommenderError;
