//! Text normalization for course titles and instructor names.

pub mod instructor;
pub mod roman;
pub mod title;

pub use instructor::normalize_instructor;
pub use roman::to_roman;
pub use title::normalize_title;
