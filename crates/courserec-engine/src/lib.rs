//! # courserec-engine
//!
//! The recommender pipeline. Runs once at startup:
//! load → aggregate → normalize → featurize → composite similarity matrix,
//! then answers queries against the immutable [`RecommenderIndex`].

pub mod engine;
pub mod features;
pub mod loader;
pub mod normalize;
pub mod query;
pub mod similarity;

pub use engine::{run, IndexBuilder, IndexStats, RecommenderIndex};
