//! Pairwise similarity: cosine kernel, dense matrix, weighted composite.

pub mod composite;
pub mod cosine;
pub mod guard;
pub mod matrix;

pub use composite::{build_composite, CompositeScorer};
pub use cosine::{cosine, pairwise_cosine, self_cosine};
pub use guard::BuildGuard;
pub use matrix::SimilarityMatrix;
