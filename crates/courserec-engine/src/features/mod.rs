//! Feature construction: five vector spaces per catalog row.

pub mod builder;
pub mod tokenizer;
pub mod vector;
pub mod vectorizer;

pub use builder::{build_features, FeatureKind, FeatureSet};
pub use tokenizer::{Tokenizer, WholeFieldTokenizer, WordTokenizer};
pub use vector::{DenseVector, FeatureVector, SparseVector};
pub use vectorizer::CountVectorizer;
