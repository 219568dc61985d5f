//! Builds the five feature spaces for a catalog.

use std::fmt;

use courserec_core::types::Catalog;
use tracing::debug;

use super::tokenizer::{WholeFieldTokenizer, WordTokenizer};
use super::vector::{DenseVector, SparseVector};
use super::vectorizer::CountVectorizer;

/// The five feature spaces, in composite-score order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Title,
    Instructor,
    Subject,
    Grades,
    Rating,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 5] = [
        FeatureKind::Title,
        FeatureKind::Instructor,
        FeatureKind::Subject,
        FeatureKind::Grades,
        FeatureKind::Rating,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Instructor => "instructor",
            Self::Subject => "subject",
            Self::Grades => "grades",
            Self::Rating => "rating",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-row vectors for every feature space. Index `i` of each vector list is
/// catalog row `i`.
#[derive(Debug, Clone)]
pub struct FeatureSet {
    pub title: Vec<SparseVector>,
    pub instructor: Vec<SparseVector>,
    pub subject: Vec<SparseVector>,
    pub grades: Vec<DenseVector>,
    pub rating: Vec<DenseVector>,
    pub title_vocabulary: usize,
    pub instructor_vocabulary: usize,
    pub subject_vocabulary: usize,
}

impl FeatureSet {
    pub fn len(&self) -> usize {
        self.title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }
}

/// Vectorize every catalog row.
pub fn build_features(catalog: &Catalog) -> FeatureSet {
    let mut title_vectorizer = CountVectorizer::new(WordTokenizer);
    let title = title_vectorizer.fit_transform(catalog.iter().map(|r| r.title.as_str()));

    let mut instructor_vectorizer = CountVectorizer::new(WholeFieldTokenizer);
    let instructor =
        instructor_vectorizer.fit_transform(catalog.iter().map(|r| r.instructor.as_str()));

    let mut subject_vectorizer = CountVectorizer::new(WholeFieldTokenizer);
    let subject = subject_vectorizer.fit_transform(catalog.iter().map(|r| r.subject.as_str()));

    let grades = catalog
        .iter()
        .map(|r| DenseVector::new(r.grades.as_slice().to_vec()))
        .collect();
    let rating = catalog
        .iter()
        .map(|r| DenseVector::new(r.rating_vector().to_vec()))
        .collect();

    let features = FeatureSet {
        title,
        instructor,
        subject,
        grades,
        rating,
        title_vocabulary: title_vectorizer.vocabulary_size(),
        instructor_vocabulary: instructor_vectorizer.vocabulary_size(),
        subject_vocabulary: subject_vectorizer.vocabulary_size(),
    };

    debug!(
        rows = features.len(),
        title_terms = features.title_vocabulary,
        instructors = features.instructor_vocabulary,
        subjects = features.subject_vocabulary,
        "features built"
    );

    features
}
