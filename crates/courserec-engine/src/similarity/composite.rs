//! Weighted composite similarity over the five feature spaces.

use std::sync::atomic::{AtomicUsize, Ordering};

use courserec_core::errors::BuildError;
use courserec_core::types::SimilarityWeights;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::features::{FeatureKind, FeatureSet, FeatureVector};

use super::cosine::{cosine, self_cosine};
use super::guard::BuildGuard;
use super::matrix::SimilarityMatrix;

/// Scores one pair of catalog rows.
#[derive(Debug, Clone, Copy)]
pub struct CompositeScorer<'a> {
    features: &'a FeatureSet,
    weights: SimilarityWeights,
}

impl<'a> CompositeScorer<'a> {
    pub fn new(features: &'a FeatureSet, weights: SimilarityWeights) -> Self {
        Self { features, weights }
    }

    /// Cosine of rows `i` and `j` in a single feature space.
    pub fn feature_similarity(&self, kind: FeatureKind, i: usize, j: usize) -> f64 {
        let f = self.features;
        match kind {
            FeatureKind::Title => pair(&f.title, i, j),
            FeatureKind::Instructor => pair(&f.instructor, i, j),
            FeatureKind::Subject => pair(&f.subject, i, j),
            FeatureKind::Grades => pair(&f.grades, i, j),
            FeatureKind::Rating => pair(&f.rating, i, j),
        }
    }

    pub fn weight(&self, kind: FeatureKind) -> f64 {
        let w = &self.weights;
        match kind {
            FeatureKind::Title => w.title,
            FeatureKind::Instructor => w.instructor,
            FeatureKind::Subject => w.subject,
            FeatureKind::Grades => w.grades,
            FeatureKind::Rating => w.rating,
        }
    }

    /// Σ weight(f) · cos_f(i, j). Terms are summed in `FeatureKind::ALL`
    /// order so S[i][j] and S[j][i] are bit-identical.
    pub fn score(&self, i: usize, j: usize) -> f64 {
        FeatureKind::ALL.iter().fold(0.0, |total, &kind| {
            total + self.weight(kind) * self.feature_similarity(kind, i, j)
        })
    }

    fn fill_row(&self, i: usize, row: &mut [f64]) {
        for (j, slot) in row.iter_mut().enumerate() {
            *slot = self.score(i, j);
        }
    }
}

fn pair<V: FeatureVector>(vectors: &[V], i: usize, j: usize) -> f64 {
    if i == j {
        self_cosine(&vectors[i])
    } else {
        cosine(&vectors[i], &vectors[j])
    }
}

/// Build the full composite matrix. The guard is checked before each row.
pub fn build_composite(
    features: &FeatureSet,
    weights: SimilarityWeights,
    guard: &BuildGuard,
    parallel: bool,
) -> Result<SimilarityMatrix, BuildError> {
    let n = features.len();
    let scorer = CompositeScorer::new(features, weights);
    let mut data = vec![0.0f64; n * n];

    if n > 0 {
        if parallel {
            let done = AtomicUsize::new(0);
            data.par_chunks_mut(n)
                .enumerate()
                .try_for_each(|(i, row)| {
                    guard.check(done.load(Ordering::Relaxed), n)?;
                    scorer.fill_row(i, row);
                    done.fetch_add(1, Ordering::Relaxed);
                    Ok::<(), BuildError>(())
                })?;
        } else {
            for (i, row) in data.chunks_mut(n).enumerate() {
                guard.check(i, n)?;
                scorer.fill_row(i, row);
            }
        }
    }

    let matrix = SimilarityMatrix::from_raw(n, data);
    debug!(bytes = matrix.size_bytes(), "similarity matrix allocated");
    info!(
        rows = n,
        parallel,
        elapsed_ms = guard.elapsed().as_millis() as u64,
        "similarity matrix built"
    );
    Ok(matrix)
}
