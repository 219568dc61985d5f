//! Cosine similarity with an explicit zero-vector guard.

use crate::features::FeatureVector;

use super::matrix::SimilarityMatrix;

/// cos(a, b) = a·b / (‖a‖‖b‖), clamped to [-1, 1].
///
/// Returns 0.0 if either vector is zero. Never NaN.
pub fn cosine<V: FeatureVector>(a: &V, b: &V) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 || !denom.is_finite() {
        return 0.0;
    }
    let sim = a.dot(b) / denom;
    if sim.is_nan() {
        return 0.0;
    }
    sim.clamp(-1.0, 1.0)
}

/// Similarity of a vector with itself: exactly 1.0, or 0.0 for a zero vector.
pub fn self_cosine<V: FeatureVector>(v: &V) -> f64 {
    if v.is_zero() {
        0.0
    } else {
        1.0
    }
}

/// Full N×N cosine matrix for one feature space.
pub fn pairwise_cosine<V: FeatureVector>(vectors: &[V]) -> SimilarityMatrix {
    SimilarityMatrix::from_fn(vectors.len(), |i, j| {
        if i == j {
            self_cosine(&vectors[i])
        } else {
            cosine(&vectors[i], &vectors[j])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{DenseVector, SparseVector};

    #[test]
    fn identical_vectors_score_one() {
        let a = DenseVector::new(vec![0.2, 0.3, 0.5]);
        assert!((cosine(&a, &a) - 1.0).abs() < 1e-12);
        assert_eq!(self_cosine(&a), 1.0);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let a = SparseVector::from_pairs(vec![(0, 1.0)]);
        let b = SparseVector::from_pairs(vec![(1, 1.0)]);
        assert_eq!(cosine(&a, &b), 0.0);
    }

    #[test]
    fn zero_vector_scores_zero_against_everything() {
        let zero = DenseVector::new(vec![0.0, 0.0]);
        let other = DenseVector::new(vec![0.7, -0.1]);
        assert_eq!(cosine(&zero, &other), 0.0);
        assert_eq!(cosine(&other, &zero), 0.0);
        assert_eq!(cosine(&zero, &zero), 0.0);
        assert_eq!(self_cosine(&zero), 0.0);
    }

    #[test]
    fn opposite_centered_ratings_score_minus_one() {
        let a = DenseVector::new(vec![0.5, -0.5]);
        let b = DenseVector::new(vec![-1.0, 1.0]);
        assert!((cosine(&a, &b) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn pairwise_matrix_is_symmetric_with_unit_diagonal() {
        let vectors = vec![
            DenseVector::new(vec![1.0, 0.0, 2.0]),
            DenseVector::new(vec![0.0, 3.0, 1.0]),
            DenseVector::new(vec![0.0, 0.0, 0.0]),
        ];
        let m = pairwise_cosine(&vectors);
        assert_eq!(m.len(), 3);
        assert!(m.is_symmetric());
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 1), 1.0);
        assert_eq!(m.get(2, 2), 0.0);
        assert_eq!(m.row(2), &[0.0, 0.0, 0.0]);
    }
}
