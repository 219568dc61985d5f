//! Feature vectors with cached L2 norms.

/// A vector usable by the cosine kernel.
pub trait FeatureVector: Send + Sync {
    fn dot(&self, other: &Self) -> f64;

    /// Cached Euclidean norm.
    fn norm(&self) -> f64;

    fn is_zero(&self) -> bool {
        self.norm() == 0.0
    }
}

/// Term-frequency vector: (term id, count) pairs sorted by term id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(u32, f64)>,
    norm: f64,
}

impl SparseVector {
    /// Build from unsorted (term, weight) pairs; repeated terms are summed.
    pub fn from_pairs(mut pairs: Vec<(u32, f64)>) -> Self {
        pairs.sort_unstable_by_key(|(term, _)| *term);
        let mut entries: Vec<(u32, f64)> = Vec::with_capacity(pairs.len());
        for (term, weight) in pairs {
            match entries.last_mut() {
                Some((last, acc)) if *last == term => *acc += weight,
                _ => entries.push((term, weight)),
            }
        }
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        Self { entries, norm }
    }

    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    /// Number of distinct terms.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl FeatureVector for SparseVector {
    /// Merge-join over the two sorted term lists.
    fn dot(&self, other: &Self) -> f64 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn norm(&self) -> f64 {
        self.norm
    }
}

/// Dense numeric vector (grade fractions, centered ratings).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenseVector {
    values: Vec<f64>,
    norm: f64,
}

impl DenseVector {
    pub fn new(values: Vec<f64>) -> Self {
        let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
        Self { values, norm }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl FeatureVector for DenseVector {
    fn dot(&self, other: &Self) -> f64 {
        debug_assert_eq!(self.values.len(), other.values.len());
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a * b)
            .sum()
    }

    fn norm(&self) -> f64 {
        self.norm
    }
}
