//! Grade-bucket counts and the normalized distribution derived from them.

use serde::{Deserialize, Serialize};

/// Number of grade buckets in the grade table.
pub const GRADE_BUCKET_COUNT: usize = 14;

/// Grade bucket column names, in vector order.
pub const GRADE_BUCKETS: [&str; GRADE_BUCKET_COUNT] = [
    "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "F", "W",
];

/// Raw student counts per grade bucket, summed across terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GradeCounts(pub [u64; GRADE_BUCKET_COUNT]);

impl GradeCounts {
    /// Add another record's counts bucket by bucket.
    pub fn accumulate(&mut self, other: &GradeCounts) {
        for (acc, n) in self.0.iter_mut().zip(other.0.iter()) {
            *acc = acc.saturating_add(*n);
        }
    }

    /// Total students across all buckets.
    pub fn total(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, n| acc.saturating_add(*n))
    }
}

/// Fraction of students per grade bucket.
///
/// Sums to 1.0 when the total count is non-zero and is all zeros otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GradeDistribution([f64; GRADE_BUCKET_COUNT]);

impl GradeDistribution {
    /// Convert counts to fractions. A zero total yields the zero distribution.
    pub fn from_counts(counts: &GradeCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self::default();
        }
        let total = total as f64;
        let mut fractions = [0.0; GRADE_BUCKET_COUNT];
        for (f, n) in fractions.iter_mut().zip(counts.0.iter()) {
            *f = *n as f64 / total;
        }
        Self(fractions)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Fraction for a named bucket, e.g. `"B+"`.
    pub fn bucket(&self, name: &str) -> Option<f64> {
        GRADE_BUCKETS
            .iter()
            .position(|b| *b == name)
            .map(|idx| self.0[idx])
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|f| *f == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_total_gives_zero_distribution() {
        let dist = GradeDistribution::from_counts(&GradeCounts::default());
        assert!(dist.is_zero());
        assert_eq!(dist.sum(), 0.0);
        assert!(dist.as_slice().iter().all(|f| f.is_finite()));
    }

    #[test]
    fn fractions_sum_to_one() {
        let mut counts = [0u64; GRADE_BUCKET_COUNT];
        counts[0] = 3;
        counts[4] = 5;
        counts[13] = 2;
        let dist = GradeDistribution::from_counts(&GradeCounts(counts));
        assert!((dist.sum() - 1.0).abs() < 1e-12);
        assert_eq!(dist.bucket("A+"), Some(0.3));
        assert_eq!(dist.bucket("B"), Some(0.5));
        assert_eq!(dist.bucket("W"), Some(0.2));
        assert_eq!(dist.bucket("E"), None);
    }

    #[test]
    fn accumulate_sums_bucketwise() {
        let mut a = GradeCounts([1; GRADE_BUCKET_COUNT]);
        a.accumulate(&GradeCounts([2; GRADE_BUCKET_COUNT]));
        assert_eq!(a.0, [3; GRADE_BUCKET_COUNT]);
        assert_eq!(a.total(), 42);
    }

    proptest! {
        #[test]
        fn distribution_sums_to_one_or_zero(counts in prop::array::uniform14(0u64..10_000)) {
            let counts = GradeCounts(counts);
            let dist = GradeDistribution::from_counts(&counts);
            if counts.total() == 0 {
                prop_assert!(dist.is_zero());
            } else {
                prop_assert!((dist.sum() - 1.0).abs() < 1e-9);
                prop_assert!(dist.as_slice().iter().all(|f| (0.0..=1.0).contains(f)));
            }
        }
    }
}
