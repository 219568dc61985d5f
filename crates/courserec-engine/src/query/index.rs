//! (title, instructor) → first catalog row.

use courserec_core::types::Catalog;
use rustc_hash::FxHashMap;
use tracing::warn;

/// Lookup from normalized (title, instructor) to the first row carrying it.
#[derive(Debug, Clone, Default)]
pub struct QueryIndex {
    by_key: FxHashMap<(String, String), usize>,
    duplicate_keys: usize,
}

impl QueryIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let mut by_key: FxHashMap<(String, String), usize> = FxHashMap::default();
        by_key.reserve(catalog.len());
        let mut duplicate_keys = 0;

        for (index, row) in catalog.iter().enumerate() {
            let key = (row.title.clone(), row.instructor.clone());
            if by_key.contains_key(&key) {
                duplicate_keys += 1;
                continue;
            }
            by_key.insert(key, index);
        }

        if duplicate_keys > 0 {
            warn!(
                duplicate_keys,
                "(title, instructor) keys shared by several rows; queries resolve to the first"
            );
        }

        Self {
            by_key,
            duplicate_keys,
        }
    }

    /// Exact lookup on already-normalized strings.
    pub fn lookup(&self, title: &str, instructor: &str) -> Option<usize> {
        self.by_key
            .get(&(title.to_string(), instructor.to_string()))
            .copied()
    }

    /// Rows whose key was already taken by an earlier row.
    pub fn duplicate_keys(&self) -> usize {
        self.duplicate_keys
    }

    /// Distinct keys.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
