//! Count vectorizer: vocabulary fitted on the catalog, one term-frequency
//! vector per document.

use rustc_hash::FxHashMap;

use super::tokenizer::Tokenizer;
use super::vector::SparseVector;

/// Bag-of-words vectorizer. Raw counts, no TF-IDF weighting.
pub struct CountVectorizer<T: Tokenizer> {
    tokenizer: T,
    vocabulary: FxHashMap<String, u32>,
}

impl<T: Tokenizer> CountVectorizer<T> {
    pub fn new(tokenizer: T) -> Self {
        Self {
            tokenizer,
            vocabulary: FxHashMap::default(),
        }
    }

    /// Learn the vocabulary from `documents` and return their count vectors.
    /// Term ids are assigned in first-seen order.
    pub fn fit_transform<'a, I>(&mut self, documents: I) -> Vec<SparseVector>
    where
        I: IntoIterator<Item = &'a str>,
    {
        documents
            .into_iter()
            .map(|doc| {
                let pairs = self
                    .tokenizer
                    .tokenize(doc)
                    .into_iter()
                    .map(|term| {
                        let next_id = self.vocabulary.len() as u32;
                        let id = *self.vocabulary.entry(term).or_insert(next_id);
                        (id, 1.0)
                    })
                    .collect();
                SparseVector::from_pairs(pairs)
            })
            .collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
