//! Tokenizers for the bag-of-words feature spaces.

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Splits a text field into terms.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Every run of word characters is a term, lower-cased. Single-character
/// terms are kept, which matters for Roman numerals such as "I" or "V".
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        WORD.find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}

/// The whole (trimmed, lower-cased) field is one term, so two rows share
/// the term only on an exact match. An empty field has no terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeFieldTokenizer;

impl Tokenizer for WholeFieldTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_lowercase()]
        }
    }
}
