//! Catalog rows and the ordered, immutable catalog.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::grades::GradeDistribution;
use super::recommendation::Recommendation;

/// Course number as it appears in the grade table.
///
/// Integer numbers order numerically and sort before any non-integer
/// number, which orders lexically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseNumber {
    Numeric(u32),
    Text(String),
}

impl CourseNumber {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<u32>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Text(trimmed.to_string()),
        }
    }
}

impl Ord for CourseNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => a.cmp(b),
            (Self::Numeric(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Numeric(_)) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for CourseNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CourseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One aggregated (course, instructor, subject, number) offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    /// Normalized course title.
    pub title: String,
    /// Normalized instructor identity key.
    pub instructor: String,
    pub subject: String,
    pub number: CourseNumber,
    pub grades: GradeDistribution,
    /// Students summed across all terms.
    pub students: u64,
    /// Centered rating; 0 when the instructor has no rating.
    pub rating: f64,
    /// Centered difficulty; 0 when the instructor has no rating.
    pub difficulty: f64,
    /// Whether the instructor matched a row of the rating table.
    pub rated: bool,
}

impl CatalogRow {
    /// The (title, instructor, subject) summary returned to callers.
    pub fn summary(&self) -> Recommendation {
        Recommendation {
            title: self.title.clone(),
            instructor: self.instructor.clone(),
            subject: self.subject.clone(),
        }
    }

    /// Dense rating/difficulty feature vector.
    pub fn rating_vector(&self) -> [f64; 2] {
        [self.rating, self.difficulty]
    }
}

/// Ordered sequence of catalog rows. Row position is the similarity-matrix
/// index, so the catalog is never reordered once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
}

impl Catalog {
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogRow> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogRow;
    type IntoIter = std::slice::Iter<'a, CatalogRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
