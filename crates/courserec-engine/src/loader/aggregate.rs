//! Group grade records into catalog rows.

use std::collections::BTreeMap;

use courserec_core::types::{Catalog, CatalogRow, CourseNumber, GradeCounts, GradeDistribution};
use serde::Serialize;
use tracing::debug;

use super::grades::GradeRecord;
use super::ratings::RatingTable;
use crate::normalize::{normalize_instructor, normalize_title};

/// Grouping key, compared field by field. The ordered map makes catalog
/// order a pure function of the input records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct GroupKey {
    title: String,
    instructor: String,
    subject: String,
    number: CourseNumber,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    /// Distinct (title, instructor, subject, number) groups.
    pub groups: usize,
    /// Groups whose summed student count is zero.
    pub zero_student_rows: usize,
    /// Groups whose instructor has no rating entry.
    pub unrated_rows: usize,
}

/// Sum counts per group, convert to fractions, left-join ratings on the raw
/// instructor, then normalize title and instructor.
pub fn aggregate(records: &[GradeRecord], ratings: &RatingTable) -> (Catalog, AggregateStats) {
    let mut groups: BTreeMap<GroupKey, GradeCounts> = BTreeMap::new();
    for record in records {
        let key = GroupKey {
            title: record.title.clone(),
            instructor: record.instructor.clone(),
            subject: record.subject.clone(),
            number: record.number.clone(),
        };
        groups.entry(key).or_default().accumulate(&record.counts);
    }

    let mut stats = AggregateStats {
        groups: groups.len(),
        ..Default::default()
    };

    let rows: Vec<CatalogRow> = groups
        .into_iter()
        .map(|(key, counts)| {
            let students = counts.total();
            if students == 0 {
                stats.zero_student_rows += 1;
            }
            let rating = ratings.get(&key.instructor);
            let rated = rating.is_some();
            if !rated {
                stats.unrated_rows += 1;
            }
            let (rating, difficulty) = rating.unwrap_or((0.0, 0.0));
            CatalogRow {
                title: normalize_title(&key.title),
                instructor: normalize_instructor(&key.instructor),
                subject: key.subject,
                number: key.number,
                grades: GradeDistribution::from_counts(&counts),
                students,
                rating,
                difficulty,
                rated,
            }
        })
        .collect();

    debug!(
        groups = stats.groups,
        zero_student_rows = stats.zero_student_rows,
        unrated_rows = stats.unrated_rows,
        "grade records aggregated"
    );

    (Catalog::new(rows), stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use courserec_core::types::GRADE_BUCKET_COUNT;

    fn record(title: &str, instructor: &str, number: &str, a: u64, b: u64) -> GradeRecord {
        let mut counts = [0u64; GRADE_BUCKET_COUNT];
        counts[1] = a;
        counts[4] = b;
        GradeRecord {
            title: title.to_string(),
            instructor: instructor.to_string(),
            subject: "CS".to_string(),
            number: CourseNumber::parse(number),
            counts: GradeCounts(counts),
        }
    }

    #[test]
    fn sums_terms_of_the_same_offering() {
        let records = vec![
            record("Database Systems", "Chang Kevin C", "411", 10, 0),
            record("Database Systems", "Chang Kevin C", "411", 10, 20),
        ];
        let (catalog, stats) = aggregate(&records, &RatingTable::default());
        assert_eq!(catalog.len(), 1);
        assert_eq!(stats.groups, 1);
        let row = catalog.get(0).unwrap();
        assert_eq!(row.students, 40);
        assert_eq!(row.grades.bucket("A"), Some(0.5));
        assert_eq!(row.grades.bucket("B"), Some(0.5));
        assert_eq!(row.instructor, "ChangKevinC");
    }

    #[test]
    fn orders_by_key_with_numeric_course_numbers() {
        let records = vec![
            record("Zoology", "A", "100", 1, 0),
            record("Algebra", "B", "411", 1, 0),
            record("Algebra", "B", "98", 1, 0),
        ];
        let (catalog, _) = aggregate(&records, &RatingTable::default());
        let order: Vec<(String, String)> = catalog
            .iter()
            .map(|r| (r.title.clone(), r.number.to_string()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Algebra".to_string(), "98".to_string()),
                ("Algebra".to_string(), "411".to_string()),
                ("Zoology".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn zero_students_and_unrated_default_to_zero() {
        let mut ratings = RatingTable::default();
        ratings.insert("Rated Person".to_string(), 0.4, -0.2);
        let records = vec![
            record("Empty Seminar", "Nobody Here", "500", 0, 0),
            record("Full Course", "Rated Person", "101", 3, 1),
        ];
        let (catalog, stats) = aggregate(&records, &ratings);
        assert_eq!(stats.zero_student_rows, 1);
        assert_eq!(stats.unrated_rows, 1);

        let empty = catalog.get(0).unwrap();
        assert!(empty.grades.is_zero());
        assert_eq!(empty.rating_vector(), [0.0, 0.0]);
        assert!(!empty.rated);

        let full = catalog.get(1).unwrap();
        assert_eq!(full.rating_vector(), [0.4, -0.2]);
        assert!(full.rated);
    }

    #[test]
    fn distinct_raw_keys_can_collide_after_normalization() {
        let records = vec![
            record("Calculus 2", "Smith John", "231", 1, 0),
            record("Calculus II", "Smith John", "231", 0, 1),
        ];
        let (catalog, _) = aggregate(&records, &RatingTable::default());
        assert_eq!(catalog.len(), 2);
        assert!(catalog.iter().all(|r| r.title == "Calculus II"));
    }
}
