//! Grade-distribution table reader.

use std::io::Read;

use courserec_core::constants::{
    COL_COURSE_TITLE, COL_NUMBER, COL_PRIMARY_INSTRUCTOR, COL_SUBJECT,
};
use courserec_core::errors::LoadError;
use courserec_core::types::{CourseNumber, GradeCounts, GRADE_BUCKETS, GRADE_BUCKET_COUNT};
use tracing::{debug, warn};

use super::schema::{self, ColumnIndex};

const KEY_COLUMNS: [&str; 4] = [COL_COURSE_TITLE, COL_PRIMARY_INSTRUCTOR, COL_SUBJECT, COL_NUMBER];

/// One term record of the grade table. `Year`, `Term` and `YearTerm` are
/// never read: they would split otherwise identical offerings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeRecord {
    pub title: String,
    /// Instructor with commas removed ("Last, First" → "Last First").
    pub instructor: String,
    pub subject: String,
    pub number: CourseNumber,
    pub counts: GradeCounts,
}

#[derive(Debug, Clone, Default)]
pub struct GradeTable {
    pub records: Vec<GradeRecord>,
    /// Records dropped because a grouping key was blank.
    pub skipped: usize,
}

/// Read the grade table. Requires the four key columns and all 14 bucket
/// columns; other columns are ignored.
pub fn read_grades<R: Read>(reader: R, source: &str) -> Result<GradeTable, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| schema::malformed(source, e))?
        .clone();

    let mut required: Vec<&str> = KEY_COLUMNS.to_vec();
    required.extend_from_slice(&GRADE_BUCKETS);
    let columns = ColumnIndex::resolve(&headers, &required, source)?;

    let mut table = GradeTable::default();
    for (idx, result) in csv_reader.records().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|e| schema::malformed(source, e))?;

        let title = columns.cell(&record, 0);
        let instructor = columns.cell(&record, 1).replace(',', "");
        let subject = columns.cell(&record, 2);
        let number = columns.cell(&record, 3);

        if [title, instructor.as_str(), subject, number]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            debug!(row, source = columns.source(), "skipping grade record with blank key");
            table.skipped += 1;
            continue;
        }

        let mut counts = [0u64; GRADE_BUCKET_COUNT];
        for (slot, bucket) in GRADE_BUCKETS.iter().enumerate() {
            let raw = columns.cell(&record, KEY_COLUMNS.len() + slot);
            counts[slot] = schema::parse_count(raw, source, row, bucket)?;
        }

        table.records.push(GradeRecord {
            title: title.to_string(),
            instructor,
            subject: subject.to_string(),
            number: CourseNumber::parse(number),
            counts: GradeCounts(counts),
        });
    }

    if table.skipped > 0 {
        warn!(
            skipped = table.skipped,
            source, "grade records with a blank key were skipped"
        );
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Year,Term,YearTerm,Subject,Number,CourseTitle,A+,A,A-,B+,B,B-,C+,C,C-,D+,D,D-,F,W,PrimaryInstructor";

    #[test]
    fn reads_records_and_strips_instructor_commas() {
        let csv = format!(
            "{HEADER}\n2019,Fall,2019-fa,CS,411,Database Systems,5,10,3,2,1,0,0,0,0,0,0,0,0,1,\"Chang, Kevin C\"\n"
        );
        let table = read_grades(csv.as_bytes(), "grades.csv").unwrap();
        assert_eq!(table.records.len(), 1);
        let rec = &table.records[0];
        assert_eq!(rec.title, "Database Systems");
        assert_eq!(rec.instructor, "Chang Kevin C");
        assert_eq!(rec.subject, "CS");
        assert_eq!(rec.number, CourseNumber::Numeric(411));
        assert_eq!(rec.counts.total(), 22);
        assert_eq!(rec.counts.0[13], 1);
    }

    #[test]
    fn missing_bucket_column_is_fatal() {
        let csv = "CourseTitle,PrimaryInstructor,Subject,Number,A+,A\nX,Y,Z,1,1,2\n";
        let err = read_grades(csv.as_bytes(), "grades.csv").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { ref column, .. } if column == "A-"));
    }

    #[test]
    fn blank_key_rows_are_skipped() {
        let csv = format!(
            "{HEADER}\n2019,Fall,2019-fa,CS,411,Database Systems,1,0,0,0,0,0,0,0,0,0,0,0,0,0,\n"
        );
        let table = read_grades(csv.as_bytes(), "grades.csv").unwrap();
        assert!(table.records.is_empty());
        assert_eq!(table.skipped, 1);
    }

    #[test]
    fn non_numeric_bucket_is_fatal_with_location() {
        let csv = format!(
            "{HEADER}\n2019,Fall,2019-fa,CS,411,Database Systems,1,x,0,0,0,0,0,0,0,0,0,0,0,0,Chang Kevin\n"
        );
        let err = read_grades(csv.as_bytes(), "grades.csv").unwrap_err();
        match err {
            LoadError::InvalidNumber { row, column, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, "A");
                assert_eq!(value, "x");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn ragged_row_is_malformed() {
        let csv = format!("{HEADER}\n2019,Fall\n");
        let err = read_grades(csv.as_bytes(), "grades.csv").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }
}
