//! Text and JSON rendering for CLI output.

use std::fmt::Write as _;

use courserec_core::types::{Recommendation, ScoredRecommendation};
use courserec_engine::IndexStats;

use crate::Format;

pub fn render_recommendations(
    results: &[Recommendation],
    format: Format,
) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(results)?),
        Format::Text => {
            if results.is_empty() {
                return Ok("no other offerings in the catalog".to_string());
            }
            let mut out = String::new();
            for (rank, r) in results.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{:>2}. {}  [{}]  {}",
                    rank + 1,
                    r.title,
                    r.subject,
                    r.instructor
                );
            }
            Ok(out.trim_end().to_string())
        }
    }
}

pub fn render_scored(results: &[ScoredRecommendation], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(results)?),
        Format::Text => {
            if results.is_empty() {
                return Ok("no other offerings in the catalog".to_string());
            }
            let mut out = String::new();
            for (rank, s) in results.iter().enumerate() {
                let r = &s.recommendation;
                let _ = writeln!(
                    out,
                    "{:>2}. {:.4}  #{:<6} {}  [{}]  {}",
                    rank + 1,
                    s.score,
                    s.index,
                    r.title,
                    r.subject,
                    r.instructor
                );
            }
            Ok(out.trim_end().to_string())
        }
    }
}

pub fn render_stats(stats: &IndexStats, format: Format) -> anyhow::Result<String> {
    if format == Format::Json {
        return Ok(serde_json::to_string_pretty(stats)?);
    }

    let mut out = String::new();
    let _ = writeln!(out, "catalog rows:           {}", stats.rows);
    let _ = writeln!(out, "title vocabulary:       {}", stats.title_vocabulary);
    let _ = writeln!(out, "instructors:            {}", stats.instructor_vocabulary);
    let _ = writeln!(out, "subjects:               {}", stats.subject_vocabulary);
    let _ = writeln!(out, "duplicate query keys:   {}", stats.duplicate_keys);
    let _ = writeln!(out, "zero-student rows:      {}", stats.zero_student_rows);
    let _ = writeln!(out, "unrated rows:           {}", stats.unrated_rows);
    let _ = writeln!(
        out,
        "matrix size:            {:.1} MiB",
        stats.matrix_bytes as f64 / (1024.0 * 1024.0)
    );
    let _ = writeln!(out, "build time:             {} ms", stats.build_ms);
    if let Some(load) = &stats.load {
        let _ = writeln!(out, "grade records:          {}", load.grade_records);
        let _ = writeln!(out, "skipped grade records:  {}", load.skipped_grade_records);
        let _ = writeln!(out, "rated instructors:      {}", load.rating_records);
        let _ = writeln!(out, "duplicate ratings:      {}", load.duplicate_rating_records);
    }
    Ok(out.trim_end().to_string())
}
