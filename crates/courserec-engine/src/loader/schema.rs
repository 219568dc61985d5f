//! Header validation and typed cell access for the input tables.

use courserec_core::errors::LoadError;

/// Column positions resolved by name from a header row. Extra columns are
/// ignored; a missing one is fatal.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    source: String,
    positions: Vec<usize>,
}

impl ColumnIndex {
    /// Resolve `required` against `headers`, in the order given.
    pub fn resolve(
        headers: &csv::StringRecord,
        required: &[&str],
        source: &str,
    ) -> Result<Self, LoadError> {
        let positions = required
            .iter()
            .map(|name| {
                headers
                    .iter()
                    .position(|h| h == *name)
                    .ok_or_else(|| LoadError::MissingColumn {
                        path: source.to_string(),
                        column: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            source: source.to_string(),
            positions,
        })
    }

    /// Raw cell for the `slot`-th required column. Short rows read as "".
    pub fn cell<'r>(&self, record: &'r csv::StringRecord, slot: usize) -> &'r str {
        record.get(self.positions[slot]).unwrap_or("")
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Parse a non-negative count. Blank cells are 0; integral floats such as
/// `"12.0"` are accepted.
pub fn parse_count(raw: &str, source: &str, row: usize, column: &str) -> Result<u64, LoadError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if let Ok(n) = trimmed.parse::<u64>() {
        return Ok(n);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
            Ok(f as u64)
        }
        _ => Err(invalid(raw, source, row, column)),
    }
}

/// Parse an optional float. Blank cells are `None`.
pub fn parse_optional_f64(
    raw: &str,
    source: &str,
    row: usize,
    column: &str,
) -> Result<Option<f64>, LoadError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Some(f)),
        Ok(_) => Ok(None),
        Err(_) => Err(invalid(raw, source, row, column)),
    }
}

/// Map a csv error to a load error for `source`.
pub fn malformed(source: &str, err: csv::Error) -> LoadError {
    match err.kind() {
        csv::ErrorKind::Io(io) => LoadError::Io {
            path: source.to_string(),
            message: io.to_string(),
        },
        _ => LoadError::Malformed {
            path: source.to_string(),
            message: err.to_string(),
        },
    }
}

fn invalid(raw: &str, source: &str, row: usize, column: &str) -> LoadError {
    LoadError::InvalidNumber {
        path: source.to_string(),
        row,
        column: column.to_string(),
        value: raw.to_string(),
    }
}
