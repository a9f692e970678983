use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{CellValue, Dataset, Record};

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Loading is fatal-on-failure: no retries, the caller surfaces the error once.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV near row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("input has no header row")]
    MissingHeader,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Field separator of the bank-marketing export.
pub const DELIMITER: u8 = b';';

/// Load the bank-marketing CSV: semicolon-delimited, latin-1 encoded,
/// header row required. Column headers are trimmed of surrounding whitespace.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(&bytes)
}

/// Parse raw file bytes into a [`Dataset`].
///
/// latin-1 maps every byte to a code point, so decoding itself cannot fail;
/// structural problems are reported per-row by the `csv` crate.
pub fn parse_csv(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let text = encoding_rs::mem::decode_latin1(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| LoadError::Csv { row: 0, source })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::MissingHeader);
    }

    let mut rows: Vec<Record> = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|source| LoadError::Csv {
            row: row_no + 1,
            source,
        })?;

        let mut row = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            let Some(col_name) = headers.get(col_idx) else {
                continue;
            };
            row.insert(col_name.clone(), guess_cell_type(value));
        }
        rows.push(row);
    }

    Ok(Dataset::from_rows(headers, rows))
}

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    CellValue::Text(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_semicolon_delimited_with_trimmed_headers() {
        let bytes = b" age ;job;y\n30;admin.;yes\n45;technician;no\n";
        let ds = parse_csv(bytes).unwrap();

        assert_eq!(ds.column_names, vec!["age", "job", "y"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[0].get("age"), Some(&CellValue::Integer(30)));
        assert_eq!(
            ds.rows[1].get("job"),
            Some(&CellValue::Text("technician".into()))
        );
    }

    #[test]
    fn decodes_latin1_bytes() {
        // "é" in latin-1 is the single byte 0xE9.
        let bytes = b"age;job\n30;g\xE9rant\n";
        let ds = parse_csv(bytes).unwrap();
        assert_eq!(
            ds.rows[0].get("job"),
            Some(&CellValue::Text("gérant".into()))
        );
    }

    #[test]
    fn guesses_cell_types() {
        assert_eq!(guess_cell_type("42"), CellValue::Integer(42));
        assert_eq!(guess_cell_type("1.5"), CellValue::Float(1.5));
        assert_eq!(guess_cell_type("yes"), CellValue::Text("yes".into()));
        assert_eq!(guess_cell_type("  "), CellValue::Null);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_csv(Path::new("/nonexistent/bank.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn ragged_row_is_malformed() {
        let bytes = b"age;job\n30;admin.;extra\n";
        let err = parse_csv(bytes).unwrap_err();
        assert!(matches!(err, LoadError::Csv { row: 1, .. }));
    }

    #[test]
    fn header_only_input_yields_empty_dataset() {
        let ds = parse_csv(b"age;job;y\n").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.column_names.len(), 3);
    }
}
