//! Plain-text loaders for the observed series and the input matrix.
//!
//! Both files are headerless CSV: `#` starts a comment line, blank lines are
//! skipped and fields are trimmed.

use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use ndarray::Array2;

/// Tokens read as a missing observation.
const MISSING: &[&str] = &["nan", "na", "."];

fn parse_value(token: &str) -> Result<f64> {
    if MISSING.contains(&token.to_lowercase().as_str()) {
        return Ok(f64::NAN);
    }
    token
        .parse()
        .with_context(|| format!("not a number: {token:?}"))
}

fn reader(text: &str) -> Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(text.as_bytes())
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

/// Parses a series: one value per line.
pub fn parse_series(text: &str) -> Result<Vec<f64>> {
    let mut y = Vec::new();
    for record in reader(text).records() {
        let record = record.context("malformed series")?;
        let line = line_of(&record);
        if record.len() != 1 {
            bail!("line {line}: expected one value, got {}", record.len());
        }
        y.push(parse_value(&record[0]).with_context(|| format!("line {line}"))?);
    }
    Ok(y)
}

/// Parses an input matrix: one regressor per line, comma-separated values.
///
/// Rows of unequal length are rejected by the CSV reader.
pub fn parse_inputs(text: &str) -> Result<Array2<f64>> {
    let mut values = Vec::new();
    let mut n_rows = 0;
    let mut n_cols = 0;

    for record in reader(text).records() {
        let record = record.context("malformed input matrix")?;
        let row = record
            .iter()
            .map(parse_value)
            .collect::<Result<Vec<f64>>>()
            .with_context(|| format!("line {}", line_of(&record)))?;
        n_cols = row.len();
        values.extend(row);
        n_rows += 1;
    }

    Array2::from_shape_vec((n_rows, n_cols), values).context("input matrix shape")
}

/// Reads a series file.
pub fn read_series(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read series file: {}", path.display()))?;
    parse_series(&text).with_context(|| format!("failed to parse series: {}", path.display()))
}

/// Reads an input matrix file.
pub fn read_inputs(path: &Path) -> Result<Array2<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inputs file: {}", path.display()))?;
    parse_inputs(&text).with_context(|| format!("failed to parse inputs: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn series_with_missing_and_comments() {
        let y = parse_series("# sales\nNaN\n1.5\n\n  2.5  \nNA\n.\n").unwrap();
        assert_eq!(y.len(), 5);
        assert!(y[0].is_nan());
        assert_eq!(&y[1..3], &[1.5, 2.5]);
        assert!(y[3].is_nan() && y[4].is_nan());
    }

    #[test]
    fn series_bad_value_reports_line() {
        let err = parse_series("1.0\nabc\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn series_rejects_several_values_per_line() {
        let err = parse_series("1.0,2.0\n").unwrap_err();
        assert!(err.to_string().contains("expected one value"));
    }

    #[test]
    fn inputs_comma_separated() {
        let u = parse_inputs("# promo, price\n1, 2, 3\n4,5,6\n").unwrap();
        assert_eq!(u.dim(), (2, 3));
        assert_eq!(u[[1, 2]], 6.0);
    }

    #[test]
    fn inputs_ragged_rows_fail() {
        let err = parse_inputs("1,2,3\n4,5\n").unwrap_err();
        let kind = err.downcast_ref::<csv::Error>().map(|e| e.kind());
        assert!(
            matches!(kind, Some(csv::ErrorKind::UnequalLengths { .. })),
            "expected UnequalLengths, got {err:#}"
        );
        assert!(format!("{err:#}").contains("malformed input matrix"));
    }

    #[test]
    fn inputs_empty_file() {
        let u = parse_inputs("# nothing\n").unwrap();
        assert!(u.is_empty());
    }

    #[test]
    fn read_series_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1\n2\n3").unwrap();
        assert_eq!(read_series(file.path()).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_series(&dir.path().join("absent.txt")).unwrap_err();
        assert!(err.to_string().contains("failed to read series file"));
    }
}
