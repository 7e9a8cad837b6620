use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::StringRecord;
use serde::Deserialize;

use super::model::StateRecord;
use crate::error::{PipelineError, Result};

/// Columns every input file must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["date", "state", "cases", "deaths"];

// ---------------------------------------------------------------------------
// Raw rows
// ---------------------------------------------------------------------------

/// One CSV row, fields still as text.
///
/// Selection happens on this form so that rows for regions nobody asked
/// for are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRow {
    pub date: String,
    pub state: String,
    pub cases: String,
    pub deaths: String,
}

/// A raw row together with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub line: u64,
    pub row: RawRow,
}

// ---------------------------------------------------------------------------
// Record parser
// ---------------------------------------------------------------------------

/// Decode a raw row into a typed [`StateRecord`].
pub fn parse_record(source: &SourceRow) -> Result<StateRecord> {
    let SourceRow { line, row } = source;

    let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|e| {
        PipelineError::parse(*line, format!("'{}' is not an ISO-8601 date: {e}", row.date))
    })?;
    let total_cases = parse_count(&row.cases, *line, "cases")?;
    let deaths = parse_count(&row.deaths, *line, "deaths")?;

    Ok(StateRecord {
        date,
        region: row.state.clone(),
        total_cases,
        deaths,
    })
}

fn parse_count(s: &str, line: u64, col: &str) -> Result<i64> {
    let invalid = |reason: String| {
        PipelineError::parse(line, format!("{col}: '{s}' is not a non-negative integer: {reason}"))
    };
    let count = s.parse::<i64>().map_err(|e| invalid(e.to_string()))?;
    if count < 0 {
        return Err(invalid("negative".to_string()));
    }
    Ok(count)
}

// ---------------------------------------------------------------------------
// Row reader
// ---------------------------------------------------------------------------

/// Sequential reader over a header-first CSV source.
///
/// Yields rows lazily; the underlying handle is released when the reader
/// is dropped.
pub struct RowReader<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    record: StringRecord,
    path: Option<PathBuf>,
}

impl RowReader<File> {
    /// Open a CSV file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::with_path(file, Some(path.to_path_buf()))
    }
}

impl<R: Read> RowReader<R> {
    /// Wrap any byte source, e.g. an in-memory buffer.
    pub fn new(source: R) -> Result<Self> {
        Self::with_path(source, None)
    }

    fn with_path(source: R, path: Option<PathBuf>) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(source);
        let headers = reader
            .headers()
            .map_err(|e| PipelineError::from_csv(path.as_deref(), e))?
            .clone();

        for col in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == col) {
                return Err(PipelineError::parse(1, format!("missing '{col}' column")));
            }
        }

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            path,
        })
    }

    fn read_row(&mut self) -> Result<Option<SourceRow>> {
        let more = self
            .reader
            .read_record(&mut self.record)
            .map_err(|e| PipelineError::from_csv(self.path.as_deref(), e))?;
        if !more {
            return Ok(None);
        }

        let line = self.record.position().map(|p| p.line()).unwrap_or(0);
        let row: RawRow = self
            .record
            .deserialize(Some(&self.headers))
            .map_err(|e| PipelineError::parse(line, e.to_string()))?;
        Ok(Some(SourceRow { line, row }))
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<SourceRow>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_row().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(date: &str, state: &str, cases: &str, deaths: &str) -> SourceRow {
        SourceRow {
            line: 2,
            row: RawRow {
                date: date.to_string(),
                state: state.to_string(),
                cases: cases.to_string(),
                deaths: deaths.to_string(),
            },
        }
    }

    #[test]
    fn parses_well_formed_row() {
        let rec = parse_record(&source("2020-03-20", "New York", "7102", "35")).unwrap();
        assert_eq!(rec.date, NaiveDate::from_ymd_opt(2020, 3, 20).unwrap());
        assert_eq!(rec.region, "New York");
        assert_eq!(rec.total_cases, 7102);
        assert_eq!(rec.deaths, 35);
    }

    #[test]
    fn rejects_bad_date() {
        let err = parse_record(&source("03/20/2020", "Ohio", "1", "0")).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().starts_with("row 2:"));
    }

    #[test]
    fn rejects_non_numeric_counts() {
        assert!(parse_record(&source("2020-03-20", "Ohio", "abc", "0")).is_err());
        assert!(parse_record(&source("2020-03-20", "Ohio", "1", "")).is_err());
        assert!(parse_record(&source("2020-03-20", "Ohio", "-4", "0")).is_err());
    }

    #[test]
    fn rejects_counts_beyond_i64() {
        let too_big = "9223372036854775808";
        let err = parse_record(&source("2020-03-20", "Ohio", too_big, "0")).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("cases"));
        let u64_max = "18446744073709551615";
        assert!(parse_record(&source("2020-03-20", "Ohio", "1", u64_max)).is_err());

        let i64_max = "9223372036854775807";
        let max = parse_record(&source("2020-03-20", "Ohio", i64_max, "0")).unwrap();
        assert_eq!(max.total_cases, i64::MAX);
    }

    #[test]
    fn reader_ignores_extra_columns_and_tracks_lines() {
        let csv = "date,state,fips,cases,deaths\n\
                   2020-03-07,Ohio,39,1,0\n\
                   2020-03-08,Ohio,39,3,0\n";
        let rows: Vec<SourceRow> = RowReader::new(csv.as_bytes())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].line, 3);
        assert_eq!(rows[1].row.cases, "3");
    }

    #[test]
    fn reader_requires_all_columns() {
        let csv = "date,state,cases\n2020-03-07,Ohio,1\n";
        let err = RowReader::new(csv.as_bytes()).err().unwrap();
        assert!(err.is_parse());
        assert!(err.to_string().contains("deaths"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RowReader::from_path(&dir.path().join("nope.csv")).err().unwrap();
        assert!(matches!(err, PipelineError::Io { .. }));
    }

    #[test]
    fn reads_rows_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("us-states.csv");
        std::fs::write(&path, "date,state,fips,cases,deaths\n2020-03-07,Ohio,39,1,0\n").unwrap();
        let rows: Vec<SourceRow> = RowReader::from_path(&path)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(rows[0].row.state, "Ohio");
    }
}
