use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// StateRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// One observation for one region on one date.
///
/// Counts are cumulative as of `date` and never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRecord {
    pub date: NaiveDate,
    /// Region name with the casing it had in the source row.
    pub region: String,
    pub total_cases: i64,
    pub deaths: i64,
}

// ---------------------------------------------------------------------------
// Series output
// ---------------------------------------------------------------------------

/// Which logical dimension a series carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    NewCases,
    Total,
    Deaths,
}

impl Metric {
    /// Suffix appended to the region name to form the series name.
    pub fn suffix(self) -> &'static str {
        match self {
            Metric::NewCases => "New Cases",
            Metric::Total => "Total",
            Metric::Deaths => "Deaths",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A `(date label, value)` pair. The label is the ISO-8601 date.
///
/// Values are signed: a correction in the source data can make a
/// day-over-day delta negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: i64,
}

impl SeriesPoint {
    pub fn new(date: NaiveDate, value: i64) -> Self {
        Self {
            label: date.to_string(),
            value,
        }
    }
}

/// A named, chronologically ordered series ready for the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSeries {
    /// `"<region> New Cases"`, `"<region> Total"` or `"<region> Deaths"`.
    pub name: String,
    pub region: String,
    pub metric: Metric,
    pub points: Vec<SeriesPoint>,
}

impl NamedSeries {
    pub fn new(region: &str, metric: Metric, points: Vec<SeriesPoint>) -> Self {
        Self {
            name: format!("{region} {metric}"),
            region: region.to_string(),
            metric,
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_names_follow_region_and_metric() {
        let s = NamedSeries::new("New York", Metric::NewCases, Vec::new());
        assert_eq!(s.name, "New York New Cases");
        let s = NamedSeries::new("New York", Metric::Total, Vec::new());
        assert_eq!(s.name, "New York Total");
    }

    #[test]
    fn metric_displays_as_suffix() {
        assert_eq!(Metric::Deaths.to_string(), "Deaths");
    }

    #[test]
    fn point_label_is_iso_date() {
        let d = NaiveDate::from_ymd_opt(2020, 3, 7).unwrap();
        assert_eq!(SeriesPoint::new(d, 3).label, "2020-03-07");
    }
}
