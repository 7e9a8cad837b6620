use super::delta::DerivedPoints;
use super::model::{Metric, NamedSeries, SeriesPoint};

/// Sorts derived points and names the series handed to the chart.
///
/// The deaths series is always computed but only emitted when
/// `include_deaths` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesBuilder {
    pub include_deaths: bool,
}

impl SeriesBuilder {
    pub fn new(include_deaths: bool) -> Self {
        Self { include_deaths }
    }

    /// Emit `"<region> New Cases"`, `"<region> Total"` and optionally
    /// `"<region> Deaths"`, each ordered by date label.
    pub fn build(&self, region: &str, derived: DerivedPoints) -> Vec<NamedSeries> {
        let DerivedPoints {
            mut new_cases,
            mut totals,
            mut deaths,
        } = derived;

        sort_by_label(&mut new_cases);
        sort_by_label(&mut totals);
        sort_by_label(&mut deaths);

        let mut out = vec![
            NamedSeries::new(region, Metric::NewCases, new_cases),
            NamedSeries::new(region, Metric::Total, totals),
        ];
        if self.include_deaths {
            out.push(NamedSeries::new(region, Metric::Deaths, deaths));
        }
        out
    }
}

/// Stable sort on the ISO-8601 label, which orders the same as the date.
fn sort_by_label(points: &mut [SeriesPoint]) {
    points.sort_by(|a, b| a.label.cmp(&b.label));
}
