//! The full transformation: raw rows → selected records → groups → series.
//!
//! A run is a pure function of the input rows, the selection and the config.
//! All state lives in a [`GroupingIndex`] created inside the call.

use std::io::Read;
use std::path::Path;

use crate::config::PipelineConfig;
use crate::data::delta::DeltaTransformer;
use crate::data::filter::RegionSelection;
use crate::data::group::GroupingIndex;
use crate::data::loader::{RowReader, SourceRow, parse_record};
use crate::data::model::NamedSeries;
use crate::data::series::SeriesBuilder;
use crate::error::Result;

/// Run over any sequence of raw rows.
///
/// Fails fast: the first unreadable or unparseable selected row aborts the
/// run and no series are returned. Rows for unselected regions are never
/// parsed.
pub fn run_rows<I>(
    rows: I,
    selection: &RegionSelection,
    config: &PipelineConfig,
) -> Result<Vec<NamedSeries>>
where
    I: IntoIterator<Item = Result<SourceRow>>,
{
    let mut rows_read = 0usize;
    let selected = rows
        .into_iter()
        .inspect(|_| rows_read += 1)
        .filter(|row| match row {
            Ok(src) => selection.matches(&src.row),
            Err(_) => true,
        })
        .map(|row| row.and_then(|src| parse_record(&src)));

    let mut index = GroupingIndex::new(config.region_keys);
    index.try_extend(selected)?;

    log::info!(
        "Read {rows_read} rows, {} selected across {} regions",
        index.record_count(),
        index.len()
    );

    if index.is_empty() {
        log::warn!("No rows matched regions {:?}", selection.names());
        return Ok(Vec::new());
    }

    for group in index.groups() {
        log::debug!(
            "Deriving series for {} ({} records)",
            group.display_name,
            group.records.len()
        );
    }

    let transformer = DeltaTransformer::new(config.cutoff, config.fold_order);
    let builder = SeriesBuilder::new(config.include_deaths);

    let series = index
        .into_groups()
        .into_iter()
        .flat_map(|group| {
            let derived = transformer.derive(&group.records);
            builder.build(&group.display_name, derived)
        })
        .collect();

    Ok(series)
}

/// Run over a CSV byte source with a header row.
pub fn run<R: Read>(
    source: R,
    selection: &RegionSelection,
    config: &PipelineConfig,
) -> Result<Vec<NamedSeries>> {
    run_rows(RowReader::new(source)?, selection, config)
}

/// Run over a CSV file on disk.
pub fn run_file(
    path: &Path,
    selection: &RegionSelection,
    config: &PipelineConfig,
) -> Result<Vec<NamedSeries>> {
    run_rows(RowReader::from_path(path)?, selection, config)
}
