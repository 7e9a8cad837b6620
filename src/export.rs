use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::NamedSeries;

/// Write series as a pretty-printed JSON array.
pub fn write_json(path: &Path, series: &[NamedSeries]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, series).context("writing series JSON")?;
    writer.flush().context("flushing series JSON")?;
    log::info!("Exported {} series to {}", series.len(), path.display());
    Ok(())
}
