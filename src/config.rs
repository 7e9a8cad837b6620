use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::delta::FoldOrder;
use crate::data::group::RegionKeys;

/// Earliest date the source dataset reports reliably. Records before it
/// feed the running floor but are not charted.
pub fn default_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, 7).unwrap_or(NaiveDate::MIN)
}

/// Knobs for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub cutoff: NaiveDate,
    pub fold_order: FoldOrder,
    pub region_keys: RegionKeys,
    pub include_deaths: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cutoff: default_cutoff(),
            fold_order: FoldOrder::default(),
            region_keys: RegionKeys::default(),
            include_deaths: false,
        }
    }
}

impl PipelineConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    ///
    /// ```json
    /// { "cutoff": "2020-03-15", "fold_order": "insertion" }
    /// ```
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).context("parsing config JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "fold_order": "insertion", "region_keys": "exact" }"#;
        let cfg: PipelineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.fold_order, FoldOrder::Insertion);
        assert_eq!(cfg.region_keys, RegionKeys::Exact);
        assert_eq!(cfg.cutoff, default_cutoff());
        assert!(!cfg.include_deaths);
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        std::fs::write(&path, r#"{ "cutoff": "2020-04-01", "include_deaths": true }"#).unwrap();
        let cfg = PipelineConfig::from_json_file(&path).unwrap();
        assert_eq!(cfg.cutoff, NaiveDate::from_ymd_opt(2020, 4, 1).unwrap());
        assert!(cfg.include_deaths);
    }
}
