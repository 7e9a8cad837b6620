use std::collections::BTreeSet;
use std::path::PathBuf;

use covid_chart::config::PipelineConfig;
use covid_chart::{NamedSeries, RegionSelection, pipeline};

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// CSV the current series came from.
    pub input: PathBuf,

    pub selection: RegionSelection,

    pub config: PipelineConfig,

    /// Series as emitted by the pipeline.
    pub series: Vec<NamedSeries>,

    /// Per-series visibility, parallel to `series`.
    pub visible: Vec<bool>,

    /// Sorted union of all date labels; the x axis is an index into this.
    pub labels: Vec<String>,

    /// Active colour map.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(
        input: PathBuf,
        selection: RegionSelection,
        config: PipelineConfig,
        series: Vec<NamedSeries>,
    ) -> Self {
        let mut state = Self {
            input,
            selection,
            config,
            series: Vec::new(),
            visible: Vec::new(),
            labels: Vec::new(),
            color_map: ColorMap::default(),
            status_message: None,
        };
        state.set_series(series);
        state
    }

    /// Replace the charted series and rebuild axis and colours.
    pub fn set_series(&mut self, series: Vec<NamedSeries>) {
        let labels: BTreeSet<&str> = series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.label.as_str()))
            .collect();
        self.labels = labels.into_iter().map(String::from).collect();
        self.color_map = ColorMap::new(&series);
        self.visible = vec![true; series.len()];
        self.status_message = if series.is_empty() {
            Some("No rows matched the requested regions".to_string())
        } else {
            None
        };
        self.series = series;
    }

    /// Position of a date label on the category axis.
    pub fn category_index(&self, label: &str) -> Option<usize> {
        self.labels.binary_search_by(|l| l.as_str().cmp(label)).ok()
    }

    /// Re-run the pipeline on `path` with the current selection and config.
    pub fn load(&mut self, path: PathBuf) {
        match pipeline::run_file(&path, &self.selection, &self.config) {
            Ok(series) => {
                log::info!("Loaded {} series from {}", series.len(), path.display());
                self.input = path;
                self.set_series(series);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Toggle the deaths series and rebuild from the current input.
    pub fn set_include_deaths(&mut self, include: bool) {
        self.config.include_deaths = include;
        self.load(self.input.clone());
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn select_all(&mut self) {
        self.visible.iter_mut().for_each(|v| *v = true);
    }

    pub fn select_none(&mut self) {
        self.visible.iter_mut().for_each(|v| *v = false);
    }
}
