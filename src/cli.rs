use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;

use covid_chart::config::PipelineConfig;
use covid_chart::data::delta::FoldOrder;
use covid_chart::data::group::RegionKeys;
use covid_chart::RegionSelection;

/// Chart new COVID-19 cases per day for one or more US states.
///
/// `covid-chart new york` or `covid-chart "new york, washington, virginia"`.
#[derive(Debug, Parser)]
#[command(name = "covid-chart", version)]
pub struct Cli {
    /// Region names. Words are joined with spaces, then split on commas.
    #[arg(required = true)]
    pub regions: Vec<String>,

    /// CSV with `date,state,cases,deaths` columns.
    #[arg(short, long, default_value = "us-states.csv")]
    pub input: PathBuf,

    /// Treat the whole argument as a single region name (no comma splitting).
    #[arg(long)]
    pub single: bool,

    /// JSON file with pipeline settings; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// First date to chart (YYYY-MM-DD).
    #[arg(long)]
    pub cutoff: Option<NaiveDate>,

    /// Fold records in file order instead of sorting by date first.
    #[arg(long)]
    pub insertion_order: bool,

    /// Group by region name exactly as written, case included.
    #[arg(long)]
    pub exact_keys: bool,

    /// Also emit a deaths series per region.
    #[arg(long)]
    pub include_deaths: bool,

    /// Write the emitted series to this JSON file.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print a summary instead of opening the chart window.
    #[arg(long)]
    pub headless: bool,
}

impl Cli {
    pub fn selection(&self) -> RegionSelection {
        let input = self.regions.join(" ");
        if self.single {
            RegionSelection::single(&input)
        } else {
            RegionSelection::from_list(&input)
        }
    }

    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_json_file(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(cutoff) = self.cutoff {
            config.cutoff = cutoff;
        }
        if self.insertion_order {
            config.fold_order = FoldOrder::Insertion;
        }
        if self.exact_keys {
            config.region_keys = RegionKeys::Exact;
        }
        if self.include_deaths {
            config.include_deaths = true;
        }
        Ok(config)
    }
}
