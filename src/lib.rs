//! Per-state COVID-19 series derivation.
//!
//! The `covid-chart` binary is a thin egui front-end over this library:
//! everything from CSV rows to named, sorted series lives here.

pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod pipeline;

pub use config::PipelineConfig;
pub use data::filter::RegionSelection;
pub use data::model::{Metric, NamedSeries, SeriesPoint, StateRecord};
pub use error::PipelineError;
