mod app;
mod cli;
mod color;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::CovidChartApp;
use clap::Parser;
use eframe::egui;

use cli::Cli;
use covid_chart::{export, pipeline};
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let selection = cli.selection();
    for name in selection.names() {
        log::info!("Requested region: {name}");
    }
    let config = cli.pipeline_config()?;

    let series = pipeline::run_file(&cli.input, &selection, &config)
        .with_context(|| format!("building series from {}", cli.input.display()))?;

    if let Some(path) = &cli.export {
        export::write_json(path, &series)?;
    }

    if cli.headless {
        for s in &series {
            let last = s.points.last().map(|p| format!("{} = {}", p.label, p.value));
            println!(
                "{}: {} points, last {}",
                s.name,
                s.len(),
                last.unwrap_or_else(|| "-".into())
            );
        }
        return Ok(());
    }

    let state = AppState::new(cli.input.clone(), selection, config, series);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Covid-19 Chart",
        options,
        Box::new(|_cc| Ok(Box::new(CovidChartApp { state }))),
    )
    .map_err(|e| anyhow::anyhow!("chart window failed: {e}"))
}
