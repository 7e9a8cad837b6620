use eframe::egui::Ui;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};

use covid_chart::Metric;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Cases chart (central panel)
// ---------------------------------------------------------------------------

/// Render every visible series as a line over the shared date axis.
pub fn cases_plot(ui: &mut Ui, state: &AppState) {
    if state.series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data for the requested regions  (File → Open…)");
        });
        return;
    }

    let labels = &state.labels;

    Plot::new("cases_plot")
        .legend(Legend::default())
        .x_axis_label("Date")
        .y_axis_label("Cases")
        .x_axis_formatter(|mark, _range| {
            let x = mark.value;
            if x < 0.0 || x.fract() != 0.0 {
                return String::new();
            }
            labels.get(x as usize).cloned().unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (series, _) in state
                .series
                .iter()
                .zip(&state.visible)
                .filter(|(_, visible)| **visible)
            {
                let points: PlotPoints = series
                    .points
                    .iter()
                    .filter_map(|p| {
                        let x = state.category_index(&p.label)?;
                        Some([x as f64, p.value as f64])
                    })
                    .collect();

                let mut line = Line::new(points)
                    .name(&series.name)
                    .color(state.color_map.color_for(&series.region))
                    .width(1.5);
                if series.metric == Metric::Total {
                    line = line.style(LineStyle::dashed_loose());
                } else if series.metric == Metric::Deaths {
                    line = line.style(LineStyle::dotted_dense());
                }

                plot_ui.line(line);
            }
        });
}
