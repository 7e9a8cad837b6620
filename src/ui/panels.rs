use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – series toggles
// ---------------------------------------------------------------------------

/// Render the left panel with one checkbox per series.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Series");
    ui.separator();

    if state.series.is_empty() {
        ui.label("No series loaded.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (series, visible) in state.series.iter().zip(state.visible.iter_mut()) {
                let color = state.color_map.color_for(&series.region);
                let text = RichText::new(&series.name).color(color);
                ui.checkbox(visible, text);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} series, {} visible",
            state.series.len(),
            state.visible_count()
        ));

        ui.separator();

        let include = state.config.include_deaths;
        if ui.selectable_label(include, "Deaths").clicked() {
            state.set_include_deaths(!include);
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open state case data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load(path);
    }
}
