use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::ChartKind;
use crate::state::{AppState, DataView, ImageFormat};

// ---------------------------------------------------------------------------
// Left side panel – chart configuration
// ---------------------------------------------------------------------------

/// Render the left chart-configuration panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Chart");
    ui.separator();

    if state.dataset().columns().is_empty() {
        ui.label("No data uploaded.");
        return;
    }

    // Clone what we need so we can mutate state inside the loop.
    let columns = state.dataset().columns().as_slice().to_vec();
    let numeric = state.page.numeric_columns();
    let selection = state.page.selection().clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- X axis ----
            ui.strong("X-Axis");
            let current_x = selection.x.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("x_axis")
                .selected_text(&current_x)
                .show_ui(ui, |ui: &mut Ui| {
                    for col in &columns {
                        if ui.selectable_label(current_x == *col, col).clicked() {
                            // unknown columns are logged and ignored
                            let _ = state.set_x(col);
                        }
                    }
                });
            ui.separator();

            // ---- Y axis: numeric columns only ----
            ui.strong("Y-Axis");
            if numeric.is_empty() {
                ui.label(RichText::new("No numeric columns").italics());
            }
            for col in &numeric {
                let mut checked = selection.y.contains(col);
                if ui.checkbox(&mut checked, col).changed() {
                    state.toggle_y(col);
                }
            }
            ui.separator();

            // ---- Chart kind ----
            ui.strong("Chart Type");
            let mut kind = selection.kind;
            egui::ComboBox::from_id_salt("chart_kind")
                .selected_text(kind.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    for option in ChartKind::ALL {
                        ui.selectable_value(&mut kind, option, option.to_string());
                    }
                });
            if kind != selection.kind {
                state.set_kind(kind);
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
            if ui.button("Upload CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }

            let has_data = !state.dataset().is_empty();
            let renderable = state.page.selection().is_renderable();
            ui.add_enabled_ui(renderable, |ui: &mut Ui| {
                if ui.button("Export data (CSV)…").clicked() {
                    export_csv_dialog(state);
                    ui.close_menu();
                }
                if ui.button("Export chart (PNG)…").clicked() {
                    export_image_dialog(state, ImageFormat::Png);
                    ui.close_menu();
                }
                if ui.button("Export chart (PDF)…").clicked() {
                    export_image_dialog(state, ImageFormat::Pdf);
                    ui.close_menu();
                }
            });
            ui.add_enabled_ui(has_data, |ui: &mut Ui| {
                ui.separator();
                if ui.button("Clear Data").clicked() {
                    state.clear();
                    ui.close_menu();
                }
            });
        });

        ui.separator();

        let ds = state.dataset();
        if !ds.is_empty() {
            ui.label(format!("{} rows × {} columns", ds.len(), ds.columns().len()));
            ui.separator();
            ui.selectable_value(&mut state.view, DataView::Table, "Table View");
            ui.selectable_value(&mut state.view, DataView::Chart, "Chart View");
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            let color = if msg.is_error {
                Color32::RED
            } else {
                Color32::GREEN
            };
            ui.label(RichText::new(&msg.text).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload CSV data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        // Errors are already reported in the status line.
        let _ = state.load_path(&path);
    }
}

fn export_csv_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export chart data")
        .set_file_name(format!("{}.csv", state.settings.export_filename))
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        state.export_csv(&path);
    }
}

fn export_image_dialog(state: &mut AppState, format: ImageFormat) {
    let extension = format.extension();
    let file = rfd::FileDialog::new()
        .set_title("Export chart image")
        .set_file_name(format!("{}.{extension}", state.settings.export_filename))
        .add_filter(extension.to_uppercase(), &[extension])
        .save_file();

    if let Some(path) = file {
        state.request_image_export(path, format);
    }
}
