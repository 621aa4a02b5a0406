use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::{Dataset, table_columns};

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Data table (central panel, table tab)
// ---------------------------------------------------------------------------

/// Render every row of the dataset under its header.
pub fn data_table(ui: &mut Ui, dataset: &Dataset) {
    let columns = table_columns(dataset);
    if dataset.is_empty() {
        ui.label("No data available");
        return;
    }

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .columns(Column::auto().at_least(60.0), columns.len())
            .header(20.0, |mut header| {
                for col in &columns {
                    header.col(|ui: &mut Ui| {
                        ui.strong(&col.label);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, dataset.len(), |mut row| {
                    let record = &dataset.rows()[row.index()];
                    for col in &columns {
                        row.col(|ui: &mut Ui| {
                            let text = record.get(&col.key).map(|v| v.to_string()).unwrap_or_default();
                            ui.label(text);
                        });
                    }
                });
            });
    });
}
