use std::ops::RangeInclusive;

use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, PlotUi, Points};

use crate::color::series_colors;
use crate::data::{ChartKind, ProjectedRecord, SeriesSpec};
use crate::state::AppState;

/// Share of each category slot covered by its group of bars.
const BAR_GROUP_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Data chart (central panel, chart tab)
// ---------------------------------------------------------------------------

/// Render the projected dataset as a bar or line chart.
pub fn data_chart(ui: &mut Ui, state: &mut AppState) {
    let selection = state.page.selection().clone();
    let (Some(subtitle), Some(x_column)) = (selection.subtitle(), selection.x.clone()) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select an X column and at least one numeric Y column");
        });
        return;
    };

    let records = match state.projection() {
        Ok(records) => records,
        Err(e) => {
            ui.label(RichText::new(format!("Cannot chart this selection: {e}")).color(Color32::RED));
            return;
        }
    };
    let series = state.series();
    let colors = series_colors(&series);

    ui.heading("Data Visualization");
    ui.label(subtitle);

    let labels: Vec<String> = records.iter().map(|r| r.label.clone()).collect();
    let y_label = selection.y.join(", ");

    let response = Plot::new("data_chart")
        .legend(Legend::default())
        .x_axis_label(x_column)
        .y_axis_label(y_label)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| match selection.kind {
            ChartKind::Bar => bar_series(plot_ui, &records, &series, &colors),
            ChartKind::Line => line_series(plot_ui, &records, &series, &colors),
        });

    state.chart_rect = Some(response.response.rect);
}

/// Label for an axis tick: only whole positions map to a row.
fn category_label(labels: &[String], value: f64) -> String {
    if value < 0.0 || value.fract() != 0.0 {
        return String::new();
    }
    labels.get(value as usize).cloned().unwrap_or_default()
}

/// Grouped bars: one slot per record, one bar per series inside the slot.
fn bar_series(plot_ui: &mut PlotUi, records: &[ProjectedRecord], series: &[SeriesSpec], colors: &[Color32]) {
    let n = series.len().max(1) as f64;
    let width = BAR_GROUP_WIDTH / n;

    for (i, (spec, color)) in series.iter().zip(colors).enumerate() {
        let offset = (i as f64 - (n - 1.0) / 2.0) * width;
        let bars: Vec<Bar> = records
            .iter()
            .enumerate()
            .filter_map(|(row, record)| {
                let value = record.value(&spec.column_name)?;
                Some(Bar::new(row as f64 + offset, value).width(width).name(&record.label))
            })
            .collect();

        plot_ui.bar_chart(BarChart::new(bars).name(&spec.display_name).color(*color));
    }
}

/// One line per series, with a dot at each record.
fn line_series(plot_ui: &mut PlotUi, records: &[ProjectedRecord], series: &[SeriesSpec], colors: &[Color32]) {
    for (spec, color) in series.iter().zip(colors) {
        let points: Vec<[f64; 2]> = records
            .iter()
            .enumerate()
            .filter_map(|(row, record)| Some([row as f64, record.value(&spec.column_name)?]))
            .collect();

        plot_ui.line(
            Line::new(PlotPoints::from(points.clone()))
                .name(&spec.display_name)
                .color(*color)
                .width(2.0),
        );
        plot_ui.points(
            Points::new(PlotPoints::from(points))
                .name(&spec.display_name)
                .color(*color)
                .radius(4.0),
        );
    }
}
