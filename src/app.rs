use std::sync::Arc;

use eframe::egui::{self, ColorImage, Ui};

use crate::config::Settings;
use crate::export;
use crate::state::{AppState, DataView};
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustyChartApp {
    pub state: AppState,
}

impl Default for RustyChartApp {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl RustyChartApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: AppState::new(settings),
        }
    }

    /// Drive a pending image export: request the screenshot once the chart
    /// is on screen, then crop and save it when the image arrives.
    fn poll_image_export(&mut self, ctx: &egui::Context) {
        if self.state.begin_capture() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            return;
        }
        if !self.state.awaiting_capture() {
            return;
        }

        let screenshot: Option<Arc<ColorImage>> = ctx.input(|i| {
            i.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(image) = screenshot else {
            return;
        };

        let region = self
            .state
            .chart_rect
            .map(|rect| image.region(&rect, Some(ctx.pixels_per_point())));
        self.state.finish_capture(region.as_ref());
    }
}

impl eframe::App for RustyChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.chart_rect = None;

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui: &mut Ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: chart configuration ----
        if self.state.view == DataView::Chart {
            egui::SidePanel::left("chart_panel")
                .default_width(220.0)
                .resizable(true)
                .show(ctx, |ui: &mut Ui| {
                    panels::side_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: table or chart ----
        egui::CentralPanel::default().show(ctx, |ui: &mut Ui| {
            if self.state.dataset().is_empty() {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("No data uploaded. Upload a CSV file  (File → Upload CSV…)");
                });
                return;
            }
            match self.state.view {
                DataView::Table => table::data_table(ui, self.state.dataset()),
                DataView::Chart => plot::data_chart(ui, &mut self.state),
            }
        });

        self.poll_image_export(ctx);
    }
}
