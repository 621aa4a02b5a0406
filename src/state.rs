use std::path::{Path, PathBuf};

use anyhow::anyhow;
use eframe::egui::{ColorImage, Rect};

use crate::config::Settings;
use crate::data::loader::load_file;
use crate::data::{
    ChartKind, DataError, DataResult, Dataset, ProjectedRecord, ProjectionError, SelectionState, SeriesSpec,
    parse, project, series_specs,
};
use crate::export;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

const NOT_RENDERABLE: &str =
    "nothing to export: select an X column and at least one numeric Y column";

/// Which tab of the data page is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataView {
    #[default]
    Table,
    Chart,
}

/// A line shown in the top bar after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// File format for a captured chart image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Pdf,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Pdf => "pdf",
        }
    }
}

/// A chart image export in flight. The screenshot is requested once the
/// chart has been drawn and arrives as an input event in a later frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImageExport {
    pub path: PathBuf,
    pub format: ImageFormat,
    pub screenshot_requested: bool,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Dataset plus chart selection.
    pub page: SelectionState,

    pub settings: Settings,

    /// Active tab.
    pub view: DataView,

    /// Status / error message shown in the UI.
    pub status_message: Option<StatusMessage>,

    /// Image export waiting for a screenshot of the chart.
    pub image_export: Option<PendingImageExport>,

    /// Screen area of the chart in the last frame, for image export.
    pub chart_rect: Option<Rect>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            page: SelectionState::new(settings.default_chart_kind),
            settings,
            view: DataView::default(),
            status_message: None,
            image_export: None,
            chart_rect: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        self.page.dataset()
    }

    /// Parse uploaded text. On failure the current dataset stays loaded.
    pub fn load_text(&mut self, text: &str) -> DataResult<()> {
        let result = parse(text).map_err(DataError::from);
        self.finish_upload(result)
    }

    /// Load a file picked by the user. On failure the current dataset stays
    /// loaded.
    pub fn load_path(&mut self, path: &Path) -> DataResult<()> {
        let result = load_file(path, self.settings.max_file_size_mb);
        self.finish_upload(result)
    }

    fn finish_upload(&mut self, result: DataResult<Dataset>) -> DataResult<()> {
        match result {
            Ok(dataset) => {
                let message = format!(
                    "Parsed {} rows with {} columns",
                    dataset.len(),
                    dataset.columns().len()
                );
                log::info!("{message}");
                self.page.set_dataset(dataset);
                self.status_message = Some(StatusMessage::info(message));
                Ok(())
            }
            Err(e) => {
                log::warn!("upload rejected: {e}");
                self.status_message = Some(StatusMessage::error(format!("Parse error: {e}")));
                Err(e)
            }
        }
    }

    /// Clear the dataset and the selection.
    pub fn clear(&mut self) {
        self.page.clear();
        self.view = DataView::Table;
        self.status_message = None;
    }

    /// Select the X column. An unknown column leaves the selection as it was.
    pub fn set_x(&mut self, column: &str) -> DataResult<()> {
        self.page.set_x(column).map_err(|e| {
            log::warn!("ignoring X selection: {e}");
            DataError::Selection(e)
        })
    }

    pub fn toggle_y(&mut self, column: &str) {
        self.page.toggle_y(column);
    }

    pub fn set_kind(&mut self, kind: ChartKind) {
        self.page.set_kind(kind);
    }

    /// Chart records for the current selection.
    pub fn projection(&self) -> Result<Vec<ProjectedRecord>, ProjectionError> {
        project(self.page.dataset(), self.page.selection())
    }

    /// Series descriptors for the current selection.
    pub fn series(&self) -> Vec<SeriesSpec> {
        series_specs(self.page.selection(), &self.settings.chart_colors)
    }

    /// Write the current projection to `path`, reporting in the status line.
    /// An empty projection is an error and writes nothing.
    pub fn export_csv(&mut self, path: &Path) {
        let result = self
            .projection()
            .map_err(anyhow::Error::from)
            .and_then(|records| {
                if records.is_empty() {
                    return Err(anyhow!(NOT_RENDERABLE));
                }
                export::save_projection_csv(path, &records, &self.series())
            });
        self.report_export(path, result);
    }

    /// Queue an image export of the chart; switches to the chart tab.
    pub fn request_image_export(&mut self, path: PathBuf, format: ImageFormat) {
        self.view = DataView::Chart;
        self.image_export = Some(PendingImageExport {
            path,
            format,
            screenshot_requested: false,
        });
    }

    /// Decide, after the chart had its chance to draw, whether to request a
    /// screenshot now. A pending export with no chart on screen is dropped
    /// and reported as failed.
    pub fn begin_capture(&mut self) -> bool {
        let Some(pending) = self.image_export.as_mut() else {
            return false;
        };
        if pending.screenshot_requested {
            return false;
        }
        if self.chart_rect.is_none() {
            let path = pending.path.clone();
            self.image_export = None;
            self.report_export(&path, Err(anyhow!(NOT_RENDERABLE)));
            return false;
        }
        pending.screenshot_requested = true;
        true
    }

    /// True while a requested screenshot has not arrived yet.
    pub fn awaiting_capture(&self) -> bool {
        self.image_export
            .as_ref()
            .is_some_and(|pending| pending.screenshot_requested)
    }

    /// Save the captured chart region for the pending export. `None` means
    /// the chart was gone by the time the screenshot arrived.
    pub fn finish_capture(&mut self, region: Option<&ColorImage>) {
        let Some(pending) = self.image_export.take() else {
            return;
        };
        let result = match region {
            Some(image) => match pending.format {
                ImageFormat::Png => export::save_png(&pending.path, image),
                ImageFormat::Pdf => {
                    export::save_pdf(&pending.path, image, &self.settings.export_filename)
                }
            },
            None => Err(anyhow!("chart is not visible")),
        };
        self.report_export(&pending.path, result);
    }

    /// Report the outcome of an export.
    pub fn report_export(&mut self, path: &Path, result: anyhow::Result<()>) {
        self.status_message = Some(match result {
            Ok(()) => {
                log::info!("exported chart to {}", path.display());
                StatusMessage::info(format!("Chart saved as {}", path.display()))
            }
            Err(e) => {
                log::error!("export failed: {e:#}");
                StatusMessage::error(format!("Export failed: {e:#}"))
            }
        });
    }
}
