//! Upload → select → export workflows through the application state.

use std::io::Write;

use rusty_chart::config::Settings;
use rusty_chart::data::{ChartKind, DataError, FormatError};
use rusty_chart::state::{AppState, DataView, ImageFormat};

fn csv_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_upload_then_replace_dataset() {
    let mut state = AppState::default();
    let first = csv_file("month,revenue\nJan,4000\nFeb,3000\n");
    state.load_path(first.path()).unwrap();
    assert_eq!(state.dataset().len(), 2);

    let second = csv_file("category,sales,returns\nBooks,2780,390\n");
    state.load_path(second.path()).unwrap();
    assert_eq!(state.dataset().len(), 1);
    assert_eq!(state.page.selection().x.as_deref(), Some("category"));
    assert_eq!(state.page.selection().y, vec!["sales"]);
}

#[test]
fn test_rejected_upload_keeps_prior_dataset() {
    let mut state = AppState::default();
    state.load_path(csv_file("a,b\n1,2\n").path()).unwrap();
    state.toggle_y("b");

    let err = state.load_path(csv_file("a,b\n1\n").path()).unwrap_err();
    assert!(matches!(
        err,
        DataError::Format(FormatError::FieldCount { row: 2, found: 1, expected: 2 })
    ));
    assert_eq!(state.dataset().len(), 1);
    assert_eq!(state.page.selection().y, vec!["a", "b"]);
}

#[test]
fn test_wrong_extension_is_rejected() {
    let mut state = AppState::default();
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"a,b\n1,2\n").unwrap();

    let err = state.load_path(file.path()).unwrap_err();
    assert!(matches!(err, DataError::UnsupportedExtension { .. }));
    assert!(state.dataset().is_empty());
    assert!(state.status_message.unwrap().is_error);
}

#[test]
fn test_multi_series_export() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.csv");

    let mut state = AppState::new(Settings {
        default_chart_kind: ChartKind::Line,
        ..Settings::default()
    });
    state.load_text("month,revenue,profit\nJan,4000,2400\nFeb,3000,1398\n").unwrap();
    state.toggle_y("profit");
    state.set_kind(ChartKind::Bar);

    let series = state.series();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].color_token, "hsl(243, 75%, 59%)");
    assert_eq!(series[1].color_token, "hsl(173, 80%, 40%)");

    state.export_csv(&out);
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, "name,revenue,profit\nJan,4000,2400\nFeb,3000,1398\n");
    assert_eq!(state.page.selection().kind, ChartKind::Bar);
}

#[test]
fn test_clear_returns_to_empty_page() {
    let mut state = AppState::default();
    state.load_text("a,b\n1,2").unwrap();
    state.view = DataView::Chart;

    state.clear();
    assert!(state.dataset().columns().is_empty());
    assert_eq!(state.view, DataView::Table);
    assert!(state.projection().unwrap().is_empty());
}

#[test]
fn test_image_export_request_switches_to_chart() {
    let mut state = AppState::default();
    state.load_text("a,b\n1,2").unwrap();
    state.request_image_export("chart.pdf".into(), ImageFormat::Pdf);

    assert_eq!(state.view, DataView::Chart);
    let pending = state.image_export.as_ref().unwrap();
    assert_eq!(pending.format, ImageFormat::Pdf);
    assert!(!pending.screenshot_requested);
}

#[test]
fn test_image_export_of_unchartable_selection_fails() {
    let mut state = AppState::default();
    state.load_text("city,label\nOslo,north\nRome,south").unwrap();
    state.request_image_export("chart.png".into(), ImageFormat::Png);

    // the chart view drew only the placeholder, so no chart area was recorded
    assert!(!state.begin_capture());
    assert!(state.image_export.is_none());
    let status = state.status_message.as_ref().unwrap();
    assert!(status.is_error);
    assert!(status.text.starts_with("Export failed"));
}

#[test]
fn test_blank_line_inside_upload_is_rejected() {
    let file = csv_file("month,sales\nJan,10\n\nFeb,20\n");
    let mut state = AppState::default();

    let err = state.load_path(file.path()).unwrap_err();
    assert!(matches!(
        err,
        DataError::Format(FormatError::FieldCount {
            row: 3,
            found: 1,
            expected: 2
        })
    ));
    assert!(state.dataset().is_empty());
}
