use eframe::egui;
use rusty_chart::app::RustyChartApp;
use rusty_chart::config::Settings;

fn main() -> eframe::Result {
    env_logger::init();

    let settings = Settings::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Chart – CSV Data Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(RustyChartApp::new(settings)))),
    )
}
