//! egui views: menu bar, chart configuration, chart and table adapters.

pub mod panels;
pub mod plot;
pub mod table;
