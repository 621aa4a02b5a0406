//! Rusty Chart: upload a CSV file, inspect it as a table and chart its
//! numeric columns as bars or lines.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod export;
pub mod state;
pub mod ui;
