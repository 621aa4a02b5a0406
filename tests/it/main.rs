//! Single test binary entry point.
//!
//! Structure:
//! - unit: single-module behaviour (parser, inference, projection)
//! - integration: upload → select → project → export workflows

mod integration;
mod unit;
