//! UI module for the Towcheck GUI
//!
//! # Panel Structure
//! - `toolbar` - Application header and settings dropdown (dark mode)
//! - `input_panel` - Left sidebar: trailer label, load table, axle table, Calculate
//! - `results_panel` - Right panel: metrics, range check, layout diagram
//! - `status_bar` - Bottom: configuration summary and status messages
//!
//! # Shared Components
//! - `shared/diagrams` - Canvas drawing for the trailer layout diagram

pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;

pub mod shared;
