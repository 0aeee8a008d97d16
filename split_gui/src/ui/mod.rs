//! UI module for Dutchpay GUI
//!
//! This module organizes the GUI into panels and components.
//!
//! # Panel Structure
//! - `toolbar` - Application header, theme toggle
//! - `input_panel` - Left panel: amount and people fields, Reset action
//! - `results_panel` - Right panel: per-person share, rounding difference

pub mod input_panel;
pub mod results_panel;
pub mod toolbar;

// Note: Functions are accessed via module paths (e.g., ui::toolbar::view_header)
