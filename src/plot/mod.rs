//! Diagnostic figure rendering.

pub mod charts;

pub use charts::render_summary_figure;
