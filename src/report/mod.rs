//! Reporting: model predictions at the best fit and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

pub mod format;

pub use format::{format_summary, predictions_for};
