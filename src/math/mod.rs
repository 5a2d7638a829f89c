//! Mathematical constants of the model.

pub mod constants;

pub use constants::*;
