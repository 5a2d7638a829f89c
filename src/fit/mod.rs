//! Objective function and optimization driver.

pub mod driver;
pub mod objective;

pub use driver::{fit, FitProblem};
pub use objective::{chi_square, residual_terms, ResidualTerm};
