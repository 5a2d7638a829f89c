//! `flavor-fit` library crate.
//!
//! The binary (`flavor`) is a thin wrapper around this library so that:
//!
//! - the forward model, objective, and fit driver are testable without
//!   spawning processes
//! - reporting/plotting stay separate from the numerical core
//! - modules remain reusable if the model grows (e.g. a neutrino sector)

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
