//! Result-file writers (terminal sinks; nothing feeds back into the fit).

pub mod export;

pub use export::{read_results_json, write_parameters_txt, write_results_json};
