//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the fit pipeline (pure computation, no printing)
//! - prints the formatted summary
//! - renders the figure and writes result files

use clap::Parser;

use crate::cli::Cli;
use crate::domain::{FitConfig, REFERENCE};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `flavor` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = fit_config_from_cli(&cli);
    run_with_config(&config)
}

/// Run the pipeline and emit all outputs per the config.
pub fn run_with_config(config: &FitConfig) -> Result<(), AppError> {
    let run = pipeline::run_fit(config)?;

    println!(
        "{}",
        crate::report::format_summary(&run.outcome, &run.predictions, &REFERENCE)
    );

    if let Some(path) = &config.figure {
        crate::plot::render_summary_figure(
            path,
            &run.outcome,
            &run.predictions,
            &REFERENCE,
            (config.figure_width, config.figure_height),
        )?;
        println!("Saved figure to: {}", path.display());
    }

    if let Some(path) = &config.params_file {
        crate::io::write_parameters_txt(path, &run.outcome, &run.predictions)?;
        println!("Saved parameters to: {}", path.display());
    }
    if let Some(path) = &config.results_file {
        crate::io::write_results_json(path, &run.outcome, &run.predictions, &REFERENCE)?;
        println!("Saved results to: {}", path.display());
    }

    Ok(())
}

pub fn fit_config_from_cli(cli: &Cli) -> FitConfig {
    FitConfig {
        max_iters: cli.max_iters,
        sd_tolerance: cli.sd_tol,
        figure: (!cli.no_figure).then(|| cli.figure.clone()),
        figure_width: cli.width,
        figure_height: cli.height,
        params_file: (!cli.no_export).then(|| cli.params_file.clone()),
        results_file: (!cli.no_export).then(|| cli.results_file.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_disable_the_right_outputs() {
        let cli = Cli::parse_from(["flavor", "--no-figure", "--no-export"]);
        let config = fit_config_from_cli(&cli);
        assert!(config.figure.is_none());
        assert!(config.params_file.is_none());
        assert!(config.results_file.is_none());
        assert_eq!(config.max_iters, 1000);
    }
}
