//! Command-line parsing for the flavor-model fitter.
//!
//! This is a one-shot tool ("run" means "execute the fit"), so there are no
//! subcommands: a single flag set controls the optimizer and the output
//! artifacts. Parsing stays separate from the modeling/math code.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "flavor",
    version,
    about = "Golden-ratio quark flavor model fitter"
)]
pub struct Cli {
    /// Nelder-Mead iteration cap.
    ///
    /// The search is local and may stop here without converging; the best
    /// point found so far is reported either way.
    #[arg(long, default_value_t = 1000)]
    pub max_iters: u64,

    /// Simplex standard-deviation tolerance for declaring convergence.
    #[arg(long, default_value_t = 1e-10)]
    pub sd_tol: f64,

    /// Output path for the diagnostic figure (SVG).
    #[arg(long, default_value = "results.svg")]
    pub figure: PathBuf,

    /// Skip rendering the figure.
    #[arg(long)]
    pub no_figure: bool,

    /// Figure width (pixels).
    #[arg(long, default_value_t = 1500)]
    pub width: u32,

    /// Figure height (pixels).
    #[arg(long, default_value_t = 1000)]
    pub height: u32,

    /// Output path for the best-fit parameter listing.
    #[arg(long, default_value = "parameters.txt")]
    pub params_file: PathBuf,

    /// Output path for the JSON results archive.
    #[arg(long, default_value = "results.json")]
    pub results_file: PathBuf,

    /// Skip writing the parameter listing and the JSON archive.
    #[arg(long)]
    pub no_export: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let cli = Cli::parse_from(["flavor"]);
        assert_eq!(cli.max_iters, 1000);
        assert_eq!(cli.sd_tol, 1e-10);
        assert!(!cli.no_figure);
        assert!(!cli.no_export);
        assert_eq!(cli.figure, PathBuf::from("results.svg"));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "flavor",
            "--max-iters",
            "500",
            "--no-figure",
            "--results-file",
            "out.json",
        ]);
        assert_eq!(cli.max_iters, 500);
        assert!(cli.no_figure);
        assert_eq!(cli.results_file, PathBuf::from("out.json"));
    }
}
