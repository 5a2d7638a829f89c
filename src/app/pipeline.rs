//! The fit pipeline as a pure computation.
//!
//! One optimization run plus model evaluation at the best fit, returned as a
//! record. No printing, no file I/O: the app layer consumes the record for
//! display and exports, which keeps the testable core free of display
//! concerns.

use crate::domain::{FitConfig, FitOutcome, Predictions, REFERENCE};
use crate::error::AppError;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub outcome: FitOutcome,
    pub predictions: Predictions,
}

/// Execute the fit and evaluate the forward model at the best point.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let outcome = crate::fit::fit(&REFERENCE, config.max_iters, config.sd_tolerance)?;
    let predictions = crate::report::predictions_for(&outcome.params);

    Ok(RunOutput {
        outcome,
        predictions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelParams;

    fn test_config() -> FitConfig {
        FitConfig {
            max_iters: 300,
            sd_tolerance: 1e-8,
            figure: None,
            figure_width: 1500,
            figure_height: 1000,
            params_file: None,
            results_file: None,
        }
    }

    #[test]
    fn pipeline_improves_on_the_initial_guess() {
        let start = crate::fit::chi_square(&ModelParams::initial_guess(), &REFERENCE);
        let run = run_fit(&test_config()).unwrap();

        assert!(run.outcome.chi_square <= start);
        assert_eq!(run.predictions.mass_up[2], 1.0);
        assert_eq!(run.predictions.mass_down[2], 1.0);
    }
}
