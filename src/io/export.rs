//! Write the best-fit parameter text file and the JSON results archive.
//!
//! The text file is meant for humans; the JSON archive is the portable
//! record of a run (parameters, fit status, predictions, and the reference
//! they were scored against) for later reuse.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{FitOutcome, Predictions, Reference, ResultsFile};
use crate::error::AppError;
use crate::math::{tau0, PHI};

/// Write the sectioned best-fit parameter listing.
pub fn write_parameters_txt(
    path: &Path,
    outcome: &FitOutcome,
    pred: &Predictions,
) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create parameter file '{}': {e}", path.display()))
    })?;

    let p = &outcome.params;
    let t0 = tau0();
    let mut body = String::new();

    body.push_str("BEST FIT PARAMETERS\n");
    body.push_str(&"=".repeat(40));
    body.push_str("\n\n");
    body.push_str(&format!("Golden ratio: phi = {PHI:.6}\n"));
    body.push_str(&format!("Fixed point: tau0 = {:.3}{:+.3}i\n", t0.re, t0.im));
    body.push_str(&format!(
        "chi^2 = {:.4} ({} iterations, converged = {})\n\n",
        outcome.chi_square, outcome.iterations, outcome.converged
    ));

    body.push_str("MODULAR WEIGHTS:\n");
    body.push_str(&format!(
        "  k_u = [{:.2}, {:.2}, {:.2}]\n",
        p.k_up[0], p.k_up[1], p.k_up[2]
    ));
    body.push_str(&format!(
        "  k_d = [{:.2}, {:.2}, {:.2}]\n\n",
        p.k_down[0], p.k_down[1], p.k_down[2]
    ));

    body.push_str("GEOMETRIC PARAMETERS:\n");
    body.push_str(&format!("  L0 = {:.2}\n", p.length_scale));
    body.push_str(&format!("  alpha = {:.2}\n\n", p.alpha));

    body.push_str("MIXING ANGLES (radians):\n");
    body.push_str(&format!(
        "  theta12 = {:.4} ({:.2} deg)\n",
        p.theta12,
        p.theta12.to_degrees()
    ));
    body.push_str(&format!(
        "  theta23 = {:.4} ({:.2} deg)\n",
        p.theta23,
        p.theta23.to_degrees()
    ));
    body.push_str(&format!(
        "  theta13 = {:.4} ({:.2} deg)\n\n",
        p.theta13,
        p.theta13.to_degrees()
    ));

    body.push_str("CP VIOLATION:\n");
    body.push_str(&format!(
        "  delta_CP = {:.3} rad ({:.1} deg)\n",
        p.delta_cp,
        p.delta_cp.to_degrees()
    ));
    body.push_str(&format!("  Jarlskog invariant J = {:.2e}\n\n", pred.jarlskog));

    body.push_str("MASS PREDICTIONS:\n");
    body.push_str(&format!("  m_u/m_t = {:.2e}\n", pred.mass_up[0]));
    body.push_str(&format!("  m_c/m_t = {:.4}\n", pred.mass_up[1]));
    body.push_str(&format!("  m_d/m_b = {:.2e}\n", pred.mass_down[0]));
    body.push_str(&format!("  m_s/m_b = {:.4}\n\n", pred.mass_down[1]));

    body.push_str("CKM MATRIX PREDICTIONS:\n");
    body.push_str(&format!("  |V_us| = {:.5}\n", pred.ckm_mag[0][1]));
    body.push_str(&format!("  |V_cb| = {:.5}\n", pred.ckm_mag[1][2]));
    body.push_str(&format!("  |V_ub| = {:.5}\n", pred.ckm_mag[0][2]));

    file.write_all(body.as_bytes())
        .map_err(|e| AppError::new(2, format!("Failed to write parameter file: {e}")))?;

    Ok(())
}

/// Write the JSON results archive.
pub fn write_results_json(
    path: &Path,
    outcome: &FitOutcome,
    pred: &Predictions,
    reference: &Reference,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create results JSON '{}': {e}", path.display()))
    })?;

    let t0 = tau0();
    let results = ResultsFile {
        tool: "flavor".to_string(),
        phi: PHI,
        tau0: (t0.re, t0.im),
        outcome: outcome.clone(),
        predictions: pred.clone(),
        reference: reference.clone(),
    };

    serde_json::to_writer_pretty(file, &results)
        .map_err(|e| AppError::new(2, format!("Failed to write results JSON: {e}")))?;

    Ok(())
}

/// Read a results archive back (for comparisons or re-plotting).
pub fn read_results_json(path: &Path) -> Result<ResultsFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open results JSON '{}': {e}", path.display()))
    })?;
    let results: ResultsFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid results JSON: {e}")))?;
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelParams, REFERENCE};
    use crate::report::predictions_for;

    fn sample_outcome() -> (FitOutcome, Predictions) {
        let params = ModelParams::initial_guess();
        let chi_square = crate::fit::chi_square(&params, &REFERENCE);
        let pred = predictions_for(&params);
        (
            FitOutcome {
                params,
                chi_square,
                iterations: 123,
                converged: true,
            },
            pred,
        )
    }

    #[test]
    fn results_json_roundtrips() {
        let (outcome, pred) = sample_outcome();
        let dir = std::env::temp_dir();
        let path = dir.join("flavor_fit_results_test.json");

        write_results_json(&path, &outcome, &pred, &REFERENCE).unwrap();
        let back = read_results_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(back.tool, "flavor");
        assert_eq!(back.outcome.iterations, 123);
        assert_eq!(back.outcome.params, outcome.params);
        assert_eq!(back.predictions.ckm_mag[0][1], pred.ckm_mag[0][1]);
        assert_eq!(back.reference.v_us.value, REFERENCE.v_us.value);
    }

    #[test]
    fn parameters_txt_contains_all_sections() {
        let (outcome, pred) = sample_outcome();
        let dir = std::env::temp_dir();
        let path = dir.join("flavor_fit_params_test.txt");

        write_parameters_txt(&path, &outcome, &pred).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        for section in [
            "MODULAR WEIGHTS:",
            "GEOMETRIC PARAMETERS:",
            "MIXING ANGLES",
            "CP VIOLATION:",
            "MASS PREDICTIONS:",
            "CKM MATRIX PREDICTIONS:",
        ] {
            assert!(text.contains(section), "missing section {section}");
        }
    }
}
