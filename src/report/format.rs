//! Build the predictions record and format the run summary.
//!
//! The pipeline produces a pure result record; everything human-readable is
//! assembled here as strings and printed by the app layer.

use crate::domain::{FitOutcome, ModelParams, Predictions, Reference};
use crate::fit::residual_terms;
use crate::math::{tau0, PHI};
use crate::models::{ckm_matrix, jarlskog, mass_ratios};

/// Evaluate the forward model at a parameter point.
pub fn predictions_for(params: &ModelParams) -> Predictions {
    let mass_up = mass_ratios(&params.k_up, params.length_scale, params.alpha);
    let mass_down = mass_ratios(&params.k_down, params.length_scale, params.alpha);
    let v = ckm_matrix(params.theta12, params.theta23, params.theta13, params.delta_cp);

    let mut ckm_mag = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            ckm_mag[i][j] = v[(i, j)].norm();
        }
    }

    Predictions {
        mass_up,
        mass_down,
        ckm_mag,
        jarlskog: jarlskog(&v),
    }
}

/// Format the full run summary (constants, fit status, predictions vs
/// experiment, best-fit parameters).
pub fn format_summary(outcome: &FitOutcome, pred: &Predictions, reference: &Reference) -> String {
    let mut out = String::new();
    let p = &outcome.params;
    let t0 = tau0();

    out.push_str("=== flavor - golden-ratio flavor model fit ===\n");
    out.push_str(&format!("phi = {PHI:.6}  tau0 = {:.3}{:+.3}i\n", t0.re, t0.im));
    out.push_str(&format!(
        "chi^2 = {:.4} | iterations = {} | converged = {}\n",
        outcome.chi_square, outcome.iterations, outcome.converged
    ));
    if !outcome.converged {
        out.push_str("(iteration cap reached; best point found so far is reported)\n");
    }

    out.push_str("\nMass ratios (predicted vs experimental):\n");
    out.push_str(&format!(
        "  m_u/m_t: {:.2e} (exp: {:.1e})\n",
        pred.mass_up[0], reference.u_over_t.value
    ));
    out.push_str(&format!(
        "  m_c/m_t: {:.4} (exp: {:.4})\n",
        pred.mass_up[1], reference.c_over_t.value
    ));
    out.push_str(&format!(
        "  m_d/m_b: {:.2e} (exp: {:.1e})\n",
        pred.mass_down[0], reference.d_over_b.value
    ));
    out.push_str(&format!(
        "  m_s/m_b: {:.4} (exp: {:.4})\n",
        pred.mass_down[1], reference.s_over_b.value
    ));

    out.push_str("\nCKM elements:\n");
    out.push_str(&format!(
        "  |V_us|: {:.5} (exp: {:.5})\n",
        pred.ckm_mag[0][1], reference.v_us.value
    ));
    out.push_str(&format!(
        "  |V_cb|: {:.5} (exp: {:.5})\n",
        pred.ckm_mag[1][2], reference.v_cb.value
    ));
    out.push_str(&format!(
        "  |V_ub|: {:.5} (exp: {:.5})\n",
        pred.ckm_mag[0][2], reference.v_ub.value
    ));

    out.push_str("\nMixing angles (radians):\n");
    out.push_str(&format!(
        "  theta12: {:.4} (exp: {:.4})\n",
        p.theta12, reference.theta12.value
    ));
    out.push_str(&format!(
        "  theta23: {:.4} (exp: {:.4})\n",
        p.theta23, reference.theta23.value
    ));
    out.push_str(&format!(
        "  theta13: {:.4} (exp: {:.4})\n",
        p.theta13, reference.theta13.value
    ));

    out.push_str("\nCP violation:\n");
    out.push_str(&format!(
        "  delta_CP: {:.1} deg (exp: {:.1} deg)\n",
        p.delta_cp.to_degrees(),
        reference.delta_cp.value.to_degrees()
    ));
    out.push_str(&format!("  Jarlskog J: {:.2e}\n", pred.jarlskog));

    out.push_str("\nObjective breakdown:\n");
    for term in residual_terms(p, reference) {
        let unit = if term.log_space { " (dex)" } else { "" };
        out.push_str(&format!(
            "  {:<9} chi^2 = {:>10.4}{unit}\n",
            term.name,
            term.chi_square()
        ));
    }

    out.push_str("\nBest-fit parameters:\n");
    out.push_str(&format!(
        "  k_u = [{:.2}, {:.2}, {:.2}]\n",
        p.k_up[0], p.k_up[1], p.k_up[2]
    ));
    out.push_str(&format!(
        "  k_d = [{:.2}, {:.2}, {:.2}]\n",
        p.k_down[0], p.k_down[1], p.k_down[2]
    ));
    out.push_str(&format!("  L0 = {:.2}\n", p.length_scale));
    out.push_str(&format!("  alpha = {:.2}\n", p.alpha));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::REFERENCE;
    use approx::assert_relative_eq;

    fn outcome_at_guess() -> FitOutcome {
        let params = ModelParams::initial_guess();
        let chi_square = crate::fit::chi_square(&params, &REFERENCE);
        FitOutcome {
            params,
            chi_square,
            iterations: 0,
            converged: false,
        }
    }

    #[test]
    fn predictions_normalize_third_generation() {
        let pred = predictions_for(&ModelParams::initial_guess());
        assert_eq!(pred.mass_up[2], 1.0);
        assert_eq!(pred.mass_down[2], 1.0);
    }

    #[test]
    fn predictions_jarlskog_matches_direct_computation() {
        let p = ModelParams::initial_guess();
        let pred = predictions_for(&p);
        let v = ckm_matrix(p.theta12, p.theta23, p.theta13, p.delta_cp);
        assert_relative_eq!(pred.jarlskog, jarlskog(&v), max_relative = 1e-15);
    }

    #[test]
    fn summary_contains_key_sections_and_numbers() {
        let outcome = outcome_at_guess();
        let pred = predictions_for(&outcome.params);
        let text = format_summary(&outcome, &pred, &REFERENCE);

        assert!(text.contains("chi^2"));
        assert!(text.contains("Mass ratios"));
        assert!(text.contains("|V_us|"));
        assert!(text.contains("Jarlskog"));
        assert!(text.contains("Objective breakdown"));
        assert!(text.contains("iteration cap reached"));
        // The experimental |V_us| literal must show up as-is.
        assert!(text.contains("0.22650"));
    }
}
