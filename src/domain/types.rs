//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they
//! can be:
//!
//! - used in-memory during fitting
//! - exported to JSON for later reuse
//! - reloaded for plotting or comparisons
//!
//! Everything here is plain numeric data; nothing has identity or lifecycle
//! beyond a single run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The 12 free parameters of the flavor model.
///
/// The optimizer works on a flat `Vec<f64>`; this struct is the named view
/// used by the forward model, the report, and the exports. The flat layout is
/// fixed: `[k_up[0..3], k_down[0..3], length_scale, alpha, θ12, θ23, θ13, δ]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Up-type modular weights, one per generation.
    pub k_up: [f64; 3],
    /// Down-type modular weights, one per generation.
    pub k_down: [f64; 3],
    /// Geodesic length scale `L₀` shared by both quark types.
    pub length_scale: f64,
    /// Scaling exponent `α` applied to the modular weights.
    pub alpha: f64,
    /// CKM mixing angles (radians).
    pub theta12: f64,
    pub theta23: f64,
    pub theta13: f64,
    /// CP-violating phase (radians).
    pub delta_cp: f64,
}

impl ModelParams {
    /// Dimension of the flat parameter vector.
    pub const DIM: usize = 12;

    /// The fixed literal starting point of every fit.
    pub fn initial_guess() -> Self {
        Self {
            k_up: [8.0, 4.0, 0.0],
            k_down: [6.0, 3.0, 0.0],
            length_scale: 5.0,
            alpha: 1.0,
            theta12: 0.228,
            theta23: 0.042,
            theta13: 0.0035,
            delta_cp: 1.20,
        }
    }

    /// Unpack a flat parameter vector in the fixed layout.
    ///
    /// # Panics
    /// Panics if `v` has fewer than [`Self::DIM`] elements. The optimizer
    /// always supplies full-length vectors.
    pub fn from_slice(v: &[f64]) -> Self {
        Self {
            k_up: [v[0], v[1], v[2]],
            k_down: [v[3], v[4], v[5]],
            length_scale: v[6],
            alpha: v[7],
            theta12: v[8],
            theta23: v[9],
            theta13: v[10],
            delta_cp: v[11],
        }
    }

    /// Flatten into the fixed layout.
    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.k_up[0],
            self.k_up[1],
            self.k_up[2],
            self.k_down[0],
            self.k_down[1],
            self.k_down[2],
            self.length_scale,
            self.alpha,
            self.theta12,
            self.theta23,
            self.theta13,
            self.delta_cp,
        ]
    }
}

/// One experimental target: a central value and the uncertainty used as the
/// normalization weight in the objective.
///
/// For mass ratios `sigma` is in dex (difference of base-10 logarithms); for
/// CKM magnitudes, angles, and the CP phase it is linear.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    pub value: f64,
    pub sigma: f64,
}

/// The fixed experimental reference dataset (GUT-scale values).
///
/// Immutable and process-wide; nothing writes it after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    /// `m_u / m_t` (σ in dex).
    pub u_over_t: Target,
    /// `m_c / m_t` (σ in dex).
    pub c_over_t: Target,
    /// `m_d / m_b` (σ in dex).
    pub d_over_b: Target,
    /// `m_s / m_b` (σ in dex).
    pub s_over_b: Target,
    pub v_us: Target,
    pub v_cb: Target,
    pub v_ub: Target,
    pub theta12: Target,
    pub theta23: Target,
    pub theta13: Target,
    pub delta_cp: Target,
}

/// The experimental numbers every fit is scored against.
pub const REFERENCE: Reference = Reference {
    u_over_t: Target { value: 1.1e-5, sigma: 0.7 },
    c_over_t: Target { value: 0.0035, sigma: 0.3 },
    d_over_b: Target { value: 1.0e-3, sigma: 0.7 },
    s_over_b: Target { value: 0.020, sigma: 0.4 },
    v_us: Target { value: 0.22650, sigma: 0.001 },
    v_cb: Target { value: 0.04053, sigma: 0.001 },
    v_ub: Target { value: 0.00361, sigma: 0.0005 },
    theta12: Target { value: 0.227, sigma: 0.001 },
    theta23: Target { value: 0.042, sigma: 0.001 },
    theta13: Target { value: 0.0037, sigma: 0.0001 },
    delta_cp: Target { value: 1.20, sigma: 0.1 },
};

/// Result of one optimization run.
///
/// The best point found is always present, even when the iteration cap was
/// reached first; `converged` tells the two cases apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitOutcome {
    /// Best-found parameters.
    pub params: ModelParams,
    /// Objective value at `params`.
    pub chi_square: f64,
    /// Iterations actually performed.
    pub iterations: u64,
    /// Whether the simplex met the tolerance before the iteration cap.
    pub converged: bool,
}

/// Model outputs evaluated at the best-fit parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predictions {
    /// Up-type mass ratios, normalized so the third generation is 1.
    pub mass_up: [f64; 3],
    /// Down-type mass ratios, normalized so the third generation is 1.
    pub mass_down: [f64; 3],
    /// `|V_ij|` magnitudes of the CKM matrix, row-major.
    pub ckm_mag: [[f64; 3]; 3],
    /// Jarlskog invariant `J`.
    pub jarlskog: f64,
}

/// A full run's configuration, derived from CLI flags plus defaults.
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Nelder–Mead iteration cap.
    pub max_iters: u64,
    /// Simplex standard-deviation tolerance for convergence.
    pub sd_tolerance: f64,

    /// Where to write the diagnostic figure (`None` disables it).
    pub figure: Option<PathBuf>,
    pub figure_width: u32,
    pub figure_height: u32,

    /// Where to write the best-fit parameter text file (`None` disables it).
    pub params_file: Option<PathBuf>,
    /// Where to write the JSON results archive (`None` disables it).
    pub results_file: Option<PathBuf>,
}

/// The JSON results archive (the portable record of a run).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsFile {
    pub tool: String,
    /// Golden ratio used by the run (for provenance).
    pub phi: f64,
    /// Fixed point `τ₀` as `(re, im)`.
    pub tau0: (f64, f64),
    pub outcome: FitOutcome,
    pub predictions: Predictions,
    pub reference: Reference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_roundtrip_flat_layout() {
        let p = ModelParams::initial_guess();
        let v = p.to_vec();
        assert_eq!(v.len(), ModelParams::DIM);
        assert_eq!(ModelParams::from_slice(&v), p);
    }

    #[test]
    fn initial_guess_matches_fixed_literals() {
        let v = ModelParams::initial_guess().to_vec();
        let expected = [
            8.0, 4.0, 0.0, 6.0, 3.0, 0.0, 5.0, 1.0, 0.228, 0.042, 0.0035, 1.20,
        ];
        assert_eq!(v.as_slice(), expected.as_slice());
    }

    #[test]
    fn reference_serializes_roundtrip() {
        let json = serde_json::to_string(&REFERENCE).unwrap();
        let back: Reference = serde_json::from_str(&json).unwrap();
        assert_eq!(back.v_us.value, REFERENCE.v_us.value);
        assert_eq!(back.delta_cp.sigma, REFERENCE.delta_cp.sigma);
    }
}
