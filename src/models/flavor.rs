//! Forward model evaluation.
//!
//! The fit relies on three primitive operations:
//! - predict normalized mass ratios for one quark type (for the objective)
//! - build the CKM matrix from angles and phase (for the objective)
//! - compute the Jarlskog invariant from a CKM matrix (for reporting)
//!
//! Each formula is defined exactly once here. All functions are total over
//! real inputs: `φ^x` and `exp(x)` never produce a negative or complex value,
//! so degenerate parameters score poorly instead of failing.

use nalgebra::Matrix3;
use num_complex::Complex64;

use crate::math::PHI;

/// Geometric generation exponents `n_i` in `exp(-φ^{n_i} · L₀)`.
///
/// The three generations correspond to geodesic lengths scaling as φ³, φ², φ.
const GEN_EXPONENTS: [i32; 3] = [3, 2, 1];

/// Normalized mass ratios for one quark type.
///
/// `m_i = φ^{-k_i·α} · exp(-φ^{n_i} · L₀)` with `n = [3, 2, 1]`, divided by
/// the third-generation value, so `result[2] == 1.0` exactly by construction.
pub fn mass_ratios(k: &[f64; 3], length_scale: f64, alpha: f64) -> [f64; 3] {
    let mut m = [0.0; 3];
    for (i, (&ki, &n)) in k.iter().zip(GEN_EXPONENTS.iter()).enumerate() {
        let prefactor = PHI.powf(-ki * alpha);
        let exponential = (-PHI.powi(n) * length_scale).exp();
        m[i] = prefactor * exponential;
    }
    let heaviest = m[2];
    [m[0] / heaviest, m[1] / heaviest, m[2] / heaviest]
}

/// CKM matrix in the standard rotation-and-phase parameterization.
///
/// Unitarity is a property of the parameterization's algebra, not something
/// this function checks at runtime.
pub fn ckm_matrix(theta12: f64, theta23: f64, theta13: f64, delta_cp: f64) -> Matrix3<Complex64> {
    let (s12, c12) = theta12.sin_cos();
    let (s23, c23) = theta23.sin_cos();
    let (s13, c13) = theta13.sin_cos();
    let e_pos = Complex64::from_polar(1.0, delta_cp);
    let e_neg = Complex64::from_polar(1.0, -delta_cp);

    let re = |x: f64| Complex64::new(x, 0.0);

    Matrix3::new(
        re(c12 * c13),
        re(s12 * c13),
        s13 * e_neg,
        re(-s12 * c23) - c12 * s23 * s13 * e_pos,
        re(c12 * c23) - s12 * s23 * s13 * e_pos,
        re(s23 * c13),
        re(s12 * s23) - c12 * c23 * s13 * e_pos,
        re(-c12 * s23) - s12 * c23 * s13 * e_pos,
        re(c23 * c13),
    )
}

/// Jarlskog invariant `J = Im(V₀₀ · V₀₁* · V₁₀* · V₁₁)`.
///
/// Display-only diagnostic; carries no enforced invariant.
pub fn jarlskog(v: &Matrix3<Complex64>) -> f64 {
    (v[(0, 0)] * v[(0, 1)].conj() * v[(1, 0)].conj() * v[(1, 1)]).im
}
