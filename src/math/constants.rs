//! Fixed mathematical constants.
//!
//! The model is built on the golden ratio `φ = (1+√5)/2`, which emerges from
//! the pentagonal symmetry of the underlying geometry, and on the fixed point
//! `τ₀ = e^{2πi/5}` of the modular curve. `τ₀` enters no formula; it is
//! reported alongside the fit for context.

use num_complex::Complex64;

/// Golden ratio, `(1 + √5) / 2`.
pub const PHI: f64 = 1.618033988749895;

/// Fixed point `τ₀ = e^{2πi/5}` on the hyperbolic plane.
pub fn tau0() -> Complex64 {
    Complex64::from_polar(1.0, 2.0 * std::f64::consts::PI / 5.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn phi_matches_closed_form() {
        assert_eq!(PHI, (1.0 + 5.0_f64.sqrt()) / 2.0);
    }

    #[test]
    fn phi_squared_is_phi_plus_one() {
        assert_relative_eq!(PHI * PHI, PHI + 1.0, max_relative = 1e-15);
    }

    #[test]
    fn tau0_lies_on_unit_circle() {
        assert_relative_eq!(tau0().norm(), 1.0, max_relative = 1e-15);
    }
}
