//! The forward model: mass ratios, CKM matrix, and derived invariants.

pub mod flavor;

pub use flavor::*;
