//! Relativistic particle decay: how far a muon travels before its dilated
//! lifetime elapses.

use super::DilationError;
use super::lorentz::lorentz_gamma;
use crate::constants::PhysicalConstants;

/// Lab-frame travel distance d = v · γ(v) · τ for velocities given as
/// fractions of c.
///
/// Validation is delegated to the Lorentz engine: a fraction outside `[0, 1)`
/// maps to a velocity outside `[0, c)` and is rejected there.
pub fn decay_distance(
    k: &PhysicalConstants,
    velocity_fractions: &[f64],
) -> Result<Vec<f64>, DilationError> {
    let velocities: Vec<f64> = velocity_fractions.iter().map(|&f| f * k.c).collect();
    let gamma = lorentz_gamma(k, &velocities)?;
    Ok(velocities
        .iter()
        .zip(&gamma)
        .map(|(&v, &g)| v * g * k.muon_lifetime)
        .collect())
}

/// One-element convenience over [`decay_distance`].
pub fn decay_distance_scalar(k: &PhysicalConstants, f: f64) -> Result<f64, DilationError> {
    Ok(decay_distance(k, &[f])?[0])
}
