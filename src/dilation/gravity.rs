//! Gravitational time dilation in the static Schwarzschild metric.
//!
//! One convention is used everywhere: the dilation factor is
//! `1 / sqrt(1 - Rs/r)`, the ratio of coordinate time to proper time as a
//! distant observer watches a clock at radius `r`. It is always >= 1,
//! diverges as `r` approaches `Rs` and tends to 1 far from the mass.

use super::DilationError;
use crate::constants::PhysicalConstants;

/// Schwarzschild radius Rs = 2GM / c^2 for a mass in kg.
pub fn schwarzschild_radius(k: &PhysicalConstants, mass: f64) -> f64 {
    debug_assert!(mass > 0.0, "mass must be positive");
    2.0 * k.g * mass / (k.c * k.c)
}

/// Dilation factor 1 / sqrt(1 - Rs/r), element-wise.
///
/// Every radius must lie strictly outside `rs`; one violating element fails
/// the whole call before any factor is computed.
pub fn gravitational_dilation(rs: f64, radii: &[f64]) -> Result<Vec<f64>, DilationError> {
    if let Some(&r) = radii.iter().find(|&&r| !(r > rs)) {
        return Err(DilationError::InvalidRadius { r, rs });
    }
    Ok(radii.iter().map(|&r| 1.0 / (1.0 - rs / r).sqrt()).collect())
}

/// One-element convenience over [`gravitational_dilation`].
pub fn gravitational_dilation_scalar(rs: f64, r: f64) -> Result<f64, DilationError> {
    Ok(gravitational_dilation(rs, &[r])?[0])
}

/// Dilated time at distances expressed in multiples of the Schwarzschild
/// radius of `mass` (2.0 means r = 2·Rs). Each multiple must exceed 1.
pub fn dilated_time_from_radius(
    k: &PhysicalConstants,
    r_multiples: &[f64],
    mass: f64,
    t_proper: f64,
) -> Result<Vec<f64>, DilationError> {
    let rs = schwarzschild_radius(k, mass);
    let radii: Vec<f64> = r_multiples.iter().map(|&m| m * rs).collect();
    let mut out = gravitational_dilation(rs, &radii)?;
    for t in &mut out {
        *t *= t_proper;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const K: PhysicalConstants = PhysicalConstants::SI;

    #[test]
    fn solar_schwarzschild_radius() {
        // ~2.95 km for one solar mass
        let rs = schwarzschild_radius(&K, K.m_sun);
        assert!((2900.0..3000.0).contains(&rs), "Rs = {rs}");
    }

    #[test]
    fn factor_sqrt_two_at_twice_rs() {
        let rs = schwarzschild_radius(&K, K.m_sun);
        let f = gravitational_dilation_scalar(rs, 2.0 * rs).unwrap();
        assert!((f - std::f64::consts::SQRT_2).abs() < 1e-12, "f = {f}");
    }

    #[test]
    fn rejects_radius_at_or_inside_horizon() {
        let rs = schwarzschild_radius(&K, K.m_sun);
        assert_eq!(
            gravitational_dilation_scalar(rs, rs),
            Err(DilationError::InvalidRadius { r: rs, rs })
        );
        assert!(gravitational_dilation_scalar(rs, 0.5 * rs).is_err());
        // one bad element poisons the batch
        assert!(gravitational_dilation(rs, &[2.0 * rs, 0.9 * rs]).is_err());
    }

    #[test]
    fn factor_tends_to_one_far_away() {
        let rs = schwarzschild_radius(&K, K.m_sun);
        let f = gravitational_dilation_scalar(rs, 1e9 * rs).unwrap();
        assert!(f > 1.0 && f < 1.0 + 1e-8, "f = {f}");
    }

    #[test]
    fn dilation_depends_only_on_radius_multiple() {
        let a = dilated_time_from_radius(&K, &[3.0], K.m_sun, 1.0).unwrap();
        let b = dilated_time_from_radius(&K, &[3.0], K.m_earth, 1.0).unwrap();
        assert!((a[0] - b[0]).abs() < 1e-12 * a[0]);
    }

    #[test]
    fn multiple_of_one_is_rejected() {
        assert!(dilated_time_from_radius(&K, &[1.0], K.m_sun, 1.0).is_err());
    }

    proptest! {
        #[test]
        fn factor_at_least_one(mult in 1.000_001..1e6f64) {
            let rs = schwarzschild_radius(&K, K.m_sun);
            let f = gravitational_dilation_scalar(rs, mult * rs).unwrap();
            prop_assert!(f >= 1.0);
            prop_assert!(f.is_finite());
        }

        #[test]
        fn factor_decreases_with_distance(mult in 1.01..1e3f64, extra in 0.01..10.0f64) {
            let rs = schwarzschild_radius(&K, K.m_sun);
            let near = gravitational_dilation_scalar(rs, mult * rs).unwrap();
            let far = gravitational_dilation_scalar(rs, (mult + extra) * rs).unwrap();
            prop_assert!(far < near);
        }
    }
}
