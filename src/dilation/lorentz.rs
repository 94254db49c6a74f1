//! Special-relativistic (velocity) time dilation.

use super::DilationError;
use crate::constants::PhysicalConstants;

/// Lorentz factor γ = 1 / sqrt(1 - (v/c)^2), element-wise.
///
/// Every velocity must lie in `[0, c)`. Validation covers the whole slice
/// before anything is computed; a NaN velocity also fails the range check.
pub fn lorentz_gamma(k: &PhysicalConstants, velocities: &[f64]) -> Result<Vec<f64>, DilationError> {
    if let Some(&v) = velocities.iter().find(|&&v| !(v >= 0.0 && v < k.c)) {
        return Err(DilationError::InvalidVelocity { v });
    }
    Ok(velocities
        .iter()
        .map(|&v| {
            let beta = v / k.c;
            1.0 / (1.0 - beta * beta).sqrt()
        })
        .collect())
}

/// One-element convenience over [`lorentz_gamma`].
pub fn lorentz_gamma_scalar(k: &PhysicalConstants, v: f64) -> Result<f64, DilationError> {
    Ok(lorentz_gamma(k, &[v])?[0])
}

/// Dilated time t' = γ(v) · t_proper for each velocity.
///
/// The result has one entry per velocity, in input order.
pub fn dilated_time(
    k: &PhysicalConstants,
    velocities: &[f64],
    t_proper: f64,
) -> Result<Vec<f64>, DilationError> {
    let mut out = lorentz_gamma(k, velocities)?;
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

    fn close(a: f64, b: f64, rtol: f64) -> bool {
        (a - b).abs() <= rtol * b.abs().max(1.0)
    }

    #[test]
    fn gamma_is_one_at_rest() {
        assert_eq!(lorentz_gamma_scalar(&K, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn known_values() {
        let g = lorentz_gamma_scalar(&K, 0.6 * K.c).unwrap();
        assert!(close(g, 1.25, 1e-3), "γ(0.6c) = {g}");
        let g = lorentz_gamma_scalar(&K, 0.8 * K.c).unwrap();
        assert!(close(g, 5.0 / 3.0, 1e-12), "γ(0.8c) = {g}");
    }

    #[test]
    fn rejects_speed_of_light_and_beyond() {
        assert_eq!(
            lorentz_gamma_scalar(&K, K.c),
            Err(DilationError::InvalidVelocity { v: K.c })
        );
        assert!(lorentz_gamma_scalar(&K, 1.5 * K.c).is_err());
    }

    #[test]
    fn rejects_negative_velocity() {
        assert!(lorentz_gamma_scalar(&K, -0.5 * K.c).is_err());
    }

    #[test]
    fn batch_fails_atomically() {
        // second element is invalid, so the whole call errors
        let err = lorentz_gamma(&K, &[0.5 * K.c, 2.0 * K.c, 0.1 * K.c]).unwrap_err();
        assert_eq!(err, DilationError::InvalidVelocity { v: 2.0 * K.c });
    }

    #[test]
    fn dilated_time_scales_gamma() {
        let v = [0.0, 0.6 * K.c];
        let t = dilated_time(&K, &v, 10.0).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t[0], 10.0);
        assert!(close(t[1], 12.5, 1e-3));
    }

    #[test]
    fn batch_matches_scalar_calls() {
        let vs: Vec<f64> = (0..100).map(|i| i as f64 / 100.0 * K.c).collect();
        let batch = lorentz_gamma(&K, &vs).unwrap();
        for (&v, &g) in vs.iter().zip(&batch) {
            let single = lorentz_gamma_scalar(&K, v).unwrap();
            assert!((single - g).abs() <= 1e-10 * g);
        }
    }

    #[test]
    fn engines_run_with_alternative_constants() {
        let slow_light = PhysicalConstants {
            c: 10.0,
            ..PhysicalConstants::SI
        };
        let g = lorentz_gamma_scalar(&slow_light, 6.0).unwrap();
        assert!(close(g, 1.25, 1e-12));
        assert!(lorentz_gamma_scalar(&slow_light, 10.0).is_err());
    }

    proptest! {
        #[test]
        fn gamma_at_least_one_and_finite(frac in 0.0..0.999_999f64) {
            let g = lorentz_gamma_scalar(&K, frac * K.c).unwrap();
            prop_assert!(g >= 1.0);
            prop_assert!(g.is_finite());
        }

        #[test]
        fn gamma_strictly_increasing(f1 in 0.0..0.99f64, step in 1e-6..0.009f64) {
            let g1 = lorentz_gamma_scalar(&K, f1 * K.c).unwrap();
            let g2 = lorentz_gamma_scalar(&K, (f1 + step) * K.c).unwrap();
            prop_assert!(g2 > g1);
        }

        #[test]
        fn repeated_calls_are_identical(frac in 0.0..0.999f64) {
            let v = frac * K.c;
            let a = lorentz_gamma_scalar(&K, v).unwrap();
            let b = lorentz_gamma_scalar(&K, v).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
