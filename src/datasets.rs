//! Batch dataset generation: the three simulations evaluated over
//! linearly-spaced input ranges and written out as CSV tables.

use std::path::Path;

use anyhow::{Context, Result};

use crate::constants::PhysicalConstants;
use crate::dilation::{DilationError, decay, gravity, lorentz};

/// Proper time used by the speed and gravity tables (one local second).
const T_PROPER: f64 = 1.0;

/// `n` evenly spaced values from `start` to `stop`, endpoints included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// One row of the velocity time-dilation table.
#[derive(Debug, Clone, Copy)]
pub struct SpeedRow {
    pub velocity_fraction: f64,
    pub velocity_ms: f64,
    pub gamma: f64,
    pub proper_time_s: f64,
    pub dilated_time_s: f64,
    pub delta_time_s: f64,
}

/// One row of the gravitational time-dilation table.
#[derive(Debug, Clone, Copy)]
pub struct GravityRow {
    pub radius_m: f64,
    pub radius_rs: f64,
    pub proper_time_s: f64,
    pub dilated_time_s: f64,
    pub delta_time_s: f64,
}

/// One row of the muon decay table.
#[derive(Debug, Clone, Copy)]
pub struct DecayRow {
    pub velocity_fraction: f64,
    pub velocity_ms: f64,
    pub gamma: f64,
    pub proper_lifetime_s: f64,
    pub dilated_lifetime_s: f64,
    pub distance_m: f64,
    pub distance_km: f64,
}

/// Speed table for caller-supplied velocity fractions.
pub fn speed_rows(
    k: &PhysicalConstants,
    fractions: &[f64],
) -> Result<Vec<SpeedRow>, DilationError> {
    let velocities: Vec<f64> = fractions.iter().map(|&f| f * k.c).collect();
    let gamma = lorentz::lorentz_gamma(k, &velocities)?;
    Ok(fractions
        .iter()
        .zip(&velocities)
        .zip(&gamma)
        .map(|((&f, &v), &g)| SpeedRow {
            velocity_fraction: f,
            velocity_ms: v,
            gamma: g,
            proper_time_s: T_PROPER,
            dilated_time_s: g * T_PROPER,
            delta_time_s: g * T_PROPER - T_PROPER,
        })
        .collect())
}

/// Speed table over `n` fractions from 0.1c to 0.99c.
pub fn speed_dilation_rows(k: &PhysicalConstants, n: usize) -> Result<Vec<SpeedRow>, DilationError> {
    speed_rows(k, &linspace(0.1, 0.99, n))
}

/// Gravity table for caller-supplied distances in Schwarzschild radii,
/// around a one-solar-mass black hole.
pub fn gravity_rows(
    k: &PhysicalConstants,
    r_multiples: &[f64],
) -> Result<Vec<GravityRow>, DilationError> {
    let rs = gravity::schwarzschild_radius(k, k.m_sun);
    let radii: Vec<f64> = r_multiples.iter().map(|&m| m * rs).collect();
    let factors = gravity::gravitational_dilation(rs, &radii)?;
    Ok(radii
        .iter()
        .zip(r_multiples)
        .zip(&factors)
        .map(|((&r, &mult), &f)| GravityRow {
            radius_m: r,
            radius_rs: mult,
            proper_time_s: T_PROPER,
            dilated_time_s: f * T_PROPER,
            delta_time_s: f * T_PROPER - T_PROPER,
        })
        .collect())
}

/// Gravity table over `n` radii from 1.01·Rs to 10·Rs.
pub fn gravity_dilation_rows(
    k: &PhysicalConstants,
    n: usize,
) -> Result<Vec<GravityRow>, DilationError> {
    gravity_rows(k, &linspace(1.01, 10.0, n))
}

/// Decay table for caller-supplied velocity fractions.
pub fn decay_rows(
    k: &PhysicalConstants,
    fractions: &[f64],
) -> Result<Vec<DecayRow>, DilationError> {
    let velocities: Vec<f64> = fractions.iter().map(|&f| f * k.c).collect();
    let gamma = lorentz::lorentz_gamma(k, &velocities)?;
    let distances = decay::decay_distance(k, fractions)?;
    Ok(fractions
        .iter()
        .zip(&velocities)
        .zip(&gamma)
        .zip(&distances)
        .map(|(((&f, &v), &g), &d)| DecayRow {
            velocity_fraction: f,
            velocity_ms: v,
            gamma: g,
            proper_lifetime_s: k.muon_lifetime,
            dilated_lifetime_s: g * k.muon_lifetime,
            distance_m: d,
            distance_km: d / 1000.0,
        })
        .collect())
}

/// Decay table over `n` fractions from 0.1c to 0.999c.
pub fn particle_decay_rows(k: &PhysicalConstants, n: usize) -> Result<Vec<DecayRow>, DilationError> {
    decay_rows(k, &linspace(0.1, 0.999, n))
}

pub fn write_speed_csv(path: &Path, rows: &[SpeedRow]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    w.write_record([
        "velocity_fraction",
        "velocity_ms",
        "gamma",
        "proper_time_s",
        "dilated_time_s",
        "delta_time_s",
    ])?;
    for r in rows {
        w.write_record([
            r.velocity_fraction.to_string(),
            r.velocity_ms.to_string(),
            r.gamma.to_string(),
            r.proper_time_s.to_string(),
            r.dilated_time_s.to_string(),
            r.delta_time_s.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_gravity_csv(path: &Path, rows: &[GravityRow]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    w.write_record([
        "radius_m",
        "radius_rs",
        "proper_time_s",
        "dilated_time_s",
        "delta_time_s",
    ])?;
    for r in rows {
        w.write_record([
            r.radius_m.to_string(),
            r.radius_rs.to_string(),
            r.proper_time_s.to_string(),
            r.dilated_time_s.to_string(),
            r.delta_time_s.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_decay_csv(path: &Path, rows: &[DecayRow]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    w.write_record([
        "velocity_fraction",
        "velocity_ms",
        "gamma",
        "proper_lifetime_s",
        "dilated_lifetime_s",
        "distance_m",
        "distance_km",
    ])?;
    for r in rows {
        w.write_record([
            r.velocity_fraction.to_string(),
            r.velocity_ms.to_string(),
            r.gamma.to_string(),
            r.proper_lifetime_s.to_string(),
            r.dilated_lifetime_s.to_string(),
            r.distance_m.to_string(),
            r.distance_km.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Side-by-side summary of the three simulations.
///
/// The tables can have different lengths (gravity and decay default to far
/// more rows than speed); longer tables are strided down to the shortest
/// length so each summary row pairs comparable sample positions.
pub fn write_summary_csv(
    path: &Path,
    speed: &[SpeedRow],
    grav: &[GravityRow],
    dec: &[DecayRow],
) -> Result<()> {
    let n = speed.len().min(grav.len()).min(dec.len());
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    w.write_record([
        "velocity_fraction",
        "gamma",
        "speed_delta_time_s",
        "decay_distance_km",
        "radius_rs",
        "gravity_delta_time_s",
    ])?;
    if n == 0 {
        w.flush()?;
        return Ok(());
    }
    for i in 0..n {
        let s = speed[i * speed.len() / n];
        let g = grav[i * grav.len() / n];
        let d = dec[i * dec.len() / n];
        w.write_record([
            s.velocity_fraction.to_string(),
            s.gamma.to_string(),
            s.delta_time_s.to_string(),
            d.distance_km.to_string(),
            g.radius_rs.to_string(),
            g.delta_time_s.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
