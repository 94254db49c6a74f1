//! PNG chart export via plotters.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::datasets::{DecayRow, GravityRow, SpeedRow};

/// Single red line chart over (x, y) pairs, 800x600 PNG.
pub fn line_chart(
    path: &Path,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    series: &[(f64, f64)],
) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_min = series.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let mut x_max = series.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let mut y_max = series.iter().map(|p| p.1).fold(0.0, f64::max).ceil();
    // degenerate ranges (empty or single-point logs) still need a valid axis
    let x_min = if x_min.is_finite() { x_min } else { 0.0 };
    if !x_max.is_finite() || x_max <= x_min {
        x_max = x_min + 1.0;
    }
    if y_max <= 0.0 {
        y_max = 1.0;
    }

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(LineSeries::new(series.iter().copied(), &RED))?;
    root.present()?;
    Ok(())
}

pub fn plot_speed(path: &Path, rows: &[SpeedRow]) -> Result<()> {
    let series: Vec<(f64, f64)> = rows
        .iter()
        .map(|r| (r.velocity_fraction, r.dilated_time_s))
        .collect();
    line_chart(
        path,
        "Time Dilation vs Velocity",
        "Velocity (fraction of c)",
        "Dilated Time (s)",
        &series,
    )
}

pub fn plot_gravity(path: &Path, rows: &[GravityRow]) -> Result<()> {
    let series: Vec<(f64, f64)> = rows
        .iter()
        .map(|r| (r.radius_rs, r.dilated_time_s))
        .collect();
    line_chart(
        path,
        "Time Dilation vs Distance from Black Hole",
        "Distance (multiples of Rs)",
        "Dilated Time (s)",
        &series,
    )
}

pub fn plot_decay(path: &Path, rows: &[DecayRow]) -> Result<()> {
    let series: Vec<(f64, f64)> = rows
        .iter()
        .map(|r| (r.velocity_fraction, r.distance_km))
        .collect();
    line_chart(
        path,
        "Muon Decay Distance vs Velocity",
        "Velocity (fraction of c)",
        "Distance Traveled (km)",
        &series,
    )
}
