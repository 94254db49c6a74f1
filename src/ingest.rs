//! Ingestion of user-uploaded CSV tables.
//!
//! Each model recognizes one input column; a file without it is rejected with
//! a message naming what every model expects, before any engine runs.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;

/// Which simulation a user-supplied table feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Model {
    /// Special relativity: time dilation from velocity
    Velocity,
    /// General relativity: time dilation near a Schwarzschild mass
    Gravity,
    /// Relativistic muon decay distance
    Decay,
}

impl Model {
    /// Column an uploaded CSV must contain for this model.
    pub fn expected_column(self) -> &'static str {
        match self {
            Model::Velocity | Model::Decay => "velocity_fraction",
            Model::Gravity => "radius_rs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Model::Velocity => "Special Relativity (Velocity)",
            Model::Gravity => "General Relativity (Gravity)",
            Model::Decay => "Relativistic Particle Decay",
        }
    }
}

/// Reads the model's input column from an uploaded CSV.
pub fn read_input_column(path: &Path, model: Model) -> Result<Vec<f64>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("cannot open {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let Some(idx) = headers
        .iter()
        .position(|h| h.trim() == model.expected_column())
    else {
        bail!(
            "{} has no `{}` column required by the {} model\n\
             expected columns by model:\n\
             - Special Relativity (Velocity): velocity_fraction\n\
             - General Relativity (Gravity): radius_rs\n\
             - Relativistic Particle Decay: velocity_fraction",
            path.display(),
            model.expected_column(),
            model.label(),
        );
    };

    let mut values = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("{}: bad record", path.display()))?;
        let field = record.get(idx).unwrap_or("");
        let value: f64 = field.trim().parse().with_context(|| {
            // +2: one for the header row, one for 1-based line numbers
            format!("{} line {}: `{}` is not a number", path.display(), i + 2, field)
        })?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_velocity_fraction_column() {
        let path = write_temp(
            "tdsim_ingest_ok.csv",
            "id,velocity_fraction\n1,0.5\n2,0.9\n",
        );
        let values = read_input_column(&path, Model::Velocity).unwrap();
        assert_eq!(values, vec![0.5, 0.9]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn gravity_wants_radius_rs() {
        let path = write_temp("tdsim_ingest_rs.csv", "radius_rs\n2.0\n5.5\n");
        let values = read_input_column(&path, Model::Gravity).unwrap();
        assert_eq!(values, vec![2.0, 5.5]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn unrecognized_columns_are_rejected_with_expectations() {
        let path = write_temp("tdsim_ingest_bad.csv", "speed,mass\n1,2\n");
        let err = read_input_column(&path, Model::Gravity).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("radius_rs"));
        assert!(msg.contains("velocity_fraction"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn non_numeric_cell_reports_line() {
        let path = write_temp(
            "tdsim_ingest_nan.csv",
            "velocity_fraction\n0.5\nfast\n",
        );
        let err = read_input_column(&path, Model::Decay).unwrap_err();
        assert!(format!("{err:#}").contains("line 3"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn decay_shares_the_velocity_column() {
        assert_eq!(Model::Decay.expected_column(), "velocity_fraction");
        assert_eq!(Model::Velocity.expected_column(), "velocity_fraction");
        assert_eq!(Model::Gravity.expected_column(), "radius_rs");
    }
}
