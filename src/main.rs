use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tdsim::constants::PhysicalConstants;
use tdsim::ingest::{self, Model};
use tdsim::{datasets, plot, tui};

/// tdsim - relativistic time dilation simulator
#[derive(Parser)]
#[command(
    name = "tdsim",
    about = "Time dilation under velocity, gravity, and particle decay models"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive TUI dashboard
    Tui,
    /// Generate the three datasets plus a combined summary as CSV
    Generate {
        /// Rows in the velocity dataset
        #[arg(long, default_value_t = 50)]
        speed_points: usize,
        /// Rows in the gravity dataset
        #[arg(long, default_value_t = 50_000)]
        gravity_points: usize,
        /// Rows in the muon decay dataset
        #[arg(long, default_value_t = 50_000)]
        decay_points: usize,
        /// Output directory for the CSV files
        #[arg(long, default_value = "data")]
        out_dir: PathBuf,
    },
    /// Run a model over an uploaded CSV table and export the results
    Upload {
        /// Input CSV (velocity/decay need a velocity_fraction column,
        /// gravity needs radius_rs)
        file: PathBuf,
        /// Which model to apply
        #[arg(long, value_enum)]
        model: Model,
        /// Result table destination
        #[arg(long, default_value = "result.csv")]
        out: PathBuf,
        /// Also render a chart of the results
        #[arg(long)]
        chart: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Tui) | None => tui::start()?,
        Some(Commands::Generate {
            speed_points,
            gravity_points,
            decay_points,
            out_dir,
        }) => run_generate(speed_points, gravity_points, decay_points, &out_dir)?,
        Some(Commands::Upload {
            file,
            model,
            out,
            chart,
        }) => run_upload(&file, model, &out, chart.as_deref())?,
    }

    Ok(())
}

fn run_generate(
    speed_points: usize,
    gravity_points: usize,
    decay_points: usize,
    out_dir: &std::path::Path,
) -> Result<()> {
    let k = PhysicalConstants::SI;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("cannot create {}", out_dir.display()))?;

    let speed = datasets::speed_dilation_rows(&k, speed_points)?;
    let path = out_dir.join("time_dilation_high_speed_particles.csv");
    datasets::write_speed_csv(&path, &speed)?;
    println!("✅ Dataset saved to {}", path.display());

    let grav = datasets::gravity_dilation_rows(&k, gravity_points)?;
    let path = out_dir.join("gravitational_time_dilation.csv");
    datasets::write_gravity_csv(&path, &grav)?;
    println!("✅ Dataset saved to {}", path.display());

    let dec = datasets::particle_decay_rows(&k, decay_points)?;
    let path = out_dir.join("particle_decay_time_dilation.csv");
    datasets::write_decay_csv(&path, &dec)?;
    println!("✅ Dataset saved to {}", path.display());

    let path = out_dir.join("combined_time_dilation_summary.csv");
    datasets::write_summary_csv(&path, &speed, &grav, &dec)?;
    println!("✅ Combined summary saved to {}", path.display());

    Ok(())
}

fn run_upload(
    file: &std::path::Path,
    model: Model,
    out: &std::path::Path,
    chart: Option<&std::path::Path>,
) -> Result<()> {
    let k = PhysicalConstants::SI;
    let inputs = ingest::read_input_column(file, model)?;

    match model {
        Model::Velocity => {
            let rows = datasets::speed_rows(&k, &inputs)?;
            datasets::write_speed_csv(out, &rows)?;
            if let Some(chart) = chart {
                plot::plot_speed(chart, &rows)?;
            }
        }
        Model::Gravity => {
            let rows = datasets::gravity_rows(&k, &inputs)?;
            datasets::write_gravity_csv(out, &rows)?;
            if let Some(chart) = chart {
                plot::plot_gravity(chart, &rows)?;
            }
        }
        Model::Decay => {
            let rows = datasets::decay_rows(&k, &inputs)?;
            datasets::write_decay_csv(out, &rows)?;
            if let Some(chart) = chart {
                plot::plot_decay(chart, &rows)?;
            }
        }
    }

    println!(
        "✅ {} rows computed with the {} model, written to {}",
        inputs.len(),
        model.label(),
        out.display()
    );
    if let Some(chart) = chart {
        println!("✅ Chart saved to {}", chart.display());
    }
    Ok(())
}
