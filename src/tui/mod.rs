//! Interactive dashboard: pick a model, sweep its parameter with the arrow
//! keys, and export the session log as CSV plus a chart on exit.

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
};

use crate::constants::PhysicalConstants;
use crate::dilation::{decay, gravity, lorentz};
use crate::ingest::Model;
use crate::plot;

const SESSION_CSV: &str = "tui_session.csv";
const SESSION_PNG: &str = "tui_session.png";

/// Slider range per model: (min, max, step, start).
fn param_range(model: Model) -> (f64, f64, f64, f64) {
    match model {
        Model::Velocity => (0.1, 0.99, 0.01, 0.5),
        Model::Gravity => (1.1, 10.0, 0.1, 2.0),
        Model::Decay => (0.5, 0.999, 0.001, 0.98),
    }
}

#[derive(Debug, Clone, Copy)]
struct Snapshot {
    model: Model,
    input: f64,
    factor: f64,
    result: f64,
}

struct App {
    k: PhysicalConstants,
    model: Model,
    // one remembered slider position per model
    velocity_fraction: f64,
    radius_multiple: f64,
    decay_fraction: f64,
    log: Vec<Snapshot>,
}

impl App {
    fn new(k: PhysicalConstants) -> Self {
        App {
            k,
            model: Model::Velocity,
            velocity_fraction: param_range(Model::Velocity).3,
            radius_multiple: param_range(Model::Gravity).3,
            decay_fraction: param_range(Model::Decay).3,
            log: Vec::new(),
        }
    }

    fn param(&self) -> f64 {
        match self.model {
            Model::Velocity => self.velocity_fraction,
            Model::Gravity => self.radius_multiple,
            Model::Decay => self.decay_fraction,
        }
    }

    fn adjust(&mut self, direction: f64) {
        let (min, max, step, _) = param_range(self.model);
        let slot = match self.model {
            Model::Velocity => &mut self.velocity_fraction,
            Model::Gravity => &mut self.radius_multiple,
            Model::Decay => &mut self.decay_fraction,
        };
        *slot = (*slot + direction * step).clamp(min, max);
    }

    /// Evaluates the active model at the current parameter. The slider
    /// ranges keep every input inside the engine preconditions.
    fn snapshot(&self) -> Result<Snapshot> {
        let k = &self.k;
        let input = self.param();
        let (factor, result) = match self.model {
            Model::Velocity => {
                let gamma = lorentz::lorentz_gamma_scalar(k, input * k.c)?;
                (gamma, gamma)
            }
            Model::Gravity => {
                let rs = gravity::schwarzschild_radius(k, k.m_sun);
                let f = gravity::gravitational_dilation_scalar(rs, input * rs)?;
                (f, f)
            }
            Model::Decay => {
                let gamma = lorentz::lorentz_gamma_scalar(k, input * k.c)?;
                let d = decay::decay_distance_scalar(k, input)?;
                (gamma, d)
            }
        };
        Ok(Snapshot {
            model: self.model,
            input,
            factor,
            result,
        })
    }
}

pub fn start() -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    crossterm::terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(PhysicalConstants::SI);

    loop {
        let snap = app.snapshot()?;

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(2)
                .constraints(
                    [
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Length(3),
                    ]
                    .as_ref(),
                )
                .split(f.area());

            let model_text = format!(
                "Model: {}   [1] velocity  [2] gravity  [3] decay",
                snap.model.label()
            );
            let input_text = match snap.model {
                Model::Velocity | Model::Decay => {
                    format!("Velocity: {:.3}c   (←/→ to adjust)", snap.input)
                }
                Model::Gravity => {
                    format!("Distance from BH: {:.1} Rs   (←/→ to adjust)", snap.input)
                }
            };
            let factor_text = match snap.model {
                Model::Gravity => format!("Dilation factor: {:.4}", snap.factor),
                _ => format!("Lorentz factor (γ): {:.4}", snap.factor),
            };
            let result_text = match snap.model {
                Model::Decay => format!(
                    "Muon travel distance: {:.1} m ({:.2} km)",
                    snap.result,
                    snap.result / 1000.0
                ),
                _ => format!("Proper time: 1.0 s | Dilated time: {:.4} s", snap.result),
            };
            let hint_text = "q: quit and export CSV + chart".to_string();

            let blocks = vec![
                Paragraph::new(model_text).block(Block::default().borders(Borders::ALL)),
                Paragraph::new(input_text).block(Block::default().borders(Borders::ALL)),
                Paragraph::new(factor_text).block(Block::default().borders(Borders::ALL)),
                Paragraph::new(result_text).block(Block::default().borders(Borders::ALL)),
                Paragraph::new(hint_text).block(Block::default().borders(Borders::ALL)),
            ];

            for (i, b) in blocks.into_iter().enumerate() {
                f.render_widget(b, chunks[i]);
            }
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => app.model = Model::Velocity,
                    KeyCode::Char('2') => app.model = Model::Gravity,
                    KeyCode::Char('3') => app.model = Model::Decay,
                    KeyCode::Right => {
                        app.adjust(1.0);
                        let snap = app.snapshot()?;
                        app.log.push(snap);
                    }
                    KeyCode::Left => {
                        app.adjust(-1.0);
                        let snap = app.snapshot()?;
                        app.log.push(snap);
                    }
                    KeyCode::Char('q') => {
                        crossterm::terminal::disable_raw_mode()?;
                        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
                        terminal.show_cursor()?;

                        export_session(&app)?;
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

fn export_session(app: &App) -> Result<()> {
    export_csv(Path::new(SESSION_CSV), &app.log)?;
    println!("✅ Session log exported to {SESSION_CSV}");

    // chart whatever was swept on the model the session ended on
    let series: Vec<(f64, f64)> = app
        .log
        .iter()
        .filter(|s| s.model == app.model)
        .map(|s| (s.input, s.result))
        .collect();
    let (caption, x_desc, y_desc) = match app.model {
        Model::Velocity => (
            "Time Dilation vs Velocity",
            "Velocity (fraction of c)",
            "Dilated Time (s)",
        ),
        Model::Gravity => (
            "Time Dilation vs Distance from Black Hole",
            "Distance (multiples of Rs)",
            "Dilated Time (s)",
        ),
        Model::Decay => (
            "Muon Decay Distance vs Velocity",
            "Velocity (fraction of c)",
            "Distance (m)",
        ),
    };
    plot::line_chart(Path::new(SESSION_PNG), caption, x_desc, y_desc, &series)?;
    println!("✅ Chart saved to {SESSION_PNG}");
    Ok(())
}

fn export_csv(path: &Path, log: &[Snapshot]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    w.write_record(["model", "input", "factor", "result"])?;
    for s in log {
        let model = match s.model {
            Model::Velocity => "velocity",
            Model::Gravity => "gravity",
            Model::Decay => "decay",
        };
        let input = s.input.to_string();
        let factor = s.factor.to_string();
        let result = s.result.to_string();
        w.write_record([model, input.as_str(), factor.as_str(), result.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
