#![deny(unsafe_code)]
//! Headless CLI driver for the driftfield particle simulation.
//!
//! Subcommands:
//! - `run` — tick the simulation N times, render every frame into a trail
//!   canvas, write the final PNG
//! - `list` — print available curve families

mod error;

use clap::{Parser, Subcommand};
use driftfield_core::{CurveFamily, SimConfig, Simulation, SteeringMode};
use driftfield_render::PixelCanvas;
use error::CliError;
use glam::DVec2;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "driftfield", about = "Flow-field particle simulation CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the simulation for N ticks and write a PNG of the final frame.
    Run {
        /// Simulation area width.
        #[arg(short = 'W', long, default_value_t = 800.0)]
        width: f64,

        /// Simulation area height.
        #[arg(short = 'H', long, default_value_t = 600.0)]
        height: f64,

        /// Particle population size.
        #[arg(short, long, default_value_t = 2000)]
        particles: usize,

        /// Number of simulation ticks.
        #[arg(short, long, default_value_t = 600)]
        ticks: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Flow-grid cell size in area units.
        #[arg(long, default_value_t = 100.0)]
        cell_size: f64,

        /// Home particles toward the area center instead of the flow field.
        #[arg(long)]
        follow: bool,

        /// Redirect particles onto the collective curve.
        #[arg(long)]
        collective: bool,

        /// Curve family for collective mode (see `list`).
        #[arg(long, default_value = "star")]
        curve: String,

        /// Particle size multiplier (0.5 to 5).
        #[arg(long, default_value_t = 1.0)]
        size_scale: f64,

        /// Skip the decorative polygons.
        #[arg(long)]
        no_shapes: bool,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
    /// List available curve families.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let families = CurveFamily::list_names();
            if cli.json {
                let info = serde_json::json!({ "curves": families });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Curve families:");
                for name in families {
                    println!("  {name}");
                }
            }
        }
        Command::Run {
            width,
            height,
            particles,
            ticks,
            seed,
            cell_size,
            follow,
            collective,
            curve,
            size_scale,
            no_shapes,
            output,
        } => {
            let family = CurveFamily::from_name(&curve)?;
            let config = SimConfig {
                width,
                height,
                particles,
                cell_size,
                seed,
                ..SimConfig::default()
            };

            let mut sim = Simulation::new(&config)?;
            let modes = sim.modes_mut();
            modes.set_collective(collective);
            modes.set_curve_family(family);
            modes.set_shapes(!no_shapes);
            if follow {
                modes.set_steering(SteeringMode::FollowPoint);
            }
            sim.handle_event(&driftfield_core::InputEvent::SetSizeScale(size_scale))?;

            let mut canvas = PixelCanvas::new(width as usize, height as usize)?;
            // Without a live pointer the follow target is the area center.
            let pointer = DVec2::new(width / 2.0, height / 2.0);
            for _ in 0..ticks {
                sim.tick(pointer);
                sim.render(&mut canvas);
            }

            driftfield_render::snapshot::write_png(&canvas, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "particles": particles,
                    "ticks": ticks,
                    "seed": seed,
                    "collective": collective,
                    "curve": family.name(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "simulated {particles} particles ({width}x{height}, {ticks} ticks, seed {seed}) -> {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
