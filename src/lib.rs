//! Conway's Game of Life
//!
//! This library provides the Life engine (a grid that advances one synchronous
//! generation at a time), a catalogue of named seed patterns, and the
//! configuration and reporting used by the console driver.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{Grid, Life, Pattern};
pub use simulation::{RunReport, Simulation};

use anyhow::Result;

/// Main entry point for running a configured simulation
pub fn run_simulation(settings: Settings) -> Result<RunReport> {
    let mut simulation = Simulation::new(settings)?;
    Ok(simulation.run())
}
