//! Configuration management for the Game of Life driver

pub mod settings;

pub use settings::{
    CliOverrides, GridFormat, OutputConfig, OutputFormat, SeedConfig, Settings, SimulationConfig,
};
