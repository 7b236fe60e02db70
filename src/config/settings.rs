//! Configuration settings for the Game of Life driver

use crate::game_of_life::Pattern;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub seed: SeedConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub generations: usize,
}

/// How the grid is populated before the first generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedConfig {
    /// Leave every cell dead
    Empty,
    /// Stamp one catalogue pattern with its top-left corner at (row, col)
    Pattern { name: String, row: usize, col: usize },
    StillLifes,
    Oscillators,
    /// Load the whole grid from a file; its size replaces rows/cols
    File { path: PathBuf, format: GridFormat },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridFormat {
    /// '1' alive, '0' dead
    Binary,
    /// ' ' alive, anything else dead
    AsciiArt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_report: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Visual,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                rows: 30,
                cols: 30,
                generations: 30,
            },
            seed: SeedConfig::Pattern {
                name: "glider".to_string(),
                row: 5,
                col: 5,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_report: false,
                output_directory: PathBuf::from("output/runs"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.rows == 0 || self.simulation.cols == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.simulation.rows,
                self.simulation.cols
            );
        }

        match &self.seed {
            SeedConfig::Pattern { name, .. } => {
                Pattern::by_name(name)?;
            }
            SeedConfig::File { path, .. } if !path.exists() => {
                anyhow::bail!("Seed grid file does not exist: {}", path.display());
            }
            _ => {}
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    ///
    /// `row`/`col` move the pattern seed, whether it comes from the overrides
    /// or from the config. They are rejected for any other seed.
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) -> Result<()> {
        if let Some(rows) = cli_overrides.rows {
            self.simulation.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.simulation.cols = cols;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(ref name) = cli_overrides.pattern {
            let (row, col) = match self.seed {
                SeedConfig::Pattern { row, col, .. } => (row, col),
                _ => (0, 0),
            };
            self.seed = SeedConfig::Pattern {
                name: name.clone(),
                row,
                col,
            };
        }
        if cli_overrides.row.is_some() || cli_overrides.col.is_some() {
            match &mut self.seed {
                SeedConfig::Pattern { row, col, .. } => {
                    *row = cli_overrides.row.unwrap_or(*row);
                    *col = cli_overrides.col.unwrap_or(*col);
                }
                _ => anyhow::bail!("--row/--col need a pattern seed, use --pattern or a pattern config"),
            }
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
            self.output.save_report = true;
        }
        Ok(())
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub generations: Option<usize>,
    pub pattern: Option<String>,
    pub row: Option<usize>,
    pub col: Option<usize>,
    pub output_dir: Option<PathBuf>,
}
