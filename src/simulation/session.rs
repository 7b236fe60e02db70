//! A configured Game of Life run

use super::{GenerationRecord, RunReport};
use crate::config::{SeedConfig, Settings};
use crate::game_of_life::{load_grid, Life, PatternSet};
use anyhow::{Context, Result};
use std::time::Instant;

/// Engine seeded from settings, ready to run
pub struct Simulation {
    settings: Settings,
    life: Life,
}

impl Simulation {
    /// Build and seed the engine described by `settings`
    pub fn new(settings: Settings) -> Result<Self> {
        let mut life = Life::new(settings.simulation.rows, settings.simulation.cols)
            .context("Failed to create the grid")?;

        match &settings.seed {
            SeedConfig::Empty => {}
            SeedConfig::Pattern { name, row, col } => {
                life.stamp_named(name, *row, *col)
                    .with_context(|| format!("Failed to place pattern '{}' at ({}, {})", name, row, col))?;
            }
            SeedConfig::StillLifes => {
                PatternSet::StillLifes
                    .stamp_onto(&mut life)
                    .context("Failed to lay out the still lifes")?;
            }
            SeedConfig::Oscillators => {
                PatternSet::Oscillators
                    .stamp_onto(&mut life)
                    .context("Failed to lay out the oscillators")?;
            }
            SeedConfig::File { path, format } => {
                let grid = load_grid(path, *format).context("Failed to load seed grid")?;
                life.set_grid(grid);
            }
        }

        Ok(Self { settings, life })
    }

    /// Run an already prepared engine (useful for testing)
    pub fn with_engine(settings: Settings, life: Life) -> Self {
        Self { settings, life }
    }

    /// Advance the configured number of generations
    pub fn run(&mut self) -> RunReport {
        self.run_with(|_| {})
    }

    /// Advance the configured number of generations, handing every settled
    /// generation (including the starting one) to `observer`
    pub fn run_with<F>(&mut self, mut observer: F) -> RunReport
    where
        F: FnMut(&GenerationRecord),
    {
        let start_time = Instant::now();
        let generations = self.settings.simulation.generations;
        let mut records = Vec::with_capacity(generations + 1);

        for step in 0..=generations {
            if step > 0 {
                self.life.advance();
            }
            let census = (step < generations).then(|| self.life.census());
            let record = GenerationRecord {
                generation: self.life.generation(),
                living: self.life.state().living_count(),
                census,
                grid: self.life.state().clone(),
            };
            observer(&record);
            records.push(record);
        }

        RunReport::new(records, start_time.elapsed())
    }

    pub fn life(&self) -> &Life {
        &self.life
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridFormat;
    use crate::game_of_life::{patterns, Behavior};
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn settings_with(seed: SeedConfig, rows: usize, cols: usize, generations: usize) -> Settings {
        let mut settings = Settings::default();
        settings.seed = seed;
        settings.simulation.rows = rows;
        settings.simulation.cols = cols;
        settings.simulation.generations = generations;
        settings
    }

    #[test]
    fn test_default_run_is_glider() {
        let mut simulation = Simulation::new(Settings::default()).unwrap();
        assert_eq!(simulation.life().state().living_count(), 5);

        let report = simulation.run();
        assert_eq!(report.records.len(), 31);
        assert_eq!(report.records[0].generation, 0);
        assert_eq!(report.records[30].generation, 30);
        assert_eq!(
            report.analysis.behavior,
            Behavior::Spaceship {
                period: 4,
                displacement: (1, 1)
            }
        );
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let settings = settings_with(SeedConfig::Oscillators, 20, 80, 4);
        let mut simulation = Simulation::new(settings).unwrap();
        let mut seen = Vec::new();
        let report = simulation.run_with(|record| seen.push(record.generation));

        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert!(report.records[..4].iter().all(|r| r.census.is_some()));
        assert!(report.records[4].census.is_none());
    }

    #[test]
    fn test_still_life_seed() {
        let settings = settings_with(SeedConfig::StillLifes, 10, 40, 2);
        let report = Simulation::new(settings).unwrap().run();
        assert_eq!(report.analysis.behavior, Behavior::StillLife);
    }

    #[test]
    fn test_pattern_that_does_not_fit() {
        let settings = settings_with(
            SeedConfig::Pattern {
                name: "gosper-glider-gun".to_string(),
                row: 0,
                col: 0,
            },
            20,
            20,
            1,
        );
        assert!(Simulation::new(settings).is_err());

        let settings = settings_with(SeedConfig::Oscillators, 5, 20, 1);
        assert!(Simulation::new(settings).is_err());
    }

    #[test]
    fn test_file_seed_replaces_dimensions() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("blinker.txt");
        std::fs::write(&path, "00000\n00000\n01110\n00000\n00000\n").unwrap();

        let settings = settings_with(
            SeedConfig::File {
                path: PathBuf::from(&path),
                format: GridFormat::Binary,
            },
            30,
            30,
            4,
        );
        let mut simulation = Simulation::new(settings).unwrap();
        assert_eq!((simulation.life().rows(), simulation.life().cols()), (5, 5));
        assert_eq!(
            simulation.run().analysis.behavior,
            Behavior::Oscillator { period: 2 }
        );
    }

    #[test]
    fn test_with_engine() {
        let mut life = Life::new(6, 6).unwrap();
        life.stamp(&patterns::UNDERPOPULATION, 1, 1).unwrap();
        let report = Simulation::with_engine(settings_with(SeedConfig::Empty, 6, 6, 2), life).run();
        assert_eq!(report.analysis.behavior, Behavior::Extinct { generation: 1 });
        assert_eq!(report.records[0].census.unwrap().underpopulation, 4);
    }
}
