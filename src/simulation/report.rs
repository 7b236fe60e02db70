//! Results of a simulation run

use crate::game_of_life::{Census, Grid, StabilityAnalysis};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// One settled generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: usize,
    pub living: usize,
    /// Transitions that lead to the next generation; absent for the last one
    pub census: Option<Census>,
    pub grid: Grid,
}

/// Every generation of a run plus its classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub records: Vec<GenerationRecord>,
    pub analysis: StabilityAnalysis,
    pub run_time: Duration,
}

impl RunReport {
    pub fn new(records: Vec<GenerationRecord>, run_time: Duration) -> Self {
        let history: Vec<Grid> = records.iter().map(|record| record.grid.clone()).collect();
        let analysis = StabilityAnalysis::analyze(&history);
        Self {
            records,
            analysis,
            run_time,
        }
    }

    pub fn initial_state(&self) -> Option<&Grid> {
        self.records.first().map(|record| &record.grid)
    }

    pub fn final_state(&self) -> Option<&Grid> {
        self.records.last().map(|record| &record.grid)
    }

    pub fn state_at_generation(&self, generation: usize) -> Option<&Grid> {
        self.records
            .iter()
            .find(|record| record.generation == generation)
            .map(|record| &record.grid)
    }

    /// Sum of all recorded censuses
    pub fn total_census(&self) -> Census {
        self.records
            .iter()
            .filter_map(|record| record.census)
            .fold(Census::default(), |mut total, census| {
                total.underpopulation += census.underpopulation;
                total.survival += census.survival;
                total.overpopulation += census.overpopulation;
                total.reproduction += census.reproduction;
                total
            })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let json = self.to_json().context("Failed to serialize run report")?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write run report: {}", path.as_ref().display()))?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read run report: {}", path.as_ref().display()))?;
        Self::from_json(&json).context("Failed to parse run report")
    }
}
