//! Classification of an evolution history

use super::Grid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a pattern does over the recorded generations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Behavior {
    /// Every cell is dead from `generation` on
    Extinct { generation: usize },
    StillLife,
    Oscillator { period: usize },
    /// Repeats its shape every `period` generations, moved by `displacement` (rows, cols)
    Spaceship {
        period: usize,
        displacement: (isize, isize),
    },
    /// No repetition found within the recorded history
    Unsettled,
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::Extinct { generation } => write!(f, "Extinct (generation {})", generation),
            Behavior::StillLife => write!(f, "Still Life"),
            Behavior::Oscillator { period } => write!(f, "Oscillator (period {})", period),
            Behavior::Spaceship {
                period,
                displacement: (dr, dc),
            } => write!(f, "Spaceship (period {}, moves {:+} rows {:+} cols)", period, dr, dc),
            Behavior::Unsettled => write!(f, "Unsettled"),
        }
    }
}

/// Summary of an evolution history starting at generation 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityAnalysis {
    pub behavior: Behavior,
    pub generations: usize,
    pub initial_living: usize,
    pub final_living: usize,
    pub peak_living: usize,
}

impl StabilityAnalysis {
    /// Analyze a history where `history[0]` is the starting generation
    pub fn analyze(history: &[Grid]) -> Self {
        let living: Vec<usize> = history.iter().map(Grid::living_count).collect();

        Self {
            behavior: Self::classify(history),
            generations: history.len().saturating_sub(1),
            initial_living: living.first().copied().unwrap_or(0),
            final_living: living.last().copied().unwrap_or(0),
            peak_living: living.iter().copied().max().unwrap_or(0),
        }
    }

    fn classify(history: &[Grid]) -> Behavior {
        if let Some(generation) = history.iter().position(Grid::is_empty) {
            return Behavior::Extinct { generation };
        }
        if Self::check_still_life(history) {
            return Behavior::StillLife;
        }
        if let Some(period) = Self::check_oscillator(history) {
            return Behavior::Oscillator { period };
        }
        if let Some((period, displacement)) = Self::check_spaceship(history) {
            return Behavior::Spaceship {
                period,
                displacement,
            };
        }
        Behavior::Unsettled
    }

    fn check_still_life(history: &[Grid]) -> bool {
        history.len() >= 2 && history[0] == history[1]
    }

    /// Smallest period after which generation 0 reappears in place
    fn check_oscillator(history: &[Grid]) -> Option<usize> {
        (2..history.len()).find(|&period| history[period] == history[0])
    }

    /// Smallest period after which generation 0 reappears translated
    fn check_spaceship(history: &[Grid]) -> Option<(usize, (isize, isize))> {
        let (origin, shape) = normalized_shape(history.first()?);

        (1..history.len()).find_map(|period| {
            let (moved_origin, moved_shape) = normalized_shape(&history[period]);
            let displacement = (
                moved_origin.0 - origin.0,
                moved_origin.1 - origin.1,
            );
            (moved_shape == shape && displacement != (0, 0)).then_some((period, displacement))
        })
    }
}

/// Top-left corner of the live cells' bounding box and the cells relative to it
fn normalized_shape(grid: &Grid) -> ((isize, isize), Vec<(usize, usize)>) {
    let cells = grid.living_cells();
    let min_row = cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
    let min_col = cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
    let shape = cells
        .into_iter()
        .map(|(r, c)| (r - min_row, c - min_col))
        .collect();
    ((min_row as isize, min_col as isize), shape)
}

impl fmt::Display for StabilityAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Behavior: {}", self.behavior)?;
        writeln!(f, "Generations: {}", self.generations)?;
        write!(
            f,
            "Living Cells: {} → {} (peak {})",
            self.initial_living, self.final_living, self.peak_living
        )
    }
}
