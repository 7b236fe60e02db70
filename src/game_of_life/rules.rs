//! Game of Life rules and per-generation transition census

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens to a single cell between two generations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Live cell with fewer than two live neighbors dies
    Underpopulation,
    /// Live cell with two or three live neighbors lives on
    Survival,
    /// Live cell with more than three live neighbors dies
    Overpopulation,
    /// Dead cell with exactly three live neighbors becomes alive
    Reproduction,
    /// Dead cell that stays dead
    Dormant,
}

impl Transition {
    /// State of the cell in the next generation
    pub fn is_alive(self) -> bool {
        matches!(self, Transition::Survival | Transition::Reproduction)
    }

    /// Whether the cell flips state
    pub fn changes_state(self) -> bool {
        matches!(
            self,
            Transition::Underpopulation | Transition::Overpopulation | Transition::Reproduction
        )
    }
}

/// Game of Life rules engine (B3/S23)
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Classify a cell given its current state and neighbor count
    pub fn transition(alive: bool, neighbor_count: u8) -> Transition {
        match (alive, neighbor_count) {
            (true, 0..=1) => Transition::Underpopulation,
            (true, 2..=3) => Transition::Survival,
            (true, _) => Transition::Overpopulation,
            (false, 3) => Transition::Reproduction,
            (false, _) => Transition::Dormant,
        }
    }

    /// Check if a cell should be alive in the next generation
    pub fn should_be_alive(alive: bool, neighbor_count: u8) -> bool {
        matches!((alive, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }
}

/// How many cells undergo each transition in one generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub underpopulation: usize,
    pub survival: usize,
    pub overpopulation: usize,
    pub reproduction: usize,
}

impl Census {
    pub fn record(&mut self, transition: Transition) {
        match transition {
            Transition::Underpopulation => self.underpopulation += 1,
            Transition::Survival => self.survival += 1,
            Transition::Overpopulation => self.overpopulation += 1,
            Transition::Reproduction => self.reproduction += 1,
            Transition::Dormant => {}
        }
    }

    /// Number of cells that die
    pub fn deaths(&self) -> usize {
        self.underpopulation + self.overpopulation
    }

    /// Number of cells that flip state
    pub fn changes(&self) -> usize {
        self.deaths() + self.reproduction
    }

    /// Number of cells alive afterwards
    pub fn alive_after(&self) -> usize {
        self.survival + self.reproduction
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "underpopulation {}, survival {}, overpopulation {}, reproduction {}",
            self.underpopulation, self.survival, self.overpopulation, self.reproduction
        )
    }
}
