//! Game of Life core functionality

pub mod analysis;
pub mod engine;
pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;

pub use analysis::{Behavior, StabilityAnalysis};
pub use engine::Life;
pub use grid::Grid;
pub use io::{create_example_grids, load_grid, load_grid_from_file, parse_ascii_art, save_grid_to_file};
pub use patterns::{Pattern, PatternKind, PatternSet};
pub use rules::{Census, GameOfLifeRules, Transition};
