//! The Life engine: owns the grid and advances it one generation at a time

use super::patterns::Pattern;
use super::rules::{Census, GameOfLifeRules};
use super::Grid;
use crate::error::LifeError;
use itertools::iproduct;

/// Owns a grid of fixed dimensions and evolves it
///
/// The next generation is computed into a second buffer and swapped in, so a
/// reader of [`Life::state`] only ever sees a fully settled generation.
#[derive(Debug, Clone)]
pub struct Life {
    grid: Grid,
    scratch: Grid,
    generation: usize,
}

impl Life {
    /// Create an engine with an all-dead grid
    pub fn new(rows: usize, cols: usize) -> Result<Self, LifeError> {
        let grid = Grid::new(rows, cols)?;
        Ok(Self::from_grid(grid))
    }

    /// Create an engine that starts from an existing grid
    pub fn from_grid(grid: Grid) -> Self {
        let scratch = grid.blank_like();
        Self {
            grid,
            scratch,
            generation: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Generations advanced since construction or the last clear/set
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set every cell dead
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Overwrite the grid with `rows`
    ///
    /// When the dimensions match the current grid the values are copied into
    /// the existing buffer. Otherwise the engine adopts the new grid and its
    /// dimensions.
    pub fn set_state(&mut self, rows: Vec<Vec<bool>>) -> Result<(), LifeError> {
        let grid = Grid::from_rows(rows)?;
        self.set_grid(grid);
        Ok(())
    }

    /// Same as [`Life::set_state`] for an already validated grid
    pub fn set_grid(&mut self, grid: Grid) {
        if self.grid.same_dimensions(&grid) {
            self.grid.cells_mut().copy_from_slice(grid.cells());
        } else {
            *self = Self::from_grid(grid);
        }
        self.generation = 0;
    }

    /// Borrow the current generation
    pub fn state(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current generation as nested rows
    pub fn snapshot(&self) -> Vec<Vec<bool>> {
        self.grid.to_rows()
    }

    /// Set a single cell
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<(), LifeError> {
        self.grid.set(row, col, alive)
    }

    /// Mark the cells of `pattern` alive with its top-left corner at the anchor
    ///
    /// Nothing is written unless every cell lands inside the grid.
    pub fn stamp(
        &mut self,
        pattern: &Pattern,
        anchor_row: usize,
        anchor_col: usize,
    ) -> Result<(), LifeError> {
        let targets: Vec<(usize, usize)> = pattern
            .cells
            .iter()
            .map(|&(dr, dc)| (anchor_row.saturating_add(dr), anchor_col.saturating_add(dc)))
            .collect();

        if let Some(&(row, col)) = targets.iter().find(|&&(r, c)| !self.grid.contains(r, c)) {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }

        for (row, col) in targets {
            // Bounds checked above
            let idx = self.grid.index(row, col);
            self.grid.cells_mut()[idx] = true;
        }
        Ok(())
    }

    /// Look a pattern up by name and stamp it
    pub fn stamp_named(
        &mut self,
        name: &str,
        anchor_row: usize,
        anchor_col: usize,
    ) -> Result<(), LifeError> {
        let pattern = Pattern::by_name(name)?;
        self.stamp(pattern, anchor_row, anchor_col)
    }

    /// Compute the next generation and make it current
    pub fn advance(&mut self) -> &Grid {
        let current = &self.grid;
        let next = self.scratch.cells_mut();
        for (row, col) in iproduct!(0..current.rows(), 0..current.cols()) {
            let idx = current.index(row, col);
            let neighbors = current.count_neighbors(row, col);
            next[idx] = GameOfLifeRules::should_be_alive(current.cells()[idx], neighbors);
        }

        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        &self.grid
    }

    /// Advance several generations
    pub fn advance_by(&mut self, generations: usize) -> &Grid {
        for _ in 0..generations {
            self.advance();
        }
        &self.grid
    }

    /// Count the transitions the next generation would apply, without advancing
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for (row, col) in iproduct!(0..self.rows(), 0..self.cols()) {
            let neighbors = self.grid.count_neighbors(row, col);
            census.record(GameOfLifeRules::transition(self.grid.get(row, col), neighbors));
        }
        census
    }
}
