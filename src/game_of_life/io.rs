//! File I/O operations for Game of Life grids

use super::patterns::CATALOGUE;
use super::Grid;
use crate::config::GridFormat;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a grid from a file in the given format
pub fn load_grid<P: AsRef<Path>>(path: P, format: GridFormat) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    let grid = match format {
        GridFormat::Binary => parse_grid_from_string(&content),
        GridFormat::AsciiArt => parse_ascii_art(&content),
    };
    grid.with_context(|| format!("Failed to parse grid from file: {}", path.as_ref().display()))
}

/// Load a grid from a text file
/// Format: Each line represents a row, with '1' for alive cells and '0' for dead cells
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    load_grid(path, GridFormat::Binary)
}

/// Parse a grid from a string representation
pub fn parse_grid_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Grid file is empty or contains no valid rows");
    }

    let mut cells = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let row = line
            .chars()
            .enumerate()
            .map(|(col_idx, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            })
            .collect::<Result<Vec<bool>>>()?;
        cells.push(row);
    }

    Ok(Grid::from_rows(cells)?)
}

/// Convert ASCII art into a grid: every space is a live cell, anything else is dead
///
/// Line terminators are not cells, so every line must have the same number of
/// characters before its newline.
pub fn parse_ascii_art(content: &str) -> Result<Grid> {
    let rows: Vec<Vec<bool>> = content
        .lines()
        .map(|line| line.chars().map(|ch| ch == ' ').collect())
        .collect();

    Grid::from_rows(rows).context("ASCII art must be a non-empty rectangle")
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = grid_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to string representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.rows() * (grid.cols() + 1));

    for row in grid.iter_rows() {
        result.extend(row.iter().map(|&cell| if cell { '1' } else { '0' }));
        result.push('\n');
    }

    result
}

/// Load multiple grids from a directory
pub fn load_grids_from_directory<P: AsRef<Path>>(dir_path: P) -> Result<Vec<(String, Grid)>> {
    let dir = std::fs::read_dir(&dir_path)
        .with_context(|| format!("Failed to read directory: {}", dir_path.as_ref().display()))?;

    let mut grids = Vec::new();

    for entry in dir {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
            continue;
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        match load_grid_from_file(&path) {
            Ok(grid) => grids.push((name, grid)),
            Err(e) => eprintln!("Warning: Failed to load {}: {:#}", path.display(), e),
        }
    }

    grids.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(grids)
}

/// Write every catalogue pattern as a grid file, with a one cell margin
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for pattern in &CATALOGUE {
        let grid = pattern.to_grid(1)?;
        save_grid_to_file(&grid, dir.join(format!("{}.txt", pattern.name)))
            .with_context(|| format!("Failed to write example grid for {}", pattern.name))?;
    }

    Ok(())
}
