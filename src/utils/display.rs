//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{Grid, Pattern};
use crate::simulation::{GenerationRecord, RunReport};
use anyhow::Result;

/// Format grids and runs for the console
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.rows() * (grid.cols() * 3 + 1));
        for row in grid.iter_rows() {
            output.extend(row.iter().map(|&cell| if cell { '█' } else { '·' }));
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..grid.cols() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for (row, cells) in grid.iter_rows().enumerate() {
            output.push_str(&format!("{:2} ", row));
            for &cell in cells {
                output.push_str(if cell { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Format one generation in the configured output format
    pub fn format_record(record: &GenerationRecord, format: OutputFormat) -> Result<String> {
        let output = match format {
            OutputFormat::Text => format!(
                "Generation {} (Living: {}):\n{}",
                record.generation,
                record.living,
                Self::format_grid_compact(&record.grid)
            ),
            OutputFormat::Visual => {
                let mut output = format!(
                    "Generation {} (Living: {}):\n{}",
                    record.generation,
                    record.living,
                    Self::format_grid_with_coords(&record.grid)
                );
                if let Some(census) = &record.census {
                    output.push_str(&format!("Next: {}\n", census));
                }
                output
            }
            OutputFormat::Json => serde_json::to_string(record)?,
        };
        Ok(output)
    }

    /// Format the outcome of a run
    pub fn format_report_summary(report: &RunReport) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", report.analysis));
        output.push_str(&format!("Transitions: {}\n", report.total_census()));
        output.push_str(&format!("Run Time: {:.3}s\n", report.run_time.as_secs_f64()));
        output
    }

    /// Format the pattern catalogue as a table
    pub fn format_catalogue(patterns: &[Pattern]) -> String {
        let mut output = String::new();

        output.push_str("Name              | Kind         | Cells | Size   | Period\n");
        output.push_str("------------------|--------------|-------|--------|-------\n");

        for pattern in patterns {
            let period = pattern
                .period
                .map_or_else(|| "-".to_string(), |period| period.to_string());
            output.push_str(&format!(
                "{:17} | {:12} | {:5} | {:>6} | {}\n",
                pattern.name,
                pattern.kind.to_string(),
                pattern.living_count(),
                format!("{}x{}", pattern.height(), pattern.width()),
                period
            ));
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
