//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life::{
    config::{CliOverrides, GridFormat, OutputFormat, SeedConfig, Settings},
    game_of_life::{create_example_grids, load_grid, patterns::CATALOGUE, Life},
    simulation::Simulation,
    utils::{ColorOutput, GridFormatter},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print every generation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern to seed with (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Anchor row for the pattern
        #[arg(long)]
        row: Option<usize>,

        /// Anchor column for the pattern
        #[arg(long)]
        col: Option<usize>,

        /// Grid rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Grid columns (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Save the run report to this directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only print the summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// List the pattern catalogue
    Patterns,

    /// Evolve a grid file and classify its behavior
    Analyze {
        /// Grid file
        #[arg(short, long)]
        input: PathBuf,

        /// Treat the file as ASCII art (space = alive)
        #[arg(long)]
        ascii_art: bool,

        /// Number of generations to evolve
        #[arg(short, long, default_value_t = 100)]
        generations: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli.command) {
        eprintln!("{}", format_failure(&e));
        std::process::exit(1);
    }
}

/// Render a failed command with its full context chain
fn format_failure(error: &anyhow::Error) -> String {
    ColorOutput::error(&format!("Error: {:#}", error))
}

fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            config,
            pattern,
            row,
            col,
            rows,
            cols,
            generations,
            output,
            quiet,
        } => {
            let overrides = CliOverrides {
                rows,
                cols,
                generations,
                pattern,
                row,
                col,
                output_dir: output,
            };
            run_command(&config, &overrides, quiet)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Patterns => patterns_command(),
        Commands::Analyze {
            input,
            ascii_art,
            generations,
        } => analyze_command(&input, ascii_art, generations),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(config_path: &PathBuf, overrides: &CliOverrides, quiet: bool) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides)?;
    settings.validate().context("Configuration validation failed")?;

    let format = settings.output.format;
    let mut simulation = Simulation::new(settings.clone()).context("Failed to set up simulation")?;

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Running {}x{} grid for {} generations",
            simulation.life().rows(),
            simulation.life().cols(),
            settings.simulation.generations
        ))
    );

    let mut print_error = None;
    let report = simulation.run_with(|record| {
        if quiet || print_error.is_some() {
            return;
        }
        match GridFormatter::format_record(record, format) {
            Ok(text) => println!("{}", text),
            Err(e) => print_error = Some(e),
        }
    });
    if let Some(e) = print_error {
        return Err(e).context("Failed to format generation");
    }

    println!("\n{}", GridFormatter::format_report_summary(&report));

    if settings.output.save_report {
        let path = settings.output.output_directory.join("report.json");
        report.save_to_file(&path)?;
        println!("{}", ColorOutput::success(&format!("Report saved to {}", path.display())));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("input/patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_grids(&patterns_dir).context("Failed to create example grids")?;
    println!("Created catalogue grids in: {}", patterns_dir.display());

    let examples_dir = config_dir.join("examples");

    let mut still_lifes = Settings::default();
    still_lifes.simulation.rows = 10;
    still_lifes.simulation.cols = 40;
    still_lifes.simulation.generations = 3;
    still_lifes.seed = SeedConfig::StillLifes;
    still_lifes.to_file(&examples_dir.join("still_lifes.yaml"))?;

    let mut oscillators = Settings::default();
    oscillators.simulation.rows = 20;
    oscillators.simulation.cols = 80;
    oscillators.simulation.generations = 30;
    oscillators.seed = SeedConfig::Oscillators;
    oscillators.output.format = OutputFormat::Visual;
    oscillators.to_file(&examples_dir.join("oscillators.yaml"))?;

    let mut glider_gun = Settings::default();
    glider_gun.simulation.rows = 40;
    glider_gun.simulation.cols = 60;
    glider_gun.simulation.generations = 120;
    glider_gun.seed = SeedConfig::Pattern {
        name: "gosper-glider-gun".to_string(),
        row: 2,
        col: 2,
    };
    glider_gun.to_file(&examples_dir.join("glider_gun.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

fn patterns_command() -> Result<()> {
    println!("{}", GridFormatter::format_catalogue(&CATALOGUE));
    Ok(())
}

fn analyze_command(input: &Path, ascii_art: bool, generations: usize) -> Result<()> {
    println!("{}", ColorOutput::info("Analyzing grid..."));

    let format = if ascii_art {
        GridFormat::AsciiArt
    } else {
        GridFormat::Binary
    };
    let grid = load_grid(input, format)
        .with_context(|| format!("Failed to load grid from {}", input.display()))?;

    println!("Grid ({}x{}):", grid.rows(), grid.cols());
    println!("{}", GridFormatter::format_grid_with_coords(&grid));
    println!("Living cells: {}", grid.living_count());
    println!("Density: {:.1}%", grid.density() * 100.0);

    let mut settings = Settings::default();
    settings.simulation.rows = grid.rows();
    settings.simulation.cols = grid.cols();
    settings.simulation.generations = generations;
    settings.seed = SeedConfig::Empty;

    let report = Simulation::with_engine(settings, Life::from_grid(grid)).run();
    println!("\n{}", GridFormatter::format_report_summary(&report));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life",
            "run",
            "--config",
            "test.yaml",
            "--pattern",
            "copperhead",
            "--generations",
            "5",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/examples/oscillators.yaml").exists());
        assert!(temp_dir.path().join("input/patterns/glider.txt").exists());

        let loaded = Settings::from_file(&temp_dir.path().join("config/examples/glider_gun.yaml")).unwrap();
        assert_eq!(loaded.simulation.generations, 120);
    }

    #[test]
    fn test_run_command_saves_report() {
        let temp_dir = tempdir().unwrap();
        let overrides = CliOverrides {
            rows: Some(12),
            cols: Some(12),
            generations: Some(4),
            pattern: Some("blinker".to_string()),
            output_dir: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };
        let missing_config = temp_dir.path().join("missing.yaml");

        run_command(&missing_config, &overrides, true).unwrap();

        let report = game_of_life::RunReport::load_from_file(temp_dir.path().join("report.json")).unwrap();
        assert_eq!(report.records.len(), 5);
    }

    #[test]
    fn test_analyze_command() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("art.txt");
        std::fs::write(&path, "####\n#  #\n####\n").unwrap();

        assert!(analyze_command(&path, true, 3).is_ok());
        assert!(analyze_command(&temp_dir.path().join("nope.txt"), false, 3).is_err());
    }

    #[test]
    fn test_failure_reports_context_chain() {
        let temp_dir = tempdir().unwrap();
        let overrides = CliOverrides {
            pattern: Some("unicorn".to_string()),
            ..Default::default()
        };

        let err = execute(Commands::Analyze {
            input: temp_dir.path().join("nope.txt"),
            ascii_art: false,
            generations: 1,
        })
        .unwrap_err();
        let message = format_failure(&err);
        assert!(message.contains("Error: Failed to load grid from"));
        assert!(message.contains("nope.txt"));

        let err = run_command(&temp_dir.path().join("missing.yaml"), &overrides, true).unwrap_err();
        assert!(format_failure(&err).contains("unknown pattern 'unicorn'"));
    }

    #[test]
    fn test_anchor_without_pattern_seed_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let config = temp_dir.path().join("still.yaml");
        let mut settings = Settings::default();
        settings.seed = SeedConfig::StillLifes;
        settings.to_file(&config).unwrap();

        let overrides = CliOverrides {
            row: Some(4),
            ..Default::default()
        };
        assert!(run_command(&config, &overrides, true).is_err());
    }
}
