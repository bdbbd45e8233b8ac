pub mod setup;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use parking_core::{LotConfig, OutputFormat};

use crate::commands;

#[derive(Debug, Parser)]
#[command(name = "parking")]
#[command(version, about = "Multi-floor parking lot: park, exit and bill vehicles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (replaces the global and project config files)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of floors
    #[arg(long, global = true)]
    pub floors: Option<u32>,

    /// Spaces on each floor
    #[arg(long, global = true)]
    pub spaces_per_floor: Option<u32>,

    /// Emit one JSON object per report instead of console text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Park three sample vehicles, remove one, and show availability
    Demo,
    /// Run lot commands from a file, or stdin when no file is given
    ///
    /// One command per line: `park <registration> <kind> [color]`,
    /// `remove <registration>`, `status`. Blank lines and `#` comments
    /// are skipped.
    Run {
        /// Command script
        file: Option<PathBuf>,
    },
    /// Show the hourly rate for each vehicle class
    Rates,
}

impl Cli {
    /// Resolve lot dimensions from config files, environment and flags
    pub fn lot_config(&self) -> Result<LotConfig> {
        let mut config = parking_core::load_config(self.config.as_deref())
            .context("Failed to load lot configuration")?;

        if let Some(floors) = self.floors {
            config.floors = floors;
        }
        if let Some(spaces) = self.spaces_per_floor {
            config.spaces_per_floor = spaces;
        }
        config
            .validate()
            .context("Invalid lot dimensions on the command line")?;
        Ok(config)
    }

    pub const fn output_format(&self) -> OutputFormat {
        OutputFormat::from_json_flag(self.json)
    }
}

/// Execute the parsed command line
pub fn run(cli: &Cli) -> Result<()> {
    let format = cli.output_format();
    let stdout = std::io::stdout();

    match &cli.command {
        Commands::Demo => commands::demo::run(&cli.lot_config()?, stdout.lock(), format),
        Commands::Run { file } => {
            let config = cli.lot_config()?;
            match file {
                Some(path) => {
                    let script = std::fs::read_to_string(path)
                        .with_context(|| format!("Failed to read script {}", path.display()))?;
                    commands::session::run(&config, script.as_bytes(), stdout.lock(), format)
                }
                None => commands::session::run(&config, std::io::stdin().lock(), stdout.lock(), format),
            }
        }
        Commands::Rates => commands::rates::run(stdout.lock(), format),
    }
}
