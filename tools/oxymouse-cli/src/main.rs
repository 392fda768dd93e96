//! OxyMouse CLI: generate human-like pointer trajectories.
//!
//! Usage:
//!   oxymouse coords [OPTIONS]     Point-to-point movement
//!   oxymouse random [OPTIONS]     Movement to a random target in a viewport
//!   oxymouse scroll [OPTIONS]     Vertical scroll path
//!   oxymouse algorithms           List available algorithms
//!   oxymouse config [--write]     Show (or write) the effective config

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use oxymouse_common::config::LoggingConfig;
use oxymouse_trajectory_model::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "oxymouse",
    about = "Human-like mouse trajectory generator",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the standard location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a movement between two points
    Coords {
        /// Start x
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        from_x: i32,

        /// Start y
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        from_y: i32,

        /// End x
        #[arg(long, default_value = "1000", allow_negative_numbers = true)]
        to_x: i32,

        /// End y
        #[arg(long, default_value = "1000", allow_negative_numbers = true)]
        to_y: i32,

        #[command(flatten)]
        generate: GenerateArgs,
    },

    /// Generate a movement to a random point inside a viewport
    Random {
        /// Viewport width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Viewport height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,

        #[command(flatten)]
        generate: GenerateArgs,
    },

    /// Generate a vertical scroll path
    Scroll {
        /// Scroll position to start from
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        start_y: i32,

        /// Scroll position to end on
        #[arg(long, default_value = "1000", allow_negative_numbers = true)]
        end_y: i32,

        #[command(flatten)]
        generate: GenerateArgs,
    },

    /// List available algorithms
    Algorithms,

    /// Print the effective configuration
    Config {
        /// Write the effective configuration back to the config file
        #[arg(long)]
        write: bool,
    },
}

/// Options shared by every generating subcommand.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Algorithm: bezier|gaussian|perlin (defaults to the configured one)
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Seed for the random source; a fresh one is drawn when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Attach a replay delay to every point
    #[arg(long)]
    pub replay: bool,

    /// Pace Perlin sampling against the wall clock instead of virtual time
    #[arg(long)]
    pub realtime: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?,
        None => AppConfig::load(),
    };

    // Initialize logging
    let logging = if cli.verbose {
        LoggingConfig {
            level: "debug".to_string(),
            ..config.logging.clone()
        }
    } else {
        config.logging.clone()
    };
    oxymouse_common::logging::init_logging(&logging)?;

    match cli.command {
        Commands::Coords {
            from_x,
            from_y,
            to_x,
            to_y,
            generate,
        } => commands::generate::run(
            &config,
            commands::generate::Operation::Coordinates {
                from: (from_x, from_y).into(),
                to: (to_x, to_y).into(),
            },
            &generate,
        ),
        Commands::Random {
            width,
            height,
            generate,
        } => commands::generate::run(
            &config,
            commands::generate::Operation::Random {
                viewport: oxymouse_trajectory_model::viewport::Viewport::new(width, height),
            },
            &generate,
        ),
        Commands::Scroll {
            start_y,
            end_y,
            generate,
        } => commands::generate::run(
            &config,
            commands::generate::Operation::Scroll { start_y, end_y },
            &generate,
        ),
        Commands::Algorithms => commands::algorithms::run(&config),
        Commands::Config { write } => commands::config::run(&config, cli.config.as_deref(), write),
    }
}
