//! Mirrorstep CLI - Headless driver for twin movement levels

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use commands::{check, init, simulate};

#[derive(Parser)]
#[command(name = "mirrorstep")]
#[command(about = "Mirrored twin grid movement, driven headless", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample level file
    Init {
        /// Path of the level file to create
        path: String,
    },

    /// Load a level and report which first moves are open
    Check {
        /// Path to level file
        level: String,
    },

    /// Play a sequence of moves through a level at a fixed frame rate
    Simulate {
        /// Path to level file
        level: String,

        /// Moves separated by spaces or commas (e.g. "r r u l")
        #[arg(long)]
        moves: String,

        /// Frames per second of the simulated driver
        #[arg(long, default_value_t = 60.0)]
        fps: f64,

        /// Obstacle backend
        #[arg(long, value_enum, default_value_t = Backend::Map)]
        backend: Backend,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Which obstacle query answers the move checks
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// In-memory cell boxes
    Map,
    /// Rapier colliders
    Physics,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path } => init::run(&path),
        Commands::Check { level } => check::run(&level),
        Commands::Simulate {
            level,
            moves,
            fps,
            backend,
            format,
        } => simulate::run(simulate::SimulateArgs {
            level,
            moves,
            fps,
            backend,
            format,
        }),
    }
}
