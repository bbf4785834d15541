use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Structural time-series model setup.
#[derive(Parser)]
#[command(
    name = "stsm",
    version,
    about = "Validate a series and compile a structural model descriptor"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build the canonical model request and print it as JSON.
    Compile(CompileArgs),
}

/// Arguments for the `compile` subcommand.
#[derive(clap::Args)]
pub struct CompileArgs {
    /// Path to TOML setup file.
    #[arg(short, long, default_value = "stsm.toml")]
    pub config: PathBuf,

    /// Path to the observed series, one value per line.
    #[arg(short, long)]
    pub series: PathBuf,

    /// Path to the input matrix, one regressor per line.
    #[arg(short, long)]
    pub inputs: Option<PathBuf>,

    /// Override the model descriptor from config.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Path for JSON output (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
