//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{completions::CompletionsArgs, config::ConfigCommands, run::RunArgs};
use crate::report::Locale;

#[derive(Parser)]
#[command(name = "fleet")]
#[command(author, version, about = "Transport company fleet demonstration")]
#[command(long_about = "Models a small transport company: buses carry passengers, trucks and bicycles carry cargo. \
Run without a command to see the built-in demonstration.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Message language (default: from config, else en)
    #[arg(long, short = 'l', global = true)]
    pub lang: Option<Locale>,

    /// Suppress section headings and spacing
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in demonstration (default)
    Demo,

    /// Run a fleet scenario from a YAML file
    Run(RunArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON array of transcript entries
    Json,
}
