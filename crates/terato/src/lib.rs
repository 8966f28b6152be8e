//! Argument parsing and commands for the `terato` binary.
//!
//! [`Cli`] is the clap parser, [`Commands`] the subcommands (`check`,
//! `checks`, `info`) and [`commands`] their implementations. `main.rs` only
//! loads configuration, sets up logging and dispatches.
//!
//! [`command()`] is what `xtask` feeds to clap_mangen and clap_complete.

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Set the global color mode. Call once at startup.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, terato_core=trace)
    TERATO_LOG_PATH        Explicit log file path
    TERATO_LOG_DIR         Log directory
    TERATO_ENABLE          Checks to run, e.g. [mente,repetition]
    TERATO_DISABLE         Checks to skip, e.g. [overused]
    TERATO_PAGING          Track pages (true/false)
";

/// Command-line interface definition for terato.
#[derive(Parser)]
#[command(name = "terato")]
#[command(about = "Style linter for Spanish literary prose", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (merged over discovered config)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Lint a text or Markdown file (or stdin)
    Check(commands::check::CheckArgs),

    /// List the available checks
    Checks(commands::checks::ChecksArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
