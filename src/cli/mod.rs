//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// periph - Registry and pairing store for CGM Bluetooth peripherals.
///
/// Robot Mode: Use --robot or --format=json for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "periph", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (text for humans, json for agents/scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "PERIPH_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Peripheral database path
    #[arg(long, global = true, env = "PERIPH_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Preferences file path (TOML)
    #[arg(long, global = true, env = "PERIPH_PREFS", value_name = "PATH")]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts and agents
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // === Registry ===
    /// List every supported peripheral type
    Types,

    /// Show one peripheral type in detail
    Info(InfoArgs),

    /// Check a transmitter ID against a type's rule
    Validate(ValidateArgs),

    // === Store ===
    /// Pair a peripheral and store it
    Pair(PairArgs),

    /// List stored peripherals
    List,

    /// Remove a stored peripheral
    Remove(RemoveArgs),

    // === Utilities ===
    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Peripheral type (identifier or label, see `periph types`)
    #[arg(value_name = "TYPE")]
    pub peripheral_type: String,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Peripheral type (identifier or label)
    #[arg(value_name = "TYPE")]
    pub peripheral_type: String,

    /// Transmitter ID to check
    #[arg(value_name = "ID", allow_hyphen_values = true)]
    pub transmitter_id: String,
}

#[derive(Parser, Debug)]
pub struct PairArgs {
    /// Peripheral type (identifier or label)
    #[arg(value_name = "TYPE")]
    pub peripheral_type: String,

    /// Bluetooth address or UUID reported by the scan
    pub address: String,

    /// Advertised device name
    pub name: String,

    /// Transmitter ID, required for Dexcom, Blucon and some heartbeat types
    #[arg(long, short = 't', value_name = "ID")]
    pub transmitter_id: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Bluetooth address of the stored peripheral
    pub address: String,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
