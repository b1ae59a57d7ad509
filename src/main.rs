//! periph - Registry and pairing store for CGM Bluetooth peripherals.
//!
//! Provides both human-friendly and agent-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};

use clap::{CommandFactory, Parser};
use console::style;
use serde::Serialize;

use periph::cli::{self, Cli, Commands};
use periph::config::Paths;
use periph::error::{PeripheralError, Result};
use periph::logging;
use periph::peripheral::{
    pair_peripheral, Capabilities, ConfigurationStrategy, PairingRequest, PeripheralCategory,
    PeripheralRecord, PeripheralType,
};
use periph::preferences::TomlPreferences;
use periph::store::SqliteStore;

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> &'static str {
        option_env!("VERGEN_GIT_DIRTY").unwrap_or("false")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || !io::stdout().is_terminal() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    logging::init_logging(cli.use_json(), cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            output_error(&cli, &e);
            std::process::exit(1);
        }
    }
}

/// Runs the command. `Ok(false)` means the command completed but reported a
/// negative result (e.g. a rejected transmitter ID).
fn run(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Types => cmd_types(cli).map(|()| true),
        Commands::Info(args) => cmd_info(cli, args).map(|()| true),
        Commands::Validate(args) => cmd_validate(cli, args),
        Commands::Pair(args) => cmd_pair(cli, args).map(|()| true),
        Commands::List => cmd_list(cli).map(|()| true),
        Commands::Remove(args) => cmd_remove(cli, args).map(|()| true),
        Commands::Version => cmd_version(cli).map(|()| true),
        Commands::Completions(args) => cmd_completions(args).map(|()| true),
    }
}

// === Robot Mode JSON Structures ===

#[derive(Serialize)]
struct TypeSummary {
    id: &'static str,
    label: &'static str,
    category: PeripheralCategory,
    capabilities: Capabilities,
    configuration_strategy: Option<ConfigurationStrategy>,
}

impl From<PeripheralType> for TypeSummary {
    fn from(t: PeripheralType) -> Self {
        Self {
            id: t.id(),
            label: t.label(),
            category: t.category(),
            capabilities: t.capabilities(),
            configuration_strategy: t.configuration_strategy(),
        }
    }
}

#[derive(Serialize)]
struct ValidationReport {
    peripheral_type: &'static str,
    transmitter_id: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_id: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

// === Command Implementations ===

fn cmd_types(cli: &Cli) -> Result<()> {
    if cli.use_json() {
        let types: Vec<TypeSummary> = PeripheralType::ALL.into_iter().map(Into::into).collect();
        output_json(cli, &types);
        return Ok(());
    }

    for category in PeripheralCategory::ALL {
        println!("{}", style(category).bold().underlined());
        for t in PeripheralType::ALL.into_iter().filter(|t| t.category() == category) {
            println!("  {:<22} {}{}", style(t.id()).green(), t.label(), capability_flags(t));
        }
        println!();
    }
    Ok(())
}

fn capability_flags(t: PeripheralType) -> String {
    let caps = t.capabilities();
    let flags: Vec<&str> = [
        (caps.needs_transmitter_id, "transmitter-id"),
        (caps.supports_out_of_process_computation, "web-oop"),
        (caps.supports_non_fixed_slope, "non-fixed-slope"),
        (caps.requires_proximity_scan_before_connect, "nfc-scan"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect();

    if flags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", flags.join(", "))
    }
}

fn cmd_info(cli: &Cli, args: &cli::InfoArgs) -> Result<()> {
    let t: PeripheralType = args.peripheral_type.parse()?;

    if cli.use_json() {
        output_json(cli, &TypeSummary::from(t));
        return Ok(());
    }

    let caps = t.capabilities();
    println!("{}: {}", style("Type").bold(), t.label());
    println!("{}: {}", style("Identifier").bold(), t.id());
    println!("{}: {}", style("Category").bold(), t.category());
    println!("{}: {}", style("Transmitter ID").bold(), yes_no(caps.needs_transmitter_id));
    println!("{}: {}", style("Web OOP").bold(), yes_no(caps.supports_out_of_process_computation));
    println!("{}: {}", style("Non-fixed slope").bold(), yes_no(caps.supports_non_fixed_slope));
    println!(
        "{}: {}",
        style("NFC scan before connect").bold(),
        yes_no(caps.requires_proximity_scan_before_connect)
    );
    match t.configuration_strategy() {
        Some(strategy) => println!("{}: {strategy:?}", style("Settings").bold()),
        None => println!("{}: none", style("Settings").bold()),
    }
    Ok(())
}

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn cmd_validate(cli: &Cli, args: &cli::ValidateArgs) -> Result<bool> {
    let t: PeripheralType = args.peripheral_type.parse()?;
    let error = t.validate_transmitter_id(&args.transmitter_id);

    if cli.use_json() {
        output_json(
            cli,
            &ValidationReport {
                peripheral_type: t.id(),
                transmitter_id: args.transmitter_id.clone(),
                valid: error.is_none(),
                message_id: error.map(|e| e.message_id()),
                message: error.map(|e| e.to_string()),
            },
        );
    } else {
        match error {
            None if !cli.quiet => println!("{} {}", style("valid").green(), args.transmitter_id),
            None => {}
            Some(e) => eprintln!("{} {}: {e}", style("invalid").red(), args.transmitter_id),
        }
    }
    Ok(error.is_none())
}

fn cmd_pair(cli: &Cli, args: &cli::PairArgs) -> Result<()> {
    let t: PeripheralType = args.peripheral_type.parse()?;
    let paths = Paths::resolve(cli.db.as_deref(), cli.prefs.as_deref())?;
    let preferences = TomlPreferences::load(&paths.preferences)?;
    let mut store = SqliteStore::open(&paths.database)?;

    let mut request = PairingRequest::new(t, &args.address, &args.name);
    if let Some(id) = &args.transmitter_id {
        request = request.with_transmitter_id(id);
    }
    let record = pair_peripheral(&request, &preferences, &mut store)?;

    if cli.use_json() {
        output_json(cli, &record);
    } else if !cli.quiet {
        println!(
            "Paired {} ({}) as {}",
            style(&record.name).green(),
            record.address,
            record.peripheral_type
        );
    }
    Ok(())
}

fn cmd_list(cli: &Cli) -> Result<()> {
    let paths = Paths::resolve(cli.db.as_deref(), cli.prefs.as_deref())?;
    let store = SqliteStore::open(&paths.database)?;
    let records = store.list()?;

    if cli.use_json() {
        output_json(cli, &records);
    } else if records.is_empty() {
        println!("{}", style("No stored peripherals").yellow());
        println!("Pair one with: periph pair <TYPE> <ADDRESS> <NAME>");
    } else {
        for record in &records {
            print_record(record);
        }
    }
    Ok(())
}

fn print_record(record: &PeripheralRecord) {
    print!(
        "{}  {}  {}",
        style(&record.address).green(),
        record.display_name(),
        record.peripheral_type
    );
    if let Some(id) = &record.transmitter_id {
        print!("  tx={id}");
    }
    println!();
}

fn cmd_remove(cli: &Cli, args: &cli::RemoveArgs) -> Result<()> {
    let paths = Paths::resolve(cli.db.as_deref(), cli.prefs.as_deref())?;
    let store = SqliteStore::open(&paths.database)?;
    store.remove(&args.address)?;

    if cli.use_json() {
        output_json(
            cli,
            &serde_json::json!({ "address": args.address, "removed": true }),
        );
    } else if !cli.quiet {
        println!("Removed {}", args.address);
    }
    Ok(())
}

fn cmd_version(cli: &Cli) -> Result<()> {
    if cli.use_json() {
        output_json(
            cli,
            &serde_json::json!({
                "version": build_info::VERSION,
                "git_sha": build_info::git_sha(),
                "git_dirty": build_info::git_dirty(),
                "build_timestamp": build_info::build_timestamp(),
                "rustc": build_info::rustc_semver(),
                "target": build_info::target(),
            }),
        );
    } else {
        println!("periph {}", build_info::VERSION);
        println!("git: {} (dirty: {})", build_info::git_sha(), build_info::git_dirty());
        println!("built: {}", build_info::build_timestamp());
        println!("rustc: {} ({})", build_info::rustc_semver(), build_info::target());
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_completions(args: &cli::CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "periph", &mut io::stdout());
    Ok(())
}

// === Output Helpers ===

fn output_json<T: Serialize>(cli: &Cli, data: &T) {
    let json = if cli.use_compact_json() {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => output_error(cli, &PeripheralError::Other(format!("JSON encoding failed: {e}"))),
    }
}

fn output_error(cli: &Cli, error: &PeripheralError) {
    if cli.use_json() {
        let json = serde_json::json!({
            "error": true,
            "message": error.to_string(),
            "suggestion": error.suggestion(),
            "recoverable": error.is_user_recoverable(),
        });
        eprintln!("{json:#}");
    } else {
        eprintln!("{}: {}", style("Error").red().bold(), error);
        if let Some(suggestion) = error.suggestion() {
            eprintln!("{}: {}", style("Hint").yellow(), suggestion);
        }
    }
}
