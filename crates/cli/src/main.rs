use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use jailcheck::commands::*;
use jailcheck::{init_logging, load_resolver};
use tracing::debug;

/// Jailbreak compatibility resolver CLI.
///
/// This CLI is a thin wrapper around `jailcheck-core` (exposed in code as
/// `jailcheck_core`). All lookup and rule logic lives in the library.
#[derive(Parser, Debug)]
#[command(
    name = "jailcheck",
    version,
    about = "Which jailbreak tools apply to a device on a given iOS version",
    long_about = None
)]
struct Cli {
    /// Resolver config (JSON or YAML) pointing at replacement data tables.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a device model name against an iOS version.
    Check {
        /// Free-text model name, e.g. "iPhone X" or "Apple iPad Pro 11-inch (1st gen)".
        #[arg(long)]
        model: String,

        /// OS version, e.g. 16.6.1.
        #[arg(long)]
        ios: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Resolve a hardware identifier (e.g. iPhone10,3) against an iOS version.
    CheckId {
        #[arg(long)]
        identifier: String,

        #[arg(long)]
        ios: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List catalog devices, optionally only those with a given chip.
    Devices {
        #[arg(long)]
        chip: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show how a model name resolves in the catalog.
    ///
    /// Exits non-zero when the model is not found.
    DeviceInfo {
        #[arg(long)]
        model: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List every tool rule in display order.
    Tools {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the iOS windows each tool offers a device.
    Windows {
        #[arg(long)]
        model: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Report table sizes, sources and fingerprint.
    DataInfo {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Validate replacement catalog and/or rule files without using them.
    ValidateData {
        #[arg(long)]
        catalog: Option<PathBuf>,

        #[arg(long)]
        rules: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(command = ?cli.command, "starting");

    // Validation must not depend on a config that may itself be broken.
    if let Command::ValidateData { catalog, rules } = &cli.command {
        return validate_data_command(catalog.as_deref(), rules.as_deref());
    }

    let (resolver, config) = load_resolver(cli.config.as_deref())?;

    match cli.command {
        Command::Check { model, ios, json } => check_command(&resolver, &model, &ios, json)?,
        Command::CheckId { identifier, ios, json } => {
            check_identifier_command(&resolver, &identifier, &ios, json)?
        }
        Command::Devices { chip, json } => list_devices_command(&resolver, chip.as_deref(), json)?,
        Command::DeviceInfo { model, json } => device_info_command(&resolver, &model, json)?,
        Command::Tools { json } => list_tools_command(&resolver, json)?,
        Command::Windows { model, json } => windows_command(&resolver, &model, json)?,
        Command::DataInfo { json } => data_info_command(&resolver, &config, json)?,
        Command::ValidateData { .. } => unreachable!("handled before loading the resolver"),
    }

    Ok(())
}
