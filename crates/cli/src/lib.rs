//! Library half of the `jailcheck` CLI.
//!
//! Command implementations live in [`commands`] so they can be exercised from
//! tests without spawning the binary.

pub mod commands;

use std::path::Path;

use anyhow::{Context, Result};
use jailcheck_core::config::ResolverConfig;
use jailcheck_core::Resolver;
use tracing_subscriber::EnvFilter;

/// Build the resolver from an optional config file, falling back to the
/// compiled-in tables.
pub fn load_resolver(config_path: Option<&Path>) -> Result<(Resolver, ResolverConfig)> {
    let config = match config_path {
        Some(path) => ResolverConfig::load(path)
            .with_context(|| format!("Failed to load resolver config {}", path.display()))?,
        None => ResolverConfig::default(),
    };
    let resolver = config.build_resolver().context("Failed to build resolver from config")?;
    Ok((resolver, config))
}

/// Map `-v` occurrences to a default log filter.
pub fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbosity)));
    // A second install (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
