use std::path::Path;

use anyhow::{Context, Result};
use jailcheck_core::config::{load_catalog, load_rules, ResolverConfig};
use jailcheck_core::Resolver;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataInfo {
    pub library_version: String,
    pub fingerprint: String,
    pub devices: usize,
    pub rules: usize,
    pub catalog_source: String,
    pub rules_source: String,
}

impl DataInfo {
    pub fn collect(resolver: &Resolver, config: &ResolverConfig) -> Self {
        Self {
            library_version: jailcheck_core::version().to_string(),
            fingerprint: resolver.fingerprint(),
            devices: resolver.catalog().len(),
            rules: resolver.rules().len(),
            catalog_source: config.catalog_source(),
            rules_source: config.rules_source(),
        }
    }
}

/// Report which tables the resolver is using.
pub fn data_info_command(resolver: &Resolver, config: &ResolverConfig, json: bool) -> Result<()> {
    let info = DataInfo::collect(resolver, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("JailCheck Data Info");
    println!("===================");
    println!("Library version: {}", info.library_version);
    println!("Fingerprint: {}", info.fingerprint);
    println!("Devices: {} ({})", info.devices, info.catalog_source);
    println!("Rules: {} ({})", info.rules, info.rules_source);
    Ok(())
}

/// Load and validate replacement tables without using them.
pub fn validate_data_command(catalog: Option<&Path>, rules: Option<&Path>) -> Result<()> {
    if let Some(path) = catalog {
        let loaded = load_catalog(path)
            .with_context(|| format!("Device catalog {} is invalid", path.display()))?;
        println!("Catalog OK: {} devices ({})", loaded.len(), path.display());
    }
    if let Some(path) = rules {
        let loaded =
            load_rules(path).with_context(|| format!("Rule table {} is invalid", path.display()))?;
        println!("Rules OK: {} tools ({})", loaded.len(), path.display());
    }
    if catalog.is_none() && rules.is_none() {
        println!("Nothing to validate (pass --catalog and/or --rules).");
    }
    Ok(())
}
