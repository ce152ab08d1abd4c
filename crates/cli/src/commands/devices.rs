use anyhow::{anyhow, Result};
use jailcheck_core::Resolver;
use serde::Serialize;

use crate::commands::{format_storage, parse_chip, yes_no};

/// List catalog records, optionally filtered by chip.
pub fn list_devices_command(resolver: &Resolver, chip: Option<&str>, json: bool) -> Result<()> {
    let catalog = resolver.catalog();
    let devices = match chip {
        Some(raw) => catalog.devices_with_chip(parse_chip(raw)?),
        None => catalog.records().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&devices)?);
        return Ok(());
    }

    println!("Devices:");
    if devices.is_empty() {
        println!("(none)");
        return Ok(());
    }
    for device in devices {
        println!(
            "- {} (chip: {}, year: {}, bootrom exploit: {})",
            device.name,
            device.chip,
            device.release_year,
            yes_no(device.has_bootrom_exploit)
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct DeviceInfo<'a> {
    pub query: &'a str,
    pub name: &'a str,
    pub chip: String,
    pub has_bootrom_exploit: bool,
    pub storage_options: &'a [u32],
    pub identifiers: &'a [String],
    pub model_numbers: &'a [String],
}

/// Show how a model string resolves. Fails when it does not resolve.
pub fn device_info_command(resolver: &Resolver, model: &str, json: bool) -> Result<()> {
    let catalog = resolver.catalog();
    let device = catalog
        .lookup(model)
        .ok_or_else(|| anyhow!("Device model \"{}\" was not found in the catalog", model))?;

    let info = DeviceInfo {
        query: model,
        name: &device.name,
        chip: device.chip.to_string(),
        has_bootrom_exploit: catalog.bootrom_exploit_for_model(model),
        storage_options: catalog.storage_options_for_model(model),
        identifiers: &device.identifiers,
        model_numbers: &device.model_numbers,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Device: {}", info.name);
    println!("  Chip: {}", info.chip);
    println!("  Bootrom exploit: {}", yes_no(info.has_bootrom_exploit));
    println!("  Storage: {}", format_storage(info.storage_options));
    println!("  Released: {}", device.release_year);
    if !info.identifiers.is_empty() {
        println!("  Identifiers: {}", info.identifiers.join(", "));
    }
    if !info.model_numbers.is_empty() {
        println!("  Model numbers: {}", info.model_numbers.join(", "));
    }
    Ok(())
}
