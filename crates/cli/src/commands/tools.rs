use anyhow::{anyhow, Result};
use jailcheck_core::rules::{ChipPredicate, RulePriority};
use jailcheck_core::Resolver;

use crate::commands::format_windows;

/// Short description of a tier's chip predicate.
pub fn describe_predicate(predicate: &ChipPredicate) -> String {
    match predicate {
        ChipPredicate::Chips { chips } => {
            chips.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", ")
        }
        ChipPredicate::AtOrBefore { chip } => format!("{chip} and earlier"),
        ChipPredicate::Between { from, to } => format!("{from} to {to}"),
        ChipPredicate::BootromExploitable => "bootrom-exploitable chips".to_string(),
    }
}

/// List every rule in declaration (display) order.
pub fn list_tools_command(resolver: &Resolver, json: bool) -> Result<()> {
    let rules = resolver.rules().rules();

    if json {
        println!("{}", serde_json::to_string_pretty(rules)?);
        return Ok(());
    }

    println!("Tools:");
    for rule in rules {
        let priority = match &rule.priority {
            RulePriority::Primary => String::new(),
            RulePriority::Fallback { defers_to } => format!(", fallback for {defers_to}"),
        };
        println!("- {} ({}{})", rule.name, rule.tool_type, priority);
        for tier in &rule.tiers {
            let mut line = format!(
                "    {}: {}",
                describe_predicate(&tier.chips),
                format_windows(&tier.windows)
            );
            if !tier.exclude.is_empty() {
                line.push_str(&format!(" (except {})", format_windows(&tier.exclude)));
            }
            println!("{line}");
        }
    }
    Ok(())
}

/// Show the OS windows each tool offers the model's chip.
pub fn windows_command(resolver: &Resolver, model: &str, json: bool) -> Result<()> {
    let windows = resolver
        .windows_for_model(model)
        .ok_or_else(|| anyhow!("Device model \"{}\" was not found in the catalog", model))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&windows)?);
        return Ok(());
    }

    println!("Version windows for {model}:");
    if windows.is_empty() {
        println!("(none)");
        return Ok(());
    }
    for entry in windows {
        let mut line = format!("- {} [{}]: {}", entry.tool, entry.tool_type, format_windows(&entry.windows));
        if !entry.exclude.is_empty() {
            line.push_str(&format!(" (except {})", format_windows(&entry.exclude)));
        }
        if let Some(primary) = &entry.fallback_for {
            line.push_str(&format!(" (only when {primary} does not apply)"));
        }
        println!("{line}");
    }
    Ok(())
}
