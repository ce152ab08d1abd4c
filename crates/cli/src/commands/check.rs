use std::fmt::Write as _;

use anyhow::Result;
use chrono::Utc;
use jailcheck_core::{CompatibilityVerdict, Resolver};
use serde::Serialize;

use crate::commands::{format_storage, yes_no};

/// JSON envelope for verdicts so stored output records when and against
/// which table revision it was produced.
#[derive(Debug, Serialize)]
pub struct VerdictReport<'a> {
    pub generated_at: String,
    pub fingerprint: String,
    pub data: &'a CompatibilityVerdict,
}

impl<'a> VerdictReport<'a> {
    pub fn new(resolver: &Resolver, verdict: &'a CompatibilityVerdict) -> Self {
        Self { generated_at: Utc::now().to_rfc3339(), fingerprint: resolver.fingerprint(), data: verdict }
    }
}

/// Resolve a free-text model against an OS version and print the verdict.
///
/// An unknown device is still a successful run; the verdict says UNKNOWN.
pub fn check_command(resolver: &Resolver, model: &str, ios: &str, json: bool) -> Result<()> {
    let verdict = resolver.resolve(model, ios);
    print_verdict(resolver, &verdict, ios, json)
}

/// Resolve by hardware identifier (e.g. `iPhone10,3`).
pub fn check_identifier_command(
    resolver: &Resolver,
    identifier: &str,
    ios: &str,
    json: bool,
) -> Result<()> {
    let verdict = resolver.resolve_identifier(identifier, ios);
    print_verdict(resolver, &verdict, ios, json)
}

fn print_verdict(
    resolver: &Resolver,
    verdict: &CompatibilityVerdict,
    ios: &str,
    json: bool,
) -> Result<()> {
    if json {
        let report = VerdictReport::new(resolver, verdict);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_verdict(verdict, ios));
    }
    Ok(())
}

/// Human-readable verdict block.
pub fn render_verdict(verdict: &CompatibilityVerdict, ios: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Jailbreak Compatibility");
    let _ = writeln!(out, "=======================");
    match &verdict.device {
        Some(device) => {
            let _ = writeln!(out, "Device: {} ({}, {})", device.name, device.chip, device.release_year);
            let _ = writeln!(out, "Storage: {}", format_storage(&device.storage_options));
        }
        None => {
            let _ = writeln!(out, "Device: (not in catalog)");
        }
    }
    let _ = writeln!(out, "iOS: {ios}");
    let _ = writeln!(out, "Status: {}", verdict.status);
    let _ = writeln!(out, "Bootrom exploit: {}", yes_no(verdict.has_bootrom_exploit));

    let _ = writeln!(out, "Tools:");
    if verdict.matched_tools.is_empty() {
        let _ = writeln!(out, "(none)");
    }
    for tool in &verdict.matched_tools {
        match &tool.notes {
            Some(notes) => {
                let _ = writeln!(out, "- {} [{}] {}", tool.name, tool.tool_type, notes);
            }
            None => {
                let _ = writeln!(out, "- {} [{}]", tool.name, tool.tool_type);
            }
        }
    }

    for note in &verdict.notes {
        let _ = writeln!(out, "Note: {note}");
    }
    out
}
