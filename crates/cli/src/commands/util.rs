use anyhow::{anyhow, Result};
use jailcheck_core::version::VersionWindow;
use jailcheck_core::Chip;

/// Parse a `--chip` argument, listing the accepted names on failure.
pub fn parse_chip(raw: &str) -> Result<Chip> {
    raw.parse::<Chip>().map_err(|_| {
        let allowed: Vec<&str> = Chip::LINEAGE.iter().map(|c| c.as_str()).collect();
        anyhow!("Invalid chip '{}'. Allowed: {}", raw, allowed.join(", "))
    })
}

/// "15.0-16.6.1, 17.0"
pub fn format_windows(windows: &[VersionWindow]) -> String {
    windows.iter().map(|w| w.to_string()).collect::<Vec<_>>().join(", ")
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// "64 GB, 256 GB, 1 TB"
pub fn format_storage(options: &[u32]) -> String {
    if options.is_empty() {
        return "(unknown)".to_string();
    }
    options
        .iter()
        .map(|gb| if gb % 1024 == 0 { format!("{} TB", gb / 1024) } else { format!("{gb} GB") })
        .collect::<Vec<_>>()
        .join(", ")
}
