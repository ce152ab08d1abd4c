//! Core data model: devices, tool classifications, and compatibility verdicts.

mod chip;

pub use chip::Chip;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One physical product variant in the device catalog.
///
/// Display names are not unique: hardware revisions of the same product may
/// appear twice with different chips or bootrom status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub name: String,
    #[serde(default)]
    pub identifiers: Vec<String>,
    #[serde(default)]
    pub model_numbers: Vec<String>,
    pub chip: Chip,
    pub release_year: u16,
    /// Capacities in GB, ascending.
    #[serde(default)]
    pub storage_options: Vec<u32>,
    #[serde(default)]
    pub has_bootrom_exploit: bool,
}

/// How a jailbreak survives a reboot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolType {
    /// Persists across reboots with no reconnection.
    Untethered,
    /// Re-applied on device after each reboot via an app.
    SemiUntethered,
    /// Needs a computer to boot into the jailbroken state; boots stock without one.
    SemiTethered,
    /// Needs a computer on every boot.
    Tethered,
}

impl ToolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Untethered => "untethered",
            Self::SemiUntethered => "semi-untethered",
            Self::SemiTethered => "semi-tethered",
            Self::Tethered => "tethered",
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing-level jailbreak classification.
///
/// The resolver never produces `Jailbroken`; that state is asserted by a
/// seller and persisted by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JailbreakStatus {
    Jailbroken,
    Jailbreakable,
    NotJailbroken,
    Unknown,
}

impl JailbreakStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jailbroken => "JAILBROKEN",
            Self::Jailbreakable => "JAILBREAKABLE",
            Self::NotJailbroken => "NOT_JAILBROKEN",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for JailbreakStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JailbreakStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JAILBROKEN" => Ok(Self::Jailbroken),
            "JAILBREAKABLE" => Ok(Self::Jailbreakable),
            "NOT_JAILBROKEN" => Ok(Self::NotJailbroken),
            "UNKNOWN" => Ok(Self::Unknown),
            _ => Err(format!("invalid jailbreak status: {s}")),
        }
    }
}

/// A tool accepted for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMatch {
    pub name: String,
    pub tool_type: ToolType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Resolver output for one `(device model, OS version)` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityVerdict {
    pub can_jailbreak: bool,
    pub status: JailbreakStatus,
    pub matched_tools: Vec<ToolMatch>,
    pub has_bootrom_exploit: bool,
    pub device: Option<DeviceRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl CompatibilityVerdict {
    /// Verdict for a model string the catalog could not resolve.
    pub fn unknown(model: &str) -> Self {
        Self {
            can_jailbreak: false,
            status: JailbreakStatus::Unknown,
            matched_tools: Vec::new(),
            has_bootrom_exploit: false,
            device: None,
            notes: vec![format!("Device model \"{model}\" was not found in the catalog.")],
        }
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.matched_tools.iter().map(|t| t.name.as_str()).collect()
    }
}
