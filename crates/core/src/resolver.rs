//! Public entry point: `(device model, OS version)` -> compatibility verdict.

use std::sync::{Arc, OnceLock};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::catalog::DeviceCatalog;
use crate::model::{CompatibilityVerdict, DeviceRecord, JailbreakStatus};
use crate::rules::{RuleSet, ToolWindows};
use crate::version::Version;

const BOOTROM_NOTE: &str = "This device's chip has a permanent bootrom exploit; it stays \
     jailbreakable with a compatible tool regardless of future software updates.";

/// Owns an immutable catalog and rule set. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Arc<DeviceCatalog>,
    rules: Arc<RuleSet>,
}

impl Resolver {
    pub fn new(catalog: DeviceCatalog, rules: RuleSet) -> Self {
        Self { catalog: Arc::new(catalog), rules: Arc::new(rules) }
    }

    /// Resolver over the compiled-in tables.
    pub fn builtin() -> Self {
        Self::new(DeviceCatalog::builtin(), RuleSet::builtin())
    }

    /// Process-wide built-in resolver, built on first use.
    pub fn shared() -> &'static Resolver {
        static SHARED: OnceLock<Resolver> = OnceLock::new();
        SHARED.get_or_init(Resolver::builtin)
    }

    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Resolve a free-text device model against an OS version.
    ///
    /// An unrecognised model yields an `UNKNOWN` verdict, never an error.
    pub fn resolve(&self, device_model: &str, ios_version: &str) -> CompatibilityVerdict {
        match self.catalog.lookup(device_model) {
            Some(device) => self.verdict_for(device, ios_version),
            None => {
                debug!(device_model, "device not resolved");
                CompatibilityVerdict::unknown(device_model)
            }
        }
    }

    /// Same as [`Resolver::resolve`] but looks the device up by hardware
    /// identifier (`iPhone10,3`).
    pub fn resolve_identifier(&self, identifier: &str, ios_version: &str) -> CompatibilityVerdict {
        match self.catalog.find_by_identifier(identifier) {
            Some(device) => self.verdict_for(device, ios_version),
            None => CompatibilityVerdict::unknown(identifier),
        }
    }

    /// Evaluate the rule set for an already-resolved device.
    pub fn verdict_for(&self, device: &DeviceRecord, ios_version: &str) -> CompatibilityVerdict {
        let version = Version::parse(ios_version);
        let matched_tools = self.rules.evaluate(device.chip, &version);
        let can_jailbreak = !matched_tools.is_empty();
        let status =
            if can_jailbreak { JailbreakStatus::Jailbreakable } else { JailbreakStatus::NotJailbroken };

        let mut notes = Vec::new();
        if device.has_bootrom_exploit {
            notes.push(BOOTROM_NOTE.to_string());
        }

        debug!(
            device = %device.name,
            chip = %device.chip,
            %version,
            %status,
            tools = matched_tools.len(),
            "resolved compatibility"
        );

        CompatibilityVerdict {
            can_jailbreak,
            status,
            matched_tools,
            has_bootrom_exploit: device.has_bootrom_exploit,
            device: Some(device.clone()),
            notes,
        }
    }

    /// Version windows each tool offers the given model's chip, or `None`
    /// when the model does not resolve.
    pub fn windows_for_model(&self, device_model: &str) -> Option<Vec<ToolWindows>> {
        let device = self.catalog.lookup(device_model)?;
        Some(self.rules.windows_for_chip(device.chip))
    }

    /// SHA-256 over the canonical JSON of both tables.
    ///
    /// Persisted verdicts can store this to record which table revision
    /// produced them.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for record in self.catalog.records() {
            hasher.update(serde_json::to_vec(record).unwrap_or_default());
            hasher.update(b"\n");
        }
        hasher.update(b"--\n");
        for rule in self.rules.rules() {
            hasher.update(serde_json::to_vec(rule).unwrap_or_default());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve with the shared built-in tables.
pub fn resolve(device_model: &str, ios_version: &str) -> CompatibilityVerdict {
    Resolver::shared().resolve(device_model, ios_version)
}
