//! Device catalog and free-text model lookup.
//!
//! Lookup runs three stages and returns the first hit, scanning records in
//! declaration order:
//! 1. exact match on normalized names (case-sensitive);
//! 2. case- and whitespace-insensitive match;
//! 3. bounded prefix match, where the catalog name must continue with a space,
//!    `(` or nothing after the input. "iPhone 4" therefore never resolves to
//!    "iPhone 4S".

mod builtin;
pub mod normalize;

use tracing::debug;

use crate::error::CatalogError;
use crate::model::{Chip, DeviceRecord};
use normalize::{lookup_key, normalize_model};

/// Which lookup stage resolved a model string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStage {
    Exact,
    CaseInsensitive,
    Prefix,
}

/// Immutable, indexed set of device records.
#[derive(Debug, Clone)]
pub struct DeviceCatalog {
    records: Vec<DeviceRecord>,
    exact_keys: Vec<String>,
    folded_keys: Vec<String>,
}

impl DeviceCatalog {
    /// Build a catalog from caller-supplied records after validating them.
    pub fn new(records: Vec<DeviceRecord>) -> Result<Self, CatalogError> {
        validate(&records)?;
        Ok(Self::index(records))
    }

    /// The catalog compiled into this crate.
    pub fn builtin() -> Self {
        Self::index(builtin::devices())
    }

    fn index(records: Vec<DeviceRecord>) -> Self {
        let exact_keys = records.iter().map(|r| normalize_model(&r.name)).collect();
        let folded_keys = records.iter().map(|r| lookup_key(&r.name)).collect();
        Self { records, exact_keys, folded_keys }
    }

    pub fn records(&self) -> &[DeviceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a free-text model string.
    pub fn lookup(&self, model: &str) -> Option<&DeviceRecord> {
        self.lookup_with_stage(model).map(|(record, _)| record)
    }

    /// Resolve a free-text model string, reporting which stage matched.
    pub fn lookup_with_stage(&self, model: &str) -> Option<(&DeviceRecord, MatchStage)> {
        let exact = normalize_model(model);
        if exact.is_empty() {
            return None;
        }
        if let Some(i) = self.exact_keys.iter().position(|k| *k == exact) {
            debug!(model, device = %self.records[i].name, "exact catalog match");
            return Some((&self.records[i], MatchStage::Exact));
        }

        let key = lookup_key(model);
        if let Some(i) = self.folded_keys.iter().position(|k| *k == key) {
            debug!(model, device = %self.records[i].name, "case-insensitive catalog match");
            return Some((&self.records[i], MatchStage::CaseInsensitive));
        }

        if let Some(i) = self.folded_keys.iter().position(|k| is_bounded_prefix(k, &key)) {
            debug!(model, device = %self.records[i].name, "prefix catalog match");
            return Some((&self.records[i], MatchStage::Prefix));
        }

        debug!(model, "no catalog match");
        None
    }

    /// Exact, case-insensitive match on a hardware identifier such as `iPhone10,3`.
    pub fn find_by_identifier(&self, identifier: &str) -> Option<&DeviceRecord> {
        let wanted = identifier.trim();
        self.records
            .iter()
            .find(|r| r.identifiers.iter().any(|id| id.eq_ignore_ascii_case(wanted)))
    }

    pub fn devices_with_chip(&self, chip: Chip) -> Vec<&DeviceRecord> {
        self.records.iter().filter(|r| r.chip == chip).collect()
    }

    pub fn chip_for_model(&self, model: &str) -> Option<Chip> {
        self.lookup(model).map(|r| r.chip)
    }

    /// `false` when the model does not resolve.
    pub fn bootrom_exploit_for_model(&self, model: &str) -> bool {
        self.lookup(model).is_some_and(|r| r.has_bootrom_exploit)
    }

    /// Empty when the model does not resolve.
    pub fn storage_options_for_model(&self, model: &str) -> &[u32] {
        self.lookup(model).map(|r| r.storage_options.as_slice()).unwrap_or_default()
    }
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// `candidate` equals `input`, or starts with it and continues at a word or
/// parenthesis boundary.
fn is_bounded_prefix(candidate: &str, input: &str) -> bool {
    if input.is_empty() || !candidate.starts_with(input) {
        return false;
    }
    match candidate[input.len()..].chars().next() {
        None | Some(' ') | Some('(') => true,
        Some(_) => false,
    }
}

fn validate(records: &[DeviceRecord]) -> Result<(), CatalogError> {
    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(CatalogError::BlankName { index });
        }
        if record.storage_options.windows(2).any(|w| w[0] >= w[1]) {
            return Err(CatalogError::UnsortedStorage {
                name: record.name.clone(),
                options: record.storage_options.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_prefix_rejects_letter_continuation() {
        assert!(!is_bounded_prefix("iphone 4s", "iphone 4"));
        assert!(is_bounded_prefix("iphone 6s plus", "iphone 6s"));
        assert!(is_bounded_prefix("iphone se (2 generation)", "iphone se"));
        assert!(!is_bounded_prefix("iphone 4", ""));
    }

    #[test]
    fn builtin_catalog_passes_validation() {
        assert_eq!(validate(DeviceCatalog::builtin().records()), Ok(()));
    }
}
