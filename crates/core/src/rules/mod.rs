//! Tool eligibility rules.
//!
//! A rule describes one jailbreak tool: which chips it supports and, per chip
//! tier, which OS versions. Tiers are checked in order and the first tier whose
//! chip predicate matches decides the version windows, so a tool can carry a
//! wider window on older chips than on newer ones.
//!
//! Rules are either primaries or fallbacks. A fallback names the primary it
//! stands in for and is only considered when that primary did not match; see
//! [`engine`].

mod builtin;
pub mod engine;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RuleSetError;
use crate::model::{Chip, ToolMatch, ToolType};
use crate::version::{Version, VersionWindow};

/// Chip facts derived once per query and shared by every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipProfile {
    pub chip: Chip,
    pub bootrom_exploitable: bool,
}

impl ChipProfile {
    pub fn new(chip: Chip) -> Self {
        Self { chip, bootrom_exploitable: chip.is_bootrom_exploitable() }
    }
}

/// Which chips a tier applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChipPredicate {
    Chips { chips: Vec<Chip> },
    /// Every chip up to and including `chip` in lineage order.
    AtOrBefore { chip: Chip },
    /// Inclusive lineage span.
    Between { from: Chip, to: Chip },
    /// Chips with a permanent bootrom exploit.
    BootromExploitable,
}

impl ChipPredicate {
    pub fn matches(&self, profile: &ChipProfile) -> bool {
        match self {
            Self::Chips { chips } => chips.contains(&profile.chip),
            Self::AtOrBefore { chip } => profile.chip.is_at_or_before(*chip),
            Self::Between { from, to } => *from <= profile.chip && profile.chip <= *to,
            Self::BootromExploitable => profile.bootrom_exploitable,
        }
    }
}

/// Version windows for one group of chips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityTier {
    pub chips: ChipPredicate,
    pub windows: Vec<VersionWindow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<VersionWindow>,
}

impl EligibilityTier {
    pub fn admits(&self, version: &Version) -> bool {
        self.windows.iter().any(|w| w.contains(version))
            && !self.exclude.iter().any(|w| w.contains(version))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RulePriority {
    #[default]
    Primary,
    /// Only evaluated when the named primary did not match.
    Fallback { defers_to: String },
}

impl RulePriority {
    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Primary)
    }
}

/// One jailbreak tool and where it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRule {
    pub name: String,
    pub tool_type: ToolType,
    pub tiers: Vec<EligibilityTier>,
    #[serde(default)]
    pub priority: RulePriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ToolRule {
    /// First tier covering the chip, if any.
    pub fn tier_for(&self, profile: &ChipProfile) -> Option<&EligibilityTier> {
        self.tiers.iter().find(|t| t.chips.matches(profile))
    }

    pub fn is_eligible(&self, profile: &ChipProfile, version: &Version) -> bool {
        self.tier_for(profile).is_some_and(|t| t.admits(version))
    }

    pub fn to_match(&self) -> ToolMatch {
        ToolMatch { name: self.name.clone(), tool_type: self.tool_type, notes: self.notes.clone() }
    }
}

/// The windows a single tool offers one chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolWindows {
    pub tool: String,
    pub tool_type: ToolType,
    pub windows: Vec<VersionWindow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<VersionWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_for: Option<String>,
}

/// Ordered, validated rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<ToolRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<ToolRule>) -> Result<Self, RuleSetError> {
        validate(&rules)?;
        Ok(Self { rules })
    }

    /// The rule table compiled into this crate.
    pub fn builtin() -> Self {
        Self { rules: builtin::rules() }
    }

    pub fn rules(&self) -> &[ToolRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ToolRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Tools applicable to `chip` on `version`, in declaration order.
    pub fn evaluate(&self, chip: Chip, version: &Version) -> Vec<ToolMatch> {
        engine::evaluate(&self.rules, &ChipProfile::new(chip), version)
    }

    /// For every tool covering `chip`, the windows of its first matching tier.
    pub fn windows_for_chip(&self, chip: Chip) -> Vec<ToolWindows> {
        let profile = ChipProfile::new(chip);
        self.rules
            .iter()
            .filter_map(|rule| {
                let tier = rule.tier_for(&profile)?;
                Some(ToolWindows {
                    tool: rule.name.clone(),
                    tool_type: rule.tool_type,
                    windows: tier.windows.clone(),
                    exclude: tier.exclude.clone(),
                    fallback_for: match &rule.priority {
                        RulePriority::Primary => None,
                        RulePriority::Fallback { defers_to } => Some(defers_to.clone()),
                    },
                })
            })
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(rules: &[ToolRule]) -> Result<(), RuleSetError> {
    let mut primaries_so_far: HashSet<&str> = HashSet::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, rule) in rules.iter().enumerate() {
        if rule.name.trim().is_empty() {
            return Err(RuleSetError::BlankName { index });
        }
        if !seen.insert(rule.name.as_str()) {
            return Err(RuleSetError::DuplicateTool(rule.name.clone()));
        }
        if rule.tiers.is_empty() {
            return Err(RuleSetError::NoTiers(rule.name.clone()));
        }
        for (tier_index, tier) in rule.tiers.iter().enumerate() {
            if tier.windows.is_empty() {
                return Err(RuleSetError::EmptyTier { tool: rule.name.clone(), tier: tier_index });
            }
            for window in tier.windows.iter().chain(tier.exclude.iter()) {
                let (min, max) = window.bounds();
                if min > max {
                    return Err(RuleSetError::InvertedRange {
                        tool: rule.name.clone(),
                        min: min.to_string(),
                        max: max.to_string(),
                    });
                }
            }
        }
        match &rule.priority {
            RulePriority::Primary => {
                primaries_so_far.insert(rule.name.as_str());
            }
            RulePriority::Fallback { defers_to } => {
                if !primaries_so_far.contains(defers_to.as_str()) {
                    return Err(RuleSetError::UnknownPrimary {
                        tool: rule.name.clone(),
                        defers_to: defers_to.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rules_pass_validation() {
        assert_eq!(validate(RuleSet::builtin().rules()), Ok(()));
    }

    #[test]
    fn between_is_inclusive_on_both_ends() {
        let pred = ChipPredicate::Between { from: Chip::A7, to: Chip::A9X };
        assert!(pred.matches(&ChipProfile::new(Chip::A7)));
        assert!(pred.matches(&ChipProfile::new(Chip::A9X)));
        assert!(!pred.matches(&ChipProfile::new(Chip::A10)));
        assert!(!pred.matches(&ChipProfile::new(Chip::A6X)));
    }
}
