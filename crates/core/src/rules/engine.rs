//! Two-pass rule evaluation.
//!
//! Pass 1 accepts every primary rule whose tier admits the version. Pass 2
//! considers fallbacks, skipping any whose primary was accepted in pass 1.
//! Accepted rules are then put back in declaration order and deduplicated by
//! name, keeping the first occurrence.

use std::collections::HashSet;

use tracing::trace;

use super::{ChipProfile, RulePriority, ToolRule};
use crate::model::ToolMatch;
use crate::version::Version;

pub fn evaluate(rules: &[ToolRule], profile: &ChipProfile, version: &Version) -> Vec<ToolMatch> {
    let mut accepted: Vec<(usize, &ToolRule)> = rules
        .iter()
        .enumerate()
        .filter(|(_, rule)| rule.priority.is_primary() && rule.is_eligible(profile, version))
        .inspect(|(_, rule)| trace!(tool = %rule.name, chip = %profile.chip, %version, "primary matched"))
        .collect();

    let primaries: HashSet<&str> = accepted.iter().map(|&(_, rule)| rule.name.as_str()).collect();
    for (index, rule) in rules.iter().enumerate() {
        let RulePriority::Fallback { defers_to } = &rule.priority else {
            continue;
        };
        if primaries.contains(defers_to.as_str()) {
            trace!(tool = %rule.name, primary = %defers_to, "fallback suppressed");
            continue;
        }
        if rule.is_eligible(profile, version) {
            trace!(tool = %rule.name, chip = %profile.chip, %version, "fallback matched");
            accepted.push((index, rule));
        }
    }

    accepted.sort_by_key(|(index, _)| *index);
    dedup_by_name(accepted.into_iter().map(|(_, rule)| rule.to_match()))
}

fn dedup_by_name(matches: impl IntoIterator<Item = ToolMatch>) -> Vec<ToolMatch> {
    let mut seen = HashSet::new();
    matches.into_iter().filter(|m| seen.insert(m.name.clone())).collect()
}
