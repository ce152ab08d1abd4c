//! Dotted OS version strings and inclusive version windows.
//!
//! Versions compare component-wise with missing trailing components treated
//! as zero, so `"16"`, `"16.0"` and `"16.0.0"` are all equal. Parsing never
//! fails: segments that are not non-negative integers count as `0`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A parsed dotted numeric version such as `16.1.2`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Version {
    segments: Vec<u64>,
}

impl Version {
    /// Parse a version string, tolerating any input.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::default();
        }
        let segments = raw.split('.').map(|seg| seg.trim().parse::<u64>().unwrap_or(0)).collect();
        Self { segments }
    }

    /// Parsed components, exactly as they appeared (no padding).
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Components with trailing zeros removed; equal versions share this form.
    fn significant(&self) -> &[u64] {
        let end = self.segments.iter().rposition(|&s| s != 0).map_or(0, |i| i + 1);
        &self.segments[..end]
    }

    /// True iff `min <= self <= max`.
    pub fn in_range(&self, min: &Version, max: &Version) -> bool {
        self >= min && self <= max
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let a = self.segments.get(i).copied().unwrap_or(0);
            let b = other.segments.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "0");
        }
        let parts: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl From<&str> for Version {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for Version {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

/// Compare two version strings, returning `-1`, `0` or `1`.
pub fn compare_versions(a: &str, b: &str) -> i32 {
    match Version::parse(a).cmp(&Version::parse(b)) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Inclusive range membership on raw strings.
pub fn in_range(version: &str, min: &str, max: &str) -> bool {
    Version::parse(version).in_range(&Version::parse(min), &Version::parse(max))
}

/// One supported OS window of a tool: an inclusive range or a single version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionWindow {
    Range { min: Version, max: Version },
    Exact { exact: Version },
}

impl VersionWindow {
    pub fn range(min: &str, max: &str) -> Self {
        Self::Range { min: Version::parse(min), max: Version::parse(max) }
    }

    pub fn exact(version: &str) -> Self {
        Self::Exact { exact: Version::parse(version) }
    }

    pub fn contains(&self, version: &Version) -> bool {
        match self {
            Self::Range { min, max } => version.in_range(min, max),
            Self::Exact { exact } => version == exact,
        }
    }

    /// Lower and upper bounds (equal for an exact window).
    pub fn bounds(&self) -> (&Version, &Version) {
        match self {
            Self::Range { min, max } => (min, max),
            Self::Exact { exact } => (exact, exact),
        }
    }
}

impl fmt::Display for VersionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range { min, max } => write!(f, "{min}-{max}"),
            Self::Exact { exact } => write!(f, "{exact}"),
        }
    }
}
