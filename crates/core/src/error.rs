//! Errors raised while constructing catalogs and rule sets from external data.
//!
//! Resolution itself never fails; these only surface when a caller injects
//! its own tables.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid device catalog contents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Device record #{index} has a blank name")]
    BlankName { index: usize },

    #[error("Device \"{name}\" lists storage options out of order: {options:?}")]
    UnsortedStorage { name: String, options: Vec<u32> },
}

/// Invalid tool rule table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("Tool rule #{index} has a blank name")]
    BlankName { index: usize },

    #[error("Tool \"{0}\" is declared more than once")]
    DuplicateTool(String),

    #[error("Tool \"{0}\" has no chip tiers")]
    NoTiers(String),

    #[error("Tool \"{tool}\" tier #{tier} has no version windows")]
    EmptyTier { tool: String, tier: usize },

    #[error("Tool \"{tool}\" has an inverted range {min}-{max}")]
    InvertedRange { tool: String, min: String, max: String },

    /// Fallbacks must name a primary rule declared before them.
    #[error("Fallback tool \"{tool}\" defers to \"{defers_to}\", which is not an earlier primary rule")]
    UnknownPrimary { tool: String, defers_to: String },
}

/// Failure loading a resolver configuration or its data files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported data file extension for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid device catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid tool rules: {0}")]
    Rules(#[from] RuleSetError),
}
