//! jailcheck-core
//!
//! Resolves which jailbreak tools apply to an Apple device on a given OS
//! version.
//!
//! The crate holds the device catalog, the version comparator, the tool rule
//! engine and the [`Resolver`] facade tying them together. Resolution is pure
//! and synchronous; the only fallible operations are loading replacement
//! tables from disk (see [`config`]).
//!
//! All substantive logic lives here so frontends (the CLI, listing forms,
//! background jobs) stay thin.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod resolver;
pub mod rules;
pub mod version;

pub use catalog::DeviceCatalog;
pub use error::{CatalogError, ConfigError, RuleSetError};
pub use model::{Chip, CompatibilityVerdict, DeviceRecord, JailbreakStatus, ToolMatch, ToolType};
pub use resolver::{resolve, Resolver};
pub use rules::RuleSet;
pub use version::Version;

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
