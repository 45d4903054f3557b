//! Domain logic - version values and prefix rules, independent of I/O

pub mod prefix;
pub mod version;

pub use prefix::{VersionPrefixes, DEFAULT_PREFIXES};
pub use version::{Version, VersionBump};
