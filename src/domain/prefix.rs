//! Recognised version prefixes such as `v1.2.3` or `release-1.2.3`.

use crate::error::{NextSemVersError, Result};

/// Prefixes stripped by default, in priority order
pub const DEFAULT_PREFIXES: [&str; 2] = ["v", "release-"];

/// Ordered list of prefixes that may precede a version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPrefixes {
    prefixes: Vec<String>,
}

impl VersionPrefixes {
    /// Build a prefix list, rejecting an empty list or empty entries
    pub fn new<I, S>(prefixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes: Vec<String> = prefixes.into_iter().map(Into::into).collect();
        if prefixes.is_empty() {
            return Err(NextSemVersError::config(
                "At least one version prefix must be configured",
            ));
        }
        if prefixes.iter().any(|p| p.is_empty()) {
            return Err(NextSemVersError::config("Version prefixes must not be empty"));
        }
        // segment counting during coercion relies on prefixes carrying no dots
        if let Some(dotted) = prefixes.iter().find(|p| p.contains('.')) {
            return Err(NextSemVersError::config(format!(
                "Version prefix '{}' must not contain '.'",
                dotted
            )));
        }
        Ok(VersionPrefixes { prefixes })
    }

    /// Remove the first matching prefix, if any.
    ///
    /// At most one prefix is removed: "vrelease-1.0.0" becomes "release-1.0.0".
    pub fn strip<'a>(&self, input: &'a str) -> &'a str {
        self.prefixes
            .iter()
            .find_map(|prefix| input.strip_prefix(prefix.as_str()))
            .unwrap_or(input)
    }
}

impl Default for VersionPrefixes {
    fn default() -> Self {
        VersionPrefixes {
            prefixes: DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}
