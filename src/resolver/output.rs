//! Structured resolver output and its flattened `key=value` form.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

use crate::domain::Version;

/// Prefix reapplied to the `v_*` keys
pub const V_PREFIX: &str = "v";

/// Keys a resolver run can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKey {
    Current,
    Major,
    Minor,
    Patch,
    VCurrent,
    VMajor,
    VMinor,
    VPatch,
}

impl OutputKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKey::Current => "current",
            OutputKey::Major => "major",
            OutputKey::Minor => "minor",
            OutputKey::Patch => "patch",
            OutputKey::VCurrent => "v_current",
            OutputKey::VMajor => "v_major",
            OutputKey::VMinor => "v_minor",
            OutputKey::VPatch => "v_patch",
        }
    }

    /// Whether the rendered value carries the `v` prefix
    pub fn is_prefixed(&self) -> bool {
        matches!(
            self,
            OutputKey::VCurrent | OutputKey::VMajor | OutputKey::VMinor | OutputKey::VPatch
        )
    }
}

impl fmt::Display for OutputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Next versions computed by the resolver, already clamped to the minimum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOutput {
    current: Version,
    major: Version,
    minor: Version,
    patch: Version,
    include_current: bool,
}

impl ResolverOutput {
    pub(crate) fn new(current: Version, major: Version, minor: Version, patch: Version) -> Self {
        ResolverOutput {
            current,
            major,
            minor,
            patch,
            include_current: false,
        }
    }

    /// Also emit `current` / `v_current`
    pub fn with_current(mut self, include_current: bool) -> Self {
        self.include_current = include_current;
        self
    }

    pub fn current(&self) -> &Version {
        &self.current
    }

    pub fn major(&self) -> &Version {
        &self.major
    }

    pub fn minor(&self) -> &Version {
        &self.minor
    }

    pub fn patch(&self) -> &Version {
        &self.patch
    }

    /// Keys emitted by this output, in rendering order
    pub fn keys(&self) -> Vec<OutputKey> {
        let mut keys = Vec::with_capacity(8);
        if self.include_current {
            keys.push(OutputKey::Current);
        }
        keys.extend([OutputKey::Major, OutputKey::Minor, OutputKey::Patch]);
        if self.include_current {
            keys.push(OutputKey::VCurrent);
        }
        keys.extend([OutputKey::VMajor, OutputKey::VMinor, OutputKey::VPatch]);
        keys
    }

    /// Rendered value for a key, `None` for keys this output does not emit
    pub fn get(&self, key: OutputKey) -> Option<String> {
        let version = match key {
            OutputKey::Current | OutputKey::VCurrent if !self.include_current => return None,
            OutputKey::Current | OutputKey::VCurrent => &self.current,
            OutputKey::Major | OutputKey::VMajor => &self.major,
            OutputKey::Minor | OutputKey::VMinor => &self.minor,
            OutputKey::Patch | OutputKey::VPatch => &self.patch,
        };

        if key.is_prefixed() {
            Some(version.with_prefix(V_PREFIX))
        } else {
            Some(version.to_string())
        }
    }

    /// Ordered `(key, value)` pairs
    pub fn entries(&self) -> Vec<(OutputKey, String)> {
        self.keys()
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
            .collect()
    }

    /// Newline-joined `key=value` lines, each terminated by a newline
    pub fn to_env_lines(&self) -> String {
        self.entries()
            .into_iter()
            .map(|(key, value)| format!("{}={}\n", key, value))
            .collect()
    }
}

impl Serialize for ResolverOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in &entries {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}
