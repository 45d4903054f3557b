use crate::error::{NextSemVersError, Result};
use semver::BuildMetadata;
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
///
/// Wraps [`semver::Version`] with build metadata always cleared, so ordering
/// follows semver precedence: major, minor, patch, then pre-release.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(semver::Version);

impl Version {
    /// Create a new release version (no pre-release)
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version(semver::Version::new(major, minor, patch))
    }

    /// Parse a strict `MAJOR.MINOR.PATCH[-PRE][+BUILD]` string.
    ///
    /// No prefix is tolerated here; prefix handling lives in
    /// [`VersionPrefixes`](crate::domain::VersionPrefixes). Build metadata is
    /// accepted but discarded.
    pub fn parse(input: &str) -> Result<Self> {
        let mut version = semver::Version::parse(input)
            .map_err(|e| NextSemVersError::invalid_version(input, e.to_string()))?;
        version.build = BuildMetadata::EMPTY;
        Ok(Version(version))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    pub fn is_prerelease(&self) -> bool {
        !self.0.pre.is_empty()
    }

    /// Pre-release identifiers as written, empty for releases
    pub fn pre_release(&self) -> &str {
        self.0.pre.as_str()
    }

    /// The same major.minor.patch with the pre-release dropped
    pub fn release(&self) -> Self {
        Version::new(self.0.major, self.0.minor, self.0.patch)
    }

    /// Bump version according to bump type, dropping any pre-release
    ///
    /// Fails with `InvalidVersion` when the bumped component is already
    /// `u64::MAX`.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let overflow =
            || NextSemVersError::invalid_version(self.to_string(), "component overflow");
        let next = match bump_type {
            VersionBump::Major => {
                semver::Version::new(self.0.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            VersionBump::Minor => semver::Version::new(
                self.0.major,
                self.0.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            VersionBump::Patch => semver::Version::new(
                self.0.major,
                self.0.minor,
                self.0.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(Version(next))
    }

    /// Render with a literal prefix, e.g. `with_prefix("v")` -> "v1.2.3"
    pub fn with_prefix(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self)
    }
}

impl FromStr for Version {
    type Err = NextSemVersError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major(), 1);
        assert_eq!(v.minor(), 2);
        assert_eq!(v.patch(), 3);
        assert!(!v.is_prerelease());
    }

    #[test]
    fn test_version_parse_prerelease() {
        let v = Version::parse("1.2.3-rc.1").unwrap();
        assert!(v.is_prerelease());
        assert_eq!(v.pre_release(), "rc.1");
        assert_eq!(v.to_string(), "1.2.3-rc.1");
    }

    #[test]
    fn test_version_parse_drops_build_metadata() {
        let v = Version::parse("1.2.3+build.5").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("v1.2.3").is_err());
        assert!(Version::parse("1.x.3").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_parse_error_kind() {
        let err = Version::parse("1").unwrap_err();
        assert!(err.is_invalid_version());
        assert_eq!(err.input(), Some("1"));
    }

    #[test]
    fn test_version_release_strips_prerelease() {
        let v = Version::parse("2.0.0-beta.3").unwrap();
        assert_eq!(v.release(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Major).unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Minor).unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Patch).unwrap(), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_clears_prerelease() {
        let v = Version::parse("1.2.3-alpha").unwrap();
        assert_eq!(v.bump(VersionBump::Patch).unwrap().to_string(), "1.2.4");
    }

    #[test]
    fn test_version_bump_overflow() {
        let v = Version::new(u64::MAX, 3, u64::MAX);
        let err = v.bump(VersionBump::Major).unwrap_err();
        assert!(err.is_invalid_version());
        assert_eq!(err.input(), Some("18446744073709551615.3.18446744073709551615"));
        assert!(v.bump(VersionBump::Patch).is_err());
        assert_eq!(
            v.bump(VersionBump::Minor).unwrap(),
            Version::new(u64::MAX, 4, 0)
        );
    }

    #[test]
    fn test_version_ordering() {
        let pre = Version::parse("1.0.0-rc.1").unwrap();
        let release = Version::new(1, 0, 0);
        assert!(pre < release);
        assert!(Version::new(0, 9, 9) < pre);
        assert!(Version::parse("1.0.0-alpha").unwrap() < pre);
        assert!(Version::new(1, 10, 0) > Version::new(1, 9, 0));
    }

    #[test]
    fn test_version_with_prefix() {
        assert_eq!(Version::new(1, 2, 3).with_prefix("v"), "v1.2.3");
    }
}
