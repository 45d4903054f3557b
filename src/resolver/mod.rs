//! Computes the next major, minor and patch versions from a current version
//! and a minimum version floor.

pub mod output;

use tracing::{debug, instrument};

use crate::domain::{Version, VersionBump, VersionPrefixes};
use crate::error::Result;

pub use output::{OutputKey, ResolverOutput};

/// Segments in a complete `major.minor.patch` version
const FULL_SEGMENT_COUNT: usize = 3;

/// One resolver invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverInput {
    pub version: String,
    pub minimum_version: String,
    pub strict: bool,
}

impl ResolverInput {
    pub fn new(version: impl Into<String>, minimum_version: impl Into<String>, strict: bool) -> Self {
        ResolverInput {
            version: version.into(),
            minimum_version: minimum_version.into(),
            strict,
        }
    }
}

/// Version resolver configured with the prefixes it strips from its inputs
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    prefixes: VersionPrefixes,
}

impl Resolver {
    pub fn new(prefixes: VersionPrefixes) -> Self {
        Resolver { prefixes }
    }

    pub fn resolve_input(&self, input: &ResolverInput) -> Result<ResolverOutput> {
        self.resolve(&input.version, &input.minimum_version, input.strict)
    }

    /// Resolve the next versions for `version`, never going below `minimum_version`.
    ///
    /// In non-strict mode a partial version such as "1" or "1.2-beta" is
    /// completed with zero segments before parsing. The minimum is always
    /// parsed strictly.
    ///
    /// # Errors
    /// `InvalidVersion` when the version cannot be parsed (or completed), or
    /// when the minimum is malformed.
    #[instrument(skip(self))]
    pub fn resolve(
        &self,
        version: &str,
        minimum_version: &str,
        strict: bool,
    ) -> Result<ResolverOutput> {
        let (parsed, minimum_string) = self.parse_tolerant(version, minimum_version, strict)?;

        let was_prerelease = parsed.is_prerelease();
        let working = if was_prerelease {
            parsed.release()
        } else {
            parsed.clone()
        };

        let major = working.bump(VersionBump::Major)?;
        let minor = working.bump(VersionBump::Minor)?;
        let patch = if was_prerelease {
            working.clone()
        } else {
            working.bump(VersionBump::Patch)?
        };

        let minimum = Version::parse(&minimum_string)?;

        let current = if working < minimum {
            debug!(%minimum, "current below minimum, clamping");
            minimum.clone()
        } else {
            parsed
        };

        Ok(ResolverOutput::new(
            current,
            clamp(major, &minimum, OutputKey::Major),
            clamp(minor, &minimum, OutputKey::Minor),
            clamp(patch, &minimum, OutputKey::Patch),
        ))
    }

    /// Strip prefixes and parse the version, completing missing segments
    /// when not strict.
    ///
    /// Every retry strips prefixes from both strings again, as a fresh
    /// resolve call would. Returns the parsed version together with the
    /// minimum string as stripped by the final attempt.
    ///
    /// Each retry adds exactly one `.`-segment, prefixes carry no dots, and
    /// strings with three or more segments are never retried, so this loops
    /// at most twice.
    fn parse_tolerant(
        &self,
        version: &str,
        minimum_version: &str,
        strict: bool,
    ) -> Result<(Version, String)> {
        let mut candidate = version.to_string();
        let mut minimum = minimum_version.to_string();
        loop {
            let version_string = self.prefixes.strip(&candidate).to_string();
            let minimum_string = self.prefixes.strip(&minimum).to_string();
            if version_string != candidate || minimum_string != minimum {
                debug!(%version_string, %minimum_string, "stripped version prefixes");
            }

            match Version::parse(&version_string) {
                Ok(parsed) => return Ok((parsed, minimum_string)),
                Err(err) => {
                    if strict || segment_count(&version_string) >= FULL_SEGMENT_COUNT {
                        return Err(err);
                    }
                    let coerced = append_zero_segment(&version_string);
                    debug!(from = %version_string, to = %coerced, "coercing partial version");
                    candidate = coerced;
                    minimum = minimum_string;
                }
            }
        }
    }
}

/// Resolve with the default `v` / `release-` prefixes
pub fn resolve(version: &str, minimum_version: &str, strict: bool) -> Result<ResolverOutput> {
    Resolver::default().resolve(version, minimum_version, strict)
}

fn segment_count(input: &str) -> usize {
    input.split('.').count()
}

/// "1.2" -> "1.2.0", "1-beta" -> "1.0-beta"
fn append_zero_segment(input: &str) -> String {
    match input.split_once('-') {
        Some((base, pre_release)) => format!("{}.0-{}", base, pre_release),
        None => format!("{}.0", input),
    }
}

fn clamp(candidate: Version, minimum: &Version, key: OutputKey) -> Version {
    if candidate < *minimum {
        debug!(%key, %candidate, %minimum, "clamping to minimum version");
        minimum.clone()
    } else {
        candidate
    }
}
