use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::domain::{Version, VersionPrefixes, DEFAULT_PREFIXES};
use crate::error::{NextSemVersError, Result};

/// Config file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "./nextsemvers.toml";
/// Config file looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".nextsemvers.toml";

/// Represents the complete configuration for next-semvers.
///
/// Contains the resolver defaults and the output options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the default minimum version floor.
fn default_minimum_version() -> String {
    "0.0.0".to_string()
}

/// Returns the default list of recognised version prefixes.
fn default_prefixes() -> Vec<String> {
    DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect()
}

/// Defaults applied when the command line leaves a resolver input unset.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResolverConfig {
    #[serde(default = "default_minimum_version")]
    pub minimum_version: String,

    #[serde(default)]
    pub strict: bool,

    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            minimum_version: default_minimum_version(),
            strict: false,
            prefixes: default_prefixes(),
        }
    }
}

impl ResolverConfig {
    /// Build the prefix list, validating it
    pub fn version_prefixes(&self) -> Result<VersionPrefixes> {
        VersionPrefixes::new(self.prefixes.iter().cloned())
    }
}

/// How resolved versions are rendered
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `key=value` lines
    #[default]
    Env,
    Json,
}

impl FromStr for OutputFormat {
    type Err = NextSemVersError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "env" => Ok(OutputFormat::Env),
            "json" => Ok(OutputFormat::Json),
            other => Err(NextSemVersError::config(format!(
                "Unknown output format '{}', expected 'env' or 'json'",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Env => write!(f, "env"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Output rendering options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub include_current: bool,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Check the prefixes and the minimum version floor.
    pub fn validate(&self) -> Result<()> {
        let prefixes = self.resolver.version_prefixes()?;
        let minimum = prefixes.strip(&self.resolver.minimum_version);
        Version::parse(minimum).map_err(|e| {
            NextSemVersError::config(format!("Invalid minimum_version: {}", e))
        })?;
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextsemvers.toml` in current directory
/// 3. `.nextsemvers.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| NextSemVersError::config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
