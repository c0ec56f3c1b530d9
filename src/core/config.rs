//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.roster/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{DEFAULT_BASE_URL, PLACEHOLDER_IMAGE_PATH};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub placeholder_path: Option<String>,
    pub image_concurrency: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_IMAGE_CONCURRENCY: usize = 4;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub placeholder_path: String,
    pub image_concurrency: usize,
}

/// Values coming from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.roster/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".roster").join("config.toml"))
}

/// Load config from `~/.roster/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RosterConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RosterConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RosterConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(RosterConfig::default());
    }

    load_config_from(&path)
}

/// Parses the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<RosterConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RosterConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Roster Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://futuramaapi.com/api"   # Or set ROSTER_API_BASE_URL
# timeout_secs = 30                           # Or set ROSTER_TIMEOUT_SECS

# [display]
# placeholder_path = "assets/avatar-placeholder.png"
# image_concurrency = 4
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &RosterConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("ROSTER_API_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Timeout: CLI → env → config → default. Unparsable env values are skipped.
    let timeout_secs = cli
        .timeout_secs
        .or_else(|| {
            std::env::var("ROSTER_TIMEOUT_SECS").ok().and_then(|v| match v.parse() {
                Ok(secs) => Some(secs),
                Err(_) => {
                    warn!("Ignoring invalid ROSTER_TIMEOUT_SECS: {}", v);
                    None
                }
            })
        })
        .or(config.api.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let placeholder_path = config
        .display
        .placeholder_path
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_PATH.to_string());

    ResolvedConfig {
        base_url,
        timeout: Duration::from_secs(timeout_secs),
        placeholder_path,
        image_concurrency: config
            .display
            .image_concurrency
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_IMAGE_CONCURRENCY),
    }
}
