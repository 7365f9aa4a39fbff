//! Configuration file support for trustify-sbom.
//!
//! Provides YAML-based configuration through `trustify-sbom.config.yml`
//! files and resolves the final settings from, in order of precedence,
//! command-line flags, environment variables, the config file, and defaults.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::application::dto::ToolSettings;
use crate::sbom_generation::policies::ExclusionPolicy;
use crate::shared::error::SbomError;
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "trustify-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub cargo_path: Option<String>,
    pub go_path: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub ignore_method: Option<String>,
    pub log_level: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values given on the command line or through environment variables.
///
/// clap merges the two, so a flag already wins over its variable here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub cargo_path: Option<String>,
    pub go_path: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub ignore_method: Option<ExclusionPolicy>,
}

/// Settings handed to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub tools: ToolSettings,
    pub policy: ExclusionPolicy,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = safe_read_to_string(path, "config file").map_err(|e| {
        SbomError::InvalidConfig {
            message: format!("Failed to read config file {}: {}", path.display(), e),
            hint: "Check that the file exists and is readable.".to_string(),
        }
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).map_err(|e| SbomError::InvalidConfig {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
            hint: "Ensure the file contains valid YAML syntax.".to_string(),
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.timeout_seconds == Some(0) {
        return Err(SbomError::InvalidConfig {
            message: "timeout_seconds must be greater than zero".to_string(),
            hint: "Use a positive number of seconds, e.g. timeout_seconds: 10".to_string(),
        }
        .into());
    }

    if let Some(method) = &config.ignore_method {
        method
            .parse::<ExclusionPolicy>()
            .map_err(|message| SbomError::InvalidConfig {
                message,
                hint: "ignore_method accepts 'insensitive' or 'sensitive'".to_string(),
            })?;
    }

    if let Some(level) = &config.log_level {
        EnvFilter::try_new(level).map_err(|e| SbomError::InvalidConfig {
            message: format!("Invalid log_level '{}': {}", level, e),
            hint: "Use one of error, warn, info, debug, trace".to_string(),
        })?;
    }

    for (name, value) in [("cargo_path", &config.cargo_path), ("go_path", &config.go_path)] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(SbomError::InvalidConfig {
                message: format!("{} must not be empty", name),
                hint: format!("Remove {} to use the executable found on PATH", name),
            }
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Combines overrides, the optional config file, and defaults.
///
/// # Errors
/// Returns an error if the config file's `ignore_method` is invalid
pub fn resolve_settings(
    overrides: SettingsOverrides,
    config: Option<&ConfigFile>,
) -> Result<ResolvedSettings> {
    let defaults = ToolSettings::default();
    let from_config = |pick: fn(&ConfigFile) -> Option<String>| config.and_then(pick);

    let cargo_path = overrides
        .cargo_path
        .or_else(|| from_config(|c| c.cargo_path.clone()))
        .unwrap_or(defaults.cargo_path);
    let go_path = overrides
        .go_path
        .or_else(|| from_config(|c| c.go_path.clone()))
        .unwrap_or(defaults.go_path);
    let timeout = overrides
        .timeout_seconds
        .or_else(|| config.and_then(|c| c.timeout_seconds))
        .map(Duration::from_secs)
        .unwrap_or(defaults.timeout);

    let policy = match overrides.ignore_method {
        Some(policy) => policy,
        None => match from_config(|c| c.ignore_method.clone()) {
            Some(method) => method.parse().map_err(|message| SbomError::InvalidConfig {
                message,
                hint: "ignore_method accepts 'insensitive' or 'sensitive'".to_string(),
            })?,
            None => ExclusionPolicy::default(),
        },
    };

    Ok(ResolvedSettings {
        tools: ToolSettings {
            cargo_path,
            go_path,
            timeout,
        },
        policy,
    })
}
