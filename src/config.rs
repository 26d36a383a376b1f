//! Configuration file support for pharma-search.
//!
//! Provides YAML-based configuration through `pharma-search.config.yml`
//! files, including data structures, file loading, validation, and the
//! merge with command-line overrides.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::network::HttpSearchClient;
use crate::application::dto::OutputFormat;
use crate::application::use_cases::DEFAULT_DEBOUNCE;
use crate::shared::error::SearchError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pharma-search.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub pharmacy_ids: Option<Vec<u32>>,
    pub debounce_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is \
             readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML \
             syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;

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
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    let invalid = |reason: &str, hint: &str| SearchError::Config {
        path: path.to_path_buf(),
        reason: reason.to_string(),
        hint: hint.to_string(),
    };

    if let Some(ref base_url) = config.base_url {
        if base_url.trim().is_empty() {
            return Err(invalid(
                "base_url must not be empty",
                "Remove the field to use the default backend, or set a full URL.",
            )
            .into());
        }
    }

    if let Some(ref pharmacy_ids) = config.pharmacy_ids {
        if pharmacy_ids.is_empty() {
            return Err(invalid(
                "pharmacy_ids must list at least one pharmacy",
                "Remove the field to use the default [1, 2, 3].",
            )
            .into());
        }
    }

    if let Some(ref format) = config.format {
        if let Err(reason) = format.parse::<OutputFormat>() {
            return Err(invalid(&reason, "Use 'text' or 'json'.").into());
        }
    }

    Ok(())
}

impl ConfigFile {
    /// One warning per unknown field, in key order.
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.unknown_fields.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Effective settings after applying defaults, the config file, and
/// command-line overrides, in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub pharmacy_ids: Vec<u32>,
    pub debounce: Duration,
    pub timeout: Duration,
    pub format: OutputFormat,
    /// Non-fatal problems found while loading the config file
    pub warnings: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: HttpSearchClient::DEFAULT_BASE_URL.to_string(),
            pharmacy_ids: HttpSearchClient::DEFAULT_PHARMACY_IDS.to_vec(),
            debounce: DEFAULT_DEBOUNCE,
            timeout: Duration::from_secs(HttpSearchClient::DEFAULT_TIMEOUT_SECONDS),
            format: OutputFormat::default(),
            warnings: Vec::new(),
        }
    }
}

/// Overrides collected from the command line; `None` keeps the lower layer.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub format: Option<OutputFormat>,
    pub debounce_ms: Option<u64>,
}

impl Settings {
    /// Resolves settings for a run started in `working_dir`
    ///
    /// An explicit config path must exist; otherwise the working directory is
    /// searched and a missing file is not an error.
    pub fn resolve(working_dir: &Path, overrides: SettingsOverrides) -> Result<Self> {
        let config = match overrides.config_path {
            Some(ref path) => Some(load_config_from_path(path)?),
            None => discover_config(working_dir)?,
        };

        let mut settings = match config {
            Some(config) => Self::from_config(config),
            None => Self::default(),
        };

        if let Some(base_url) = overrides.base_url {
            if base_url.trim().is_empty() {
                anyhow::bail!(
                    "Invalid --base-url: must not be empty\n\n💡 Hint: Omit the flag to use the \
                     configured backend, or pass a full URL."
                );
            }
            settings.base_url = base_url;
        }
        if let Some(format) = overrides.format {
            settings.format = format;
        }
        if let Some(debounce_ms) = overrides.debounce_ms {
            settings.debounce = Duration::from_millis(debounce_ms);
        }

        Ok(settings)
    }

    /// Layers a validated config file over the defaults.
    pub fn from_config(config: ConfigFile) -> Self {
        let defaults = Self::default();
        let warnings = config.unknown_field_warnings();
        Self {
            base_url: config.base_url.unwrap_or(defaults.base_url),
            pharmacy_ids: config.pharmacy_ids.unwrap_or(defaults.pharmacy_ids),
            debounce: config
                .debounce_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.debounce),
            timeout: config
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            format: config
                .format
                .and_then(|format| format.parse().ok())
                .unwrap_or(defaults.format),
            warnings,
        }
    }
}
