//! Configuration management for the shortcode engine.
//!
//! Parses `shortcode.toml` files with serde and provides auto-discovery of
//! the config file in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [site]
//! base_url = "${SITE_URL:-http://localhost/}"
//!
//! [shortcodes.random]
//! defaults = { length = 12 }
//!
//! [shortcodes.quote]
//! enabled = false
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `site.base_url` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use sc_renderer::{RegistryConfig, ShortcodeSettings, SiteResolver};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only set fields override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site base URL.
    pub base_url: Option<String>,
    /// Shortcodes to disable in addition to the configured ones.
    pub disabled: Vec<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "shortcode.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Per-shortcode overrides as parsed from TOML.
    shortcodes: BTreeMap<String, ShortcodeConfigRaw>,

    /// Resolved registry configuration (set after loading).
    #[serde(skip)]
    pub shortcodes_resolved: RegistryConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            shortcodes: BTreeMap::new(),
            shortcodes_resolved: RegistryConfig::default(),
            config_path: None,
        }
    }
}

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL for `<front>` and relative `path` attributes.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost/".to_owned(),
        }
    }
}

/// Raw shortcode section as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ShortcodeConfigRaw {
    enabled: Option<bool>,
    defaults: BTreeMap<String, toml::Value>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Convert a TOML scalar into an attribute value.
fn attribute_value(value: &toml::Value, field: &str) -> Result<String, ConfigError> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(n) => Ok(n.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        _ => Err(ConfigError::Validation(format!(
            "{field} must be a string, number or boolean"
        ))),
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `shortcode.toml` in the current directory and parents, falling back
    /// to the defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// a value doesn't validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.site.base_url.clone_from(base_url);
        }
        for name in &settings.disabled {
            if !self.shortcodes_resolved.disable(name) {
                // Kept so building the registry reports the unknown name
                self.shortcodes_resolved
                    .set(name.clone(), ShortcodeSettings::disabled());
            }
        }
    }

    /// Search for the config file in `start` and its parents.
    #[must_use]
    pub fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.resolve_shortcodes()?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_http_url(&self.site.base_url, "site.base_url")
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;
        Ok(())
    }

    /// Merge `[shortcodes.*]` sections over the stock registry configuration.
    ///
    /// `enabled` replaces the stock flag and `defaults` keys override the
    /// stock defaults one by one. Names without a built-in handler are kept.
    fn resolve_shortcodes(&mut self) -> Result<(), ConfigError> {
        let mut resolved = RegistryConfig::default();

        for (name, raw) in &self.shortcodes {
            let mut defaults = Vec::with_capacity(raw.defaults.len());
            for (key, value) in &raw.defaults {
                let field = format!("shortcodes.{name}.defaults.{key}");
                defaults.push((key, attribute_value(value, &field)?));
            }

            if let Some(settings) = resolved.get_mut(name) {
                if let Some(enabled) = raw.enabled {
                    settings.enabled = enabled;
                }
                for (key, value) in defaults {
                    settings.defaults.insert(key.clone(), value);
                }
            } else {
                let settings = defaults.into_iter().fold(
                    ShortcodeSettings {
                        enabled: raw.enabled.unwrap_or(true),
                        ..ShortcodeSettings::enabled()
                    },
                    |settings, (key, value)| settings.with_default(key.clone(), value),
                );
                resolved.set(name.clone(), settings);
            }
        }

        self.shortcodes_resolved = resolved;
        Ok(())
    }

    /// Registry configuration with file and CLI overrides applied.
    #[must_use]
    pub fn registry_config(&self) -> RegistryConfig {
        self.shortcodes_resolved.clone()
    }

    /// Path resolver for the configured site.
    #[must_use]
    pub fn resolver(&self) -> SiteResolver {
        SiteResolver::new(self.site.base_url.clone())
    }
}
