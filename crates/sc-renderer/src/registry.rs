//! Shortcode registry and its configuration.

use crate::scanner::is_valid_name;
use crate::shortcodes::{self, BUILTIN_NAMES};
use crate::{RegistryError, Shortcode, ShortcodeAttrs};

/// Enablement and default attributes for one shortcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcodeSettings {
    /// Disabled shortcodes pass through as literal text.
    pub enabled: bool,
    /// Attributes used when the tag doesn't set them.
    pub defaults: ShortcodeAttrs,
}

impl ShortcodeSettings {
    /// Enabled with no defaults.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            defaults: ShortcodeAttrs::new(),
        }
    }

    /// Disabled with no defaults.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            defaults: ShortcodeAttrs::new(),
        }
    }

    /// Add a default attribute.
    #[must_use]
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(key, value);
        self
    }
}

/// Ordered mapping of shortcode name to its settings.
///
/// [`Default`] enables every built-in shortcode with its stock defaults.
///
/// # Example
///
/// ```
/// use sc_renderer::{Registry, RegistryConfig, ShortcodeSettings};
///
/// let mut config = RegistryConfig::default();
/// config.set("quote", ShortcodeSettings::disabled());
/// config.set("random", ShortcodeSettings::enabled().with_default("length", "12"));
///
/// let registry = Registry::from_config(&config).unwrap();
/// assert!(!registry.resolve("quote").unwrap().is_enabled());
/// assert_eq!(registry.resolve("random").unwrap().defaults().get("length"), Some("12"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    entries: Vec<(String, ShortcodeSettings)>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        let entries = BUILTIN_NAMES
            .iter()
            .filter_map(|&name| shortcodes::builtin(name))
            .map(|handler| {
                let settings = ShortcodeSettings {
                    enabled: true,
                    defaults: handler.default_attrs(),
                };
                (handler.name().to_owned(), settings)
            })
            .collect();
        Self { entries }
    }
}

impl RegistryConfig {
    /// Create a configuration with no shortcodes at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the settings for `name`. A replaced entry keeps its position.
    pub fn set(&mut self, name: impl Into<String>, settings: ShortcodeSettings) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = settings;
        } else {
            self.entries.push((name, settings));
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, settings: ShortcodeSettings) -> Self {
        self.set(name, settings);
        self
    }

    /// Get the settings for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ShortcodeSettings> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    /// Get mutable settings for `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ShortcodeSettings> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Disable `name` if configured. Returns whether an entry was found.
    pub fn disable(&mut self, name: &str) -> bool {
        match self.get_mut(name) {
            Some(settings) => {
                settings.enabled = false;
                true
            }
            None => false,
        }
    }

    /// Iterate over entries in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShortcodeSettings)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }
}

/// Registry entry: the handler's spec as configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerSpec {
    /// Tag name.
    pub name: String,
    /// Whether the tag is expanded.
    pub enabled: bool,
    /// Default attributes merged under each occurrence.
    pub defaults: ShortcodeAttrs,
}

/// A handler together with its configured spec.
pub struct RegisteredShortcode {
    spec: HandlerSpec,
    handler: Box<dyn Shortcode>,
}

impl RegisteredShortcode {
    /// Configured spec.
    #[must_use]
    pub fn spec(&self) -> &HandlerSpec {
        &self.spec
    }

    /// Whether occurrences are expanded.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.spec.enabled
    }

    /// Configured default attributes.
    #[must_use]
    pub fn defaults(&self) -> &ShortcodeAttrs {
        &self.spec.defaults
    }

    /// The handler.
    #[must_use]
    pub fn handler(&self) -> &dyn Shortcode {
        self.handler.as_ref()
    }
}

impl std::fmt::Debug for RegisteredShortcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredShortcode")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// Read-only mapping from tag name to handler, built once per configuration.
///
/// Lookup is case-sensitive. The registry is `Send + Sync` and can be shared
/// between concurrent renders.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<RegisteredShortcode>,
}

impl Registry {
    /// Registry with every built-in shortcode enabled and stock defaults.
    #[must_use]
    pub fn builtin() -> Self {
        // Stock defaults always validate
        Self::from_config(&RegistryConfig::default()).unwrap_or_default()
    }

    /// Build a registry, validating names and defaults against the built-in handlers.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownShortcode`] for a name without a handler
    /// and [`RegistryError::InvalidDefault`] for a rejected default.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for (name, settings) in config.iter() {
            let handler = shortcodes::builtin(name).ok_or_else(|| {
                RegistryError::UnknownShortcode {
                    name: name.to_owned(),
                }
            })?;
            registry.insert(handler, settings.clone())?;
        }
        Ok(registry)
    }

    /// Register a custom handler, replacing any entry of the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the handler name is not valid shortcode syntax or
    /// the defaults are rejected.
    pub fn with_shortcode<S: Shortcode + 'static>(
        mut self,
        handler: S,
        settings: ShortcodeSettings,
    ) -> Result<Self, RegistryError> {
        self.insert(Box::new(handler), settings)?;
        Ok(self)
    }

    fn insert(
        &mut self,
        handler: Box<dyn Shortcode>,
        settings: ShortcodeSettings,
    ) -> Result<(), RegistryError> {
        let name = handler.name().to_owned();
        if !is_valid_name(&name) {
            return Err(RegistryError::InvalidName(name));
        }
        handler
            .validate_defaults(&settings.defaults)
            .map_err(|e| RegistryError::InvalidDefault {
                shortcode: name.clone(),
                key: e.key,
                message: e.message,
            })?;

        let entry = RegisteredShortcode {
            spec: HandlerSpec {
                name,
                enabled: settings.enabled,
                defaults: settings.defaults,
            },
            handler,
        };
        if let Some(slot) = self
            .entries
            .iter_mut()
            .find(|e| e.spec.name == entry.spec.name)
        {
            *slot = entry;
        } else {
            self.entries.push(entry);
        }
        Ok(())
    }

    /// Look up a shortcode by exact name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&RegisteredShortcode> {
        self.entries.iter().find(|e| e.spec.name == name)
    }

    /// Iterate over registered shortcodes in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredShortcode> {
        self.entries.iter()
    }

    /// Number of registered shortcodes (enabled or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no shortcodes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
