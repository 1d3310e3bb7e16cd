//! Error types.

/// Error building a [`Registry`](crate::Registry) from configuration.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No handler exists for a configured name.
    #[error("Unknown shortcode: {name}")]
    UnknownShortcode {
        /// Configured shortcode name.
        name: String,
    },
    /// A handler reports a name that cannot appear in bracket syntax.
    #[error("Invalid shortcode name: {0:?}")]
    InvalidName(String),
    /// A default attribute value was rejected by its handler.
    #[error("Invalid default for {shortcode}.{key}: {message}")]
    InvalidDefault {
        /// Shortcode name.
        shortcode: String,
        /// Attribute key.
        key: String,
        /// Validation message.
        message: String,
    },
}

/// Default attribute rejected by [`Shortcode::validate_defaults`](crate::Shortcode::validate_defaults).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{key}: {message}")]
pub struct DefaultsError {
    /// Attribute key.
    pub key: String,
    /// Validation message.
    pub message: String,
}

impl DefaultsError {
    /// Create a new defaults error.
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Path resolution failure reported by a [`PathResolver`](crate::PathResolver).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The path cannot be turned into a URL.
    #[error("Cannot resolve path {path:?}: {reason}")]
    Unresolvable {
        /// Path as written in the shortcode.
        path: String,
        /// Why resolution failed.
        reason: String,
    },
}
