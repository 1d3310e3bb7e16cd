//! Render context and injected capabilities.
//!
//! Handlers never reach outside the engine directly. URL resolution and
//! randomness are supplied by the caller through [`RenderContext`].

use rand::RngExt;
use rand::distr::Alphanumeric;

use crate::error::ResolveError;

/// Path that resolves to the site root.
pub const FRONT_PAGE: &str = "<front>";

/// Resolves an internal path (e.g. `node/1`, `<front>`) to an absolute URL.
///
/// Implemented for closures, so tests can pass `&|path| Ok(...)`.
pub trait PathResolver: Send + Sync {
    /// Resolve a path to an absolute URL.
    fn resolve(&self, path: &str) -> Result<String, ResolveError>;
}

impl<F> PathResolver for F
where
    F: Fn(&str) -> Result<String, ResolveError> + Send + Sync,
{
    fn resolve(&self, path: &str) -> Result<String, ResolveError> {
        self(path)
    }
}

/// Source of random alphanumeric strings.
pub trait RandomSource: Send + Sync {
    /// Produce an alphanumeric string of exactly `length` characters.
    fn next_string(&self, length: usize) -> String;
}

/// [`RandomSource`] backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_string(&self, length: usize) -> String {
        rand::rng()
            .sample_iter(Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}

/// [`PathResolver`] that joins internal paths onto a site base URL.
///
/// - `<front>` and empty paths resolve to the base URL itself
/// - absolute URLs (`https://…`, `//host`, `mailto:…`, `#anchor`) are kept
/// - anything else is joined to the base URL with a single `/`
///
/// # Example
///
/// ```
/// use sc_renderer::{PathResolver, SiteResolver};
///
/// let resolver = SiteResolver::new("http://example.com/");
/// assert_eq!(resolver.resolve("<front>").unwrap(), "http://example.com/");
/// assert_eq!(resolver.resolve("node/1").unwrap(), "http://example.com/node/1");
/// assert_eq!(resolver.resolve("https://rust-lang.org").unwrap(), "https://rust-lang.org");
/// ```
#[derive(Debug, Clone)]
pub struct SiteResolver {
    base_url: String,
}

impl SiteResolver {
    /// Create a resolver for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Base URL used for `<front>` and relative paths.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for SiteResolver {
    fn default() -> Self {
        Self::new("/")
    }
}

impl PathResolver for SiteResolver {
    fn resolve(&self, path: &str) -> Result<String, ResolveError> {
        let path = path.trim();

        if path.is_empty() || path == FRONT_PAGE {
            return Ok(self.base_url.clone());
        }
        if is_absolute_url(path) {
            return Ok(path.to_owned());
        }
        if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ResolveError::Unresolvable {
                path: path.to_owned(),
                reason: "path contains whitespace".to_owned(),
            });
        }

        Ok(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }
}

/// Check for a URL that must not be joined onto the base URL.
fn is_absolute_url(path: &str) -> bool {
    if path.starts_with("//") || path.starts_with('#') {
        return true;
    }
    path.split_once(':').is_some_and(|(scheme, _)| {
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Capabilities available to shortcode handlers during one render pass.
///
/// # Example
///
/// ```
/// use sc_renderer::{RenderContext, SiteResolver, ThreadRandom};
///
/// let resolver = SiteResolver::new("https://example.com/");
/// let ctx = RenderContext::new(&resolver, &ThreadRandom);
///
/// assert_eq!(ctx.resolve_path("docs"), "https://example.com/docs");
/// assert_eq!(ctx.random_string(8).len(), 8);
/// ```
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// URL resolution for `path` attributes.
    pub resolver: &'a dyn PathResolver,
    /// Randomness for the `random` shortcode.
    pub random: &'a dyn RandomSource,
}

impl<'a> RenderContext<'a> {
    /// Create a context from its capabilities.
    pub fn new(resolver: &'a dyn PathResolver, random: &'a dyn RandomSource) -> Self {
        Self { resolver, random }
    }

    /// Resolve a path, falling back to the raw path if resolution fails.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> String {
        match self.resolver.resolve(path) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(path, error = %e, "Failed to resolve path, using it verbatim");
                path.to_owned()
            }
        }
    }

    /// Draw a random alphanumeric string.
    #[must_use]
    pub fn random_string(&self, length: usize) -> String {
        self.random.next_string(length)
    }
}
