//! `random` shortcode.

use crate::{DefaultsError, RenderContext, Shortcode, ShortcodeAttrs, ShortcodeOutput};

/// Length used when none is configured or the given one is invalid.
pub const DEFAULT_LENGTH: usize = 8;
/// Longest string the shortcode will produce.
pub const MAX_LENGTH: usize = 99;

/// `[random length=N/]`
///
/// Emits `N` random alphanumeric characters drawn from the context's
/// [`RandomSource`](crate::RandomSource). Content is ignored.
pub struct Random;

impl Shortcode for Random {
    fn name(&self) -> &str {
        "random"
    }

    fn default_attrs(&self) -> ShortcodeAttrs {
        ShortcodeAttrs::new().with("length", DEFAULT_LENGTH.to_string())
    }

    fn validate_defaults(&self, defaults: &ShortcodeAttrs) -> Result<(), DefaultsError> {
        match defaults.get("length") {
            Some(value) if parse_length(value).is_none() => Err(DefaultsError::new(
                "length",
                format!("expected an integer between 1 and {MAX_LENGTH}, got {value:?}"),
            )),
            _ => Ok(()),
        }
    }

    fn render(
        &self,
        attrs: &ShortcodeAttrs,
        _content: &str,
        ctx: &RenderContext<'_>,
    ) -> ShortcodeOutput {
        let length = match attrs.get("length") {
            None => DEFAULT_LENGTH,
            Some(value) => parse_length(value).unwrap_or_else(|| {
                tracing::warn!(length = value, "Invalid random length, using default");
                DEFAULT_LENGTH
            }),
        };
        ShortcodeOutput::html(ctx.random_string(length))
    }
}

fn parse_length(value: &str) -> Option<usize> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_LENGTH).contains(n))
}
