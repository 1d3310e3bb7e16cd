//! `sc render` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use sc_config::{CliSettings, Config};
use sc_renderer::{Registry, ShortcodeRenderer};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Input file (default: stdin, also `-`).
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover shortcode.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site base URL for resolving paths (overrides config).
    #[arg(long, env = "SC_BASE_URL")]
    base_url: Option<String>,

    /// Disable a shortcode (repeatable).
    #[arg(long = "disable", value_name = "NAME")]
    disabled: Vec<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging (shows passed-through tags).
    #[arg(long)]
    pub debug: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or reading/writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            base_url: self.base_url,
            disabled: self.disabled,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let renderer = build_renderer(&config)?;

        let input = read_input(self.input.as_deref())?;
        let html = renderer.render(&input);
        tracing::info!(
            input_len = input.len(),
            output_len = html.len(),
            "Rendered shortcodes"
        );

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                Output::new().success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

/// Build a renderer for the loaded configuration.
pub(crate) fn build_renderer(config: &Config) -> Result<ShortcodeRenderer, CliError> {
    let registry = Registry::from_config(&config.registry_config())?;
    Ok(ShortcodeRenderer::new(registry).with_resolver(config.resolver()))
}

/// Read the input file, or stdin when no path or `-` is given.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(sc_config::CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_build_renderer_uses_site_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[site]\nbase_url = \"https://site.test/\"\n");
        let config = Config::load(Some(&path), None).unwrap();

        let renderer = build_renderer(&config).unwrap();
        assert_eq!(
            renderer.render("[button path=\"about\"]About[/button]"),
            r#"<a href="https://site.test/about" class=" button" title="About"><span>About</span></a>"#
        );
    }

    #[test]
    fn test_build_renderer_with_disabled_shortcode() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let cli = CliSettings {
            disabled: vec!["dropcap".to_owned()],
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&cli)).unwrap();

        let renderer = build_renderer(&config).unwrap();
        assert_eq!(
            renderer.render("[dropcap]A[/dropcap][highlight]b[/highlight]"),
            r#"[dropcap]A[/dropcap]<span class=" highlight">b</span>"#
        );
    }

    #[test]
    fn test_build_renderer_rejects_unknown_shortcode() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[shortcodes.marquee]\nenabled = true\n");
        let config = Config::load(Some(&path), None).unwrap();

        let err = build_renderer(&config).err().unwrap();
        assert!(matches!(err, CliError::Registry(_)));
        assert!(err.to_string().contains("marquee"));
    }

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "[item]x[/item]").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "[item]x[/item]");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(Some(&dir.path().join("missing.html"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
