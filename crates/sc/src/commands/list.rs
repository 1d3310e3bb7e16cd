//! `sc list` command implementation.

use std::path::PathBuf;

use clap::Args;
use sc_config::Config;
use sc_renderer::{RegisteredShortcode, Registry};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Path to configuration file (default: auto-discover shortcode.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ListArgs {
    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or registry is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let registry = Registry::from_config(&config.registry_config())?;

        match &config.config_path {
            Some(path) => output.highlight(&format!("Configuration: {}", path.display())),
            None => output.note("No shortcode.toml found, using defaults"),
        }
        output.note(&format!("Base URL: {}", config.site.base_url));

        for entry in registry.iter() {
            output.line(&describe(entry));
        }

        Ok(())
    }
}

/// One line per shortcode: name, status, then defaults as `key=value`.
fn describe(entry: &RegisteredShortcode) -> String {
    let spec = entry.spec();
    let status = if spec.enabled { "enabled" } else { "disabled" };
    let mut line = format!("{:<10} {status}", spec.name);
    for (key, value) in spec.defaults.iter() {
        line.push(' ');
        line.push_str(key);
        line.push('=');
        line.push_str(value);
    }
    line
}
