//! `sc` CLI - Shortcode engine.
//!
//! Provides commands for:
//! - `render`: Expand shortcodes in a file or stdin
//! - `list`: Show configured shortcodes and their defaults

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ListArgs, RenderArgs};
use output::Output;

/// sc - Bracket shortcode engine.
#[derive(Parser)]
#[command(name = "sc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand shortcodes in a file or stdin.
    Render(RenderArgs),
    /// List configured shortcodes.
    List(ListArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --debug wins over --verbose, otherwise RUST_LOG or the default (errors only)
    let filter = match &cli.command {
        Commands::Render(args) if args.debug => EnvFilter::new("debug"),
        Commands::Render(args) if args.verbose => EnvFilter::new("info"),
        _ => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::List(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
