//! godoc-md CLI - Markdown to Go package documentation.
//!
//! Reads a markdown file (or stdin) and writes a `doc.go`-style comment
//! block followed by the package clause.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::RenderArgs;
use output::Output;

/// godoc-md - Render markdown as Go package documentation.
#[derive(Parser)]
#[command(name = "godoc-md", version, about)]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.render.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.render.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
