//! Render command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use godoc_config::{CliSettings, Config};
use godoc_renderer::{GodocRenderer, MarkdownWalker};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for rendering a markdown document.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (default: stdin, also `-`).
    input: Option<PathBuf>,

    /// Go package name (overrides config).
    #[arg(short, long, env = "GODOC_PACKAGE")]
    package: Option<String>,

    /// Suppress the first separator after the opening sentence.
    #[arg(long)]
    skip_first_separator: bool,

    /// Disable GitHub Flavored Markdown extensions.
    #[arg(long)]
    no_gfm: bool,

    /// Output file (default: stdout, overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover godoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the input cannot be read
    /// or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = self.cli_settings();
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let markdown = read_input(self.input.as_deref())?;
        let rendered = render_document(&markdown, &config)?;

        match &config.output_path {
            Some(path) => {
                std::fs::write(path, &rendered)?;
                Output::new().success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            package: self.package.clone(),
            skip_first_separator: self.skip_first_separator.then_some(true),
            gfm: self.no_gfm.then_some(false),
            output_path: self.output.clone(),
        }
    }
}

/// Render markdown with the package and parser settings from `config`.
fn render_document(markdown: &str, config: &Config) -> Result<String, CliError> {
    let package = config.require_package()?;
    tracing::info!(
        package,
        skip_first_separator = config.render.skip_first_separator,
        gfm = config.render.gfm,
        "Rendering package documentation"
    );

    let renderer = GodocRenderer::new(package, config.render.skip_first_separator);
    Ok(MarkdownWalker::new(renderer)
        .with_gfm(config.render.gfm)
        .render_markdown(markdown))
}

/// Read markdown from a file, or from stdin when `path` is `None` or `-`.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    let bytes = match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).map_err(|source| CliError::ReadInput {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(String::from_utf8(bytes)?)
}
