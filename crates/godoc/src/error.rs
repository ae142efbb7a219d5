//! CLI error types.

use godoc_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Input is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}
