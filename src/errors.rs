use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the rules configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read rules config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid RON for a rules config
    #[error("Malformed rules config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The file declares a version this build does not understand
    #[error("Unsupported rules config version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors raised while loading a combat scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed scenario: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Scenario has no move named {0:?}")]
    UnknownMove(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Type alias for Results using ScenarioError
pub type ScenarioResult<T> = Result<T, ScenarioError>;
