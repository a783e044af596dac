//! Config loading errors

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or validating a sort profile file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// File that was requested
        path: PathBuf,
        /// Underlying io failure
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unexpected keys
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// TOML error with position
        #[source]
        source: toml::de::Error,
    },

    /// No profile with this name
    #[error("unknown profile `{0}`")]
    UnknownProfile(String),

    /// The file parsed but its contents contradict each other
    #[error("invalid config: {0}")]
    Invalid(String),
}
