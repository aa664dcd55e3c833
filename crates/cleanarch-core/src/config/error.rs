//! Error types raised while building a configuration

use std::path::PathBuf;
use thiserror::Error;

/// Validation failure from the configuration resolver
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("at least one feature name is required (e.g. auth, profile)")]
    EmptyFeatureList,
}

/// Failure loading an answers file
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read answers file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse answers file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
