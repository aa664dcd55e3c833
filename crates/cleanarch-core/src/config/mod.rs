//! Configuration resolution
//!
//! This module provides:
//! - The canonical [`Configuration`] and its choice enums
//! - The resolver that normalizes raw answers
//! - An optional YAML answers file for non-interactive runs

pub mod error;
pub mod file;
pub mod resolver;

pub use error::{ConfigFileError, ResolveError};
pub use file::{AnswersFile, FeatureList};
pub use resolver::{
    app_name_from_manifest, normalize_features, resolve, Configuration, Profile, RawInput, Router,
    StateManagement, DEFAULT_APP_NAME,
};
