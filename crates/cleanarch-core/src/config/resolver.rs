//! Turns raw user answers into a canonical [`Configuration`]

use super::error::ResolveError;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// App name used when neither the user nor the host manifest provides one
pub const DEFAULT_APP_NAME: &str = "my_app";

/// State management library used by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateManagement {
    Bloc,
    Riverpod,
    Provider,
    Getx,
}

impl StateManagement {
    pub const ALL: [StateManagement; 4] = [
        StateManagement::Bloc,
        StateManagement::Riverpod,
        StateManagement::Provider,
        StateManagement::Getx,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            StateManagement::Bloc => "BLoC",
            StateManagement::Riverpod => "Riverpod",
            StateManagement::Provider => "Provider",
            StateManagement::Getx => "GetX",
        }
    }

    /// Name of the per-feature presentation directory holding state classes
    pub fn presentation_dir(&self) -> &'static str {
        match self {
            StateManagement::Bloc => "bloc",
            StateManagement::Riverpod => "providers",
            StateManagement::Provider => "notifiers",
            StateManagement::Getx => "controllers",
        }
    }

    /// File name suffixes generated per feature inside [`Self::presentation_dir`]
    pub fn file_suffixes(&self) -> &'static [&'static str] {
        match self {
            StateManagement::Bloc => &["bloc", "event", "state"],
            StateManagement::Riverpod => &["provider"],
            StateManagement::Provider => &["notifier"],
            StateManagement::Getx => &["controller"],
        }
    }
}

impl fmt::Display for StateManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Navigation package wired into the core layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
pub enum Router {
    #[serde(rename = "none")]
    None,
    #[value(name = "go_router", alias = "go-router")]
    #[serde(rename = "go_router", alias = "go-router")]
    GoRouter,
}

impl Router {
    pub const ALL: [Router; 2] = [Router::None, Router::GoRouter];

    pub fn display_name(&self) -> &'static str {
        match self {
            Router::None => "None (Navigator)",
            Router::GoRouter => "go_router",
        }
    }
}

impl fmt::Display for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Dependency profile, ordered by increasing feature set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Minimal,
    Standard,
    Full,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Minimal, Profile::Standard, Profile::Full];

    pub fn display_name(&self) -> &'static str {
        match self {
            Profile::Minimal => "Minimal",
            Profile::Standard => "Standard",
            Profile::Full => "Full",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Profile::Minimal => "state management only, no network layer",
            Profile::Standard => "network, DI and functional error handling",
            Profile::Full => "standard plus storage, connectivity and logging",
        }
    }

    /// Whether the core network files are generated
    pub fn includes_network(&self) -> bool {
        *self != Profile::Minimal
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Answers as collected by a front end, before normalization
#[derive(Debug, Clone)]
pub struct RawInput<'a> {
    pub app_name: &'a str,
    pub state_management: StateManagement,
    pub router: Router,
    pub profile: Profile,
    /// Comma-separated feature names
    pub features: &'a str,
    pub skip_install: bool,
}

/// Canonical scaffolding configuration for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub app_name: String,
    pub state_management: StateManagement,
    pub router: Router,
    pub profile: Profile,
    /// Never empty; duplicates are kept in input order
    pub features: Vec<String>,
    pub skip_install: bool,
}

/// Validate and normalize raw answers.
///
/// `manifest` is the text of the host project manifest, consulted only when
/// the app name answer is blank.
pub fn resolve(raw: &RawInput<'_>, manifest: Option<&str>) -> Result<Configuration, ResolveError> {
    let features = normalize_features(raw.features);
    if features.is_empty() {
        return Err(ResolveError::EmptyFeatureList);
    }

    let app_name = match raw.app_name.trim() {
        "" => manifest
            .and_then(app_name_from_manifest)
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
        name => name.to_string(),
    };

    tracing::debug!(%app_name, ?features, "resolved configuration");

    Ok(Configuration {
        app_name,
        state_management: raw.state_management,
        router: raw.router,
        profile: raw.profile,
        features,
        skip_install: raw.skip_install,
    })
}

/// Split a comma-separated list into trimmed, lowercased, non-empty names
pub fn normalize_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Extract the value of the first top-level `name:` key in a pubspec-style manifest
pub fn app_name_from_manifest(manifest: &str) -> Option<String> {
    manifest
        .lines()
        .find_map(|line| line.strip_prefix("name:"))
        .map(|value| value.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|name| !name.is_empty())
}
