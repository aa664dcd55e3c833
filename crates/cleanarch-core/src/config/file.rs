//! Optional YAML answers file used to pre-fill prompts
//!
//! ```yaml
//! app_name: shop_app
//! state_management: riverpod
//! router: go_router
//! profile: full
//! features: [auth, cart]
//! skip_install: true
//! ```

use super::error::{ConfigFileError, ResolveError};
use super::resolver::{resolve, Configuration, Profile, RawInput, Router, StateManagement};
use serde::Deserialize;
use std::path::Path;

/// Feature list in an answers file, either a YAML sequence or a comma-separated string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FeatureList {
    List(Vec<String>),
    Csv(String),
}

impl FeatureList {
    /// Comma-separated form, fed to the resolver like typed input
    pub fn to_csv(&self) -> String {
        match self {
            FeatureList::List(items) => items.join(","),
            FeatureList::Csv(csv) => csv.clone(),
        }
    }
}

/// Pre-recorded answers; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswersFile {
    #[serde(default)]
    pub app_name: Option<String>,

    #[serde(default)]
    pub state_management: Option<StateManagement>,

    #[serde(default)]
    pub router: Option<Router>,

    #[serde(default)]
    pub profile: Option<Profile>,

    #[serde(default)]
    pub features: Option<FeatureList>,

    #[serde(default)]
    pub skip_install: Option<bool>,
}

impl AnswersFile {
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, ConfigFileError> {
        serde_yaml::from_str(content).map_err(|source| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fill unset answers from `fallback`
    pub fn or(self, fallback: AnswersFile) -> AnswersFile {
        AnswersFile {
            app_name: self.app_name.or(fallback.app_name),
            state_management: self.state_management.or(fallback.state_management),
            router: self.router.or(fallback.router),
            profile: self.profile.or(fallback.profile),
            features: self.features.or(fallback.features),
            skip_install: self.skip_install.or(fallback.skip_install),
        }
    }

    /// Resolve without prompting, filling unset choices with defaults.
    /// A missing feature list resolves to an empty one and is rejected.
    pub fn resolve_with_defaults(
        &self,
        manifest: Option<&str>,
    ) -> Result<Configuration, ResolveError> {
        let features = self
            .features
            .as_ref()
            .map(FeatureList::to_csv)
            .unwrap_or_default();
        resolve(
            &RawInput {
                app_name: self.app_name.as_deref().unwrap_or_default(),
                state_management: self.state_management.unwrap_or(StateManagement::Bloc),
                router: self.router.unwrap_or(Router::None),
                profile: self.profile.unwrap_or(Profile::Standard),
                features: &features,
                skip_install: self.skip_install.unwrap_or(false),
            },
            manifest,
        )
    }

    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_answers() {
        let yaml = r#"
app_name: shop_app
state_management: riverpod
router: go_router
profile: full
features: [auth, cart]
skip_install: true
"#;
        let answers = AnswersFile::from_yaml(yaml, Path::new("answers.yaml")).unwrap();
        assert_eq!(answers.app_name.as_deref(), Some("shop_app"));
        assert_eq!(answers.state_management, Some(StateManagement::Riverpod));
        assert_eq!(answers.router, Some(Router::GoRouter));
        assert_eq!(answers.profile, Some(Profile::Full));
        assert_eq!(answers.features.unwrap().to_csv(), "auth,cart");
        assert_eq!(answers.skip_install, Some(true));
    }

    #[test]
    fn test_features_as_string() {
        let answers =
            AnswersFile::from_yaml("features: \"auth, profile\"\n", Path::new("a.yaml")).unwrap();
        assert_eq!(answers.features.unwrap().to_csv(), "auth, profile");
    }

    #[test]
    fn test_partial_answers_default_to_none() {
        let answers = AnswersFile::from_yaml("profile: minimal\n", Path::new("a.yaml")).unwrap();
        assert_eq!(answers.profile, Some(Profile::Minimal));
        assert!(answers.state_management.is_none());
        assert!(answers.features.is_none());
    }

    #[test]
    fn test_or_prefers_self() {
        let flags = AnswersFile {
            profile: Some(Profile::Full),
            ..Default::default()
        };
        let file = AnswersFile {
            profile: Some(Profile::Minimal),
            router: Some(Router::GoRouter),
            ..Default::default()
        };
        let merged = flags.or(file);
        assert_eq!(merged.profile, Some(Profile::Full));
        assert_eq!(merged.router, Some(Router::GoRouter));
        assert!(merged.app_name.is_none());
    }

    #[test]
    fn test_resolve_with_defaults() {
        let answers = AnswersFile {
            features: Some(FeatureList::Csv("Home".to_string())),
            ..Default::default()
        };
        let config = answers.resolve_with_defaults(Some("name: demo\n")).unwrap();
        assert_eq!(config.app_name, "demo");
        assert_eq!(config.state_management, StateManagement::Bloc);
        assert_eq!(config.router, Router::None);
        assert_eq!(config.profile, Profile::Standard);
        assert_eq!(config.features, vec!["home"]);
        assert!(!config.skip_install);
    }

    #[test]
    fn test_resolve_with_defaults_requires_features() {
        assert_eq!(
            AnswersFile::default().resolve_with_defaults(None),
            Err(ResolveError::EmptyFeatureList)
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = AnswersFile::from_yaml("colour: blue\n", Path::new("a.yaml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AnswersFile::load(Path::new("/nonexistent/answers.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/answers.yaml"));
    }
}
