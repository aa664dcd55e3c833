//! Maps a [`Configuration`] to the directories and files of a clean architecture tree
//!
//! Paths are relative to the project's source root and always use `/`.

use crate::config::{Configuration, Router};

/// Root of the shared core layer
pub const CORE_ROOT: &str = "core";

/// Root under which each feature gets its own slice
pub const FEATURES_ROOT: &str = "features";

/// Source file extension for generated placeholders
pub const FILE_EXTENSION: &str = "dart";

/// Core subdirectories created for every configuration
const CORE_DIRS: &[&str] = &[
    "constants",
    "network",
    "error",
    "theme",
    "di",
    "usecase",
    "utils",
];

/// Core files created for every configuration, as (directory, file stem)
const CORE_FILES: &[(&str, &str)] = &[
    ("constants", "app_constants"),
    ("error", "failures"),
    ("error", "exceptions"),
    ("usecase", "usecase"),
    ("theme", "app_theme"),
    ("di", "injection_container"),
];

/// Core network files, skipped by the minimal profile
const NETWORK_FILES: &[(&str, &str)] = &[("network", "network_info"), ("network", "api_client")];

const ROUTER_DIR: &str = "router";
const ROUTER_FILE: (&str, &str) = ("router", "app_router");

const DOMAIN_DIRS: &[&str] = &["entities", "repositories", "usecases"];
const DATA_DIRS: &[&str] = &["models", "datasources", "repositories"];
const PRESENTATION_DIRS: &[&str] = &["pages", "widgets"];

/// Per-feature templates as (layer, directory, file name template).
/// `{}` is replaced by the feature name.
const DOMAIN_FILES: &[(&str, &str, &str)] = &[
    ("domain", "entities", "{}_entity"),
    ("domain", "repositories", "{}_repository"),
    ("domain", "usecases", "get_{}"),
];

const DATA_FILES: &[(&str, &str, &str)] = &[
    ("data", "models", "{}_model"),
    ("data", "datasources", "{}_remote_data_source"),
    ("data", "datasources", "{}_local_data_source"),
    ("data", "repositories", "{}_repository_impl"),
];

const PRESENTATION_FILES: &[(&str, &str, &str)] = &[
    ("presentation", "pages", "{}_page"),
    ("presentation", "widgets", "{}_widget"),
];

/// Application entry files placed directly in the source root
const ENTRY_FILES: &[&str] = &["main", "app"];

/// Ordered directories and files to create for one scaffolding run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutPlan {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

/// Compute the layout for a configuration. Pure and deterministic.
pub fn plan(config: &Configuration) -> LayoutPlan {
    let plan = LayoutPlan {
        directories: plan_directories(config),
        files: plan_files(config),
    };
    tracing::debug!(
        directories = plan.directories.len(),
        files = plan.files.len(),
        "planned layout"
    );
    plan
}

fn plan_directories(config: &Configuration) -> Vec<String> {
    let mut dirs: Vec<String> = CORE_DIRS
        .iter()
        .map(|dir| format!("{CORE_ROOT}/{dir}"))
        .collect();

    if config.router == Router::GoRouter {
        dirs.push(format!("{CORE_ROOT}/{ROUTER_DIR}"));
    }

    let state_dir = config.state_management.presentation_dir();
    for feature in &config.features {
        let base = feature_root(feature);
        dirs.extend(DOMAIN_DIRS.iter().map(|d| format!("{base}/domain/{d}")));
        dirs.extend(DATA_DIRS.iter().map(|d| format!("{base}/data/{d}")));
        dirs.push(format!("{base}/presentation/{state_dir}"));
        dirs.extend(
            PRESENTATION_DIRS
                .iter()
                .map(|d| format!("{base}/presentation/{d}")),
        );
    }

    dirs
}

fn plan_files(config: &Configuration) -> Vec<String> {
    let mut files: Vec<String> = CORE_FILES
        .iter()
        .map(|(dir, stem)| core_file(dir, stem))
        .collect();

    if config.profile.includes_network() {
        files.extend(NETWORK_FILES.iter().map(|(dir, stem)| core_file(dir, stem)));
    }

    if config.router == Router::GoRouter {
        files.push(core_file(ROUTER_FILE.0, ROUTER_FILE.1));
    }

    let state_dir = config.state_management.presentation_dir();
    for feature in &config.features {
        let base = feature_root(feature);
        for (layer, dir, template) in DOMAIN_FILES
            .iter()
            .chain(DATA_FILES)
            .chain(PRESENTATION_FILES)
        {
            let stem = template.replace("{}", feature);
            files.push(format!("{base}/{layer}/{dir}/{stem}.{FILE_EXTENSION}"));
        }
        for suffix in config.state_management.file_suffixes() {
            files.push(format!(
                "{base}/presentation/{state_dir}/{feature}_{suffix}.{FILE_EXTENSION}"
            ));
        }
    }

    files.extend(
        ENTRY_FILES
            .iter()
            .map(|stem| format!("{stem}.{FILE_EXTENSION}")),
    );

    files
}

fn feature_root(feature: &str) -> String {
    format!("{FEATURES_ROOT}/{feature}")
}

fn core_file(dir: &str, stem: &str) -> String {
    format!("{CORE_ROOT}/{dir}/{stem}.{FILE_EXTENSION}")
}

/// Parent directory of a planned path, `None` for paths at the source root
pub fn parent_of(path: &str) -> Option<&str> {
    path.rsplit_once('/').map(|(parent, _)| parent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Profile, StateManagement};

    fn config(
        state_management: StateManagement,
        router: Router,
        profile: Profile,
        features: &[&str],
    ) -> Configuration {
        Configuration {
            app_name: "demo".to_string(),
            state_management,
            router,
            profile,
            features: features.iter().map(|f| f.to_string()).collect(),
            skip_install: true,
        }
    }

    fn all_configs() -> Vec<Configuration> {
        let mut configs = Vec::new();
        for sm in StateManagement::ALL {
            for router in Router::ALL {
                for profile in Profile::ALL {
                    configs.push(config(sm, router, profile, &["auth"]));
                    configs.push(config(sm, router, profile, &["auth", "profile", "auth"]));
                }
            }
        }
        configs
    }

    #[test]
    fn test_bloc_minimal_scenario() {
        let plan = plan(&config(
            StateManagement::Bloc,
            Router::None,
            Profile::Minimal,
            &["auth", "profile"],
        ));

        assert_eq!(plan.directories.len(), 25);
        assert_eq!(plan.files.len(), 32);

        assert_eq!(
            &plan.directories[..7],
            &[
                "core/constants",
                "core/network",
                "core/error",
                "core/theme",
                "core/di",
                "core/usecase",
                "core/utils",
            ]
        );
        assert!(!plan.directories.contains(&"core/router".to_string()));
        assert!(!plan
            .files
            .contains(&"core/network/network_info.dart".to_string()));

        assert_eq!(
            &plan.directories[7..16],
            &[
                "features/auth/domain/entities",
                "features/auth/domain/repositories",
                "features/auth/domain/usecases",
                "features/auth/data/models",
                "features/auth/data/datasources",
                "features/auth/data/repositories",
                "features/auth/presentation/bloc",
                "features/auth/presentation/pages",
                "features/auth/presentation/widgets",
            ]
        );
    }

    #[test]
    fn test_feature_files_in_order() {
        let plan = plan(&config(
            StateManagement::Bloc,
            Router::None,
            Profile::Minimal,
            &["auth"],
        ));
        assert_eq!(
            &plan.files[6..18],
            &[
                "features/auth/domain/entities/auth_entity.dart",
                "features/auth/domain/repositories/auth_repository.dart",
                "features/auth/domain/usecases/get_auth.dart",
                "features/auth/data/models/auth_model.dart",
                "features/auth/data/datasources/auth_remote_data_source.dart",
                "features/auth/data/datasources/auth_local_data_source.dart",
                "features/auth/data/repositories/auth_repository_impl.dart",
                "features/auth/presentation/pages/auth_page.dart",
                "features/auth/presentation/widgets/auth_widget.dart",
                "features/auth/presentation/bloc/auth_bloc.dart",
                "features/auth/presentation/bloc/auth_event.dart",
                "features/auth/presentation/bloc/auth_state.dart",
            ]
        );
        assert_eq!(&plan.files[18..], &["main.dart", "app.dart"]);
    }

    #[test]
    fn test_directory_count_formula() {
        for cfg in all_configs() {
            let router = usize::from(cfg.router == Router::GoRouter);
            let expected = 7 + router + 9 * cfg.features.len();
            assert_eq!(plan(&cfg).directories.len(), expected, "{cfg:?}");
        }
    }

    #[test]
    fn test_file_count_formula() {
        for cfg in all_configs() {
            let network = if cfg.profile == Profile::Minimal { 0 } else { 2 };
            let router = usize::from(cfg.router == Router::GoRouter);
            let state = if cfg.state_management == StateManagement::Bloc {
                3
            } else {
                1
            };
            let expected = 6 + network + router + cfg.features.len() * (9 + state) + 2;
            assert_eq!(plan(&cfg).files.len(), expected, "{cfg:?}");
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        for cfg in all_configs() {
            assert_eq!(plan(&cfg), plan(&cfg));
        }
    }

    #[test]
    fn test_every_file_parent_is_planned() {
        for cfg in all_configs() {
            let plan = plan(&cfg);
            for file in &plan.files {
                if let Some(parent) = parent_of(file) {
                    assert!(
                        plan.directories.iter().any(|d| d == parent),
                        "{file} has no planned parent"
                    );
                }
            }
        }
    }

    #[test]
    fn test_go_router_adds_dir_and_file() {
        let plan = plan(&config(
            StateManagement::Riverpod,
            Router::GoRouter,
            Profile::Minimal,
            &["home"],
        ));
        assert_eq!(plan.directories[7], "core/router");
        assert!(plan
            .files
            .contains(&"core/router/app_router.dart".to_string()));
    }

    #[test]
    fn test_network_files_added_by_standard_and_full() {
        let files = |profile| {
            plan(&config(
                StateManagement::Provider,
                Router::None,
                profile,
                &["home"],
            ))
            .files
        };
        let minimal = files(Profile::Minimal);
        for profile in [Profile::Standard, Profile::Full] {
            let extra: Vec<_> = files(profile)
                .into_iter()
                .filter(|f| !minimal.contains(f))
                .collect();
            assert_eq!(
                extra,
                vec!["core/network/network_info.dart", "core/network/api_client.dart"]
            );
        }
    }

    #[test]
    fn test_state_management_file_shapes() {
        let cases = [
            (StateManagement::Riverpod, "providers/home_provider.dart"),
            (StateManagement::Provider, "notifiers/home_notifier.dart"),
            (StateManagement::Getx, "controllers/home_controller.dart"),
        ];
        for (sm, expected) in cases {
            let plan = plan(&config(sm, Router::None, Profile::Minimal, &["home"]));
            let prefix = format!("features/home/presentation/{}/", sm.presentation_dir());
            let state_files: Vec<_> = plan
                .files
                .iter()
                .filter(|f| f.starts_with(&prefix))
                .collect();
            assert_eq!(
                state_files,
                vec![&format!("features/home/presentation/{expected}")]
            );
        }
    }

    #[test]
    fn test_duplicate_features_duplicate_requests() {
        let plan = plan(&config(
            StateManagement::Getx,
            Router::None,
            Profile::Minimal,
            &["auth", "auth"],
        ));
        let entity_count = plan
            .files
            .iter()
            .filter(|f| f.as_str() == "features/auth/domain/entities/auth_entity.dart")
            .count();
        assert_eq!(entity_count, 2);
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of("core/di/injection_container.dart"), Some("core/di"));
        assert_eq!(parent_of("main.dart"), None);
    }
}
