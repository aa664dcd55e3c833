//! Package lists for each configuration

use crate::config::{Configuration, Profile, Router, StateManagement};

/// Packages to add to the host project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    pub packages: Vec<&'static str>,
    pub dev_packages: Vec<&'static str>,
}

impl DependencySet {
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty() && self.dev_packages.is_empty()
    }
}

fn state_packages(state: StateManagement) -> &'static [&'static str] {
    match state {
        StateManagement::Bloc => &["flutter_bloc", "bloc"],
        StateManagement::Riverpod => &["flutter_riverpod"],
        StateManagement::Provider => &["provider"],
        StateManagement::Getx => &["get"],
    }
}

/// Packages added by each profile on top of the previous one
fn profile_packages(profile: Profile) -> &'static [&'static str] {
    match profile {
        Profile::Minimal => &["equatable"],
        Profile::Standard => &["dartz", "get_it", "dio", "shared_preferences"],
        Profile::Full => &[
            "connectivity_plus",
            "flutter_secure_storage",
            "hive",
            "intl",
            "logger",
        ],
    }
}

fn profile_dev_packages(profile: Profile) -> &'static [&'static str] {
    match profile {
        Profile::Minimal => &[],
        Profile::Standard => &["mocktail"],
        Profile::Full => &["build_runner"],
    }
}

fn router_packages(router: Router) -> &'static [&'static str] {
    match router {
        Router::None => &[],
        Router::GoRouter => &["go_router"],
    }
}

/// Resolve the packages for a configuration: state management first, then
/// every profile up to the chosen one, then the router.
pub fn dependencies_for(config: &Configuration) -> DependencySet {
    let mut set = DependencySet::default();

    set.packages
        .extend_from_slice(state_packages(config.state_management));

    for profile in Profile::ALL.into_iter().filter(|p| *p <= config.profile) {
        set.packages.extend_from_slice(profile_packages(profile));
        set.dev_packages
            .extend_from_slice(profile_dev_packages(profile));
    }

    set.packages.extend_from_slice(router_packages(config.router));

    set
}
