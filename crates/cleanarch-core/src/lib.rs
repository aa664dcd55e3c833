//! cleanarch core - clean architecture scaffolding for mobile projects
//!
//! This library turns a handful of choices (app name, state management,
//! router, dependency profile, feature names) into a directory tree of empty
//! placeholder files, adds the matching packages to the host project, and
//! writes an architecture document describing the result.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure core** - [`config::resolve`] normalizes raw answers and
//!   [`layout::plan`] maps a [`Configuration`] to an ordered [`LayoutPlan`]
//! - **Layer 2: Collaborators** - filesystem applier, dependency catalog and
//!   installer, documentation generator, driven by a [`HostConfig`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```
//! use cleanarch_core::config::{resolve, Profile, RawInput, Router, StateManagement};
//! use cleanarch_core::layout;
//!
//! let config = resolve(
//!     &RawInput {
//!         app_name: "shop",
//!         state_management: StateManagement::Bloc,
//!         router: Router::None,
//!         profile: Profile::Minimal,
//!         features: "auth, profile",
//!         skip_install: true,
//!     },
//!     None,
//! )
//! .unwrap();
//!
//! let plan = layout::plan(&config);
//! assert_eq!(plan.directories.len(), 25);
//! assert_eq!(plan.files.len(), 32);
//! ```

pub mod config;
pub mod deps;
pub mod docs;
pub mod host;
pub mod layout;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Configuration, Profile, ResolveError, Router, StateManagement};
pub use host::HostConfig;
pub use layout::LayoutPlan;

#[cfg(feature = "tui")]
pub use tui::run;
