//! Dependency resolution and installation
//!
//! This module provides:
//! - The package catalog for each configuration
//! - Detection of the host package tool
//! - The installer that shells out to the package tool

pub mod catalog;
pub mod check;
pub mod installer;

pub use catalog::{dependencies_for, DependencySet};
pub use check::{check_tool, ToolInfo};
pub use installer::{InstallError, PackageInstaller};
