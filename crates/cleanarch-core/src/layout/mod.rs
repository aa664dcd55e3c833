//! Layout planning and application
//!
//! This module provides:
//! - The pure planner mapping a configuration to directories and files
//! - The applier that creates a plan on disk
//! - A printed preview of a plan

pub mod applier;
pub mod planner;

use crate::config::Configuration;
use crate::deps::DependencySet;
use colored::Colorize;

pub use applier::{apply, ApplyReport};
pub use planner::{parent_of, plan, LayoutPlan};

/// Print a plan to stdout without touching the filesystem
pub fn print_preview(
    config: &Configuration,
    plan: &LayoutPlan,
    deps: &DependencySet,
    source_root: &str,
) {
    println!(
        "{}",
        format!("Layout for {}", config.app_name).cyan().bold()
    );
    println!();
    println!("  {} {}", "State management:".dimmed(), config.state_management);
    println!("  {} {}", "Router:".dimmed(), config.router);
    println!("  {} {}", "Profile:".dimmed(), config.profile);
    println!("  {} {}", "Features:".dimmed(), config.features.join(", "));
    println!();
    println!("{}", crate::docs::render_tree(source_root, plan));
    println!();
    println!(
        "{} {} directories, {} files",
        "Planned".green().bold(),
        plan.directories.len(),
        plan.files.len()
    );
    if !deps.packages.is_empty() {
        println!("{} {}", "Packages:".dimmed(), deps.packages.join(" "));
    }
    if !deps.dev_packages.is_empty() {
        println!("{} {}", "Dev packages:".dimmed(), deps.dev_packages.join(" "));
    }
}
