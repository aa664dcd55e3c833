//! Host project configuration trait for CLI binaries
//!
//! This trait describes the kind of project being scaffolded: where its
//! manifest and sources live, which tool adds packages to it, and what to tell
//! the user once scaffolding is done.

use crate::config::Configuration;
use std::path::Path;

/// Configuration trait for a scaffolded project ecosystem
///
/// Each binary implements this trait to define:
/// - Product identity (name, display name)
/// - Manifest file and source root of the host project
/// - Package tool used to add dependencies
/// - Generated document name
/// - Post-setup instructions
pub trait HostConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Manifest file that must exist in the project root (e.g. `pubspec.yaml`)
    fn manifest_file(&self) -> &'static str;

    /// Directory, relative to the project root, that receives the layout
    fn source_root(&self) -> &'static str;

    /// Binary that installs packages (e.g. `flutter`)
    fn package_tool(&self) -> &'static str;

    /// URL for installing the package tool
    fn tool_docs_url(&self) -> &'static str;

    /// File name of the generated architecture document
    fn doc_file(&self) -> &'static str {
        crate::docs::DEFAULT_DOC_FILE
    }

    /// Generate the "next steps" instructions after scaffolding
    fn next_steps(&self, dir: &Path, config: &Configuration) -> Vec<String>;
}
