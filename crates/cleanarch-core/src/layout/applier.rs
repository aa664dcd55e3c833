//! Creates a planned layout on disk

use crate::layout::planner::LayoutPlan;
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Counts of what [`apply`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Planned directories that did not exist before
    pub directories_created: usize,
    pub files_created: usize,
    /// Files that already existed and were left untouched
    pub files_skipped: usize,
}

/// Create every planned directory, then every planned file, under `source_root`.
///
/// Directory creation is idempotent. Files are created empty only when absent;
/// existing files keep their content.
pub async fn apply(source_root: &Path, plan: &LayoutPlan) -> Result<ApplyReport> {
    fs::create_dir_all(source_root)
        .await
        .with_context(|| format!("Failed to create directory: {}", source_root.display()))?;

    let mut report = ApplyReport::default();

    for dir in &plan.directories {
        let target = source_root.join(dir);
        let existed = fs::try_exists(&target)
            .await
            .with_context(|| format!("Failed to check directory: {}", target.display()))?;
        fs::create_dir_all(&target)
            .await
            .with_context(|| format!("Failed to create directory: {}", target.display()))?;
        if !existed {
            report.directories_created += 1;
        }
    }

    for file in &plan.files {
        let target = source_root.join(file);
        if create_if_absent(&target).await? {
            report.files_created += 1;
        } else {
            tracing::debug!(path = %target.display(), "file exists, leaving untouched");
            report.files_skipped += 1;
        }
    }

    tracing::info!(
        directories = report.directories_created,
        created = report.files_created,
        skipped = report.files_skipped,
        "applied layout"
    );

    Ok(report)
}

/// Returns `false` if the file already existed
async fn create_if_absent(path: &Path) -> Result<bool> {
    match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to create file: {}", path.display())),
    }
}
