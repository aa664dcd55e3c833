//! Markdown documentation for a scaffolded project

use crate::config::Configuration;
use crate::deps::DependencySet;
use crate::layout::LayoutPlan;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default name of the generated document
pub const DEFAULT_DOC_FILE: &str = "ARCHITECTURE.md";

// Tree connectors, as drawn by `tree`
const TEE: &str = "├── ";
const ELBOW: &str = "└── ";
const PIPE: &str = "│   ";
const SPACER: &str = "    ";

#[derive(Debug)]
struct TreeNode {
    name: String,
    is_dir: bool,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn dir(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_dir: true,
            children: Vec::new(),
        }
    }

    /// Insert a `/`-separated path, keeping first-seen order and merging repeats
    fn insert(&mut self, path: &str, is_dir: bool) {
        let mut node = self;
        let mut parts = path.split('/').peekable();
        while let Some(part) = parts.next() {
            let leaf_is_dir = parts.peek().is_some() || is_dir;
            let idx = match node.children.iter().position(|c| c.name == part) {
                Some(idx) => idx,
                None => {
                    node.children.push(TreeNode {
                        name: part.to_string(),
                        is_dir: leaf_is_dir,
                        children: Vec::new(),
                    });
                    node.children.len() - 1
                }
            };
            node = &mut node.children[idx];
        }
    }

    fn label(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }

    fn render_children(&self, prefix: &str, lines: &mut Vec<String>) {
        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            let last = i + 1 == count;
            let connector = if last { ELBOW } else { TEE };
            lines.push(format!("{prefix}{connector}{}", child.label()));
            let next_prefix = format!("{prefix}{}", if last { SPACER } else { PIPE });
            child.render_children(&next_prefix, lines);
        }
    }
}

/// Render the planned layout as a tree rooted at `root_name`
pub fn render_tree(root_name: &str, plan: &LayoutPlan) -> String {
    let mut root = TreeNode::dir(root_name);
    for dir in &plan.directories {
        root.insert(dir, true);
    }
    for file in &plan.files {
        root.insert(file, false);
    }

    let mut lines = vec![root.label()];
    root.render_children("", &mut lines);
    lines.join("\n")
}

/// Render the full architecture document
pub fn render(
    config: &Configuration,
    plan: &LayoutPlan,
    deps: &DependencySet,
    source_root: &str,
) -> String {
    let state = config.state_management;
    let mut out = Vec::new();

    out.push(format!("# {} Architecture", config.app_name));
    out.push(String::new());
    out.push(
        "This project follows clean architecture: shared code lives in `core/`, and every \
         feature is an isolated slice with its own domain, data and presentation layers."
            .to_string(),
    );
    out.push(String::new());

    out.push("## Configuration".to_string());
    out.push(String::new());
    out.push("| Option | Value |".to_string());
    out.push("| --- | --- |".to_string());
    out.push(format!("| App name | `{}` |", config.app_name));
    out.push(format!("| State management | {} |", state));
    out.push(format!("| Router | {} |", config.router));
    out.push(format!(
        "| Profile | {} ({}) |",
        config.profile,
        config.profile.description()
    ));
    out.push(String::new());

    out.push("## Features".to_string());
    out.push(String::new());
    out.extend(config.features.iter().map(|f| format!("- `{f}`")));
    out.push(String::new());

    out.push("## Dependencies".to_string());
    out.push(String::new());
    if deps.is_empty() {
        out.push("No packages are required.".to_string());
    } else {
        out.push(format!("- Packages: {}", code_list(&deps.packages)));
        if !deps.dev_packages.is_empty() {
            out.push(format!("- Dev packages: {}", code_list(&deps.dev_packages)));
        }
    }
    if config.skip_install {
        out.push(String::new());
        out.push("Installation was skipped during scaffolding; add these packages manually.".to_string());
    }
    out.push(String::new());

    out.push("## Layers".to_string());
    out.push(String::new());
    out.push("- **Domain**: entities, repository contracts and use cases. No framework code.".to_string());
    out.push("- **Data**: models, remote and local data sources, repository implementations.".to_string());
    out.push(format!(
        "- **Presentation**: pages, widgets and {} state in `presentation/{}/`.",
        state,
        state.presentation_dir()
    ));
    out.push("- **Core**: constants, errors, theme, dependency injection and shared use case base.".to_string());
    out.push(String::new());

    out.push("## Directory Structure".to_string());
    out.push(String::new());
    out.push("```".to_string());
    out.push(render_tree(source_root, plan));
    out.push("```".to_string());
    out.push(String::new());

    out.join("\n")
}

fn code_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("`{item}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write the document into the project directory, replacing any previous copy
pub async fn write_doc(project_dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    let path = project_dir.join(file_name);
    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(path)
}
