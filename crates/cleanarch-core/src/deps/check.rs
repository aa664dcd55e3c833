//! Detection of the host package tool (e.g. `flutter`)

use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: String,
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether `tool --version` runs successfully
pub fn check_tool(tool: &str) -> ToolInfo {
    let output = Command::new(tool).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let stdout = String::from_utf8_lossy(&out.stdout);
            let version = stdout.lines().next().unwrap_or_default().trim().to_string();
            ToolInfo {
                name: tool.to_string(),
                version: Some(version),
                available: true,
            }
        }
        _ => ToolInfo {
            name: tool.to_string(),
            version: None,
            available: false,
        },
    }
}
