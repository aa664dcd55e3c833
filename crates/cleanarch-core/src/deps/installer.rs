//! Adds packages to the host project through its package tool
//!
//! Runs `<tool> pub add ...` in the project directory and streams the tool's
//! output while it works.

use super::catalog::DependencySet;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for a single `pub add` invocation (5 minutes)
pub const INSTALL_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with exit code {code}")]
    Failed { command: String, code: i32 },

    #[error("`{command}` timed out after {secs} seconds")]
    Timeout { command: String, secs: u64 },
}

/// Runs the package tool for one project directory
#[derive(Debug, Clone)]
pub struct PackageInstaller {
    tool: String,
    project_dir: PathBuf,
    timeout: Duration,
}

impl PackageInstaller {
    pub fn new(tool: impl Into<String>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            project_dir: project_dir.into(),
            timeout: INSTALL_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Arguments passed to the tool for one batch of packages
    pub fn add_args(packages: &[&str], dev: bool) -> Vec<String> {
        let mut args = vec!["pub".to_string(), "add".to_string()];
        if dev {
            args.push("--dev".to_string());
        }
        args.extend(packages.iter().map(|p| p.to_string()));
        args
    }

    /// Human-readable commands that [`Self::install`] will run
    pub fn commands(&self, deps: &DependencySet) -> Vec<String> {
        [(&deps.packages, false), (&deps.dev_packages, true)]
            .into_iter()
            .filter(|(packages, _)| !packages.is_empty())
            .map(|(packages, dev)| {
                format!("{} {}", self.tool, Self::add_args(packages, dev).join(" "))
            })
            .collect()
    }

    /// Add regular packages, then dev packages
    pub async fn install(&self, deps: &DependencySet) -> Result<(), InstallError> {
        if !deps.packages.is_empty() {
            self.run(&Self::add_args(&deps.packages, false)).await?;
        }
        if !deps.dev_packages.is_empty() {
            self.run(&Self::add_args(&deps.dev_packages, true)).await?;
        }
        Ok(())
    }

    async fn run(&self, args: &[String]) -> Result<(), InstallError> {
        let command = format!("{} {}", self.tool, args.join(" "));
        println!();
        println!("{} {}", "Running:".dimmed(), command.yellow());
        println!();
        tracing::debug!(%command, dir = %self.project_dir.display(), "spawning package tool");

        let mut child = TokioCommand::new(&self.tool)
            .args(args)
            .current_dir(&self.project_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| InstallError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Stream output and wait for exit under one timeout. Both pipes are
        // drained to EOF so the tool never blocks on a full pipe.
        let run_task = async {
            let mut stdout = stdout.map(BufReader::new);
            let mut stderr = stderr.map(BufReader::new);
            let mut stdout_done = stdout.is_none();
            let mut stderr_done = stderr.is_none();

            while !(stdout_done && stderr_done) {
                tokio::select! {
                    line = next_line(&mut stdout, "stdout"), if !stdout_done => match line {
                        Some(line) => println!("  {}", line),
                        None => stdout_done = true,
                    },
                    line = next_line(&mut stderr, "stderr"), if !stderr_done => match line {
                        Some(line) => eprintln!("  {}", line.yellow()),
                        None => stderr_done = true,
                    },
                }
            }

            child.wait().await
        };

        let status = match timeout(self.timeout, run_task).await {
            Ok(Ok(status)) => status,
            Ok(Err(source)) => return Err(InstallError::Spawn { command, source }),
            Err(_) => {
                return Err(InstallError::Timeout {
                    command,
                    secs: self.timeout.as_secs(),
                })
            }
        };

        if status.success() {
            Ok(())
        } else {
            Err(InstallError::Failed {
                command,
                code: status.code().unwrap_or(-1),
            })
        }
    }
}

/// Read one line, decoding lossily. `None` at EOF or on a read error.
async fn next_line<R>(reader: &mut Option<R>, stream: &str) -> Option<String>
where
    R: AsyncBufRead + Unpin,
{
    let reader = reader.as_mut()?;
    let mut buf = Vec::new();
    match reader.read_until(b'\n', &mut buf).await {
        Ok(0) => None,
        Ok(_) => {
            let line = String::from_utf8_lossy(&buf);
            Some(line.trim_end_matches(['\n', '\r']).to_string())
        }
        Err(e) => {
            tracing::warn!(stream, error = %e, "failed to read package tool output");
            None
        }
    }
}
