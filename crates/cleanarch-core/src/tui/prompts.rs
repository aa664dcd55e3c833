//! Charm-style CLI prompts using cliclack

use crate::config::{
    app_name_from_manifest, normalize_features, resolve, AnswersFile, Configuration, FeatureList,
    Profile, RawInput, Router, StateManagement, DEFAULT_APP_NAME,
};
use crate::deps::{self, DependencySet, PackageInstaller};
use crate::docs;
use crate::host::HostConfig;
use crate::layout;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory containing the host manifest
    pub directory: Option<PathBuf>,

    /// App name (falls back to the manifest name)
    pub app_name: Option<String>,

    pub state_management: Option<StateManagement>,

    pub router: Option<Router>,

    pub profile: Option<Profile>,

    /// Comma-separated feature names
    pub features: Option<String>,

    /// Skip package installation
    pub skip_install: bool,

    /// YAML answers file pre-filling the prompts
    pub config_file: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

impl CreateArgs {
    /// Answers given on the command line, merged over the answers file if any
    pub fn answers(&self) -> Result<AnswersFile> {
        let flags = AnswersFile {
            app_name: self.app_name.clone(),
            state_management: self.state_management,
            router: self.router,
            profile: self.profile,
            features: self.features.clone().map(FeatureList::Csv),
            skip_install: self.skip_install.then_some(true),
        };

        match &self.config_file {
            Some(path) => Ok(flags.or(AnswersFile::load(path)?)),
            None => Ok(flags),
        }
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: HostConfig>(host: &C, args: CreateArgs) -> Result<()> {
    tracing::debug!(host = host.name(), ?args, "starting scaffold run");
    cliclack::intro(host.display_name())?;

    // Step 1: Locate the host project
    let project_dir = select_directory(&args)?;
    let manifest = read_manifest(host, &project_dir)?;

    // Step 2: Collect answers
    let answers = args.answers()?;
    let config = if args.yes {
        let config = answers.resolve_with_defaults(Some(manifest.as_str()))?;
        cliclack::log::info(format!(
            "Using {} / {} / {} profile",
            config.state_management, config.router, config.profile
        ))?;
        config
    } else {
        prompt_configuration(answers, &manifest)?
    };

    // Step 3: Check the package tool before touching the filesystem
    if config.skip_install {
        cliclack::log::info("Skipping package installation")?;
    } else {
        check_package_tool(host)?;
    }

    // Step 4: Plan and create the layout
    let plan = layout::plan(&config);
    create_layout(host, &project_dir, &plan).await?;

    // Step 5: Install dependencies
    let dependencies = deps::dependencies_for(&config);
    if !config.skip_install {
        install_dependencies(host, &project_dir, &dependencies).await?;
    }

    // Step 6: Generate documentation
    let doc = docs::render(&config, &plan, &dependencies, host.source_root());
    let doc_path = docs::write_doc(&project_dir, host.doc_file(), &doc).await?;
    cliclack::log::success(format!("Documentation written to {}", doc_path.display()))?;

    // Step 7: Show next steps
    print_next_steps(host, &project_dir, &config)?;

    Ok(())
}

fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", path.display());
    }

    cliclack::log::info(format!("Using directory: {}", path.display()))?;
    Ok(path)
}

fn read_manifest<C: HostConfig>(host: &C, project_dir: &Path) -> Result<String> {
    let manifest_path = project_dir.join(host.manifest_file());
    if !manifest_path.is_file() {
        anyhow::bail!(
            "No {} found in {}. Run this command from the root of a {} project.",
            host.manifest_file(),
            project_dir.display(),
            host.display_name()
        );
    }

    std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))
}

fn prompt_configuration(answers: AnswersFile, manifest: &str) -> Result<Configuration> {
    let app_name = match answers.app_name {
        Some(name) => name,
        None => {
            let default_name =
                app_name_from_manifest(manifest).unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
            cliclack::input("App name")
                .placeholder(&default_name)
                .default_input(&default_name)
                .interact()?
        }
    };

    let state_management = match answers.state_management {
        Some(state) => state,
        None => {
            let mut select = cliclack::select("State management");
            for state in StateManagement::ALL {
                select = select.item(state, state.display_name(), "");
            }
            select.initial_value(StateManagement::Bloc).interact()?
        }
    };

    let router = match answers.router {
        Some(router) => router,
        None => {
            let mut select = cliclack::select("Router");
            for router in Router::ALL {
                select = select.item(router, router.display_name(), "");
            }
            select.initial_value(Router::None).interact()?
        }
    };

    let profile = match answers.profile {
        Some(profile) => profile,
        None => {
            let mut select = cliclack::select("Dependency profile");
            for profile in Profile::ALL {
                select = select.item(profile, profile.display_name(), profile.description());
            }
            select.initial_value(Profile::Standard).interact()?
        }
    };

    let features = match answers.features {
        Some(features) => features.to_csv(),
        None => cliclack::input("Features (comma-separated)")
            .placeholder("auth, profile, settings")
            .validate(|input: &String| {
                if normalize_features(input).is_empty() {
                    Err("Enter at least one feature name.")
                } else {
                    Ok(())
                }
            })
            .interact()?,
    };

    let skip_install = match answers.skip_install {
        Some(skip) => skip,
        None => cliclack::confirm("Skip package installation?")
            .initial_value(false)
            .interact()?,
    };

    let config = resolve(
        &RawInput {
            app_name: &app_name,
            state_management,
            router,
            profile,
            features: &features,
            skip_install,
        },
        Some(manifest),
    )?;

    cliclack::log::success(format!("Features: {}", config.features.join(", ")))?;

    Ok(config)
}

fn check_package_tool<C: HostConfig>(host: &C) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start(format!("Checking {}...", host.package_tool()));

    let info = deps::check_tool(host.package_tool());
    if info.available {
        spinner.stop(format!(
            "Detected {} ({})",
            info.name,
            info.version.as_deref().unwrap_or("unknown")
        ));
        Ok(())
    } else {
        spinner.stop(format!("{} not found", info.name));
        anyhow::bail!(
            "{} is not installed. Install it from {} or re-run with --skip-install.",
            host.package_tool(),
            host.tool_docs_url()
        );
    }
}

async fn create_layout<C: HostConfig>(
    host: &C,
    project_dir: &Path,
    plan: &layout::LayoutPlan,
) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project structure...");

    let source_root = project_dir.join(host.source_root());
    let report = layout::apply(&source_root, plan).await?;

    let mut message = format!(
        "Created {} directories and {} files in {}",
        report.directories_created,
        report.files_created,
        source_root.display()
    );
    if report.files_skipped > 0 {
        message.push_str(&format!(" ({} existing files left untouched)", report.files_skipped));
    }
    spinner.stop(message);

    Ok(())
}

async fn install_dependencies<C: HostConfig>(
    host: &C,
    project_dir: &Path,
    dependencies: &DependencySet,
) -> Result<()> {
    if dependencies.is_empty() {
        return Ok(());
    }

    let installer = PackageInstaller::new(host.package_tool(), project_dir);
    for command in installer.commands(dependencies) {
        cliclack::log::step(format!("This will execute: {}", command))?;
    }

    match installer.install(dependencies).await {
        Ok(()) => {
            cliclack::log::success("Dependencies installed")?;
            Ok(())
        }
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;
            Err(e).context("Dependency installation failed")
        }
    }
}

fn print_next_steps<C: HostConfig>(
    host: &C,
    project_dir: &Path,
    config: &Configuration,
) -> Result<()> {
    let steps = host.next_steps(project_dir, config);

    println!();
    println!("  {}", console::style("Next steps").bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_from_flags_only() {
        let args = CreateArgs {
            features: Some("auth,cart".to_string()),
            skip_install: true,
            ..Default::default()
        };
        let answers = args.answers().unwrap();
        assert_eq!(answers.features, Some(FeatureList::Csv("auth,cart".to_string())));
        assert_eq!(answers.skip_install, Some(true));
        assert!(answers.profile.is_none());
    }

    #[test]
    fn test_flags_override_answers_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("answers.yaml");
        std::fs::write(&path, "profile: minimal\nrouter: go_router\nskip_install: true\n").unwrap();

        let args = CreateArgs {
            profile: Some(Profile::Full),
            config_file: Some(path),
            ..Default::default()
        };
        let answers = args.answers().unwrap();
        assert_eq!(answers.profile, Some(Profile::Full));
        assert_eq!(answers.router, Some(Router::GoRouter));
        // an unset flag does not override the file
        assert_eq!(answers.skip_install, Some(true));
    }
}
