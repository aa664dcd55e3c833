//! cleanarch CLI - clean architecture scaffolding for Flutter projects

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use cleanarch_core::config::{Configuration, Profile, Router, StateManagement};
use cleanarch_core::tui::CreateArgs;
use cleanarch_core::{deps, layout, HostConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

/// Flutter host configuration
#[derive(Clone)]
pub struct FlutterHost;

impl HostConfig for FlutterHost {
    fn name(&self) -> &'static str {
        "cleanarch"
    }

    fn display_name(&self) -> &'static str {
        "Flutter Clean Architecture"
    }

    fn manifest_file(&self) -> &'static str {
        "pubspec.yaml"
    }

    fn source_root(&self) -> &'static str {
        "lib"
    }

    fn package_tool(&self) -> &'static str {
        "flutter"
    }

    fn tool_docs_url(&self) -> &'static str {
        "https://docs.flutter.dev/get-started/install"
    }

    fn next_steps(&self, dir: &Path, config: &Configuration) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Add packages if installation was skipped
        if config.skip_install {
            let installer = deps::PackageInstaller::new(self.package_tool(), dir);
            steps.extend(installer.commands(&deps::dependencies_for(config)));
        } else {
            steps.push("flutter pub get".to_string());
        }

        // Step 3: Read the generated overview
        steps.push(format!("Review {}", self.doc_file()));

        // Step 4: Run the app
        steps.push("flutter run".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "cleanarch")]
#[command(about = "CLI for scaffolding clean architecture Flutter projects")]
#[command(version, args_conflicts_with_subcommands = true)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub create: CliCreateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold the clean architecture layout into a Flutter project
    Create(CliCreateArgs),
    /// Print the layout a configuration would produce, without writing anything
    Plan(PlanArgs),
}

/// Choices shared by `create` and `plan`
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ChoiceArgs {
    /// App name (defaults to the name in pubspec.yaml)
    #[arg(short, long)]
    pub name: Option<String>,

    /// State management library
    #[arg(short, long, value_enum)]
    pub state: Option<StateManagement>,

    /// Router package
    #[arg(short, long, value_enum)]
    pub router: Option<Router>,

    /// Dependency profile
    #[arg(short, long, value_enum)]
    pub profile: Option<Profile>,

    /// Feature names (comma-separated: auth,profile,settings)
    #[arg(short, long)]
    pub features: Option<String>,

    /// YAML file with pre-recorded answers
    #[arg(short, long = "config")]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct CliCreateArgs {
    /// Flutter project directory (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    #[command(flatten)]
    pub choices: ChoiceArgs,

    /// Skip `flutter pub add`
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            directory: args.directory,
            app_name: args.choices.name,
            state_management: args.choices.state,
            router: args.choices.router,
            profile: args.choices.profile,
            features: args.choices.features,
            skip_install: args.skip_install,
            config_file: args.choices.config,
            yes: args.yes,
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct PlanArgs {
    /// Directory whose pubspec.yaml supplies the default app name
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    #[command(flatten)]
    pub choices: ChoiceArgs,
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run_plan<C: HostConfig>(host: &C, args: PlanArgs) -> Result<()> {
    let dir = args.directory.clone().unwrap_or_else(|| PathBuf::from("."));
    // The manifest is optional here; it only supplies the default app name
    let manifest = std::fs::read_to_string(dir.join(host.manifest_file())).ok();

    let create_args: CreateArgs = CliCreateArgs {
        directory: args.directory,
        choices: args.choices,
        skip_install: false,
        yes: true,
    }
    .into();
    let config = create_args
        .answers()?
        .resolve_with_defaults(manifest.as_deref())?;

    let plan = layout::plan(&config);
    layout::print_preview(
        &config,
        &plan,
        &deps::dependencies_for(&config),
        host.source_root(),
    );

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Interrupts abort the run; partial output stays in place
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    let host = FlutterHost;

    let result = match args.command {
        Some(Command::Create(create_args)) => {
            cleanarch_core::run(&host, create_args.into()).await
        }
        Some(Command::Plan(plan_args)) => run_plan(&host, plan_args),
        // No subcommand provided, default to create behavior
        None => cleanarch_core::run(&host, args.create.into()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn config(skip_install: bool) -> Configuration {
        Configuration {
            app_name: "demo".to_string(),
            state_management: StateManagement::Bloc,
            router: Router::None,
            profile: Profile::Minimal,
            features: vec!["auth".to_string()],
            skip_install,
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_create_flags() {
        let args = Args::try_parse_from([
            "cleanarch",
            "create",
            "--state",
            "riverpod",
            "--router",
            "go_router",
            "--profile",
            "full",
            "--features",
            "auth,cart",
            "--skip-install",
            "--yes",
        ])
        .unwrap();

        let Some(Command::Create(create)) = args.command else {
            panic!("expected create subcommand");
        };
        let create: CreateArgs = create.into();
        assert_eq!(create.state_management, Some(StateManagement::Riverpod));
        assert_eq!(create.router, Some(Router::GoRouter));
        assert_eq!(create.profile, Some(Profile::Full));
        assert_eq!(create.features.as_deref(), Some("auth,cart"));
        assert!(create.skip_install);
        assert!(create.yes);
    }

    #[test]
    fn test_flags_without_subcommand_create() {
        let args = Args::try_parse_from(["cleanarch", "--features", "home", "-y"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.create.choices.features.as_deref(), Some("home"));
        assert!(args.create.yes);
    }

    #[test]
    fn test_next_steps_list_install_commands_when_skipped() {
        let dir = PathBuf::from("/tmp/cleanarch-next-steps");
        let steps = FlutterHost.next_steps(&dir, &config(true));
        assert_eq!(steps[0], "cd /tmp/cleanarch-next-steps");
        assert!(steps.contains(&"flutter pub add flutter_bloc bloc equatable".to_string()));
        assert_eq!(steps.last().map(String::as_str), Some("flutter run"));
    }

    #[test]
    fn test_next_steps_after_install() {
        let dir = PathBuf::from("/tmp/cleanarch-next-steps");
        let steps = FlutterHost.next_steps(&dir, &config(false));
        assert!(steps.contains(&"flutter pub get".to_string()));
        assert!(steps.contains(&"Review ARCHITECTURE.md".to_string()));
    }
}
