//! kelp CLI - kubectl wrapper that decodes secrets and trims noisy YAML

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use kelp::config::Settings;
use kelp::utils::KelpError;
use std::io;

const USAGE: &str = "Usage: kelp [kubectl arguments]";

#[derive(Parser, Debug)]
#[command(name = "kelp")]
#[command(author, version, about = "kubectl wrapper that decodes secrets and trims noisy YAML", long_about = None)]
struct Cli {
    /// Path to the kubeconfig file (used with --list-pods)
    #[arg(long)]
    kubeconfig: Option<String>,

    /// Namespace to list pods from
    #[arg(long)]
    namespace: Option<String>,

    /// List all pods in the namespace along with their init containers and containers
    #[arg(long)]
    list_pods: bool,

    /// Verbose output (can be used multiple times: -v, -vv, -vvv)
    /// -v: INFO, -vv: DEBUG, -vvv: TRACE
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completion: Option<Shell>,

    /// Arguments forwarded to kubectl
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    kelp::utils::logger::init(cli.verbose);

    let settings = Settings::load();
    if !settings.colors.enabled {
        colored::control::set_override(false);
    }

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "kelp", &mut io::stdout());
        return Ok(());
    }

    // Failures are reported but never turn into a non-zero exit code
    if let Err(e) = dispatch(cli, &settings) {
        e.display();
    }

    Ok(())
}

fn dispatch(cli: Cli, settings: &Settings) -> Result<(), KelpError> {
    if cli.list_pods {
        let kubeconfig = settings.kubeconfig(cli.kubeconfig);
        let namespace = settings.namespace(cli.namespace);
        if !cli.args.is_empty() {
            tracing::debug!("ignoring {} trailing arguments", cli.args.len());
        }
        return kelp::commands::pods::list(&kubeconfig, &namespace);
    }

    if cli.args.is_empty() {
        println!("{}", USAGE);
        return Ok(());
    }

    kelp::commands::passthrough::run(&cli.args)
}
