//! CLI adapter.

use clap::{Parser, Subcommand};

use crate::app::AppContext;
use crate::app::commands::{backup, config, create, introduce, list, make, switch, update};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "menv")]
#[command(version)]
#[command(about = "Provision and manage a macOS development environment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a complete development environment for a machine profile
    #[clap(visible_alias = "cr")]
    Create {
        /// Profile to create (macbook/mbk, mac-mini/mmn)
        profile: String,
        /// Overwrite existing configuration files
        #[arg(long)]
        overwrite: bool,
        /// Enable verbose Ansible output
        #[arg(short, long)]
        verbose: bool,
    },
    /// Run an individual Ansible task by tag
    #[clap(visible_alias = "mk")]
    Make {
        /// Tag or tag group to run (e.g. rust, python-tools, shell)
        tag: String,
        /// Profile to use (common, macbook/mbk, mac-mini/mmn)
        #[arg(default_value = "common")]
        profile: String,
        /// Overwrite existing configuration files
        #[arg(short, long)]
        overlay: bool,
        /// Enable verbose Ansible output
        #[arg(short, long)]
        verbose: bool,
    },
    /// Interactive setup guide for a machine profile
    #[clap(visible_alias = "itr")]
    Introduce {
        /// Profile (macbook/mbk, mac-mini/mmn)
        profile: String,
        /// Don't wait for input between phases
        #[arg(short, long)]
        no_wait: bool,
    },
    /// Switch VCS identity between personal and work
    #[clap(visible_alias = "sw")]
    Switch {
        /// Identity profile (personal/p, work/w)
        profile: String,
    },
    /// Backup system settings or configurations
    #[clap(visible_alias = "bk")]
    Backup {
        /// Backup target (system, vscode, list)
        target: String,
    },
    /// Manage menv configuration
    #[clap(visible_alias = "cf")]
    Config {
        /// Action to perform (show, create, set)
        action: String,
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        overlay: bool,
    },
    /// Update menv to the latest release
    #[clap(visible_alias = "u")]
    Update,
    /// List available tags for the make command
    #[clap(visible_alias = "ls")]
    List,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let ctx = match AppContext::bootstrap() {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let result: Result<i32, AppError> = match cli.command {
        Commands::Create { profile, overwrite, verbose } => create::execute(
            &ctx.playbook,
            &ctx.deployer,
            &ctx.runner,
            &profile,
            overwrite,
            verbose,
        ),
        Commands::Make { tag, profile, overlay, verbose } => {
            make::execute(&ctx.playbook, &ctx.deployer, &ctx.runner, &tag, &profile, overlay, verbose)
        }
        Commands::Introduce { profile, no_wait } => {
            introduce::execute(&profile, no_wait).map(|()| 0)
        }
        Commands::Switch { profile } => switch::execute(&ctx.identities, &profile).map(|()| 0),
        Commands::Backup { target } => backup::execute(&ctx.ansible, &ctx.config_root, &target),
        Commands::Config { action, overlay } => {
            config::execute(&ctx.identities, &action, overlay).map(|()| 0)
        }
        Commands::Update => update::execute(&ctx.versions).map(|()| 0),
        Commands::List => list::execute(&ctx.playbook).map(|()| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(err.exit_code());
        }
    }
}
