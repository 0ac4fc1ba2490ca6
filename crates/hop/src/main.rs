//! hop - Jump to, inspect, and launch saved project directories
//!
//! Usage:
//!   hop [QUERY]             Switch to a project (partial names match)
//!   hop -s, --save [NAME]   Save the current directory as a project
//!   hop -d, --delete [QUERY]  Delete a saved project
//!   hop -v, --view [QUERY]  Open a project in the file explorer
//!   hop -o, --open [QUERY]  Run a start script or open IDE files
//!   hop -e, --edit [QUERY]  Open a project in $EDITOR
//!   hop --reset             Forget every saved project

use std::process;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use hop::commands;
use hop::error::HopError;
use hop::launch::SystemLauncher;
use hop::prompt::Stdin;
use hop::registry::Store;
use hop::shell::ShellBridge;

/// Hop - jump to, inspect, and launch saved project directories
#[derive(Parser)]
#[command(name = "hop")]
#[command(about = "Quickly open and interact with project directories")]
#[command(version)]
#[command(group = ArgGroup::new("action").args(["save", "delete", "view", "open", "edit", "reset"]))]
#[command(after_help = r#"MATCHING:
    QUERY may be a partial name. An exact name wins; otherwise any project
    whose name contains QUERY matches, and an ambiguous match prompts you to
    narrow it. An empty line at the prompt lists every saved project again.

EXAMPLES:
    hop                     # Pick a project interactively and cd into it
    hop api                 # cd into the project matching "api"
    hop -s blog             # Save the current directory as "blog"
    hop -d old              # Delete the project matching "old"
    hop -o app              # Run its start script or open its IDE files
    hop -e api              # Open it in $EDITOR
    hop --reset             # Forget every saved project

SHELL SETUP:
    hop runs as a child process and cannot change your shell's directory by
    itself; a small wrapper function applies the handoff. See the README.
"#)]
struct Cli {
    /// Save the current directory as a project
    #[arg(short, long)]
    save: bool,

    /// Delete a saved project
    #[arg(short, long)]
    delete: bool,

    /// Open a project in the system file explorer
    #[arg(short, long)]
    view: bool,

    /// Run a project's start script or open its IDE files
    #[arg(short, long)]
    open: bool,

    /// Open a project in $EDITOR
    #[arg(short, long)]
    edit: bool,

    /// Forget every saved project
    #[arg(long)]
    reset: bool,

    /// Project name, allowing partial match
    #[arg(value_name = "QUERY")]
    query: Option<String>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return;
        }
        Err(err) => fail(HopError::Argument(err.to_string()).into()),
    };

    if let Err(err) = run(cli) {
        fail(err);
    }
}

fn fail(err: anyhow::Error) -> ! {
    eprintln!("{err:#}");
    let code = err.downcast_ref::<HopError>().map_or(1, HopError::exit_code);
    process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let store = Store::open();
    let mut registry = store.load()?;

    let bridge = ShellBridge::new();
    let launcher = SystemLauncher;
    let mut prompter = Stdin;
    let query = cli.query.as_deref().unwrap_or_default();

    if cli.save {
        commands::save(query, &mut registry, &store, &mut prompter)
    } else if cli.delete {
        commands::delete(query, &mut registry, &store, &mut prompter)
    } else if cli.view {
        commands::view(query, &registry, &launcher, &mut prompter)
    } else if cli.open {
        commands::open(query, &registry, &launcher, &bridge, &mut prompter)
    } else if cli.edit {
        commands::edit(query, &registry, &bridge, &mut prompter)
    } else if cli.reset {
        commands::reset(&registry, &store, &mut prompter)
    } else {
        commands::load(query, &registry, &bridge, &mut prompter)
    }
}
