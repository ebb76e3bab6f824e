use std::io::IsTerminal;
use std::panic;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use go_launcher::cli::{Dispatcher, Reply};
use go_launcher::config::Config;
use go_launcher::storage::Store;

/// The main CLI command line interface.
///
/// Only the global options are parsed here; the verb and its arguments are
/// passed through untouched so that `-a`, `-h` and `/?` reach the dispatcher.
#[derive(Parser)]
#[command(name = "go")]
#[command(version)]
#[command(disable_help_flag = true)]
#[command(about = "Launch command lines by short identifiers")]
#[command(after_help = "EXAMPLES:\n    \
    go add logs notepad.exe c:\\logs.txt   Store a command under 'logs'\n    \
    go logs                               Launch the command stored as 'logs'\n    \
    go list order                         Show stored commands, sorted\n    \
    go move logs journal                  Rename 'logs' to 'journal'\n\n\
    Run 'go help' for the full list of verbs.")]
struct Cli {
    /// Store file to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Wait for launched commands to exit
    #[arg(long)]
    wait: bool,

    /// Enable verbose output for debugging
    #[arg(long)]
    verbose: bool,

    /// A verb or an identifier, followed by its arguments
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "go_launcher=debug,go=debug"
    } else {
        "go_launcher=warn,go=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match panic::catch_unwind(|| run(cli)) {
        Ok(Ok(reply)) => print_reply(&reply),
        Ok(Err(e)) => println!("{}", format!("Unexpected error: {e:#}").yellow()),
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown failure".to_string());
            println!("{}", format!("Unexpected error: {detail}").yellow());
        }
    }
}

/// Resolves configuration, builds the dispatcher and runs one invocation.
fn run(cli: Cli) -> Result<Reply> {
    let config = Config::load()?;
    let store_path = config.resolve_store_path(cli.store)?;
    tracing::debug!(store = %store_path.display(), "resolved store");

    let dispatcher = Dispatcher::new(Store::new(store_path), config.launcher(cli.wait));
    Ok(dispatcher.dispatch(&cli.tokens))
}

fn print_reply(reply: &Reply) {
    if reply.message.is_empty() {
        return;
    }
    if reply.is_error {
        println!("{}", reply.message.yellow());
    } else {
        println!("{}", reply.message);
    }
}
