use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;

use clipstash::cli::{Cli, Operation};
use clipstash::clipboard::SystemClipboard;
use clipstash::config::Config;
use clipstash::logging::init_logging;
use clipstash::ops::{self, Outcome, Session};
use clipstash::prompt::stdin_prompt;
use clipstash::storage::Store;
use clipstash::utils::paths::resolve_store_path;

const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // No operation requested - show help and leave the store untouched
    let Some(operation) = cli.operation() else {
        if let Err(err) = Cli::command().print_help() {
            eprintln!("Error: {err}");
            return ExitCode::from(EXIT_FAILURE);
        }
        println!();
        return ExitCode::SUCCESS;
    };

    let config = Config::load();
    let log_level = config
        .as_ref()
        .map(|config| config.log_level.as_str())
        .unwrap_or("warn");
    init_logging(cli.verbose, log_level);

    let result = config.and_then(|config| run(&cli, &config, operation));

    match result {
        Ok(outcome) => {
            debug!(?outcome, success = outcome.is_success(), "operation finished");
            ExitCode::from(outcome.exit_code())
        }
        Err(err) => {
            debug!(error = ?err, "operation failed");
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: &Cli, config: &Config, operation: Operation) -> Result<Outcome> {
    let path = resolve_store_path(cli.store.as_deref(), config.store_path.as_deref());
    let mut store = Store::open(&path)?;
    debug!(path = %store.path().display(), "store opened");

    let mut prompt = stdin_prompt();
    let mut clipboard =
        SystemClipboard::with_hold(Duration::from_millis(config.clipboard_hold_ms));
    let mut stdout = io::stdout().lock();

    let mut session = Session {
        store: &mut store,
        prompt: prompt.as_mut(),
        clipboard: &mut clipboard,
        out: &mut stdout,
    };

    ops::dispatch(&mut session, operation)
}
