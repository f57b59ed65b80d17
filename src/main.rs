//! selector-suggest
//!
//! Terminal host for the selector field of data privacy rules.
//! Type `$` to get value types, press space after a selector to get
//! boolean operators, Tab to open the suggestion menu.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! selector-suggest
//!
//! # One-shot suggestions
//! selector-suggest --format json suggest '$st'
//! ```

use tracing::Level;

use selector_suggest::cli::CliInterface;
use selector_suggest::error::Result;
use selector_suggest::repl::ReplEngine;

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands or start the interactive editor
///
/// # Returns
/// * `Result<()>` - Success or error
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    cli.print_banner();

    run_interactive_mode(&cli)
}

/// Run application in interactive REPL mode
fn run_interactive_mode(cli: &CliInterface) -> Result<()> {
    let config = cli.config();
    let mut repl = ReplEngine::new(cli.catalog()?, &config.history, &config.display)?;

    while repl.is_running() {
        let input = match repl.read_line()? {
            Some(line) if !line.trim().is_empty() => line,
            Some(_) => continue,
            None => break,
        };

        let summary = repl.process_input(&input);
        println!("{}", summary);
    }

    println!("Goodbye!");
    Ok(())
}

/// Initialize logging system based on verbosity level
///
/// # Arguments
/// * `cli` - CLI interface with verbosity settings
fn initialize_logging(cli: &CliInterface) {
    let level: Level = cli.config().logging.level.to_tracing_level();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
