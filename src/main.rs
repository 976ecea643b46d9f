//! Contact Book - Main entry point
//!
//! Runs the interactive console over stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{AddressBook, CommandHandler, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(page_size = config.page_size, "Starting contact book");

    let book = AddressBook::with_page_size(config.page_size);
    let mut handler = CommandHandler::new(book, &config);

    let stdin = io::stdin();
    contact_book::cli::run(&mut handler, stdin.lock(), io::stdout(), "> ")?;

    info!(
        contacts = handler.repository().len(),
        "Contact book shutdown complete"
    );
    Ok(())
}
