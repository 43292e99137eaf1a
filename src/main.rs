//! guarded_account - account session replay
//!
//! Reads account commands as JSON lines on stdin and writes one JSON outcome
//! per line to stdout.
//!
//! Run with: cargo run < session.jsonl

use std::io;

use guarded_account::logging::init_tracing;
use guarded_account::{Config, SessionHandler};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    tracing::info!(
        environment = %config.environment,
        min_username_length = config.limits.min_username_length,
        min_initial_balance = %config.limits.min_initial_balance,
        max_balance = %config.limits.max_balance,
        "Starting account session"
    );

    let mut handler = SessionHandler::new(config.limits);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = handler.run(stdin.lock(), stdout.lock())?;

    if summary.total() == 0 {
        tracing::warn!("No commands received on stdin");
    }

    Ok(())
}
