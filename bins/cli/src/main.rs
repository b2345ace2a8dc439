//! Centavo terminal host
//!
//! Attaches a masked currency field to an in-memory text buffer and drives
//! it with one command per stdin line. Field state and notifications are
//! printed to stdout as JSON lines; logs go to stderr.

mod command;
mod scheduler;
mod session;

use std::rc::Rc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::task::LocalSet;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use centavo_shared::AppConfig;

use crate::command::Command;
use crate::scheduler::LocalScheduler;
use crate::session::Session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let seed = std::env::args().nth(1).unwrap_or_default();

    // Deferred callbacks need a local task set on this thread.
    LocalSet::new().run_until(run(config, seed)).await
}

async fn run(config: AppConfig, seed: String) -> anyhow::Result<()> {
    let mut session = Session::new(
        Rc::new(LocalScheduler),
        &seed,
        config.display.currency_symbol,
    );
    info!(display = %session.text(), "Currency field ready");

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let output = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => session.execute(command),
            Err(err) => {
                warn!(input = %line, error = %err, "Rejected command");
                vec![session::error_line(&err)]
            }
        };

        for out in output {
            stdout.write_all(out.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;

        // Give deferred field work its turn before the next command.
        tokio::task::yield_now().await;
    }

    info!(display = %session.text(), "Input closed");
    Ok(())
}
