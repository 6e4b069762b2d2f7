//! `worklog` binary: environment, logging, then one run.

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use worklog_cli::{run, Cli, TerminalOperator};
use worklog_core::WorklogConfig;
use worklog_gist::GistStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before any env::var calls)
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = dotenv {
        tracing::debug!(error = %e, ".env not loaded; using process environment");
    }

    let cli = Cli::parse();

    let config = match WorklogConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "configuration loaded");

    let store = GistStore::new(&config);
    let today = Utc::now().date_naive();
    let report = run(&cli, &config, &store, TerminalOperator, today).await?;

    if report.saved {
        println!("{}", report.confirmation());
    } else {
        print!("{}", report.outcome.document);
        println!("(dry run) {} Not saved.", report.confirmation());
    }
    Ok(())
}
