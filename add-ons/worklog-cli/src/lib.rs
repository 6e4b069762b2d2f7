//! worklog: prompt for today's entry, fold it into the gist document, save it back.
//!
//! `main.rs` only sets up the environment; the flow lives in [`run`] so it can be driven with a
//! scripted operator and an in-memory store.

mod terminal;

pub use terminal::TerminalOperator;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use worklog_core::{collect_answers, merge_entry, MergeOutcome, Operator, WorklogConfig, DATE_FORMAT};
use worklog_gist::DocumentStore;

/// Record a daily work-log entry in a gist.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "worklog", version, about)]
pub struct Cli {
    /// Date of the entry (YYYY-MM-DD). Defaults to today's UTC date.
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Print the merged document instead of saving it.
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

#[derive(Debug)]
pub struct RunReport {
    pub date: NaiveDate,
    /// `--date` was given. Drives the "added"/"updated" wording; the document is not consulted.
    pub date_given: bool,
    pub outcome: MergeOutcome,
    pub saved: bool,
}

impl RunReport {
    pub fn confirmation(&self) -> String {
        let verb = if self.date_given { "updated" } else { "added" };
        format!("Entry {} for {}.", verb, self.date.format(DATE_FORMAT))
    }
}

/// Prompt, fetch, merge, save. Store errors are returned as-is with the step as context.
///
/// The prompts block on the terminal, so they run on the blocking pool.
pub async fn run<S, O>(
    cli: &Cli,
    config: &WorklogConfig,
    store: &S,
    mut operator: O,
    today: NaiveDate,
) -> anyhow::Result<RunReport>
where
    S: DocumentStore + ?Sized,
    O: Operator + Send + 'static,
{
    let date = cli.date.unwrap_or(today);
    tracing::info!(date = %date, file = %config.filename, "collecting entry");

    let answers = tokio::task::spawn_blocking(move || collect_answers(&mut operator))
        .await
        .context("prompt task failed")??;

    let previous = store
        .fetch(&config.filename)
        .await
        .with_context(|| format!("fetching {}", config.filename))?;

    let outcome = merge_entry(&previous, date, &answers);

    let saved = if cli.dry_run {
        tracing::info!("dry run; document not saved");
        false
    } else {
        store
            .save(&config.filename, &outcome.document)
            .await
            .with_context(|| format!("saving {}", config.filename))?;
        true
    };

    Ok(RunReport {
        date,
        date_given: cli.date.is_some(),
        outcome,
        saved,
    })
}
