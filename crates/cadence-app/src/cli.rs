use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cadence_recur::calendar::format_date;
use cadence_recur::{RepeatRule, RepeatType};
use cadence_service::model::EventDraft;
use cadence_service::repeat::{RepeatEventManager, mark_repeat_events};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cadence", version, about = "Expand repeating calendar events")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the occurrence dates of a repeat rule, one per line.
    Dates {
        /// Anchor date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
        /// none, daily, weekly, monthly or yearly.
        #[arg(long = "type", default_value = "none")]
        repeat_type: RepeatType,
        #[arg(long, default_value_t = 1)]
        interval: u32,
        /// Inclusive end date of the rule itself.
        #[arg(long)]
        end_date: Option<NaiveDate>,
        /// Horizon replacing the configured default.
        #[arg(long)]
        until: Option<NaiveDate>,
    },
    /// Expand a JSON event draft into events, printed as JSON.
    Expand {
        /// Path to the draft, or `-` for stdin.
        draft: PathBuf,
        /// Horizon for drafts without an end date, replacing the configured
        /// default.
        #[arg(long)]
        until: Option<NaiveDate>,
    },
}

/// ## Summary
/// Executes a parsed command and returns what should be printed.
///
/// ## Errors
/// Returns an error if the draft cannot be read or parsed, or the repeat rule
/// is invalid.
pub fn run<R: Read>(cli: &Cli, manager: &RepeatEventManager, stdin: R) -> Result<String> {
    match &cli.command {
        Commands::Dates {
            date,
            repeat_type,
            interval,
            end_date,
            until,
        } => {
            let mut rule = RepeatRule::new(*repeat_type, *interval);
            rule.end_date = *end_date;

            let dates = manager.repeat_dates(*date, &rule, *until)?;
            Ok(dates
                .into_iter()
                .map(format_date)
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Commands::Expand { draft, until } => {
            let draft = read_draft(draft, stdin)?;
            tracing::info!(title = %draft.title, repeat = %draft.repeat.repeat_type, "Expanding draft");

            let events = manager.create_until(&draft, *until)?;
            Ok(serde_json::to_string_pretty(&mark_repeat_events(&events))?)
        }
    }
}

fn read_draft<R: Read>(path: &Path, mut stdin: R) -> Result<EventDraft> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .context("Failed to read draft from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read draft from {}", path.display()))?
    };

    serde_json::from_str(&raw).context("Failed to parse event draft")
}
