//! Subcommand execution.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use dueday_core::config::Settings;
use dueday_rule::error::RuleError;
use dueday_rule::rule::parse;
use dueday_service::date::{parse_date_text, today_utc};
use dueday_service::nextdate::next_date_on;
use dueday_service::task::{DoneOutcome, TaskScheduler};
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::error::{AppError, AppResult};

/// Result of a subcommand, printable as text or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Date { date: String },
    Done(DoneOutcome),
    Rule { rule: String, kind: char },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date { date } | Self::Done(DoneOutcome::Reschedule(date)) => f.write_str(date),
            Self::Done(DoneOutcome::Complete) => f.write_str("complete"),
            Self::Rule { rule, .. } => f.write_str(rule),
        }
    }
}

impl Report {
    /// ## Errors
    /// Returns an error if JSON encoding fails.
    pub fn render(&self, json: bool) -> AppResult<String> {
        if json {
            Ok(serde_json::to_string(self)?)
        } else {
            Ok(self.to_string())
        }
    }
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    error: String,
    kind: &'a str,
}

/// Renders an error for stdout (JSON) or stderr (text).
#[must_use]
pub fn render_error(err: &AppError, json: bool) -> String {
    if !json {
        return format!("error: {err}");
    }
    let report = ErrorReport {
        error: err.to_string(),
        kind: if err.is_validation() {
            "validation"
        } else {
            "internal"
        },
    };
    serde_json::to_string(&report).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to encode error report");
        format!("{{\"error\":{:?}}}", err.to_string())
    })
}

/// ## Summary
/// Runs the parsed command line against loaded settings. The reference day is
/// `--today` when given, otherwise the UTC day of `now`.
///
/// ## Errors
/// Returns [`AppError::ServiceError`] for an unknown scheduler algorithm or a
/// bad `--today`, plus anything [`run`] returns.
pub fn execute(cli: &Cli, settings: &Settings, now: DateTime<Utc>) -> AppResult<Report> {
    let scheduler = TaskScheduler::from_config(&settings.scheduler)?;
    let today = match cli.today.as_deref() {
        Some(text) => parse_date_text(text)?,
        None => today_utc(now),
    };
    run(&cli.command, scheduler, today)
}

/// ## Summary
/// Runs one subcommand relative to the reference day `today`.
///
/// ## Errors
/// Returns an error for invalid rules or dates, and for rules whose next date
/// cannot be computed.
#[tracing::instrument(level = "debug", skip(scheduler))]
pub fn run(command: &Command, scheduler: TaskScheduler, today: NaiveDate) -> AppResult<Report> {
    let report = match command {
        Command::Next { date, repeat } => Report::Date {
            date: next_date_on(today, date, repeat)?,
        },
        Command::Schedule { date, repeat } => Report::Date {
            date: scheduler.execute_date(today, date.as_deref(), repeat)?,
        },
        Command::Done { date, repeat } => {
            Report::Done(scheduler.date_after_done(today, date, repeat)?)
        }
        Command::Check { repeat } => {
            let rule = parse(repeat).map_err(RuleError::from)?;
            Report::Rule {
                rule: rule.to_string(),
                kind: rule.kind().letter(),
            }
        }
    };
    Ok(report)
}
