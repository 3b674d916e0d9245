//! Date policy applied when tasks are created, updated and marked done.

use chrono::NaiveDate;
use dueday_core::config::SchedulerConfig;
use dueday_core::constants::NEXT_DATE_ALGORITHM;
use dueday_core::error::CoreError;
use serde::Serialize;

use crate::date::{format_date, parse_date_text};
use crate::error::ServiceResult;
use crate::nextdate::next_date_on;

/// Next-date algorithms a [`TaskScheduler`] can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateAlgorithm {
    /// Repeat rules resolved by [`next_date_on`].
    NextDate,
}

impl DateAlgorithm {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        (name == NEXT_DATE_ALGORITHM).then_some(Self::NextDate)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NextDate => NEXT_DATE_ALGORITHM,
        }
    }
}

/// What happens to a task that was marked done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "date", rename_all = "snake_case")]
pub enum DoneOutcome {
    /// The task does not repeat; the caller removes it.
    Complete,
    /// The task repeats; its new `YYYYMMDD` date.
    Reschedule(String),
}

#[derive(Debug, Clone, Copy)]
pub struct TaskScheduler {
    algorithm: DateAlgorithm,
}

impl TaskScheduler {
    #[must_use]
    pub const fn new(algorithm: DateAlgorithm) -> Self {
        Self { algorithm }
    }

    /// ## Summary
    /// Builds a scheduler using the algorithm named in the configuration.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidConfiguration`] for an unknown algorithm name.
    pub fn from_config(config: &SchedulerConfig) -> ServiceResult<Self> {
        let algorithm = DateAlgorithm::from_name(&config.algorithm).ok_or_else(|| {
            CoreError::InvalidConfiguration(format!(
                "unknown scheduler algorithm '{}', expected '{NEXT_DATE_ALGORITHM}'",
                config.algorithm
            ))
        })?;
        tracing::debug!(algorithm = algorithm.name(), "Task scheduler configured");
        Ok(Self::new(algorithm))
    }

    #[must_use]
    pub const fn algorithm(self) -> DateAlgorithm {
        self.algorithm
    }

    fn next_date(self, today: NaiveDate, date: &str, repeat: &str) -> ServiceResult<String> {
        match self.algorithm {
            DateAlgorithm::NextDate => next_date_on(today, date, repeat),
        }
    }

    /// ## Summary
    /// Date to store for a created or updated task.
    ///
    /// A missing date means today. A date in the past moves to today when the
    /// task does not repeat, or to its next occurrence when it does. A date
    /// today or later is kept, but a repeat rule is still validated.
    ///
    /// ## Errors
    /// Returns an error for an unparsable date or an invalid repeat rule.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn execute_date(
        self,
        today: NaiveDate,
        date: Option<&str>,
        repeat: &str,
    ) -> ServiceResult<String> {
        let date = match date {
            Some(text) if !text.is_empty() => text.to_owned(),
            _ => format_date(today)?,
        };
        let is_past = parse_date_text(&date)? < today;

        if repeat.is_empty() {
            return if is_past { format_date(today) } else { Ok(date) };
        }

        let next = self.next_date(today, &date, repeat)?;
        Ok(if is_past { next } else { date })
    }

    /// ## Summary
    /// Outcome of marking a task done.
    ///
    /// A task without a repeat rule is complete. Otherwise the next date is
    /// computed from the later of `today` and the task's own date.
    ///
    /// ## Errors
    /// Returns an error for an unparsable date or an invalid repeat rule.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn date_after_done(
        self,
        today: NaiveDate,
        date: &str,
        repeat: &str,
    ) -> ServiceResult<DoneOutcome> {
        if repeat.is_empty() {
            return Ok(DoneOutcome::Complete);
        }

        let reference = parse_date_text(date)?.max(today);
        Ok(DoneOutcome::Reschedule(
            self.next_date(reference, date, repeat)?,
        ))
    }
}

impl Default for TaskScheduler {
    fn default() -> Self {
        Self::new(DateAlgorithm::NextDate)
    }
}
