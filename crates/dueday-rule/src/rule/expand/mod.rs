//! Next-occurrence calculation.
//!
//! Every algorithm works on whole UTC calendar days and is a single pass over
//! its inputs. Interval and yearly rules are closed-form; weekly and monthly
//! rules walk forward day by day, capped at
//! [`MAX_SEARCH_STEPS`](dueday_core::constants::MAX_SEARCH_STEPS) iterations.

mod fixed;
mod walk;

use chrono::NaiveDate;
use dueday_core::constants::MAX_SEARCH_STEPS;
use thiserror::Error;

use crate::rule::core::RecurrenceRule;

/// Errors from [`next_occurrence`].
///
/// Neither variant is caused by bad input text: a rule that parsed either has
/// an occurrence within the search window or describes a day that never
/// exists (e.g. `m 30 2`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("no occurrence of '{rule}' within {steps} search steps")]
    SearchExhausted { rule: RecurrenceRule, steps: u16 },

    #[error("date arithmetic left the supported calendar range")]
    DateOutOfRange,
}

pub type ExpandResult<T> = std::result::Result<T, ExpandError>;

/// ## Summary
/// Returns the next date on which a task anchored at `start` is due, relative
/// to the day `now`.
///
/// - `d N`: first `start + k*N` days after `now` when `start` is in the past,
///   otherwise `start + N` days
/// - `y`: first anniversary of `start` after `now`
/// - `w ...`: first listed weekday after `max(start, now)`
/// - `m ...`: first matching day from `start` (if after `now`) or from the day
///   after `now`
///
/// ## Errors
/// Returns [`ExpandError::SearchExhausted`] when a weekly or monthly walk finds
/// no match, and [`ExpandError::DateOutOfRange`] at the edges of the calendar.
#[tracing::instrument(level = "trace", skip(rule), fields(rule = %rule))]
pub fn next_occurrence(
    now: NaiveDate,
    start: NaiveDate,
    rule: &RecurrenceRule,
) -> ExpandResult<NaiveDate> {
    let found = match *rule {
        RecurrenceRule::DayInterval { days } => Some(fixed::next_by_interval(now, start, days)?),
        RecurrenceRule::Yearly => Some(fixed::next_by_year(now, start)?),
        RecurrenceRule::WeeklyDays { weekdays } => walk::next_by_weekday(now, start, weekdays)?,
        RecurrenceRule::MonthlyPattern { days, months } => {
            walk::next_by_month_day(now, start, days, months)?
        }
    };

    let next = found.ok_or(ExpandError::SearchExhausted {
        rule: *rule,
        steps: MAX_SEARCH_STEPS,
    })?;

    tracing::trace!(%next, "Resolved next occurrence");
    Ok(next)
}
