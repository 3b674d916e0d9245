//! Day-by-day walks for weekly and monthly rules.

use chrono::{Datelike, Days, Months, NaiveDate};
use dueday_core::constants::MAX_SEARCH_STEPS;

use super::{ExpandError, ExpandResult};
use crate::rule::core::{MonthDay, MonthDaySet, MonthSet, WeekdaySet};

fn next_day(date: NaiveDate) -> ExpandResult<NaiveDate> {
    date.succ_opt().ok_or(ExpandError::DateOutOfRange)
}

/// First day of the month after the one `date` is in.
fn first_of_next_month(date: NaiveDate) -> ExpandResult<NaiveDate> {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .ok_or(ExpandError::DateOutOfRange)
}

/// Whether `date` is the day `days` before the first of the next month.
fn is_days_before_month_end(date: NaiveDate, days: u64) -> bool {
    date.checked_add_days(Days::new(days))
        .is_some_and(|later| later.day() == 1)
}

/// `w ...`. Returns `None` when no listed weekday is found.
pub(super) fn next_by_weekday(
    now: NaiveDate,
    start: NaiveDate,
    weekdays: WeekdaySet,
) -> ExpandResult<Option<NaiveDate>> {
    let mut cursor = start.max(now);
    for _ in 0..MAX_SEARCH_STEPS {
        cursor = next_day(cursor)?;
        if weekdays.contains(cursor.weekday()) {
            return Ok(Some(cursor));
        }
    }
    Ok(None)
}

/// `m ...`. Returns `None` when the walk runs out of steps, which happens for
/// combinations that never occur such as day 30 of February.
pub(super) fn next_by_month_day(
    now: NaiveDate,
    start: NaiveDate,
    days: MonthDaySet,
    months: Option<MonthSet>,
) -> ExpandResult<Option<NaiveDate>> {
    let mut cursor = if start > now { start } else { next_day(now)? };

    for _ in 0..MAX_SEARCH_STEPS {
        if months.is_some_and(|months| !months.contains(cursor.month())) {
            cursor = first_of_next_month(cursor)?;
            continue;
        }

        let hit = days.contains_day_of_month(cursor.day())
            || (days.contains(MonthDay::Last) && is_days_before_month_end(cursor, 1))
            || (days.contains(MonthDay::SecondToLast) && is_days_before_month_end(cursor, 2));
        if hit {
            return Ok(Some(cursor));
        }

        cursor = next_day(cursor)?;
    }
    Ok(None)
}
