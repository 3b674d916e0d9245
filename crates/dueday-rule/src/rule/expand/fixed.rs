//! Closed-form algorithms: day interval and yearly.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime};
use dueday_core::constants::SECONDS_PER_DAY;

use super::{ExpandError, ExpandResult};

fn to_timestamp(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

fn from_timestamp(secs: i64) -> ExpandResult<NaiveDate> {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.date_naive())
        .ok_or(ExpandError::DateOutOfRange)
}

/// `d N`.
///
/// A start in the past lands on the first interval boundary strictly after
/// `now`; a start today or later advances exactly one interval from `start`.
pub(super) fn next_by_interval(
    now: NaiveDate,
    start: NaiveDate,
    days: u16,
) -> ExpandResult<NaiveDate> {
    let step = i64::from(days) * SECONDS_PER_DAY;
    let start_secs = to_timestamp(start);
    let now_secs = to_timestamp(now);

    let next_secs = if start_secs < now_secs {
        let segments = (now_secs - start_secs) / step;
        start_secs + (segments + 1) * step
    } else {
        start_secs + step
    };

    from_timestamp(next_secs)
}

/// Adds whole years, keeping month and day. A Feb 29 that does not exist in
/// the target year rolls over to Mar 1.
pub(super) fn add_years(date: NaiveDate, years: i32) -> ExpandResult<NaiveDate> {
    let year = date
        .year()
        .checked_add(years)
        .ok_or(ExpandError::DateOutOfRange)?;

    NaiveDate::from_ymd_opt(year, date.month(), 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day0()))))
        .ok_or(ExpandError::DateOutOfRange)
}

/// `y`.
pub(super) fn next_by_year(now: NaiveDate, start: NaiveDate) -> ExpandResult<NaiveDate> {
    let years = if start.year() < now.year() {
        now.year() - start.year()
    } else {
        1
    };

    let next = add_years(start, years)?;
    if next > now {
        Ok(next)
    } else {
        add_years(next, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn interval_future_start_ignores_now() {
        let result = next_by_interval(date(2024, 1, 1), date(2024, 3, 10), 10).unwrap();
        assert_eq!(result, date(2024, 3, 20));
    }

    #[test]
    fn interval_now_on_boundary_moves_past_it() {
        // now is exactly start + 2 intervals
        let result = next_by_interval(date(2024, 1, 15), date(2024, 1, 1), 7).unwrap();
        assert_eq!(result, date(2024, 1, 22));
    }

    #[test]
    fn interval_one_day_past_start() {
        let result = next_by_interval(date(2024, 1, 2), date(2024, 1, 1), 1).unwrap();
        assert_eq!(result, date(2024, 1, 3));
    }

    #[test]
    fn interval_crosses_leap_day() {
        let result = next_by_interval(date(2024, 2, 28), date(2024, 2, 28), 1).unwrap();
        assert_eq!(result, date(2024, 2, 29));
    }

    #[test]
    fn interval_long_past_start() {
        // 366 days elapsed, 400 day interval
        let result = next_by_interval(date(2024, 1, 1), date(2023, 1, 1), 400).unwrap();
        assert_eq!(result, date(2024, 2, 5));
    }

    #[test]
    fn add_years_rolls_leap_day() {
        assert_eq!(add_years(date(2020, 2, 29), 1).unwrap(), date(2021, 3, 1));
        assert_eq!(add_years(date(2020, 2, 29), 4).unwrap(), date(2024, 2, 29));
        assert_eq!(add_years(date(2023, 12, 31), 1).unwrap(), date(2024, 12, 31));
    }

    #[test]
    fn yearly_same_year_adds_one() {
        let result = next_by_year(date(2024, 1, 15), date(2024, 6, 1)).unwrap();
        assert_eq!(result, date(2025, 6, 1));
    }

    #[test]
    fn yearly_future_year_adds_one() {
        let result = next_by_year(date(2024, 1, 15), date(2026, 6, 1)).unwrap();
        assert_eq!(result, date(2027, 6, 1));
    }

    #[test]
    fn yearly_anniversary_already_passed() {
        let result = next_by_year(date(2024, 5, 1), date(2020, 3, 1)).unwrap();
        assert_eq!(result, date(2025, 3, 1));
    }

    #[test]
    fn yearly_anniversary_today_moves_on() {
        let result = next_by_year(date(2024, 3, 1), date(2020, 3, 1)).unwrap();
        assert_eq!(result, date(2025, 3, 1));
    }

    #[test]
    fn yearly_leap_day_start() {
        // 2020-02-29 + 3 years rolls to 2023-03-01, already past, then +1 year
        let result = next_by_year(date(2023, 6, 1), date(2020, 2, 29)).unwrap();
        assert_eq!(result, date(2024, 3, 1));
    }
}
