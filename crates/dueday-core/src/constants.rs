/// `chrono` format of the storage date text, e.g. `20240131`.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Length of a date in [`DATE_FORMAT`].
pub const DATE_TEXT_LEN: usize = 8;

/// Upper bound of a day-interval rule (`d 400`).
pub const MAX_INTERVAL_DAYS: u16 = 400;

/// Iteration cap for the day-by-day weekly and monthly searches.
pub const MAX_SEARCH_STEPS: u16 = 400;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Name of the next-date algorithm the task scheduler understands.
pub const NEXT_DATE_ALGORITHM: &str = "nextdate";
