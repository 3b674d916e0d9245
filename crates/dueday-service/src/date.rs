//! `YYYYMMDD` date text, the format tasks store their dates in.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use dueday_core::constants::{DATE_FORMAT, DATE_TEXT_LEN};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Parses an 8-digit `YYYYMMDD` date.
///
/// ## Errors
/// Returns [`ServiceError::InvalidStartDate`] unless `text` is exactly eight
/// ASCII digits naming a real calendar day.
pub fn parse_date_text(text: &str) -> ServiceResult<NaiveDate> {
    if text.len() != DATE_TEXT_LEN || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ServiceError::InvalidStartDate(text.to_owned()));
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| {
        tracing::debug!(date = text, error = %e, "Rejected date text");
        ServiceError::InvalidStartDate(text.to_owned())
    })
}

/// ## Summary
/// Formats a date as `YYYYMMDD`.
///
/// ## Errors
/// Returns [`ServiceError::UnrepresentableDate`] for years outside
/// `0..=9999`, which do not fit in eight digits.
pub fn format_date(date: NaiveDate) -> ServiceResult<String> {
    if !(0..=9999).contains(&date.year()) {
        return Err(ServiceError::UnrepresentableDate(date));
    }
    Ok(date.format(DATE_FORMAT).to_string())
}

/// The UTC calendar day of `now`.
#[must_use]
pub fn today_utc(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}
