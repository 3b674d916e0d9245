//! The `(now, start, repeat) -> next date` boundary used by the task service.

use chrono::{DateTime, NaiveDate, Utc};
use dueday_rule::error::RuleError;
use dueday_rule::rule::parse::{ParseError, ParseErrorKind};
use dueday_rule::rule::{next_occurrence, parse};

use crate::date::{format_date, parse_date_text, today_utc};
use crate::error::ServiceResult;

/// ## Summary
/// Computes the next due date of a task as `YYYYMMDD`, relative to the UTC
/// calendar day of `now`.
///
/// ## Errors
/// See [`next_date_on`].
pub fn next_date(now: DateTime<Utc>, start_text: &str, rule_text: &str) -> ServiceResult<String> {
    next_date_on(today_utc(now), start_text, rule_text)
}

/// ## Summary
/// Computes the next due date of a task anchored at `start_text` with repeat
/// rule `rule_text`, relative to `today`.
///
/// Inputs are checked in a fixed order: an empty rule first, then the start
/// date, then the rest of the rule.
///
/// ## Errors
/// - [`RuleError::Parse`] for an empty or invalid rule
/// - [`ServiceError::InvalidStartDate`](crate::error::ServiceError::InvalidStartDate)
///   for a start date that is not `YYYYMMDD`
/// - [`RuleError::Expand`] if no next date could be computed; these are
///   logged at `error` level since a parsed rule should always resolve
#[tracing::instrument(level = "debug", err(level = "debug"))]
pub fn next_date_on(today: NaiveDate, start_text: &str, rule_text: &str) -> ServiceResult<String> {
    if rule_text.is_empty() {
        return Err(RuleError::from(ParseError::new(ParseErrorKind::EmptyRule, 1)).into());
    }

    let start = parse_date_text(start_text)?;
    let rule = parse(rule_text).map_err(RuleError::from)?;

    let next = next_occurrence(today, start, &rule).map_err(|e| {
        tracing::error!(
            error = %e,
            rule = %rule,
            start = %start,
            now = %today,
            "Failed to resolve next date for a valid rule"
        );
        RuleError::from(e)
    })?;

    let result = format_date(next).inspect_err(|e| {
        tracing::error!(error = %e, rule = %rule, start = %start, "Next date out of storage range");
    })?;

    tracing::debug!(result = %result, "Resolved next date");
    Ok(result)
}
