//! Task repetition rules.
//!
//! - [`core`]: the typed [`RecurrenceRule`] and its value sets
//! - [`parse`]: rule text to [`RecurrenceRule`]
//! - [`expand`]: next occurrence of a rule after a reference day
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dueday_rule::rule;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let now = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
//!
//! let next = rule::resolve(now, start, "m -1").unwrap();
//! assert_eq!(next, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
//! ```

pub mod core;
pub mod expand;
pub mod parse;

use chrono::NaiveDate;

use crate::error::RuleResult;

pub use self::core::{MonthDay, MonthDaySet, MonthSet, RecurrenceRule, RuleKind, WeekdaySet};
pub use self::expand::next_occurrence;
pub use self::parse::parse;

/// ## Summary
/// Parses `rule_text` and returns the next occurrence after `now` for a task
/// anchored at `start`.
///
/// ## Errors
/// Returns [`RuleError::Parse`](crate::error::RuleError::Parse) for invalid rule
/// text and [`RuleError::Expand`](crate::error::RuleError::Expand) when no
/// occurrence can be computed.
pub fn resolve(now: NaiveDate, start: NaiveDate, rule_text: &str) -> RuleResult<NaiveDate> {
    let rule = parse(rule_text)?;
    Ok(next_occurrence(now, start, &rule)?)
}
