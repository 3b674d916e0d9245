//! Typed repetition rule model.
//!
//! The rule value sets are small bitsets: membership tests are constant time
//! and iteration is always in ascending order, which keeps the canonical text
//! form of a rule stable.

mod recurrence;
mod set;

pub use recurrence::{RecurrenceRule, RuleKind};
pub use set::{MonthDay, MonthDaySet, MonthSet, WeekdaySet};
