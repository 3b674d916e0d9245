//! dueday - integration test support.
//!
//! Re-exports the workspace crates under one root so integration tests can
//! use `dueday_test::` paths.

pub mod component {
    pub use dueday_core::{config, constants};
    pub use dueday_rule::rule;
    pub use dueday_service::{date, nextdate, task};

    pub mod error {
        pub use dueday_core::error::{CoreError, CoreResult};
        pub use dueday_rule::error::{RuleError, RuleResult};
        pub use dueday_service::error::{ServiceError, ServiceResult};
    }
}

pub mod app {
    pub use dueday_app::*;
}

/// Builds a date for test fixtures.
///
/// # Panics
/// Panics if the arguments do not name a real calendar day.
#[must_use]
pub fn ymd(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
}
