//! Task date services built on the repetition rule engine.

pub mod date;
pub mod error;
pub mod nextdate;
pub mod task;
