//! Repetition rules for tasks: parsing the compact rule text (`d 7`, `w 1,5`,
//! `m 1,-1 3,6`, `y`) and resolving the next due date from a start date.

pub mod error;
pub mod rule;
