use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "dueday",
    version,
    about = "Resolve task due dates from compact repeat rules"
)]
pub struct Cli {
    /// Print results and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Reference day as YYYYMMDD (default: the current UTC day)
    #[arg(long, global = true, value_name = "YYYYMMDD")]
    pub today: Option<String>,

    /// Settings file to read instead of ./config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Next date of a task after the reference day
    Next {
        /// Task start date, YYYYMMDD
        #[arg(long, value_name = "YYYYMMDD")]
        date: String,

        /// Repeat rule, e.g. "d 7", "w 1,5", "m 1,-1 3,6" or "y"
        #[arg(long, value_name = "RULE")]
        repeat: String,
    },

    /// Date to store when a task is created or updated
    Schedule {
        /// Task date, YYYYMMDD (default: the reference day)
        #[arg(long, value_name = "YYYYMMDD")]
        date: Option<String>,

        /// Repeat rule; empty for a one-off task
        #[arg(long, value_name = "RULE", default_value = "")]
        repeat: String,
    },

    /// Reschedule or complete a task that was marked done
    Done {
        /// Current task date, YYYYMMDD
        #[arg(long, value_name = "YYYYMMDD")]
        date: String,

        /// Repeat rule; empty for a one-off task
        #[arg(long, value_name = "RULE", default_value = "")]
        repeat: String,
    },

    /// Validate a repeat rule and print its canonical form
    Check {
        #[arg(long, value_name = "RULE")]
        repeat: String,
    },
}
