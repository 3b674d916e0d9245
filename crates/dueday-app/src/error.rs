use std::process::ExitCode;

use thiserror::Error;

/// Application-level errors (command-line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] dueday_service::error::ServiceError),

    #[error(transparent)]
    RuleError(#[from] dueday_rule::error::RuleError),

    #[error(transparent)]
    CoreError(#[from] dueday_core::error::CoreError),

    #[error("Failed to encode output: {0}")]
    OutputError(#[from] serde_json::Error),
}

impl AppError {
    /// True for errors caused by the rule or date the user passed in.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        match self {
            Self::ServiceError(err) => err.is_validation(),
            Self::RuleError(err) => err.is_parse(),
            Self::CoreError(_) | Self::OutputError(_) => false,
        }
    }

    /// Exit status: 2 for validation errors, 1 for everything else.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_validation() {
            ExitCode::from(2)
        } else {
            ExitCode::FAILURE
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
