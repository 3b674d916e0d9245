use chrono::NaiveDate;
use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid start date: {0:?}")]
    InvalidStartDate(String),

    #[error("Date {0} cannot be written as YYYYMMDD")]
    UnrepresentableDate(NaiveDate),

    #[error(transparent)]
    RuleError(#[from] dueday_rule::error::RuleError),

    #[error(transparent)]
    CoreError(#[from] dueday_core::error::CoreError),
}

impl ServiceError {
    /// True when the caller supplied a bad rule or date. Everything else is an
    /// internal failure and should not be reported as a user mistake.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        match self {
            Self::InvalidStartDate(_) => true,
            Self::RuleError(err) => err.is_parse(),
            Self::UnrepresentableDate(_) | Self::CoreError(_) => false,
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use dueday_core::error::CoreError;
    use dueday_rule::error::RuleError;
    use dueday_rule::rule::expand::ExpandError;
    use dueday_rule::rule::parse::{ParseError, ParseErrorKind};

    use super::*;

    #[test]
    fn validation_classification() {
        assert!(ServiceError::InvalidStartDate("2024".into()).is_validation());

        let parse = RuleError::from(ParseError::new(ParseErrorKind::EmptyRule, 1));
        assert!(ServiceError::from(parse).is_validation());

        let expand = RuleError::from(ExpandError::DateOutOfRange);
        assert!(!ServiceError::from(expand).is_validation());

        let core = CoreError::InvalidConfiguration("algorithm".into());
        assert!(!ServiceError::from(core).is_validation());
    }

    #[test]
    fn invalid_start_date_quotes_input() {
        let err = ServiceError::InvalidStartDate("2024-01-01".into());
        assert_eq!(err.to_string(), "Invalid start date: \"2024-01-01\"");
    }
}
