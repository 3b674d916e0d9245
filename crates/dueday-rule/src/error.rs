use thiserror::Error;

use crate::rule::expand::ExpandError;
use crate::rule::parse::ParseError;

/// Rule parsing and resolution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Rule parse error: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Expand(#[from] ExpandError),
}

impl RuleError {
    /// True for errors caused by the rule text itself, as opposed to a failed
    /// calculation over a rule that parsed.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
