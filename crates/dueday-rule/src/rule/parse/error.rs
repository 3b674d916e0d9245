//! Rule parsing error types.

use std::fmt;

/// Result type for rule parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for rule parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// Column in the rule text where the error was found (1-based).
    pub column: usize,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, column: usize) -> Self {
        Self {
            kind,
            column,
            context: None,
        }
    }

    /// Creates a malformed list error with context.
    #[must_use]
    pub fn malformed(column: usize, context: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::MalformedList, column).with_context(context)
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at column {}", self.kind, self.column)?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The rule text is empty.
    EmptyRule,
    /// The leading character is not a rule kind, or the rule is shorter than
    /// its minimal form.
    UnrecognizedKind,
    /// Bad separators, duplicate or out-of-range values, or the wrong number
    /// of space-separated groups.
    MalformedList,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRule => write!(f, "empty repeat rule"),
            Self::UnrecognizedKind => write!(f, "unrecognized repeat rule kind"),
            Self::MalformedList => write!(f, "malformed repeat rule"),
        }
    }
}
