//! Tokenizer for the value part of a rule (everything after `"<kind> "`).

use super::error::{ParseError, ParseResult};

/// Token kinds in a rule body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A single `' '`, separating value groups.
    Space,
    /// A `','`, separating values within a group.
    Comma,
    /// An integer, optionally with a leading `-`.
    Number(i32),
}

/// A token with the 1-based column of its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub column: usize,
}

/// Splits a rule body into tokens.
///
/// `first_column` is the column of the body's first character within the
/// whole rule, so token columns point into the original text.
///
/// ## Errors
/// Returns [`MalformedList`](super::ParseErrorKind::MalformedList) for any
/// character other than digits, `-`, `,` and `' '`, for a `-` that follows a
/// digit or is not followed by one, and for numbers that overflow `i32`.
pub fn tokenize(body: &str, first_column: usize) -> ParseResult<Vec<Token>> {
    let chars: Vec<char> = body.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let column = first_column + i;
        match chars[i] {
            ' ' => {
                tokens.push(Token {
                    kind: TokenKind::Space,
                    column,
                });
                i += 1;
            }
            ',' => {
                tokens.push(Token {
                    kind: TokenKind::Comma,
                    column,
                });
                i += 1;
            }
            c if c == '-' || c.is_ascii_digit() => {
                // `m -1-1`: a sign can only open a number
                if c == '-' && i > 0 && chars[i - 1].is_ascii_digit() {
                    return Err(ParseError::malformed(column, "sign directly after a digit"));
                }

                let start = i;
                if c == '-' {
                    i += 1;
                }
                let digits_start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                if i == digits_start {
                    return Err(ParseError::malformed(column, "sign without digits"));
                }

                let text: String = chars[start..i].iter().collect();
                let value = text.parse::<i32>().map_err(|e| {
                    ParseError::malformed(column, format!("number {text} out of range: {e}"))
                })?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    column,
                });
            }
            other => {
                return Err(ParseError::malformed(
                    column,
                    format!("unexpected character '{other}'"),
                ));
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::parse::ParseErrorKind;

    fn kinds(body: &str) -> Vec<TokenKind> {
        tokenize(body, 3)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn tokenize_list() {
        assert_eq!(
            kinds("1,-1 12"),
            vec![
                TokenKind::Number(1),
                TokenKind::Comma,
                TokenKind::Number(-1),
                TokenKind::Space,
                TokenKind::Number(12),
            ]
        );
    }

    #[test]
    fn tokenize_columns_are_offset() {
        let tokens = tokenize("10,2", 3).unwrap();
        let columns: Vec<usize> = tokens.iter().map(|t| t.column).collect();
        assert_eq!(columns, vec![3, 5, 6]);
    }

    #[test]
    fn tokenize_keeps_separator_runs() {
        // separator rules are enforced by the parser
        assert_eq!(
            kinds(",, "),
            vec![TokenKind::Comma, TokenKind::Comma, TokenKind::Space]
        );
    }

    #[test]
    fn tokenize_rejects_sign_after_digit() {
        let err = tokenize("-1-1", 3).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedList);
        assert_eq!(err.column, 5);
    }

    #[test]
    fn tokenize_rejects_bare_sign() {
        assert!(tokenize("-", 3).is_err());
        assert!(tokenize("--1", 3).is_err());
        assert!(tokenize("1,-,2", 3).is_err());
    }

    #[test]
    fn tokenize_rejects_other_characters() {
        for body in ["1;2", "a", "1\t2", "+1", "١"] {
            let err = tokenize(body, 3).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::MalformedList, "body {body:?}");
        }
    }

    #[test]
    fn tokenize_rejects_overflow() {
        let err = tokenize("99999999999", 3).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedList);
    }
}
