//! Recursive-descent parser for rule text.

use dueday_core::constants::MAX_INTERVAL_DAYS;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{Token, TokenKind, tokenize};
use crate::rule::core::{MonthDay, MonthDaySet, MonthSet, RecurrenceRule, RuleKind, WeekdaySet};

/// Column of the first body character, after `"<kind> "`.
const BODY_COLUMN: usize = 3;

/// Parses a repetition rule.
///
/// ## Errors
///
/// - [`ParseErrorKind::EmptyRule`] for empty text
/// - [`ParseErrorKind::UnrecognizedKind`] if the first character is not `d`,
///   `w`, `m` or `y`, or a `d`/`w`/`m` rule is not followed by a space and a
///   value list
/// - [`ParseErrorKind::MalformedList`] for any violation inside the values
#[tracing::instrument(level = "trace")]
pub fn parse(input: &str) -> ParseResult<RecurrenceRule> {
    let result = parse_rule(input);
    match &result {
        Ok(rule) => tracing::trace!(%rule, "Parsed repeat rule"),
        Err(err) => tracing::debug!(error = %err, "Rejected repeat rule"),
    }
    result
}

fn parse_rule(input: &str) -> ParseResult<RecurrenceRule> {
    let Some(first) = input.chars().next() else {
        return Err(ParseError::new(ParseErrorKind::EmptyRule, 1));
    };

    let kind = RuleKind::from_letter(first).ok_or_else(|| {
        ParseError::new(ParseErrorKind::UnrecognizedKind, 1)
            .with_context(format!("'{first}' is not one of d, w, m, y"))
    })?;

    // `first` is an ASCII letter, so byte 1 is a char boundary.
    let rest = &input[1..];

    let production: fn(&mut Parser) -> ParseResult<RecurrenceRule> = match kind {
        RuleKind::Year => return year_rule(rest),
        RuleKind::Day => Parser::day_rule,
        RuleKind::Week => Parser::week_rule,
        RuleKind::Month => Parser::month_rule,
    };

    let body = match rest.strip_prefix(' ') {
        Some(body) if !body.is_empty() => body,
        _ => {
            return Err(ParseError::new(ParseErrorKind::UnrecognizedKind, 2)
                .with_context(format!("expected '{first} ' followed by values")));
        }
    };

    let mut parser = Parser::new(tokenize(body, BODY_COLUMN)?, input.chars().count() + 1);
    production(&mut parser)
}

/// `year_rule := "y"`
fn year_rule(rest: &str) -> ParseResult<RecurrenceRule> {
    if rest.is_empty() {
        Ok(RecurrenceRule::Yearly)
    } else {
        Err(ParseError::malformed(2, "yearly rule takes no values"))
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Column just past the last character, reported for missing values.
    end_column: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>, end_column: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            end_column,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().is_some_and(|t| t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// `integer`
    fn number(&mut self, what: &str) -> ParseResult<(i32, usize)> {
        match self.advance() {
            Some(Token {
                kind: TokenKind::Number(value),
                column,
            }) => Ok((value, column)),
            Some(Token {
                kind: TokenKind::Comma,
                column,
            }) => Err(ParseError::malformed(
                column,
                format!("expected {what}, found ','"),
            )),
            Some(Token {
                kind: TokenKind::Space,
                column,
            }) => Err(ParseError::malformed(
                column,
                format!("expected {what}, found space"),
            )),
            None => Err(ParseError::malformed(
                self.end_column,
                format!("expected {what} at end of rule"),
            )),
        }
    }

    /// `integer ("," integer)*`
    fn number_list(&mut self, what: &str) -> ParseResult<Vec<(i32, usize)>> {
        let mut values = vec![self.number(what)?];
        while self.eat(TokenKind::Comma) {
            values.push(self.number(what)?);
        }
        Ok(values)
    }

    fn end(&self, context: &str) -> ParseResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::malformed(token.column, context)),
        }
    }

    /// `day_rule := "d" SP integer`
    fn day_rule(&mut self) -> ParseResult<RecurrenceRule> {
        let (value, column) = self.number("day count")?;
        self.end("day interval takes a single number")?;

        let days = u16::try_from(value)
            .ok()
            .filter(|days| (1..=MAX_INTERVAL_DAYS).contains(days))
            .ok_or_else(|| {
                ParseError::malformed(
                    column,
                    format!("interval {value} out of bounds 1..={MAX_INTERVAL_DAYS}"),
                )
            })?;

        Ok(RecurrenceRule::DayInterval { days })
    }

    /// `week_rule := "w" SP int_list`
    fn week_rule(&mut self) -> ParseResult<RecurrenceRule> {
        let mut weekdays = WeekdaySet::new();
        for (value, column) in self.number_list("weekday")? {
            let day = u8::try_from(value)
                .ok()
                .and_then(WeekdaySet::weekday_from_number)
                .ok_or_else(|| {
                    ParseError::malformed(column, format!("weekday {value} not in 1..=7"))
                })?;
            if !weekdays.insert(day) {
                return Err(ParseError::malformed(
                    column,
                    format!("duplicate weekday {value}"),
                ));
            }
        }
        self.end("weekly rule takes a single list")?;

        Ok(RecurrenceRule::WeeklyDays { weekdays })
    }

    /// `month_rule := "m" SP day_list [SP month_list]`
    fn month_rule(&mut self) -> ParseResult<RecurrenceRule> {
        let mut days = MonthDaySet::new();
        for (value, column) in self.number_list("day of month")? {
            let day = MonthDay::from_value(value).ok_or_else(|| {
                ParseError::malformed(column, format!("day {value} not in -2..=-1 or 1..=31"))
            })?;
            if !days.insert(day) {
                return Err(ParseError::malformed(column, format!("duplicate day {value}")));
            }
        }

        let months = if self.eat(TokenKind::Space) {
            let mut months = MonthSet::new();
            for (value, column) in self.number_list("month")? {
                let month = u32::try_from(value)
                    .ok()
                    .filter(|month| MonthSet::is_valid_month(*month))
                    .ok_or_else(|| {
                        ParseError::malformed(column, format!("month {value} not in 1..=12"))
                    })?;
                if !months.insert(month) {
                    return Err(ParseError::malformed(
                        column,
                        format!("duplicate month {value}"),
                    ));
                }
            }
            Some(months)
        } else {
            None
        };
        self.end("monthly rule takes at most a day list and a month list")?;

        Ok(RecurrenceRule::MonthlyPattern { days, months })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn kind_of(input: &str) -> ParseErrorKind {
        parse(input).unwrap_err().kind
    }

    #[test]
    fn parse_empty() {
        assert_eq!(kind_of(""), ParseErrorKind::EmptyRule);
    }

    #[test]
    fn parse_unknown_kind() {
        for input in ["k 1", "D 1", "x", " d 1", "1", "é 1"] {
            assert_eq!(
                kind_of(input),
                ParseErrorKind::UnrecognizedKind,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_too_short_for_kind() {
        for input in ["d", "w", "m", "d ", "m ", "d5", "w1,2"] {
            assert_eq!(
                kind_of(input),
                ParseErrorKind::UnrecognizedKind,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_day_interval() {
        assert_eq!(
            parse("d 1").unwrap(),
            RecurrenceRule::DayInterval { days: 1 }
        );
        assert_eq!(
            parse("d 400").unwrap(),
            RecurrenceRule::DayInterval { days: 400 }
        );
        assert_eq!(
            parse("d 007").unwrap(),
            RecurrenceRule::DayInterval { days: 7 }
        );
    }

    #[test]
    fn parse_day_interval_rejects() {
        for input in [
            "d 0", "d 401", "d -5", "d 1,2", "d 5 ", "d  5", "d x", "d 5 6", "d 1-",
        ] {
            assert_eq!(
                kind_of(input),
                ParseErrorKind::MalformedList,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_yearly() {
        assert_eq!(parse("y").unwrap(), RecurrenceRule::Yearly);
        for input in ["y ", "y 1", "yy"] {
            assert_eq!(
                kind_of(input),
                ParseErrorKind::MalformedList,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_weekly() {
        let RecurrenceRule::WeeklyDays { weekdays } = parse("w 1,3,7").unwrap() else {
            panic!("expected weekly rule");
        };
        assert_eq!(weekdays.len(), 3);
        assert!(weekdays.contains(Weekday::Mon));
        assert!(weekdays.contains(Weekday::Wed));
        assert!(weekdays.contains(Weekday::Sun));
    }

    #[test]
    fn parse_weekly_rejects() {
        for input in [
            "w 0", "w 8", "w 1,1", "w 1,", "w ,1", "w 1,,2", "w 1 2", "w -1", "w 1, 2", "w 2,7,2",
        ] {
            assert_eq!(
                kind_of(input),
                ParseErrorKind::MalformedList,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_monthly_days_only() {
        let RecurrenceRule::MonthlyPattern { days, months } = parse("m 1,15,-1,-2").unwrap() else {
            panic!("expected monthly rule");
        };
        assert!(months.is_none());
        assert_eq!(days.len(), 4);
        assert!(days.contains(MonthDay::Day(15)));
        assert!(days.contains(MonthDay::Last));
        assert!(days.contains(MonthDay::SecondToLast));
    }

    #[test]
    fn parse_monthly_with_months() {
        let RecurrenceRule::MonthlyPattern { days, months } = parse("m 31 1,12").unwrap() else {
            panic!("expected monthly rule");
        };
        assert!(days.contains(MonthDay::Day(31)));
        let months = months.expect("month filter");
        assert_eq!(months.iter().collect::<Vec<_>>(), vec![1, 12]);
    }

    #[test]
    fn parse_monthly_rejects() {
        for input in [
            "m 0",
            "m 32",
            "m -3",
            "m -0",
            "m 1,1",
            "m -1,-1",
            "m -1-1,31",
            "m 1 0",
            "m 1 13",
            "m 1 2,2",
            "m 1 -1",
            "m 1 2 3",
            "m 1  2",
            "m 1 ",
            "m 1, 2",
            "m 1,",
            "m ,1",
            "m 1 ,2",
            "m 1 2,",
        ] {
            assert_eq!(
                kind_of(input),
                ParseErrorKind::MalformedList,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_reports_column_of_offender() {
        assert_eq!(parse("w 1,9").unwrap_err().column, 5);
        assert_eq!(parse("m 1 2 3").unwrap_err().column, 6);
        assert_eq!(parse("w 1,").unwrap_err().column, 5);
        assert_eq!(parse("y!").unwrap_err().column, 2);
    }

    #[test]
    fn parse_via_from_str() {
        let rule: RecurrenceRule = "d 3".parse().unwrap();
        assert_eq!(rule, RecurrenceRule::DayInterval { days: 3 });
    }
}
