use std::fmt;
use std::str::FromStr;

use super::set::{MonthDaySet, MonthSet, WeekdaySet};
use crate::rule::parse::{ParseError, parse};

/// Rule kind, selected by the first character of the rule text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Day,
    Week,
    Month,
    Year,
}

impl RuleKind {
    /// Returns the leading rule character.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Day => 'd',
            Self::Week => 'w',
            Self::Month => 'm',
            Self::Year => 'y',
        }
    }

    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        Some(match c {
            'd' => Self::Day,
            'w' => Self::Week,
            'm' => Self::Month,
            'y' => Self::Year,
            _ => return None,
        })
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A validated task repetition rule.
///
/// Values only come out of the parser (or are built from already validated
/// sets), so every variant satisfies its range constraints:
///
/// | Text | Variant |
/// |---|---|
/// | `d 7` | every 7 days (1..=400) |
/// | `w 1,5` | every Monday and Friday |
/// | `m 1,-1` | 1st and last day of every month |
/// | `m -2 2,8` | second-to-last day of February and August |
/// | `y` | every year on the start date |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceRule {
    DayInterval {
        days: u16,
    },
    WeeklyDays {
        weekdays: WeekdaySet,
    },
    MonthlyPattern {
        days: MonthDaySet,
        months: Option<MonthSet>,
    },
    Yearly,
}

impl RecurrenceRule {
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::DayInterval { .. } => RuleKind::Day,
            Self::WeeklyDays { .. } => RuleKind::Week,
            Self::MonthlyPattern { .. } => RuleKind::Month,
            Self::Yearly => RuleKind::Year,
        }
    }
}

impl FromStr for RecurrenceRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Canonical rule text; parsing it yields an equal rule.
impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        match self {
            Self::DayInterval { days } => write!(f, " {days}"),
            Self::WeeklyDays { weekdays } => write!(f, " {weekdays}"),
            Self::MonthlyPattern { days, months } => {
                write!(f, " {days}")?;
                if let Some(months) = months {
                    write!(f, " {months}")?;
                }
                Ok(())
            }
            Self::Yearly => Ok(()),
        }
    }
}
