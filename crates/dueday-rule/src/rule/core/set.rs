use std::fmt;

use chrono::Weekday;

/// Writes `items` as a comma-separated list.
fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Set of weekdays.
///
/// Rule text numbers weekdays 1 (Monday) through 7 (Sunday). Membership is
/// tested with [`chrono::Weekday`], so a Sunday is a Sunday whichever numbering
/// the caller started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Maps a rule weekday number (1 = Monday … 7 = Sunday) to a [`Weekday`].
    #[must_use]
    pub fn weekday_from_number(number: u8) -> Option<Weekday> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|index| WEEKDAYS.get(index))
            .copied()
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.number_from_monday()
    }

    /// Adds a weekday. Returns `false` if it was already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let bit = Self::bit(day);
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    #[must_use]
    pub fn contains(self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Weekdays from Monday to Sunday.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        (1..=7)
            .filter_map(Self::weekday_from_number)
            .filter(move |day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::new();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter().map(|day| day.number_from_monday()))
    }
}

/// A day position within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthDay {
    /// Plain day of month, 1..=31.
    Day(u8),
    /// Last day of the month (`-1`).
    Last,
    /// Second-to-last day of the month (`-2`).
    SecondToLast,
}

impl MonthDay {
    /// Parses a rule day value: 1..=31, or -1/-2 for the month-end sentinels.
    #[must_use]
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            -2 => Some(Self::SecondToLast),
            -1 => Some(Self::Last),
            1..=31 => u8::try_from(value).ok().map(Self::Day),
            _ => None,
        }
    }

    #[must_use]
    pub fn value(self) -> i32 {
        match self {
            Self::Day(day) => i32::from(day),
            Self::Last => -1,
            Self::SecondToLast => -2,
        }
    }

    fn bit(self) -> u64 {
        match self {
            Self::Day(day) => 1 << day,
            Self::Last => 1 << 32,
            Self::SecondToLast => 1 << 33,
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Set of [`MonthDay`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MonthDaySet(u64);

impl MonthDaySet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Adds a day. Returns `false` if it was already present.
    pub fn insert(&mut self, day: MonthDay) -> bool {
        let bit = day.bit();
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    #[must_use]
    pub fn contains(self, day: MonthDay) -> bool {
        self.0 & day.bit() != 0
    }

    /// Membership of a plain day of month as returned by `chrono::Datelike::day`.
    #[must_use]
    pub fn contains_day_of_month(self, day: u32) -> bool {
        u8::try_from(day)
            .ok()
            .and_then(|day| MonthDay::from_value(i32::from(day)))
            .is_some_and(|day| self.contains(day))
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Plain days in ascending order, then `-1`, then `-2`.
    pub fn iter(self) -> impl Iterator<Item = MonthDay> {
        (1..=31)
            .map(MonthDay::Day)
            .chain([MonthDay::Last, MonthDay::SecondToLast])
            .filter(move |day| self.contains(*day))
    }
}

impl FromIterator<MonthDay> for MonthDaySet {
    fn from_iter<I: IntoIterator<Item = MonthDay>>(iter: I) -> Self {
        let mut set = Self::new();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl fmt::Display for MonthDaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}

/// Set of months, 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MonthSet(u16);

impl MonthSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[must_use]
    pub fn is_valid_month(month: u32) -> bool {
        (1..=12).contains(&month)
    }

    /// Adds a month. Returns `false` if it was already present or is not in 1..=12.
    pub fn insert(&mut self, month: u32) -> bool {
        if !Self::is_valid_month(month) || self.contains(month) {
            return false;
        }
        self.0 |= 1 << month;
        true
    }

    #[must_use]
    pub fn contains(self, month: u32) -> bool {
        Self::is_valid_month(month) && self.0 & (1 << month) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn iter(self) -> impl Iterator<Item = u32> {
        (1..=12).filter(move |month| self.contains(*month))
    }
}

impl FromIterator<u32> for MonthSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = Self::new();
        for month in iter {
            set.insert(month);
        }
        set
    }
}

impl fmt::Display for MonthSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}
