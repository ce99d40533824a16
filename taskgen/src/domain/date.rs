use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use time::{Date, Month};

/// A calendar date whose only textual form is canonical `YYYY-MM-DD`.
///
/// Tasks and calendar cells are joined on this value, so anything that is not
/// already canonical is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskDate(Date);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected a YYYY-MM-DD date, got {0:?}")]
    Format(String),
    #[error("{0:?} is not a valid calendar date")]
    OutOfRange(String),
}

impl TaskDate {
    pub fn new(date: Date) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DateParseError> {
        let invalid = || DateParseError::OutOfRange(format!("{year:04}-{month:02}-{day:02}"));
        let month = Month::try_from(month).map_err(|_| invalid())?;
        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn parse(s: &str) -> Result<Self, DateParseError> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(DateParseError::Format(s.to_string()));
        }

        let field = |range: std::ops::Range<usize>| {
            s[range]
                .parse::<u16>()
                .map_err(|_| DateParseError::Format(s.to_string()))
        };
        let year = field(0..4)?;
        let month = field(5..7)?;
        let day = field(8..10)?;

        let month = u8::try_from(month).map_err(|_| DateParseError::OutOfRange(s.to_string()))?;
        let day = u8::try_from(day).map_err(|_| DateParseError::OutOfRange(s.to_string()))?;
        Self::from_ymd(i32::from(year), month, day)
            .map_err(|_| DateParseError::OutOfRange(s.to_string()))
    }

    pub fn date(&self) -> Date {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> Month {
        self.0.month()
    }

    pub fn day(&self) -> u8 {
        self.0.day()
    }
}

impl From<Date> for TaskDate {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl From<TaskDate> for Date {
    fn from(date: TaskDate) -> Self {
        date.0
    }
}

impl FromStr for TaskDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TaskDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month() as u8,
            self.0.day()
        )
    }
}

impl Serialize for TaskDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TaskDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        TaskDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}
