//! Timetable time handling.
//!
//! Timetable cells carry times as "HH:MM" or "HH:MM:SS" strings with no
//! date attached. This module provides a date-anchored time type so the
//! user's reference time and the sheet's departure times compare on the
//! same calendar day. There is deliberately no midnight rollover: a
//! departure "earlier" than the reference time is simply in the past.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day anchored to a calendar date.
///
/// Anchoring matters because comparisons go through the full date-time:
/// two times parsed against the same date order by time of day, and the
/// resolver always parses the reference time and every departure cell
/// against the same "today".
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetTime {
    date: NaiveDate,
    time: NaiveTime,
}

impl SheetTime {
    /// Create a new SheetTime from date and time components.
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parse a timetable time string against a base date.
    ///
    /// The format is chosen the way the sheet writes times: "HH:MM:SS"
    /// when the string contains exactly two colons, "HH:MM" otherwise.
    /// Every field must be two digits, so "9:5" is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_server::timetable::SheetTime;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    ///
    /// assert!(SheetTime::parse("14:30", date).is_ok());
    /// assert!(SheetTime::parse("14:30:45", date).is_ok());
    ///
    /// assert!(SheetTime::parse("9:5", date).is_err());
    /// assert!(SheetTime::parse("1430", date).is_err());
    /// assert!(SheetTime::parse("25:00", date).is_err());
    /// ```
    pub fn parse(s: &str, date: NaiveDate) -> Result<Self, TimeError> {
        let colons = s.bytes().filter(|&b| b == b':').count();
        if colons == 2 {
            Self::parse_hhmmss(s, date)
        } else {
            Self::parse_hhmm(s, date)
        }
    }

    /// Parse a time from "HH:MM" format with a given base date.
    pub fn parse_hhmm(s: &str, date: NaiveDate) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { date, time })
    }

    /// Parse a time from "HH:MM:SS" format with a given base date.
    pub fn parse_hhmmss(s: &str, date: NaiveDate) -> Result<Self, TimeError> {
        // Must be exactly 8 characters: HH:MM:SS
        if s.len() != 8 {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeError::new("expected colons at positions 2 and 5"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { date, time })
    }

    /// Returns the date component.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the time component.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Converts to a NaiveDateTime.
    pub fn to_datetime(&self) -> chrono::NaiveDateTime {
        self.date.and_time(self.time)
    }
}

impl Ord for SheetTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_datetime().cmp(&other.to_datetime())
    }
}

impl PartialOrd for SheetTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for SheetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SheetTime({} {:02}:{:02}:{:02})",
            self.date,
            self.time.hour(),
            self.time.minute(),
            self.time.second()
        )
    }
}

impl fmt::Display for SheetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.time.second() == 0 {
            write!(f, "{:02}:{:02}", self.time.hour(), self.time.minute())
        } else {
            write!(
                f,
                "{:02}:{:02}:{:02}",
                self.time.hour(),
                self.time.minute(),
                self.time.second()
            )
        }
    }
}

/// Strip surrounding single/double quote characters from a raw value.
///
/// Clients sometimes send the time parameter still wrapped in quotes
/// (`time="08:30"` arrives as `"08:30"` including the quote marks).
pub fn strip_quotes(s: &str) -> &str {
    s.trim_matches(|c| c == '"' || c == '\'')
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
