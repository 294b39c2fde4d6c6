//! Timetable lookup error types.
//!
//! These cover whole-request failures. Per-row problems (short rows,
//! empty or unparsable cells) are not errors; the resolver skips those
//! rows silently.

use super::time::TimeError;

/// Errors raised while resolving departures from a timetable grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    /// The sheet had no data rows beyond (at most) a header.
    #[error("no timetable data found")]
    NoData,

    /// A station name did not match any header column.
    #[error("no timetable column named {0:?}")]
    UnknownStation(String),

    /// The reference time could not be parsed.
    #[error("invalid reference time: {0}")]
    BadTime(#[from] TimeError),
}
