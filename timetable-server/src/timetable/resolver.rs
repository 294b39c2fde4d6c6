//! Next-departures resolution over a raw timetable grid.
//!
//! The grid comes straight from the spreadsheet: row 0 names the
//! stations, every later row is one train, and cells hold "HH:MM"-style
//! strings. Row order is trusted to be time-ascending within a sheet;
//! nothing here re-sorts.

use chrono::NaiveDate;

use super::error::TimetableError;
use super::time::{SheetTime, strip_quotes};

/// A single upcoming train.
///
/// Holds the departure and arrival cells exactly as they appear in the
/// sheet; callers get back whatever string the timetable author wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Departure time at the source station.
    pub departure: String,
    /// Arrival time at the destination station.
    pub arrival: String,
}

/// Find all departures from `source` to `destination` strictly after
/// the reference time, in row order.
///
/// `reference_raw` is the user-supplied time string; surrounding quote
/// characters are stripped before parsing, and both it and every
/// departure cell are anchored to `today`, so the comparison is
/// same-day only. A reference time after the last train of the day
/// yields an empty list, never tomorrow's first train.
///
/// Malformed rows (too short, empty cells, unparsable departure time)
/// are skipped rather than failing the lookup; a sheet with nothing
/// usable yields `Ok(vec![])`.
pub fn next_departures(
    grid: &[Vec<String>],
    source: &str,
    destination: &str,
    reference_raw: &str,
    today: NaiveDate,
) -> Result<Vec<Departure>, TimetableError> {
    if grid.len() < 2 {
        return Err(TimetableError::NoData);
    }

    let header = &grid[0];
    let source_idx = find_column(header, source)
        .ok_or_else(|| TimetableError::UnknownStation(source.to_string()))?;
    let dest_idx = find_column(header, destination)
        .ok_or_else(|| TimetableError::UnknownStation(destination.to_string()))?;

    let reference = SheetTime::parse(strip_quotes(reference_raw), today)?;

    let mut upcoming = Vec::new();

    for row in &grid[1..] {
        if source_idx >= row.len() || dest_idx >= row.len() {
            continue;
        }

        let departure = row[source_idx].trim();
        let arrival = row[dest_idx].trim();

        if departure.is_empty() || arrival.is_empty() {
            continue;
        }

        // A stray unparsable cell drops its row, never the request.
        let Ok(departure_time) = SheetTime::parse(departure, today) else {
            continue;
        };

        if departure_time > reference {
            upcoming.push(Departure {
                departure: departure.to_string(),
                arrival: arrival.to_string(),
            });
        }
    }

    Ok(upcoming)
}

/// Index of the first header cell whose trimmed value equals `name`.
///
/// Exact, case-sensitive match; duplicate columns are hidden by the
/// first occurrence.
fn find_column(header: &[String], name: &str) -> Option<usize> {
    header.iter().position(|cell| cell.trim() == name)
}
