//! Timetable Source client.
//!
//! The timetable lives in a Google spreadsheet, one sheet per route,
//! read through the Sheets v4 `values` endpoint. Each request fetches
//! the whole sheet as a two-dimensional string grid; nothing is cached,
//! so edits to the spreadsheet are visible immediately.

mod client;
mod error;
mod types;

pub use client::{SheetsClient, SheetsConfig};
pub use error::SheetsError;
pub use types::ValueRange;
