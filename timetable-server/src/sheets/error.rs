//! Sheets client error types.

/// Errors that can occur when fetching a timetable sheet.
#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check SHEETS_API_KEY")]
    Unauthorized,

    /// The named sheet (or the spreadsheet itself) does not exist
    #[error("sheet {name:?} not found")]
    SheetNotFound { name: String },

    /// Rate limited by the API
    #[error("rate limited by the Sheets API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
