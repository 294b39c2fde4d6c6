//! Application state for the web layer.

use std::sync::Arc;

use crate::sheets::SheetsClient;

/// Shared application state.
///
/// Holds the long-lived timetable source handle, constructed once at
/// startup and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    /// Timetable source client
    pub sheets: Arc<SheetsClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(sheets: SheetsClient) -> Self {
        Self {
            sheets: Arc::new(sheets),
        }
    }
}
