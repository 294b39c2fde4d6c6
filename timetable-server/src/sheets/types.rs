//! Wire types for the Sheets values API.

use serde::Deserialize;

/// Response body of the `values` endpoint.
///
/// We only need the cell grid; `range` and `majorDimension` are
/// ignored. The API omits `values` entirely for an empty sheet.
#[derive(Debug, Deserialize)]
pub struct ValueRange {
    /// Row-major cell values.
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}
