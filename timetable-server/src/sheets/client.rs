//! Sheets values API HTTP client.
//!
//! A thin wrapper over `GET /v4/spreadsheets/{id}/values/{sheet}`,
//! authenticated with an API key. The spreadsheet is world-readable;
//! the key only identifies the caller to Google's quota accounting.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use super::error::SheetsError;
use super::types::ValueRange;

/// Default base URL for the Google Sheets API.
const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Configuration for the sheets client.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// API key for authentication
    pub api_key: String,
    /// Spreadsheet to read timetable sheets from
    pub spreadsheet_id: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SheetsConfig {
    /// Create a new config with the given API key and spreadsheet id.
    pub fn new(api_key: impl Into<String>, spreadsheet_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            spreadsheet_id: spreadsheet_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the Sheets values API.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    api_key: String,
}

impl SheetsClient {
    /// Create a new sheets client with the given configuration.
    pub fn new(config: SheetsConfig) -> Result<Self, SheetsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            spreadsheet_id: config.spreadsheet_id,
            api_key: config.api_key,
        })
    }

    /// Fetch a named sheet as a row-major grid of strings.
    ///
    /// The sheet name is trimmed before use. An unqualified sheet name
    /// as the range returns the whole sheet, which is exactly what a
    /// timetable lookup wants.
    pub async fn fetch_grid(&self, sheet_name: &str) -> Result<Vec<Vec<String>>, SheetsError> {
        let sheet_name = sheet_name.trim();
        let url = self.values_url(sheet_name);

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("majorDimension", "ROWS")])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SheetsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SheetsError::RateLimited);
        }

        // The values endpoint reports an unknown sheet name as 400
        // "Unable to parse range" and an unknown spreadsheet as 404.
        if status == reqwest::StatusCode::BAD_REQUEST || status == reqwest::StatusCode::NOT_FOUND {
            return Err(SheetsError::SheetNotFound {
                name: sheet_name.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let range: ValueRange = serde_json::from_str(&body).map_err(|e| SheetsError::Json {
            message: e.to_string(),
        })?;

        Ok(range.values)
    }

    /// URL of the values endpoint for a sheet, name percent-encoded.
    fn values_url(&self, sheet_name: &str) -> String {
        let sheet = utf8_percent_encode(sheet_name, NON_ALPHANUMERIC);
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, self.spreadsheet_id, sheet
        )
    }
}
