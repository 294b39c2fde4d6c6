//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Local;
use tracing::debug;

use crate::sheets::SheetsError;
use crate::timetable::{self, TimetableError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/next_trains", get(next_trains))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Look up the next three departures between two stations.
async fn next_trains(
    State(state): State<AppState>,
    Query(query): Query<NextTrainsQuery>,
) -> Result<Json<NextTrainsResponse>, AppError> {
    // Parameters are checked before anything is fetched.
    let (Some(source), Some(destination), Some(path), Some(time)) = (
        non_empty(query.source),
        non_empty(query.destination),
        non_empty(query.path),
        non_empty(query.time),
    ) else {
        return Err(AppError::BadRequest {
            message: "Please provide source, destination, path, and time".to_string(),
        });
    };

    let grid = state.sheets.fetch_grid(&path).await?;
    debug!(sheet = %path, rows = grid.len(), "fetched timetable grid");

    // Departures are compared against today's calendar date only.
    let today = Local::now().date_naive();
    let upcoming = timetable::next_departures(&grid, &source, &destination, &time, today)?;

    Ok(Json(NextTrainsResponse::from_departures(upcoming)))
}

/// A present, non-empty query parameter.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
}

impl From<SheetsError> for AppError {
    fn from(e: SheetsError) -> Self {
        AppError::Upstream {
            message: format!("Could not open sheet: {e}"),
        }
    }
}

impl From<TimetableError> for AppError {
    fn from(e: TimetableError) -> Self {
        match e {
            TimetableError::NoData => AppError::NotFound {
                message: "No timetable data found".to_string(),
            },
            TimetableError::UnknownStation(_) => AppError::BadRequest {
                message: "Invalid source or destination".to_string(),
            },
            TimetableError::BadTime(_) => AppError::BadRequest {
                message: "Invalid time format, use HH:MM or HH:MM:SS".to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Upstream { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
