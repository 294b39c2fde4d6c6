//! Web layer for the timetable server.
//!
//! Provides the HTTP endpoint for looking up upcoming departures.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
