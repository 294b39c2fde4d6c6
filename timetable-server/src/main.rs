use std::net::SocketAddr;

use timetable_server::sheets::{SheetsClient, SheetsConfig};
use timetable_server::web::{AppState, create_router};

/// Spreadsheet holding one timetable sheet per route.
const DEFAULT_SPREADSHEET_ID: &str = "17cOylW-cc5fKKzHhyknUqwJCOuhwEJkjifVyh8WN5l8";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // The API key must be present before we serve anything; without it
    // every request would fail at the spreadsheet.
    let api_key = match std::env::var("SHEETS_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            eprintln!("Error: SHEETS_API_KEY not set. Cannot reach the timetable spreadsheet.");
            std::process::exit(1);
        }
    };

    let spreadsheet_id = std::env::var("SHEETS_SPREADSHEET_ID")
        .unwrap_or_else(|_| DEFAULT_SPREADSHEET_ID.to_string());

    // Create sheets client
    let config = SheetsConfig::new(api_key, spreadsheet_id);
    let sheets = SheetsClient::new(config).expect("Failed to create sheets client");

    // Build app state
    let state = AppState::new(sheets);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Timetable server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health       - Health check");
    println!("  GET  /next_trains  - Next three departures (source, destination, path, time)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
