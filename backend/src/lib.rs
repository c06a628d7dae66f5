//! # Finance Tracker Backend
//!
//! HTTP API for the finance tracker, persisting entries in a Google Sheets
//! spreadsheet.
//!
//! ## Architecture
//!
//! ```text
//! Frontend (Yew)
//!     ↓
//! IO Layer (REST handlers)
//!     ↓
//! Domain Layer (EntryService, create only)
//!     ↓
//! Storage Layer (EntryRepository → SheetsClient → Google Sheets)
//! ```
//!
//! Every layer passes data straight through: no caching, no retries, no
//! validation of entry fields.

pub mod config;
pub mod context;
pub mod domain;
pub mod io;
pub mod storage;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::storage::Connection;

/// State shared with every handler
#[derive(Clone)]
pub struct AppState<C: Connection> {
    pub connection: C,
}

impl<C: Connection> AppState<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }
}

/// Create the API router with CORS for the given frontend origin
pub fn create_router<C: Connection>(app_state: AppState<C>, frontend_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/entries",
            get(io::list_entries::<C>).post(io::create_entry::<C>),
        )
        .route("/logs", post(io::log_message))
        .route("/health", get(io::health_check));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
