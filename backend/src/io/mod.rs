//! # IO Module
//!
//! Adapter layer between HTTP clients and the backend.
//!
//! ## Supported Operations
//!
//! - **GET /api/entries**: raw spreadsheet range of all entries
//! - **POST /api/entries**: create an entry
//! - **POST /api/logs**: log lines forwarded from the frontend
//! - **GET /api/health**: liveness probe

pub mod rest;

pub use rest::entry_apis::{create_entry, list_entries};
pub use rest::logging_apis::{health_check, log_message};
