//! # REST API Interface Layer
//!
//! HTTP endpoints of the tracker. Handlers translate between JSON and the
//! domain/storage layers and map failures to responses; they hold no logic
//! of their own.

pub mod entry_apis;
pub mod logging_apis;
