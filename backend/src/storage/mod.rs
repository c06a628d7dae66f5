//! # Storage Module
//!
//! Persistence for entries. The production backend is a Google Sheets
//! spreadsheet reached through [`SheetsClient`]; an in-memory store with the
//! same read shape stands in for it in tests and local runs.
//!
//! ## Layers
//!
//! - **access_token**: service-account JWT exchange and token caching
//! - **sheets_client**: the Sheets v4 values API (read range, append rows)
//! - **entry_repository**: entries to and from rows of the fixed range
//! - **memory**: in-memory implementation of the same traits
//! - **traits**: `EntryStorage` and the `Connection` repository factory
//!
//! No layer retries, caches data, or validates row contents. Remote errors
//! travel up unchanged.

pub mod access_token;
pub mod entry_repository;
pub mod memory;
pub mod sheets_client;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_utils;

pub use access_token::{ServiceAccountTokenProvider, StaticTokenProvider, TokenProvider};
pub use entry_repository::{EntryRepository, SheetsConnection, ENTRIES_RANGE, SPREADSHEET_ID};
pub use memory::InMemoryEntryStorage;
pub use sheets_client::{ServiceAccountCredentials, SheetsClient, SheetsError};
pub use traits::{Connection, EntryStorage};
