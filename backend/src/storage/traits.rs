//! # Storage Traits
//!
//! Abstractions that let the domain and IO layers work against the
//! spreadsheet or an in-memory store without knowing which one is in use.

use anyhow::Result;
use async_trait::async_trait;
use shared::{Entry, ValueRange};

/// Interface for entry persistence
#[async_trait]
pub trait EntryStorage: Send + Sync {
    /// Fetch the whole entry range as the remote service returns it.
    /// Rows are not interpreted here.
    async fn get_all(&self) -> Result<ValueRange>;

    /// Append the entry as a new row
    async fn create(&self, entry: &Entry) -> Result<()>;
}

/// Factory for repositories.
///
/// Handlers ask for a fresh repository on every request; implementations
/// share whatever underlying client they hold.
pub trait Connection: Send + Sync + Clone + 'static {
    type EntryRepository: EntryStorage;

    fn create_entry_repository(&self) -> Self::EntryRepository;
}
