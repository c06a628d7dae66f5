//! In-memory entry store.
//!
//! Keeps rows exactly as the spreadsheet would and answers reads in the
//! same shape, so the rest of the stack cannot tell the difference. Used by
//! tests and by `STORAGE=memory` for local development.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use shared::{Entry, ValueRange};
use tokio::sync::RwLock;

use super::traits::{Connection, EntryStorage};

#[derive(Clone, Default)]
pub struct InMemoryEntryStorage {
    rows: Arc<RwLock<Vec<Vec<Value>>>>,
}

impl InMemoryEntryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn rows(&self) -> Vec<Vec<Value>> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl EntryStorage for InMemoryEntryStorage {
    async fn get_all(&self) -> Result<ValueRange> {
        let rows = self.rows.read().await;

        Ok(ValueRange {
            range: Some(format!("Sheet1!A1:G{}", rows.len().max(1))),
            major_dimension: Some("ROWS".to_string()),
            values: (!rows.is_empty()).then(|| rows.clone()),
        })
    }

    async fn create(&self, entry: &Entry) -> Result<()> {
        self.rows.write().await.push(entry.to_row());
        Ok(())
    }
}

impl Connection for InMemoryEntryStorage {
    type EntryRepository = InMemoryEntryStorage;

    fn create_entry_repository(&self) -> InMemoryEntryStorage {
        self.clone()
    }
}
