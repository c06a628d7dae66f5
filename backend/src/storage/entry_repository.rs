use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use shared::{Entry, ValueRange};
use tracing::info;

use super::sheets_client::SheetsClient;
use super::traits::{Connection, EntryStorage};

/// Spreadsheet holding the entries
pub const SPREADSHEET_ID: &str = "1Ydp7W6M6Cc7SGxrCBMBGMnh5ZK7pH3GlzRM0F-KU73U";

/// Columns A..G of the first sheet, one entry per row
pub const ENTRIES_RANGE: &str = "A:G";

/// Repository for entries stored in the spreadsheet
#[derive(Clone)]
pub struct EntryRepository {
    client: Arc<SheetsClient>,
}

impl EntryRepository {
    pub fn new(client: Arc<SheetsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EntryStorage for EntryRepository {
    async fn get_all(&self) -> Result<ValueRange> {
        let range = self.client.get_values(SPREADSHEET_ID, ENTRIES_RANGE).await?;
        info!("Fetched {} row(s) from {}", range.rows().len(), ENTRIES_RANGE);
        Ok(range)
    }

    async fn create(&self, entry: &Entry) -> Result<()> {
        self.client
            .append_values(SPREADSHEET_ID, ENTRIES_RANGE, &[entry.to_row()])
            .await?;
        Ok(())
    }
}

/// Connection that hands out spreadsheet-backed repositories sharing one client
#[derive(Clone)]
pub struct SheetsConnection {
    client: Arc<SheetsClient>,
}

impl SheetsConnection {
    pub fn new(client: Arc<SheetsClient>) -> Self {
        Self { client }
    }
}

impl Connection for SheetsConnection {
    type EntryRepository = EntryRepository;

    fn create_entry_repository(&self) -> EntryRepository {
        EntryRepository::new(self.client.clone())
    }
}
