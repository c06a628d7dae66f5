//! Entry creation.
use anyhow::Result;
use shared::{Entry, NewEntry};
use tracing::info;
use uuid::Uuid;

use crate::storage::{Connection, EntryStorage};

pub struct EntryService<C: Connection> {
    entry_repository: C::EntryRepository,
}

impl<C: Connection> EntryService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            entry_repository: connection.create_entry_repository(),
        }
    }

    /// Give the entry a fresh id and persist it.
    ///
    /// The id is not checked against existing rows. No other rule applies:
    /// whatever fields arrived are stored as they are.
    pub async fn create(&self, new_entry: NewEntry) -> Result<Entry> {
        let entry = Entry::from_new(Uuid::new_v4().to_string(), new_entry);

        self.entry_repository.create(&entry).await?;
        info!("Created entry {}", entry.id);

        Ok(entry)
    }
}
