use anyhow::Result;
use log::info;

use shared::Record;

use crate::backend::storage::record_store::RecordStore;

/// The in-memory record collection backed by the persisted store.
///
/// Every mutation rewrites the document immediately, so what is on disk
/// always matches what the dashboard shows. Single writer, last write wins.
pub struct Ledger {
    records: Vec<Record>,
    store: RecordStore,
}

impl Ledger {
    /// Read the persisted records into a new ledger
    pub fn load(store: RecordStore) -> Self {
        let records = store.load();
        Self { records, store }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Append a record and persist the whole collection. A failed save
    /// rolls the append back so memory keeps matching the document.
    pub fn add(&mut self, record: Record) -> Result<()> {
        info!(
            "💰 Adding {} record {} dated {}",
            record.kind(),
            record.id(),
            record.date()
        );
        self.records.push(record);
        if let Err(e) = self.store.save_all(&self.records) {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Delete the record with the given id. Returns whether anything was
    /// removed; the document is only rewritten when a record actually
    /// went away, and memory only changes once that rewrite succeeds.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let remaining: Vec<Record> = self
            .records
            .iter()
            .filter(|record| record.id() != id)
            .cloned()
            .collect();

        if remaining.len() == self.records.len() {
            info!("🗑 Delete requested for unknown record id {}", id);
            return Ok(false);
        }

        self.store.save_all(&remaining)?;
        self.records = remaining;
        info!("🗑 Deleted record {}", id);
        Ok(true)
    }
}
