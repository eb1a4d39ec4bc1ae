use anyhow::Result;
use log::{info, warn};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};

use shared::Record;

use super::connection::StoreConnection;

/// RecordStore reads and writes the single persisted records document.
///
/// Loading is fail-soft: a missing or unreadable document yields an empty
/// collection so the app always starts, at worst with a fresh ledger.
pub struct RecordStore {
    connection: StoreConnection,
}

impl RecordStore {
    pub fn new(connection: StoreConnection) -> Self {
        Self { connection }
    }

    /// Load all records from disk
    pub fn load(&self) -> Vec<Record> {
        let file_path = self.connection.records_file_path();

        let contents = match fs::read_to_string(&file_path) {
            Ok(contents) => contents,
            Err(_) => {
                info!(
                    "No records file at {}, starting with an empty ledger",
                    file_path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Record>>(&contents) {
            Ok(records) => {
                info!(
                    "Loaded {} records from {}",
                    records.len(),
                    file_path.display()
                );
                records
            }
            Err(e) => {
                warn!(
                    "Records file {} is unreadable ({}), starting with an empty ledger",
                    file_path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Write the full collection to disk, replacing the previous document
    pub fn save_all(&self, records: &[Record]) -> Result<()> {
        let file_path = self.connection.records_file_path();

        // Write to a temporary file for atomic replacement
        let temp_path = file_path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;

            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, records)?;
            writer.flush()?;
        }

        // Atomic move from temp to final file
        fs::rename(&temp_path, &file_path)?;

        info!("Saved {} records to {}", records.len(), file_path.display());
        Ok(())
    }
}
