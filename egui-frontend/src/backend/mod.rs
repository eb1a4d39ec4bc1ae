//! # Backend Module
//!
//! The embedded data layer for the app: file storage for the records
//! document and the domain logic (ledger, period filtering, summary math)
//! that the UI renders from.

pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;

use domain::ledger::Ledger;
use storage::connection::StoreConnection;
use storage::record_store::RecordStore;

/// The application's data layer: the loaded ledger plus its storage.
pub struct Backend {
    pub ledger: Ledger,
}

impl Backend {
    /// Open the default data directory and load whatever records are there
    pub fn new() -> Result<Self> {
        let connection = StoreConnection::new_default()?;
        info!(
            "📁 Backend data directory: {}",
            connection.base_directory().display()
        );
        Ok(Self::with_connection(connection))
    }

    /// Build a backend over an explicit directory. Tests point this at a
    /// temporary directory instead of the user's documents folder.
    pub fn with_connection(connection: StoreConnection) -> Self {
        let store = RecordStore::new(connection);
        let ledger = Ledger::load(store);
        Self { ledger }
    }
}
