use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// StoreConnection resolves where the records document lives on disk and
/// makes sure the directory exists before anything tries to write there.
#[derive(Clone)]
pub struct StoreConnection {
    base_directory: PathBuf,
}

impl StoreConnection {
    const RECORDS_FILE: &'static str = "records.json";

    /// Create a connection rooted at an explicit base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory,
    /// ~/Documents/Fare Ledger
    pub fn new_default() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = home_dir.join("Documents").join("Fare Ledger");
        info!("Using data directory: {}", data_dir.display());

        Self::new(data_dir)
    }

    /// Path of the single persisted records document
    pub fn records_file_path(&self) -> PathBuf {
        self.base_directory.join(Self::RECORDS_FILE)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}
