//! File-backed key-value storage: one JSON file per durable key.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::journal::SpendingRecord;

use super::{Result, StorageBackend};

const RECORDS_FILE: &str = "spending_records.json";
const CATEGORIES_FILE: &str = "custom_categories.json";
const TMP_SUFFIX: &str = "tmp";
const APP_DIR: &str = "journal_core";

/// JSON storage rooted at a directory. Each key is one file; writes stage to
/// a temporary file and rename over the target so a failed write never
/// corrupts the previous contents.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Creates a storage rooted at `root`, or at the platform data directory
    /// when no root is given.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_root);
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn records_path(&self) -> PathBuf {
        self.root.join(RECORDS_FILE)
    }

    pub fn categories_path(&self) -> PathBuf {
        self.root.join(CATEGORIES_FILE)
    }

    fn read_key<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_key<T: Serialize>(&self, path: &Path, values: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(values)?;
        write_atomic(path, &json)
    }
}

impl StorageBackend for JsonStorage {
    fn load_records(&self) -> Result<Vec<SpendingRecord>> {
        self.read_key(&self.records_path())
    }

    fn save_records(&self, records: &[SpendingRecord]) -> Result<()> {
        self.write_key(&self.records_path(), records)
    }

    fn load_custom_categories(&self) -> Result<Vec<String>> {
        self.read_key(&self.categories_path())
    }

    fn save_custom_categories(&self, categories: &[String]) -> Result<()> {
        self.write_key(&self.categories_path(), categories)
    }
}

fn default_root() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Writes by staging to a temporary file and renaming over the target.
fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let tmp = path.with_extension(TMP_SUFFIX);
    fs::write(&tmp, data)?;
    fs::rename(tmp, path)?;
    Ok(())
}
