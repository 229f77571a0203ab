pub mod json_backend;

use crate::{errors::JournalError, journal::SpendingRecord};

pub type Result<T> = std::result::Result<T, JournalError>;

/// Abstraction over persistence backends holding the journal's two durable
/// keys: the record list and the custom category list, each an opaque JSON
/// array. An absent key reads as an empty list, never an error.
pub trait StorageBackend: Send + Sync {
    fn load_records(&self) -> Result<Vec<SpendingRecord>>;
    fn save_records(&self, records: &[SpendingRecord]) -> Result<()>;
    fn load_custom_categories(&self) -> Result<Vec<String>>;
    fn save_custom_categories(&self, categories: &[String]) -> Result<()>;
}

pub use json_backend::JsonStorage;
