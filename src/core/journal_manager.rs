//! Facade that coordinates journal state, the category catalog, and
//! persistence.

use crate::analytics::{self, SpendingReport};
use crate::errors::JournalError;
use crate::journal::{CategoryCatalog, Journal, RecordInput, ReportPeriod, SpendingRecord};
use crate::services::{CategoryService, RecordService};
use crate::storage::StorageBackend;

/// Owns the in-memory working copy of both durable keys and the storage
/// backend they are written through to. All mutations route through here;
/// analytics read the state without ever touching storage.
pub struct JournalManager {
    journal: Journal,
    catalog: CategoryCatalog,
    storage: Box<dyn StorageBackend>,
}

impl JournalManager {
    /// Loads both durable keys and assembles the session's working copy.
    pub fn load(
        catalog: CategoryCatalog,
        storage: Box<dyn StorageBackend>,
    ) -> Result<Self, JournalError> {
        let records = storage.load_records()?;
        let custom_categories = storage.load_custom_categories()?;
        tracing::info!(
            records = records.len(),
            custom_categories = custom_categories.len(),
            "journal loaded"
        );
        Ok(Self {
            journal: Journal::new(records, custom_categories),
            catalog,
            storage,
        })
    }

    pub fn records(&self) -> &[SpendingRecord] {
        &self.journal.records
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Validates and appends a new record, then persists the full list.
    pub fn add_record(&mut self, input: &RecordInput) -> Result<SpendingRecord, JournalError> {
        let record = RecordService::add(&mut self.journal, input)?;
        self.storage.save_records(&self.journal.records)?;
        tracing::debug!(id = record.id, "record added");
        Ok(record)
    }

    /// Deletes the record with `id` and persists. Unknown ids are a no-op;
    /// the return value reports whether anything was removed.
    pub fn delete_record(&mut self, id: u64) -> Result<bool, JournalError> {
        let removed = RecordService::remove(&mut self.journal, id);
        if removed {
            self.storage.save_records(&self.journal.records)?;
            tracing::debug!(id, "record deleted");
        }
        Ok(removed)
    }

    /// Records sorted newest first, truncated to `limit`.
    pub fn recent_records(&self, limit: usize) -> Vec<&SpendingRecord> {
        RecordService::recent(&self.journal, limit)
    }

    /// The merged base + custom category list.
    pub fn categories(&self) -> Vec<String> {
        CategoryService::all(&self.catalog, &self.journal)
    }

    /// Adds a custom category and persists the custom list.
    pub fn add_category(&mut self, name: &str) -> Result<String, JournalError> {
        let added = CategoryService::add(&mut self.journal, &self.catalog, name)?;
        self.storage
            .save_custom_categories(&self.journal.custom_categories)?;
        tracing::debug!(category = %added, "custom category added");
        Ok(added)
    }

    /// Runs the full filter/aggregate/bucketize pipeline for `period`.
    pub fn report(&self, period: &ReportPeriod) -> SpendingReport {
        analytics::build_report(&self.journal.records, period)
    }
}
