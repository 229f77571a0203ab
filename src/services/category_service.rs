//! Registry rules for the merged base + custom category list.

use crate::errors::JournalError;
use crate::journal::{CategoryCatalog, Journal};

use super::ServiceResult;

pub struct CategoryService;

impl CategoryService {
    /// Base catalog entries in catalog order, followed by custom entries in
    /// insertion order.
    pub fn all(catalog: &CategoryCatalog, journal: &Journal) -> Vec<String> {
        catalog
            .names()
            .iter()
            .cloned()
            .chain(journal.custom_categories.iter().cloned())
            .collect()
    }

    /// Adds a custom category. Trims whitespace, rejects names that are
    /// empty after trimming, and rejects case-sensitive duplicates across
    /// the base + custom union. Returns the stored name.
    pub fn add(
        journal: &mut Journal,
        catalog: &CategoryCatalog,
        name: &str,
    ) -> ServiceResult<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(JournalError::EmptyCategoryName);
        }
        let exists = catalog
            .names()
            .iter()
            .map(String::as_str)
            .chain(journal.custom_categories.iter().map(String::as_str))
            .any(|existing| existing == trimmed);
        if exists {
            return Err(JournalError::DuplicateCategory(trimmed.to_string()));
        }
        journal.custom_categories.push(trimmed.to_string());
        Ok(trimmed.to_string())
    }
}
