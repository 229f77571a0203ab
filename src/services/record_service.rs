//! Business logic for the record lifecycle: create, delete, list.

use chrono::NaiveDate;

use crate::errors::JournalError;
use crate::journal::{Journal, RecordInput, SpendingRecord};

use super::ServiceResult;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Provides validated lifecycle helpers for spending records.
pub struct RecordService;

impl RecordService {
    /// Validates `input`, assigns a fresh id, and appends the record.
    ///
    /// Validation is strict and collects every offending field into one
    /// `InvalidRecord` error: missing date/category/amount, an unparsable
    /// date, or an amount that is not a non-negative finite number.
    pub fn add(journal: &mut Journal, input: &RecordInput) -> ServiceResult<SpendingRecord> {
        let mut invalid: Vec<String> = Vec::new();

        let date_text = input.date.trim();
        let date = if date_text.is_empty() {
            invalid.push("date".into());
            None
        } else {
            match NaiveDate::parse_from_str(date_text, DATE_FORMAT) {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    invalid.push("date".into());
                    None
                }
            }
        };

        let category = input.category.trim();
        if category.is_empty() {
            invalid.push("category".into());
        }

        let amount_text = input.amount.trim();
        let amount = if amount_text.is_empty() {
            invalid.push("amount".into());
            None
        } else {
            match amount_text.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
                _ => {
                    invalid.push("amount".into());
                    None
                }
            }
        };

        if !invalid.is_empty() {
            return Err(JournalError::InvalidRecord { fields: invalid });
        }

        let record = SpendingRecord::new(
            journal.next_record_id(),
            date.unwrap_or_default(),
            category,
            amount.unwrap_or_default(),
            input.description.clone(),
        );
        journal.add_record(record.clone());
        Ok(record)
    }

    /// Removes the record with `id`. Unknown ids are a no-op, not an error;
    /// returns whether anything was removed.
    pub fn remove(journal: &mut Journal, id: u64) -> bool {
        journal.remove_record(id).is_some()
    }

    /// Records sorted newest first, truncated to `limit`. The sort is stable,
    /// so records sharing a date keep insertion order.
    pub fn recent(journal: &Journal, limit: usize) -> Vec<&SpendingRecord> {
        let mut sorted: Vec<&SpendingRecord> = journal.records.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(limit);
        sorted
    }
}
