use crate::journal::record::SpendingRecord;

/// In-memory working copy of the two durable keys: the full record list and
/// the user-added custom categories. Loaded once at session start; every
/// mutation goes through the manager and is written back in full.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journal {
    pub records: Vec<SpendingRecord>,
    pub custom_categories: Vec<String>,
}

impl Journal {
    pub fn new(records: Vec<SpendingRecord>, custom_categories: Vec<String>) -> Self {
        Self {
            records,
            custom_categories,
        }
    }

    /// Next free record id: one past the highest id ever assigned.
    pub fn next_record_id(&self) -> u64 {
        self.records
            .iter()
            .map(|record| record.id)
            .max()
            .map_or(1, |highest| highest + 1)
    }

    pub fn record(&self, id: u64) -> Option<&SpendingRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn add_record(&mut self, record: SpendingRecord) -> u64 {
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Removes and returns the record with `id`, if present.
    pub fn remove_record(&mut self, id: u64) -> Option<SpendingRecord> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }
}
