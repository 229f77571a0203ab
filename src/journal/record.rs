use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A single logged spending transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingRecord {
    pub id: u64,
    pub date: NaiveDate,
    pub category: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

impl SpendingRecord {
    pub fn new(
        id: u64,
        date: NaiveDate,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Amount as seen by every aggregation path. Non-finite values count as zero.
    pub fn sanitized_amount(&self) -> f64 {
        if self.amount.is_finite() {
            self.amount
        } else {
            0.0
        }
    }
}

/// Raw form input for a new record; parsed and validated by `RecordService`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInput {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl RecordInput {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Accepts legacy stored amounts: numbers pass through, string amounts are
/// parsed, anything unparsable degrades to zero instead of failing the load.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(value) if value.is_finite() => value,
        RawAmount::Number(_) => 0.0,
        RawAmount::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
    })
}
