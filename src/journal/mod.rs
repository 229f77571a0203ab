//! Journal domain models, persistence-friendly types, and calendar helpers.

pub mod catalog;
#[allow(clippy::module_inception)]
pub mod journal;
pub mod period;
pub mod record;

pub use catalog::{CatalogEntry, CategoryCatalog};
pub use journal::Journal;
pub use period::{days_in_month, Granularity, ReportPeriod, MONTH_NAMES};
pub use record::{RecordInput, SpendingRecord};
