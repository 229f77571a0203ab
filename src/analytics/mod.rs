//! The filter → aggregate → bucketize pipeline behind the dashboard.
//!
//! Everything here is a pure function of its inputs: the caller narrows the
//! record list to a [`ReportPeriod`](crate::journal::ReportPeriod), then sums
//! and buckets the subset. No module in this tree touches storage.

pub mod aggregate;
pub mod filter;
pub mod report;
pub mod series;

pub use report::{build_report, SpendingReport};
pub use series::ChartSeries;
