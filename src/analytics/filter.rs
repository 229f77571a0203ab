//! Time-window filtering of the full record list.

use chrono::Datelike;

use crate::journal::{ReportPeriod, SpendingRecord};

/// Returns the records relevant to `period`, preserving input order.
///
/// The monthly view keeps everything in the reference year; daily and weekly
/// views share the same month-scoped filter and only diverge downstream in
/// the bucketizer.
pub fn records_in_period<'a>(
    records: &'a [SpendingRecord],
    period: &ReportPeriod,
) -> Vec<&'a SpendingRecord> {
    records
        .iter()
        .filter(|record| in_period(record, period))
        .collect()
}

fn in_period(record: &SpendingRecord, period: &ReportPeriod) -> bool {
    match *period {
        ReportPeriod::Monthly { year } => record.date.year() == year,
        ReportPeriod::Daily { month, year } | ReportPeriod::Weekly { month, year } => {
            record.date.year() == year && record.date.month() == month
        }
    }
}
