//! One-call pipeline producing everything a dashboard view needs.

use std::collections::HashMap;

use serde::Serialize;

use crate::analytics::{aggregate, filter, series, ChartSeries};
use crate::journal::{ReportPeriod, SpendingRecord};

/// Aggregated output for one reporting period: the presentation boundary.
#[derive(Debug, Clone, Serialize)]
pub struct SpendingReport {
    pub period: ReportPeriod,
    pub all_time_total: f64,
    pub period_total: f64,
    pub category_totals: HashMap<String, f64>,
    pub series: ChartSeries,
}

/// Runs filter, aggregation, and bucketing over the full record list.
pub fn build_report(records: &[SpendingRecord], period: &ReportPeriod) -> SpendingReport {
    let filtered = filter::records_in_period(records, period);
    SpendingReport {
        period: *period,
        all_time_total: aggregate::total_spending(records),
        period_total: aggregate::total_spending(filtered.iter().copied()),
        category_totals: aggregate::category_totals(filtered.iter().copied()),
        series: series::spending_series(filtered.iter().copied(), period),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: u64, date: &str, category: &str, amount: f64) -> SpendingRecord {
        SpendingRecord::new(
            id,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category,
            amount,
            "",
        )
    }

    #[test]
    fn report_combines_filter_aggregation_and_series() {
        let records = vec![
            record(1, "2024-01-15", "Food", 20.0),
            record(2, "2024-02-10", "Food", 30.0),
            record(3, "2024-02-20", "Rent", 500.0),
            record(4, "2023-06-01", "Travel", 80.0),
        ];
        let report = build_report(&records, &ReportPeriod::Monthly { year: 2024 });
        assert_eq!(report.all_time_total, 630.0);
        assert_eq!(report.period_total, 550.0);
        assert_eq!(report.category_totals.get("Food"), Some(&50.0));
        assert_eq!(report.category_totals.get("Rent"), Some(&500.0));
        assert_eq!(report.category_totals.get("Travel"), None);
        assert_eq!(report.series.len(), 12);
        assert_eq!(report.series.total(), report.period_total);
    }

    #[test]
    fn empty_journal_reports_zeros() {
        let report = build_report(&[], &ReportPeriod::Monthly { year: 2024 });
        assert_eq!(report.all_time_total, 0.0);
        assert_eq!(report.period_total, 0.0);
        assert!(report.category_totals.is_empty());
        assert_eq!(report.series.len(), 12);
        assert_eq!(report.series.total(), 0.0);
    }
}
