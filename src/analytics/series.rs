//! Time-bucketed series for charting.
//!
//! Three strategies, keyed by the view granularity: twelve fixed calendar
//! buckets for the monthly view, `ceil(days_in_month / 7)` buckets for the
//! weekly view, and one point per record for the daily view. Weekly and
//! daily expect the month-scoped subset produced by
//! [`records_in_period`](crate::analytics::filter::records_in_period).

use chrono::Datelike;

use crate::journal::{days_in_month, ReportPeriod, SpendingRecord, MONTH_NAMES};

/// Index-aligned label/amount pairs. This pairing is the charting contract:
/// `labels` and `amounts` always have equal length.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub amounts: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }
}

/// Dispatches to the bucketizer matching the period's granularity.
pub fn spending_series<'a, I>(records: I, period: &ReportPeriod) -> ChartSeries
where
    I: IntoIterator<Item = &'a SpendingRecord>,
{
    match *period {
        ReportPeriod::Monthly { .. } => monthly_series(records),
        ReportPeriod::Weekly { month, year } => weekly_series(records, month, year),
        ReportPeriod::Daily { .. } => daily_series(records),
    }
}

/// Twelve buckets in fixed calendar order, labeled with full month names.
/// Months without records report zero.
pub fn monthly_series<'a, I>(records: I) -> ChartSeries
where
    I: IntoIterator<Item = &'a SpendingRecord>,
{
    let mut amounts = vec![0.0; 12];
    for record in records {
        amounts[record.date.month0() as usize] += record.sanitized_amount();
    }
    ChartSeries {
        labels: MONTH_NAMES.iter().map(|name| name.to_string()).collect(),
        amounts,
    }
}

/// Week buckets within one month: bucket `k` covers days
/// `(k-1)*7+1 ..= min(k*7, days_in_month)`, and a record's day-of-month
/// lands it in bucket `ceil(day / 7)`. Records outside the reference month
/// are ignored rather than misplaced.
pub fn weekly_series<'a, I>(records: I, month: u32, year: i32) -> ChartSeries
where
    I: IntoIterator<Item = &'a SpendingRecord>,
{
    let days = days_in_month(year, month) as usize;
    let weeks = (days + 6) / 7;
    let mut amounts = vec![0.0; weeks];
    for record in records {
        if record.date.year() != year || record.date.month() != month {
            continue;
        }
        let week = (record.date.day() as usize + 6) / 7;
        amounts[week - 1] += record.sanitized_amount();
    }
    let labels = (1..=weeks)
        .map(|week| {
            let start = (week - 1) * 7 + 1;
            let end = (week * 7).min(days);
            format!("Week {week} ({start}-{end})")
        })
        .collect();
    ChartSeries { labels, amounts }
}

/// One point per record, sorted ascending by date. The sort is stable, so
/// records sharing a date keep their original relative order. Labels are the
/// ISO `YYYY-MM-DD` date strings.
pub fn daily_series<'a, I>(records: I) -> ChartSeries
where
    I: IntoIterator<Item = &'a SpendingRecord>,
{
    let mut sorted: Vec<&SpendingRecord> = records.into_iter().collect();
    sorted.sort_by_key(|record| record.date);
    let labels = sorted
        .iter()
        .map(|record| record.date.format("%Y-%m-%d").to_string())
        .collect();
    let amounts = sorted
        .iter()
        .map(|record| record.sanitized_amount())
        .collect();
    ChartSeries { labels, amounts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: u64, date: &str, amount: f64) -> SpendingRecord {
        SpendingRecord::new(
            id,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            "Food",
            amount,
            "",
        )
    }

    #[test]
    fn monthly_series_has_twelve_fixed_buckets() {
        let records = vec![
            record(1, "2024-01-15", 20.0),
            record(2, "2024-02-10", 30.0),
            record(3, "2024-02-20", 500.0),
        ];
        let series = monthly_series(&records);
        assert_eq!(series.len(), 12);
        assert_eq!(series.labels[0], "January");
        assert_eq!(series.labels[11], "December");
        assert_eq!(series.amounts[0], 20.0);
        assert_eq!(series.amounts[1], 530.0);
        assert!(series.amounts[2..].iter().all(|amount| *amount == 0.0));
        assert_eq!(series.total(), 550.0);
    }

    #[test]
    fn weekly_bucket_count_follows_month_length() {
        let none: Vec<SpendingRecord> = Vec::new();
        // Non-leap February: 28 days, exactly 4 weeks.
        assert_eq!(weekly_series(&none, 2, 2023).len(), 4);
        // Leap February: 29 days, 5 buckets.
        assert_eq!(weekly_series(&none, 2, 2024).len(), 5);
        // A 31-day month: 5 buckets, the last covering 3 days.
        let january = weekly_series(&none, 1, 2024);
        assert_eq!(january.len(), 5);
        assert_eq!(january.labels[4], "Week 5 (29-31)");
    }

    #[test]
    fn weekly_series_places_days_by_ceiling() {
        let records = vec![record(1, "2024-02-10", 30.0), record(2, "2024-02-20", 500.0)];
        let series = weekly_series(&records, 2, 2024);
        assert_eq!(series.labels[1], "Week 2 (8-14)");
        assert_eq!(series.labels[2], "Week 3 (15-21)");
        assert_eq!(series.labels[4], "Week 5 (29-29)");
        assert_eq!(series.amounts, [0.0, 30.0, 500.0, 0.0, 0.0]);
    }

    #[test]
    fn weekly_series_ignores_out_of_month_records() {
        let records = vec![record(1, "2024-03-31", 99.0), record(2, "2024-02-01", 5.0)];
        let series = weekly_series(&records, 2, 2024);
        assert_eq!(series.total(), 5.0);
    }

    #[test]
    fn daily_series_sorts_stably_by_date() {
        let records = vec![
            record(1, "2024-02-20", 500.0),
            record(2, "2024-02-10", 30.0),
            record(3, "2024-02-10", 7.5),
        ];
        let series = daily_series(&records);
        assert_eq!(series.labels, ["2024-02-10", "2024-02-10", "2024-02-20"]);
        // Equal dates keep their original relative order.
        assert_eq!(series.amounts, [30.0, 7.5, 500.0]);
        assert_eq!(series.len(), records.len());
    }

    #[test]
    fn dispatch_matches_the_view_granularity() {
        let records = vec![record(1, "2024-02-10", 30.0)];
        let monthly = spending_series(&records, &ReportPeriod::Monthly { year: 2024 });
        assert_eq!(monthly.len(), 12);
        let weekly = spending_series(
            &records,
            &ReportPeriod::Weekly {
                month: 2,
                year: 2024,
            },
        );
        assert_eq!(weekly.len(), 5);
        let daily = spending_series(
            &records,
            &ReportPeriod::Daily {
                month: 2,
                year: 2024,
            },
        );
        assert_eq!(daily.len(), 1);
    }
}
