//! Reporting granularities and calendar arithmetic.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Full English month names in calendar order, used as chart labels.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates the supported reporting cadences.
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Granularity::Daily => "Daily",
            Granularity::Weekly => "Weekly",
            Granularity::Monthly => "Monthly",
        };
        f.write_str(label)
    }
}

/// A granularity together with the reference period it needs: daily and
/// weekly views are scoped to one month of one year, the monthly view to a
/// whole year. There is no catch-all variant, so an unknown granularity
/// cannot reach the filter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportPeriod {
    Daily { month: u32, year: i32 },
    Weekly { month: u32, year: i32 },
    Monthly { year: i32 },
}

impl ReportPeriod {
    pub fn granularity(&self) -> Granularity {
        match self {
            ReportPeriod::Daily { .. } => Granularity::Daily,
            ReportPeriod::Weekly { .. } => Granularity::Weekly,
            ReportPeriod::Monthly { .. } => Granularity::Monthly,
        }
    }

    pub fn year(&self) -> i32 {
        match *self {
            ReportPeriod::Daily { year, .. }
            | ReportPeriod::Weekly { year, .. }
            | ReportPeriod::Monthly { year } => year,
        }
    }

    /// The reference month, when the granularity carries one.
    pub fn reference_month(&self) -> Option<u32> {
        match *self {
            ReportPeriod::Daily { month, .. } | ReportPeriod::Weekly { month, .. } => Some(month),
            ReportPeriod::Monthly { .. } => None,
        }
    }
}

/// Day count of the given calendar month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_respects_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn month_lengths_cover_the_year() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (index, days) in expected.iter().enumerate() {
            assert_eq!(days_in_month(2023, index as u32 + 1), *days);
        }
    }

    #[test]
    fn period_exposes_reference_fields() {
        let weekly = ReportPeriod::Weekly {
            month: 2,
            year: 2024,
        };
        assert_eq!(weekly.granularity(), Granularity::Weekly);
        assert_eq!(weekly.reference_month(), Some(2));
        assert_eq!(weekly.year(), 2024);

        let monthly = ReportPeriod::Monthly { year: 2024 };
        assert_eq!(monthly.reference_month(), None);
    }
}
