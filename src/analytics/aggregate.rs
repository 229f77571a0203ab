//! Running totals and per-category sums.

use std::collections::HashMap;

use crate::journal::SpendingRecord;

/// Sum of all amounts. Non-finite amounts count as zero, so this never fails.
pub fn total_spending<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a SpendingRecord>,
{
    records
        .into_iter()
        .map(SpendingRecord::sanitized_amount)
        .sum()
}

/// Per-category sums. Categories with no matching records are absent, not
/// zero-filled; consumers needing a value for display default to zero.
pub fn category_totals<'a, I>(records: I) -> HashMap<String, f64>
where
    I: IntoIterator<Item = &'a SpendingRecord>,
{
    let mut totals = HashMap::new();
    for record in records {
        *totals.entry(record.category.clone()).or_insert(0.0) += record.sanitized_amount();
    }
    totals
}

/// Share of `amount` in `period_total`, as a percentage. Returns zero when
/// the total is zero or non-finite; this is the guard the presentation layer
/// needs before dividing.
pub fn percentage_share(amount: f64, period_total: f64) -> f64 {
    if period_total == 0.0 || !period_total.is_finite() {
        return 0.0;
    }
    amount / period_total * 100.0
}
