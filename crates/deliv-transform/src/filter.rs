use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use deliv_model::DeliveryRecord;

/// Sidebar filter selections applied to the cleaned table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilters {
    /// Upper-bound date: orders on or after this day are excluded.
    pub before: NaiveDate,
    /// Allowed traffic-density categories.
    pub traffic: BTreeSet<String>,
}

impl OrderFilters {
    pub fn new<I, S>(before: NaiveDate, traffic: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            before,
            traffic: traffic.into_iter().map(Into::into).collect(),
        }
    }
}

/// Select the working copy of the cleaned table for one view invocation.
///
/// The cleaned table itself is never mutated; each set of sidebar
/// selections produces a fresh copy of the surviving rows, in order.
pub fn apply_filters(records: &[DeliveryRecord], filters: &OrderFilters) -> Vec<DeliveryRecord> {
    let selected: Vec<DeliveryRecord> = records
        .iter()
        .filter(|record| record.order_date < filters.before)
        .filter(|record| filters.traffic.contains(record.traffic.as_str()))
        .cloned()
        .collect();
    debug!(
        input = records.len(),
        selected = selected.len(),
        "applied sidebar filters"
    );
    selected
}
