//! Record-level and breakdown-level filtering.
//!
//! Category and region filters are case-insensitive substring matches on the
//! record fields (`"elec"` matches `"Electronics"`) and are combined with AND.
//! They narrow the population before aggregation. The revenue threshold acts
//! afterwards, on the category breakdown only.

use crate::aggregator;
use crate::error::{AnalyticsError, Result};
use crate::models::{Aggregates, SalesFilter, SalesRecord, SalesView, YearDataset};

/// Whether `record` satisfies the category and region predicates of `filter`.
pub fn matches(record: &SalesRecord, filter: &SalesFilter) -> bool {
    let category_match = filter
        .category
        .as_deref()
        .map(|c| contains_ignore_case(&record.product_category, c))
        .unwrap_or(true);
    let region_match = filter
        .region
        .as_deref()
        .map(|r| contains_ignore_case(&record.region, r))
        .unwrap_or(true);
    category_match && region_match
}

/// Records matching `filter`, in their original order.
pub fn filter_records(records: &[SalesRecord], filter: &SalesFilter) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|r| matches(r, filter))
        .cloned()
        .collect()
}

/// Drop category breakdown entries whose revenue is below `threshold`.
pub fn apply_threshold(aggregates: &mut Aggregates, threshold: f64) {
    aggregates
        .category_breakdown
        .retain(|entry| entry.revenue >= threshold);
}

/// The view of `dataset` under `filter`.
///
/// Without record predicates the precomputed aggregates are reused. With
/// them, every figure is recomputed from the matching records; an empty match
/// yields an empty view with zeroed metrics.
pub fn filtered_view(dataset: &YearDataset, filter: &SalesFilter) -> Result<SalesView> {
    let mut view = if filter.narrows_records() {
        let data = filter_records(&dataset.records, filter);
        tracing::debug!(
            year = dataset.year,
            matched = data.len(),
            total = dataset.records.len(),
            "applied record filter"
        );
        let aggregates = match aggregator::aggregate(&data, &dataset.rates) {
            Ok(aggregates) => aggregates,
            Err(AnalyticsError::EmptyPopulation) => empty_aggregates(dataset),
            Err(e) => return Err(e),
        };
        SalesView { data, aggregates }
    } else {
        dataset.view()
    };

    if let Some(threshold) = filter.revenue_threshold {
        apply_threshold(&mut view.aggregates, threshold);
    }
    Ok(view)
}

fn empty_aggregates(dataset: &YearDataset) -> Aggregates {
    Aggregates {
        metrics: aggregator::empty_metrics(&dataset.rates),
        monthly_breakdown: Vec::new(),
        category_breakdown: Vec::new(),
        regional_breakdown: Vec::new(),
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
