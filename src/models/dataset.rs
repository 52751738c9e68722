use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::breakdown::{Aggregates, SalesView};
use super::record::SalesRecord;

// ---------------------------------------------------------------------------
// SyntheticRates - Randomized figures that are not derived from records
// ---------------------------------------------------------------------------

/// Rates drawn once per generated dataset.
///
/// These model figures the mock data has no source for (conversion, growth).
/// Filtered views reuse the rates of the dataset they were cut from, so the
/// same query always yields the same numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticRates {
    pub conversion_rate: f64,
    pub growth_rate: f64,
    pub category_growth: BTreeMap<String, f64>,
}

impl SyntheticRates {
    /// Growth rate drawn for `category`, or 0 for an unknown category.
    pub fn category_growth(&self, category: &str) -> f64 {
        self.category_growth.get(category).copied().unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// YearDataset - Immutable records and precomputed aggregates for one year
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct YearDataset {
    pub year: i32,
    /// Sorted ascending by date; ties keep generation order.
    pub records: Vec<SalesRecord>,
    pub rates: SyntheticRates,
    pub aggregates: Aggregates,
}

impl YearDataset {
    /// The unfiltered view of this year.
    pub fn view(&self) -> SalesView {
        SalesView {
            data: self.records.clone(),
            aggregates: self.aggregates.clone(),
        }
    }
}
