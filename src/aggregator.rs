//! Folds a record population into metrics and breakdowns.
//!
//! Every function here is pure. Sums accumulate at full precision and each
//! monetary figure is rounded once, when it is emitted. Results do not depend
//! on the order of the input records, except that equal-revenue entries keep
//! the order in which their key was first seen.

use std::collections::{BTreeMap, HashMap};

use crate::config;
use crate::error::{AnalyticsError, Result};
use crate::models::{
    Aggregates, CategorySales, Metrics, MonthlySales, RegionalSales, SalesRecord, SyntheticRates,
};

/// Compute all four aggregate views of `records`.
///
/// Returns [`AnalyticsError::EmptyPopulation`] for an empty slice, since the
/// average order value and market shares are undefined there.
pub fn aggregate(records: &[SalesRecord], rates: &SyntheticRates) -> Result<Aggregates> {
    Ok(Aggregates {
        metrics: calculate_metrics(records, rates)?,
        monthly_breakdown: monthly_breakdown(records),
        category_breakdown: category_breakdown(records, rates),
        regional_breakdown: regional_breakdown(records)?,
    })
}

/// Totals, average order value and the dataset's synthetic rates.
pub fn calculate_metrics(records: &[SalesRecord], rates: &SyntheticRates) -> Result<Metrics> {
    if records.is_empty() {
        return Err(AnalyticsError::EmptyPopulation);
    }
    let total_revenue: f64 = records.iter().map(|r| r.revenue).sum();
    let total_units: u64 = records.iter().map(|r| u64::from(r.units_sold)).sum();

    Ok(Metrics {
        total_revenue: round2(total_revenue),
        total_units,
        average_order_value: round2(total_revenue / records.len() as f64),
        conversion_rate: rates.conversion_rate,
        growth_rate: rates.growth_rate,
    })
}

/// Metrics for an empty population: zero totals, the dataset's rates.
pub fn empty_metrics(rates: &SyntheticRates) -> Metrics {
    Metrics {
        total_revenue: 0.0,
        total_units: 0,
        average_order_value: 0.0,
        conversion_rate: rates.conversion_rate,
        growth_rate: rates.growth_rate,
    }
}

#[derive(Default)]
struct MonthTotals {
    revenue: f64,
    units: u64,
    profit: f64,
}

/// One entry per `(year, month)` present, in chronological order.
pub fn monthly_breakdown(records: &[SalesRecord]) -> Vec<MonthlySales> {
    let mut months: BTreeMap<(i32, u32), MonthTotals> = BTreeMap::new();
    for record in records {
        let totals = months.entry((record.year, record.month)).or_default();
        totals.revenue += record.revenue;
        totals.units += u64::from(record.units_sold);
        totals.profit += record.profit();
    }

    months
        .into_iter()
        .filter_map(|((year, month), totals)| {
            config::month_name(month).map(|name| MonthlySales {
                month: name.to_string(),
                year,
                revenue: round2(totals.revenue),
                units_sold: totals.units,
                profit: round2(totals.profit),
            })
        })
        .collect()
}

#[derive(Default)]
struct CategoryTotals {
    revenue: f64,
    units: u64,
}

/// One entry per distinct category, by revenue descending.
pub fn category_breakdown(records: &[SalesRecord], rates: &SyntheticRates) -> Vec<CategorySales> {
    let mut categories: OrderedTotals<CategoryTotals> = OrderedTotals::new();
    for record in records {
        let totals = categories.entry(&record.product_category);
        totals.revenue += record.revenue;
        totals.units += u64::from(record.units_sold);
    }

    let mut breakdown: Vec<CategorySales> = categories
        .into_entries()
        .into_iter()
        .map(|(category, totals)| CategorySales {
            growth_rate: rates.category_growth(&category),
            category,
            revenue: round2(totals.revenue),
            units_sold: totals.units,
        })
        .collect();
    breakdown.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    breakdown
}

/// One entry per distinct region with its share of total revenue, by
/// revenue descending.
pub fn regional_breakdown(records: &[SalesRecord]) -> Result<Vec<RegionalSales>> {
    if records.is_empty() {
        return Err(AnalyticsError::EmptyPopulation);
    }
    let mut regions: OrderedTotals<f64> = OrderedTotals::new();
    for record in records {
        *regions.entry(&record.region) += record.revenue;
    }
    let entries = regions.into_entries();
    let total: f64 = entries.iter().map(|(_, revenue)| revenue).sum();

    let mut breakdown: Vec<RegionalSales> = entries
        .into_iter()
        .map(|(region, revenue)| RegionalSales {
            region,
            revenue: round2(revenue),
            market_share: if total > 0.0 {
                round2(revenue / total * 100.0)
            } else {
                0.0
            },
        })
        .collect();
    breakdown.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    Ok(breakdown)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Round to 2 decimal places, halves toward positive infinity.
pub fn round2(value: f64) -> f64 {
    round_to(value, 100.0)
}

/// Round to 3 decimal places, halves toward positive infinity.
pub fn round3(value: f64) -> f64 {
    round_to(value, 1000.0)
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale + 0.5).floor() / scale
}

/// Running totals keyed by string, remembering first-seen key order.
pub(crate) struct OrderedTotals<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V: Default> OrderedTotals<V> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn entry(&mut self, key: &str) -> &mut V {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.entries.push((key.to_string(), V::default()));
                self.index.insert(key.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub(crate) fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}
