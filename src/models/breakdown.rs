use serde::{Deserialize, Serialize};

use super::record::SalesRecord;

// ---------------------------------------------------------------------------
// Metrics - Headline figures for a record population
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Metrics {
    pub total_revenue: f64,
    pub total_units: u64,
    pub average_order_value: f64,
    /// Synthetic, drawn once per dataset. Not derived from records.
    pub conversion_rate: f64,
    /// Synthetic, drawn once per dataset. Not derived from records.
    pub growth_rate: f64,
}

// ---------------------------------------------------------------------------
// MonthlySales - One (year, month) bucket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MonthlySales {
    pub month: String,
    pub year: i32,
    pub revenue: f64,
    pub units_sold: u64,
    pub profit: f64,
}

// ---------------------------------------------------------------------------
// CategorySales - One product category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CategorySales {
    pub category: String,
    pub revenue: f64,
    pub units_sold: u64,
    /// Synthetic, in [-5, 25).
    pub growth_rate: f64,
}

// ---------------------------------------------------------------------------
// RegionalSales - One region and its market share
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RegionalSales {
    pub region: String,
    pub revenue: f64,
    pub market_share: f64,
}

// ---------------------------------------------------------------------------
// Aggregates - The four derived views of one record population
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub metrics: Metrics,
    pub monthly_breakdown: Vec<MonthlySales>,
    pub category_breakdown: Vec<CategorySales>,
    pub regional_breakdown: Vec<RegionalSales>,
}

// ---------------------------------------------------------------------------
// SalesView - Records plus aggregates, as served for a single year
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesView {
    pub data: Vec<SalesRecord>,
    #[serde(flatten)]
    pub aggregates: Aggregates,
}
