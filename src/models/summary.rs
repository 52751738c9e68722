use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// YearSummary - One row of the all-years summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct YearSummary {
    pub year: i32,
    pub total_revenue: f64,
    pub total_units: u64,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct YearsSummary {
    pub summary: Vec<YearSummary>,
    pub years_available: Vec<i32>,
}

// ---------------------------------------------------------------------------
// CrossYearSummary - Combined metrics across all supplied years
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearGrowth {
    pub year: i32,
    pub growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionTotal {
    pub region: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CrossYearSummary {
    pub total_revenue_all_years: f64,
    pub total_units_all_years: u64,
    pub year_over_year_growth: Vec<YearGrowth>,
    pub top_categories: Vec<CategoryTotal>,
    pub top_regions: Vec<RegionTotal>,
}

// ---------------------------------------------------------------------------
// QuarterlyComparison / MonthlyTrend - Year-pivoted chart rows
// ---------------------------------------------------------------------------

/// Revenue per year for one calendar quarter.
///
/// Serializes flat, e.g. `{"quarter": "Q1", "2022": 1.0, "2023": 2.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyComparison {
    pub quarter: String,
    #[serde(flatten)]
    pub revenue_by_year: BTreeMap<String, f64>,
}

/// Revenue per year for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    #[serde(flatten)]
    pub revenue_by_year: BTreeMap<String, f64>,
}
