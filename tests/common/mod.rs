//! Shared test fixtures for the sales analytics integration tests.
//!
//! Provides hand-built records with known totals plus a seeded, small
//! `SalesAnalytics` instance for property checks over generated data.

#![allow(dead_code)]

use chrono::NaiveDate;
use sales_analytics::{SalesAnalytics, SalesRecord, SyntheticRates};
use std::collections::BTreeMap;

pub const SEED: u64 = 42;
pub const RECORDS_PER_YEAR: usize = 300;

/// Build a record with the fields that matter for aggregation.
pub fn record(
    id: &str,
    date: &str,
    revenue: f64,
    units_sold: u32,
    category: &str,
    region: &str,
    profit_margin: f64,
) -> SalesRecord {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    let month = chrono::Datelike::month(&date);
    SalesRecord {
        id: id.to_string(),
        date,
        year: chrono::Datelike::year(&date),
        month,
        quarter: SalesRecord::quarter_of(month),
        revenue,
        units_sold,
        product_category: category.to_string(),
        region: region.to_string(),
        customer_segment: "SMB".to_string(),
        sales_rep: "Mike Chen".to_string(),
        profit_margin,
    }
}

/// Six records across two categories, three regions and three months.
///
/// Totals: revenue 1000.00, units 60.
pub fn sample_records() -> Vec<SalesRecord> {
    vec![
        record("2024-0000", "2024-01-05", 100.0, 10, "Electronics", "Europe", 0.2),
        record("2024-0001", "2024-01-20", 250.0, 5, "Clothing", "North America", 0.1),
        record("2024-0002", "2024-02-11", 50.0, 15, "Electronics", "Asia Pacific", 0.5),
        record("2024-0003", "2024-02-14", 300.0, 10, "Electronics", "Europe", 0.3),
        record("2024-0004", "2024-11-02", 200.0, 10, "Clothing", "Europe", 0.25),
        record("2024-0005", "2024-11-30", 100.0, 10, "Clothing", "North America", 0.4),
    ]
}

/// Fixed synthetic rates for the categories used by [`sample_records`].
pub fn sample_rates() -> SyntheticRates {
    SyntheticRates {
        conversion_rate: 3.5,
        growth_rate: 12.25,
        category_growth: BTreeMap::from([
            ("Electronics".to_string(), 10.0),
            ("Clothing".to_string(), -2.5),
        ]),
    }
}

/// A seeded, eagerly generated service with a small dataset per year.
pub fn seeded_analytics() -> SalesAnalytics {
    SalesAnalytics::builder()
        .records_per_year(RECORDS_PER_YEAR)
        .seed(SEED)
        .build()
        .unwrap()
}

pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
