//! Synthetic sales record generator.
//!
//! Produces a year's worth of randomized transactions whose revenue follows a
//! seasonal curve (Q4 peak, January/February dip) scaled by a per-year growth
//! multiplier. Randomness comes from the caller's RNG, so a seeded RNG gives a
//! reproducible dataset.

use chrono::NaiveDate;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::BTreeMap;

use crate::aggregator::{self, round2, round3};
use crate::config::{self, CUSTOMER_SEGMENTS, PRODUCT_CATEGORIES, REGIONS, SALES_REPS};
use crate::error::{AnalyticsError, Result};
use crate::models::{SalesRecord, SyntheticRates, YearDataset};

/// Generate `count` records for `year`, sorted ascending by date.
///
/// Identifiers are `"{year}-{index:04}"` in generation order; records sharing
/// a date keep that order after sorting.
pub fn generate<R: Rng + ?Sized>(year: i32, count: usize, rng: &mut R) -> Result<Vec<SalesRecord>> {
    let mut records = Vec::with_capacity(count);

    for i in 0..count {
        let month: u32 = rng.gen_range(1..=12);
        let day: u32 = rng.gen_range(1..=28);
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            AnalyticsError::InvalidArgument(format!("Cannot build date {year}-{month:02}-{day:02}"))
        })?;

        let base_revenue = rng.gen_range(5000.0..55000.0)
            * config::seasonal_multiplier(month)
            * config::year_multiplier(year);
        let units_sold: u32 = rng.gen_range(1..=100);
        let profit_margin: f64 = rng.gen_range(0.1..=0.5);

        records.push(SalesRecord {
            id: format!("{year}-{i:04}"),
            date,
            year,
            month,
            quarter: SalesRecord::quarter_of(month),
            revenue: round2(base_revenue),
            units_sold,
            product_category: pick(rng, &PRODUCT_CATEGORIES).to_string(),
            region: pick(rng, &REGIONS).to_string(),
            customer_segment: pick(rng, &CUSTOMER_SEGMENTS).to_string(),
            sales_rep: pick(rng, &SALES_REPS).to_string(),
            profit_margin: round3(profit_margin),
        });
    }

    // Stable: equal dates keep generation order.
    records.sort_by_key(|r| r.date);
    Ok(records)
}

/// Draw the synthetic conversion/growth rates for one dataset.
///
/// Conversion in [2, 7), overall growth in [5, 25), per-category growth in
/// [-5, 25), each rounded to 2 decimal places.
pub fn draw_rates<R: Rng + ?Sized>(rng: &mut R) -> SyntheticRates {
    let conversion_rate = round2(rng.gen_range(2.0..7.0));
    let growth_rate = round2(rng.gen_range(5.0..25.0));
    let category_growth: BTreeMap<String, f64> = PRODUCT_CATEGORIES
        .iter()
        .map(|c| (c.to_string(), round2(rng.gen_range(-5.0..25.0))))
        .collect();

    SyntheticRates {
        conversion_rate,
        growth_rate,
        category_growth,
    }
}

/// Generate records and rates for `year` and precompute its aggregates.
pub fn generate_dataset<R: Rng + ?Sized>(year: i32, count: usize, rng: &mut R) -> Result<YearDataset> {
    let records = generate(year, count, rng)?;
    let rates = draw_rates(rng);
    let aggregates = aggregator::aggregate(&records, &rates)?;

    tracing::info!(
        year,
        records = records.len(),
        total_revenue = aggregates.metrics.total_revenue,
        "generated sales dataset"
    );

    Ok(YearDataset {
        year,
        records,
        rates,
        aggregates,
    })
}

/// RNG for one year's dataset: derived from `seed` when given, otherwise
/// seeded from OS entropy.
pub fn rng_for_year(seed: Option<u64>, year: i32) -> StdRng {
    match seed {
        Some(seed) => {
            StdRng::seed_from_u64(seed ^ (year as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        }
        None => StdRng::from_entropy(),
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}
