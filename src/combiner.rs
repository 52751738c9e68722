//! Multi-year views built from per-year aggregates.
//!
//! All functions take an explicit list of `(year, aggregates)` pairs and
//! process it in ascending year order. Growth compares each year with the one
//! before it in that list, so gaps between years are allowed.

use std::collections::BTreeMap;

use crate::aggregator::{round2, OrderedTotals};
use crate::config::{self, TOP_CATEGORY_LIMIT};
use crate::models::{
    Aggregates, CategoryTotal, CrossYearSummary, MonthlyTrend, QuarterlyComparison, RegionTotal,
    SalesRecord, YearGrowth,
};

/// Combine per-year aggregates into totals, year-over-year growth, the top
/// five categories and every region ranked by revenue.
pub fn combine(years: &[(i32, &Aggregates)]) -> CrossYearSummary {
    let mut total_revenue = 0.0;
    let mut total_units = 0u64;
    let mut year_over_year = Vec::new();
    let mut previous_revenue: Option<f64> = None;
    let mut categories: OrderedTotals<f64> = OrderedTotals::new();
    let mut regions: OrderedTotals<f64> = OrderedTotals::new();

    for (year, aggregates) in in_year_order(years) {
        let revenue = aggregates.metrics.total_revenue;
        total_revenue += revenue;
        total_units += aggregates.metrics.total_units;

        if let Some(growth) = previous_revenue.and_then(|prev| year_over_year_growth(prev, revenue)) {
            year_over_year.push(YearGrowth { year, growth });
        }
        previous_revenue = Some(revenue);

        for entry in &aggregates.category_breakdown {
            *categories.entry(&entry.category) += entry.revenue;
        }
        for entry in &aggregates.regional_breakdown {
            *regions.entry(&entry.region) += entry.revenue;
        }
    }

    let mut top_categories: Vec<CategoryTotal> = categories
        .into_entries()
        .into_iter()
        .map(|(category, revenue)| CategoryTotal {
            category,
            revenue: round2(revenue),
        })
        .collect();
    top_categories.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    top_categories.truncate(TOP_CATEGORY_LIMIT);

    // Regions are not capped.
    let mut top_regions: Vec<RegionTotal> = regions
        .into_entries()
        .into_iter()
        .map(|(region, revenue)| RegionTotal {
            region,
            revenue: round2(revenue),
        })
        .collect();
    top_regions.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));

    CrossYearSummary {
        total_revenue_all_years: round2(total_revenue),
        total_units_all_years: total_units,
        year_over_year_growth: year_over_year,
        top_categories,
        top_regions,
    }
}

/// Percentage change from `previous` to `current`, rounded to 2 decimal
/// places. `None` when `previous` is not positive.
pub fn year_over_year_growth(previous: f64, current: f64) -> Option<f64> {
    if previous <= 0.0 {
        return None;
    }
    Some(round2((current - previous) / previous * 100.0))
}

/// Revenue per calendar quarter for each year, summed from the monthly
/// breakdowns. Always returns Q1 through Q4.
pub fn quarterly_comparison(years: &[(i32, &Aggregates)]) -> Vec<QuarterlyComparison> {
    let ordered = in_year_order(years);
    let mut quarters: [BTreeMap<String, f64>; 4] = Default::default();

    for (year, aggregates) in &ordered {
        for totals in quarters.iter_mut() {
            totals.insert(year.to_string(), 0.0);
        }
        for entry in &aggregates.monthly_breakdown {
            let Some(month) = config::month_number(&entry.month) else {
                continue;
            };
            let quarter = SalesRecord::quarter_of(month) as usize - 1;
            *quarters[quarter].entry(year.to_string()).or_insert(0.0) += entry.revenue;
        }
    }

    quarters
        .into_iter()
        .enumerate()
        .map(|(i, totals)| QuarterlyComparison {
            quarter: format!("Q{}", i + 1),
            revenue_by_year: totals.into_iter().map(|(y, r)| (y, round2(r))).collect(),
        })
        .collect()
}

/// Monthly revenue pivoted by year. Months appear in calendar order when at
/// least one year has revenue for them; a year lacking that month reports 0.
pub fn revenue_trend(years: &[(i32, &Aggregates)]) -> Vec<MonthlyTrend> {
    let ordered = in_year_order(years);
    let mut months: BTreeMap<u32, BTreeMap<String, f64>> = BTreeMap::new();

    for (year, aggregates) in &ordered {
        for entry in &aggregates.monthly_breakdown {
            let Some(month) = config::month_number(&entry.month) else {
                continue;
            };
            *months
                .entry(month)
                .or_default()
                .entry(year.to_string())
                .or_insert(0.0) += entry.revenue;
        }
    }

    months
        .into_iter()
        .filter_map(|(month, mut by_year)| {
            for (year, _) in &ordered {
                by_year.entry(year.to_string()).or_insert(0.0);
            }
            config::month_name(month).map(|name| MonthlyTrend {
                month: name.to_string(),
                revenue_by_year: by_year.into_iter().map(|(y, r)| (y, round2(r))).collect(),
            })
        })
        .collect()
}

fn in_year_order<'a>(years: &[(i32, &'a Aggregates)]) -> Vec<(i32, &'a Aggregates)> {
    let mut ordered = years.to_vec();
    ordered.sort_by_key(|(year, _)| *year);
    ordered
}
