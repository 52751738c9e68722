//! Filter engine tests: record predicates, thresholds and empty populations.

mod common;

use sales_analytics::aggregator::aggregate;
use sales_analytics::filter::{apply_threshold, filter_records, filtered_view, matches};
use sales_analytics::{SalesFilter, YearDataset};

fn sample_dataset() -> YearDataset {
    let records = common::sample_records();
    let rates = common::sample_rates();
    let aggregates = aggregate(&records, &rates).unwrap();
    YearDataset {
        year: 2024,
        records,
        rates,
        aggregates,
    }
}

fn ids(records: &[sales_analytics::SalesRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

// ---------------------------------------------------------------------------
// record predicates
// ---------------------------------------------------------------------------

#[test]
fn category_filter_is_case_insensitive_substring() {
    let records = common::sample_records();
    let filtered = filter_records(&records, &SalesFilter::category("ELEC"));
    assert_eq!(ids(&filtered), vec!["2024-0000", "2024-0002", "2024-0003"]);
}

#[test]
fn region_filter_is_case_insensitive_substring() {
    let records = common::sample_records();
    let filtered = filter_records(&records, &SalesFilter::region("america"));
    assert_eq!(ids(&filtered), vec!["2024-0001", "2024-0005"]);
}

#[test]
fn filters_combine_with_and() {
    let records = common::sample_records();
    let filter = SalesFilter {
        category: Some("cloth".into()),
        region: Some("eur".into()),
        revenue_threshold: None,
    };
    let filtered = filter_records(&records, &filter);
    assert_eq!(ids(&filtered), vec!["2024-0004"]);
}

#[test]
fn empty_filter_matches_everything() {
    let records = common::sample_records();
    assert!(records.iter().all(|r| matches(r, &SalesFilter::default())));
}

#[test]
fn threshold_does_not_narrow_records() {
    let records = common::sample_records();
    let filter = SalesFilter {
        revenue_threshold: Some(1_000_000.0),
        ..Default::default()
    };
    assert_eq!(filter_records(&records, &filter).len(), records.len());
}

#[test]
fn filtering_is_idempotent() {
    let analytics = common::seeded_analytics();
    let records = &analytics.dataset(2023).unwrap().records;
    for filter in [
        SalesFilter::category("home"),
        SalesFilter::region("EUROPE"),
        SalesFilter {
            category: Some("s".into()),
            region: Some("a".into()),
            revenue_threshold: None,
        },
    ] {
        let once = filter_records(records, &filter);
        let twice = filter_records(&once, &filter);
        assert_eq!(once, twice);
    }
}

#[test]
fn filtering_never_increases_revenue() {
    let analytics = common::seeded_analytics();
    let dataset = analytics.dataset(2022).unwrap();
    let full = dataset.aggregates.metrics.total_revenue;
    for filter in [
        SalesFilter::category("games"),
        SalesFilter::region("latin"),
        SalesFilter::category("e"),
        SalesFilter {
            revenue_threshold: Some(100_000.0),
            ..Default::default()
        },
    ] {
        let view = filtered_view(dataset, &filter).unwrap();
        assert!(view.aggregates.metrics.total_revenue <= full);
    }
}

// ---------------------------------------------------------------------------
// filtered views
// ---------------------------------------------------------------------------

#[test]
fn filtered_view_recomputes_from_matching_records() {
    let dataset = sample_dataset();
    let view = filtered_view(&dataset, &SalesFilter::category("elec")).unwrap();

    assert_eq!(view.data.len(), 3);
    assert_eq!(view.aggregates.metrics.total_revenue, 450.0);
    assert_eq!(view.aggregates.metrics.total_units, 35);
    assert_eq!(view.aggregates.metrics.average_order_value, 150.0);

    let regions: Vec<(&str, f64)> = view
        .aggregates
        .regional_breakdown
        .iter()
        .map(|r| (r.region.as_str(), r.market_share))
        .collect();
    assert_eq!(regions, vec![("Europe", 88.89), ("Asia Pacific", 11.11)]);
}

#[test]
fn filtered_view_keeps_dataset_rates() {
    let dataset = sample_dataset();
    let view = filtered_view(&dataset, &SalesFilter::region("north")).unwrap();
    assert_eq!(view.aggregates.metrics.conversion_rate, 3.5);
    assert_eq!(view.aggregates.metrics.growth_rate, 12.25);
    assert_eq!(view.aggregates.category_breakdown[0].growth_rate, -2.5);
}

#[test]
fn unfiltered_view_reuses_precomputed_aggregates() {
    let dataset = sample_dataset();
    let view = filtered_view(&dataset, &SalesFilter::default()).unwrap();
    assert_eq!(view.aggregates, dataset.aggregates);
    assert_eq!(view.data, dataset.records);
}

// ---------------------------------------------------------------------------
// revenue threshold
// ---------------------------------------------------------------------------

#[test]
fn threshold_trims_category_breakdown_only() {
    let dataset = sample_dataset();
    let filter = SalesFilter {
        revenue_threshold: Some(500.0),
        ..Default::default()
    };
    let view = filtered_view(&dataset, &filter).unwrap();

    let categories: Vec<&str> = view
        .aggregates
        .category_breakdown
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(categories, vec!["Clothing"]);
    assert_eq!(view.aggregates.metrics, dataset.aggregates.metrics);
    assert_eq!(view.aggregates.monthly_breakdown, dataset.aggregates.monthly_breakdown);
    assert_eq!(view.data.len(), 6);
}

#[test]
fn threshold_keeps_entries_at_the_boundary() {
    let mut aggregates = sample_dataset().aggregates;
    apply_threshold(&mut aggregates, 550.0);
    assert_eq!(aggregates.category_breakdown.len(), 1);
    assert_eq!(aggregates.category_breakdown[0].revenue, 550.0);
}

#[test]
fn threshold_applies_after_record_filter() {
    let dataset = sample_dataset();
    let filter = SalesFilter {
        category: Some("elec".into()),
        region: None,
        revenue_threshold: Some(500.0),
    };
    let view = filtered_view(&dataset, &filter).unwrap();
    assert!(view.aggregates.category_breakdown.is_empty());
    assert_eq!(view.aggregates.metrics.total_revenue, 450.0);
}

// ---------------------------------------------------------------------------
// empty population
// ---------------------------------------------------------------------------

#[test]
fn no_matches_yield_zeroed_view() {
    let dataset = sample_dataset();
    let view = filtered_view(&dataset, &SalesFilter::category("Nonexistent")).unwrap();

    assert!(view.data.is_empty());
    assert!(view.aggregates.monthly_breakdown.is_empty());
    assert!(view.aggregates.category_breakdown.is_empty());
    assert!(view.aggregates.regional_breakdown.is_empty());
    assert_eq!(view.aggregates.metrics.total_revenue, 0.0);
    assert_eq!(view.aggregates.metrics.total_units, 0);
    assert_eq!(view.aggregates.metrics.average_order_value, 0.0);
}

#[test]
fn empty_view_serializes_numeric_average() {
    let dataset = sample_dataset();
    let view = filtered_view(&dataset, &SalesFilter::category("Nonexistent")).unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["data"], serde_json::json!([]));
    assert_eq!(json["metrics"]["average_order_value"], serde_json::json!(0.0));
}
