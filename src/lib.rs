//! Sales analytics engine.
//!
//! Generates a synthetic sales dataset per supported year, folds it into
//! summary metrics and breakdowns (monthly, category, regional), re-aggregates
//! under category/region filters, and combines years into cross-year views.
//!
//! # Quick start
//!
//! ```no_run
//! use sales_analytics::{SalesAnalytics, SalesFilter};
//!
//! let analytics = SalesAnalytics::builder().seed(42).build().unwrap();
//!
//! // One year, narrowed to electronics
//! let view = analytics
//!     .get_year(2024, Some(&SalesFilter::category("elec")))
//!     .unwrap();
//!
//! // Totals and growth across all years
//! let combined = analytics.get_combined_metrics().unwrap();
//! ```

pub mod aggregator;
#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod combiner;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod models;

#[cfg(feature = "async")]
pub use async_client::AsyncSalesAnalytics;
pub use cache::DatasetCache;
pub use error::{AnalyticsError, Result};
pub use models::*;

use std::fmt;

use crate::config::{DEFAULT_RECORDS_PER_YEAR, SUPPORTED_YEARS};

// ---------------------------------------------------------------------------
// SalesAnalyticsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SalesAnalytics`] instance.
///
/// Use [`SalesAnalytics::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SalesAnalyticsBuilder::build).
#[derive(Debug, Clone)]
pub struct SalesAnalyticsBuilder {
    records_per_year: usize,
    seed: Option<u64>,
    eager: bool,
}

impl Default for SalesAnalyticsBuilder {
    fn default() -> Self {
        Self {
            records_per_year: DEFAULT_RECORDS_PER_YEAR,
            seed: None,
            eager: true,
        }
    }
}

impl SalesAnalyticsBuilder {
    /// Number of records generated for each year. Defaults to 1200.
    pub fn records_per_year(mut self, count: usize) -> Self {
        self.records_per_year = count;
        self
    }

    /// Pin the random seed so the generated datasets are reproducible.
    ///
    /// Without a seed every build produces different data.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate all years during [`build()`](Self::build) (the default), or
    /// defer each year until it is first queried.
    pub fn eager(mut self, eager: bool) -> Self {
        self.eager = eager;
        self
    }

    /// Build the service, generating datasets now if eager.
    pub fn build(self) -> Result<SalesAnalytics> {
        if self.records_per_year == 0 {
            return Err(AnalyticsError::InvalidArgument(
                "records_per_year must be at least 1".into(),
            ));
        }
        let cache = DatasetCache::new(self.records_per_year, self.seed);
        if self.eager {
            cache.warm()?;
        }
        Ok(SalesAnalytics { cache })
    }
}

// ---------------------------------------------------------------------------
// SalesAnalytics
// ---------------------------------------------------------------------------

/// Query service over the generated year datasets.
///
/// Read-only after construction and safe to share across threads.
#[derive(Debug)]
pub struct SalesAnalytics {
    cache: DatasetCache,
}

impl SalesAnalytics {
    /// Create a new builder for configuring the service.
    pub fn builder() -> SalesAnalyticsBuilder {
        SalesAnalyticsBuilder::default()
    }

    /// The supported years, ascending.
    pub fn years(&self) -> &'static [i32] {
        &SUPPORTED_YEARS
    }

    /// The immutable dataset for `year`.
    pub fn dataset(&self, year: i32) -> Result<&YearDataset> {
        self.cache.get(year)
    }

    /// Records and aggregates for `year`.
    ///
    /// With no filter (or an empty one) the precomputed aggregates are
    /// returned as-is. Category/region filters recompute every figure from the
    /// matching records; a revenue threshold then trims the category
    /// breakdown. An empty match is not an error: it yields an empty view
    /// with zeroed metrics.
    ///
    /// Fails with [`AnalyticsError::InvalidArgument`] for an unsupported year.
    pub fn get_year(&self, year: i32, filters: Option<&SalesFilter>) -> Result<SalesView> {
        let dataset = self.cache.get(year)?;
        match filters {
            Some(f) if !f.is_empty() => filter::filtered_view(dataset, f),
            _ => Ok(dataset.view()),
        }
    }

    /// Per-year totals and synthetic growth rate, with the available years.
    pub fn get_all_years_summary(&self) -> Result<YearsSummary> {
        let summary = self
            .cache
            .all()?
            .into_iter()
            .map(|d| YearSummary {
                year: d.year,
                total_revenue: d.aggregates.metrics.total_revenue,
                total_units: d.aggregates.metrics.total_units,
                growth_rate: d.aggregates.metrics.growth_rate,
            })
            .collect();

        Ok(YearsSummary {
            summary,
            years_available: SUPPORTED_YEARS.to_vec(),
        })
    }

    /// Totals, year-over-year growth and top categories/regions across all
    /// supported years.
    pub fn get_combined_metrics(&self) -> Result<CrossYearSummary> {
        let datasets = self.cache.all()?;
        Ok(combiner::combine(&year_pairs(&datasets)))
    }

    /// Quarterly revenue of every supported year, Q1 through Q4.
    pub fn quarterly_comparison(&self) -> Result<Vec<QuarterlyComparison>> {
        let datasets = self.cache.all()?;
        Ok(combiner::quarterly_comparison(&year_pairs(&datasets)))
    }

    /// Monthly revenue of every supported year, pivoted by month.
    pub fn revenue_trend(&self) -> Result<Vec<MonthlyTrend>> {
        let datasets = self.cache.all()?;
        Ok(combiner::revenue_trend(&year_pairs(&datasets)))
    }

    /// Return a reference to the underlying [`DatasetCache`].
    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }
}

fn year_pairs<'a>(datasets: &[&'a YearDataset]) -> Vec<(i32, &'a Aggregates)> {
    datasets.iter().map(|d| (d.year, &d.aggregates)).collect()
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for SalesAnalytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loaded: Vec<String> = SUPPORTED_YEARS
            .iter()
            .filter(|&&y| self.cache.is_initialized(y))
            .map(|y| y.to_string())
            .collect();
        write!(
            f,
            "SalesAnalytics(records_per_year={}, loaded=[{}])",
            self.cache.records_per_year(),
            loaded.join(", ")
        )
    }
}
