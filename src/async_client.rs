//! Async wrapper around [`SalesAnalytics`] for use in async runtimes (Tokio, etc.).
//!
//! Dataset generation and queries run on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! wrapped service is immutable, so it is shared behind an [`Arc`] without a
//! lock.
//!
//! # Example
//!
//! ```no_run
//! use sales_analytics::AsyncSalesAnalytics;
//!
//! #[tokio::main]
//! async fn main() {
//!     let analytics = AsyncSalesAnalytics::builder().build().await.unwrap();
//!
//!     // Run any sync method via closure
//!     let view = analytics.run(|a| a.get_year(2024, None)).await.unwrap();
//!
//!     let combined = analytics.combined_metrics().await.unwrap();
//! }
//! ```

use std::sync::Arc;

use crate::error::{AnalyticsError, Result};
use crate::models::{CrossYearSummary, YearsSummary};
use crate::{SalesAnalytics, SalesAnalyticsBuilder};

// ---------------------------------------------------------------------------
// AsyncSalesAnalyticsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncSalesAnalytics`] instance.
#[derive(Debug, Clone, Default)]
pub struct AsyncSalesAnalyticsBuilder {
    inner: SalesAnalyticsBuilder,
}

impl AsyncSalesAnalyticsBuilder {
    /// Number of records generated for each year.
    pub fn records_per_year(mut self, count: usize) -> Self {
        self.inner = self.inner.records_per_year(count);
        self
    }

    /// Pin the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.inner = self.inner.seed(seed);
        self
    }

    /// Generate all years during build, or lazily on first query.
    pub fn eager(mut self, eager: bool) -> Self {
        self.inner = self.inner.eager(eager);
        self
    }

    /// Build the service on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncSalesAnalytics> {
        let builder = self.inner;
        let analytics = tokio::task::spawn_blocking(move || builder.build())
            .await
            .map_err(|e| AnalyticsError::Internal(format!("Task join error: {e}")))??;
        Ok(AsyncSalesAnalytics {
            inner: Arc::new(analytics),
        })
    }
}

// ---------------------------------------------------------------------------
// AsyncSalesAnalytics
// ---------------------------------------------------------------------------

/// Async wrapper around [`SalesAnalytics`].
///
/// Cloning is cheap and every clone shares the same datasets.
#[derive(Clone)]
pub struct AsyncSalesAnalytics {
    inner: Arc<SalesAnalytics>,
}

impl AsyncSalesAnalytics {
    /// Create a new builder for configuring the async service.
    pub fn builder() -> AsyncSalesAnalyticsBuilder {
        AsyncSalesAnalyticsBuilder::default()
    }

    /// Wrap an already built service.
    pub fn from_sync(analytics: SalesAnalytics) -> Self {
        Self {
            inner: Arc::new(analytics),
        }
    }

    /// Run a sync operation on the blocking thread pool.
    ///
    /// The closure receives a `&SalesAnalytics` and returns a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SalesAnalytics) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let analytics = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&analytics))
            .await
            .map_err(|e| AnalyticsError::Internal(format!("Task join error: {e}")))?
    }

    /// Per-year totals asynchronously.
    pub async fn years_summary(&self) -> Result<YearsSummary> {
        self.run(|a| a.get_all_years_summary()).await
    }

    /// Cross-year metrics asynchronously.
    pub async fn combined_metrics(&self) -> Result<CrossYearSummary> {
        self.run(|a| a.get_combined_metrics()).await
    }

    /// Borrow the wrapped sync service.
    pub fn inner(&self) -> &SalesAnalytics {
        &self.inner
    }
}
