/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Async analytics service. Runs generation and aggregation on the
    /// blocking thread pool.
    pub analytics: sales_analytics::AsyncSalesAnalytics,
}
