use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json, Response};
use sales_analytics::config;
use sales_analytics::SalesFilter;

use crate::error::AppError;
use crate::state::AppState;

/// Raw query parameters. Parsed by hand so malformed numbers produce our own
/// error messages rather than the extractor's.
#[derive(Debug, Default)]
pub struct SalesParams {
    pub year: Option<String>,
    pub category: Option<String>,
    pub region: Option<String>,
    pub threshold: Option<String>,
}

impl SalesParams {
    /// Collect known keys from decoded query pairs. The first occurrence of a
    /// repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "year" => &mut params.year,
                "category" => &mut params.category,
                "region" => &mut params.region,
                "threshold" => &mut params.threshold,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    fn year(&self) -> Result<Option<i32>, AppError> {
        match non_empty(&self.year) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<i32>()
                .map(Some)
                .map_err(|_| AppError::bad_request(config::year_range_message())),
        }
    }

    fn filter(&self) -> Result<SalesFilter, AppError> {
        let revenue_threshold = match non_empty(&self.threshold) {
            None => None,
            Some(raw) => Some(
                raw.parse::<f64>()
                    .ok()
                    .filter(|t| t.is_finite())
                    .ok_or_else(|| AppError::bad_request("Threshold must be a number"))?,
            ),
        };
        Ok(SalesFilter {
            category: non_empty(&self.category).map(str::to_string),
            region: non_empty(&self.region).map(str::to_string),
            revenue_threshold,
        })
    }
}

/// GET /sales?year=2024&category=elec&region=europe&threshold=500000
///
/// With `year`: the records and aggregates for that year, filtered if asked.
/// Without: a per-year summary plus the available years. Parameters are
/// validated either way.
pub async fn get_sales(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let params = SalesParams::from_pairs(pairs);
    let year = params.year()?;
    let filter = params.filter()?;

    let Some(year) = year else {
        let summary = state.analytics.years_summary().await?;
        return Ok(Json(summary).into_response());
    };

    let view = state
        .analytics
        .run(move |a| a.get_year(year, Some(&filter)))
        .await?;
    Ok(Json(view).into_response())
}

/// GET /sales/metrics
///
/// Totals, year-over-year growth and top categories/regions across all years.
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let combined = state.analytics.combined_metrics().await?;
    Ok(Json(combined).into_response())
}

/// GET /sales/quarterly
///
/// Quarterly revenue per year.
pub async fn get_quarterly(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let quarters = state.analytics.run(|a| a.quarterly_comparison()).await?;
    Ok(Json(quarters).into_response())
}

/// GET /sales/trend
///
/// Monthly revenue per year, pivoted by month.
pub async fn get_trend(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let trend = state.analytics.run(|a| a.revenue_trend()).await?;
    Ok(Json(trend).into_response())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
