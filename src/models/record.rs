use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SalesRecord - One transaction
// ---------------------------------------------------------------------------

/// A single sales transaction.
///
/// `revenue` is stored rounded to 2 decimal places and `profit_margin` to 3,
/// so every downstream sum starts from the same values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SalesRecord {
    pub id: String,
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub quarter: u32,
    pub revenue: f64,
    pub units_sold: u32,
    pub product_category: String,
    pub region: String,
    pub customer_segment: String,
    pub sales_rep: String,
    pub profit_margin: f64,
}

impl SalesRecord {
    /// Calendar quarter (1-4) of a 1-based month.
    pub fn quarter_of(month: u32) -> u32 {
        month.div_ceil(3)
    }

    /// Profit contributed by this record (`revenue * profit_margin`).
    pub fn profit(&self) -> f64 {
        self.revenue * self.profit_margin
    }
}

// ---------------------------------------------------------------------------
// SalesFilter - Record-level and breakdown-level filters
// ---------------------------------------------------------------------------

/// Filters accepted by [`SalesAnalytics::get_year`](crate::SalesAnalytics::get_year).
///
/// `category` and `region` narrow the record population with a
/// case-insensitive substring match. `revenue_threshold` narrows the
/// category breakdown after aggregation and never touches records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesFilter {
    pub category: Option<String>,
    pub region: Option<String>,
    pub revenue_threshold: Option<f64>,
}

impl SalesFilter {
    /// Filter on category substring only.
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    /// Filter on region substring only.
    pub fn region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Default::default()
        }
    }

    /// True when a category or region predicate is present.
    pub fn narrows_records(&self) -> bool {
        self.category.is_some() || self.region.is_some()
    }

    /// True when no filter of any kind is set.
    pub fn is_empty(&self) -> bool {
        !self.narrows_records() && self.revenue_threshold.is_none()
    }
}
