pub const SUPPORTED_YEARS: [i32; 3] = [2022, 2023, 2024];
pub const DEFAULT_RECORDS_PER_YEAR: usize = 1200;
pub const TOP_CATEGORY_LIMIT: usize = 5;

pub const PRODUCT_CATEGORIES: [&str; 8] = [
    "Electronics",
    "Clothing",
    "Home & Garden",
    "Sports & Outdoors",
    "Books & Media",
    "Health & Beauty",
    "Automotive",
    "Toys & Games",
];

pub const REGIONS: [&str; 5] = [
    "North America",
    "Europe",
    "Asia Pacific",
    "Latin America",
    "Middle East & Africa",
];

pub const CUSTOMER_SEGMENTS: [&str; 4] = ["Enterprise", "SMB", "Consumer", "Government"];

pub const SALES_REPS: [&str; 8] = [
    "John Smith",
    "Sarah Johnson",
    "Mike Chen",
    "Emily Davis",
    "Robert Wilson",
    "Lisa Anderson",
    "David Brown",
    "Jennifer Lee",
];

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Whether `year` is one of the [`SUPPORTED_YEARS`].
pub fn is_supported_year(year: i32) -> bool {
    SUPPORTED_YEARS.contains(&year)
}

/// Message returned to callers asking for a year outside the supported range.
pub fn year_range_message() -> String {
    format!(
        "Year must be between {} and {}",
        SUPPORTED_YEARS[0],
        SUPPORTED_YEARS[SUPPORTED_YEARS.len() - 1]
    )
}

/// Revenue multiplier applied per calendar month. Q4 peaks, Jan/Feb dip.
pub fn seasonal_multiplier(month: u32) -> f64 {
    match month {
        10..=12 => 1.4,
        1 | 2 => 0.8,
        _ => 1.0,
    }
}

/// Revenue multiplier baked into generation to model year-over-year growth.
pub fn year_multiplier(year: i32) -> f64 {
    match year {
        2024 => 1.15,
        2023 => 1.08,
        _ => 1.0,
    }
}

/// Three-letter month name for a 1-based month, if in range.
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
}

/// 1-based month for a three-letter month name.
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .map(|i| i as u32 + 1)
}
