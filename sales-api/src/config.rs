use std::env;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// `SALES_API_ADDR`
    pub addr: String,
    /// `SALES_RECORDS_PER_YEAR`
    pub records_per_year: Option<usize>,
    /// `SALES_SEED`
    pub seed: Option<u64>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset and blank values fall back
    /// to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            addr: get("SALES_API_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            records_per_year: parse_number("SALES_RECORDS_PER_YEAR", get("SALES_RECORDS_PER_YEAR"))?,
            seed: parse_number("SALES_SEED", get("SALES_SEED"))?,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| {
            v.trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidNumber { key, value: v })
        })
        .transpose()
}
