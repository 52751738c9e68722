#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty population: no records to aggregate")]
    EmptyPopulation,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
