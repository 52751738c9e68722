//! Process-wide store of generated year datasets.
//!
//! Each supported year owns one slot that is filled at most once, either
//! eagerly by [`DatasetCache::warm`] or on first access. A filled slot is
//! never replaced; regenerating requires building a new cache.

use once_cell::sync::OnceCell;
use std::collections::BTreeMap;

use crate::config::{self, SUPPORTED_YEARS};
use crate::error::{AnalyticsError, Result};
use crate::generator;
use crate::models::YearDataset;

/// Lazily generated, immutable datasets for the supported years.
#[derive(Debug)]
pub struct DatasetCache {
    records_per_year: usize,
    seed: Option<u64>,
    slots: BTreeMap<i32, OnceCell<YearDataset>>,
}

impl DatasetCache {
    /// Create an empty cache. Nothing is generated until a year is requested.
    pub fn new(records_per_year: usize, seed: Option<u64>) -> Self {
        Self {
            records_per_year,
            seed,
            slots: SUPPORTED_YEARS
                .iter()
                .map(|&year| (year, OnceCell::new()))
                .collect(),
        }
    }

    /// Dataset for `year`, generating it on first access.
    ///
    /// Concurrent first accesses block on one another and generate once.
    pub fn get(&self, year: i32) -> Result<&YearDataset> {
        let slot = self
            .slots
            .get(&year)
            .ok_or_else(|| AnalyticsError::InvalidArgument(config::year_range_message()))?;

        slot.get_or_try_init(|| {
            tracing::debug!(year, "initializing year dataset");
            let mut rng = generator::rng_for_year(self.seed, year);
            generator::generate_dataset(year, self.records_per_year, &mut rng)
        })
    }

    /// Generate every supported year that is not yet initialized.
    pub fn warm(&self) -> Result<()> {
        for &year in &SUPPORTED_YEARS {
            self.get(year)?;
        }
        Ok(())
    }

    /// Whether the dataset for `year` has already been generated.
    pub fn is_initialized(&self, year: i32) -> bool {
        self.slots
            .get(&year)
            .map(|slot| slot.get().is_some())
            .unwrap_or(false)
    }

    /// All supported years with their datasets, ascending.
    pub fn all(&self) -> Result<Vec<&YearDataset>> {
        SUPPORTED_YEARS.iter().map(|&year| self.get(year)).collect()
    }

    pub fn records_per_year(&self) -> usize {
        self.records_per_year
    }
}
