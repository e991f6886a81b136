use std::io::Write;

use rand::prelude::*;
use rand_pcg::Pcg64Mcg;
use storesearch::{Geo, Store};
use tempfile::NamedTempFile;
use tracing::info;

use super::error::Result;

/// Configuration for test data generation
#[derive(Debug, Clone)]
pub struct TestDataConfig {
    /// Number of stores to generate
    pub stores: usize,
    /// Names are drawn from `store 0` .. `store {name_pool - 1}`
    pub name_pool: usize,
    /// Categories are drawn from `category 0` .. `category {category_pool - 1}`
    pub category_pool: usize,
    /// Each store gets between 1 and `max_categories` categories
    pub max_categories: usize,
    /// Same seed, same stores
    pub seed: u64,
}

impl Default for TestDataConfig {
    fn default() -> Self {
        Self {
            stores: 100,
            name_pool: 1000,
            category_pool: 1000,
            max_categories: 10,
            seed: 0x5EED,
        }
    }
}

impl TestDataConfig {
    /// Minimal data for unit tests
    pub fn minimal() -> Self {
        Self {
            stores: 5,
            name_pool: 3,
            category_pool: 4,
            max_categories: 3,
            ..Self::default()
        }
    }

    /// Benchmark-sized data: 10 000 stores over 1000 names and 1000 categories
    pub fn benchmark() -> Self {
        Self {
            stores: 10_000,
            ..Self::default()
        }
    }
}

/// Reproducible generator for stores and category queries.
///
/// Coordinates fall in latitude `[1, 2)` and longitude `[3, 4)`. The name
/// and category pools and `max_categories` must be non-zero.
#[derive(Debug, Clone)]
pub struct TestDataGenerator {
    config: TestDataConfig,
    rng: Pcg64Mcg,
}

impl TestDataGenerator {
    pub fn new(config: &TestDataConfig) -> Self {
        Self {
            config: config.clone(),
            rng: Pcg64Mcg::seed_from_u64(config.seed),
        }
    }

    pub fn store(&mut self) -> Store {
        let name = self.name();
        let geo = self.geo();
        let categories = self.categories();
        Store {
            name,
            geo,
            categories,
        }
    }

    pub fn name(&mut self) -> String {
        format!("store {}", self.rng.random_range(0..self.config.name_pool))
    }

    pub fn geo(&mut self) -> Geo {
        let latitude: f32 = self.rng.random_range(1.0..2.0);
        let longitude: f32 = self.rng.random_range(3.0..4.0);
        Geo::new(latitude, longitude)
    }

    /// Between 1 and `max_categories` categories, possibly repeated.
    pub fn categories(&mut self) -> Vec<String> {
        let count = self.rng.random_range(1..=self.config.max_categories);
        (0..count)
            .map(|_| {
                format!(
                    "category {}",
                    self.rng.random_range(0..self.config.category_pool)
                )
            })
            .collect()
    }
}

/// Generate `config.stores` stores.
pub fn generate_stores(config: &TestDataConfig) -> Vec<Store> {
    let mut generator = TestDataGenerator::new(config);
    (0..config.stores).map(|_| generator.store()).collect()
}

/// Write generated stores as a JSON array to a temporary file.
pub fn write_test_data(config: &TestDataConfig) -> Result<NamedTempFile> {
    info!("Creating test data with config: {:?}", config);

    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, &generate_stores(config))?;
    file.flush()?;
    Ok(file)
}
