use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use storesearch::{IndexConfig, Store, StoreIndex};
use tracing::{info, instrument};

use super::error::{DataError, Result};
use crate::test_data::{TestDataConfig, generate_stores};

/// Read a JSON array of stores.
///
/// Each element has the shape
/// `{"name": "...", "geo": {"latitude": 0.5, "longitude": 0.5}, "categories": ["..."]}`.
pub fn load_stores<R: Read>(reader: R) -> Result<Vec<Store>> {
    let stores: Vec<Store> = serde_json::from_reader(BufReader::new(reader))?;
    info!(num_stores = stores.len(), "Loaded stores");
    Ok(stores)
}

#[instrument(name = "Load Stores From Path", skip_all, fields(path = ?path.as_ref()))]
pub fn load_stores_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Store>> {
    let file = File::open(path.as_ref())?;
    load_stores(file)
}

/// A snapshot of stores waiting to be indexed.
#[derive(Debug, Clone, Default)]
pub struct StoreSearchData {
    stores: Vec<Store>,
}

impl StoreSearchData {
    pub const fn from_stores(stores: Vec<Store>) -> Self {
        Self { stores }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        load_stores(reader).map(Self::from_stores)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_stores_from_path(path).map(Self::from_stores)
    }

    pub fn from_test_data(config: &TestDataConfig) -> Self {
        Self::from_stores(generate_stores(config))
    }

    /// Fail with [`DataError::EmptyDataset`] when there is nothing to index.
    pub fn require_non_empty(self) -> Result<Self> {
        if self.stores.is_empty() {
            return Err(DataError::EmptyDataset);
        }
        Ok(self)
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    pub fn into_index(self) -> StoreIndex {
        StoreIndex::new(self.stores)
    }

    pub fn into_index_with_config(self, config: IndexConfig) -> StoreIndex {
        StoreIndex::with_config(self.stores, config)
    }
}
