//! In-memory lookup structures over a fixed collection of stores.
//!
//! All three indexes are populated once, in input order, when the
//! [`StoreIndex`] is built. Buckets hold positions into the owned store
//! collection, so every query resolves to borrowed stores in construction
//! order.

mod categories;

use std::sync::Mutex;
use std::time::Instant;

use ahash::AHashMap as HashMap;
use tracing::{debug, info, instrument, trace};

pub use categories::CategoryScratch;

use crate::{
    config::{CategoryMatch, IndexConfig},
    error::{Result, StoreSearchError},
    store::{Geo, GeoKey, Store},
};

/// Read-only search index answering exact name, exact coordinate and
/// category-set queries.
///
/// # Examples
///
/// ```rust
/// use storesearch::{Geo, Store, StoreIndex};
///
/// let index = StoreIndex::new(vec![
///     Store::new("A", Geo::new(0.5, 0.5), ["x", "y"]),
///     Store::new("B", Geo::new(0.5, 0.5), ["x", "z"]),
/// ]);
///
/// assert_eq!(index.by_geo(Geo::new(0.5, 0.5))?.len(), 2);
/// assert_eq!(index.by_categories(&["x", "y"])?[0].name, "A");
/// assert!(index.by_categories(&["q"]).is_err());
/// # Ok::<(), storesearch::StoreSearchError>(())
/// ```
#[derive(Debug)]
pub struct StoreIndex {
    stores: Vec<Store>,
    by_name: HashMap<String, Vec<usize>>,
    by_geo: HashMap<GeoKey, Vec<usize>>,
    by_category: HashMap<String, Vec<usize>>,
    /// Shared counters for [`StoreIndex::by_categories`].
    scratch: Mutex<CategoryScratch>,
    config: IndexConfig,
}

impl StoreIndex {
    /// Build an index with the default configuration.
    pub fn new(stores: Vec<Store>) -> Self {
        Self::with_config(stores, IndexConfig::default())
    }

    #[instrument(name = "Build StoreIndex", skip_all, level = "info", fields(num_stores = stores.len(), category_match = ?config.category_match))]
    pub fn with_config(stores: Vec<Store>, config: IndexConfig) -> Self {
        let t_build = Instant::now();

        let mut by_name: HashMap<String, Vec<usize>> = HashMap::with_capacity(stores.len());
        let mut by_geo: HashMap<GeoKey, Vec<usize>> = HashMap::with_capacity(stores.len());
        let mut by_category: HashMap<String, Vec<usize>> = HashMap::with_capacity(stores.len());
        let distinct = config.category_match == CategoryMatch::Distinct;

        for (position, store) in stores.iter().enumerate() {
            by_name.entry(store.name.clone()).or_default().push(position);

            match GeoKey::new(store.geo) {
                Some(key) => by_geo.entry(key).or_default().push(position),
                None => trace!(position, name = %store.name, "NaN coordinate left out of geo index"),
            }

            for category in &store.categories {
                let bucket = by_category.entry(category.clone()).or_default();
                // Positions arrive in ascending order, so a repeated category on
                // this store can only show up as the last entry.
                if distinct && bucket.last() == Some(&position) {
                    continue;
                }
                bucket.push(position);
            }
        }

        info!(
            num_stores = stores.len(),
            num_names = by_name.len(),
            num_locations = by_geo.len(),
            num_categories = by_category.len(),
            elapsed_seconds = ?t_build.elapsed(),
            "StoreIndex build complete"
        );

        let scratch = Mutex::new(CategoryScratch::new(stores.len()));
        Self {
            stores,
            by_name,
            by_geo,
            by_category,
            scratch,
            config,
        }
    }

    /// All stores sharing exactly this name, in construction order.
    pub fn by_name(&self, name: &str) -> Result<Vec<&Store>> {
        let stores = self
            .by_name
            .get(name)
            .map(|positions| self.resolve(positions))
            .ok_or(StoreSearchError::NotFound)?;
        debug!(name, num_results = stores.len(), "Name lookup");
        Ok(stores)
    }

    /// All stores at exactly this coordinate, in construction order.
    pub fn by_geo(&self, geo: Geo) -> Result<Vec<&Store>> {
        let stores = GeoKey::new(geo)
            .and_then(|key| self.by_geo.get(&key))
            .map(|positions| self.resolve(positions))
            .ok_or(StoreSearchError::NotFound)?;
        debug!(?geo, num_results = stores.len(), "Geo lookup");
        Ok(stores)
    }

    /// A zeroed scratch buffer sized for this index.
    pub fn scratch(&self) -> CategoryScratch {
        CategoryScratch::new(self.stores.len())
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

    pub const fn config(&self) -> &IndexConfig {
        &self.config
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&Store> {
        positions.iter().map(|&position| &self.stores[position]).collect()
    }
}

impl FromIterator<Store> for StoreIndex {
    fn from_iter<I: IntoIterator<Item = Store>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
