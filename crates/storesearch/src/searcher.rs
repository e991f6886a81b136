use crate::{
    error::Result,
    index::StoreIndex,
    store::{Geo, Store},
};

/// The query contract shared by store searchers.
///
/// Every operation fails with [`StoreSearchError::NotFound`](crate::StoreSearchError::NotFound)
/// instead of returning an empty list.
pub trait Searcher: Send + Sync {
    fn store_by_name(&self, name: &str) -> Result<Vec<&Store>>;

    fn store_by_geo(&self, geo: Geo) -> Result<Vec<&Store>>;

    fn store_by_categories(&self, categories: &[&str]) -> Result<Vec<&Store>>;
}

impl Searcher for StoreIndex {
    fn store_by_name(&self, name: &str) -> Result<Vec<&Store>> {
        self.by_name(name)
    }

    fn store_by_geo(&self, geo: Geo) -> Result<Vec<&Store>> {
        self.by_geo(geo)
    }

    fn store_by_categories(&self, categories: &[&str]) -> Result<Vec<&Store>> {
        self.by_categories(categories)
    }
}
