//! Category-set queries.
//!
//! A store matches when it carries every requested category. Rather than
//! intersecting per-category sets, each query walks the position buckets of
//! the requested categories and bumps one counter per position in a
//! [`CategoryScratch`]. A store is emitted the moment its counter reaches the
//! number of requested categories, so results come out in bucket-walk order
//! and no intermediate sets are allocated.

use std::sync::PoisonError;

use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use super::StoreIndex;
use crate::{
    config::CategoryMatch,
    error::{Result, StoreSearchError},
    store::Store,
};

/// Reusable per-position counters for category queries.
///
/// One buffer serves any number of sequential queries; it is zeroed at the
/// start of every query. Concurrent callers each need their own buffer.
#[derive(Debug, Clone, Default)]
pub struct CategoryScratch {
    counts: Vec<usize>,
}

impl CategoryScratch {
    pub fn new(len: usize) -> Self {
        Self {
            counts: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Zero the counters, resizing first if the buffer was sized for another index.
    fn reset(&mut self, len: usize) -> &mut [usize] {
        if self.counts.len() == len {
            self.counts.fill(0);
        } else {
            self.counts.clear();
            self.counts.resize(len, 0);
        }
        &mut self.counts
    }
}

impl StoreIndex {
    /// Stores carrying every category in `categories`, using the index's
    /// shared scratch buffer.
    ///
    /// Concurrent calls on the same index are serialised on that buffer; use
    /// [`StoreIndex::by_categories_with`] with one buffer per thread to avoid
    /// the contention.
    pub fn by_categories<S: AsRef<str>>(&self, categories: &[S]) -> Result<Vec<&Store>> {
        // Every query starts by zeroing the buffer, so a poisoned lock carries
        // nothing forward.
        let mut scratch = self.scratch.lock().unwrap_or_else(PoisonError::into_inner);
        self.by_categories_with(categories, &mut scratch)
    }

    /// Stores carrying every category in `categories`, counting in a
    /// caller-owned buffer.
    ///
    /// An empty request never matches. Categories no store carries add
    /// nothing to any counter, so they make the query fail rather than abort it.
    pub fn by_categories_with<S: AsRef<str>>(
        &self,
        categories: &[S],
        scratch: &mut CategoryScratch,
    ) -> Result<Vec<&Store>> {
        let max = self.config.max_query_categories;
        if categories.len() > max {
            return Err(StoreSearchError::TooManyCategories {
                requested: categories.len(),
                max,
            });
        }

        let stores = match self.config.category_match {
            CategoryMatch::AsSupplied => self.count_matches(
                categories.iter().map(|c| c.as_ref()),
                categories.len(),
                scratch,
            ),
            CategoryMatch::Distinct => {
                let distinct: Vec<&str> = categories.iter().map(|c| c.as_ref()).unique().collect();
                self.count_matches(distinct.iter().copied(), distinct.len(), scratch)
            }
        };

        debug!(
            num_categories = categories.len(),
            num_results = stores.len(),
            "Category lookup"
        );
        if stores.is_empty() {
            return Err(StoreSearchError::NotFound);
        }
        Ok(stores)
    }

    /// Run many category queries in parallel, one scratch buffer per worker.
    ///
    /// Results are returned in the same order as `queries`.
    #[instrument(name = "Bulk Category Search", skip_all, level = "debug", fields(num_queries = queries.len()))]
    pub fn by_categories_bulk<S>(&self, queries: &[Vec<S>]) -> Vec<Result<Vec<&Store>>>
    where
        S: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map_init(
                || self.scratch(),
                |scratch, categories| self.by_categories_with(categories.as_slice(), scratch),
            )
            .collect()
    }

    fn count_matches<'q>(
        &self,
        categories: impl Iterator<Item = &'q str>,
        threshold: usize,
        scratch: &mut CategoryScratch,
    ) -> Vec<&Store> {
        let counts = scratch.reset(self.stores.len());
        let mut stores = Vec::new();

        for category in categories {
            let Some(positions) = self.by_category.get(category) else {
                trace!(category, "No stores carry category");
                continue;
            };
            for &position in positions {
                let count = &mut counts[position];
                *count += 1;
                if *count == threshold {
                    stores.push(&self.stores[position]);
                }
            }
        }
        stores
    }
}
