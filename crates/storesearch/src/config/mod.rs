use crate::error::{Result, StoreSearchError};

/// How a category query decides that a store carries every requested category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CategoryMatch {
    /// A store matches once its occurrence count reaches the number of
    /// categories as supplied in the query. Duplicates in the query or in a
    /// store's own category list are counted every time they occur.
    #[default]
    AsSupplied,
    /// Duplicates are ignored on both sides: the query is deduplicated and each
    /// store is counted at most once per category.
    Distinct,
}

/// Configuration fixed at index construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexConfig {
    pub category_match: CategoryMatch,
    /// Upper bound on the number of categories accepted in a single query.
    /// Unbounded unless set through the builder.
    pub max_query_categories: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            category_match: CategoryMatch::default(),
            max_query_categories: usize::MAX,
        }
    }
}

impl IndexConfig {
    pub fn builder() -> IndexConfigBuilder {
        IndexConfigBuilder::new()
    }
}

/// Builder for creating index configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct IndexConfigBuilder {
    config: IndexConfig,
}

impl IndexConfigBuilder {
    /// Create a new builder with sensible defaults
    pub fn new() -> Self {
        Self {
            config: IndexConfig::default(),
        }
    }

    /// Create a builder that matches on distinct categories only
    pub fn strict() -> Self {
        Self::new().category_match(CategoryMatch::Distinct)
    }

    pub fn category_match(mut self, category_match: CategoryMatch) -> Self {
        self.config.category_match = category_match;
        self
    }

    /// Set the maximum number of categories a single query may carry
    pub fn max_query_categories(mut self, max: usize) -> Self {
        self.config.max_query_categories = max;
        self
    }

    /// Accept category queries of any length
    pub fn unlimited_query_categories(self) -> Self {
        self.max_query_categories(usize::MAX)
    }

    /// Build the final configuration
    pub fn build(self) -> Result<IndexConfig> {
        if self.config.max_query_categories == 0 {
            return Err(StoreSearchError::ConfigError(
                "max_query_categories must be greater than zero".to_string(),
            ));
        }
        Ok(self.config)
    }
}
