//! Storesearch - In-memory Store Search Index
//!
//! Storesearch answers exact-match queries over a fixed collection of
//! point-of-interest records ("stores"). The index is built once from a
//! snapshot of stores and is read-only afterwards.
//!
//! # Quick Start
//!
//! ```rust
//! use storesearch::{Geo, Store, StoreIndex};
//!
//! let index = StoreIndex::new(vec![
//!     Store::new("A", Geo::new(0.5, 0.5), ["x", "y"]),
//!     Store::new("B", Geo::new(0.5, 0.5), ["x", "z"]),
//! ]);
//!
//! // Exact name
//! let found = index.by_name("A")?;
//! assert_eq!(found.len(), 1);
//!
//! // Exact coordinate, in construction order
//! let found = index.by_geo(Geo::new(0.5, 0.5))?;
//! assert_eq!(found[1].name, "B");
//!
//! // Every requested category must be present
//! let found = index.by_categories(&["x", "y"])?;
//! assert_eq!(found[0].name, "A");
//!
//! // Empty results are errors, not empty lists
//! assert!(index.by_categories(&["q"]).unwrap_err().is_not_found());
//! # Ok::<(), storesearch::StoreSearchError>(())
//! ```
//!
//! # Queries
//!
//! - **Name**: stores whose name equals the query exactly.
//! - **Coordinate**: stores whose coordinate is bit-for-bit the query value
//!   (with `0.0 == -0.0`; NaN never matches).
//! - **Category set**: stores carrying every requested category, evaluated
//!   by occurrence counting over a reusable scratch buffer.
//!
//! Category queries can use the index's own locked buffer
//! ([`StoreIndex::by_categories`]), a caller-owned [`CategoryScratch`]
//! ([`StoreIndex::by_categories_with`]), or run in parallel
//! ([`StoreIndex::by_categories_bulk`]).
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
pub mod error;
mod index;
mod searcher;
mod store;

pub use config::{CategoryMatch, IndexConfig, IndexConfigBuilder};
pub use error::{Result, StoreSearchError};
pub use index::{CategoryScratch, StoreIndex};
pub use searcher::Searcher;
pub use store::{Geo, Store};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Storesearch library.
///
/// Installs a `tracing` subscriber filtered by `RUST_LOG` when set, or by
/// `level` otherwise. Only the first call has any effect.
///
/// # Examples
///
/// ```rust
/// use storesearch::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), storesearch::StoreSearchError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static ()> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("rayon=warn".parse()?);

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = init_logging(tracing::Level::WARN);
    }

    fn contest_stores() -> Vec<Store> {
        vec![
            Store::new("A", Geo::new(0.5, 0.5), ["x", "y"]),
            Store::new("B", Geo::new(0.5, 0.5), ["x", "z"]),
        ]
    }

    #[test]
    fn test_logging_init_is_idempotent() {
        setup_test_env();
        assert!(init_logging(tracing::Level::DEBUG).is_ok());
    }

    #[test]
    fn test_two_store_scenario() {
        setup_test_env();
        let stores = contest_stores();
        let index = StoreIndex::new(stores.clone());

        assert_eq!(index.by_name("A").unwrap(), vec![&stores[0]]);
        assert_eq!(
            index.by_geo(Geo::new(0.5, 0.5)).unwrap(),
            vec![&stores[0], &stores[1]]
        );
        assert_eq!(
            index.by_categories(&["x"]).unwrap(),
            vec![&stores[0], &stores[1]]
        );
        assert_eq!(index.by_categories(&["x", "y"]).unwrap(), vec![&stores[0]]);
        assert!(matches!(
            index.by_categories(&["q"]),
            Err(StoreSearchError::NotFound)
        ));
    }

    #[test]
    fn test_index_usable_after_failures() {
        setup_test_env();
        let index = StoreIndex::new(contest_stores());

        assert!(index.by_name("missing").is_err());
        assert!(index.by_geo(Geo::new(9.0, 9.0)).is_err());
        assert!(index.by_categories(&["missing"]).is_err());

        assert_eq!(index.by_name("B").unwrap().len(), 1);
        assert_eq!(index.by_categories(&["z"]).unwrap().len(), 1);
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(StoreSearchError::NotFound.to_string(), "not found");
    }
}
