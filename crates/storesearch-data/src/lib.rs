//! Store data sources for the `storesearch` index.
//!
//! Loads store collections from JSON and generates reproducible test
//! datasets. Everything here drives the index through its public API only.

pub mod source;
pub mod test_data;

mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum DataError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
        #[error("Serialization error: {0}")]
        Serde(#[from] serde_json::Error),
        #[error("Store data is empty")]
        EmptyDataset,
    }

    pub type Result<T> = std::result::Result<T, DataError>;
}

pub use error::{DataError, Result};

// Re-export main types
pub use source::{StoreSearchData, load_stores, load_stores_from_path};
pub use test_data::{TestDataConfig, TestDataGenerator, generate_stores, write_test_data};
