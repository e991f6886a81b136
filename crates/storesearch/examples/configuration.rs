//! Index configuration
//!
//! This example shows how the category match mode changes the results of
//! queries involving repeated categories, and how the query length limit
//! is enforced.

use storesearch::{CategoryMatch, Geo, IndexConfigBuilder, Store, StoreIndex, StoreSearchError};

fn stores() -> Vec<Store> {
    vec![
        // A store listing the same category twice
        Store::new("Double Cafe", Geo::new(1.0, 3.0), ["cafe", "cafe"]),
        Store::new("Cafe Bar", Geo::new(1.5, 3.5), ["cafe", "bar"]),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    storesearch::init_logging(tracing::Level::INFO)?;

    // Default: occurrences are counted as supplied
    let index = StoreIndex::new(stores());
    println!("AsSupplied ['cafe', 'bar']:");
    for store in index.by_categories(&["cafe", "bar"])? {
        println!("  {}", store.name);
    }

    // Strict: duplicates are ignored on both sides
    let config = IndexConfigBuilder::strict().build()?;
    assert_eq!(config.category_match, CategoryMatch::Distinct);
    let index = StoreIndex::with_config(stores(), config);
    println!("Distinct ['cafe', 'bar']:");
    for store in index.by_categories(&["cafe", "bar"])? {
        println!("  {}", store.name);
    }

    // Limit the number of categories a query may carry
    let config = IndexConfigBuilder::new().max_query_categories(2).build()?;
    let index = StoreIndex::with_config(stores(), config);
    match index.by_categories(&["cafe", "bar", "bakery"]) {
        Err(StoreSearchError::TooManyCategories { requested, max }) => {
            println!("Rejected query with {requested} categories (max {max})");
        }
        other => println!("Unexpected result: {other:?}"),
    }

    Ok(())
}
