//! Basic store search functionality
//!
//! This example demonstrates the three query types:
//! - Exact name lookup
//! - Exact coordinate lookup
//! - Category-set lookup (every requested category must be present)

use storesearch::{Geo, Store, StoreIndex};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let index = StoreIndex::new(vec![
        Store::new("Corner Bakery", Geo::new(51.5072, -0.1276), ["bakery", "cafe"]),
        Store::new("Night Owl", Geo::new(51.5072, -0.1276), ["cafe", "bar"]),
        Store::new("Corner Bakery", Geo::new(48.8566, 2.3522), ["bakery"]),
    ]);

    println!("Stores named 'Corner Bakery':");
    print_stores(&index.by_name("Corner Bakery")?);

    println!("\nStores at (51.5072, -0.1276):");
    print_stores(&index.by_geo(Geo::new(51.5072, -0.1276))?);

    println!("\nStores that are both a bakery and a cafe:");
    print_stores(&index.by_categories(&["bakery", "cafe"])?);

    // Empty results are reported as errors
    match index.by_categories(&["bookshop"]) {
        Ok(stores) => println!("\nUnexpected bookshops: {}", stores.len()),
        Err(e) if e.is_not_found() => println!("\nNo bookshops: {e}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn print_stores(stores: &[&Store]) {
    for (i, store) in stores.iter().enumerate() {
        println!(
            "  {}. {} at ({}, {}) - {}",
            i + 1,
            store.name,
            store.geo.latitude,
            store.geo.longitude,
            store.categories.join(", ")
        );
    }
}
