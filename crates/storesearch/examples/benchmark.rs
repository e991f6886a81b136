//! Query latency over a generated dataset
//!
//! Builds an index over 10 000 generated stores and times each query type,
//! plus sequential versus parallel bulk category queries.
//!
//! Usage: `cargo run --release --example benchmark`

use std::hint::black_box;
use std::time::{Duration, Instant};

use storesearch::{Geo, Searcher, StoreIndex};
use storesearch_data::{TestDataConfig, TestDataGenerator, generate_stores};

const ITERATIONS: u32 = 100_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TestDataConfig::benchmark();

    let start = Instant::now();
    let index = StoreIndex::new(generate_stores(&config));
    println!("Built index over {} stores in {:?}", index.len(), start.elapsed());

    let mut generator = TestDataGenerator::new(&TestDataConfig {
        seed: 1,
        ..config
    });
    let categories = generator.categories();
    let category_refs: Vec<&str> = categories.iter().map(String::as_str).collect();

    report("by_name", time(ITERATIONS, || {
        black_box(index.store_by_name("store 1").ok());
    }));
    report("by_geo", time(ITERATIONS, || {
        black_box(index.store_by_geo(Geo::new(0.5, 0.5)).ok());
    }));
    report("by_categories (pooled)", time(ITERATIONS, || {
        black_box(index.store_by_categories(&category_refs).ok());
    }));

    let mut scratch = index.scratch();
    report("by_categories (caller scratch)", time(ITERATIONS, || {
        black_box(index.by_categories_with(category_refs.as_slice(), &mut scratch).ok());
    }));

    let queries: Vec<Vec<String>> = (0..10_000).map(|_| generator.categories()).collect();

    let start = Instant::now();
    let sequential: usize = queries
        .iter()
        .filter_map(|query| index.by_categories(query.as_slice()).ok())
        .map(|found| found.len())
        .sum();
    let sequential_time = start.elapsed();

    let start = Instant::now();
    let parallel: usize = index
        .by_categories_bulk(&queries)
        .into_iter()
        .filter_map(Result::ok)
        .map(|found| found.len())
        .sum();
    let parallel_time = start.elapsed();

    assert_eq!(sequential, parallel);
    println!(
        "{} category queries: sequential {:?}, bulk {:?} ({} matches)",
        queries.len(),
        sequential_time,
        parallel_time,
        parallel
    );

    Ok(())
}

fn time(iterations: u32, mut f: impl FnMut()) -> Duration {
    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    start.elapsed() / iterations
}

fn report(name: &str, per_call: Duration) {
    println!("  {name:<32} {per_call:?}/op");
}
