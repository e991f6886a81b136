//! Integration tests for storesearch
//!
//! These tests run against the full public API using generated store data
//! from `storesearch-data`.

use std::ptr;

use storesearch::{
    CategoryMatch, Geo, IndexConfig, Searcher, Store, StoreIndex, StoreSearchError,
};
use storesearch_data::{StoreSearchData, TestDataConfig, TestDataGenerator, generate_stores};

fn setup_test_env() {
    let _ = storesearch::init_logging(tracing::Level::WARN);
}

fn contains(found: &[&Store], store: &Store) -> bool {
    found.iter().any(|candidate| ptr::eq(*candidate, store))
}

fn naive_matches<'a>(stores: &'a [Store], categories: &[String]) -> Vec<&'a Store> {
    stores
        .iter()
        .filter(|store| categories.iter().all(|c| store.has_category(c)))
        .collect()
}

#[test]
fn test_every_store_found_by_each_key() {
    setup_test_env();

    let index = StoreSearchData::from_test_data(&TestDataConfig::default()).into_index();

    for store in index.stores() {
        let by_name = index.by_name(&store.name).expect("name should be indexed");
        assert!(contains(&by_name, store));
        assert!(by_name.iter().all(|s| s.name == store.name));

        let by_geo = index.by_geo(store.geo).expect("coordinate should be indexed");
        assert!(contains(&by_geo, store));

        for category in &store.categories {
            let by_category = index
                .by_categories(&[category])
                .expect("category should be indexed");
            assert!(contains(&by_category, store));
        }
    }
}

#[test]
fn test_empty_category_request_on_populated_index() {
    setup_test_env();

    let index = StoreSearchData::from_test_data(&TestDataConfig::default()).into_index();
    let empty: Vec<String> = Vec::new();
    assert!(matches!(
        index.by_categories(empty.as_slice()),
        Err(StoreSearchError::NotFound)
    ));
}

#[test]
fn test_distinct_matches_naive_filter() {
    setup_test_env();

    let data_config = TestDataConfig {
        stores: 2_000,
        category_pool: 12,
        max_categories: 6,
        ..TestDataConfig::default()
    };
    let config = IndexConfig::builder()
        .category_match(CategoryMatch::Distinct)
        .build()
        .unwrap();
    let index = StoreSearchData::from_test_data(&data_config).into_index_with_config(config);

    let mut generator = TestDataGenerator::new(&TestDataConfig {
        seed: 7,
        max_categories: 3,
        ..data_config
    });
    for _ in 0..200 {
        let query = generator.categories();
        let expected = naive_matches(index.stores(), &query);
        match index.by_categories(query.as_slice()) {
            Ok(found) => assert_eq!(found, expected, "query {query:?}"),
            Err(err) => {
                assert!(err.is_not_found());
                assert!(expected.is_empty(), "query {query:?}");
            }
        }
    }
}

#[test]
fn test_as_supplied_matches_naive_filter_without_duplicates() {
    setup_test_env();

    // Distinct categories per store, so occurrence counting and set membership agree.
    let stores: Vec<Store> = generate_stores(&TestDataConfig {
        stores: 1_000,
        category_pool: 8,
        ..TestDataConfig::default()
    })
    .into_iter()
    .map(|mut store| {
        store.categories.sort();
        store.categories.dedup();
        store
    })
    .collect();
    let index = StoreIndex::new(stores);

    for query in [
        vec!["category 1".to_string()],
        vec!["category 2".to_string(), "category 5".to_string()],
        vec![
            "category 0".to_string(),
            "category 3".to_string(),
            "category 7".to_string(),
        ],
    ] {
        let expected = naive_matches(index.stores(), &query);
        match index.by_categories(query.as_slice()) {
            Ok(found) => assert_eq!(found, expected),
            Err(_) => assert!(expected.is_empty()),
        }
    }
}

#[test]
fn test_pooled_and_caller_scratch_agree() {
    setup_test_env();

    let index = StoreSearchData::from_test_data(&TestDataConfig::benchmark()).into_index();
    let mut scratch = index.scratch();
    let mut generator = TestDataGenerator::new(&TestDataConfig {
        seed: 99,
        category_pool: 50,
        max_categories: 2,
        ..TestDataConfig::default()
    });

    for _ in 0..50 {
        let query = generator.categories();
        let pooled = index.by_categories(query.as_slice()).ok();
        let owned = index.by_categories_with(query.as_slice(), &mut scratch).ok();
        let again = index.by_categories(query.as_slice()).ok();
        assert_eq!(pooled, owned);
        assert_eq!(pooled, again);
    }
}

#[test]
fn test_bulk_category_search() {
    setup_test_env();

    let index = StoreSearchData::from_test_data(&TestDataConfig::default()).into_index();
    let queries: Vec<Vec<String>> = index
        .stores()
        .iter()
        .map(|store| store.categories.clone())
        .collect();

    let results = index.by_categories_bulk(&queries);
    assert_eq!(results.len(), queries.len());
    for (store, result) in index.stores().iter().zip(results) {
        // A store's full category list always matches the store itself.
        let found = result.expect("store's own categories should match");
        assert!(contains(&found, store));
    }
}

#[test]
fn test_searcher_trait_object() {
    setup_test_env();

    let index = StoreIndex::new(vec![
        Store::new("A", Geo::new(0.5, 0.5), ["x", "y"]),
        Store::new("B", Geo::new(0.5, 0.5), ["x", "z"]),
    ]);
    let searcher: &dyn Searcher = &index;

    let names = |found: Vec<&Store>| found.into_iter().map(|s| s.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(searcher.store_by_name("A").unwrap()), ["A"]);
    assert_eq!(
        names(searcher.store_by_geo(Geo::new(0.5, 0.5)).unwrap()),
        ["A", "B"]
    );
    assert_eq!(names(searcher.store_by_categories(&["x"]).unwrap()), ["A", "B"]);
    assert_eq!(names(searcher.store_by_categories(&["x", "y"]).unwrap()), ["A"]);
    assert!(searcher.store_by_categories(&["q"]).unwrap_err().is_not_found());
}

#[test]
fn test_concurrent_readers_with_own_scratch() {
    setup_test_env();

    let index = StoreSearchData::from_test_data(&TestDataConfig::default()).into_index();
    let query = index.stores()[0].categories.clone();
    let expected = index.by_categories(query.as_slice()).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let mut scratch = index.scratch();
                for _ in 0..50 {
                    let found = index.by_categories_with(query.as_slice(), &mut scratch).unwrap();
                    assert_eq!(found, expected);
                    assert!(index.by_name(&index.stores()[1].name).is_ok());
                }
            });
        }
    });
}
