//! Loading stores from JSON
//!
//! Usage: `cargo run --example data_sources -- path/to/stores.json`
//!
//! Without a path, a generated dataset is written to a temporary file and
//! loaded back.

use storesearch_data::{StoreSearchData, TestDataConfig, write_test_data};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    storesearch::init_logging(tracing::Level::INFO)?;
    run(std::env::args().nth(1))
}

fn run(path: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let data = if let Some(path) = path {
        StoreSearchData::from_path(path)?
    } else {
        let file = write_test_data(&TestDataConfig::default())?;
        StoreSearchData::from_path(file.path())?
    };
    let index = data.require_non_empty()?.into_index();

    let first = &index.stores()[0];
    println!("Indexed {} stores", index.len());
    println!(
        "'{}' shares its name with {} store(s)",
        first.name,
        index.by_name(&first.name)?.len()
    );
    println!(
        "{} store(s) carry all of {:?}",
        index.by_categories(first.categories.as_slice())?.len(),
        first.categories
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_sources_example() {
        let _ = storesearch::init_logging(tracing::Level::WARN);
        assert!(
            run(None).is_ok(),
            "Data sources example should run successfully"
        );
    }

    #[test]
    fn test_data_sources_example_with_path() {
        let file = write_test_data(&TestDataConfig::minimal()).unwrap();
        let path = file.path().to_string_lossy().into_owned();
        assert!(run(Some(path)).is_ok());
    }
}
