use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreSearchError {
    /// The query matched no stores.
    #[error("not found")]
    NotFound,
    #[error("Too many categories in query: {requested} requested, at most {max} allowed")]
    TooManyCategories { requested: usize, max: usize },
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreSearchError {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, StoreSearchError>;
