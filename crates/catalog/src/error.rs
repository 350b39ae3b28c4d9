use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised by the catalog.
///
/// The parse variants indicate a caller bug (a bad sort key or category slug
/// coming from configuration or a command line), never a user condition.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid sort key '{0}', expected one of: created_at, title, views")]
    InvalidSortKey(String),

    #[error("invalid sort direction '{0}', expected 'asc' or 'desc'")]
    InvalidSortDirection(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("invalid publication date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog file: {0}")]
    Json(#[from] serde_json::Error),
}
