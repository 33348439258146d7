use thiserror::Error;

/// Caller bugs that make a page view impossible to construct. Everything
/// else (out-of-range page, unknown column click, stale selected id)
/// degrades locally instead of failing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(usize),
    #[error("duplicate column key `{0}`")]
    DuplicateColumnKey(String),
}
