use crate::records::row::Row;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open the index database: {0}")]
    Connection(String),

    #[error("filter execution failed: {0}")]
    Execution(String),
}

/// Narrow interface to the row store.
///
/// The compiler never touches the store; callers run its output through
/// this trait. Implementations execute `SELECT ... WHERE <where_clause>`
/// against the FILE table and return the matching metadata rows in store
/// order.
pub trait RowStore {
    fn execute_filter(&self, where_clause: &str) -> Result<Vec<Row>, StoreError>;
}

/// Clause substituted by the caller when the query string is empty or
/// missing: an empty search means "match all rows", not an error.
pub fn match_all_clause() -> &'static str {
    "1=1"
}
