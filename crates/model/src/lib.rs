pub mod core;
pub mod records;
pub mod schema;
pub mod store;

pub use crate::core::value::Value;
pub use records::row::Row;
pub use schema::{FieldKind, FieldSpec, Schema};
pub use store::{RowStore, StoreError, match_all_clause};
