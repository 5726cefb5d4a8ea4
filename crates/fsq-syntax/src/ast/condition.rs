use model::Value;
use serde::Serialize;

/// A fully bound comparison against one column.
///
/// `field` is the query-side field name, resolved through the schema
/// whitelist both when the condition is built and again when the column
/// name is emitted; `None` means the default searchable column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Condition {
    /// Equality, triggered by quoting the value (or by non-text kinds).
    Exact { field: Option<String>, value: Value },

    /// Substring match, the default for bare text values.
    Contains { field: Option<String>, value: String },

    /// Inclusive-lower, exclusive-upper bound over a numeric or date
    /// field. `low > high` is structurally valid and matches nothing.
    Range {
        field: String,
        low: Value,
        high: Value,
    },
}
