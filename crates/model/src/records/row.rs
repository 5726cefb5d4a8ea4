use serde::{Deserialize, Serialize};

/// A single column of a fetched row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnValue {
    pub name: String,
    pub value: serde_json::Value,
}

/// One row of document metadata returned by the row store.
///
/// Column order is preserved as returned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    pub columns: Vec<ColumnValue>,
}

impl Row {
    pub fn new(columns: Vec<ColumnValue>) -> Self {
        Row { columns }
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| &c.value)
    }
}
