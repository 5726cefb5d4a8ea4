use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// How values bound to a field are validated and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free text; quoted values compare exactly, bare values as substrings.
    Text,
    /// Non-negative integer (e.g. file size in bytes).
    Integer,
    /// Calendar date, stored in the index as epoch seconds.
    Date,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::Date => write!(f, "date"),
        }
    }
}

/// Whitelist entry mapping a query field name to its store column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub column: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(column: &str, kind: FieldKind) -> Self {
        FieldSpec {
            column: column.to_string(),
            kind,
        }
    }
}

/// The static field whitelist consulted by the query compiler.
///
/// Only field names present here may appear in a `field:value` term, and
/// only the column names recorded here ever reach the emitted clause.
/// The schema is an explicit value handed to the compiler at construction,
/// never process-global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: HashMap<String, FieldSpec>,
    default_column: String,
}

impl Schema {
    pub fn new(default_column: &str) -> Self {
        Schema {
            fields: HashMap::new(),
            default_column: default_column.to_string(),
        }
    }

    pub fn with_field(mut self, name: &str, column: &str, kind: FieldKind) -> Self {
        self.fields
            .insert(name.to_string(), FieldSpec::new(column, kind));
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Column matched by unscoped search terms.
    pub fn default_column(&self) -> &str {
        &self.default_column
    }

    /// The whitelist for the FILE metadata table produced by the indexer.
    pub fn file_index() -> Self {
        Schema::new("FileName")
            .with_field("name", "FileName", FieldKind::Text)
            .with_field("filetype", "FileType", FieldKind::Text)
            .with_field("filesize", "FileSize", FieldKind::Integer)
            .with_field("time", "Time", FieldKind::Date)
            .with_field("hash", "FileHash", FieldKind::Text)
            .with_field("subject", "Subject", FieldKind::Text)
            .with_field("year", "Year", FieldKind::Text)
            .with_field("keywords", "Keywords", FieldKind::Text)
            .with_field("description", "Description", FieldKind::Text)
    }
}
