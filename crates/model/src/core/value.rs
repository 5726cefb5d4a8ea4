use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value carried by a bound search condition.
///
/// Only these three kinds can ever reach the emitted clause, and each is
/// re-serialized from the parsed representation rather than from the raw
/// query text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Uint(u64),
    Date(NaiveDate),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Uint(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Uint(n) => write!(f, "{}", n),
            Value::Date(d) => write!(f, "{}", d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", Value::Str("pdf".to_string())), "\"pdf\"");
        assert_eq!(format!("{}", Value::Uint(42)), "42");
        assert_eq!(
            format!("{}", Value::Date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())),
            "2026-01-01"
        );
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Uint(7).as_u64(), Some(7));
        assert_eq!(Value::Uint(7).as_str(), None);
        assert_eq!(Value::Str("a".into()).as_str(), Some("a"));
    }
}
