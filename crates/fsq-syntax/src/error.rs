use thiserror::Error;

/// All the ways a query can be rejected.
///
/// Every kind is a client error: compilation aborts on the first
/// violation and nothing is retried or silently dropped. Messages name
/// the violated rule and never echo store internals.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompileError {
    #[error("empty query")]
    EmptyQuery,

    #[error("query too long: {len} characters (limit {max})")]
    InputTooLong { len: usize, max: usize },

    #[error("unterminated quote starting at offset {position}")]
    UnterminatedQuote { position: usize },

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("parentheses nested deeper than {max} levels")]
    MaxNestingExceeded { max: usize },

    #[error("unknown field '{name}'")]
    UnknownField { name: String },

    #[error("invalid numeric value '{value}'")]
    InvalidNumericValue { value: String },

    #[error("invalid date value '{value}'")]
    InvalidDateValue { value: String },

    #[error("invalid range: {detail}")]
    RangeFieldMismatch { detail: String },

    #[error("operator '{operator}' is missing an operand")]
    DanglingOperator { operator: String },
}

pub type Result<T> = std::result::Result<T, CompileError>;
