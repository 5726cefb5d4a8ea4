//! Every rejection path, plus the literal-safety guarantees.

use chrono::NaiveDate;
use fsq_syntax::{CompileError, CompileLimits, QueryCompiler};
use model::Schema;

fn compiler() -> QueryCompiler {
    QueryCompiler::new(Schema::file_index())
        .with_reference_date(NaiveDate::from_ymd_opt(2026, 8, 30).unwrap())
}

fn err_of(query: &str) -> CompileError {
    compiler().compile(query).unwrap_err()
}

#[test]
fn test_input_too_long() {
    let c = compiler().with_limits(CompileLimits {
        max_input_len: 8,
        max_nesting: 32,
    });
    assert_eq!(
        c.compile("123456789").unwrap_err(),
        CompileError::InputTooLong { len: 9, max: 8 }
    );
}

#[test]
fn test_unterminated_quote() {
    assert!(matches!(
        err_of(r#"name:"oops"#),
        CompileError::UnterminatedQuote { .. }
    ));
}

#[test]
fn test_unbalanced_parentheses() {
    for query in ["(a", "a)", "((a)", "a (b))"] {
        assert_eq!(
            err_of(query),
            CompileError::UnbalancedParentheses,
            "query: {query}"
        );
    }
}

#[test]
fn test_max_nesting_exceeded() {
    let c = compiler().with_limits(CompileLimits {
        max_input_len: 1024,
        max_nesting: 2,
    });
    assert!(c.compile("((a))").is_ok());
    assert_eq!(
        c.compile("(((a)))").unwrap_err(),
        CompileError::MaxNestingExceeded { max: 2 }
    );
}

#[test]
fn test_unknown_field() {
    assert_eq!(
        err_of("owner:bob"),
        CompileError::UnknownField {
            name: "owner".to_string()
        }
    );
    // Column names are not query field names.
    assert!(matches!(
        err_of("FileName:x"),
        CompileError::UnknownField { .. }
    ));
    // A colon with no field to its left is a malformed field position.
    assert!(matches!(err_of(":pdf"), CompileError::UnknownField { .. }));
}

#[test]
fn test_invalid_numeric_value() {
    for query in ["filesize:big", "filesize:-5", "filesize:99999999999999999999"] {
        assert!(
            matches!(err_of(query), CompileError::InvalidNumericValue { .. }),
            "query: {query}"
        );
    }
}

#[test]
fn test_invalid_date_value() {
    for query in ["time:today", "time:1301", "time:20230230", "time:123"] {
        assert!(
            matches!(err_of(query), CompileError::InvalidDateValue { .. }),
            "query: {query}"
        );
    }
}

#[test]
fn test_range_field_mismatch() {
    // No field context at all.
    assert!(matches!(
        err_of("0..100"),
        CompileError::RangeFieldMismatch { .. }
    ));
    // Text fields cannot be ranged.
    assert!(matches!(
        err_of("filetype:a..b"),
        CompileError::RangeFieldMismatch { .. }
    ));
    // Endpoints bound to different fields.
    assert!(matches!(
        err_of("filesize:1..time:0101"),
        CompileError::RangeFieldMismatch { .. }
    ));
}

#[test]
fn test_dangling_operators() {
    for query in ["NOT", "a AND", "OR a", "filesize:", "()"] {
        assert!(
            matches!(err_of(query), CompileError::DanglingOperator { .. }),
            "query: {query}"
        );
    }
}

#[test]
fn test_rejection_aborts_whole_compilation() {
    // A valid prefix does not rescue a malformed tail: nothing is
    // silently dropped.
    assert!(compiler().compile("world AND owner:bob").is_err());
}

#[test]
fn test_quoted_injection_stays_a_literal() {
    let clause = compiler()
        .compile(r#"name:"'; DROP TABLE FILE; --""#)
        .unwrap();
    assert_eq!(clause.as_str(), "FileName = '''; DROP TABLE FILE; --'");
}

#[test]
fn test_hostile_field_name_never_reaches_output() {
    let err = err_of("FileHash=x:y");
    assert_eq!(
        err,
        CompileError::UnknownField {
            name: "FileHash=x".to_string()
        }
    );
}

#[test]
fn test_like_wildcards_are_neutralized() {
    let clause = compiler().compile("name:100%").unwrap();
    assert_eq!(clause.as_str(), r"FileName LIKE '%100\%%' ESCAPE '\'");
}
