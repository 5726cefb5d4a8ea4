//! Connective precedence and associativity over the reduced tree.

use chrono::NaiveDate;
use fsq_syntax::{Condition, Expr, QueryCompiler};
use model::Schema;

fn parse(query: &str) -> Expr {
    QueryCompiler::new(Schema::file_index())
        .with_reference_date(NaiveDate::from_ymd_opt(2026, 8, 30).unwrap())
        .parse(query)
        .unwrap()
}

fn contains(text: &str) -> Expr {
    Expr::Cond(Condition::Contains {
        field: None,
        value: text.to_string(),
    })
}

#[test]
fn test_fixed_precedence_table() {
    // NOT binds first, then AND (implicit included), then OR:
    // a NOT b AND c OR d  ==  ((a AND NOT b) AND c) OR d
    assert_eq!(
        parse("a NOT b AND c OR d"),
        Expr::or(
            Expr::and(
                Expr::and(contains("a"), Expr::not(contains("b"))),
                contains("c")
            ),
            contains("d")
        )
    );
}

#[test]
fn test_and_chain_left_associative() {
    assert_eq!(
        parse("a AND b AND c"),
        Expr::and(Expr::and(contains("a"), contains("b")), contains("c"))
    );
}

#[test]
fn test_or_chain_left_associative() {
    assert_eq!(
        parse("a OR b OR c"),
        Expr::or(Expr::or(contains("a"), contains("b")), contains("c"))
    );
}

#[test]
fn test_implicit_and_binds_tighter_than_or() {
    assert_eq!(
        parse("a OR b c"),
        Expr::or(contains("a"), Expr::and(contains("b"), contains("c")))
    );
}

#[test]
fn test_not_applies_to_whole_group() {
    assert_eq!(
        parse("NOT (a OR b)"),
        Expr::not(Expr::group(Expr::or(contains("a"), contains("b"))))
    );
}

#[test]
fn test_group_scoping_beats_adjacency() {
    // The group is compiled as one opaque unit before the outer
    // reduction sees it.
    assert_eq!(
        parse("(a OR b) c"),
        Expr::and(
            Expr::group(Expr::or(contains("a"), contains("b"))),
            contains("c")
        )
    );
}

#[test]
fn test_nested_groups() {
    assert_eq!(
        parse("((a))"),
        Expr::group(Expr::group(contains("a")))
    );
}
