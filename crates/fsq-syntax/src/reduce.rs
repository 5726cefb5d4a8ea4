use crate::ast::{Condition, Expr};
use crate::bind::item::Item;
use crate::error::{CompileError, Result};
use crate::lexer::token::TokenKind;
use std::iter::Peekable;
use std::vec::IntoIter;

/// Reduces the bound item sequence to one expression tree.
///
/// Fixed precedence, highest first: `NOT` (unary, binds the single
/// condition or group to its right), then `AND`, then `OR`. Two
/// adjacent operands with no connective take an implicit `AND` at the
/// same precedence as the explicit one, so `word1 word2` means both
/// present and `a NOT b AND c OR d` reduces to
/// `((a AND NOT b) AND c) OR d`. Same-operator chains associate left.
pub fn reduce_logic(items: Vec<Item>) -> Result<Expr> {
    let items: Vec<Item> = items.into_iter().map(promote_unscoped).collect();
    let mut it = items.into_iter().peekable();
    parse_or(&mut it, "()")
}

/// Unscoped bare words and quoted strings become conditions on the
/// default searchable column.
fn promote_unscoped(item: Item) -> Item {
    use crate::lexer::token::Token;
    match item {
        Item::Tok(Token {
            kind: TokenKind::Word(w),
            ..
        }) => Item::Cond(Condition::Contains {
            field: None,
            value: w,
        }),
        Item::Tok(Token {
            kind: TokenKind::Quoted(s),
            ..
        }) => Item::Cond(Condition::Exact {
            field: None,
            value: model::Value::Str(s),
        }),
        other => other,
    }
}

type Items = Peekable<IntoIter<Item>>;

fn parse_or(it: &mut Items, after: &str) -> Result<Expr> {
    let mut left = parse_and(it, after)?;
    while it.peek().and_then(Item::token_kind) == Some(&TokenKind::Or) {
        it.next();
        let right = parse_and(it, "OR")?;
        left = Expr::or(left, right);
    }
    Ok(left)
}

fn parse_and(it: &mut Items, after: &str) -> Result<Expr> {
    let mut left = parse_unary(it, after)?;
    loop {
        match it.peek() {
            Some(Item::Tok(t)) if t.kind == TokenKind::And => {
                it.next();
                let right = parse_unary(it, "AND")?;
                left = Expr::and(left, right);
            }
            Some(Item::Tok(t)) if t.kind == TokenKind::Or => break,
            // Adjacent operand without a connective: implicit AND.
            Some(_) => {
                let right = parse_unary(it, after)?;
                left = Expr::and(left, right);
            }
            None => break,
        }
    }
    Ok(left)
}

fn parse_unary(it: &mut Items, after: &str) -> Result<Expr> {
    if it.peek().and_then(Item::token_kind) == Some(&TokenKind::Not) {
        it.next();
        let operand = parse_unary(it, "NOT")?;
        return Ok(Expr::not(operand));
    }
    parse_operand(it, after)
}

fn parse_operand(it: &mut Items, after: &str) -> Result<Expr> {
    match it.next() {
        Some(Item::Cond(cond)) => Ok(Expr::Cond(cond)),
        Some(Item::Group(inner)) => Ok(Expr::group(inner)),
        Some(Item::Tok(t)) => Err(CompileError::DanglingOperator {
            operator: t.kind.to_string(),
        }),
        None => Err(CompileError::DanglingOperator {
            operator: after.to_string(),
        }),
    }
}
