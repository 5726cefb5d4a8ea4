use crate::ast::Condition;
use crate::bind::item::Item;
use crate::date::parse_query_date;
use crate::error::{CompileError, Result};
use crate::lexer::token::TokenKind;
use chrono::NaiveDate;
use model::{FieldKind, Schema, Value};
use tracing::debug;

/// Resolves `field:value` adjacency into bound conditions.
///
/// Scans right to left so the value token is known before the field
/// name to its left is considered, mirroring the written order of
/// `field:value`. Each resolved triple collapses into one `Item::Cond`.
pub fn bind_attributes(
    mut items: Vec<Item>,
    schema: &Schema,
    reference: NaiveDate,
) -> Result<Vec<Item>> {
    let mut i = items.len();
    while i > 0 {
        i -= 1;
        if items[i].token_kind() != Some(&TokenKind::Colon) {
            continue;
        }

        let field = field_name(&items, i)?;
        let spec = schema
            .field(&field)
            .ok_or_else(|| CompileError::UnknownField {
                name: field.clone(),
            })?;
        let value = value_kind(&items, i)?;
        let cond = coerce(&field, spec.kind, &value, reference)?;
        debug!(field = %field, kind = %spec.kind, "bound attribute");

        items.splice(i - 1..=i + 1, [Item::Cond(cond)]);
        i -= 1;
    }
    Ok(items)
}

/// The token left of the colon: must be a bare word in the whitelist.
fn field_name(items: &[Item], colon: usize) -> Result<String> {
    if colon == 0 {
        return Err(CompileError::UnknownField {
            name: String::new(),
        });
    }
    match items[colon - 1].token_kind() {
        Some(TokenKind::Word(w)) => Ok(w.clone()),
        _ => Err(CompileError::UnknownField {
            name: items[colon - 1].describe(),
        }),
    }
}

/// The token right of the colon: the value to bind.
fn value_kind(items: &[Item], colon: usize) -> Result<TokenKind> {
    match items.get(colon + 1).and_then(Item::token_kind) {
        Some(kind @ (TokenKind::Word(_) | TokenKind::Quoted(_))) => Ok(kind.clone()),
        _ => Err(CompileError::DanglingOperator {
            operator: ":".to_string(),
        }),
    }
}

fn coerce(
    field: &str,
    kind: FieldKind,
    value: &TokenKind,
    reference: NaiveDate,
) -> Result<Condition> {
    let field = Some(field.to_string());
    match kind {
        // Quoting selects exact match; bare words mean substring.
        FieldKind::Text => Ok(match value {
            TokenKind::Quoted(s) => Condition::Exact {
                field,
                value: Value::Str(s.clone()),
            },
            TokenKind::Word(w) => Condition::Contains {
                field,
                value: w.clone(),
            },
            _ => unreachable!("value_kind admits only words and quotes"),
        }),
        FieldKind::Integer => {
            let text = value_text(value);
            let n = parse_query_uint(text)?;
            Ok(Condition::Exact {
                field,
                value: Value::Uint(n),
            })
        }
        FieldKind::Date => {
            let text = value_text(value);
            let date = parse_query_date(text, reference).ok_or_else(|| {
                CompileError::InvalidDateValue {
                    value: text.to_string(),
                }
            })?;
            Ok(Condition::Exact {
                field,
                value: Value::Date(date),
            })
        }
    }
}

/// Non-negative integer within the store's numeric range (SQLite
/// integers are signed 64-bit).
pub(crate) fn parse_query_uint(text: &str) -> Result<u64> {
    text.parse::<u64>()
        .ok()
        .filter(|n| *n <= i64::MAX as u64)
        .ok_or_else(|| CompileError::InvalidNumericValue {
            value: text.to_string(),
        })
}

fn value_text(value: &TokenKind) -> &str {
    match value {
        TokenKind::Word(w) => w,
        TokenKind::Quoted(s) => s,
        _ => "",
    }
}
