use crate::ast::Condition;
use crate::bind::item::Item;
use crate::date::parse_query_date;
use crate::error::{CompileError, Result};
use crate::lexer::token::TokenKind;
use chrono::NaiveDate;
use model::{FieldKind, Schema, Value};
use tracing::debug;

/// Resolves `low..high` adjacency into range conditions.
///
/// Runs after attribute binding, so the lower endpoint of a well-formed
/// range is already a single-field condition carrying the field context.
/// Lower bound inclusive, upper bound exclusive. `low > high` passes:
/// the compiler validates shape, the store resolves the empty match.
pub fn bind_ranges(
    mut items: Vec<Item>,
    schema: &Schema,
    reference: NaiveDate,
) -> Result<Vec<Item>> {
    let mut i = 0;
    while i < items.len() {
        if items[i].token_kind() != Some(&TokenKind::DotDot) {
            i += 1;
            continue;
        }

        let (field, low) = lower_bound(&items, i)?;
        let kind = schema
            .field(&field)
            .map(|spec| spec.kind)
            .ok_or_else(|| CompileError::UnknownField {
                name: field.clone(),
            })?;
        if kind == FieldKind::Text {
            return Err(CompileError::RangeFieldMismatch {
                detail: format!("field '{field}' is text and cannot be ranged"),
            });
        }
        let high = upper_bound(&items, i, &field, kind, reference)?;
        debug!(field = %field, "bound range");

        let cond = Condition::Range { field, low, high };
        items.splice(i - 1..=i + 1, [Item::Cond(cond)]);
        // continue at the element after the new condition
    }
    Ok(items)
}

/// The item left of `..`: a field-scoped exact condition supplying both
/// the field context and the inclusive lower endpoint.
fn lower_bound(items: &[Item], dotdot: usize) -> Result<(String, Value)> {
    let left = if dotdot == 0 { None } else { items.get(dotdot - 1) };
    match left {
        Some(Item::Cond(Condition::Exact {
            field: Some(field),
            value,
        })) => Ok((field.clone(), value.clone())),
        Some(other) => Err(CompileError::RangeFieldMismatch {
            detail: format!(
                "lower bound must be a field-scoped value, found {}",
                other.describe()
            ),
        }),
        None => Err(CompileError::RangeFieldMismatch {
            detail: "range is missing its lower bound".to_string(),
        }),
    }
}

/// The item right of `..`: either a raw value parsed under the lower
/// bound's field kind, or another condition bound to the same field.
fn upper_bound(
    items: &[Item],
    dotdot: usize,
    field: &str,
    kind: FieldKind,
    reference: NaiveDate,
) -> Result<Value> {
    match items.get(dotdot + 1) {
        Some(Item::Tok(t)) => match &t.kind {
            TokenKind::Word(text) | TokenKind::Quoted(text) => {
                parse_endpoint(text, kind, reference)
            }
            _ => Err(CompileError::RangeFieldMismatch {
                detail: "range is missing its upper bound".to_string(),
            }),
        },
        Some(Item::Cond(Condition::Exact {
            field: Some(other),
            value,
        })) if other == field => Ok(value.clone()),
        Some(other) => Err(CompileError::RangeFieldMismatch {
            detail: format!(
                "upper bound must match field '{field}', found {}",
                other.describe()
            ),
        }),
        None => Err(CompileError::RangeFieldMismatch {
            detail: "range is missing its upper bound".to_string(),
        }),
    }
}

fn parse_endpoint(text: &str, kind: FieldKind, reference: NaiveDate) -> Result<Value> {
    match kind {
        FieldKind::Integer => {
            crate::bind::attribute::parse_query_uint(text).map(Value::Uint)
        }
        FieldKind::Date => parse_query_date(text, reference)
            .map(Value::Date)
            .ok_or_else(|| CompileError::InvalidDateValue {
                value: text.to_string(),
            }),
        FieldKind::Text => Err(CompileError::RangeFieldMismatch {
            detail: "text fields cannot be ranged".to_string(),
        }),
    }
}
