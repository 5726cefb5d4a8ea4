use crate::ast::{Condition, Expr};
use crate::error::{CompileError, Result};
use chrono::NaiveDate;
use model::{Schema, Value};

/// Emits the expression tree as a SQLite boolean clause.
///
/// Column names come only from the schema whitelist, operators only
/// from the condition kind, and every literal slot is re-serialized
/// through a kind-specific escaper. No raw query token reaches the
/// output in a structural position.
pub fn render(expr: &Expr, schema: &Schema) -> Result<String> {
    let mut out = String::new();
    render_expr(expr, schema, &mut out)?;
    Ok(out)
}

fn render_expr(expr: &Expr, schema: &Schema, out: &mut String) -> Result<()> {
    match expr {
        Expr::Cond(cond) => render_condition(cond, schema, out),
        Expr::Not(operand) => {
            out.push_str("NOT ");
            // A bare AND/OR under NOT would rebind in SQL.
            render_child(operand, matches!(**operand, Expr::And(..) | Expr::Or(..)), schema, out)
        }
        Expr::And(left, right) => {
            render_child(left, matches!(**left, Expr::Or(..)), schema, out)?;
            out.push_str(" AND ");
            render_child(right, matches!(**right, Expr::Or(..)), schema, out)
        }
        Expr::Or(left, right) => {
            render_expr(left, schema, out)?;
            out.push_str(" OR ");
            render_expr(right, schema, out)
        }
        // Explicit parentheses from the query are always preserved.
        Expr::Group(inner) => {
            out.push('(');
            render_expr(inner, schema, out)?;
            out.push(')');
            Ok(())
        }
    }
}

fn render_child(child: &Expr, parens: bool, schema: &Schema, out: &mut String) -> Result<()> {
    if parens {
        out.push('(');
        render_expr(child, schema, out)?;
        out.push(')');
        Ok(())
    } else {
        render_expr(child, schema, out)
    }
}

fn render_condition(cond: &Condition, schema: &Schema, out: &mut String) -> Result<()> {
    match cond {
        Condition::Exact { field, value } => {
            let column = column_for(field.as_deref(), schema)?;
            match value {
                // A date equals a whole indexed day: the Time column
                // holds epoch seconds.
                Value::Date(date) => out.push_str(&epoch_window(
                    column,
                    epoch_utc(*date),
                    epoch_utc(next_day(*date)),
                )),
                Value::Str(s) => {
                    out.push_str(column);
                    out.push_str(" = ");
                    out.push_str(&text_literal(s));
                }
                Value::Uint(n) => {
                    out.push_str(column);
                    out.push_str(" = ");
                    out.push_str(&n.to_string());
                }
            }
        }
        Condition::Contains { field, value } => {
            let column = column_for(field.as_deref(), schema)?;
            out.push_str(column);
            out.push_str(" LIKE ");
            out.push_str(&like_literal(value));
        }
        Condition::Range { field, low, high } => {
            let column = column_for(Some(field), schema)?;
            out.push_str(&epoch_window(column, bound(low), bound(high)));
        }
    }
    Ok(())
}

/// Resolves a query field name (or the default) to its store column.
fn column_for<'a>(field: Option<&str>, schema: &'a Schema) -> Result<&'a str> {
    match field {
        None => Ok(schema.default_column()),
        Some(name) => schema
            .field(name)
            .map(|spec| spec.column.as_str())
            .ok_or_else(|| CompileError::UnknownField {
                name: name.to_string(),
            }),
    }
}

/// `(col >= low AND col < high)` — inclusive lower, exclusive upper.
fn epoch_window(column: &str, low: i64, high: i64) -> String {
    format!("({column} >= {low} AND {column} < {high})")
}

fn bound(value: &Value) -> i64 {
    match value {
        Value::Uint(n) => *n as i64,
        Value::Date(d) => epoch_utc(*d),
        Value::Str(_) => unreachable!("range binder admits only numeric and date endpoints"),
    }
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// Epoch seconds at UTC midnight; the indexer records `st_mtime`.
fn epoch_utc(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(0)
}

/// SQLite string literal: single quotes, embedded quotes doubled.
fn text_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// `'%pattern%' ESCAPE '\'` with LIKE metacharacters escaped inside the
/// pattern so user text always matches literally.
fn like_literal(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("{} ESCAPE '\\'", text_literal(&format!("%{escaped}%")))
}
