use crate::bind::{Item, bind_attributes, bind_ranges};
use crate::error::{CompileError, Result};
use crate::lexer::Lexer;
use crate::lexer::token::{Token, TokenKind};
use crate::limits::CompileLimits;
use crate::reduce::reduce_logic;
use crate::sql;
use chrono::{NaiveDate, Utc};
use model::Schema;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// The emitted filter clause, ready for interpolation after `WHERE`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlClause(String);

impl SqlClause {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SqlClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compiles free-text search expressions into SQLite filter clauses.
///
/// A pure transformation: the compiler owns no I/O and no mutable
/// state, so one instance can serve any number of concurrent callers.
/// Its only dependencies are explicit — the field whitelist, the input
/// caps, and the reference date used to complete partial date literals.
pub struct QueryCompiler {
    schema: Schema,
    limits: CompileLimits,
    reference_date: NaiveDate,
}

impl QueryCompiler {
    pub fn new(schema: Schema) -> Self {
        QueryCompiler {
            schema,
            limits: CompileLimits::default(),
            reference_date: Utc::now().date_naive(),
        }
    }

    pub fn with_limits(mut self, limits: CompileLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Pins the date used to complete `MMDD` literals. Defaults to
    /// today; tests pin it for reproducible clauses.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Tokenize, resolve groups, bind, reduce and render in one step.
    pub fn compile(&self, query: &str) -> Result<SqlClause> {
        let expr = self.parse(query)?;
        let clause = sql::render(&expr, &self.schema)?;
        debug!(clause = %clause, "compiled query");
        Ok(SqlClause(clause))
    }

    /// Runs the pipeline up to the reduced expression tree.
    pub fn parse(&self, query: &str) -> Result<crate::ast::Expr> {
        let len = query.chars().count();
        if len > self.limits.max_input_len {
            return Err(CompileError::InputTooLong {
                len,
                max: self.limits.max_input_len,
            });
        }
        if query.trim().is_empty() {
            return Err(CompileError::EmptyQuery);
        }

        let tokens = Lexer::new(query).tokenize()?;
        debug!(count = tokens.len(), "tokenized query");
        self.compile_tokens(tokens, 0)
    }

    /// The whole pipeline below tokenization. Re-entered for every
    /// parenthesised span so a group is fully compiled before the outer
    /// sequence sees it.
    fn compile_tokens(&self, tokens: Vec<Token>, depth: usize) -> Result<crate::ast::Expr> {
        let items = self.resolve_groups(tokens, depth)?;
        let items = bind_attributes(items, &self.schema, self.reference_date)?;
        let items = bind_ranges(items, &self.schema, self.reference_date)?;
        reduce_logic(items)
    }

    fn resolve_groups(&self, tokens: Vec<Token>, depth: usize) -> Result<Vec<Item>> {
        let mut items = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            match tokens[i].kind {
                TokenKind::LParen => {
                    if depth + 1 > self.limits.max_nesting {
                        return Err(CompileError::MaxNestingExceeded {
                            max: self.limits.max_nesting,
                        });
                    }
                    let close = matching_paren(&tokens, i)?;
                    let inner = tokens[i + 1..close].to_vec();
                    let expr = self.compile_tokens(inner, depth + 1)?;
                    items.push(Item::Group(expr));
                    i = close + 1;
                }
                TokenKind::RParen => return Err(CompileError::UnbalancedParentheses),
                _ => {
                    items.push(Item::Tok(tokens[i].clone()));
                    i += 1;
                }
            }
        }
        Ok(items)
    }
}

/// Index of the `)` matching the `(` at `open`.
fn matching_paren(tokens: &[Token], open: usize) -> Result<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }
    Err(CompileError::UnbalancedParentheses)
}
