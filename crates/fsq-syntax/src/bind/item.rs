use crate::ast::{Condition, Expr};
use crate::lexer::token::{Token, TokenKind};

/// Working element of the binding stages: a still-raw token, a bound
/// condition, or an already compiled parenthesised sub-expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Tok(Token),
    Cond(Condition),
    Group(Expr),
}

impl Item {
    pub fn token_kind(&self) -> Option<&TokenKind> {
        match self {
            Item::Tok(t) => Some(&t.kind),
            _ => None,
        }
    }

    /// Short rendering for error messages.
    pub fn describe(&self) -> String {
        match self {
            Item::Tok(t) => t.kind.to_string(),
            Item::Cond(_) => "a bound condition".to_string(),
            Item::Group(_) => "a parenthesised group".to_string(),
        }
    }
}
