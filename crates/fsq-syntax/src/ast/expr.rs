use crate::ast::condition::Condition;
use serde::Serialize;

/// The reduced logical tree.
///
/// Built bottom-up from a finite token sequence, so it is finite and
/// acyclic by construction. `Group` records explicit parenthesisation
/// from the query so the emitted clause can preserve it even when it is
/// algebraically redundant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Cond(Condition),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Group(Box<Expr>),
}

impl Expr {
    pub fn not(operand: Expr) -> Self {
        Expr::Not(Box::new(operand))
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::Or(Box::new(left), Box::new(right))
    }

    pub fn group(inner: Expr) -> Self {
        Expr::Group(Box::new(inner))
    }
}
