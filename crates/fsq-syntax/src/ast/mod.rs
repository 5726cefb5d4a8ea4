pub mod condition;
pub mod expr;

pub use condition::Condition;
pub use expr::Expr;
