pub mod ast;
pub mod bind;
pub mod compiler;
pub mod date;
pub mod error;
pub mod lexer;
pub mod limits;
pub mod reduce;
pub mod sql;

pub use ast::{Condition, Expr};
pub use compiler::{QueryCompiler, SqlClause};
pub use error::{CompileError, Result};
pub use lexer::Lexer;
pub use lexer::token::{Token, TokenKind};
pub use limits::CompileLimits;
