use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Character offsets [start, end) into the query string.
    pub span: (usize, usize),
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Token {
            kind,
            span: (start, end),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenKind {
    /// Bare word: anything between separators, unrecognized characters
    /// included.
    Word(String),
    /// Double-quoted span, embedded spaces preserved, quotes stripped.
    Quoted(String),

    // Operators
    Colon,  // :
    DotDot, // ..

    // Connectives (uppercase standalone words only)
    And,
    Or,
    Not,

    // Delimiters
    LParen, // (
    RParen, // )
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(w) => write!(f, "{}", w),
            TokenKind::Quoted(s) => write!(f, "\"{}\"", s),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::DotDot => write!(f, ".."),
            TokenKind::And => write!(f, "AND"),
            TokenKind::Or => write!(f, "OR"),
            TokenKind::Not => write!(f, "NOT"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
        }
    }
}
