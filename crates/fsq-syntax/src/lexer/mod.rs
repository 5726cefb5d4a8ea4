use crate::error::{CompileError, Result};

pub mod token;

use token::{Token, TokenKind};

/// Splits a raw query string into a flat, ordered token sequence.
///
/// Splitting is total except for one case: a quote opened and never
/// closed is `UnterminatedQuote`. Characters with no special meaning
/// accrete into the surrounding `Word`, so non-ASCII input (the index
/// holds Chinese filenames) passes through untouched.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        while let Some(ch) = self.current_char() {
            match ch {
                c if c.is_whitespace() => self.advance(),
                '(' => self.single(TokenKind::LParen),
                ')' => self.single(TokenKind::RParen),
                ':' => self.single(TokenKind::Colon),
                // Longest match: ".." is an operator, a lone "." is word text.
                '.' if self.peek_char(1) == Some('.') => {
                    let start = self.position;
                    self.advance();
                    self.advance();
                    self.tokens
                        .push(Token::new(TokenKind::DotDot, start, self.position));
                }
                '"' => self.read_quoted()?,
                _ => self.read_word(),
            }
        }
        Ok(self.tokens)
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn single(&mut self, kind: TokenKind) {
        let start = self.position;
        self.advance();
        self.tokens.push(Token::new(kind, start, self.position));
    }

    fn read_quoted(&mut self) -> Result<()> {
        let start = self.position;
        self.advance(); // consume opening quote

        let mut text = String::new();
        while let Some(ch) = self.current_char() {
            if ch == '"' {
                self.advance();
                self.tokens
                    .push(Token::new(TokenKind::Quoted(text), start, self.position));
                return Ok(());
            }
            text.push(ch);
            self.advance();
        }

        Err(CompileError::UnterminatedQuote { position: start })
    }

    fn read_word(&mut self) {
        let start = self.position;
        let mut word = String::new();

        while let Some(ch) = self.current_char() {
            let breaks = ch.is_whitespace()
                || matches!(ch, '(' | ')' | ':' | '"')
                || (ch == '.' && self.peek_char(1) == Some('.'));
            if breaks {
                break;
            }
            word.push(ch);
            self.advance();
        }

        // Connectives are whole words only: "ANDY" or "NOTE" stay words.
        let kind = match word.as_str() {
            "AND" => TokenKind::And,
            "OR" => TokenKind::Or,
            "NOT" => TokenKind::Not,
            _ => TokenKind::Word(word),
        };
        self.tokens.push(Token::new(kind, start, self.position));
    }
}

#[cfg(test)]
mod tests;
