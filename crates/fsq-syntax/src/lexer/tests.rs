use super::token::TokenKind;
use super::*;

fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input)
        .tokenize()
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_whitespace_split() {
    assert_eq!(
        kinds("hello world"),
        vec![
            TokenKind::Word("hello".to_string()),
            TokenKind::Word("world".to_string()),
        ]
    );
}

#[test]
fn test_field_scoped_term() {
    assert_eq!(
        kinds("filetype:pdf"),
        vec![
            TokenKind::Word("filetype".to_string()),
            TokenKind::Colon,
            TokenKind::Word("pdf".to_string()),
        ]
    );
}

#[test]
fn test_connective_keywords() {
    assert_eq!(
        kinds("a AND b OR NOT c"),
        vec![
            TokenKind::Word("a".to_string()),
            TokenKind::And,
            TokenKind::Word("b".to_string()),
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::Word("c".to_string()),
        ]
    );
}

#[test]
fn test_keyword_word_boundaries() {
    // Connectives are only recognized as whole uppercase words.
    assert_eq!(kinds("ANDY"), vec![TokenKind::Word("ANDY".to_string())]);
    assert_eq!(kinds("NOTE"), vec![TokenKind::Word("NOTE".to_string())]);
    assert_eq!(kinds("and"), vec![TokenKind::Word("and".to_string())]);
}

#[test]
fn test_dotdot_longest_match() {
    assert_eq!(
        kinds("0..100"),
        vec![
            TokenKind::Word("0".to_string()),
            TokenKind::DotDot,
            TokenKind::Word("100".to_string()),
        ]
    );
    // A lone dot is ordinary word text.
    assert_eq!(
        kinds("v1.2"),
        vec![TokenKind::Word("v1.2".to_string())]
    );
}

#[test]
fn test_parens_split_words() {
    assert_eq!(
        kinds("(a)b"),
        vec![
            TokenKind::LParen,
            TokenKind::Word("a".to_string()),
            TokenKind::RParen,
            TokenKind::Word("b".to_string()),
        ]
    );
}

#[test]
fn test_quoted_span_keeps_spaces() {
    assert_eq!(
        kinds(r#"name:"annual report 2024""#),
        vec![
            TokenKind::Word("name".to_string()),
            TokenKind::Colon,
            TokenKind::Quoted("annual report 2024".to_string()),
        ]
    );
}

#[test]
fn test_unterminated_quote() {
    let err = Lexer::new(r#"name:"oops"#).tokenize().unwrap_err();
    assert!(matches!(
        err,
        CompileError::UnterminatedQuote { position: 5 }
    ));
}

#[test]
fn test_unicode_words_pass_through() {
    assert_eq!(
        kinds("线性代数 期末"),
        vec![
            TokenKind::Word("线性代数".to_string()),
            TokenKind::Word("期末".to_string()),
        ]
    );
}

#[test]
fn test_order_preserved() {
    let tokens = Lexer::new("a (b:c)").tokenize().unwrap();
    let spans: Vec<(usize, usize)> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(spans, vec![(0, 1), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7)]);
}
