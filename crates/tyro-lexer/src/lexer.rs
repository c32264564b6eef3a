// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The lexer implementation using logos.

use logos::Logos;
use tyro_ast::token::{Token, TokenKind};
use tyro_ast::Span;

/// Raw token type for logos - literal values are parsed in a second pass.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    // === Keywords ===
    #[token("const")]
    Const,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // === Operators (longer first) ===
    #[token("=>")]
    FatArrow,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,

    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,

    // === Comments ===
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    // Block comments nest
    #[token("/*", block_comment)]
    BlockComment,

    // === Literals ===
    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?")]
    Number,

    // === Identifier (must come after keywords) ===
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,
}

/// Skip block comments, handling nesting.
fn block_comment(lexer: &mut logos::Lexer<RawToken>) -> logos::Skip {
    let mut depth = 1;
    let mut chars = lexer.remainder().chars().peekable();
    let mut consumed = 0;

    while depth > 0 {
        match chars.next() {
            Some('/') if chars.peek() == Some(&'*') => {
                chars.next();
                consumed += 2;
                depth += 1;
            }
            Some('*') if chars.peek() == Some(&'/') => {
                chars.next();
                consumed += 2;
                depth -= 1;
            }
            Some(c) => consumed += c.len_utf8(),
            None => break, // unterminated: runs to end of input
        }
    }

    lexer.bump(consumed);
    logos::Skip
}

/// Maximum number of errors to collect before stopping.
const MAX_ERRORS: usize = 20;

/// The lexer for Tyro source code.
pub struct Lexer<'a> {
    source: &'a str,
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, errors: Vec::new() }
    }

    /// Tokenize the entire source, collecting multiple errors.
    pub fn tokenize(&mut self) -> LexResult {
        let mut tokens = Vec::new();
        let mut logos_lexer = RawToken::lexer(self.source);

        while let Some(result) = logos_lexer.next() {
            if self.errors.len() >= MAX_ERRORS {
                break;
            }

            let span = logos_lexer.span();
            let kind = match result {
                Ok(raw) => match convert_token(raw, logos_lexer.slice(), span.start, span.end) {
                    Ok(kind) => kind,
                    Err(e) => {
                        self.errors.push(e);
                        continue;
                    }
                },
                Err(()) => {
                    let ch = self.source[span.start..].chars().next().unwrap_or('?');
                    self.errors.push(LexError::unexpected_char(ch, span.start));
                    continue;
                }
            };

            tokens.push(Token { kind, span: Span::new(span.start, span.end) });
        }

        tokens.push(Token {
            kind: TokenKind::Eof,
            span: Span::new(self.source.len(), self.source.len()),
        });

        LexResult { tokens, errors: std::mem::take(&mut self.errors) }
    }
}

/// Convert a raw logos token to a `TokenKind`, parsing literals.
fn convert_token(raw: RawToken, slice: &str, start: usize, end: usize) -> Result<TokenKind, LexError> {
    Ok(match raw {
        RawToken::Const => TokenKind::Const,
        RawToken::True => TokenKind::Bool(true),
        RawToken::False => TokenKind::Bool(false),
        RawToken::FatArrow => TokenKind::FatArrow,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semi => TokenKind::Semi,
        RawToken::Number => {
            let cleaned: String = slice.chars().filter(|c| *c != '_').collect();
            let value = cleaned
                .parse::<f64>()
                .map_err(|_| LexError::invalid_number(start, end))?;
            if !value.is_finite() {
                return Err(LexError::invalid_number(start, end));
            }
            TokenKind::Number(value)
        }
        RawToken::Ident => TokenKind::Ident(slice.to_string()),
        RawToken::LineComment | RawToken::BlockComment => {
            unreachable!("comments are skipped")
        }
    })
}

/// Result of lexing: tokens plus any errors found.
#[derive(Debug)]
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexResult {
    /// Returns true if lexing completed without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Which lexical rule was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    UnexpectedChar,
    InvalidNumber,
}

/// A lexer error with location and friendly message.
#[derive(Debug, Clone)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub message: String,
    pub hint: Option<String>,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for LexError {}

impl LexError {
    fn unexpected_char(ch: char, pos: usize) -> Self {
        let hint = match ch {
            '-' | '*' | '/' => Some("only '+' is supported on numbers".to_string()),
            '{' | '}' => Some("function bodies are single expressions: (x: number) => x + 1".to_string()),
            _ => None,
        };
        Self {
            kind: LexErrorKind::UnexpectedChar,
            span: Span::new(pos, pos + ch.len_utf8()),
            message: format!("Unexpected character '{}'", ch),
            hint,
        }
    }

    fn invalid_number(start: usize, end: usize) -> Self {
        Self {
            kind: LexErrorKind::InvalidNumber,
            span: Span::new(start, end),
            message: "Invalid number".to_string(),
            hint: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let result = Lexer::new(src).tokenize();
        assert!(result.is_ok(), "Lex errors: {:?}", result.errors);
        result.tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn arrow_function() {
        assert_eq!(
            kinds("(x: number) => x + 1"),
            vec![
                TokenKind::LParen,
                TokenKind::Ident("x".to_string()),
                TokenKind::Colon,
                TokenKind::Ident("number".to_string()),
                TokenKind::RParen,
                TokenKind::FatArrow,
                TokenKind::Ident("x".to_string()),
                TokenKind::Plus,
                TokenKind::Number(1.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keywords_and_literals() {
        assert_eq!(
            kinds("const b = true ? 1_000 : 2.5e1;"),
            vec![
                TokenKind::Const,
                TokenKind::Ident("b".to_string()),
                TokenKind::Eq,
                TokenKind::Bool(true),
                TokenKind::Question,
                TokenKind::Number(1000.0),
                TokenKind::Colon,
                TokenKind::Number(25.0),
                TokenKind::Semi,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keyword_prefix_is_identifier() {
        assert_eq!(
            kinds("constant trueish"),
            vec![
                TokenKind::Ident("constant".to_string()),
                TokenKind::Ident("trueish".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            kinds("1 // one\n/* outer /* inner */ still comment */ + 2"),
            vec![TokenKind::Number(1.0), TokenKind::Plus, TokenKind::Number(2.0), TokenKind::Eof]
        );
    }

    #[test]
    fn spans_cover_source() {
        let result = Lexer::new("f(42)").tokenize();
        let spans: Vec<_> = result.tokens.iter().map(|t| (t.span.start, t.span.end)).collect();
        assert_eq!(spans, vec![(0, 1), (1, 2), (2, 4), (4, 5), (5, 5)]);
    }

    #[test]
    fn unexpected_character_is_reported_and_skipped() {
        let result = Lexer::new("1 - 2").tokenize();
        assert_eq!(result.errors.len(), 1);
        let err = &result.errors[0];
        assert_eq!(err.kind, LexErrorKind::UnexpectedChar);
        assert_eq!(err.span, Span::new(2, 3));
        assert!(err.hint.is_some());
        assert_eq!(result.tokens.len(), 3); // 1, 2, EOF
    }
}
