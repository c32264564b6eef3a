// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Token definitions for the lexer.

use crate::Span;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Number(f64),
    Bool(bool),

    // Identifier
    Ident(String),

    // Keywords
    Const,

    // Operators
    Plus,
    Question,
    Colon,
    FatArrow,
    Eq,

    // Delimiters
    LParen,
    RParen,
    Comma,
    Semi,

    // Special
    Eof,
}

impl TokenKind {
    /// User-friendly name for error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "a number",
            TokenKind::Bool(_) => "'true' or 'false'",
            TokenKind::Ident(_) => "a name",
            TokenKind::Const => "'const'",
            TokenKind::Plus => "'+'",
            TokenKind::Question => "'?'",
            TokenKind::Colon => "':'",
            TokenKind::FatArrow => "'=>'",
            TokenKind::Eq => "'='",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Semi => "';'",
            TokenKind::Eof => "end of file",
        }
    }
}
