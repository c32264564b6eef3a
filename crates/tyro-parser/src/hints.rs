// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Error hints - suggestions for fixing common mistakes.
//!
//! Kept separate from the main parser to avoid clutter.

use tyro_ast::token::TokenKind;

/// Get a hint for an "expected X" error based on context.
pub fn for_expected(expected: &str, found: &TokenKind) -> Option<&'static str> {
    match (expected, found) {
        ("':'", TokenKind::Eq) => Some("use ':' for types, '=' for values"),
        ("':'", _) => Some("parameters need a type: name: number"),

        ("'=>'", _) => Some("arrow functions look like (x: number) => x"),

        ("')'", TokenKind::Eof) => Some("add ')' to close the parenthesis"),
        ("')'", _) => None,

        ("'='", _) => Some("syntax: const name = value; rest"),
        ("';'", _) => Some("end a const binding with ';'"),

        ("expression", TokenKind::Semi) => Some("statement is incomplete"),
        ("expression", TokenKind::Eof) => Some("the program must end with an expression"),
        ("expression", _) => Some("try a value, variable, function, or call"),

        ("a name", TokenKind::Number(_)) => Some("names can't start with a number"),
        ("a name", _) => Some("names start with a letter, '_' or '$'"),

        ("type", _) => Some("types are 'boolean', 'number', or (x: type) => type"),

        ("end of file", TokenKind::Ident(_)) | ("end of file", TokenKind::Number(_)) => {
            Some("separate expressions with ';'")
        }
        ("end of file", TokenKind::FatArrow) => Some("arrow parameters need types: (x: number) => x"),

        _ => None,
    }
}
