// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The parser implementation using Pratt parsing for expressions.

use tyro_ast::term::{ParamDecl, Term, TermKind, TypeExpr, TypeExprKind};
use tyro_ast::token::{Token, TokenKind};
use tyro_ast::{NodeId, Span};

/// Binding power of postfix call `f(...)`.
const CALL_BP: u8 = 20;

/// The parser for Tyro source code.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Counter for generating unique NodeIds
    next_node_id: u32,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token { kind: TokenKind::Eof, span: Span::new(end, end) });
        }
        Self { tokens, pos: 0, next_node_id: 0 }
    }

    fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    fn node(&mut self, kind: TermKind, span: Span) -> Term {
        Term { id: self.next_id(), kind, span }
    }

    /// Parse a whole program. A program is exactly one term.
    pub fn parse(&mut self) -> ParseResult {
        match self.parse_program() {
            Ok(term) => ParseResult { term: Some(term), errors: Vec::new() },
            Err(e) => ParseResult { term: None, errors: vec![e] },
        }
    }

    // =========================================================================
    // Token Navigation
    // =========================================================================

    fn current(&self) -> &Token {
        // `new` guarantees a trailing Eof.
        &self.tokens[self.pos.min(self.tokens.len().saturating_sub(1))]
    }

    fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    fn peek(&self, n: usize) -> &TokenKind {
        self.tokens.get(self.pos + n).map(|t| &t.kind).unwrap_or(&TokenKind::Eof)
    }

    fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    fn advance(&mut self) -> Span {
        let span = self.current().span;
        if !self.at_end() {
            self.pos += 1;
        }
        span
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(kind.display_name(), self.current_kind(), self.current().span))
        }
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.current_kind().clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(ParseError::expected("a name", self.current_kind(), self.current().span)),
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn parse_program(&mut self) -> Result<Term, ParseError> {
        let term = self.parse_stmts()?;
        if !self.at_end() {
            return Err(ParseError::expected("end of file", self.current_kind(), self.current().span));
        }
        Ok(term)
    }

    fn is_stmt_start(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Const
                | TokenKind::Number(_)
                | TokenKind::Bool(_)
                | TokenKind::Ident(_)
                | TokenKind::LParen
        )
    }

    /// `const name = init; rest` | `expr (; rest)?`
    fn parse_stmts(&mut self) -> Result<Term, ParseError> {
        let start = self.current().span.start;

        if self.match_token(&TokenKind::Const) {
            let name = self.expect_ident()?;
            self.expect(&TokenKind::Eq)?;
            let init = self.parse_expr()?;
            self.expect(&TokenKind::Semi)?;
            if !self.is_stmt_start() {
                return Err(ParseError::missing_const_body(&name, self.current_kind(), self.current().span));
            }
            let rest = self.parse_stmts()?;
            let span = Span::new(start, rest.span.end);
            return Ok(self.node(
                TermKind::Const { name, init: Box::new(init), rest: Box::new(rest) },
                span,
            ));
        }

        let body = self.parse_expr()?;
        if self.match_token(&TokenKind::Semi) && self.is_stmt_start() {
            let rest = self.parse_stmts()?;
            let span = Span::new(start, rest.span.end);
            return Ok(self.node(TermKind::Seq { body: Box::new(body), rest: Box::new(rest) }, span));
        }
        Ok(body)
    }

    // =========================================================================
    // Expression Parsing (Pratt Parser)
    // =========================================================================

    pub fn parse_expr(&mut self) -> Result<Term, ParseError> {
        self.parse_expr_bp(0)
    }

    /// Infix binding powers: `+` is left-associative, `? :` right-associative.
    fn infix_bp(&self) -> Option<(u8, u8)> {
        match self.current_kind() {
            TokenKind::Plus => Some((10, 11)),
            TokenKind::Question => Some((2, 1)),
            _ => None,
        }
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Term, ParseError> {
        let start = self.current().span.start;
        let mut lhs = self.parse_prefix()?;

        loop {
            if self.check(&TokenKind::LParen) {
                if CALL_BP < min_bp {
                    break;
                }
                lhs = self.parse_call(lhs)?;
                continue;
            }

            let Some((l_bp, r_bp)) = self.infix_bp() else { break };
            if l_bp < min_bp {
                break;
            }

            if self.match_token(&TokenKind::Question) {
                let then_branch = self.parse_expr_bp(0)?;
                self.expect(&TokenKind::Colon)?;
                let else_branch = self.parse_expr_bp(r_bp)?;
                let span = Span::new(start, else_branch.span.end);
                lhs = self.node(
                    TermKind::If {
                        cond: Box::new(lhs),
                        then_branch: Box::new(then_branch),
                        else_branch: Box::new(else_branch),
                    },
                    span,
                );
                continue;
            }

            self.advance(); // '+'
            let rhs = self.parse_expr_bp(r_bp)?;
            let span = Span::new(start, rhs.span.end);
            lhs = self.node(TermKind::Add { left: Box::new(lhs), right: Box::new(rhs) }, span);
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<Term, ParseError> {
        match self.current_kind().clone() {
            TokenKind::Number(n) => {
                let span = self.advance();
                Ok(self.node(TermKind::Number(n), span))
            }
            TokenKind::Bool(b) => {
                let span = self.advance();
                let kind = if b { TermKind::True } else { TermKind::False };
                Ok(self.node(kind, span))
            }
            TokenKind::Ident(name) => {
                let span = self.advance();
                Ok(self.node(TermKind::Var(name), span))
            }
            TokenKind::LParen if self.looks_like_arrow() => self.parse_arrow(),
            TokenKind::LParen => {
                let open = self.advance();
                let mut inner = self.parse_expr()?;
                let close = self.expect(&TokenKind::RParen)?;
                inner.span = open.to(close);
                Ok(inner)
            }
            _ => Err(ParseError::expected("expression", self.current_kind(), self.current().span)),
        }
    }

    /// `(` starts an arrow when followed by `) =>` or `name :`.
    fn looks_like_arrow(&self) -> bool {
        matches!(
            (self.peek(1), self.peek(2)),
            (TokenKind::RParen, TokenKind::FatArrow) | (TokenKind::Ident(_), TokenKind::Colon)
        )
    }

    fn parse_arrow(&mut self) -> Result<Term, ParseError> {
        let start = self.current().span.start;
        self.expect(&TokenKind::LParen)?;
        let params = self.parse_params()?;
        self.expect(&TokenKind::RParen)?;
        self.expect(&TokenKind::FatArrow)?;
        let body = self.parse_expr()?;
        let span = Span::new(start, body.span.end);
        Ok(self.node(TermKind::Func { params, body: Box::new(body) }, span))
    }

    /// Parameter list between parentheses (the parens themselves are not consumed).
    fn parse_params(&mut self) -> Result<Vec<ParamDecl>, ParseError> {
        let mut params = Vec::new();
        while !self.check(&TokenKind::RParen) {
            let start = self.current().span.start;
            let name = self.expect_ident()?;
            self.expect(&TokenKind::Colon)?;
            let ty = self.parse_type()?;
            let span = Span::new(start, ty.span.end);
            params.push(ParamDecl { name, ty, span });
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }
        Ok(params)
    }

    fn parse_call(&mut self, callee: Term) -> Result<Term, ParseError> {
        let start = callee.span;
        self.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        while !self.check(&TokenKind::RParen) {
            args.push(self.parse_expr()?);
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }
        let close = self.expect(&TokenKind::RParen)?;
        let span = start.to(close);
        Ok(self.node(TermKind::Call { callee: Box::new(callee), args }, span))
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn parse_type(&mut self) -> Result<TypeExpr, ParseError> {
        let start = self.current().span.start;
        match self.current_kind().clone() {
            TokenKind::Ident(name) => {
                let span = self.advance();
                let kind = match name.as_str() {
                    "boolean" => TypeExprKind::Boolean,
                    "number" => TypeExprKind::Number,
                    _ => return Err(ParseError::unknown_type(&name, span)),
                };
                Ok(TypeExpr { kind, span })
            }
            TokenKind::LParen => {
                self.advance();
                let params = self.parse_params()?;
                self.expect(&TokenKind::RParen)?;
                self.expect(&TokenKind::FatArrow)?;
                let ret = self.parse_type()?;
                let span = Span::new(start, ret.span.end);
                Ok(TypeExpr { kind: TypeExprKind::Function { params, ret: Box::new(ret) }, span })
            }
            _ => Err(ParseError::expected("type", self.current_kind(), self.current().span)),
        }
    }
}

/// Result of parsing: the program term, or the errors that prevented it.
#[derive(Debug)]
pub struct ParseResult {
    pub term: Option<Term>,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Returns true if parsing completed without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Which syntactic rule was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnexpectedToken,
    MissingConstBody,
    UnknownType,
}

/// A parser error with location and friendly message.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub message: String,
    pub hint: Option<String>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    fn expected(expected: &str, found: &TokenKind, span: Span) -> Self {
        let message = format_expected_message(expected, found);
        let hint = crate::hints::for_expected(expected, found).map(String::from);
        Self { kind: ParseErrorKind::UnexpectedToken, span, message, hint }
    }

    fn missing_const_body(name: &str, found: &TokenKind, span: Span) -> Self {
        Self {
            kind: ParseErrorKind::MissingConstBody,
            span,
            message: format!(
                "Expected expression after `const {}` binding, found {}",
                name,
                found.display_name()
            ),
            hint: Some(format!("a const binding needs a body that uses it, e.g. `const {} = ...; {}`", name, name)),
        }
    }

    fn unknown_type(name: &str, span: Span) -> Self {
        Self {
            kind: ParseErrorKind::UnknownType,
            span,
            message: format!("Unknown type `{}`", name),
            hint: crate::hints::for_expected("type", &TokenKind::Ident(name.to_string())).map(String::from),
        }
    }
}

/// Format a user-friendly "expected X, found Y" message.
fn format_expected_message(expected: &str, found: &TokenKind) -> String {
    match expected {
        "')'" if matches!(found, TokenKind::Eof) => "Unclosed '(' - missing ')'".to_string(),
        "a name" => format!("Expected name, found {}", found.display_name()),
        "expression" => format!("Expected expression, found {}", found.display_name()),
        "type" => format!("Expected type, found {}", found.display_name()),
        _ => format!("Expected {}, found {}", expected, found.display_name()),
    }
}
