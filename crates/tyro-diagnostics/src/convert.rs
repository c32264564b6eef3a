// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Conversions from phase error types to `Diagnostic`.

use tyro_ast::TermKind;
use tyro_lexer::{LexError, LexErrorKind};
use tyro_parser::{ParseError, ParseErrorKind};
use tyro_types::TypeError;

use crate::suggestions::closest_match;
use crate::{Diagnostic, ToDiagnostic};

// ============================================================================
// Lex Errors
// ============================================================================

impl ToDiagnostic for LexError {
    fn to_diagnostic(&self) -> Diagnostic {
        let (code, label) = match self.kind {
            LexErrorKind::UnexpectedChar => ("E0001", "unexpected character"),
            LexErrorKind::InvalidNumber => ("E0002", "invalid number"),
        };
        let mut diag = Diagnostic::error(&self.message)
            .with_code(code)
            .with_primary(self.span, label);

        if let Some(ref hint) = self.hint {
            diag = diag.with_help(hint.as_str());
        }

        diag
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

impl ToDiagnostic for ParseError {
    fn to_diagnostic(&self) -> Diagnostic {
        let (code, label) = match self.kind {
            ParseErrorKind::UnexpectedToken => ("E0100", "here"),
            ParseErrorKind::MissingConstBody => ("E0101", "expected an expression here"),
            ParseErrorKind::UnknownType => ("E0102", "not a type"),
        };
        let mut diag = Diagnostic::error(&self.message)
            .with_code(code)
            .with_primary(self.span, label);

        if let Some(ref hint) = self.hint {
            diag = diag.with_help(hint.as_str());
        }

        diag
    }
}

// ============================================================================
// Type Errors
// ============================================================================

impl ToDiagnostic for TypeError {
    fn to_diagnostic(&self) -> Diagnostic {
        let span = self.span();
        match self {
            TypeError::UnknownVariable { name, in_scope, .. } => {
                let diag = Diagnostic::error(format!("unknown variable `{}`", name))
                    .with_code("E0200")
                    .with_primary(span, "not found in this scope");
                match closest_match(name, in_scope.iter().map(String::as_str)) {
                    Some(closest) => diag
                        .with_help(format!("did you mean `{}`?", closest))
                        .with_suggestion(span, closest),
                    None if in_scope.is_empty() => diag.with_note("no variables are in scope here"),
                    None => diag,
                }
            }

            TypeError::BooleanExpected { found, .. } => {
                Diagnostic::error(format!("condition must be boolean, found `{}`", found))
                    .with_code("E0300")
                    .with_primary(span, format!("this has type `{}`", found))
            }

            TypeError::NumberExpected { found, .. } => {
                Diagnostic::error(format!("cannot add `{}`", found))
                    .with_code("E0301")
                    .with_primary(span, format!("expected `number`, found `{}`", found))
                    .with_note("`+` is only defined on numbers")
            }

            TypeError::BranchMismatch { then_ty, else_ty, term } => {
                let mut diag = Diagnostic::error("conditional branches have different types")
                    .with_code("E0302");
                if let TermKind::If { then_branch, else_branch, .. } = &term.kind {
                    diag = diag
                        .with_secondary(then_branch.span, format!("this is `{}`", then_ty))
                        .with_secondary(else_branch.span, format!("this is `{}`", else_ty));
                }
                diag.with_primary(span, "branches must agree")
                    .with_note("both branches are checked, even the one that does not run")
            }

            TypeError::NotAFunction { found, .. } => {
                Diagnostic::error(format!("`{}` is not a function", found))
                    .with_code("E0303")
                    .with_primary(span, "called here")
            }

            TypeError::ArityMismatch { expected, found, callee, .. } => {
                let plural = if *expected == 1 { "" } else { "s" };
                Diagnostic::error(format!(
                    "function takes {} argument{} but {} {} supplied",
                    expected,
                    plural,
                    found,
                    if *found == 1 { "was" } else { "were" }
                ))
                .with_code("E0304")
                .with_primary(span, format!("expected {} argument{}", expected, plural))
                .with_note(format!("the function has type `{}`", callee))
            }

            TypeError::ParamMismatch { position, param, expected, found, .. } => {
                Diagnostic::error(format!(
                    "mismatched argument {}: expected `{}`, found `{}`",
                    position + 1,
                    expected,
                    found
                ))
                .with_code("E0305")
                .with_primary(span, format!("expected `{}`", expected))
                .with_note(format!("parameter `{}` is declared as `{}`", param, expected))
            }
        }
    }
}
