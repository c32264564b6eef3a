// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Type checker error types.

use std::fmt;

use tyro_ast::{Span, Term};

use crate::types::Type;

/// Classification of a type error, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownVariable,
    BooleanExpected,
    NumberExpected,
    BranchMismatch,
    NotAFunction,
    ArityMismatch,
    ParamMismatch,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::UnknownVariable => "UnknownVariable",
            ErrorKind::BooleanExpected => "BooleanExpected",
            ErrorKind::NumberExpected => "NumberExpected",
            ErrorKind::BranchMismatch => "BranchMismatch",
            ErrorKind::NotAFunction => "NotAFunction",
            ErrorKind::ArityMismatch => "ArityMismatch",
            ErrorKind::ParamMismatch => "ParamMismatch",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type error. Each variant carries the offending subterm.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TypeError {
    #[error("unknown variable `{name}`")]
    UnknownVariable {
        name: String,
        /// Names visible where the lookup failed.
        in_scope: Vec<String>,
        term: Term,
    },
    #[error("expected boolean condition, found {found}")]
    BooleanExpected { found: Type, term: Term },
    #[error("expected number, found {found}")]
    NumberExpected { found: Type, term: Term },
    #[error("branches have different types: {then_ty} and {else_ty}")]
    BranchMismatch {
        then_ty: Type,
        else_ty: Type,
        term: Term,
    },
    #[error("type {found} is not a function")]
    NotAFunction { found: Type, term: Term },
    #[error("arity mismatch: expected {expected} arguments, found {found}")]
    ArityMismatch {
        expected: usize,
        found: usize,
        callee: Type,
        term: Term,
    },
    #[error("argument {} for parameter `{param}`: expected {expected}, found {found}", .position + 1)]
    ParamMismatch {
        /// Zero-based argument position.
        position: usize,
        param: String,
        expected: Type,
        found: Type,
        term: Term,
    },
}

impl TypeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TypeError::UnknownVariable { .. } => ErrorKind::UnknownVariable,
            TypeError::BooleanExpected { .. } => ErrorKind::BooleanExpected,
            TypeError::NumberExpected { .. } => ErrorKind::NumberExpected,
            TypeError::BranchMismatch { .. } => ErrorKind::BranchMismatch,
            TypeError::NotAFunction { .. } => ErrorKind::NotAFunction,
            TypeError::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            TypeError::ParamMismatch { .. } => ErrorKind::ParamMismatch,
        }
    }

    /// The subterm the error is reported at.
    pub fn term(&self) -> &Term {
        match self {
            TypeError::UnknownVariable { term, .. }
            | TypeError::BooleanExpected { term, .. }
            | TypeError::NumberExpected { term, .. }
            | TypeError::BranchMismatch { term, .. }
            | TypeError::NotAFunction { term, .. }
            | TypeError::ArityMismatch { term, .. }
            | TypeError::ParamMismatch { term, .. } => term,
        }
    }

    pub fn span(&self) -> Span {
        self.term().span
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}
