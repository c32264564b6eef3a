// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Syntax tree types for the Tyro language.
//!
//! This crate defines the nodes shared between the lexer, parser,
//! type checker, and diagnostics reporter.

pub mod span;
pub mod token;
pub mod term;

pub use span::{LineMap, Span};
pub use term::{ParamDecl, Term, TermBuilder, TermKind, TypeExpr, TypeExprKind};

/// Unique identifier for syntax tree nodes.
///
/// Assigned by whoever builds the tree (the parser or a `TermBuilder`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const DUMMY: NodeId = NodeId(u32::MAX);
}
