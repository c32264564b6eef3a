// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Term (expression) nodes and type annotations.

use crate::{NodeId, Span};

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub id: NodeId,
    pub kind: TermKind,
    pub span: Span,
}

/// The kind of term.
#[derive(Debug, Clone, PartialEq)]
pub enum TermKind {
    /// `true`
    True,
    /// `false`
    False,
    /// Numeric literal
    Number(f64),
    /// `left + right`
    Add {
        left: Box<Term>,
        right: Box<Term>,
    },
    /// `cond ? then_branch : else_branch`
    If {
        cond: Box<Term>,
        then_branch: Box<Term>,
        else_branch: Box<Term>,
    },
    /// Variable reference
    Var(String),
    /// Arrow function `(name: type, ...) => body`
    Func {
        params: Vec<ParamDecl>,
        body: Box<Term>,
    },
    /// Application `callee(args...)`
    Call {
        callee: Box<Term>,
        args: Vec<Term>,
    },
    /// `body; rest`
    Seq {
        body: Box<Term>,
        rest: Box<Term>,
    },
    /// `const name = init; rest`
    Const {
        name: String,
        init: Box<Term>,
        rest: Box<Term>,
    },
}

impl TermKind {
    /// Short description of the node, for messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TermKind::True | TermKind::False => "boolean literal",
            TermKind::Number(_) => "number literal",
            TermKind::Add { .. } => "addition",
            TermKind::If { .. } => "conditional",
            TermKind::Var(_) => "variable",
            TermKind::Func { .. } => "function",
            TermKind::Call { .. } => "call",
            TermKind::Seq { .. } => "sequence",
            TermKind::Const { .. } => "const binding",
        }
    }
}

/// A declared function parameter: `name: type`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDecl {
    pub name: String,
    pub ty: TypeExpr,
    pub span: Span,
}

/// A type annotation as written in source.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeExpr {
    pub kind: TypeExprKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeExprKind {
    /// `boolean`
    Boolean,
    /// `number`
    Number,
    /// `(name: type, ...) => type`
    Function {
        params: Vec<ParamDecl>,
        ret: Box<TypeExpr>,
    },
}

impl TypeExpr {
    pub fn boolean() -> Self {
        Self { kind: TypeExprKind::Boolean, span: Span::DUMMY }
    }

    pub fn number() -> Self {
        Self { kind: TypeExprKind::Number, span: Span::DUMMY }
    }

    pub fn function(params: Vec<ParamDecl>, ret: TypeExpr) -> Self {
        Self {
            kind: TypeExprKind::Function { params, ret: Box::new(ret) },
            span: Span::DUMMY,
        }
    }
}

impl ParamDecl {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self { name: name.into(), ty, span: Span::DUMMY }
    }
}

// ============================================================================
// Programmatic construction
// ============================================================================

/// Builds terms without source text, handing out fresh node ids.
///
/// Every term gets `Span::DUMMY`.
#[derive(Debug, Default)]
pub struct TermBuilder {
    next_node_id: u32,
}

impl TermBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    fn make(&mut self, kind: TermKind) -> Term {
        Term { id: self.next_id(), kind, span: Span::DUMMY }
    }

    pub fn boolean(&mut self, value: bool) -> Term {
        self.make(if value { TermKind::True } else { TermKind::False })
    }

    pub fn number(&mut self, value: f64) -> Term {
        self.make(TermKind::Number(value))
    }

    pub fn add(&mut self, left: Term, right: Term) -> Term {
        self.make(TermKind::Add { left: Box::new(left), right: Box::new(right) })
    }

    pub fn if_else(&mut self, cond: Term, then_branch: Term, else_branch: Term) -> Term {
        self.make(TermKind::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    pub fn var(&mut self, name: impl Into<String>) -> Term {
        self.make(TermKind::Var(name.into()))
    }

    pub fn func(&mut self, params: Vec<ParamDecl>, body: Term) -> Term {
        self.make(TermKind::Func { params, body: Box::new(body) })
    }

    pub fn call(&mut self, callee: Term, args: Vec<Term>) -> Term {
        self.make(TermKind::Call { callee: Box::new(callee), args })
    }

    pub fn seq(&mut self, body: Term, rest: Term) -> Term {
        self.make(TermKind::Seq { body: Box::new(body), rest: Box::new(rest) })
    }

    pub fn constant(&mut self, name: impl Into<String>, init: Term, rest: Term) -> Term {
        self.make(TermKind::Const {
            name: name.into(),
            init: Box::new(init),
            rest: Box::new(rest),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assigns_distinct_ids() {
        let mut b = TermBuilder::new();
        let one = b.number(1.0);
        let two = b.number(2.0);
        let sum = b.add(one, two);

        let TermKind::Add { left, right } = &sum.kind else {
            panic!("expected addition, got {:?}", sum.kind);
        };
        assert_ne!(left.id, right.id);
        assert_ne!(sum.id, left.id);
        assert_eq!(sum.span, Span::DUMMY);
    }

    #[test]
    fn describe_names_the_node() {
        let mut b = TermBuilder::new();
        let t = b.boolean(true);
        let f = b.boolean(false);
        assert_eq!(t.kind, TermKind::True);
        assert_eq!(f.kind.describe(), "boolean literal");
        let cond = b.if_else(t, f.clone(), f);
        assert_eq!(cond.kind.describe(), "conditional");
    }
}
