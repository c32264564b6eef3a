// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Type checker implementation.

use tyro_ast::Term;

use crate::types::Type;

mod env;
mod errors;
mod lower;
mod check_term;

pub use env::TypeEnv;
pub use errors::{ErrorKind, TypeError};

/// Single-pass checker state.
///
/// Holds no scope of its own: scopes travel down the recursion as
/// [`TypeEnv`] values.
#[derive(Debug, Default)]
pub struct TypeChecker {
    /// Nodes visited so far.
    pub(super) visited: usize,
}

impl TypeChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes visited by this checker.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Check `term` under `env`, stopping at the first error.
    pub fn check(&mut self, term: &Term, env: &TypeEnv) -> Result<Type, TypeError> {
        self.check_term(term, env)
    }
}

/// Type check a term in the given environment.
pub fn typecheck(term: &Term, env: &TypeEnv) -> Result<Type, TypeError> {
    let mut checker = TypeChecker::new();
    let result = checker.check(term, env);
    match &result {
        Ok(ty) => tracing::debug!(visited = checker.visited, %ty, "typecheck succeeded"),
        Err(e) => tracing::debug!(visited = checker.visited, kind = %e.kind(), error = %e, "typecheck failed"),
    }
    result
}

/// Type check a term with no free variables.
pub fn typecheck_closed(term: &Term) -> Result<Type, TypeError> {
    typecheck(term, &TypeEnv::new())
}
