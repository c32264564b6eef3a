// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Type system and type checker for the Tyro language.
//!
//! Computes the single type of a program term, or reports the first
//! constraint it violates.

mod types;
mod checker;

pub use types::{equal, Param, Type};
pub use checker::{typecheck, typecheck_closed, ErrorKind, TypeChecker, TypeEnv, TypeError};
