// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Per-term typing rules.

use tyro_ast::{Term, TermKind};

use super::env::TypeEnv;
use super::errors::TypeError;
use super::lower::lower_params;
use super::TypeChecker;

use crate::types::{equal, Type};

impl TypeChecker {
    pub(super) fn check_term(&mut self, term: &Term, env: &TypeEnv) -> Result<Type, TypeError> {
        self.visited += 1;
        tracing::trace!(node = term.kind.describe(), id = term.id.0, depth = env.depth(), "check");

        match &term.kind {
            TermKind::True | TermKind::False => Ok(Type::Boolean),
            TermKind::Number(_) => Ok(Type::Number),

            TermKind::Add { left, right } => {
                self.expect_number(left, env)?;
                self.expect_number(right, env)?;
                Ok(Type::Number)
            }

            TermKind::If { cond, then_branch, else_branch } => {
                let cond_ty = self.check_term(cond, env)?;
                if !equal(&cond_ty, &Type::Boolean) {
                    return Err(TypeError::BooleanExpected { found: cond_ty, term: Term::clone(cond) });
                }
                // Both branches are checked even though only one runs.
                let then_ty = self.check_term(then_branch, env)?;
                let else_ty = self.check_term(else_branch, env)?;
                if !equal(&then_ty, &else_ty) {
                    return Err(TypeError::BranchMismatch { then_ty, else_ty, term: term.clone() });
                }
                Ok(then_ty)
            }

            TermKind::Var(name) => match env.lookup(name) {
                Some(ty) => Ok(ty.clone()),
                None => Err(TypeError::UnknownVariable {
                    name: name.clone(),
                    in_scope: env.names().into_iter().map(String::from).collect(),
                    term: term.clone(),
                }),
            },

            TermKind::Func { params, body } => {
                let params = lower_params(params);
                let body_env = env.extend(params.iter().map(|p| (p.name.clone(), p.ty.clone())));
                let ret = self.check_term(body, &body_env)?;
                Ok(Type::function(params, ret))
            }

            TermKind::Call { callee, args } => self.check_call(term, callee, args, env),

            TermKind::Seq { body, rest } => {
                self.check_term(body, env)?;
                self.check_term(rest, env)
            }

            TermKind::Const { name, init, rest } => {
                let init_ty = self.check_term(init, env)?;
                let rest_env = env.bind(name.clone(), init_ty);
                self.check_term(rest, &rest_env)
            }
        }
    }

    fn expect_number(&mut self, operand: &Term, env: &TypeEnv) -> Result<(), TypeError> {
        let ty = self.check_term(operand, env)?;
        if equal(&ty, &Type::Number) {
            Ok(())
        } else {
            Err(TypeError::NumberExpected { found: ty, term: operand.clone() })
        }
    }

    fn check_call(
        &mut self,
        call: &Term,
        callee: &Term,
        args: &[Term],
        env: &TypeEnv,
    ) -> Result<Type, TypeError> {
        let callee_ty = self.check_term(callee, env)?;
        let (params, ret) = match &callee_ty {
            Type::Function { params, ret } => (params, ret),
            Type::Boolean | Type::Number => {
                return Err(TypeError::NotAFunction { found: callee_ty.clone(), term: callee.clone() });
            }
        };

        // Arity is checked before any argument is looked at.
        if args.len() != params.len() {
            return Err(TypeError::ArityMismatch {
                expected: params.len(),
                found: args.len(),
                callee: callee_ty.clone(),
                term: call.clone(),
            });
        }

        for (position, (arg, param)) in args.iter().zip(params).enumerate() {
            let arg_ty = self.check_term(arg, env)?;
            if !equal(&arg_ty, &param.ty) {
                return Err(TypeError::ParamMismatch {
                    position,
                    param: param.name.clone(),
                    expected: param.ty.clone(),
                    found: arg_ty,
                    term: arg.clone(),
                });
            }
        }

        Ok(Type::clone(ret))
    }
}
