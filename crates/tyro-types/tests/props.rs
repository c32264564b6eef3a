// SPDX-License-Identifier: (MIT OR Apache-2.0)
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use tyro_ast::{ParamDecl, Term, TermBuilder, TypeExpr};
use tyro_types::{equal, typecheck, typecheck_closed, Param, Type, TypeEnv};

const NAMES: &[&str] = &["a", "b", "f", "x"];

#[derive(Debug, Clone)]
struct ArbType(Type);

fn gen_type(g: &mut Gen, depth: usize) -> Type {
    let pick = if depth == 0 { u8::arbitrary(g) % 2 } else { u8::arbitrary(g) % 4 };
    match pick {
        0 => Type::Boolean,
        1 => Type::Number,
        _ => {
            let arity = usize::arbitrary(g) % 3;
            let params = (0..arity)
                .map(|_| Param::new(*g.choose(NAMES).unwrap_or(&"p"), gen_type(g, depth - 1)))
                .collect();
            Type::function(params, gen_type(g, depth - 1))
        }
    }
}

impl Arbitrary for ArbType {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbType(gen_type(g, 3))
    }
}

/// Same shape with every parameter renamed.
fn renamed(ty: &Type) -> Type {
    match ty {
        Type::Boolean => Type::Boolean,
        Type::Number => Type::Number,
        Type::Function { params, ret } => Type::function(
            params
                .iter()
                .enumerate()
                .map(|(i, p)| Param::new(format!("{}{}", p.name, i), renamed(&p.ty)))
                .collect(),
            renamed(ret),
        ),
    }
}

#[quickcheck]
fn equal_is_reflexive(a: ArbType) -> bool {
    equal(&a.0, &a.0)
}

#[quickcheck]
fn equal_is_symmetric(a: ArbType, b: ArbType) -> bool {
    equal(&a.0, &b.0) == equal(&b.0, &a.0)
}

#[quickcheck]
fn equal_is_transitive(a: ArbType, b: ArbType, c: ArbType) -> bool {
    !(equal(&a.0, &b.0) && equal(&b.0, &c.0)) || equal(&a.0, &c.0)
}

#[quickcheck]
fn equal_ignores_param_names(a: ArbType) -> bool {
    let once = renamed(&a.0);
    let twice = renamed(&once);
    equal(&a.0, &once) && equal(&once, &twice) && equal(&a.0, &twice)
}

#[quickcheck]
fn partial_eq_agrees_with_equal(a: ArbType, b: ArbType) -> bool {
    (a.0 == b.0) == equal(&a.0, &b.0)
}

// ----------------------------------------------------------------------------
// Checker determinism
// ----------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct ArbTerm(Term);

fn to_type_expr(ty: &Type) -> TypeExpr {
    match ty {
        Type::Boolean => TypeExpr::boolean(),
        Type::Number => TypeExpr::number(),
        Type::Function { params, ret } => TypeExpr::function(
            params.iter().map(|p| ParamDecl::new(p.name.clone(), to_type_expr(&p.ty))).collect(),
            to_type_expr(ret),
        ),
    }
}

fn gen_term(g: &mut Gen, b: &mut TermBuilder, depth: usize) -> Term {
    let pick = if depth == 0 { u8::arbitrary(g) % 3 } else { u8::arbitrary(g) % 9 };
    let name = *g.choose(NAMES).unwrap_or(&"x");
    match pick {
        0 => b.boolean(bool::arbitrary(g)),
        1 => b.number(f64::from(u8::arbitrary(g))),
        2 => b.var(name),
        3 => {
            let (l, r) = (gen_term(g, b, depth - 1), gen_term(g, b, depth - 1));
            b.add(l, r)
        }
        4 => {
            let c = gen_term(g, b, depth - 1);
            let t = gen_term(g, b, depth - 1);
            let e = gen_term(g, b, depth - 1);
            b.if_else(c, t, e)
        }
        5 => {
            let arity = usize::arbitrary(g) % 3;
            let params = (0..arity)
                .map(|_| {
                    let n = *g.choose(NAMES).unwrap_or(&"p");
                    ParamDecl::new(n, to_type_expr(&gen_type(g, 1)))
                })
                .collect();
            let body = gen_term(g, b, depth - 1);
            b.func(params, body)
        }
        6 => {
            let callee = gen_term(g, b, depth - 1);
            let argc = usize::arbitrary(g) % 3;
            let args = (0..argc).map(|_| gen_term(g, b, depth - 1)).collect();
            b.call(callee, args)
        }
        7 => {
            let (body, rest) = (gen_term(g, b, depth - 1), gen_term(g, b, depth - 1));
            b.seq(body, rest)
        }
        _ => {
            let (init, rest) = (gen_term(g, b, depth - 1), gen_term(g, b, depth - 1));
            b.constant(name, init, rest)
        }
    }
}

impl Arbitrary for ArbTerm {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut b = TermBuilder::new();
        ArbTerm(gen_term(g, &mut b, 4))
    }
}

#[quickcheck]
fn typecheck_is_deterministic(t: ArbTerm) -> bool {
    match (typecheck_closed(&t.0), typecheck_closed(&t.0)) {
        (Ok(a), Ok(b)) => a == b && a.to_string() == b.to_string(),
        (Err(a), Err(b)) => a.kind() == b.kind() && a.term().id == b.term().id,
        _ => false,
    }
}

#[quickcheck]
fn extending_env_never_changes_caller(t: ArbTerm) -> bool {
    let env = TypeEnv::new().bind("x", Type::Number);
    let names_before: Vec<String> = env.names().into_iter().map(String::from).collect();
    let _ = typecheck(&t.0, &env);
    let names_after: Vec<String> = env.names().into_iter().map(String::from).collect();
    names_before == names_after && env.lookup("x") == Some(&Type::Number)
}
