// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! End-to-end checks from source text.

use tyro_ast::{Span, Term, TermKind};
use tyro_lexer::Lexer;
use tyro_parser::Parser;
use tyro_types::{typecheck_closed, ErrorKind, Param, Type, TypeError};

fn parse(src: &str) -> Term {
    let lexed = Lexer::new(src).tokenize();
    assert!(lexed.is_ok(), "Lex errors: {:?}", lexed.errors);
    let result = Parser::new(lexed.tokens).parse();
    assert!(result.is_ok(), "Parse errors: {:?}", result.errors);
    result.term.expect("successful parse produces a term")
}

fn check(src: &str) -> Result<Type, TypeError> {
    typecheck_closed(&parse(src))
}

#[test]
fn identity_on_booleans() {
    let ty = check("(x: boolean) => x").unwrap();
    assert_eq!(ty, Type::function(vec![Param::new("x", Type::Boolean)], Type::Boolean));
    match ty {
        Type::Function { params, .. } => assert_eq!(params[0].name, "x"),
        other => panic!("expected function, got {other}"),
    }
}

#[test]
fn apply_number_identity() {
    assert_eq!(check("((x: number) => x)(42)").unwrap(), Type::Number);
}

#[test]
fn apply_boolean_identity_to_number() {
    let err = check("((x: boolean) => x)(42)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParamMismatch);
    assert_eq!(err.term().kind, TermKind::Number(42.0));
    assert_eq!(err.span(), Span::new(20, 22));
}

#[test]
fn const_chain_program() {
    let src = "const add = (x:number,y:number) => x + y; \
               const select = (b:boolean,x:number,y:number) => b ? x : y; \
               const x = add(1, add(2,3)); \
               const y = select(true, x, x); \
               y;";
    assert_eq!(check(src).unwrap(), Type::Number);
}

#[test]
fn sequence_body_failure_surfaces() {
    let err = check("1 + true; 5").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NumberExpected);
    assert_eq!(err.term().kind, TermKind::True);
}

#[test]
fn else_branch_alone_fails() {
    let err = check("true ? 1 : 1 + false").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NumberExpected);
}

#[test]
fn arity_before_arguments() {
    let err = check("((x: number) => x)(true, nope)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArityMismatch);
}

#[test]
fn first_mismatch_wins() {
    let err = check("((a: number, b: number) => a)(true, false)").unwrap_err();
    match err {
        TypeError::ParamMismatch { position, param, .. } => {
            assert_eq!(position, 0);
            assert_eq!(param, "a");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn higher_order_function() {
    let src = "const twice = (f: (n: number) => number, x: number) => f(f(x)); \
               twice((y: number) => y + 1, 3)";
    assert_eq!(check(src).unwrap(), Type::Number);
}

#[test]
fn function_argument_shape_must_match() {
    let src = "const apply = (f: (n: number) => number) => f(1); \
               apply((b: boolean) => 2)";
    let err = check(src).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParamMismatch);
}

#[test]
fn branch_types_must_agree() {
    let err = check("const c = true; c ? 1 : false").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BranchMismatch);
    assert!(matches!(err.term().kind, TermKind::If { .. }));
}

#[test]
fn calling_a_number() {
    let err = check("const n = 3; n(1)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotAFunction);
    assert_eq!(err.term().kind, TermKind::Var("n".to_string()));
}

#[test]
fn unknown_variable_in_body() {
    let err = check("(x: number) => x + y").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownVariable);
    assert_eq!(err.to_string(), "unknown variable `y`");
}

#[test]
fn non_boolean_condition() {
    let err = check("1 ? 2 : 3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BooleanExpected);
}

#[test]
fn curried_function_type_prints() {
    let ty = check("(x: number) => (y: number) => x + y").unwrap();
    assert_eq!(ty.to_string(), "(x: number) => (y: number) => number");
}

#[test]
fn zero_argument_function() {
    assert_eq!(check("(() => true)()").unwrap(), Type::Boolean);
}
