// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Type definitions for the type system.

use std::fmt;

/// A type in Tyro.
///
/// Compared structurally with [`equal`]; parameter names never matter.
#[derive(Debug, Clone)]
pub enum Type {
    Boolean,
    Number,
    /// Function with positional parameters.
    Function { params: Vec<Param>, ret: Box<Type> },
}

/// A function parameter. Position is significant, the name is informational.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: Type,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self { name: name.into(), ty }
    }
}

impl Type {
    pub fn function(params: Vec<Param>, ret: Type) -> Self {
        Type::Function { params, ret: Box::new(ret) }
    }
}

/// Structural type equality.
///
/// Every tag of the left operand is listed, so a new variant fails to
/// compile here until it is given an equality rule.
pub fn equal(a: &Type, b: &Type) -> bool {
    match (a, b) {
        (Type::Boolean, Type::Boolean) => true,
        (Type::Boolean, _) => false,
        (Type::Number, Type::Number) => true,
        (Type::Number, _) => false,
        (
            Type::Function { params: pa, ret: ra },
            Type::Function { params: pb, ret: rb },
        ) => {
            pa.len() == pb.len()
                && pa.iter().zip(pb).all(|(x, y)| equal(&x.ty, &y.ty))
                && equal(ra, rb)
        }
        (Type::Function { .. }, _) => false,
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        equal(self, other)
    }
}

impl Eq for Type {}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => write!(f, "boolean"),
            Type::Number => write!(f, "number"),
            Type::Function { params, ret } => {
                write!(f, "(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", p)?;
                }
                write!(f, ") => {}", ret)
            }
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num_to_num(name: &str) -> Type {
        Type::function(vec![Param::new(name, Type::Number)], Type::Number)
    }

    #[test]
    fn primitives() {
        assert!(equal(&Type::Boolean, &Type::Boolean));
        assert!(equal(&Type::Number, &Type::Number));
        assert!(!equal(&Type::Boolean, &Type::Number));
        assert!(!equal(&Type::Number, &Type::Boolean));
    }

    #[test]
    fn function_vs_primitive_is_symmetric() {
        let f = num_to_num("x");
        assert!(!equal(&f, &Type::Number));
        assert!(!equal(&Type::Number, &f));
        assert!(!equal(&f, &Type::Boolean));
        assert!(!equal(&Type::Boolean, &f));
    }

    #[test]
    fn param_names_are_ignored() {
        assert!(equal(&num_to_num("x"), &num_to_num("y")));
    }

    #[test]
    fn arity_matters() {
        let two = Type::function(
            vec![Param::new("x", Type::Number), Param::new("y", Type::Number)],
            Type::Number,
        );
        assert!(!equal(&num_to_num("x"), &two));
        assert!(!equal(&two, &num_to_num("x")));
    }

    #[test]
    fn param_order_matters() {
        let a = Type::function(
            vec![Param::new("a", Type::Number), Param::new("b", Type::Boolean)],
            Type::Number,
        );
        let b = Type::function(
            vec![Param::new("a", Type::Boolean), Param::new("b", Type::Number)],
            Type::Number,
        );
        assert_ne!(a, b);
    }

    #[test]
    fn return_type_matters() {
        let a = num_to_num("x");
        let b = Type::function(vec![Param::new("x", Type::Number)], Type::Boolean);
        assert_ne!(a, b);
    }

    #[test]
    fn nested_functions() {
        let higher = |inner: Type| Type::function(vec![Param::new("f", inner)], Type::Boolean);
        assert_eq!(higher(num_to_num("x")), higher(num_to_num("z")));
        assert_ne!(higher(num_to_num("x")), higher(Type::Number));
    }

    #[test]
    fn display_surface_syntax() {
        assert_eq!(Type::Boolean.to_string(), "boolean");
        assert_eq!(num_to_num("x").to_string(), "(x: number) => number");
        let curried = Type::function(vec![Param::new("f", num_to_num("x"))], num_to_num("y"));
        assert_eq!(curried.to_string(), "(f: (x: number) => number) => (y: number) => number");
        assert_eq!(Type::function(vec![], Type::Boolean).to_string(), "() => boolean");
    }
}
