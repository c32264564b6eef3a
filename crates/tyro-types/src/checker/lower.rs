// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Lowering of source type annotations to checker types.

use tyro_ast::{ParamDecl, TypeExpr, TypeExprKind};

use crate::types::{Param, Type};

/// Convert an annotation to a `Type`. Annotations are trusted as written.
pub(super) fn lower_type(expr: &TypeExpr) -> Type {
    match &expr.kind {
        TypeExprKind::Boolean => Type::Boolean,
        TypeExprKind::Number => Type::Number,
        TypeExprKind::Function { params, ret } => Type::function(lower_params(params), lower_type(ret)),
    }
}

pub(super) fn lower_params(params: &[ParamDecl]) -> Vec<Param> {
    params
        .iter()
        .map(|p| Param::new(p.name.clone(), lower_type(&p.ty)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowers_nested_function_annotation() {
        let inner = TypeExpr::function(vec![ParamDecl::new("x", TypeExpr::number())], TypeExpr::boolean());
        let outer = TypeExpr::function(vec![ParamDecl::new("f", inner)], TypeExpr::number());
        let ty = lower_type(&outer);
        assert_eq!(ty.to_string(), "(f: (x: number) => boolean) => number");
    }
}
