// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Persistent scoped type environment.

use std::collections::HashMap;
use std::rc::Rc;

use crate::types::Type;

/// Immutable mapping from names to types.
///
/// Each extension pushes a new frame that points at its parent, so an
/// extended environment never changes the one it was built from.
#[derive(Debug, Clone, Default)]
pub struct TypeEnv {
    frame: Option<Rc<Frame>>,
}

#[derive(Debug)]
struct Frame {
    bindings: HashMap<String, Type>,
    parent: Option<Rc<Frame>>,
}

impl TypeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently applied binding for `name`.
    pub fn lookup(&self, name: &str) -> Option<&Type> {
        let mut frame = self.frame.as_deref();
        while let Some(f) = frame {
            if let Some(ty) = f.bindings.get(name) {
                return Some(ty);
            }
            frame = f.parent.as_deref();
        }
        None
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// New environment with `bindings` applied left to right on top of this one.
    /// A name repeated within `bindings` keeps its last type.
    pub fn extend(&self, bindings: impl IntoIterator<Item = (String, Type)>) -> TypeEnv {
        let mut frame_bindings = HashMap::new();
        for (name, ty) in bindings {
            frame_bindings.insert(name, ty);
        }
        if frame_bindings.is_empty() {
            return self.clone();
        }
        TypeEnv {
            frame: Some(Rc::new(Frame {
                bindings: frame_bindings,
                parent: self.frame.clone(),
            })),
        }
    }

    pub fn bind(&self, name: impl Into<String>, ty: Type) -> TypeEnv {
        self.extend([(name.into(), ty)])
    }

    /// Every visible name, innermost scope first, without duplicates.
    pub fn names(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        let mut frame = self.frame.as_deref();
        while let Some(f) = frame {
            let mut local: Vec<&str> = f.bindings.keys().map(String::as_str).collect();
            local.sort_unstable();
            for name in local {
                if !out.contains(&name) {
                    out.push(name);
                }
            }
            frame = f.parent.as_deref();
        }
        out
    }

    /// Number of scope frames.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut frame = self.frame.as_deref();
        while let Some(f) = frame {
            depth += 1;
            frame = f.parent.as_deref();
        }
        depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_env_has_nothing() {
        let env = TypeEnv::new();
        assert!(env.lookup("x").is_none());
        assert_eq!(env.depth(), 0);
        assert!(env.names().is_empty());
    }

    #[test]
    fn extension_does_not_touch_parent() {
        let outer = TypeEnv::new().bind("x", Type::Number);
        let inner = outer.bind("y", Type::Boolean);
        assert_eq!(inner.lookup("y"), Some(&Type::Boolean));
        assert_eq!(inner.lookup("x"), Some(&Type::Number));
        assert!(outer.lookup("y").is_none());
        assert_eq!(outer.depth(), 1);
        assert_eq!(inner.depth(), 2);
    }

    #[test]
    fn inner_binding_shadows_outer() {
        let outer = TypeEnv::new().bind("x", Type::Number);
        let inner = outer.bind("x", Type::Boolean);
        assert_eq!(inner.lookup("x"), Some(&Type::Boolean));
        assert_eq!(outer.lookup("x"), Some(&Type::Number));
    }

    #[test]
    fn repeated_name_in_one_extension_is_last_wins() {
        let env = TypeEnv::new().extend([
            ("a".to_string(), Type::Number),
            ("a".to_string(), Type::Boolean),
        ]);
        assert_eq!(env.lookup("a"), Some(&Type::Boolean));
        assert_eq!(env.depth(), 1);
    }

    #[test]
    fn empty_extension_shares_scope() {
        let env = TypeEnv::new().bind("x", Type::Number);
        let same = env.extend(Vec::new());
        assert_eq!(same.depth(), 1);
        assert!(same.contains("x"));
    }

    #[test]
    fn names_innermost_first_deduplicated() {
        let env = TypeEnv::new()
            .extend([("b".to_string(), Type::Number), ("a".to_string(), Type::Number)])
            .bind("c", Type::Boolean)
            .bind("a", Type::Boolean);
        assert_eq!(env.names(), vec!["a", "c", "b"]);
    }
}
