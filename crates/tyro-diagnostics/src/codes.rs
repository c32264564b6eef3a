// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Error code registry.
//!
//! Maps error codes (E0001, E0301, etc.) to titles, categories and
//! explanations. Used by `tyro explain <code>` and for JSON output.

use std::collections::HashMap;

/// Registry of all known error codes.
pub struct ErrorCodeRegistry {
    codes: HashMap<&'static str, ErrorCodeInfo>,
}

/// Information about a single error code.
pub struct ErrorCodeInfo {
    pub code: &'static str,
    pub title: &'static str,
    pub category: ErrorCategory,
    pub description: &'static str,
    /// A small program that triggers the error.
    pub example: &'static str,
}

/// Error category for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    Resolution,
    Type,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Syntax => write!(f, "Syntax"),
            ErrorCategory::Resolution => write!(f, "Resolution"),
            ErrorCategory::Type => write!(f, "Type"),
        }
    }
}

macro_rules! register_codes {
    ($($code:literal => ($title:literal, $cat:expr, $desc:literal, $example:literal)),* $(,)?) => {{
        let mut map = HashMap::new();
        $(
            map.insert($code, ErrorCodeInfo {
                code: $code,
                title: $title,
                category: $cat,
                description: $desc,
                example: $example,
            });
        )*
        map
    }};
}

impl Default for ErrorCodeRegistry {
    fn default() -> Self {
        use ErrorCategory::*;

        Self {
            codes: register_codes! {
                // Lexer errors (E00xx)
                "E0001" => ("unexpected character", Syntax,
                    "The source contains a character that is not part of the language. \
                     Only `+` is available as an operator.",
                    "1 - 2"),
                "E0002" => ("invalid number", Syntax,
                    "A numeric literal could not be read as a finite number.",
                    "1e999"),

                // Parser errors (E01xx)
                "E0100" => ("unexpected token", Syntax,
                    "The parser found a token that cannot appear at this position.",
                    "(x: number) x"),
                "E0101" => ("missing const body", Syntax,
                    "A `const` binding is only visible in the expression that follows it, \
                     so the program cannot end right after the binding.",
                    "const x = 1;"),
                "E0102" => ("unknown type", Syntax,
                    "Parameter annotations must be `boolean`, `number`, or a function type \
                     such as `(x: number) => boolean`.",
                    "(s: string) => s"),

                // Scope errors (E02xx)
                "E0200" => ("unknown variable", Resolution,
                    "A variable is used outside the scope of any binding for it. Names are \
                     bound by function parameters (visible in the body) and by `const` \
                     (visible in the rest of the program).",
                    "(x: number) => y"),

                // Type errors (E03xx)
                "E0300" => ("condition is not boolean", Type,
                    "The condition of `c ? a : b` must have type `boolean`.",
                    "1 ? 2 : 3"),
                "E0301" => ("operand is not a number", Type,
                    "Both operands of `+` must have type `number`.",
                    "1 + true"),
                "E0302" => ("branches have different types", Type,
                    "Both branches of a conditional are checked and must have the same type, \
                     even though only one of them runs.",
                    "true ? 1 : false"),
                "E0303" => ("call of a non-function", Type,
                    "Only values of function type can be called.",
                    "const n = 1; n(2)"),
                "E0304" => ("wrong number of arguments", Type,
                    "A call must pass exactly as many arguments as the function declares \
                     parameters. The count is checked before any argument.",
                    "((x: number) => x)(1, 2)"),
                "E0305" => ("argument type mismatch", Type,
                    "Each argument must have the type of its parameter. Function types \
                     match when their parameter and return types match position by \
                     position; parameter names do not matter.",
                    "((x: boolean) => x)(42)"),
            },
        }
    }
}

impl ErrorCodeRegistry {
    pub fn get(&self, code: &str) -> Option<&ErrorCodeInfo> {
        self.codes.get(code)
    }

    /// All codes, ordered by code.
    pub fn all(&self) -> Vec<&ErrorCodeInfo> {
        let mut all: Vec<&ErrorCodeInfo> = self.codes.values().collect();
        all.sort_by_key(|info| info.code);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_code() {
        let registry = ErrorCodeRegistry::default();
        let info = registry.get("E0305").unwrap();
        assert_eq!(info.category, ErrorCategory::Type);
        assert_eq!(info.title, "argument type mismatch");
        assert!(registry.get("E9999").is_none());
    }

    #[test]
    fn all_is_sorted() {
        let registry = ErrorCodeRegistry::default();
        let codes: Vec<&str> = registry.all().iter().map(|i| i.code).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
        assert_eq!(codes.first(), Some(&"E0001"));
    }
}
