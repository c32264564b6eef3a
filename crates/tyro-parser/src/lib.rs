// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Parser for the Tyro language.
//!
//! Transforms a token stream into a single `Term`.

mod hints;
mod parser;

pub use parser::{ParseError, ParseErrorKind, ParseResult, Parser};
