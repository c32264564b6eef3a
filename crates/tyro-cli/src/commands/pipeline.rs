// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Shared pipeline helpers.

use std::process;

use tyro_ast::Term;
use tyro_diagnostics::{Diagnostic, ToDiagnostic};

use crate::{output, show_diagnostics, Format};

/// Read a source file or exit with an error.
pub fn read_source(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: reading {}: {}", output::error_label(), output::file_path(path), e);
            process::exit(1);
        }
    }
}

/// Report a failed phase and exit.
pub fn fail(diags: &[Diagnostic], source: &str, path: &str, phase: &str, format: Format) -> ! {
    show_diagnostics(diags, source, path, &phase.to_lowercase(), format);
    if format == Format::Human {
        eprintln!("{}", output::banner_fail(phase, diags.len()));
    }
    process::exit(1);
}

/// Lex and parse a file, exiting on the first failing phase.
pub fn run_frontend(path: &str, format: Format) -> (String, Term) {
    let source = read_source(path);

    let lex_result = tyro_lexer::Lexer::new(&source).tokenize();
    if !lex_result.is_ok() {
        let diags: Vec<Diagnostic> = lex_result.errors.iter().map(|e| e.to_diagnostic()).collect();
        fail(&diags, &source, path, "Lex", format);
    }

    let parse_result = tyro_parser::Parser::new(lex_result.tokens).parse();
    let term = match parse_result.term {
        Some(term) if parse_result.errors.is_empty() => term,
        _ => {
            let diags: Vec<Diagnostic> = parse_result.errors.iter().map(|e| e.to_diagnostic()).collect();
            fail(&diags, &source, path, "Parse", format);
        }
    };

    tracing::debug!(path, bytes = source.len(), "parsed program");
    (source, term)
}
