// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Phase inspection commands: lex, parse.

use tyro_diagnostics::json;
use tyro_diagnostics::{Diagnostic, ToDiagnostic};

use super::pipeline::{fail, read_source, run_frontend};
use crate::{output, Format};

pub fn cmd_lex(path: &str, format: Format) {
    let source = read_source(path);
    let result = tyro_lexer::Lexer::new(&source).tokenize();

    if !result.is_ok() {
        let diags: Vec<Diagnostic> = result.errors.iter().map(|e| e.to_diagnostic()).collect();
        fail(&diags, &source, path, "Lex", format);
    }

    match format {
        Format::Human => {
            println!("{}\n", output::section(&format!("Tokens ({})", result.tokens.len())));
            for tok in &result.tokens {
                println!("{:4}:{:<3} {:?}", tok.span.start, tok.span.end, tok.kind);
            }
            println!("\n{}", output::banner_ok(&format!("Lex: {} tokens", result.tokens.len())));
        }
        Format::Json => print_ok_report(&source, path, "lex"),
    }
}

pub fn cmd_parse(path: &str, format: Format) {
    let (source, term) = run_frontend(path, format);

    match format {
        Format::Human => {
            println!("{}\n", output::section(&format!("Syntax tree ({})", term.kind.describe())));
            println!("{:#?}", term);
            println!("\n{}", output::banner_ok("Parse"));
        }
        Format::Json => print_ok_report(&source, path, "parse"),
    }
}

fn print_ok_report(source: &str, path: &str, phase: &str) {
    let report = json::to_json_report(&[], source, path, phase);
    println!("{}", json::to_json_string(&report));
}
