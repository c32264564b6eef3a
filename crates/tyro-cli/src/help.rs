// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Help text for CLI commands.

use crate::output;

pub fn print_usage() {
    println!(
        "{} {} - A type checker for a small expression language",
        output::title("Tyro"),
        output::version(env!("CARGO_PKG_VERSION"))
    );
    println!();
    println!(
        "{}: {} {} {}",
        output::section_header("Usage"),
        output::command("tyro"),
        output::arg("<command>"),
        output::arg("[args]")
    );
    println!();
    println!("{}", output::section_header("Commands:"));
    println!("  {} {}     Type check a file and print its type", output::command("check"), output::arg("<file>"));
    println!("  {} {}       Tokenize a file and print tokens", output::command("lex"), output::arg("<file>"));
    println!("  {} {}     Parse a file and print the syntax tree", output::command("parse"), output::arg("<file>"));
    println!("  {} {}   Explain an error code", output::command("explain"), output::arg("[code]"));
    println!("  {}             Show this help", output::command("help"));
    println!("  {}          Show version", output::command("version"));
    println!();
    println!("{}", output::section_header("Options:"));
    println!("  {}   Output format (default: human)", output::arg("--format human|json"));
    println!();
    println!("{}", output::section_header("Environment:"));
    println!("  {}     Log filter, e.g. TYRO_LOG=debug (default: warn)", output::arg("TYRO_LOG"));
    println!("  {}     Disable colors", output::arg("NO_COLOR"));
    println!("  {}  Force colors when piped", output::arg("FORCE_COLOR"));
}
