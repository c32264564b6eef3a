// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Tool commands: explain.

use std::process;

use colored::Colorize;
use tyro_diagnostics::codes::ErrorCodeRegistry;

use crate::output;

/// Explain one error code, or list every code when none is given.
pub fn cmd_explain(code: Option<&str>) {
    let registry = ErrorCodeRegistry::default();

    let Some(code) = code else {
        println!("{}", output::section_header("Error codes:"));
        for info in registry.all() {
            println!("  {}  {:<10} {}", info.code.red().bold(), info.category.to_string(), info.title);
        }
        println!();
        println!("Run `tyro explain <code>` for details.");
        return;
    };

    let normalized = code.to_ascii_uppercase();
    let Some(info) = registry.get(&normalized) else {
        eprintln!("{}: unknown error code `{}`", output::error_label(), code);
        eprintln!();
        eprintln!("Error codes use the format E0NNN (e.g., E0301, E0305).");
        eprintln!("Run `tyro explain` to list them.");
        process::exit(1);
    };

    println!("{}[{}]: {}", "error".red().bold(), info.code.red().bold(), info.title.bold());
    println!();
    println!("  Category: {}", info.category);
    println!();
    println!("  {}", info.description);
    println!();
    println!("  {}:", "Example".bold());
    println!();
    for line in info.example.lines() {
        println!("    {}", line);
    }
    println!();
    println!("  Run `tyro check <file>` to see this error in context.");
}
