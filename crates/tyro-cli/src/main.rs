// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Tyro CLI - phase inspection and type checking for Tyro programs.

mod commands;
mod help;
mod output;

use std::env;
use std::process;

use tracing_subscriber::EnvFilter;
use tyro_diagnostics::formatter::DiagnosticFormatter;
use tyro_diagnostics::json;
use tyro_diagnostics::Diagnostic;

/// How diagnostics and results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Human,
    Json,
}

impl Format {
    fn parse(value: &str) -> Option<Format> {
        match value {
            "human" => Some(Format::Human),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Positional arguments plus the output format.
struct CliArgs {
    positional: Vec<String>,
    format: Format,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut positional = Vec::new();
    let mut format = Format::Human;

    while let Some(arg) = raw.next() {
        if arg == "--json" {
            format = Format::Json;
        } else if arg == "--format" {
            let value = raw.next().ok_or("--format needs a value: human or json")?;
            format = Format::parse(&value).ok_or_else(|| format!("unknown format `{}`", value))?;
        } else if let Some(value) = arg.strip_prefix("--format=") {
            format = Format::parse(value).ok_or_else(|| format!("unknown format `{}`", value))?;
        } else {
            positional.push(arg);
        }
    }

    Ok(CliArgs { positional, format })
}

/// Log filter from `TYRO_LOG`, defaulting to warnings only.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("TYRO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() {
    output::init();
    init_tracing();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}: {}", output::error_label(), msg);
            process::exit(1);
        }
    };
    let format = args.format;

    let Some(cmd) = args.positional.first() else {
        help::print_usage();
        return;
    };
    let file_arg = args.positional.get(1).map(String::as_str);

    match cmd.as_str() {
        "lex" => commands::phase::cmd_lex(require_file(file_arg, "lex"), format),
        "parse" => commands::phase::cmd_parse(require_file(file_arg, "parse"), format),
        "check" | "typecheck" => commands::check::cmd_check(require_file(file_arg, "check"), format),
        "explain" => commands::tools::cmd_explain(file_arg),
        "help" | "--help" | "-h" => help::print_usage(),
        "version" | "--version" | "-V" => {
            println!("tyro {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            if other.ends_with(".tyro") {
                commands::check::cmd_check(other, format);
            } else {
                eprintln!("{}: unknown command `{}`", output::error_label(), other);
                eprintln!();
                help::print_usage();
                process::exit(1);
            }
        }
    }
}

fn require_file<'a>(file: Option<&'a str>, cmd: &str) -> &'a str {
    match file {
        Some(path) => path,
        None => {
            eprintln!("Usage: tyro {} <file.tyro> [--format human|json]", cmd);
            process::exit(1);
        }
    }
}

/// Print diagnostics in the requested format.
///
/// Human output goes to stderr, JSON reports to stdout.
pub fn show_diagnostics(diags: &[Diagnostic], source: &str, path: &str, phase: &str, format: Format) {
    match format {
        Format::Human => {
            let formatter = DiagnosticFormatter::new(source).with_file_name(path);
            for diag in diags {
                eprintln!("{}", formatter.format(diag));
            }
        }
        Format::Json => {
            let report = json::to_json_report(diags, source, path, phase);
            println!("{}", json::to_json_string(&report));
        }
    }
}
