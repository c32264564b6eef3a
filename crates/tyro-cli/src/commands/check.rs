// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The `check` command: lex, parse and type check one file.

use tyro_diagnostics::json;
use tyro_diagnostics::ToDiagnostic;

use super::pipeline::{fail, run_frontend};
use crate::{output, Format};

pub fn cmd_check(path: &str, format: Format) {
    let (source, term) = run_frontend(path, format);

    let ty = match tyro_types::typecheck_closed(&term) {
        Ok(ty) => ty,
        Err(err) => {
            tracing::debug!(kind = %err.kind(), "check failed");
            fail(&[err.to_diagnostic()], &source, path, "Check", format);
        }
    };

    match format {
        Format::Human => {
            println!("{}: {}", path, output::type_name(&ty.to_string()));
        }
        Format::Json => {
            let report = json::to_json_report(&[], &source, path, "check").with_result_type(&ty);
            println!("{}", json::to_json_string(&report));
        }
    }
}
