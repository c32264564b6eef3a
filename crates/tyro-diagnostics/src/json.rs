// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! JSON diagnostic output for machine consumption.
//!
//! Use `--format json` with any tyro command to get this output.

use serde::Serialize;
use tyro_ast::{LineMap, Span};

use crate::codes::ErrorCodeRegistry;
use crate::formatter::split_around;
use crate::{Diagnostic, LabelStyle};

/// A complete JSON diagnostic report for one run over one file.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    /// Schema version for forward compatibility.
    pub version: u32,
    pub file: String,
    /// Whether the run produced no errors.
    pub success: bool,
    /// The phase that produced these diagnostics: "lex", "parse" or "check".
    pub phase: String,
    /// Type of the program, when it checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_type: Option<String>,
    pub diagnostics: Vec<JsonDiagnostic>,
    pub error_count: usize,
}

/// A single diagnostic in JSON form, enriched with source context.
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error category, e.g. "Type".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub message: String,
    /// Primary source location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
    pub labels: Vec<JsonLabel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<JsonSuggestion>,
}

/// A source location with line/column (1-based).
#[derive(Debug, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    pub byte_offset: usize,
    /// The source line text for context.
    pub source_line: String,
}

/// A labeled span in JSON form.
#[derive(Debug, Serialize)]
pub struct JsonLabel {
    /// "primary" or "secondary".
    pub role: LabelStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub start: LineCol,
    pub end: LineCol,
}

/// Line/column pair (1-based).
#[derive(Debug, Serialize)]
pub struct LineCol {
    pub line: usize,
    pub column: usize,
    pub byte_offset: usize,
}

/// A concrete code replacement suggestion.
#[derive(Debug, Serialize)]
pub struct JsonSuggestion {
    pub span: Span,
    pub replacement: String,
    /// The full line after applying the fix.
    pub result_line: String,
}

/// Convert diagnostics to a structured JSON report.
pub fn to_json_report(
    diagnostics: &[Diagnostic],
    source: &str,
    file: &str,
    phase: &str,
) -> DiagnosticReport {
    let registry = ErrorCodeRegistry::default();
    let line_map = LineMap::new(source);
    let error_count = diagnostics.len();

    DiagnosticReport {
        version: 1,
        file: file.to_string(),
        success: error_count == 0,
        phase: phase.to_string(),
        result_type: None,
        diagnostics: diagnostics
            .iter()
            .map(|d| to_json_diagnostic(d, source, &line_map, &registry))
            .collect(),
        error_count,
    }
}

impl DiagnosticReport {
    pub fn with_result_type(mut self, ty: impl ToString) -> Self {
        self.result_type = Some(ty.to_string());
        self
    }
}

fn line_col(line_map: &LineMap, source: &str, offset: usize) -> LineCol {
    let (line, column) = line_map.offset_to_line_col(source, offset);
    LineCol { line, column, byte_offset: offset }
}

fn to_json_diagnostic(
    diag: &Diagnostic,
    source: &str,
    line_map: &LineMap,
    registry: &ErrorCodeRegistry,
) -> JsonDiagnostic {
    let code = diag.code.as_ref().map(|c| c.0.clone());
    let category = code
        .as_ref()
        .and_then(|c| registry.get(c))
        .map(|info| info.category.to_string());

    let location = diag.primary_span().map(|span| {
        let (line, column) = line_map.offset_to_line_col(source, span.start);
        SourceLocation {
            line,
            column,
            byte_offset: span.start,
            source_line: line_map.line_text(source, line).unwrap_or("").to_string(),
        }
    });

    let labels = diag
        .labels
        .iter()
        .map(|l| JsonLabel {
            role: l.style,
            message: l.message.clone(),
            start: line_col(line_map, source, l.span.start),
            end: line_col(line_map, source, l.span.end),
        })
        .collect();

    let suggestion = diag.help.as_ref().and_then(|h| h.suggestion.as_ref()).map(|s| {
        let (line, col) = line_map.offset_to_line_col(source, s.span.start);
        let original = line_map.line_text(source, line).unwrap_or("");
        let (prefix, suffix) = split_around(original, col, s.span.len());
        JsonSuggestion {
            span: s.span,
            replacement: s.replacement.clone(),
            result_line: format!("{}{}{}", prefix, s.replacement, suffix),
        }
    });

    JsonDiagnostic {
        code,
        category,
        message: diag.message.clone(),
        location,
        labels,
        notes: diag.notes.clone(),
        help: diag.help.as_ref().map(|h| h.message.clone()),
        suggestion,
    }
}

/// Serialize a diagnostic report to pretty JSON.
pub fn to_json_string(report: &DiagnosticReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_type_error() {
        let source = "const total = 1;\ntotl + 1";
        let diag = Diagnostic::error("unknown variable `totl`")
            .with_code("E0200")
            .with_primary(Span::new(17, 21), "not found in this scope")
            .with_help("did you mean `total`?")
            .with_suggestion(Span::new(17, 21), "total");
        let report = to_json_report(&[diag], source, "main.tyro", "check");
        let value: serde_json::Value = serde_json::from_str(&to_json_string(&report)).unwrap();

        assert_eq!(value["version"], 1);
        assert_eq!(value["success"], false);
        assert_eq!(value["error_count"], 1);
        assert!(value.get("result_type").is_none());
        let d = &value["diagnostics"][0];
        assert_eq!(d["code"], "E0200");
        assert_eq!(d["category"], "Resolution");
        assert_eq!(d["location"]["line"], 2);
        assert_eq!(d["location"]["column"], 1);
        assert_eq!(d["location"]["source_line"], "totl + 1");
        assert_eq!(d["labels"][0]["role"], "primary");
        assert_eq!(d["labels"][0]["end"]["column"], 5);
        assert_eq!(d["suggestion"]["result_line"], "total + 1");
        assert!(d.get("notes").is_none());
    }

    #[test]
    fn columns_after_non_ascii_comment() {
        let source = "/* é */ totl";
        let diag = Diagnostic::error("unknown variable `totl`")
            .with_primary(Span::new(9, 13), "not found in this scope")
            .with_help("did you mean `total`?")
            .with_suggestion(Span::new(9, 13), "total");
        let report = to_json_report(&[diag], source, "main.tyro", "check");
        let d = &report.diagnostics[0];
        let location = d.location.as_ref().unwrap();
        assert_eq!(location.column, 9);
        assert_eq!(location.byte_offset, 9);
        assert_eq!(d.labels[0].end.column, 13);
        assert_eq!(d.suggestion.as_ref().unwrap().result_line, "/* é */ total");
    }

    #[test]
    fn successful_report_carries_type() {
        let report = to_json_report(&[], "1 + 2", "ok.tyro", "check").with_result_type("number");
        let value: serde_json::Value = serde_json::from_str(&to_json_string(&report)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["result_type"], "number");
        assert_eq!(value["diagnostics"].as_array().map(Vec::len), Some(0));
    }
}
