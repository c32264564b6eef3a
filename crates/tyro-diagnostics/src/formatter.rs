// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Terminal formatter for diagnostics.
//!
//! ```text
//! error[E0305]: mismatched argument 1: expected `boolean`, found `number`
//!   --> main.tyro:1:21
//!     |
//!   1 | ((x: boolean) => x)(42)
//!     |                     ^^ expected `boolean`
//!     |
//!     = note: parameter `x` is declared as `boolean`
//! ```

use std::collections::BTreeMap;

use colored::Colorize;
use tyro_ast::LineMap;

use crate::{Diagnostic, Help, LabelStyle};

/// Formats diagnostics for terminal output.
pub struct DiagnosticFormatter<'a> {
    source: &'a str,
    file_name: Option<&'a str>,
    line_map: LineMap,
}

/// A source line with its labels.
struct AnnotatedLine {
    line_num: usize,
    text: String,
    annotations: Vec<Annotation>,
}

struct Annotation {
    col_start: usize,
    col_end: usize,
    style: LabelStyle,
    message: Option<String>,
}

impl<'a> DiagnosticFormatter<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            file_name: None,
            line_map: LineMap::new(source),
        }
    }

    pub fn with_file_name(mut self, name: &'a str) -> Self {
        self.file_name = Some(name);
        self
    }

    pub fn format(&self, diagnostic: &Diagnostic) -> String {
        let mut out = String::new();
        self.format_header(&mut out, diagnostic);

        let annotated = self.collect_annotated_lines(diagnostic);
        let Some(primary) = diagnostic.primary_span() else {
            self.format_footer(&mut out, diagnostic, 2);
            return out;
        };

        let (line, col) = self.line_map.offset_to_line_col(self.source, primary.start);
        let file = self.file_name.unwrap_or("<source>");
        out.push_str(&format!("  {} {}:{}:{}\n", "-->".blue(), file, line, col));

        let max_line = annotated.last().map(|a| a.line_num).unwrap_or(1);
        let gutter_width = max_line.to_string().len().max(2);

        out.push_str(&format!("{} {}\n", " ".repeat(gutter_width + 1), "|".blue()));

        let mut prev_line_num: Option<usize> = None;
        for annotated_line in &annotated {
            if let Some(prev) = prev_line_num {
                if annotated_line.line_num > prev + 1 {
                    out.push_str(&format!("{} {}\n", " ".repeat(gutter_width), "...".blue()));
                }
            }

            out.push_str(&format!(
                "{:>width$} {} {}\n",
                annotated_line.line_num.to_string().blue().bold(),
                "|".blue(),
                annotated_line.text,
                width = gutter_width + 1,
            ));
            self.format_annotations(&mut out, annotated_line, gutter_width);

            prev_line_num = Some(annotated_line.line_num);
        }

        if !diagnostic.notes.is_empty() || diagnostic.help.is_some() {
            out.push_str(&format!("{} {}\n", " ".repeat(gutter_width + 1), "|".blue()));
        }
        self.format_footer(&mut out, diagnostic, gutter_width);

        out
    }

    fn format_header(&self, out: &mut String, diagnostic: &Diagnostic) {
        let label = "error".red().bold();

        match diagnostic.code {
            Some(ref code) => out.push_str(&format!(
                "{}[{}]: {}\n",
                label,
                code.0.as_str().red().bold(),
                diagnostic.message.bold()
            )),
            None => out.push_str(&format!("{}: {}\n", label, diagnostic.message.bold())),
        }
    }

    fn format_footer(&self, out: &mut String, diagnostic: &Diagnostic, gutter_width: usize) {
        for note in &diagnostic.notes {
            out.push_str(&format!(
                "{} {} {}: {}\n",
                " ".repeat(gutter_width + 1),
                "=".cyan(),
                "note".cyan().bold(),
                note
            ));
        }

        if let Some(ref help) = diagnostic.help {
            self.format_help(out, help, gutter_width);
        }
    }

    fn format_help(&self, out: &mut String, help: &Help, gutter_width: usize) {
        out.push_str(&format!(
            "{} {} {}: {}\n",
            " ".repeat(gutter_width + 1),
            "=".cyan(),
            "help".cyan().bold(),
            help.message
        ));

        let Some(ref suggestion) = help.suggestion else { return };
        let (line, col) = self.line_map.offset_to_line_col(self.source, suggestion.span.start);
        let Some(source_line) = self.line_map.line_text(self.source, line) else { return };

        let (prefix, suffix) = split_around(source_line, col, suggestion.span.len());
        out.push_str(&format!("{} {}\n", " ".repeat(gutter_width + 1), "|".blue()));
        out.push_str(&format!(
            "{:>width$} {} {}{}{}\n",
            line.to_string().blue().bold(),
            "|".blue(),
            prefix,
            suggestion.replacement.green(),
            suffix,
            width = gutter_width + 1,
        ));
        out.push_str(&format!(
            "{} {} {}{}\n",
            " ".repeat(gutter_width + 1),
            "|".blue(),
            " ".repeat(col.saturating_sub(1)),
            "~".repeat(suggestion.replacement.chars().count()).green(),
        ));
    }

    fn collect_annotated_lines(&self, diagnostic: &Diagnostic) -> Vec<AnnotatedLine> {
        let mut lines: BTreeMap<usize, AnnotatedLine> = BTreeMap::new();

        for label in &diagnostic.labels {
            let (line_num, col_start) = self.line_map.offset_to_line_col(self.source, label.span.start);
            let (end_line, col_end) = self.line_map.offset_to_line_col(self.source, label.span.end);
            let text = self.line_map.line_text(self.source, line_num).unwrap_or("");

            // Multi-line spans are underlined to the end of their first line.
            let col_end = if end_line == line_num { col_end } else { text.chars().count() + 1 };

            let entry = lines.entry(line_num).or_insert_with(|| AnnotatedLine {
                line_num,
                text: text.to_string(),
                annotations: Vec::new(),
            });
            entry.annotations.push(Annotation {
                col_start,
                col_end: col_end.max(col_start + 1),
                style: label.style,
                message: label.message.clone(),
            });
        }

        lines.into_values().collect()
    }

    fn format_annotations(&self, out: &mut String, line: &AnnotatedLine, gutter_width: usize) {
        // Secondary labels first so a primary label overlapping them wins.
        let mut sorted: Vec<&Annotation> = line.annotations.iter().collect();
        sorted.sort_by_key(|a| (a.style == LabelStyle::Primary, a.col_start));

        let width = sorted.iter().map(|a| a.col_end).max().unwrap_or(1);
        let mut underline = vec![' '; width];
        for ann in &sorted {
            let ch = match ann.style {
                LabelStyle::Primary => '^',
                LabelStyle::Secondary => '-',
            };
            for slot in underline.iter_mut().take(ann.col_end - 1).skip(ann.col_start - 1) {
                *slot = ch;
            }
        }
        let underline: String = underline.into_iter().collect::<String>().trim_end().to_string();
        let pad = " ".repeat(gutter_width + 1);

        let mut messages: Vec<(usize, LabelStyle, &str)> = sorted
            .iter()
            .filter_map(|a| a.message.as_deref().map(|m| (a.col_start, a.style, m)))
            .collect();
        messages.sort_by_key(|(col, _, _)| *col);

        match messages.as_slice() {
            [] => out.push_str(&format!("{} {} {}\n", pad, "|".blue(), color_underline(&underline))),
            [(_, style, msg)] => out.push_str(&format!(
                "{} {} {} {}\n",
                pad,
                "|".blue(),
                color_underline(&underline),
                styled(msg, *style),
            )),
            _ => {
                out.push_str(&format!("{} {} {}\n", pad, "|".blue(), color_underline(&underline)));
                // Rightmost message first, each hanging off its label's start.
                for (col, style, msg) in messages.iter().rev() {
                    let pipe = match style {
                        LabelStyle::Primary => "|".red().bold().to_string(),
                        LabelStyle::Secondary => "|".blue().to_string(),
                    };
                    out.push_str(&format!(
                        "{} {} {}{} {}\n",
                        pad,
                        "|".blue(),
                        " ".repeat(col.saturating_sub(1)),
                        pipe,
                        styled(msg, *style),
                    ));
                }
            }
        }
    }
}

fn styled(msg: &str, style: LabelStyle) -> String {
    match style {
        LabelStyle::Primary => msg.red().bold().to_string(),
        LabelStyle::Secondary => msg.blue().to_string(),
    }
}

/// Text before and after a `len`-byte span starting at 1-based char column `col`.
pub(crate) fn split_around(line: &str, col: usize, len: usize) -> (&str, &str) {
    let start = line
        .char_indices()
        .nth(col.saturating_sub(1))
        .map_or(line.len(), |(i, _)| i);
    let mut end = (start + len).min(line.len());
    while !line.is_char_boundary(end) {
        end += 1;
    }
    (&line[..start], &line[end..])
}

/// Color the underline characters (^ in red, - in blue).
fn color_underline(s: &str) -> String {
    let mut result = String::new();
    let mut run = String::new();
    let mut current = None;

    for ch in s.chars() {
        let kind = matches!(ch, '^' | '-').then_some(ch);
        if kind != current && !run.is_empty() {
            result.push_str(&flush_run(&run, current));
            run.clear();
        }
        run.push(ch);
        current = kind;
    }
    if !run.is_empty() {
        result.push_str(&flush_run(&run, current));
    }

    result
}

fn flush_run(run: &str, kind: Option<char>) -> String {
    match kind {
        Some('^') => run.red().bold().to_string(),
        Some('-') => run.blue().to_string(),
        _ => run.to_string(),
    }
}
