//! Token report rendering.
//!
//! A [`Report`] is the result of scanning one source: the tokens, the
//! skipped characters and the diagnostics. It renders as the text listing
//! or as JSON, and diagnostics render separately for stderr.

use pasc_lex::{Lexer, Token};
use pasc_util::{Diagnostic, Handler, SourceSnippet};
use serde::Serialize;

use crate::config::ReportFormat;
use crate::error::Result;

/// Width of the `=` rules around the unrecognized-character summary.
const RULE_WIDTH: usize = 40;

/// Line printed after the last token when end of input is shown.
pub const END_OF_INPUT_LINE: &str = "<EOF>";

/// Everything one scan produced.
#[derive(Debug, Clone)]
pub struct Report {
    /// Tokens in source order, partial tokens included.
    pub tokens: Vec<Token>,
    /// Skipped characters in encounter order.
    pub unrecognized: Vec<char>,
    /// Diagnostics in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Scans all of `source`.
    pub fn analyze(source: &str) -> Self {
        let mut handler = Handler::new();
        let (tokens, unrecognized) = {
            let mut lexer = Lexer::new(source, &mut handler);
            let tokens: Vec<Token> = lexer.by_ref().collect();
            (tokens, lexer.unrecognized().to_vec())
        };

        Self {
            tokens,
            unrecognized,
            diagnostics: handler.diagnostics(),
        }
    }

    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.level.is_error()).count()
    }

    /// Number of warning-level diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.level.is_warning()).count()
    }

    /// Renders the report in `format`.
    pub fn render(&self, format: ReportFormat, show_end_of_input: bool) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text(show_end_of_input)),
            ReportFormat::Json => self.to_json(show_end_of_input),
        }
    }

    /// Renders the text listing.
    ///
    /// ```text
    /// <x, IDENTIFIER>
    ///
    /// ========================================
    ///        UNRECOGNIZED CHARACTERS
    /// ========================================
    /// No unrecognized characters found.
    /// ========================================
    /// ```
    pub fn to_text(&self, show_end_of_input: bool) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        for token in &self.tokens {
            out.push_str(&token.to_string());
            out.push('\n');
        }
        if show_end_of_input {
            out.push_str(END_OF_INPUT_LINE);
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&rule);
        out.push_str("\n       UNRECOGNIZED CHARACTERS\n");
        out.push_str(&rule);
        out.push('\n');

        if self.unrecognized.is_empty() {
            out.push_str("No unrecognized characters found.\n");
        } else {
            let listed: Vec<String> = self.unrecognized.iter().map(|c| format!("'{}'", c)).collect();
            out.push_str(&format!("Characters found: {}\n", listed.join(", ")));
            out.push_str(&format!(
                "Total unrecognized characters: {}\n",
                self.unrecognized.len()
            ));
        }

        out.push_str(&rule);
        out.push('\n');
        out
    }

    /// Renders the JSON document.
    pub fn to_json(&self, show_end_of_input: bool) -> Result<String> {
        let report = JsonReport {
            tokens: self
                .tokens
                .iter()
                .map(|t| JsonToken {
                    lexeme: &t.lexeme,
                    kind: t.kind.report_name(),
                })
                .collect(),
            end_of_input: show_end_of_input.then_some(true),
            unrecognized: &self.unrecognized,
            diagnostics: self.diagnostics.iter().map(JsonDiagnostic::from).collect(),
        };

        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tokens: Vec<JsonToken<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_of_input: Option<bool>,
    unrecognized: &'a [char],
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonToken<'a> {
    lexeme: &'a str,
    kind: &'static str,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    level: &'static str,
    code: Option<String>,
    message: &'a str,
    line: u32,
    column: u32,
}

impl<'a> From<&'a Diagnostic> for JsonDiagnostic<'a> {
    fn from(diag: &'a Diagnostic) -> Self {
        Self {
            level: diag.level.name(),
            code: diag.code.map(|c| c.as_str()),
            message: &diag.message,
            line: diag.span.line,
            column: diag.span.column,
        }
    }
}

/// Renders one diagnostic with the offending source line underneath.
///
/// ```text
/// warning[W1001]: unrecognized character '@'
///   --> prog.pas:1:3
///     |
///   1 | a @ b
///     |   ^
/// ```
pub fn render_diagnostic(diag: &Diagnostic, source: &str, origin: &str, color: bool) -> String {
    let mut out = String::new();

    let level = if color {
        format!("\x1b[1;{}m{}\x1b[0m", diag.level.color_code(), diag.level)
    } else {
        diag.level.to_string()
    };
    out.push_str(&level);
    if let Some(code) = diag.code {
        out.push_str(&format!("[{}]", code));
    }
    out.push_str(&format!(": {}\n", diag.message));
    out.push_str(&format!(
        "  --> {}:{}:{}\n",
        origin, diag.span.line, diag.span.column
    ));

    if let Some(snippet) = SourceSnippet::from_source(source, diag.span) {
        out.push_str("    |\n");
        out.push_str(&snippet.format());
        out.push('\n');
    }

    for note in &diag.notes {
        out.push_str(&format!("    = note: {}\n", note));
    }
    for help in &diag.helps {
        out.push_str(&format!("    = help: {}\n", help));
    }

    out
}
