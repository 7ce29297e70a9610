//! Lex command implementation.
//!
//! Reads one source, scans it, prints the token report and optionally saves
//! it to a file. Lexical problems show up as diagnostics on stderr and in
//! the report; they never fail the command.

use std::io::{Read, Write};
use std::path::PathBuf;

use tracing::info;

use crate::commands::traits::{self, Command};
use crate::config::ReportFormat;
use crate::error::{PasctError, Result};
use crate::report::{render_diagnostic, Report};

/// Input argument that means "read standard input".
pub const STDIN_ARG: &str = "-";

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Source path; a leading `@` is ignored and `-` reads stdin.
    pub input: String,
    /// File the report is also written to.
    pub output: Option<PathBuf>,
    /// Report format.
    pub format: ReportFormat,
    /// Append an end-of-input line after the last token.
    pub show_end_of_input: bool,
    /// Colorize diagnostics.
    pub color: bool,
    /// Skip printing the report to stdout.
    pub quiet: bool,
}

/// What a lex run found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexSummary {
    /// Tokens emitted, partial tokens included.
    pub tokens: usize,
    /// Characters skipped.
    pub unrecognized: usize,
    /// Error-level diagnostics.
    pub errors: usize,
    /// Warning-level diagnostics.
    pub warnings: usize,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

/// Strips the `@file` prefix from an input argument.
///
/// ```text
/// @prog.pas -> prog.pas
/// prog.pas  -> prog.pas
/// ```
pub fn input_path(input: &str) -> &str {
    input.strip_prefix('@').unwrap_or(input)
}

impl LexCommand {
    /// Reads the source, returning its display name and text.
    fn read_source(&self) -> Result<(String, String)> {
        if self.args.input == STDIN_ARG {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            return Ok(("<stdin>".to_string(), source));
        }

        let path = input_path(&self.args.input);
        let source = std::fs::read_to_string(path).map_err(|e| PasctError::file(path, e))?;
        Ok((path.to_string(), source))
    }

    fn run(&self) -> Result<LexSummary> {
        let (origin, source) = self.read_source()?;
        if source.is_empty() {
            return Err(PasctError::EmptySource(origin));
        }

        info!(source = %origin, bytes = source.len(), "analyzing");
        let report = Report::analyze(&source);

        for diag in &report.diagnostics {
            eprint!("{}", render_diagnostic(diag, &source, &origin, self.args.color));
        }

        let rendered = report.render(self.args.format, self.args.show_end_of_input)?;
        if !self.args.quiet {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }

        if let Some(output) = &self.args.output {
            std::fs::write(output, &rendered).map_err(|e| PasctError::file(output, e))?;
            info!(path = %output.display(), "report saved");
        }

        let summary = LexSummary {
            tokens: report.tokens.len(),
            unrecognized: report.unrecognized.len(),
            errors: report.error_count(),
            warnings: report.warning_count(),
        };
        info!(
            tokens = summary.tokens,
            unrecognized = summary.unrecognized,
            errors = summary.errors,
            warnings = summary.warnings,
            "analysis finished"
        );
        Ok(summary)
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = LexSummary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs) -> Result<LexSummary> {
    traits::run::<LexCommand>(args)
}
