//! `ktlex check`: report lexical errors.

use std::fmt::Write;

use kt_lexer::{lex, LineIndex};

use super::location;

/// Rendered diagnostics plus the error count that decides the exit code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    pub output: String,
    pub error_count: usize,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Lex `source` and render each error as `path:line:col: error: message`,
/// followed by its suggestions.
pub fn check_source(path: &str, source: &str) -> CheckReport {
    let output = lex(source);
    let index = LineIndex::new(source);
    let mut out = String::new();
    for error in &output.errors {
        let _ = writeln!(
            out,
            "{path}:{}: error: {error}",
            location(&index, error.span.start)
        );
        for suggestion in &error.suggestions {
            let _ = writeln!(out, "  help: {}", suggestion.message);
        }
    }
    CheckReport {
        output: out,
        error_count: output.errors.len(),
    }
}
