//! Lexer error types for the cooking layer.
//!
//! Errors follow the WHERE+WHAT+WHY+HOW shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` explaining what the lexer was doing
//! - HOW: `suggestions` providing actionable fixes
//!
//! Lexing never fails outright. Every problem becomes a `LexError` value
//! next to a token stream that still covers the whole input.

use std::fmt;

use thiserror::Error;

use crate::Span;

/// A lexer error with full context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY we were checking (lexing context at the point of error).
    pub context: LexErrorContext,
    /// HOW to fix (actionable suggestions).
    pub suggestions: Vec<LexSuggestion>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A string was still open at end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A `/*` comment was still open at end of input.
    #[error("unterminated comment")]
    UnterminatedComment,
    /// No rule accepts this character here.
    #[error("unrecognized character {ch:?}")]
    UnrecognizedCharacter { ch: char },
    /// A `\` escape that is not one of the recognized forms.
    #[error("invalid escape sequence `{escape}`")]
    InvalidEscapeSequence { escape: String },
    /// A NUL byte inside the source.
    #[error("null byte in source")]
    InteriorNull,
}

/// Lexing context at the point of error, the WHY.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Scanning code, not inside any literal or comment.
    #[default]
    TopLevel,
    /// Inside a string literal opened at `start`.
    InsideString { start: u32, multi_line: bool },
    /// Inside a delimited comment.
    InsideComment,
    /// Inside a character literal.
    InsideCharLiteral,
}

impl LexErrorContext {
    /// Short phrase for diagnostics, e.g. "in string literal".
    pub fn describe(self) -> Option<&'static str> {
        match self {
            LexErrorContext::TopLevel => None,
            LexErrorContext::InsideString {
                multi_line: false, ..
            } => Some("in string literal"),
            LexErrorContext::InsideString {
                multi_line: true, ..
            } => Some("in multi-line string literal"),
            LexErrorContext::InsideComment => Some("in comment"),
            LexErrorContext::InsideCharLiteral => Some("in character literal"),
        }
    }
}

/// Suggestion for fixing a lexical error, the HOW.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    /// Human-readable message describing the fix.
    pub message: String,
    /// Concrete text replacement for auto-fix, if applicable.
    pub replacement: Option<LexReplacement>,
    /// Priority (lower = more likely relevant). 0 = most likely.
    pub priority: u8,
}

/// A concrete text replacement for an auto-fix.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexReplacement {
    /// The span to replace.
    pub span: Span,
    /// The replacement text.
    pub text: String,
}

impl LexSuggestion {
    /// Create a text-only suggestion (no code replacement).
    pub fn text(message: impl Into<String>, priority: u8) -> Self {
        Self {
            message: message.into(),
            replacement: None,
            priority,
        }
    }

    /// Create a suggestion with a removal (replace span with empty string).
    pub fn removal(message: impl Into<String>, span: Span) -> Self {
        Self::replace(message, span, "")
    }

    /// Create a suggestion with a replacement.
    pub fn replace(message: impl Into<String>, span: Span, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: Some(LexReplacement {
                span,
                text: text.into(),
            }),
            priority: 0,
        }
    }
}

const VALID_ESCAPES: &str = r#"valid escapes are: \t, \b, \r, \n, \', \", \\, \$ and \uXXXX"#;

impl LexError {
    /// Create an unterminated string error.
    ///
    /// `span` runs from the opening quote to end of input.
    #[cold]
    pub fn unterminated_string(span: Span, multi_line: bool) -> Self {
        let close = if multi_line { "\"\"\"" } else { "\"" };
        Self {
            span,
            kind: LexErrorKind::UnterminatedString,
            context: LexErrorContext::InsideString {
                start: span.start,
                multi_line,
            },
            suggestions: vec![LexSuggestion::text(format!("add closing `{close}`"), 0)],
        }
    }

    /// Create an unterminated comment error.
    #[cold]
    pub fn unterminated_comment(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedComment,
            context: LexErrorContext::InsideComment,
            suggestions: vec![LexSuggestion::text(
                "add closing `*/` (comments nest, so each `/*` needs its own)",
                0,
            )],
        }
    }

    /// Create an unrecognized character error.
    #[cold]
    pub fn unrecognized_character(span: Span, ch: char) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnrecognizedCharacter { ch },
            context: LexErrorContext::TopLevel,
            suggestions: character_suggestions(span, ch),
        }
    }

    /// Create an invalid escape error for a line string.
    #[cold]
    pub fn invalid_string_escape(span: Span, escape: &str, string_start: u32) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidEscapeSequence {
                escape: escape.to_owned(),
            },
            context: LexErrorContext::InsideString {
                start: string_start,
                multi_line: false,
            },
            suggestions: vec![LexSuggestion::text(VALID_ESCAPES, 1)],
        }
    }

    /// Create an invalid escape error for a character literal.
    #[cold]
    pub fn invalid_char_escape(span: Span, escape: &str) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidEscapeSequence {
                escape: escape.to_owned(),
            },
            context: LexErrorContext::InsideCharLiteral,
            suggestions: vec![LexSuggestion::text(VALID_ESCAPES, 1)],
        }
    }

    /// Create an interior null byte error.
    #[cold]
    pub fn interior_null(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::InteriorNull,
            context: LexErrorContext::TopLevel,
            suggestions: vec![LexSuggestion::removal("remove the null byte", span)],
        }
    }

    /// Set the context, keeping everything else.
    #[must_use]
    pub fn with_context(mut self, context: LexErrorContext) -> Self {
        self.context = context;
        self
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        // Unterminated errors already name their construct.
        let redundant = matches!(
            self.kind,
            LexErrorKind::UnterminatedString | LexErrorKind::UnterminatedComment
        );
        if let (false, Some(context)) = (redundant, self.context.describe()) {
            write!(f, " {context}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LexError {}

/// Hints for characters people type by habit or by accident.
fn character_suggestions(span: Span, ch: char) -> Vec<LexSuggestion> {
    match ch {
        '&' => vec![LexSuggestion::replace("use `&&` for logical and", span, "&&")],
        '|' => vec![LexSuggestion::replace("use `||` for logical or", span, "||")],
        '$' => vec![LexSuggestion::text(
            "`$` must be followed by a name, as in `$field` or `\"$name\"`",
            1,
        )],
        '\\' => vec![LexSuggestion::removal("remove the backslash", span)],
        '`' => vec![LexSuggestion::text(
            "backtick identifiers need a closing `` ` `` on the same line",
            1,
        )],
        '\u{201C}' | '\u{201D}' => vec![LexSuggestion::replace(
            "replace the typographic quote with `\"`",
            span,
            "\"",
        )],
        '\u{2018}' | '\u{2019}' => vec![LexSuggestion::replace(
            "replace the typographic quote with `'`",
            span,
            "'",
        )],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests;
