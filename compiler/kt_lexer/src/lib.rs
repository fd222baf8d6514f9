//! Mode-stack lexer for Kotlin source with string templates.
//!
//! Built on [`kt_lexer_core`]: the core crate scans bytes into raw tags and
//! tracks the mode stack; this crate cooks those tags into [`TokenKind`]s,
//! resolves keywords, validates escapes, assigns channels and layout flags,
//! and collects [`LexError`]s.
//!
//! ```
//! let output = kt_lexer::lex("val s = \"hi $name\"");
//! assert!(!output.has_errors());
//! assert_eq!(output.significant().count(), 8);
//! ```

mod config;
mod cook_escape;
mod cooker;
mod keywords;
pub mod lex_error;
mod lexer;
mod span;
mod token;

pub use config::LexerConfig;
pub use cook_escape::{char_literal_value, resolve_escape};
pub use kt_lexer_core::{Frame, Mode, ModeStack, Opener, SourceBuffer};
pub use lex_error::{LexError, LexErrorContext, LexErrorKind, LexReplacement, LexSuggestion};
pub use lexer::Lexer;
pub use span::{LineIndex, Span};
pub use token::{Channel, KeywordClass, Token, TokenFlags, TokenKind};

/// Every token of a unit plus the errors found while lexing it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// All tokens, hidden ones included, ending in `Eof`.
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    /// Tokens on the default channel.
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.is_hidden())
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex a whole unit with the default configuration.
pub fn lex(source: &str) -> LexOutput {
    lex_with_config(source, &LexerConfig::default())
}

/// Lex a whole unit.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex_with_config(source: &str, config: &LexerConfig) -> LexOutput {
    let buffer = SourceBuffer::new(source);
    let mut lexer = Lexer::with_config(&buffer, config);
    let tokens: Vec<Token> = lexer.by_ref().collect();
    LexOutput {
        tokens,
        errors: lexer.into_errors(),
    }
}
