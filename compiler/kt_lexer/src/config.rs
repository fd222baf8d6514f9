//! Lexer configuration.

use kt_lexer_core::Mode;

/// Options controlling a lexer run.
///
/// ```
/// use kt_lexer::{LexerConfig, Mode};
///
/// let config = LexerConfig::default()
///     .with_start_mode(Mode::LineString)
///     .significant_newlines(true);
/// assert_eq!(config.start_mode, Mode::LineString);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexerConfig {
    /// Mode of the root frame.
    ///
    /// Useful for re-lexing a fragment such as the body of a string. The
    /// root frame is never popped and never reported as unterminated.
    ///
    /// Default: `Mode::Default`
    pub start_mode: Mode,

    /// Put newlines scanned in `Default` mode on the default channel.
    ///
    /// Newlines inside `(`, `[` and `${` stay hidden either way.
    ///
    /// Default: `false`
    pub significant_newlines: bool,

    /// Treat `#!` at the start of the unit as a shebang line.
    ///
    /// Default: `true`
    pub recognize_shebang: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            start_mode: Mode::Default,
            significant_newlines: false,
            recognize_shebang: true,
        }
    }
}

impl LexerConfig {
    /// Set the root frame's mode.
    #[must_use]
    pub fn with_start_mode(mut self, mode: Mode) -> Self {
        self.start_mode = mode;
        self
    }

    /// Enable or disable significant newlines.
    #[must_use]
    pub fn significant_newlines(mut self, enabled: bool) -> Self {
        self.significant_newlines = enabled;
        self
    }

    /// Enable or disable shebang recognition.
    #[must_use]
    pub fn recognize_shebang(mut self, enabled: bool) -> Self {
        self.recognize_shebang = enabled;
        self
    }
}
