//! Pull-based lexer driver.
//!
//! Ties the raw scanner to the cooker and computes the parts of a token
//! that depend on its neighbours: channel, flags, and the error flag.

use kt_lexer_core::{Mode, ModeStack, RawScanner, RawTag, SourceBuffer};

use crate::cooker::TokenCooker;
use crate::{Channel, LexError, LexerConfig, Span, Token, TokenFlags, TokenKind};

/// Mode-stack lexer over one source unit.
///
/// Produces a lazy, forward-only token sequence ending in `Eof`. Calls to
/// [`next_token`](Self::next_token) after `Eof` keep returning `Eof`; the
/// `Iterator` impl yields the `Eof` token once and then `None`.
///
/// ```
/// use kt_lexer::{Lexer, SourceBuffer, TokenKind};
///
/// let buf = SourceBuffer::new("val x = 1");
/// let kinds: Vec<_> = Lexer::new(&buf)
///     .filter(|t| !t.is_hidden())
///     .map(|t| t.kind)
///     .collect();
/// assert_eq!(kinds, [
///     TokenKind::Val,
///     TokenKind::Identifier,
///     TokenKind::Assignment,
///     TokenKind::IntegerLiteral,
///     TokenKind::Eof,
/// ]);
/// ```
pub struct Lexer<'a> {
    scanner: RawScanner<'a>,
    cooker: TokenCooker<'a>,
    source_len: u32,
    significant_newlines: bool,
    /// Layout flags gathered from hidden tokens since the last
    /// default-channel token.
    pending: TokenFlags,
    /// No default-channel token yet on the current line.
    at_line_start: bool,
    /// `Eof` already produced.
    finished: bool,
    token_count: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer with the default configuration.
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self::with_config(buffer, &LexerConfig::default())
    }

    /// Create a lexer with an explicit configuration.
    pub fn with_config(buffer: &'a SourceBuffer, config: &LexerConfig) -> Self {
        let scanner = RawScanner::with_root_mode(buffer.cursor(), config.start_mode)
            .recognize_shebang(config.recognize_shebang);
        Self {
            scanner,
            cooker: TokenCooker::new(buffer.as_str(), buffer.nul_positions()),
            source_len: buffer.len(),
            significant_newlines: config.significant_newlines,
            pending: TokenFlags::empty(),
            at_line_start: true,
            finished: false,
            token_count: 0,
        }
    }

    /// The live mode stack.
    pub fn mode_stack(&self) -> &ModeStack {
        self.scanner.mode_stack()
    }

    /// Mode the next token will be scanned in.
    pub fn current_mode(&self) -> Mode {
        self.scanner.current_mode()
    }

    /// Errors reported so far.
    pub fn errors(&self) -> &[LexError] {
        self.cooker.errors()
    }

    /// Consume the lexer, returning all errors.
    pub fn into_errors(self) -> Vec<LexError> {
        self.cooker.into_errors()
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        let offset = self.scanner.pos();
        let stack = self.scanner.mode_stack();
        let top = stack.top();
        // Unterminated strings only surface at end of input.
        let open_string = if offset == self.source_len {
            stack.innermost_string()
        } else {
            None
        };
        let depth_before = stack.depth();

        let raw = self.scanner.next_token();
        self.trace_stack(depth_before, raw.tag);

        let kind = match (raw.tag, open_string) {
            (RawTag::UnterminatedString, Some(frame)) => {
                self.cooker
                    .cook_unterminated_string(offset, raw.mode, frame.start)
            }
            _ => self.cooker.cook(raw, offset, top.start),
        };

        let channel = self.channel(kind, raw.mode);
        let mut flags = self.flags(kind, channel);
        if self.cooker.last_cook_had_error() {
            flags |= TokenFlags::HAS_ERROR;
        }

        if kind == TokenKind::Eof && !self.finished {
            self.finished = true;
            tracing::debug!(
                tokens = self.token_count,
                errors = self.cooker.errors().len(),
                "lexed unit"
            );
        }
        if kind != TokenKind::Eof {
            self.token_count += 1;
        }

        Token {
            kind,
            span: Span::new(offset, offset + raw.len),
            channel,
            mode: raw.mode,
            flags,
        }
    }

    fn channel(&self, kind: TokenKind, mode: Mode) -> Channel {
        match kind {
            TokenKind::Newline if self.significant_newlines && mode == Mode::Default => {
                Channel::Default
            }
            kind if kind.is_trivia() => Channel::Hidden,
            _ => Channel::Default,
        }
    }

    /// Layout flags for a token, updating the pending state.
    fn flags(&mut self, kind: TokenKind, channel: Channel) -> TokenFlags {
        if channel == Channel::Hidden {
            match kind {
                TokenKind::Whitespace => {
                    self.pending |= TokenFlags::SPACE_BEFORE;
                }
                TokenKind::Newline => {
                    self.pending |= TokenFlags::NEWLINE_BEFORE;
                    self.at_line_start = true;
                }
                _ => self.pending |= TokenFlags::TRIVIA_BEFORE,
            }
            return TokenFlags::empty();
        }

        let mut flags = self.pending;
        if flags.is_empty() && self.token_count > 0 {
            flags |= TokenFlags::ADJACENT;
        }
        if self.at_line_start {
            flags |= TokenFlags::LINE_START;
        }
        self.pending = TokenFlags::empty();
        self.at_line_start = kind == TokenKind::Newline;
        flags
    }

    fn trace_stack(&self, depth_before: usize, tag: RawTag) {
        let stack = self.scanner.mode_stack();
        let depth = stack.depth();
        if depth > depth_before {
            tracing::trace!(depth, mode = stack.current().name(), tag = tag.name(), "mode push");
        } else if depth < depth_before {
            tracing::trace!(depth, mode = stack.current().name(), tag = tag.name(), "mode pop");
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}
