//! Token cooking layer.
//!
//! Transforms `RawToken`s from the raw scanner into final [`TokenKind`]
//! values: keyword resolution, escape validation and error collection.
//!
//! ```text
//! source → RawScanner → RawToken → TokenCooker → TokenKind (+ LexError)
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Operators/delimiters/string delimiters**: direct 1:1 mapping
//! - **Identifiers**: keyword lookup, labelled jumps, use-site targets
//! - **Escapes and char literals**: validated against the escape table
//! - **Errors**: push a `LexError`, return an error kind
//!
//! Interior NUL bytes are reported from the source buffer's NUL index
//! rather than from tags, so a NUL swallowed by a comment is still
//! reported exactly once.

use kt_lexer_core::{Mode, RawTag, RawToken};

use crate::cook_escape::{char_literal_value, resolve_escape};
use crate::keywords;
use crate::lex_error::{LexError, LexErrorContext};
use crate::{Span, TokenKind};

/// Cooks raw tokens into `TokenKind` values.
///
/// Each `cook()` call is independent apart from the NUL cursor. Accumulates
/// errors for the entire unit.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    nul_positions: &'src [u32],
    /// Index of the first NUL not yet reported.
    next_nul: usize,
    errors: Vec<LexError>,
    /// Number of errors before the current `cook()` call.
    errors_before_cook: usize,
}

impl<'src> TokenCooker<'src> {
    /// Create a new cooker for the given source.
    pub(crate) fn new(source: &'src str, nul_positions: &'src [u32]) -> Self {
        Self {
            source,
            nul_positions,
            next_nul: 0,
            errors: Vec::new(),
            errors_before_cook: 0,
        }
    }

    /// Consume the cooker, returning accumulated errors.
    pub(crate) fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Errors so far.
    pub(crate) fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Check if the most recent cook call added any errors.
    ///
    /// Used by the driver loop to set `TokenFlags::HAS_ERROR` on the token.
    pub(crate) fn last_cook_had_error(&self) -> bool {
        self.errors.len() > self.errors_before_cook
    }

    /// Cook a single raw token.
    ///
    /// `offset` is the byte position of the token. `frame_start` is the
    /// offset of the frame the token was scanned in, which for a string
    /// fragment is its opening quote.
    pub(crate) fn cook(&mut self, raw: RawToken, offset: u32, frame_start: u32) -> TokenKind {
        self.errors_before_cook = self.errors.len();
        let span = Span::new(offset, offset + raw.len);
        let kind = match raw.tag {
            // Identifiers
            RawTag::Ident => {
                keywords::lookup(self.text(span)).unwrap_or(TokenKind::Identifier)
            }
            RawTag::BacktickIdent => TokenKind::Identifier,
            RawTag::IdentAt => TokenKind::IdentifierAt,
            RawTag::FieldIdent => TokenKind::FieldIdentifier,
            RawTag::LabelledJump => {
                keywords::labelled_jump(self.text(span)).unwrap_or(TokenKind::IdentifierAt)
            }
            RawTag::UseSiteTarget => {
                keywords::use_site_target(self.text(span)).unwrap_or(TokenKind::At)
            }

            // Literals
            RawTag::Int => TokenKind::IntegerLiteral,
            RawTag::Long => TokenKind::LongLiteral,
            RawTag::Double => TokenKind::DoubleLiteral,
            RawTag::Float => TokenKind::FloatLiteral,
            RawTag::HexInt => TokenKind::HexLiteral,
            RawTag::BinInt => TokenKind::BinLiteral,
            RawTag::Char => self.cook_char(span),

            // Operators
            RawTag::Dot => TokenKind::Dot,
            RawTag::Comma => TokenKind::Comma,
            RawTag::Star => TokenKind::Mult,
            RawTag::Percent => TokenKind::Mod,
            RawTag::Slash => TokenKind::Div,
            RawTag::Plus => TokenKind::Add,
            RawTag::Minus => TokenKind::Sub,
            RawTag::PlusPlus => TokenKind::Incr,
            RawTag::MinusMinus => TokenKind::Decr,
            RawTag::AmpAmp => TokenKind::Conj,
            RawTag::PipePipe => TokenKind::Disj,
            RawTag::BangWs => TokenKind::ExclWs,
            RawTag::Bang => TokenKind::ExclNoWs,
            RawTag::Colon => TokenKind::Colon,
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::Equal => TokenKind::Assignment,
            RawTag::PlusEqual => TokenKind::AddAssignment,
            RawTag::MinusEqual => TokenKind::SubAssignment,
            RawTag::StarEqual => TokenKind::MultAssignment,
            RawTag::SlashEqual => TokenKind::DivAssignment,
            RawTag::PercentEqual => TokenKind::ModAssignment,
            RawTag::Arrow => TokenKind::Arrow,
            RawTag::FatArrow => TokenKind::DoubleArrow,
            RawTag::DotDot => TokenKind::Range,
            RawTag::Ellipsis => TokenKind::Reserved,
            RawTag::ColonColon => TokenKind::ColonColon,
            RawTag::SemiSemi => TokenKind::DoubleSemicolon,
            RawTag::Hash => TokenKind::Hash,
            RawTag::At => TokenKind::At,
            RawTag::AtWs => TokenKind::AtWs,
            RawTag::QuestionWs => TokenKind::QuestWs,
            RawTag::Question => TokenKind::QuestNoWs,
            RawTag::Less => TokenKind::LAngle,
            RawTag::Greater => TokenKind::RAngle,
            RawTag::LessEqual => TokenKind::Le,
            RawTag::GreaterEqual => TokenKind::Ge,
            RawTag::BangEqual => TokenKind::ExclEq,
            RawTag::BangEqualEqual => TokenKind::ExclEqEq,
            RawTag::EqualEqual => TokenKind::EqEq,
            RawTag::EqualEqualEqual => TokenKind::EqEqEq,
            RawTag::AsSafe => TokenKind::AsSafe,
            RawTag::NotIs => TokenKind::NotIs,
            RawTag::NotIn => TokenKind::NotIn,
            RawTag::SingleQuote => TokenKind::SingleQuote,

            // Delimiters
            RawTag::LeftParen => TokenKind::LParen,
            RawTag::RightParen => TokenKind::RParen,
            RawTag::LeftBracket => TokenKind::LSquare,
            RawTag::RightBracket => TokenKind::RSquare,
            RawTag::LeftBrace => TokenKind::LCurl,
            RawTag::RightBrace => TokenKind::RCurl,

            // Strings
            RawTag::QuoteOpen => TokenKind::QuoteOpen,
            RawTag::TripleQuoteOpen => TokenKind::TripleQuoteOpen,
            RawTag::QuoteClose => TokenKind::QuoteClose,
            RawTag::TripleQuoteClose => TokenKind::TripleQuoteClose,
            RawTag::LineStrText => TokenKind::LineStrText,
            RawTag::LineStrEscape => self.cook_escape(span, frame_start),
            RawTag::LineStrRef => TokenKind::LineStrRef,
            RawTag::LineStrExprStart => TokenKind::LineStrExprStart,
            RawTag::MultiLineQuote => TokenKind::MultiLineStringQuote,
            RawTag::MultiLineStrText => TokenKind::MultiLineStrText,
            RawTag::MultiLineStrRef => TokenKind::MultiLineStrRef,
            RawTag::MultiLineStrExprStart => TokenKind::MultiLineStrExprStart,

            // Trivia
            RawTag::Whitespace => TokenKind::Whitespace,
            RawTag::Newline => TokenKind::Newline,
            RawTag::LineComment => TokenKind::LineComment,
            RawTag::BlockComment => TokenKind::DelimitedComment,
            RawTag::DocComment => TokenKind::DocComment,
            RawTag::ByteOrderMark => TokenKind::ByteOrderMark,
            RawTag::Shebang => TokenKind::ShebangLine,

            // Errors
            RawTag::InvalidChar => {
                if let Some(ch) = self.text(span).chars().next() {
                    self.errors.push(LexError::unrecognized_character(span, ch));
                }
                TokenKind::ErrorCharacter
            }
            RawTag::UnterminatedComment => {
                tracing::debug!(start = offset, "unterminated comment");
                self.errors.push(LexError::unterminated_comment(span));
                TokenKind::UnterminatedComment
            }
            // Reported from the NUL index below.
            RawTag::InteriorNull => TokenKind::ErrorCharacter,
            RawTag::UnterminatedString => {
                return self.cook_unterminated_string(offset, raw.mode, frame_start);
            }

            RawTag::Eof => TokenKind::Eof,
        };
        self.report_nuls(span, kind, raw.mode, frame_start);
        kind
    }

    /// Cook the zero-length marker for a string still open at `offset`
    /// (end of input). `string_start` is the offset of its opening quote.
    pub(crate) fn cook_unterminated_string(
        &mut self,
        offset: u32,
        mode: Mode,
        string_start: u32,
    ) -> TokenKind {
        self.errors_before_cook = self.errors.len();
        let multi_line = mode == Mode::MultiLineString;
        tracing::debug!(start = string_start, multi_line, "unterminated string");
        self.errors.push(LexError::unterminated_string(
            Span::new(string_start, offset),
            multi_line,
        ));
        TokenKind::UnterminatedString
    }

    fn cook_char(&mut self, span: Span) -> TokenKind {
        let text = self.text(span);
        if char_literal_value(text).is_none() {
            let body = text
                .strip_prefix('\'')
                .and_then(|t| t.strip_suffix('\''))
                .unwrap_or(text);
            self.errors.push(LexError::invalid_char_escape(span, body));
        }
        TokenKind::CharacterLiteral
    }

    fn cook_escape(&mut self, span: Span, string_start: u32) -> TokenKind {
        let text = self.text(span);
        if resolve_escape(text).is_some() {
            return TokenKind::LineStrEscapedChar;
        }
        self.errors
            .push(LexError::invalid_string_escape(span, text, string_start));
        TokenKind::InvalidEscape
    }

    /// Report every interior NUL inside `span`.
    fn report_nuls(&mut self, span: Span, kind: TokenKind, mode: Mode, frame_start: u32) {
        while let Some(&pos) = self.nul_positions.get(self.next_nul) {
            if pos >= span.end {
                break;
            }
            self.next_nul += 1;
            let context = if kind.is_comment() {
                LexErrorContext::InsideComment
            } else if mode.is_string() {
                LexErrorContext::InsideString {
                    start: frame_start,
                    multi_line: mode == Mode::MultiLineString,
                }
            } else {
                LexErrorContext::TopLevel
            };
            self.errors
                .push(LexError::interior_null(Span::new(pos, pos + 1)).with_context(context));
        }
    }

    #[inline]
    fn text(&self, span: Span) -> &'src str {
        self.source.get(span.to_range()).unwrap_or("")
    }
}
