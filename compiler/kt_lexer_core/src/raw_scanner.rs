//! Hand-written, mode-aware raw scanner producing `(RawTag, len, mode)`.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and an explicit
//! [`ModeStack`]. It does not resolve keywords or validate escapes; those are
//! deferred to the cooking layer.
//!
//! # Design
//!
//! `next_token()` first dispatches on the current mode, then on the current
//! byte. Each arm calls a focused method that advances the cursor, pushes or
//! pops frames, and returns a [`RawToken`]. The sentinel byte (`0x00`)
//! dispatches to `nul_or_eof()` in every mode.
//!
//! Scanning never fails: problems are encoded as error tags and the cursor
//! always moves forward (only end-of-input markers are zero-length).

use crate::cursor::Cursor;
use crate::mode::{Mode, ModeStack, Opener};
use crate::tag::{RawTag, RawToken};
use crate::unicode::{self, is_ascii_ident_continue, is_ascii_ident_start};

/// Pure scanner over one source unit.
///
/// Produces one token at a time. Error conditions are encoded as `RawTag`
/// variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    modes: ModeStack,
    /// Mode at the start of the token being scanned.
    scan_mode: Mode,
    /// Offset where a shebang may appear: 0, or 3 after a byte order mark.
    unit_start: u32,
    recognize_shebang: bool,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor, starting in `Default` mode.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self::with_root_mode(cursor, Mode::Default)
    }

    /// Create a scanner whose root frame scans in `mode`.
    pub fn with_root_mode(cursor: Cursor<'a>, mode: Mode) -> Self {
        let unit_start = if cursor.current_char() == '\u{FEFF}' {
            3
        } else {
            0
        };
        Self {
            cursor,
            modes: ModeStack::with_root_mode(mode),
            scan_mode: mode,
            unit_start,
            recognize_shebang: true,
        }
    }

    /// Enable or disable `#!` shebang recognition (enabled by default).
    #[must_use]
    pub fn recognize_shebang(mut self, enabled: bool) -> Self {
        self.recognize_shebang = enabled;
        self
    }

    /// The live mode stack.
    pub fn mode_stack(&self) -> &ModeStack {
        &self.modes
    }

    /// Mode the next token will be scanned in.
    pub fn current_mode(&self) -> Mode {
        self.modes.current()
    }

    /// Byte offset of the next token.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// At end of input, each string frame still open yields a zero-length
    /// `UnterminatedString` (innermost first); after that the stack is
    /// back at its root and every call returns `Eof` with `len == 0`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        self.scan_mode = self.modes.current();
        match self.scan_mode {
            Mode::Default | Mode::Inside => self.code(start),
            Mode::LineString => self.line_string(start),
            Mode::MultiLineString => self.multi_line_string(start),
        }
    }

    #[inline]
    fn token(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
            mode: self.scan_mode,
        }
    }

    // ─── Code (Default & Inside) ─────────────────────────────────────

    fn code(&mut self, start: u32) -> RawToken {
        match self.cursor.current() {
            0 => self.nul_or_eof(start),
            b' ' | b'\t' | 0x0C => self.whitespace(start),
            b'\n' | b'\r' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'`' => self.backtick_identifier(start),
            b'$' if self.at_ident_start(1) => self.field_identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string_open(start),
            b'\'' => self.char_literal(start),
            b'/' => self.slash(start),
            b'*' => self.with_assign(start, RawTag::Star, RawTag::StarEqual),
            b'%' => self.with_assign(start, RawTag::Percent, RawTag::PercentEqual),
            b'<' => self.with_assign(start, RawTag::Less, RawTag::LessEqual),
            b'>' => self.with_assign(start, RawTag::Greater, RawTag::GreaterEqual),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b'.' => self.dot(start),
            b'?' => self.question(start),
            b'@' => self.at(start),
            b':' => self.single_or_pair(start, RawTag::Colon, RawTag::ColonColon),
            b';' => self.single_or_pair(start, RawTag::Semicolon, RawTag::SemiSemi),
            b'&' => self.pair_only(start, RawTag::AmpAmp),
            b'|' => self.pair_only(start, RawTag::PipePipe),
            b',' => self.single(start, RawTag::Comma),
            b'#' => self.hash(start),
            b'(' => self.open_group(start, Opener::Paren, RawTag::LeftParen),
            b'[' => self.open_group(start, Opener::Bracket, RawTag::LeftBracket),
            b')' => self.close_group(start, Opener::Paren, RawTag::RightParen),
            b']' => self.close_group(start, Opener::Bracket, RawTag::RightBracket),
            b'{' => self.left_brace(start),
            b'}' => self.right_brace(start),
            0x80..=0xFF => self.non_ascii(start),
            // lone `$`, `\`, `~`, `^`, control characters and DEL
            _ => self.invalid_char(start),
        }
    }

    // ─── EOF & Errors ────────────────────────────────────────────────

    fn nul_or_eof(&mut self, start: u32) -> RawToken {
        if !self.cursor.is_eof() {
            self.cursor.advance();
            return self.token(RawTag::InteriorNull, start);
        }
        if let Some(frame) = self.modes.unwind_string() {
            return RawToken {
                tag: RawTag::UnterminatedString,
                len: 0,
                mode: frame.mode,
            };
        }
        self.modes.reset();
        self.token(RawTag::Eof, start)
    }

    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(RawTag::InvalidChar, start)
    }

    // ─── Whitespace & Newlines ───────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(RawTag::Whitespace, start)
    }

    fn newline(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'\r' {
            self.cursor.advance();
            if self.cursor.current() == b'\n' {
                self.cursor.advance();
            }
        } else {
            self.cursor.advance();
        }
        self.token(RawTag::Newline, start)
    }

    /// Does whitespace, a newline or a comment start `n` bytes ahead?
    fn at_trivia(&self, n: u32) -> bool {
        match self.cursor.peek_at(n) {
            b' ' | b'\t' | 0x0C | b'\n' | b'\r' => true,
            b'/' => matches!(self.cursor.peek_at(n + 1), b'/' | b'*'),
            _ => false,
        }
    }

    /// Consume one whitespace character or one newline, if present.
    fn eat_separator(&mut self) -> bool {
        match self.cursor.current() {
            b' ' | b'\t' | 0x0C | b'\n' => {
                self.cursor.advance();
                true
            }
            b'\r' => {
                self.cursor.advance();
                if self.cursor.current() == b'\n' {
                    self.cursor.advance();
                }
                true
            }
            _ => false,
        }
    }

    // ─── Comments ────────────────────────────────────────────────────

    fn slash(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.eat_until_line_end();
                self.token(RawTag::LineComment, start)
            }
            b'*' => self.block_comment(start),
            b'=' => {
                self.cursor.advance_n(2);
                self.token(RawTag::SlashEqual, start)
            }
            _ => self.single(start, RawTag::Slash),
        }
    }

    /// `/* ... */` with nesting. `/**` opens a doc comment unless it is the
    /// empty comment `/**/`.
    fn block_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(2); // consume "/*"
        let is_doc = self.cursor.current() == b'*' && self.cursor.peek() != b'/';
        let mut depth = 1u32;
        loop {
            match self.cursor.skip_to_comment_delim() {
                b'*' if self.cursor.peek() == b'/' => {
                    self.cursor.advance_n(2);
                    depth -= 1;
                    if depth == 0 {
                        let tag = if is_doc {
                            RawTag::DocComment
                        } else {
                            RawTag::BlockComment
                        };
                        return self.token(tag, start);
                    }
                }
                b'/' if self.cursor.peek() == b'*' => {
                    self.cursor.advance_n(2);
                    depth += 1;
                }
                0 => return self.token(RawTag::UnterminatedComment, start),
                _ => self.cursor.advance(),
            }
        }
    }

    fn hash(&mut self, start: u32) -> RawToken {
        if self.recognize_shebang && start == self.unit_start && self.cursor.peek() == b'!' {
            self.cursor.eat_until_line_end();
            return self.token(RawTag::Shebang, start);
        }
        self.single(start, RawTag::Hash)
    }

    // ─── Identifiers ─────────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.eat_ident_continue();
        let end = self.cursor.pos();
        match self.cursor.current() {
            b'@' => self.label_suffix(start, end),
            b'?' if self.cursor.slice(start, end) == "as" => {
                self.cursor.advance();
                self.token(RawTag::AsSafe, start)
            }
            _ => self.token(RawTag::Ident, start),
        }
    }

    /// `label@`, or `return@label` and friends.
    fn label_suffix(&mut self, start: u32, end: u32) -> RawToken {
        let word = self.cursor.slice(start, end);
        self.cursor.advance(); // consume '@'
        if is_labelled_jump_keyword(word) && self.at_ident_start(0) {
            self.eat_ident_continue();
            return self.token(RawTag::LabelledJump, start);
        }
        self.token(RawTag::IdentAt, start)
    }

    fn field_identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '$'
        self.eat_ident_continue();
        self.token(RawTag::FieldIdent, start)
    }

    fn eat_ident_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if b < 0x80 {
                if !is_ascii_ident_continue(b) {
                    break;
                }
                self.cursor.advance();
            } else if unicode::is_ident_continue(self.cursor.current_char()) {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
    }

    /// Does an identifier start `n` bytes ahead?
    fn at_ident_start(&self, n: u32) -> bool {
        let b = self.cursor.peek_at(n);
        if b < 0x80 {
            is_ascii_ident_start(b)
        } else {
            unicode::is_ident_start(self.cursor.char_at(n))
        }
    }

    /// Does an identifier character follow `n` bytes ahead?
    fn at_ident_continue(&self, n: u32) -> bool {
        let b = self.cursor.peek_at(n);
        if b < 0x80 {
            is_ascii_ident_continue(b)
        } else {
            unicode::is_ident_continue(self.cursor.char_at(n))
        }
    }

    fn backtick_identifier(&mut self, start: u32) -> RawToken {
        let saved = self.cursor;
        self.cursor.advance(); // consume opening '`'
        self.cursor
            .eat_while(|b| !matches!(b, b'`' | b'\n' | b'\r' | 0));
        if self.cursor.current() == b'`' && self.cursor.pos() > start + 1 {
            self.cursor.advance();
            return self.token(RawTag::BacktickIdent, start);
        }
        self.cursor = saved;
        self.invalid_char(start)
    }

    fn non_ascii(&mut self, start: u32) -> RawToken {
        let c = self.cursor.current_char();
        if c == '\u{FEFF}' && start == 0 {
            self.cursor.advance_char();
            return self.token(RawTag::ByteOrderMark, start);
        }
        if unicode::is_ident_start(c) {
            return self.identifier(start);
        }
        self.invalid_char(start)
    }

    // ─── Operators ───────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(tag, start)
    }

    /// `x` or `xx`, e.g. `:` / `::`.
    fn single_or_pair(&mut self, start: u32, single: RawTag, pair: RawTag) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();
        if self.cursor.current() == first {
            self.cursor.advance();
            return self.token(pair, start);
        }
        self.token(single, start)
    }

    /// `&&` and `||`; a lone `&` or `|` has no rule.
    fn pair_only(&mut self, start: u32, pair: RawTag) -> RawToken {
        if self.cursor.peek() == self.cursor.current() {
            self.cursor.advance_n(2);
            return self.token(pair, start);
        }
        self.invalid_char(start)
    }

    /// `x` or `x=`, e.g. `*` / `*=`.
    fn with_assign(&mut self, start: u32, plain: RawTag, assign: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            return self.token(assign, start);
        }
        self.token(plain, start)
    }

    fn plus(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '+'
        match self.cursor.current() {
            b'+' => self.single(start, RawTag::PlusPlus),
            b'=' => self.single(start, RawTag::PlusEqual),
            _ => self.token(RawTag::Plus, start),
        }
    }

    fn minus(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '-'
        match self.cursor.current() {
            b'-' => self.single(start, RawTag::MinusMinus),
            b'=' => self.single(start, RawTag::MinusEqual),
            b'>' => self.single(start, RawTag::Arrow),
            _ => self.token(RawTag::Minus, start),
        }
    }

    fn equal(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '='
        match self.cursor.current() {
            b'=' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.single(start, RawTag::EqualEqualEqual)
                } else {
                    self.token(RawTag::EqualEqual, start)
                }
            }
            b'>' => self.single(start, RawTag::FatArrow),
            _ => self.token(RawTag::Equal, start),
        }
    }

    fn bang(&mut self, start: u32) -> RawToken {
        // `!is` / `!in` only when trivia follows; `!is(` is `!` then `is`.
        if self.cursor.peek() == b'i'
            && matches!(self.cursor.peek2(), b's' | b'n')
            && self.at_trivia(3)
        {
            let tag = if self.cursor.peek2() == b's' {
                RawTag::NotIs
            } else {
                RawTag::NotIn
            };
            self.cursor.advance_n(3);
            self.eat_separator();
            return self.token(tag, start);
        }

        self.cursor.advance(); // consume '!'
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            if self.cursor.current() == b'=' {
                return self.single(start, RawTag::BangEqualEqual);
            }
            return self.token(RawTag::BangEqual, start);
        }
        if self.eat_separator() {
            return self.token(RawTag::BangWs, start);
        }
        self.token(RawTag::Bang, start)
    }

    fn question(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '?'
        if self.eat_separator() {
            return self.token(RawTag::QuestionWs, start);
        }
        self.token(RawTag::Question, start)
    }

    /// `@`, `@` + whitespace, or an annotation use-site target.
    fn at(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '@'
        if self.eat_separator() {
            return self.token(RawTag::AtWs, start);
        }
        if self.at_ident_start(0) {
            let saved = self.cursor;
            let word_start = self.cursor.pos();
            self.eat_ident_continue();
            if is_use_site_target(self.cursor.slice_from(word_start)) {
                return self.token(RawTag::UseSiteTarget, start);
            }
            self.cursor = saved;
        }
        self.token(RawTag::At, start)
    }

    fn dot(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'.' => {
                self.cursor.advance_n(2);
                if self.cursor.current() == b'.' {
                    return self.single(start, RawTag::Ellipsis);
                }
                self.token(RawTag::DotDot, start)
            }
            b'0'..=b'9' => {
                self.cursor.advance(); // consume '.'
                self.eat_digits(|b| b.is_ascii_digit());
                self.eat_exponent();
                self.float_suffix(start, RawTag::Double)
            }
            _ => self.single(start, RawTag::Dot),
        }
    }

    // ─── Delimiters (mode-aware) ─────────────────────────────────────

    fn open_group(&mut self, start: u32, opener: Opener, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.modes.push(opener, start);
        self.token(tag, start)
    }

    fn close_group(&mut self, start: u32, opener: Opener, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.modes.close_group(opener);
        self.token(tag, start)
    }

    fn left_brace(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.modes.push(Opener::Brace, start);
        self.token(RawTag::LeftBrace, start)
    }

    /// `}` closes a block or an interpolation. Closing an interpolation
    /// resumes the string it was opened in.
    fn right_brace(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.modes.close_brace();
        self.token(RawTag::RightBrace, start)
    }

    // ─── Numeric Literals ────────────────────────────────────────────

    #[inline]
    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();

        // 0x / 0X needs at least one hex digit, otherwise `0` stands alone
        if first == b'0'
            && matches!(self.cursor.peek(), b'x' | b'X')
            && self.cursor.peek2().is_ascii_hexdigit()
        {
            self.cursor.advance_n(2);
            self.eat_digits(|b| b.is_ascii_hexdigit());
            return self.long_suffix(start, RawTag::HexInt);
        }

        if first == b'0'
            && matches!(self.cursor.peek(), b'b' | b'B')
            && matches!(self.cursor.peek2(), b'0' | b'1')
        {
            self.cursor.advance_n(2);
            self.eat_digits(|b| b == b'0' || b == b'1');
            return self.long_suffix(start, RawTag::BinInt);
        }

        self.eat_digits(|b| b.is_ascii_digit());

        // Fraction only when a digit follows the dot: `1..2` is a range
        let mut tag = RawTag::Int;
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.eat_digits(|b| b.is_ascii_digit());
            tag = RawTag::Double;
        }
        if self.eat_exponent() {
            tag = RawTag::Double;
        }

        if tag == RawTag::Int && self.cursor.current() == b'L' {
            return self.single(start, RawTag::Long);
        }
        self.float_suffix(start, tag)
    }

    /// Digits with `_` separators between them (never leading or trailing).
    ///
    /// The current byte must already satisfy `is_digit`.
    fn eat_digits(&mut self, is_digit: impl Fn(u8) -> bool) {
        self.cursor.eat_while(&is_digit);
        while self.cursor.current() == b'_' {
            let mut probe = self.cursor;
            probe.eat_while(|b| b == b'_');
            if !is_digit(probe.current()) {
                break;
            }
            self.cursor = probe;
            self.cursor.eat_while(&is_digit);
        }
    }

    /// `[eE][+-]?digits`. Backs off entirely if no digit follows.
    fn eat_exponent(&mut self) -> bool {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return false;
        }
        let saved = self.cursor;
        self.cursor.advance();
        if matches!(self.cursor.current(), b'+' | b'-') {
            self.cursor.advance();
        }
        if !self.cursor.current().is_ascii_digit() {
            self.cursor = saved;
            return false;
        }
        self.eat_digits(|b| b.is_ascii_digit());
        true
    }

    fn float_suffix(&mut self, start: u32, tag: RawTag) -> RawToken {
        if matches!(self.cursor.current(), b'f' | b'F') {
            return self.single(start, RawTag::Float);
        }
        self.token(tag, start)
    }

    fn long_suffix(&mut self, start: u32, tag: RawTag) -> RawToken {
        if self.cursor.current() == b'L' {
            return self.single(start, RawTag::Long);
        }
        self.token(tag, start)
    }

    // ─── Character Literals ──────────────────────────────────────────

    /// `'c'` or `'\x'`. Anything else leaves a lone `SingleQuote`.
    fn char_literal(&mut self, start: u32) -> RawToken {
        let saved = self.cursor;
        self.cursor.advance(); // consume opening '\''
        match self.cursor.current() {
            b'\\' => {
                self.cursor.advance();
                self.eat_escape_body();
            }
            b'\'' | b'\n' | b'\r' | 0 => {
                self.cursor = saved;
                return self.single(start, RawTag::SingleQuote);
            }
            _ => self.cursor.advance_char(),
        }
        if self.cursor.current() == b'\'' {
            return self.single(start, RawTag::Char);
        }
        self.cursor = saved;
        self.single(start, RawTag::SingleQuote)
    }

    /// Everything after a `\`: `u` plus up to four hex digits, or one
    /// character. A `\` right before a NUL or EOF stands alone.
    fn eat_escape_body(&mut self) {
        match self.cursor.current() {
            b'u' => {
                self.cursor.advance();
                let mut digits = 0;
                while digits < 4 && self.cursor.current().is_ascii_hexdigit() {
                    self.cursor.advance();
                    digits += 1;
                }
            }
            0 => {}
            _ => self.cursor.advance_char(),
        }
    }

    // ─── Strings ─────────────────────────────────────────────────────

    fn string_open(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'"' && self.cursor.peek2() == b'"' {
            self.cursor.advance_n(3);
            self.modes.push(Opener::TripleQuote, start);
            return self.token(RawTag::TripleQuoteOpen, start);
        }
        self.cursor.advance();
        self.modes.push(Opener::LineQuote, start);
        self.token(RawTag::QuoteOpen, start)
    }

    fn line_string(&mut self, start: u32) -> RawToken {
        match self.cursor.current() {
            0 => self.nul_or_eof(start),
            b'"' => {
                self.cursor.advance();
                self.modes.close_string();
                self.token(RawTag::QuoteClose, start)
            }
            b'\\' => {
                self.cursor.advance();
                self.eat_escape_body();
                self.token(RawTag::LineStrEscape, start)
            }
            b'$' if self.at_interpolation() => {
                self.interpolation(start, RawTag::LineStrRef, RawTag::LineStrExprStart)
            }
            _ => self.string_text(start, Cursor::skip_to_line_string_delim, RawTag::LineStrText),
        }
    }

    fn multi_line_string(&mut self, start: u32) -> RawToken {
        match self.cursor.current() {
            0 => self.nul_or_eof(start),
            b'"' => self.multi_line_quotes(start),
            b'$' if self.at_interpolation() => self.interpolation(
                start,
                RawTag::MultiLineStrRef,
                RawTag::MultiLineStrExprStart,
            ),
            _ => self.string_text(
                start,
                Cursor::skip_to_multi_line_delim,
                RawTag::MultiLineStrText,
            ),
        }
    }

    /// A run of quotes inside `"""..."""`.
    ///
    /// Exactly three close the string. Longer runs give up their leading
    /// quotes as content first; shorter runs are content.
    fn multi_line_quotes(&mut self, start: u32) -> RawToken {
        let run = self.cursor.count_run(b'"');
        match run {
            3 => {
                self.cursor.advance_n(3);
                self.modes.close_string();
                self.token(RawTag::TripleQuoteClose, start)
            }
            0..=2 => {
                self.cursor.advance_n(run);
                self.token(RawTag::MultiLineQuote, start)
            }
            _ => {
                self.cursor.advance_n(run - 3);
                self.token(RawTag::MultiLineQuote, start)
            }
        }
    }

    /// `$` followed by `{` or an identifier start.
    fn at_interpolation(&self) -> bool {
        self.cursor.peek() == b'{' || self.at_ident_start(1)
    }

    /// `${` pushes an interpolation frame; `$name` is a reference.
    fn interpolation(&mut self, start: u32, reference: RawTag, expr_start: RawTag) -> RawToken {
        if self.cursor.peek() == b'{' {
            self.cursor.advance_n(2);
            self.modes.push(Opener::Interpolation, start);
            return self.token(expr_start, start);
        }
        self.cursor.advance(); // consume '$'
        self.eat_ident_continue();
        self.token(reference, start)
    }

    /// Maximal text run. A `$` that starts nothing is ordinary text.
    fn string_text(
        &mut self,
        start: u32,
        skip: fn(&mut Cursor<'a>) -> u8,
        tag: RawTag,
    ) -> RawToken {
        loop {
            if skip(&mut self.cursor) == b'$' && !self.at_interpolation() {
                self.cursor.advance();
                continue;
            }
            break;
        }
        self.token(tag, start)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Keywords that take a `@label` suffix.
fn is_labelled_jump_keyword(word: &str) -> bool {
    matches!(word, "return" | "continue" | "break" | "this" | "super")
}

/// Annotation use-site targets recognized after `@`.
fn is_use_site_target(word: &str) -> bool {
    matches!(
        word,
        "file"
            | "field"
            | "property"
            | "get"
            | "set"
            | "receiver"
            | "param"
            | "setparam"
            | "delegate"
    )
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns every token except the final `Eof`, including the zero-length
/// `UnterminatedString` markers. For streaming access, construct a
/// `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
