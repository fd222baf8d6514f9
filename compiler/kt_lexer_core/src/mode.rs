//! Lexical modes and the mode stack.
//!
//! Every token is scanned under exactly one [`Mode`], the mode of the top
//! [`Frame`] of the [`ModeStack`]. Opening delimiters push frames; closing
//! delimiters pop them. The stack is what lets `"a ${ "b ${c}" } d"` resume
//! the right string after each `}`.
//!
//! The bottom frame is the root. It is never popped, so the stack is never
//! empty and `pop()` at the root is a no-op.

use smallvec::SmallVec;

/// Named lexical context determining which rules are active.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum Mode {
    /// Top-level code and `{ ... }` blocks.
    #[default]
    Default,
    /// Expression context inside `${ ... }`, `( ... )` or `[ ... ]`.
    Inside,
    /// Body of a `"..."` string.
    LineString,
    /// Body of a `"""..."""` string.
    MultiLineString,
}

impl Mode {
    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Default => "Default",
            Mode::Inside => "Inside",
            Mode::LineString => "LineString",
            Mode::MultiLineString => "MultiLineString",
        }
    }

    /// Returns `true` for the two string body modes.
    pub fn is_string(self) -> bool {
        matches!(self, Mode::LineString | Mode::MultiLineString)
    }

    /// Parse a mode name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Mode> {
        [
            Mode::Default,
            Mode::Inside,
            Mode::LineString,
            Mode::MultiLineString,
        ]
        .into_iter()
        .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }
}

/// What pushed a frame.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Opener {
    /// The bottom frame; nothing opened it.
    Root,
    /// `(`
    Paren,
    /// `[`
    Bracket,
    /// `{` in code.
    Brace,
    /// `${` in a string.
    Interpolation,
    /// `"`
    LineQuote,
    /// `"""`
    TripleQuote,
}

impl Opener {
    /// The mode a frame opened by `self` scans in.
    ///
    /// `Root` answers `Default`; a configured root mode overrides it.
    pub fn mode(self) -> Mode {
        match self {
            Opener::Root | Opener::Brace => Mode::Default,
            Opener::Paren | Opener::Bracket | Opener::Interpolation => Mode::Inside,
            Opener::LineQuote => Mode::LineString,
            Opener::TripleQuote => Mode::MultiLineString,
        }
    }

    /// Returns `true` for string openers.
    pub fn is_string(self) -> bool {
        matches!(self, Opener::LineQuote | Opener::TripleQuote)
    }
}

/// One entry of the mode stack.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Frame {
    /// Mode active while this frame is on top.
    pub mode: Mode,
    /// Delimiter that pushed the frame.
    pub opener: Opener,
    /// Byte offset of that delimiter.
    pub start: u32,
}

/// Explicit stack of lexical modes. Last frame is current.
///
/// Eight inline frames cover ordinary nesting without allocating.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModeStack {
    frames: SmallVec<[Frame; 8]>,
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeStack {
    /// A stack holding only the `Default` root frame.
    pub fn new() -> Self {
        Self::with_root_mode(Mode::Default)
    }

    /// A stack whose root frame scans in `mode`.
    pub fn with_root_mode(mode: Mode) -> Self {
        let mut frames = SmallVec::new();
        frames.push(Frame {
            mode,
            opener: Opener::Root,
            start: 0,
        });
        Self { frames }
    }

    /// Mode of the top frame.
    #[inline]
    pub fn current(&self) -> Mode {
        self.top().mode
    }

    /// The top frame.
    #[inline]
    pub fn top(&self) -> Frame {
        self.frames[self.frames.len() - 1]
    }

    /// Number of frames, root included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` when only the root frame remains.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.frames.len() == 1
    }

    /// All frames, bottom first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Push a frame for `opener` found at byte `start`.
    pub fn push(&mut self, opener: Opener, start: u32) {
        self.frames.push(Frame {
            mode: opener.mode(),
            opener,
            start,
        });
    }

    /// Pop the top frame. Returns `None` (and changes nothing) at the root.
    pub fn pop(&mut self) -> Option<Frame> {
        if self.is_root() {
            None
        } else {
            self.frames.pop()
        }
    }

    /// Close a `)` or `]` group whose frame was pushed by `opener`.
    ///
    /// Pops down to and including the nearest `opener` frame, but never
    /// across a brace, interpolation or string frame. Returns the closed
    /// frame, or `None` when the closer is unmatched and nothing changed.
    pub fn close_group(&mut self, opener: Opener) -> Option<Frame> {
        let target = self.frames.iter().rposition(|frame| {
            frame.opener == opener
                || !matches!(frame.opener, Opener::Paren | Opener::Bracket)
        })?;
        self.truncate_to(target, opener)
    }

    /// Close a `}`.
    ///
    /// Pops the nearest `Brace` or `Interpolation` frame together with any
    /// unclosed `(`/`[` frames above it. String frames and the root are
    /// barriers: a `}` never closes anything outside its own string.
    pub fn close_brace(&mut self) -> Option<Frame> {
        let target = self.frames.iter().rposition(|frame| {
            matches!(
                frame.opener,
                Opener::Brace | Opener::Interpolation | Opener::Root
            ) || frame.opener.is_string()
        })?;
        let opener = self.frames[target].opener;
        match opener {
            Opener::Brace | Opener::Interpolation => self.truncate_to(target, opener),
            _ => None,
        }
    }

    /// Pop the string frame on top of the stack, if there is one.
    pub fn close_string(&mut self) -> Option<Frame> {
        if self.top().opener.is_string() {
            self.frames.pop()
        } else {
            None
        }
    }

    /// The innermost string frame still open, if any.
    pub fn innermost_string(&self) -> Option<Frame> {
        self.frames.iter().rev().find(|frame| frame.opener.is_string()).copied()
    }

    /// Pop frames down to and including the innermost open string frame.
    ///
    /// Used at end of input to report unterminated strings innermost first.
    pub fn unwind_string(&mut self) -> Option<Frame> {
        let target = self.frames.iter().rposition(|frame| frame.opener.is_string())?;
        let frame = self.frames[target];
        self.frames.truncate(target);
        Some(frame)
    }

    /// Drop every frame above the root.
    pub fn reset(&mut self) {
        self.frames.truncate(1);
    }

    /// Remove `frames[index..]` if `frames[index]` was opened by `expected`.
    fn truncate_to(&mut self, index: usize, expected: Opener) -> Option<Frame> {
        let frame = self.frames[index];
        if frame.opener != expected || index == 0 {
            return None;
        }
        self.frames.truncate(index);
        Some(frame)
    }
}
