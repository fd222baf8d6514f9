//! Low-level scanner for Kotlin-like source text.
//!
//! This crate owns everything that needs to look at bytes: the
//! sentinel-terminated [`SourceBuffer`], the [`Cursor`] over it, Unicode
//! identifier classification, the lexical [`ModeStack`], and the
//! [`RawScanner`] that turns source text into `(RawTag, len, mode)` triples.
//!
//! Keyword resolution, escape validation, channel assignment and error
//! reporting live one layer up, in `kt_lexer`.
//!
//! ```text
//! &str → SourceBuffer → Cursor → RawScanner (+ ModeStack) → RawToken
//! ```

mod cursor;
mod mode;
mod raw_scanner;
mod source_buffer;
mod tag;
pub mod unicode;

pub use cursor::Cursor;
pub use mode::{Frame, Mode, ModeStack, Opener};
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
