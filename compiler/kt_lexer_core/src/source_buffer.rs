//! Owned, NUL-padded copy of one source unit.
//!
//! Scanning loops stop on byte `0`, so the copy is followed by zeros up to
//! the next multiple of [`PADDING_ALIGN`] (at least one). Lookahead a few
//! bytes past the end therefore reads `0` rather than panicking.
//!
//! A NUL can also be part of the text itself. Such bytes are legal in a
//! `&str` but never in Kotlin, so their offsets are indexed up front; the
//! cooking layer reports each one, even inside comments and strings.

use crate::Cursor;

/// The padded length is a multiple of this.
const PADDING_ALIGN: usize = 64;

/// Source text plus trailing NUL padding.
///
/// ```text
/// | source (len bytes) | 0 | 0 ... 0 |
/// 0                    len           multiple of 64
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Source followed by the padding. Still valid UTF-8.
    text: String,
    len: u32,
    /// Offsets of NULs written in the source, ascending.
    nul_positions: Vec<u32>,
}

impl SourceBuffer {
    /// Copy `source` into a padded buffer.
    ///
    /// Spans are `u32`; anything past `u32::MAX` bytes is dropped at the
    /// last character boundary that fits.
    pub fn new(source: &str) -> Self {
        let source = clamp_len(source);
        let padded = (source.len() / PADDING_ALIGN + 1) * PADDING_ALIGN;

        let mut text = String::with_capacity(padded);
        text.push_str(source);
        text.extend(std::iter::repeat('\0').take(padded - source.len()));

        Self {
            len: u32::try_from(source.len()).unwrap_or(u32::MAX),
            nul_positions: memchr::memchr_iter(0, source.as_bytes())
                .filter_map(|pos| u32::try_from(pos).ok())
                .collect(),
            text,
        }
    }

    /// The source, without padding.
    pub fn as_str(&self) -> &str {
        &self.text[..self.len as usize]
    }

    /// A cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text, self.len)
    }

    /// Source length in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn nul_positions(&self) -> &[u32] {
        &self.nul_positions
    }
}

fn clamp_len(source: &str) -> &str {
    let mut end = source.len().min(u32::MAX as usize);
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    &source[..end]
}

#[cfg(test)]
mod tests;
