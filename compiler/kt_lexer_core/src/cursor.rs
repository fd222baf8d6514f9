//! Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Reads never go out of bounds: the buffer ends in at least one `0x00`
//! byte, so every scanning loop that stops on `0` stops at end of input.
//! A `0` below `source_len` is a NUL the user wrote; only at or past
//! `source_len` does it mean end of input.

/// Position in a padded source buffer.
///
/// `Copy`, so a scanner can save a cursor, probe ahead, and restore it.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source followed by the NUL padding.
    text: &'a str,
    pos: u32,
    /// Byte length of the real source.
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// `text[source_len]` must exist and be `0`.
    pub(crate) fn new(text: &'a str, source_len: u32) -> Self {
        debug_assert_eq!(
            text.as_bytes().get(source_len as usize),
            Some(&0),
            "buffer must be NUL-padded past the source"
        );
        Self {
            text,
            pos: 0,
            source_len,
        }
    }

    /// Byte under the cursor; `0` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.text.as_bytes()[self.pos as usize]
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_at(1)
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.peek_at(2)
    }

    /// Byte `n` ahead of the cursor, `0` once past the padding.
    #[inline]
    pub fn peek_at(&self, n: u32) -> u8 {
        self.text
            .as_bytes()
            .get((self.pos + n) as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Character under the cursor, `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Character starting `n` bytes ahead. `pos + n` must be a character
    /// boundary; the scanner only moves by whole characters.
    pub fn char_at(&self, n: u32) -> char {
        self.text
            .get((self.pos + n) as usize..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Step over the whole character under the cursor.
    #[inline]
    pub fn advance_char(&mut self) {
        #[allow(clippy::cast_possible_truncation, reason = "len_utf8() <= 4")]
        let width = self.current_char().len_utf8() as u32;
        self.pos += width;
    }

    /// At the padding, as opposed to a NUL inside the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source text of `start..end`. Both ends must be token boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end && end <= self.source_len, "bad slice {start}..{end}");
        &self.text[start as usize..end as usize]
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Move forward while `pred` holds. `pred(0)` must be `false`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// How many `byte`s in a row start at the cursor.
    pub fn count_run(&self, byte: u8) -> u32 {
        let mut n = 0;
        while self.peek_at(n) == byte {
            n += 1;
        }
        n
    }

    /// Space, tab and form feed.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | 0x0C));
    }

    /// Stop before the next `\n` or `\r`, or at end of input.
    pub fn eat_until_line_end(&mut self) {
        self.skip_to(|rest| memchr::memchr2(b'\n', b'\r', rest));
    }

    /// Line string text ends at `"`, `\`, `$` or a NUL. Returns the byte
    /// stopped on, `0` at end of input.
    pub fn skip_to_line_string_delim(&mut self) -> u8 {
        self.skip_to(|rest| {
            let special = memchr::memchr3(b'"', b'\\', b'$', rest);
            let limit = special.unwrap_or(rest.len());
            memchr::memchr(0, &rest[..limit]).or(special)
        })
    }

    /// Multi-line string text ends at `"`, `$` or a NUL; `\` is literal.
    pub fn skip_to_multi_line_delim(&mut self) -> u8 {
        self.skip_to(|rest| memchr::memchr3(b'"', b'$', 0, rest))
    }

    /// Inside `/* */` only `*` and `/` matter.
    pub fn skip_to_comment_delim(&mut self) -> u8 {
        self.skip_to(|rest| memchr::memchr2(b'*', b'/', rest))
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are below source_len, a u32"
    )]
    fn skip_to(&mut self, find: impl Fn(&[u8]) -> Option<usize>) -> u8 {
        let rest = &self.text.as_bytes()[self.pos as usize..self.source_len as usize];
        match find(rest) {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }
}

#[cfg(test)]
mod tests;
