//! Unicode classification for identifiers.
//!
//! Identifiers start with a letter (general categories Lu, Ll, Lt, Lm, Lo,
//! Nl) or `_`, and continue with letters, `_`, or decimal digits (Nd).
//! Category data comes from `unicode-general-category`; ASCII bytes are
//! answered from lookup tables without decoding.

use unicode_general_category::{get_general_category, GeneralCategory};

/// The general categories that matter to the lexer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnicodeClass {
    /// Lowercase letter.
    Ll,
    /// Modifier letter.
    Lm,
    /// Other letter (CJK ideographs, Hebrew, Arabic, ...).
    Lo,
    /// Titlecase letter.
    Lt,
    /// Uppercase letter.
    Lu,
    /// Decimal digit.
    Nd,
    /// Letter number (Roman numerals, ...).
    Nl,
}

impl UnicodeClass {
    /// Returns `true` for the classes that can start an identifier.
    pub fn is_letter(self) -> bool {
        !matches!(self, UnicodeClass::Nd)
    }
}

/// Classify `c`, returning `None` for categories identifiers never use.
pub fn classify(c: char) -> Option<UnicodeClass> {
    match get_general_category(c) {
        GeneralCategory::LowercaseLetter => Some(UnicodeClass::Ll),
        GeneralCategory::ModifierLetter => Some(UnicodeClass::Lm),
        GeneralCategory::OtherLetter => Some(UnicodeClass::Lo),
        GeneralCategory::TitlecaseLetter => Some(UnicodeClass::Lt),
        GeneralCategory::UppercaseLetter => Some(UnicodeClass::Lu),
        GeneralCategory::DecimalNumber => Some(UnicodeClass::Nd),
        GeneralCategory::LetterNumber => Some(UnicodeClass::Nl),
        _ => None,
    }
}

/// 256-entry table for ASCII identifier-start bytes: `a-z`, `A-Z`, `_`.
///
/// Non-ASCII bytes map to `false`; callers decode and use [`is_ident_start`].
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_ASCII_IDENT_START: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 128 {
        table[i as usize] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'_');
        i += 1;
    }
    table
};

/// 256-entry table for ASCII identifier-continue bytes: `a-z`, `A-Z`, `0-9`, `_`.
///
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_ASCII_IDENT_CONTINUE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 128 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// ASCII-only identifier-start test on a raw byte.
#[inline]
pub fn is_ascii_ident_start(b: u8) -> bool {
    IS_ASCII_IDENT_START[b as usize]
}

/// ASCII-only identifier-continue test on a raw byte.
#[inline]
pub fn is_ascii_ident_continue(b: u8) -> bool {
    IS_ASCII_IDENT_CONTINUE[b as usize]
}

/// Unicode letter: Lu, Ll, Lt, Lm, Lo or Nl.
#[inline]
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    classify(c).is_some_and(UnicodeClass::is_letter)
}

/// Can `c` start an identifier?
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || is_letter(c)
}

/// Can `c` continue an identifier?
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '_';
    }
    classify(c).is_some()
}
