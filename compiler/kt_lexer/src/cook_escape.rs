//! Escape resolution for line strings and character literals.
//!
//! Recognized escapes: `\t` `\b` `\r` `\n` `\'` `\"` `\\` `\$` and
//! `\uXXXX` with exactly four hex digits. Multi-line strings are raw and
//! never reach this module.
//!
//! The raw scanner already split the escape off as its own token; these
//! functions only decide whether it is valid and what it denotes.

/// Resolve an escape token's text (including the `\`) to its character.
///
/// Returns `None` for an unrecognized escape. A `\u` escape naming a UTF-16
/// surrogate is valid source but has no `char`; it resolves to U+FFFD.
pub fn resolve_escape(text: &str) -> Option<char> {
    let mut chars = text.strip_prefix('\\')?.chars();
    let c = match chars.next()? {
        't' => '\t',
        'b' => '\u{8}',
        'r' => '\r',
        'n' => '\n',
        '\'' => '\'',
        '"' => '"',
        '\\' => '\\',
        '$' => '$',
        'u' => return resolve_unicode(chars.as_str()),
        _ => return None,
    };
    chars.next().is_none().then_some(c)
}

/// Four hex digits, nothing more.
fn resolve_unicode(hex: &str) -> Option<char> {
    if hex.len() != 4 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let code = u32::from_str_radix(hex, 16).ok()?;
    Some(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
}

/// The character a character literal token (`'a'`, `'\n'`) denotes.
///
/// Returns `None` if the literal holds an unrecognized escape.
pub fn char_literal_value(text: &str) -> Option<char> {
    let body = text.strip_prefix('\'')?.strip_suffix('\'')?;
    if body.starts_with('\\') {
        return resolve_escape(body);
    }
    let mut chars = body.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
