use super::*;

// === RawTag discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Identifiers & Literals: 0-15
    assert_eq!(RawTag::Ident as u8, 0);
    assert_eq!(RawTag::Char as u8, 11);

    // Operators: 32-79
    assert_eq!(RawTag::Dot as u8, 32);
    assert_eq!(RawTag::SingleQuote as u8, 75);

    // Delimiters: 96-101
    assert_eq!(RawTag::LeftParen as u8, 96);
    assert_eq!(RawTag::RightBrace as u8, 101);

    // String fragments: 112-127
    assert_eq!(RawTag::QuoteOpen as u8, 112);
    assert_eq!(RawTag::MultiLineStrExprStart as u8, 123);

    // Trivia: 144-150
    assert_eq!(RawTag::Whitespace as u8, 144);
    assert_eq!(RawTag::Shebang as u8, 150);

    // Errors: 240-243
    assert_eq!(RawTag::InvalidChar as u8, 240);
    assert_eq!(RawTag::InteriorNull as u8, 243);

    // Control: 255
    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
}

// === Name ===

#[test]
fn name_returns_readable_description() {
    assert_eq!(RawTag::Ident.name(), "identifier");
    assert_eq!(RawTag::HexInt.name(), "hex integer literal");
    assert_eq!(RawTag::LineStrRef.name(), "string reference");
    assert_eq!(RawTag::Arrow.name(), "`->`");
    assert_eq!(RawTag::RightBrace.name(), "`}`");
    assert_eq!(RawTag::Eof.name(), "end of file");
    assert_eq!(RawTag::InteriorNull.name(), "interior null byte");
    assert_eq!(RawTag::UnterminatedString.name(), "unterminated string");
}

// === RawToken ===

#[test]
fn raw_token_is_copy() {
    let tok = RawToken {
        tag: RawTag::Plus,
        len: 1,
        mode: Mode::Default,
    };
    let tok2 = tok;
    assert_eq!(tok, tok2);
}

#[test]
fn raw_token_fits_in_eight_bytes() {
    assert!(std::mem::size_of::<RawToken>() <= 8);
}
