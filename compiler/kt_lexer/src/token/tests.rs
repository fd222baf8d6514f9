use super::*;
use pretty_assertions::assert_eq;

// === Keyword Classes ===

#[test]
fn hard_keywords() {
    for kind in [
        TokenKind::Fun,
        TokenKind::Val,
        TokenKind::When,
        TokenKind::NotIs,
        TokenKind::AsSafe,
        TokenKind::ReturnAt,
        TokenKind::NullLiteral,
        TokenKind::BooleanLiteral,
    ] {
        assert_eq!(kind.keyword_class(), Some(KeywordClass::Hard), "{kind:?}");
    }
}

#[test]
fn soft_keywords() {
    for kind in [
        TokenKind::By,
        TokenKind::Get,
        TokenKind::Import,
        TokenKind::Where,
        TokenKind::AtField,
    ] {
        assert_eq!(kind.keyword_class(), Some(KeywordClass::Soft), "{kind:?}");
    }
}

#[test]
fn modifier_keywords() {
    for kind in [
        TokenKind::Public,
        TokenKind::Suspend,
        TokenKind::Data,
        TokenKind::Out,
        TokenKind::Crossinline,
    ] {
        assert_eq!(kind.keyword_class(), Some(KeywordClass::Modifier), "{kind:?}");
    }
}

#[test]
fn non_keywords_have_no_class() {
    for kind in [
        TokenKind::Identifier,
        TokenKind::IdentifierAt,
        TokenKind::IntegerLiteral,
        TokenKind::Add,
        TokenKind::QuoteOpen,
        TokenKind::Eof,
    ] {
        assert_eq!(kind.keyword_class(), None, "{kind:?}");
        assert!(!kind.is_keyword());
    }
}

// === Classification ===

#[test]
fn trivia() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::DocComment.is_trivia());
    assert!(TokenKind::ByteOrderMark.is_trivia());
    assert!(!TokenKind::ShebangLine.is_trivia());
    assert!(!TokenKind::UnterminatedComment.is_trivia());
}

#[test]
fn comments() {
    assert!(TokenKind::LineComment.is_comment());
    assert!(TokenKind::UnterminatedComment.is_comment());
    assert!(!TokenKind::Newline.is_comment());
}

#[test]
fn errors() {
    assert!(TokenKind::ErrorCharacter.is_error());
    assert!(TokenKind::InvalidEscape.is_error());
    assert!(TokenKind::UnterminatedString.is_error());
    assert!(!TokenKind::Eof.is_error());
}

#[test]
fn literals_and_string_parts() {
    assert!(TokenKind::HexLiteral.is_literal());
    assert!(TokenKind::CharacterLiteral.is_literal());
    assert!(!TokenKind::LineStrText.is_literal());
    assert!(TokenKind::LineStrText.is_string_part());
    assert!(TokenKind::MultiLineStringQuote.is_string_part());
    assert!(!TokenKind::Identifier.is_string_part());
}

// === Flags ===

#[test]
fn flags_are_distinct_bits() {
    let all = [
        TokenFlags::SPACE_BEFORE,
        TokenFlags::NEWLINE_BEFORE,
        TokenFlags::TRIVIA_BEFORE,
        TokenFlags::LINE_START,
        TokenFlags::HAS_ERROR,
        TokenFlags::ADJACENT,
    ];
    let mut seen = TokenFlags::empty();
    for flag in all {
        assert!(!seen.intersects(flag));
        seen |= flag;
    }
    assert_eq!(seen, TokenFlags::all());
}

// === Token ===

#[test]
fn token_text_slices_source() {
    let source = "val café = 1";
    let token = Token {
        kind: TokenKind::Identifier,
        span: Span::new(4, 9),
        channel: Channel::Default,
        mode: Mode::Default,
        flags: TokenFlags::SPACE_BEFORE,
    };
    assert_eq!(token.text(source), "café");
    assert!(!token.is_hidden());
}

#[test]
fn token_text_out_of_range_is_empty() {
    let token = Token {
        kind: TokenKind::Eof,
        span: Span::new(10, 12),
        channel: Channel::Default,
        mode: Mode::Default,
        flags: TokenFlags::empty(),
    };
    assert_eq!(token.text("short"), "");
}

#[test]
fn default_channel() {
    assert_eq!(Channel::default(), Channel::Default);
}
