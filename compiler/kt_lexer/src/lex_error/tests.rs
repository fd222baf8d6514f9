use super::*;
use pretty_assertions::assert_eq;

// === Constructors ===

#[test]
fn unterminated_string_line() {
    let err = LexError::unterminated_string(Span::new(4, 10), false);
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(
        err.context,
        LexErrorContext::InsideString {
            start: 4,
            multi_line: false
        }
    );
    assert_eq!(err.suggestions[0].message, "add closing `\"`");
}

#[test]
fn unterminated_string_multi_line() {
    let err = LexError::unterminated_string(Span::new(0, 3), true);
    assert_eq!(err.suggestions[0].message, "add closing `\"\"\"`");
    assert_eq!(err.to_string(), "unterminated string literal");
}

#[test]
fn unterminated_comment() {
    let err = LexError::unterminated_comment(Span::new(2, 8));
    assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    assert_eq!(err.context, LexErrorContext::InsideComment);
}

#[test]
fn unrecognized_character_with_hint() {
    let span = Span::new(5, 6);
    let err = LexError::unrecognized_character(span, '&');
    assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter { ch: '&' });
    assert_eq!(
        err.suggestions[0].replacement,
        Some(LexReplacement {
            span,
            text: "&&".to_owned()
        })
    );
}

#[test]
fn unrecognized_character_without_hint() {
    let err = LexError::unrecognized_character(Span::new(0, 3), '\u{2603}');
    assert!(err.suggestions.is_empty());
}

#[test]
fn smart_quote_suggests_ascii_quote() {
    let span = Span::new(0, 3);
    let err = LexError::unrecognized_character(span, '\u{201C}');
    let fix = err.suggestions[0].replacement.as_ref().expect("replacement");
    assert_eq!(fix.text, "\"");
}

#[test]
fn invalid_escapes() {
    let err = LexError::invalid_string_escape(Span::new(3, 5), "\\q", 0);
    assert_eq!(
        err.kind,
        LexErrorKind::InvalidEscapeSequence {
            escape: "\\q".to_owned()
        }
    );
    assert_eq!(
        err.context,
        LexErrorContext::InsideString {
            start: 0,
            multi_line: false
        }
    );

    let err = LexError::invalid_char_escape(Span::new(1, 3), "\\z");
    assert_eq!(err.context, LexErrorContext::InsideCharLiteral);
}

#[test]
fn invalid_escape_lists_every_valid_escape() {
    let err = LexError::invalid_string_escape(Span::new(3, 5), "\\q", 0);
    assert_eq!(
        err.suggestions[0].message,
        r#"valid escapes are: \t, \b, \r, \n, \', \", \\, \$ and \uXXXX"#
    );
    let char_err = LexError::invalid_char_escape(Span::new(1, 3), "\\z");
    assert_eq!(char_err.suggestions, err.suggestions);
}

#[test]
fn interior_null_suggests_removal() {
    let span = Span::new(7, 8);
    let err = LexError::interior_null(span);
    assert_eq!(err.kind, LexErrorKind::InteriorNull);
    assert_eq!(
        err.suggestions[0].replacement,
        Some(LexReplacement {
            span,
            text: String::new()
        })
    );
}

#[test]
fn with_context_overrides() {
    let err = LexError::interior_null(Span::new(0, 1)).with_context(LexErrorContext::InsideComment);
    assert_eq!(err.context, LexErrorContext::InsideComment);
}

// === Display ===

#[test]
fn kind_messages() {
    assert_eq!(
        LexErrorKind::UnrecognizedCharacter { ch: '#' }.to_string(),
        "unrecognized character '#'"
    );
    assert_eq!(
        LexErrorKind::InvalidEscapeSequence {
            escape: "\\x".to_owned()
        }
        .to_string(),
        "invalid escape sequence `\\x`"
    );
    assert_eq!(LexErrorKind::InteriorNull.to_string(), "null byte in source");
}

#[test]
fn error_display_includes_context() {
    let err = LexError::invalid_string_escape(Span::new(1, 3), "\\q", 0);
    assert_eq!(err.to_string(), "invalid escape sequence `\\q` in string literal");

    let err = LexError::unrecognized_character(Span::new(0, 1), '~');
    assert_eq!(err.to_string(), "unrecognized character '~'");
}

// === Suggestions ===

#[test]
fn suggestion_constructors() {
    let s = LexSuggestion::text("hint", 2);
    assert_eq!(s.priority, 2);
    assert!(s.replacement.is_none());

    let s = LexSuggestion::removal("drop it", Span::new(1, 2));
    assert_eq!(s.priority, 0);
    assert_eq!(s.replacement.map(|r| r.text), Some(String::new()));
}
