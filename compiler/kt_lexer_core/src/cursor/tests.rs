use crate::SourceBuffer;

// === Reading & Moving ===

#[test]
fn walks_a_keyword_byte_by_byte() {
    let buf = SourceBuffer::new("val x");
    let mut cursor = buf.cursor();
    assert_eq!((cursor.current(), cursor.peek(), cursor.peek2()), (b'v', b'a', b'l'));
    cursor.advance();
    assert_eq!((cursor.pos(), cursor.current()), (1, b'a'));
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn lookahead_past_end_reads_padding() {
    let buf = SourceBuffer::new("}");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
    assert_eq!(cursor.peek_at(1_000), 0);
}

// === Characters ===

#[test]
fn identifier_chars_decode_across_widths() {
    let buf = SourceBuffer::new("é\u{1F600}a");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current_char(), 'é');
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.current_char(), 'a');
}

#[test]
fn char_at_looks_past_template_dollar() {
    let buf = SourceBuffer::new("$ü");
    assert_eq!(buf.cursor().char_at(1), 'ü');
    assert_eq!(SourceBuffer::new("").cursor().current_char(), '\0');
}

// === End of Input ===

#[test]
fn end_of_input_versus_written_nul() {
    let buf = SourceBuffer::new("a\0");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(cursor.is_eof());
}

// === Slicing ===

#[test]
fn slices_token_text() {
    let buf = SourceBuffer::new("fun café()");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.slice(4, 9), "café");
    cursor.advance_n(3);
    assert_eq!(cursor.slice_from(0), "fun");
}

// === eat_while / count_run ===

#[test]
fn eat_while_consumes_matching_bytes() {
    let buf = SourceBuffer::new("123abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("aaa");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert!(cursor.is_eof());
}

#[test]
fn count_run_counts_quotes() {
    let buf = SourceBuffer::new("\"\"\"\"x");
    let cursor = buf.cursor();
    assert_eq!(cursor.count_run(b'"'), 4);
}

#[test]
fn count_run_stops_at_eof() {
    let buf = SourceBuffer::new("\"\"");
    assert_eq!(buf.cursor().count_run(b'"'), 2);
}

// === Snapshots ===

#[test]
fn saved_cursor_restores_after_probe() {
    let buf = SourceBuffer::new("@fileName");
    let mut cursor = buf.cursor();
    cursor.advance();
    let saved = cursor;
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.slice_from(saved.pos()), "fileName");
    cursor = saved;
    assert_eq!((cursor.pos(), cursor.current()), (1, b'f'));
}

// === eat_whitespace ===

#[test]
fn eat_whitespace_spaces_tabs_form_feed() {
    let buf = SourceBuffer::new(" \t\x0C x");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_whitespace_newline_stops() {
    let buf = SourceBuffer::new("  \nx");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 2);
}

// === eat_until_line_end ===

#[test]
fn eat_until_line_end_finds_lf() {
    let buf = SourceBuffer::new("// hello\nworld");
    let mut cursor = buf.cursor();
    cursor.eat_until_line_end();
    assert_eq!(cursor.pos(), 8);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_line_end_finds_cr() {
    let buf = SourceBuffer::new("abc\r\ndef");
    let mut cursor = buf.cursor();
    cursor.eat_until_line_end();
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_until_line_end_stops_at_eof() {
    let buf = SourceBuffer::new("no newline here");
    let mut cursor = buf.cursor();
    cursor.eat_until_line_end();
    assert_eq!(cursor.pos(), 15);
    assert!(cursor.is_eof());
}

// === skip_to_line_string_delim ===

#[test]
fn line_string_delim_finds_quote() {
    let buf = SourceBuffer::new("hello\"rest");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_line_string_delim(), b'"');
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn line_string_delim_finds_dollar_before_quote() {
    let buf = SourceBuffer::new("a $b \"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_line_string_delim(), b'$');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn line_string_delim_finds_backslash() {
    let buf = SourceBuffer::new("ab\\n");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_line_string_delim(), b'\\');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn line_string_delim_passes_newlines() {
    let buf = SourceBuffer::new("a\nb\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_line_string_delim(), b'"');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn line_string_delim_stops_at_interior_nul() {
    let buf = SourceBuffer::new("ab\0\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_line_string_delim(), 0);
    assert_eq!(cursor.pos(), 2);
    assert!(!cursor.is_eof());
}

#[test]
fn line_string_delim_eof() {
    let buf = SourceBuffer::new("unterminated");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_line_string_delim(), 0);
    assert!(cursor.is_eof());
}

// === skip_to_multi_line_delim ===

#[test]
fn multi_line_delim_ignores_backslash() {
    let buf = SourceBuffer::new("a\\nb\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_multi_line_delim(), b'"');
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn multi_line_delim_finds_dollar() {
    let buf = SourceBuffer::new("line\n$x");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_multi_line_delim(), b'$');
    assert_eq!(cursor.pos(), 5);
}

// === skip_to_comment_delim ===

#[test]
fn comment_delim_finds_star() {
    let buf = SourceBuffer::new("text */");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_comment_delim(), b'*');
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn comment_delim_eof() {
    let buf = SourceBuffer::new("no close");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_comment_delim(), 0);
    assert!(cursor.is_eof());
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_skips {
    use crate::SourceBuffer;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn line_string_skip_matches_scalar(text in "[a-z\"$\\\\ \n]{0,64}") {
            let buf = SourceBuffer::new(&text);
            let mut cursor = buf.cursor();
            cursor.skip_to_line_string_delim();
            let expected = text
                .bytes()
                .position(|b| matches!(b, b'"' | b'\\' | b'$' | 0))
                .unwrap_or(text.len());
            prop_assert_eq!(cursor.pos() as usize, expected);
        }

        #[test]
        fn multi_line_skip_matches_scalar(text in "[a-z\"$\\\\ \n]{0,64}") {
            let buf = SourceBuffer::new(&text);
            let mut cursor = buf.cursor();
            cursor.skip_to_multi_line_delim();
            let expected = text
                .bytes()
                .position(|b| matches!(b, b'"' | b'$' | 0))
                .unwrap_or(text.len());
            prop_assert_eq!(cursor.pos() as usize, expected);
        }
    }
}
