use super::*;

// === Layout ===

#[test]
fn keeps_source_and_length() {
    let source = "val café = \"\u{1F600}\"";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.as_str(), source);
    assert_eq!(buf.len() as usize, source.len());
    assert!(!buf.is_empty());
}

#[test]
fn empty_source_is_all_padding() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn padding_follows_every_length() {
    for len in [1u32, 63, 64, 65, 200] {
        let source = "a".repeat(len as usize);
        let buf = SourceBuffer::new(&source);
        let mut cursor = buf.cursor();
        cursor.advance_n(len);
        assert!(cursor.is_eof(), "len {len}");
        for n in 0..64 {
            assert_eq!(cursor.peek_at(n), 0, "len {len}, +{n}");
        }
    }
}

// === NUL Index ===

#[test]
fn indexes_written_nuls_only() {
    assert_eq!(SourceBuffer::new("\0x\0\0").nul_positions(), &[0, 2, 3]);
    assert_eq!(SourceBuffer::new("// a\0b").nul_positions(), &[4]);
    assert!(SourceBuffer::new("fun main() {}").nul_positions().is_empty());
}

// === Cursor ===

#[test]
fn cursor_starts_at_first_byte() {
    let buf = SourceBuffer::new("fun");
    let cursor = buf.cursor();
    assert_eq!((cursor.pos(), cursor.current()), (0, b'f'));
    assert!(SourceBuffer::new("").cursor().is_eof());
}
