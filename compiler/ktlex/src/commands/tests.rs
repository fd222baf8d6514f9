use super::*;
use pretty_assertions::assert_eq;

#[test]
fn missing_file_message() {
    let err = read_file("definitely/not/here.kt");
    assert_eq!(
        err,
        Err("cannot find file 'definitely/not/here.kt'".to_owned())
    );
}

#[test]
fn location_is_one_based() {
    let index = LineIndex::new("ab\ncd");
    assert_eq!(location(&index, 0), "1:1");
    assert_eq!(location(&index, 4), "2:2");
}
