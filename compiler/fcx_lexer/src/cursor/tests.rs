use pretty_assertions::assert_eq;

use super::Cursor;

#[test]
fn tracks_lines_and_columns() {
    let mut cursor = Cursor::new("ab\ncd");
    assert_eq!((cursor.line(), cursor.column()), (1, 1));
    cursor.advance_n(2);
    assert_eq!((cursor.line(), cursor.column()), (1, 3));
    cursor.advance();
    assert_eq!((cursor.line(), cursor.column()), (2, 1));
    assert_eq!(cursor.current(), b'c');
}

#[test]
fn reads_past_end_as_zero() {
    let mut cursor = Cursor::new("x");
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek_at(10), 0);
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
    assert!(cursor.rest().is_empty());
}

#[test]
fn advance_char_skips_multibyte() {
    let mut cursor = Cursor::new("é!");
    assert_eq!(cursor.current_char(), Some('é'));
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b'!');
}

#[test]
fn eat_while_and_slice() {
    let mut cursor = Cursor::new("abc123 rest");
    cursor.eat_while(|b| b.is_ascii_alphanumeric());
    assert_eq!(cursor.slice_from(0), "abc123");
    assert_eq!(cursor.rest(), b" rest");
    assert_eq!(cursor.slice(7, 11), "rest");
}

#[test]
fn slice_off_boundary_is_empty() {
    let cursor = Cursor::new("é");
    assert_eq!(cursor.slice(0, 1), "");
}

#[test]
fn snapshots_are_independent() {
    let mut cursor = Cursor::new("abc");
    let snapshot = cursor;
    cursor.advance_n(2);
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.pos(), 2);
}
