use pretty_assertions::assert_eq;

use super::{resolve_escape, unescape_char, unescape_string};

#[test]
fn resolves_known_escapes() {
    let cases = [
        ('n', '\n'),
        ('t', '\t'),
        ('r', '\r'),
        ('0', '\0'),
        ('\\', '\\'),
        ('"', '"'),
        ('\'', '\''),
        ('a', '\u{07}'),
        ('b', '\u{08}'),
        ('f', '\u{0C}'),
        ('v', '\u{0B}'),
    ];
    for (esc, expected) in cases {
        assert_eq!(resolve_escape(esc), Some(expected), "\\{esc}");
    }
    assert_eq!(resolve_escape('q'), None);
}

#[test]
fn string_escapes() {
    assert_eq!(unescape_string(r"hello\nworld"), "hello\nworld");
    assert_eq!(unescape_string(r#"say \"hi\""#), "say \"hi\"");
    assert_eq!(unescape_string(r"tab\there"), "tab\there");
    assert_eq!(unescape_string("plain"), "plain");
    assert_eq!(unescape_string(""), "");
}

#[test]
fn unknown_escape_keeps_both_characters() {
    assert_eq!(unescape_string(r"a\qb"), r"a\qb");
    assert_eq!(unescape_string(r"\x41"), r"\x41");
}

#[test]
fn trailing_backslash_is_kept() {
    assert_eq!(unescape_string("end\\"), "end\\");
}

#[test]
fn char_escapes() {
    assert_eq!(unescape_char("a"), Some('a'));
    assert_eq!(unescape_char(r"\n"), Some('\n'));
    assert_eq!(unescape_char(r"\'"), Some('\''));
    assert_eq!(unescape_char(r"\q"), Some('q'));
    assert_eq!(unescape_char("λ"), Some('λ'));
    assert_eq!(unescape_char(""), None);
    assert_eq!(unescape_char("\\"), None);
}
