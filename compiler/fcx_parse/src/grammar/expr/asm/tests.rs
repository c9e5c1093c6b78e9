use pretty_assertions::assert_eq;

use super::{normalize_block, rewrite_placeholders};

#[test]
fn test_normalize_block() {
    let raw = "\n    mov   rax,  60\n\n\t  syscall   \n  ";
    assert_eq!(normalize_block(raw), "mov rax, 60\nsyscall");
    assert_eq!(normalize_block("   \n\n"), "");
}

#[test]
fn test_placeholders_numbered_by_first_use() {
    let (template, names) = rewrite_placeholders("mov ${dst}, ${src}\nadd ${dst}, 1");
    assert_eq!(template, "mov $0, $1\nadd $0, 1");
    assert_eq!(names, vec!["dst".to_string(), "src".to_string()]);
}

#[test]
fn test_malformed_placeholders_kept() {
    let (template, names) = rewrite_placeholders("a ${} b ${x y} c ${open");
    assert_eq!(template, "a ${} b ${x y} c ${open");
    assert!(names.is_empty());
}

#[test]
fn test_plain_dollar_untouched() {
    let (template, names) = rewrite_placeholders("mov $0, 1");
    assert_eq!(template, "mov $0, 1");
    assert!(names.is_empty());
}
