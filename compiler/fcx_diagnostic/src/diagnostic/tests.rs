use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder_collects_parts() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("Expected expression")
        .with_label(Span::new(4, 7), "here")
        .with_secondary_label(Span::new(0, 1), "statement starts here")
        .with_location(1, 5)
        .with_note("operators need operands")
        .with_suggestion("remove the trailing operator");

    assert!(diag.is_error());
    assert_eq!(diag.primary_span(), Some(Span::new(4, 7)));
    assert_eq!(diag.location, Some((1, 5)));
    assert_eq!(diag.labels.len(), 2);
}

#[test]
fn test_display_format() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("Expected expression")
        .with_label(Span::new(4, 7), "here")
        .with_note("n")
        .with_suggestion("s");
    assert_eq!(
        diag.to_string(),
        "error [E1002]: Expected expression\n  --> 4..7: here\n  = note: n\n  = help: s"
    );
}

#[test]
fn test_warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::E1001).with_message("w");
    assert!(!diag.is_error());
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn test_secondary_only_has_no_primary_span() {
    let diag =
        Diagnostic::error(ErrorCode::E1003).with_secondary_label(Span::new(0, 1), "opened here");
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn test_too_many_errors() {
    let diag = too_many_errors(3, Span::new(10, 11));
    assert_eq!(diag.code, ErrorCode::E9002);
    assert_eq!(diag.message, "aborting due to 3 previous errors");
    assert_eq!(diag.primary_span(), Some(Span::new(10, 11)));
}
