use fcx_diagnostic::ErrorCode;
use fcx_ir::Span;
use pretty_assertions::assert_eq;

use super::LexError;

#[test]
fn test_to_diagnostic_carries_position() {
    let err = LexError::new(ErrorCode::E0004, "Unexpected character: '`'", Span::new(3, 4), 2, 5);
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0004);
    assert_eq!(diag.message, "Unexpected character: '`'");
    assert_eq!(diag.primary_span(), Some(Span::new(3, 4)));
    assert_eq!(diag.location, Some((2, 5)));
    assert!(diag.suggestions.is_empty());
}

#[test]
fn test_unterminated_literals_suggest_closing_quote() {
    let string = LexError::new(ErrorCode::E0001, "Unterminated string", Span::new(0, 4), 1, 1);
    assert_eq!(string.to_diagnostic().suggestions, vec!["add a closing `\"`".to_string()]);

    let ch = LexError::new(ErrorCode::E0002, "Unterminated character literal", Span::new(0, 2), 1, 1);
    assert_eq!(ch.to_diagnostic().suggestions, vec!["add a closing `'`".to_string()]);
}

#[test]
fn test_display() {
    let err = LexError::new(ErrorCode::E0003, "Unrecognized operator symbol: '$$'", Span::new(0, 2), 4, 9);
    assert_eq!(err.to_string(), "4:9: Unrecognized operator symbol: '$$'");
}
