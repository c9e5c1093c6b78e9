use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_span_merge_disjoint() {
    let a = Span::new(0, 10);
    let b = Span::new(20, 30);
    assert_eq!(a.merge(b), Span::new(0, 30));
    assert_eq!(b.merge(a), Span::new(0, 30));
}

#[test]
fn test_span_point_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert!(!span.contains(7));
    assert_eq!(span.to_range(), 7..7);
}

#[test]
fn test_span_try_from_range() {
    let Ok(span) = Span::try_from_range(50..100) else {
        panic!("expected Ok for valid range");
    };
    assert_eq!(span, Span::new(50, 100));

    let large = u32::MAX as usize + 1;
    assert!(matches!(
        Span::try_from_range(large..large + 1),
        Err(SpanError::StartTooLarge(_))
    ));
    assert!(matches!(
        Span::try_from_range(0..large),
        Err(SpanError::EndTooLarge(_))
    ));
}

#[test]
fn test_span_saturating_range() {
    let large = u32::MAX as usize + 5;
    let span = Span::from_range_saturating(3..large);
    assert_eq!(span.start, 3);
    assert_eq!(span.end, u32::MAX);
}

#[test]
fn test_span_error_display() {
    let msg = SpanError::StartTooLarge(0x1_0000_0000).to_string();
    assert!(msg.contains("start"));
    assert!(msg.contains("0x100000000"));
}

#[test]
fn test_span_display() {
    assert_eq!(format!("{}", Span::new(4, 9)), "4..9");
    assert_eq!(format!("{:?}", Span::new(4, 9)), "4..9");
}
