use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E0005.to_string(), "E0005");
}

#[test]
fn test_phase_ranges() {
    assert!(ErrorCode::E0003.is_lexer_error());
    assert!(!ErrorCode::E0003.is_parser_error());
    assert!(ErrorCode::E1010.is_parser_error());
    assert!(!ErrorCode::E9002.is_parser_error());
    assert!(!ErrorCode::E9002.is_lexer_error());
}

#[test]
fn test_from_str_round_trips_all() {
    for &code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
    }
}

#[test]
fn test_from_str_case_insensitive() {
    assert_eq!("e1002".parse::<ErrorCode>(), Ok(ErrorCode::E1002));
}

#[test]
fn test_from_str_unknown() {
    let err = "E4242".parse::<ErrorCode>();
    assert!(err.is_err());
    assert_eq!(
        err.map_err(|e| e.to_string()),
        Err("unknown error code `E4242`".to_string())
    );
}

#[test]
fn test_all_is_sorted_and_unique() {
    let names: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(names, sorted);
}
