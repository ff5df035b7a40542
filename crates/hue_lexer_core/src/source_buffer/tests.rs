use super::*;
use crate::TokenClass;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new(Vec::new()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert_eq!(buf.line_count(), 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new(b"hello".to_vec()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"hello");
}

#[test]
fn arbitrary_bytes_are_kept_verbatim() {
    let raw = vec![0xFF, 0x00, b'\n', 0xFE];
    let buf = SourceBuffer::new(raw.clone()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(buf.as_bytes(), raw.as_slice());
}

// === Capacity ===

#[test]
fn at_limit_is_accepted() {
    assert!(SourceBuffer::with_limit(vec![b'x'; 8], 8).is_ok());
}

#[test]
fn over_limit_is_rejected() {
    let err = SourceBuffer::with_limit(vec![b'x'; 9], 8).err();
    assert_eq!(err, Some(CapacityError { len: 9, limit: 8 }));
}

#[test]
fn capacity_error_message() {
    let err = CapacityError { len: 9, limit: 8 };
    assert_eq!(
        err.to_string(),
        "input too large: 9 bytes exceeds the limit of 8 bytes"
    );
}

#[test]
fn check_len_works_without_bytes() {
    assert!(check_len(DEFAULT_CAPACITY, DEFAULT_CAPACITY).is_ok());
    assert!(check_len(DEFAULT_CAPACITY + 1, DEFAULT_CAPACITY).is_err());
}

// === Line Counting ===

#[test]
fn line_count_cases() {
    let cases: [(&[u8], usize); 7] = [
        (b"", 0),
        (b"a", 1),
        (b"a\n", 1),
        (b"a\nb", 2),
        (b"a\nb\nc", 3),
        (b"\n", 1),
        (b"\n\n", 2),
    ];
    for (input, expected) in cases {
        assert_eq!(line_count(input), expected, "line_count({input:?})");
    }
}

// === Scanning ===

#[test]
fn scan_through_buffer() {
    let buf = SourceBuffer::new(b"[1]".to_vec()).unwrap_or_else(|e| panic!("{e}"));
    let classes: Vec<TokenClass> = buf.scan(&crate::Grammar::JSON).map(|t| t.class).collect();
    assert_eq!(
        classes,
        vec![TokenClass::Bracket, TokenClass::Number, TokenClass::Bracket]
    );
}

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new(b"ab".to_vec()).unwrap_or_else(|e| panic!("{e}"));
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'a');
}
