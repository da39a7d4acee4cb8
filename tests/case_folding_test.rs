//! Integration tests for ASCII case folding

use rdutil::core::case::{bytes_to_string, to_lower_in_place};
use rdutil::{is_lower, to_lower, to_lower_bytes};
use std::borrow::Cow;

#[test]
fn test_lowercase_inputs_share_storage() {
    let inputs = vec!["", "get", "user:1001:profile", "{tag}:42", "naïve café", "-_.~ 0123"];

    for input in inputs {
        assert!(is_lower(input), "should be lowercase: {}", input);
        let result = to_lower(input);
        assert!(matches!(result, Cow::Borrowed(_)), "allocated for: {}", input);
        assert_eq!(result.as_ptr(), input.as_ptr(), "new storage for: {}", input);
    }
}

#[test]
fn test_uppercase_inputs_are_folded() {
    let cases = vec![
        ("GET", "get"),
        ("HGetAll", "hgetall"),
        ("User:1001:PROFILE", "user:1001:profile"),
        ("ZZZ_AAA", "zzz_aaa"),
        ("ÜBER Key", "Über key"),
    ];

    for (input, expected) in cases {
        assert!(!is_lower(input));
        let result = to_lower(input);
        assert!(matches!(result, Cow::Owned(_)), "borrowed for: {}", input);
        assert_eq!(result, expected);
        assert_eq!(result.len(), input.len());
    }
}

#[test]
fn test_every_ascii_byte() {
    let all: Vec<u8> = (0u8..128).collect();
    let folded = to_lower_bytes(&all);

    for (original, lowered) in all.iter().zip(folded.iter()) {
        if original.is_ascii_uppercase() {
            assert_eq!(*lowered, original + (b'a' - b'A'));
        } else {
            assert_eq!(lowered, original);
        }
    }
}

#[test]
fn test_folded_bytes_round_into_string() {
    let folded = to_lower_bytes(b"SET Counter").into_owned();
    assert_eq!(bytes_to_string(folded).unwrap(), "set counter");

    let mut owned = String::from("EXPIRE");
    assert!(to_lower_in_place(&mut owned));
    assert_eq!(owned, "expire");
}
