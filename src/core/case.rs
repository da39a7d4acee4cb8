//! ASCII case folding
//!
//! Only `A..=Z` is lowered. Every other byte, including the bytes of
//! multi-byte UTF-8 sequences, passes through untouched, so the output
//! always has the same length as the input and stays valid UTF-8.

use crate::utils::error::{Result, UtilError};
use std::borrow::Cow;

/// Returns `true` when `s` contains no uppercase ASCII letter.
pub fn is_lower(s: &str) -> bool {
    is_lower_bytes(s.as_bytes())
}

/// Byte-string variant of [`is_lower`]; bytes outside ASCII never count as uppercase.
pub fn is_lower_bytes(b: &[u8]) -> bool {
    !b.iter().any(u8::is_ascii_uppercase)
}

/// Lowercases the ASCII letters of `s`.
///
/// Input that is already lowercase is handed back borrowed, so the common
/// case costs one scan and no allocation.
pub fn to_lower(s: &str) -> Cow<'_, str> {
    if is_lower(s) {
        return Cow::Borrowed(s);
    }

    let mut folded = String::with_capacity(s.len());
    folded.push_str(s);
    folded.make_ascii_lowercase();
    Cow::Owned(folded)
}

/// Byte-string variant of [`to_lower`] for keys that are not UTF-8.
pub fn to_lower_bytes(b: &[u8]) -> Cow<'_, [u8]> {
    if is_lower_bytes(b) {
        return Cow::Borrowed(b);
    }

    let folded: Vec<u8> = b.iter().map(u8::to_ascii_lowercase).collect();
    Cow::Owned(folded)
}

/// Folds an owned buffer in place. Returns whether any byte changed.
pub fn to_lower_in_place(s: &mut String) -> bool {
    if is_lower(s) {
        return false;
    }
    s.make_ascii_lowercase();
    true
}

/// Moves a byte buffer into a `String` without copying it.
pub fn bytes_to_string(b: Vec<u8>) -> Result<String> {
    String::from_utf8(b).map_err(UtilError::from)
}
