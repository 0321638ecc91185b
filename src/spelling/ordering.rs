//! Ordinal, prefix-aware string ordering used by the dictionary search.
//!
//! Characters are compared by their code-point value, never by locale
//! collation. When one string is a prefix of the other, the longer one sorts
//! after it, so `"an" < "and" < "bat"`.

use std::cmp::Ordering;

/// Compare two strings character by character by code-point value.
///
/// The first differing character decides the result. If the shared-length
/// prefix is identical, the longer string is greater and equal strings are
/// equal.
pub fn ordinal_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars();
    let mut right = b.chars();

    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) if l != r => return u32::from(l).cmp(&u32::from(r)),
            (Some(_), Some(_)) => {}
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// Returns `true` if `current` sorts strictly after `query`.
///
/// Identical strings are not greater than each other, and a strict prefix is
/// never greater than the string it prefixes.
///
/// ```
/// use lexis::spelling::ordering::is_greater;
///
/// assert!(!is_greater("an", "and"));
/// assert!(is_greater("and", "an"));
/// assert!(!is_greater("cat", "cat"));
/// ```
pub fn is_greater(current: &str, query: &str) -> bool {
    ordinal_cmp(current, query) == Ordering::Greater
}

/// Find the first position whose word sorts before its predecessor.
///
/// Returns `None` when the sequence is non-decreasing under [`ordinal_cmp`].
/// Duplicates are allowed.
pub fn first_unordered<S: AsRef<str>>(words: &[S]) -> Option<usize> {
    words
        .windows(2)
        .position(|pair| is_greater(pair[0].as_ref(), pair[1].as_ref()))
        .map(|i| i + 1)
}
