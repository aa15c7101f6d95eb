//! String conversion, join, and split utilities.
//!
//! Pure functions with no connection to the logging core. Parsing follows a
//! deliberately weak contract inherited from stream extraction: malformed
//! trailing content is silently ignored and unparseable input degrades to the
//! type's default value instead of signaling an error.

use std::fmt::Display;
use std::str::FromStr;

/// Join the elements of `items` into a single string, interleaving
/// `delimiter` between consecutive elements.
///
/// An empty slice yields the empty string; there is no trailing delimiter.
///
/// ```
/// use ranklog::strings::join;
///
/// assert_eq!(join(&[1, 2, 3], ", "), "1, 2, 3");
/// assert_eq!(join(&["path1", "path2"], ":"), "path1:path2");
/// ```
pub fn join<T: Display>(items: &[T], delimiter: &str) -> String {
    let mut out = String::new();
    let mut iter = items.iter();
    if let Some(first) = iter.next() {
        out.push_str(&first.to_string());
        for item in iter {
            out.push_str(delimiter);
            out.push_str(&item.to_string());
        }
    }
    out
}

/// Parse `text` into a `T`, never signaling an error.
///
/// An empty string yields `T::default()` without attempting a parse. A full
/// parse is tried first; on failure the longest parseable prefix wins (so
/// `"3.14"` as an integer is 3 and `"100abc"` is 100), and input with no
/// parseable prefix degrades to `T::default()`.
///
/// ```
/// use ranklog::strings::parse_lossy;
///
/// assert_eq!(parse_lossy::<i32>("100"), 100);
/// assert_eq!(parse_lossy::<i32>(""), 0);
/// assert_eq!(parse_lossy::<f64>("3.14"), 3.14);
/// ```
pub fn parse_lossy<T: FromStr + Default>(text: &str) -> T {
    if text.is_empty() {
        return T::default();
    }
    if let Ok(value) = text.parse() {
        return value;
    }
    for end in (1..text.len()).rev() {
        if !text.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = text[..end].parse() {
            return value;
        }
    }
    T::default()
}

/// Split `text` on every occurrence of `delimiter`, converting each piece
/// with [`parse_lossy`].
///
/// The remainder after the last delimiter (or the whole string when the
/// delimiter never occurs) is always included as the final element, even when
/// empty; an empty input therefore yields a one-element vector holding
/// `T::default()`.
///
/// ```
/// use ranklog::strings::split;
///
/// assert_eq!(split::<i32>("1,2,3", ","), vec![1, 2, 3]);
/// assert_eq!(split::<String>("aXbXc", "X"), vec!["a", "b", "c"]);
/// assert_eq!(split::<String>("", "x"), vec![""]);
/// ```
pub fn split<T: FromStr + Default>(text: &str, delimiter: &str) -> Vec<T> {
    text.split(delimiter).map(parse_lossy).collect()
}
