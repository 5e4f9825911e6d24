//! Text manipulation utilities
//!
//! Pure functions over `&str`. Characters are Unicode scalar values, so
//! `reverse` and `is_palindrome` work per `char` rather than per grapheme
//! cluster.

use crate::errors::{Error, Result};

/// Upper-cases the first character and leaves the rest untouched.
///
/// Empty input is rejected with [`Error::InvalidArgument`]; use
/// [`capitalize_first`] when an empty string should pass through.
pub fn capitalize(text: &str) -> Result<String> {
    if text.is_empty() {
        return Err(Error::InvalidArgument(
            "cannot capitalize empty text".to_string(),
        ));
    }
    Ok(capitalize_first(text))
}

/// Capitalizes the first character of a string
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Reverses by `char`, so combining marks detach from their base.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Number of whitespace-separated words; 0 for blank input.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Case-insensitive palindrome check over alphanumeric characters only.
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    cleaned == reverse(&cleaned)
}
