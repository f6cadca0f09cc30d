//! Text manipulation utilities for working with identifier words.
//!
//! Everything here is ASCII-only: identifiers are split on letter/digit runs
//! and separators, never on Unicode word boundaries.

/// Separator characters ignored when comparing convention names.
const NAME_SEPARATORS: [char; 3] = [' ', '-', '_'];

/// Suffix dropped from convention names before comparing them.
const NAME_SUFFIX: &str = "case";

/// Compute the lookup key of a convention name.
///
/// The name is lowercased, a single trailing `"case"` is removed, then every
/// space, hyphen and underscore is dropped. Two names that normalize to the
/// same key designate the same convention.
///
/// # Example
/// ```
/// use nomage::base::normalize_alias;
///
/// assert_eq!(normalize_alias("SCREAMING_SNAKE_CASE"), "screamingsnake");
/// assert_eq!(normalize_alias("kebab-case"), "kebab");
/// assert_eq!(normalize_alias("Pascal"), "pascal");
/// ```
pub fn normalize_alias(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stem = lowered.strip_suffix(NAME_SUFFIX).unwrap_or(&lowered);
    stem.chars()
        .filter(|c| !NAME_SEPARATORS.contains(c))
        .collect()
}

/// Uppercase the first character of a word and lowercase the rest.
///
/// ```
/// use nomage::base::capitalize;
///
/// assert_eq!(capitalize("header"), "Header");
/// assert_eq!(capitalize("hTTP"), "Http");
/// assert_eq!(capitalize("2fa"), "2fa");
/// ```
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(word.len());
            result.push(first.to_ascii_uppercase());
            result.extend(chars.map(|c| c.to_ascii_lowercase()));
            result
        }
        None => String::new(),
    }
}

/// Split a word before every uppercase ASCII letter and lowercase the pieces.
///
/// Digits stay attached to the preceding piece, and runs of capitals become
/// one piece per letter (`"myHTTP"` yields `my`, `h`, `t`, `t`, `p`).
pub fn split_before_uppercase(word: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for c in word.chars() {
        if c.is_ascii_uppercase() && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
        }
        current.push(c.to_ascii_lowercase());
    }

    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}
