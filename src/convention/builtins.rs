//! Built-in naming conventions, in detection priority order.

use std::sync::Arc;

use regex::Regex;
use smol_str::SmolStr;

use super::{Components, Convention};
use crate::base::{capitalize, split_before_uppercase};

/// Compile a built-in pattern. The sources below are fixed literals covered
/// by the module tests.
fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("built-in naming pattern is valid")
}

fn define<const N: usize>(
    aliases: [&'static str; N],
    source: &str,
    decomposer: fn(&str) -> Components,
    composer: fn(&[SmolStr]) -> String,
) -> Convention {
    Convention {
        aliases: aliases.into_iter().map(SmolStr::new_static).collect(),
        matcher: pattern(source),
        decomposer: Arc::new(decomposer),
        composer: Arc::new(composer),
    }
}

fn single_word(identifier: &str) -> Components {
    vec![SmolStr::new(identifier.to_ascii_lowercase())]
}

fn humps(identifier: &str) -> Components {
    split_before_uppercase(identifier)
        .into_iter()
        .map(SmolStr::from)
        .collect()
}

fn split_on(identifier: &str, separator: char) -> Components {
    identifier
        .to_ascii_lowercase()
        .split(separator)
        .map(SmolStr::new)
        .collect()
}

fn underscored(identifier: &str) -> Components {
    split_on(identifier, '_')
}

fn hyphenated(identifier: &str) -> Components {
    split_on(identifier, '-')
}

/// First word untouched, the following ones capitalized.
fn lead_then_capitalized(words: &[SmolStr], separator: &str) -> String {
    let mut rendered = Vec::with_capacity(words.len());
    if let Some((first, rest)) = words.split_first() {
        rendered.push(first.to_string());
        rendered.extend(rest.iter().map(|w| capitalize(w)));
    }
    rendered.join(separator)
}

fn all_capitalized(words: &[SmolStr], separator: &str) -> String {
    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(separator)
}

fn all_upper(words: &[SmolStr], separator: &str) -> String {
    words
        .iter()
        .map(|w| w.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// The standard conventions, ordered from least to most specific.
///
/// The order is the detection priority: an identifier belongs to the first
/// convention that accepts it.
pub fn builtin_conventions() -> Vec<Convention> {
    vec![
        define(
            ["flatcase", "lowercase"],
            r"^[a-z][a-z0-9]*$",
            single_word,
            |words| words.concat(),
        ),
        define(
            ["UPPERCASE", "SCREAMINGCASE"],
            r"^[A-Z][A-Z0-9]*$",
            single_word,
            |words| all_upper(words, ""),
        ),
        define(
            ["camelCase", "dromedaryCase"],
            r"^[a-z][a-zA-Z0-9]*$",
            humps,
            |words| lead_then_capitalized(words, ""),
        ),
        define(
            ["PascalCase", "UpperCamelCase", "StudlyCase"],
            r"^[A-Z][a-zA-Z0-9]*$",
            humps,
            |words| all_capitalized(words, ""),
        ),
        define(
            ["snake_case", "snail_case", "pothole_case"],
            r"^[a-z][a-z0-9]*(_[a-z][a-z0-9]*)*$",
            underscored,
            |words| words.join("_"),
        ),
        define(
            [
                "ALL_CAPS",
                "SCREAMING_SNAKE_CASE",
                "MACRO_CASE",
                "CONSTANT_CASE",
                "ENV_VAR_CASE",
            ],
            r"^[A-Z][A-Z0-9]*(_[A-Z][A-Z0-9]*)*$",
            underscored,
            |words| all_upper(words, "_"),
        ),
        define(
            ["camel_Snake_Case"],
            r"^[a-z]+[a-z0-9]*(_[A-Z]+[a-z0-9]*)*$",
            underscored,
            |words| lead_then_capitalized(words, "_"),
        ),
        define(
            ["kebab-case", "dash-case", "lisp-case", "spinal-case"],
            r"^[a-z][a-z0-9]*(-[a-z][a-z0-9]*)*$",
            hyphenated,
            |words| words.join("-"),
        ),
        define(
            ["COBOL-CASE", "SCREAMING-TRAIN-CASE", "SCREAMING-KEBAB-CASE"],
            r"^[A-Z][A-Z0-9]*(-[A-Z][A-Z0-9]*)*$",
            hyphenated,
            |words| all_upper(words, "-"),
        ),
        define(
            ["Train-Case", "Http-Header-Case"],
            r"^[A-Z]+[a-z0-9]*(-[A-Z]+[a-z0-9]*)*$",
            hyphenated,
            |words| all_capitalized(words, "-"),
        ),
    ]
}
