//! Naming convention model.
//!
//! A [`Convention`] pairs display aliases with three pure operations:
//! - `matches` - full-string check against an anchored regex
//! - `decompose` - split a conforming identifier into lowercase words
//! - `compose` - render lowercase words in this convention

mod builtins;

pub use builtins::builtin_conventions;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use regex::Regex;
use smol_str::SmolStr;

use crate::base::normalize_alias;
use crate::error::{NamingError, Result};

/// Lowercase word components of an identifier.
pub type Components = Vec<SmolStr>;

type DecomposeFn = Arc<dyn Fn(&str) -> Components + Send + Sync>;
type ComposeFn = Arc<dyn Fn(&[SmolStr]) -> String + Send + Sync>;

/// A named lexical shape for identifiers plus its word transforms.
///
/// Equality and hashing only consider the matcher pattern; use
/// [`Convention::matches_alias`] to compare against a name.
#[derive(Clone)]
pub struct Convention {
    aliases: Vec<SmolStr>,
    matcher: Regex,
    decomposer: DecomposeFn,
    composer: ComposeFn,
}

impl Convention {
    /// Define a convention from an already compiled matcher.
    ///
    /// The matcher must be anchored at both ends. Fails with
    /// [`NamingError::EmptyAliases`] when no alias is given.
    pub fn new<A, S, D, C>(aliases: A, matcher: Regex, decomposer: D, composer: C) -> Result<Self>
    where
        A: IntoIterator<Item = S>,
        S: Into<SmolStr>,
        D: Fn(&str) -> Components + Send + Sync + 'static,
        C: Fn(&[SmolStr]) -> String + Send + Sync + 'static,
    {
        let aliases: Vec<SmolStr> = aliases.into_iter().map(Into::into).collect();
        if aliases.is_empty() {
            return Err(NamingError::EmptyAliases);
        }

        Ok(Self {
            aliases,
            matcher,
            decomposer: Arc::new(decomposer),
            composer: Arc::new(composer),
        })
    }

    /// Define a convention from a regex source string.
    pub fn from_pattern<A, S, D, C>(
        aliases: A,
        pattern: &str,
        decomposer: D,
        composer: C,
    ) -> Result<Self>
    where
        A: IntoIterator<Item = S>,
        S: Into<SmolStr>,
        D: Fn(&str) -> Components + Send + Sync + 'static,
        C: Fn(&[SmolStr]) -> String + Send + Sync + 'static,
    {
        let matcher = Regex::new(pattern)?;
        Self::new(aliases, matcher, decomposer, composer)
    }

    /// All display names, canonical one first.
    pub fn aliases(&self) -> &[SmolStr] {
        &self.aliases
    }

    /// Canonical display name.
    pub fn name(&self) -> &str {
        &self.aliases[0]
    }

    /// Source of the matcher regex.
    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }

    /// Aliases joined by `" / "`, for human-readable messages.
    pub fn display_names(&self) -> String {
        self.aliases.join(" / ")
    }

    /// Check whether `identifier` has this convention's lexical shape.
    pub fn matches(&self, identifier: &str) -> bool {
        self.matcher.is_match(identifier)
    }

    /// Split a conforming identifier into lowercase words.
    ///
    /// Only meaningful when [`Convention::matches`] accepted `identifier`.
    pub fn decompose(&self, identifier: &str) -> Components {
        (self.decomposer)(identifier)
    }

    /// Render lowercase words in this convention.
    pub fn compose(&self, components: &[SmolStr]) -> String {
        (self.composer)(components)
    }

    /// Check whether `name` designates this convention once normalized.
    pub fn matches_alias(&self, name: &str) -> bool {
        let key = normalize_alias(name);
        self.aliases
            .iter()
            .any(|alias| normalize_alias(alias) == key)
    }
}

impl PartialEq for Convention {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern()
    }
}

impl Eq for Convention {}

impl Hash for Convention {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern().hash(state);
    }
}

impl fmt::Debug for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Convention")
            .field("aliases", &self.aliases)
            .field("pattern", &self.pattern())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_names())
    }
}
