//! Convention registry with name-insensitive lookup.
//!
//! A [`ConventionRegistry`] keeps conventions in registration order, which is
//! also the detection priority, and indexes every alias twice:
//! - literally, for enumeration and exact lookup
//! - by [`normalize_alias`] key, so `"snake"`, `"SNAKE_CASE"` and
//!   `"snake-case"` all find the same convention
//!
//! The built-in registry is built once on first access and shared.

use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use smol_str::SmolStr;
use tracing::debug;

use crate::base::normalize_alias;
use crate::convention::{Convention, builtin_conventions};
use crate::error::{NamingError, Result};
use crate::naming::{Identifier, identify_with};

/// Ordered, immutable collection of conventions.
#[derive(Debug, Clone, Default)]
pub struct ConventionRegistry {
    conventions: Vec<Arc<Convention>>,
    by_alias: IndexMap<SmolStr, Arc<Convention>, FxBuildHasher>,
    by_key: FxHashMap<String, Arc<Convention>>,
}

impl ConventionRegistry {
    /// Build a registry; iteration order becomes detection priority.
    ///
    /// When aliases of different conventions normalize to the same key, the
    /// convention registered last answers lookups for that key.
    pub fn new<I>(conventions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arc<Convention>>,
    {
        let mut registry = Self::default();

        for convention in conventions {
            let convention: Arc<Convention> = convention.into();
            for alias in convention.aliases() {
                registry
                    .by_alias
                    .insert(alias.clone(), Arc::clone(&convention));

                let key = normalize_alias(alias);
                let previous = registry.by_key.insert(key, Arc::clone(&convention));
                if let Some(previous) = previous.filter(|p| **p != *convention) {
                    debug!(
                        alias = %alias,
                        shadowed = previous.name(),
                        "convention alias shadows an earlier registration"
                    );
                }
            }
            registry.conventions.push(convention);
        }

        debug!(
            conventions = registry.conventions.len(),
            aliases = registry.by_alias.len(),
            "built convention registry"
        );
        registry
    }

    /// Find a convention by any of its names, ignoring case, separators and
    /// a trailing `"case"`. Returns `None` when nothing matches.
    pub fn get(&self, name: &str) -> Option<&Arc<Convention>> {
        self.by_key.get(&normalize_alias(name))
    }

    /// Like [`ConventionRegistry::get`], but unknown names are an error.
    pub fn resolve(&self, name: &str) -> Result<&Arc<Convention>> {
        self.get(name)
            .ok_or_else(|| NamingError::unknown_convention(name))
    }

    /// Find a convention by one of its literal aliases.
    pub fn get_exact(&self, alias: &str) -> Option<&Arc<Convention>> {
        self.by_alias.get(alias)
    }

    /// Check whether `name` resolves to a convention.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Conventions in detection priority order.
    pub fn conventions(&self) -> impl Iterator<Item = &Arc<Convention>> {
        self.conventions.iter()
    }

    /// Every literal alias with its convention, in registration order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &Arc<Convention>)> {
        self.by_alias
            .iter()
            .map(|(alias, convention)| (alias.as_str(), convention))
    }

    /// Number of registered conventions.
    pub fn len(&self) -> usize {
        self.conventions.len()
    }

    /// Returns true if no convention is registered.
    pub fn is_empty(&self) -> bool {
        self.conventions.is_empty()
    }

    /// Detect `identifier` against this registry's conventions.
    pub fn identify(&self, identifier: &str) -> Result<Identifier> {
        identify_with(identifier, self.conventions())
    }
}

static BUILTINS: LazyLock<ConventionRegistry> =
    LazyLock::new(|| ConventionRegistry::new(builtin_conventions()));

/// The shared registry of standard conventions.
///
/// # Example
/// ```
/// let conventions = nomage::builtins();
///
/// assert!(conventions.get("no-name").is_none());
/// assert_eq!(conventions.get("PascalCase"), conventions.get("pascal"));
/// assert_eq!(conventions.get("snake"), conventions.get("Snake-Case"));
/// ```
pub fn builtins() -> &'static ConventionRegistry {
    &BUILTINS
}
