//! Identifier detection and conversion.
//!
//! [`identify`] classifies a raw string against the built-in conventions and
//! returns an [`Identifier`]: the lowercase words plus the convention they
//! came from. The identifier can then be rendered in any other convention.
//!
//! ```
//! use nomage::identify;
//!
//! let id = identify("myIdentifier").unwrap();
//! assert_eq!(id.to("snake_case").unwrap(), "my_identifier");
//! assert_eq!(id.to("kebab-case").unwrap(), "my-identifier");
//! ```

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;
use tracing::trace;

use crate::convention::{Components, Convention};
use crate::error::{NamingError, Result};
use crate::registry::{ConventionRegistry, builtins};

/// A decomposed identifier and the convention that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    components: Components,
    convention: Arc<Convention>,
}

impl Identifier {
    /// Build an identifier from explicit lowercase words.
    pub fn new<I, S>(components: I, convention: Arc<Convention>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            components: components.into_iter().map(Into::into).collect(),
            convention,
        }
    }

    /// Lowercase words, in order.
    pub fn components(&self) -> &[SmolStr] {
        &self.components
    }

    /// Convention the identifier was detected in.
    pub fn convention(&self) -> &Arc<Convention> {
        &self.convention
    }

    /// Render the words in `convention`.
    pub fn render(&self, convention: &Convention) -> String {
        convention.compose(&self.components)
    }

    /// Render the words in the built-in convention called `name`.
    ///
    /// Fails with [`NamingError::UnknownConvention`] when `name` does not
    /// resolve; callers may fall back to [`Identifier::to_string`].
    pub fn to(&self, name: &str) -> Result<String> {
        self.to_in(name, builtins())
    }

    /// Render the words in the convention called `name` within `registry`.
    pub fn to_in(&self, name: &str, registry: &ConventionRegistry) -> Result<String> {
        let target = registry.resolve(name)?;
        Ok(self.render(target))
    }

    /// Check whether this identifier, as written, also has the shape of
    /// `convention`.
    pub fn conforms_to(&self, convention: &Convention) -> bool {
        convention.matches(&self.to_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&self.convention))
    }
}

/// Detect the convention of `identifier` among the built-in conventions.
pub fn identify(identifier: &str) -> Result<Identifier> {
    builtins().identify(identifier)
}

/// Detect the convention of `identifier` among `conventions`.
///
/// Conventions are tried in order and the first one whose matcher accepts
/// the whole string wins; there is no best-match search.
pub fn identify_with<'a, I>(identifier: &str, conventions: I) -> Result<Identifier>
where
    I: IntoIterator<Item = &'a Arc<Convention>>,
{
    for convention in conventions {
        if convention.matches(identifier) {
            trace!(identifier, convention = convention.name(), "identified");
            return Ok(Identifier {
                components: convention.decompose(identifier),
                convention: Arc::clone(convention),
            });
        }
    }

    trace!(identifier, "no convention matched");
    Err(NamingError::unrecognized(identifier))
}
