//! # nomage
//!
//! Detect, parse and convert identifier naming conventions.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! cli         → Command-line front end (feature "cli")
//!   ↓
//! naming      → identify(), Identifier rendering and conversion
//!   ↓
//! registry    → Ordered conventions, alias index, built-in registry
//!   ↓
//! convention  → Convention model and the built-in definitions
//!   ↓
//! base        → Alias normalization, ASCII word helpers
//! ```
//!
//! ## Example
//!
//! ```
//! use nomage::{builtins, identify};
//!
//! let id = identify("MyIdentifier").unwrap();
//! assert_eq!(id.components(), ["my", "identifier"]);
//! assert_eq!(id.convention().display_names(), "PascalCase / UpperCamelCase / StudlyCase");
//! assert_eq!(id.to("snake").unwrap(), "my_identifier");
//!
//! assert_eq!(builtins().get("kebab-case"), builtins().get("LISP_CASE"));
//! ```

// ============================================================================
// MODULES (dependency order: base → convention → registry → naming → cli)
// ============================================================================

/// Foundation helpers: alias normalization, word shaping
pub mod base;

/// Convention model and built-in definitions
pub mod convention;

/// Ordered convention registry with alias lookup
pub mod registry;

/// Detection engine and Identifier conversion
pub mod naming;

/// Error types
pub mod error;

/// Command-line front end
#[cfg(feature = "cli")]
pub mod cli;

pub use convention::{Components, Convention, builtin_conventions};
pub use error::{NamingError, Result};
pub use naming::{Identifier, identify, identify_with};
pub use registry::{ConventionRegistry, builtins};
