//! Foundation helpers for the naming engine.
//!
//! - [`normalize_alias`] - lookup key of a convention name
//! - [`capitalize`], [`split_before_uppercase`] - ASCII word shaping
//!
//! This module has NO dependencies on other nomage modules.

mod text;

pub use text::{capitalize, normalize_alias, split_before_uppercase};
