//! Wildcard rule matching and key transformation for envcast.
//!
//! This module handles:
//! - Glob-like pattern matching over key strings (`*` wildcard, anchored)
//! - Prefix-based key renaming
//! - Applying ignore/rename rules across all keys of a flat mapping

pub mod matcher;
pub mod rewriter;
pub mod transform;

pub use matcher::WildcardRule;
pub use rewriter::rename_key;
pub use transform::KeyRules;
