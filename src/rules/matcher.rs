use crate::error::{EnvcastError, Result};
use regex::Regex;

/// A compiled wildcard rule ready for matching.
///
/// Patterns use `*` to match zero or more arbitrary characters; every other
/// character is literal. Matching is whole-string and case-sensitive, so
/// `KEY_*` matches `KEY_1` but not `MY_KEY_1`.
#[derive(Debug, Clone)]
pub struct WildcardRule {
	/// The original pattern string (for error messages and display).
	pattern: String,

	/// The compiled anchored regex.
	regex: Regex,
}

impl WildcardRule {
	/// Compile a wildcard pattern into a rule.
	///
	/// Each literal segment between `*`s is regex-escaped, segments are joined
	/// with `.*`, and the whole pattern is anchored with `^`/`$`.
	pub fn compile(pattern: &str) -> Result<Self> {
		let escaped: Vec<String> = pattern.split('*').map(regex::escape).collect();
		let anchored = format!("^{}$", escaped.join(".*"));

		let regex = Regex::new(&anchored).map_err(|source| EnvcastError::InvalidRule {
			pattern: pattern.to_string(),
			source,
		})?;

		Ok(WildcardRule {
			pattern: pattern.to_string(),
			regex,
		})
	}

	/// Check if a value matches this rule in full.
	pub fn matches(&self, value: &str) -> bool {
		self.regex.is_match(value)
	}

	/// The original pattern this rule was compiled from.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}
}
