//! Format converters for envcast.
//!
//! This module handles:
//! - Env-line text ⇄ flat mapping parsing and serialization
//! - Conversion direction selection
//! - Running the key transformer between parse and serialize

pub mod env;
pub mod json;

use crate::error::{EnvcastError, Result};
use crate::rules::KeyRules;
use std::str::FromStr;

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	EnvToJson,
	JsonToEnv,
}

impl FromStr for Direction {
	type Err = EnvcastError;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"env-to-json" => Ok(Direction::EnvToJson),
			"json-to-env" => Ok(Direction::JsonToEnv),
			other => Err(EnvcastError::UnsupportedType {
				value: other.to_string(),
			}),
		}
	}
}

/// Convert env-style text to a pretty-printed JSON object, applying the key
/// rules in between.
pub fn env_to_json(content: &str, rules: &KeyRules) -> Result<String> {
	let mut mapping = env::parse(content);
	rules.apply(&mut mapping);
	json::format(&mapping)
}

/// Convert a flat JSON object to env-style text, applying the key rules in
/// between.
pub fn json_to_env(content: &str, rules: &KeyRules) -> Result<String> {
	let mut mapping = json::parse(content)?;
	rules.apply(&mut mapping);
	Ok(env::format(&mapping))
}

/// Run the converter selected by `direction` over one input's content.
pub fn convert(direction: Direction, content: &str, rules: &KeyRules) -> Result<String> {
	match direction {
		Direction::EnvToJson => env_to_json(content, rules),
		Direction::JsonToEnv => json_to_env(content, rules),
	}
}
