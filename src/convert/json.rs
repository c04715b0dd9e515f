use crate::error::{EnvcastError, Result};
use serde_json::{Map, Value};

/// Parse JSON text into a flat mapping.
///
/// The input must be a single JSON object; anything else (arrays, scalars,
/// malformed text) fails with `JsonParse`. Values are kept as-is — nested
/// structures are not flattened, they are coerced to text later when
/// formatting env output.
pub fn parse(content: &str) -> Result<Map<String, Value>> {
	serde_json::from_str(content).map_err(|source| EnvcastError::JsonParse { source })
}

/// Serialize a flat mapping as pretty-printed JSON (2-space indent),
/// preserving insertion order.
pub fn format(mapping: &Map<String, Value>) -> Result<String> {
	serde_json::to_string_pretty(mapping).map_err(|source| EnvcastError::JsonSerialize { source })
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_parse_flat_object() {
		let mapping = parse(r#"{"A": "1", "B": "2"}"#).unwrap();
		assert_eq!(mapping["A"], json!("1"));
		assert_eq!(mapping["B"], json!("2"));
	}

	#[test]
	fn test_parse_preserves_key_order() {
		let mapping = parse(r#"{"Z": "1", "A": "2", "M": "3"}"#).unwrap();
		let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["Z", "A", "M"]);
	}

	#[test]
	fn test_parse_malformed_json_fails() {
		let result = parse("{not json");
		assert!(matches!(result, Err(EnvcastError::JsonParse { .. })));
	}

	#[test]
	fn test_parse_non_object_top_level_fails() {
		assert!(parse(r#"["A", "B"]"#).is_err());
		assert!(parse(r#""just a string""#).is_err());
	}

	#[test]
	fn test_format_uses_two_space_indent() {
		let mut mapping = Map::new();
		mapping.insert("A".to_string(), json!("1"));
		let output = format(&mapping).unwrap();
		assert_eq!(output, "{\n  \"A\": \"1\"\n}");
	}

	#[test]
	fn test_format_preserves_insertion_order() {
		let mut mapping = Map::new();
		mapping.insert("Z".to_string(), json!("1"));
		mapping.insert("A".to_string(), json!("2"));
		let output = format(&mapping).unwrap();
		let z = output.find("\"Z\"").unwrap();
		let a = output.find("\"A\"").unwrap();
		assert!(z < a);
	}
}
