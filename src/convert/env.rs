use serde_json::{Map, Value};

/// Parse env-style text into a flat mapping.
///
/// Lines are split on `\n`; blank and whitespace-only lines are skipped. Each
/// remaining line splits at the first `=`: everything before is the key,
/// everything after is the value (later `=` characters stay in the value). A
/// line without `=` yields an empty value. Duplicate keys overwrite earlier
/// values, keeping the position of the first insertion.
pub fn parse(content: &str) -> Map<String, Value> {
	let mut mapping = Map::new();

	for line in content.split('\n') {
		if line.trim().is_empty() {
			continue;
		}

		let (key, value) = match line.split_once('=') {
			Some((key, value)) => (key, strip_quotes(value)),
			None => (line, ""),
		};

		mapping.insert(key.to_string(), Value::String(value.to_string()));
	}

	mapping
}

/// Serialize a flat mapping as env-style text, one `key=value\n` per entry.
///
/// Values containing an embedded newline get `'` escaped as `\'` and are
/// wrapped in single quotes. Non-string values are emitted as their JSON text.
pub fn format(mapping: &Map<String, Value>) -> String {
	let mut output = String::new();

	for (key, value) in mapping {
		let text = value_text(value);
		if text.contains('\n') {
			let escaped = text.replace('\'', "\\'");
			output.push_str(key);
			output.push('=');
			output.push('\'');
			output.push_str(&escaped);
			output.push('\'');
		} else {
			output.push_str(key);
			output.push('=');
			output.push_str(&text);
		}
		output.push('\n');
	}

	output
}

/// Strip one leading and one trailing quote character (`'` or `"`) from a
/// value, each independently of the other.
fn strip_quotes(value: &str) -> &str {
	let value = value.strip_prefix(['\'', '"']).unwrap_or(value);
	value.strip_suffix(['\'', '"']).unwrap_or(value)
}

fn value_text(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}
