use crate::rules::matcher::WildcardRule;

/// Rename a key by prepending `prefix` when it matches `rule`.
///
/// Matching keys become `prefix + key`; the prefix is inserted literally, with
/// no capture-group expansion. Non-matching keys are returned unchanged. The
/// original pattern text is never removed from the key — renaming always
/// prepends. Callers that want a plain prefix scheme pass e.g. rule `FOO_*`
/// with prefix `BAZ_` and get `BAZ_FOO_BAR` back for `FOO_BAR`.
pub fn rename_key(key: &str, rule: &WildcardRule, prefix: &str) -> String {
	if rule.matches(key) {
		format!("{prefix}{key}")
	} else {
		key.to_string()
	}
}
