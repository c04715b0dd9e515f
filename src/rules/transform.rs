use crate::error::Result;
use crate::rules::matcher::WildcardRule;
use crate::rules::rewriter::rename_key;
use serde_json::{Map, Value};

/// Compiled ignore/rename rules applied across all keys of a flat mapping.
#[derive(Debug, Clone, Default)]
pub struct KeyRules {
	/// Keys matching this rule are dropped entirely.
	ignore: Option<WildcardRule>,

	/// Keys matching this rule are removed and re-inserted under a new name.
	replace: Option<WildcardRule>,

	/// Prefix prepended to renamed keys.
	replace_to: String,
}

impl KeyRules {
	/// Compile optional ignore/rename patterns into a rule set.
	pub fn compile(
		ignore: Option<&str>,
		replace: Option<&str>,
		replace_to: &str,
	) -> Result<Self> {
		let ignore = ignore.map(WildcardRule::compile).transpose()?;
		let replace = replace.map(WildcardRule::compile).transpose()?;

		Ok(KeyRules {
			ignore,
			replace,
			replace_to: replace_to.to_string(),
		})
	}

	/// Apply the rules to every key of `mapping`, in place.
	///
	/// Keys matching the ignore rule are removed. Keys matching the rename rule
	/// are removed and their value re-inserted under the renamed key (new keys
	/// land at the end of the mapping). A key matching both rules is renamed,
	/// not merely dropped. The key list is snapshotted up front so insertions
	/// never feed back into the iteration.
	pub fn apply(&self, mapping: &mut Map<String, Value>) {
		if self.ignore.is_none() && self.replace.is_none() {
			return;
		}

		let keys: Vec<String> = mapping.keys().cloned().collect();

		for key in keys {
			let ignored = self.ignore.as_ref().is_some_and(|rule| rule.matches(&key));
			let rename_rule = self.replace.as_ref().filter(|rule| rule.matches(&key));

			if !ignored && rename_rule.is_none() {
				continue;
			}

			if let Some(rule) = rename_rule {
				let new_key = rename_key(&key, rule, &self.replace_to);
				if let Some(value) = mapping.get(&key).cloned() {
					mapping.insert(new_key, value);
				}
			}

			// shift_remove keeps the relative order of the surviving keys
			mapping.shift_remove(&key);
		}
	}
}
