//! Extension configuration values.

use serde_json::Value;

/// Shallow-merges `patch` into `config`.
///
/// Top-level object keys from `patch` replace keys in `config`; nested
/// objects are replaced wholesale, never merged recursively. A `Null` patch
/// leaves the configuration untouched; a non-object patch replaces it.
pub fn shallow_merge(config: &mut Value, patch: Value) {
	match (config, patch) {
		(_, Value::Null) => {}
		(Value::Object(base), Value::Object(patch)) => {
			for (key, value) in patch {
				base.insert(key, value);
			}
		}
		(config, patch) => *config = patch,
	}
}

#[cfg(test)]
mod tests;
