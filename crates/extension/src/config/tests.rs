use pretty_assertions::assert_eq;
use serde_json::json;

use super::shallow_merge;

#[test]
fn top_level_keys_replace_existing_ones() {
	let mut config = json!({ "levels": [1, 2], "label": "Paragraph" });
	shallow_merge(&mut config, json!({ "label": "Body" }));
	assert_eq!(config, json!({ "levels": [1, 2], "label": "Body" }));
}

#[test]
fn nested_objects_are_replaced_not_merged() {
	let mut config = json!({ "upload": { "max_bytes": 1024, "mime": ["image/png"] } });
	shallow_merge(&mut config, json!({ "upload": { "max_bytes": 4096 } }));
	assert_eq!(config, json!({ "upload": { "max_bytes": 4096 } }));
}

#[test]
fn null_patch_is_a_no_op() {
	let mut config = json!({ "label": "Paragraph" });
	shallow_merge(&mut config, serde_json::Value::Null);
	assert_eq!(config, json!({ "label": "Paragraph" }));
}

#[test]
fn non_object_patch_replaces_wholesale() {
	let mut config = json!({ "label": "Paragraph" });
	shallow_merge(&mut config, json!(true));
	assert_eq!(config, json!(true));
}

#[test]
fn merging_into_a_non_object_replaces_it() {
	let mut config = json!(42);
	shallow_merge(&mut config, json!({ "label": "Body" }));
	assert_eq!(config, json!({ "label": "Body" }));
}
