use pretty_assertions::assert_eq;
use serde_json::json;
use vellum_catalog::{
	Availability, CatalogOptions, FeatureGate, ShortcutConfig, apply_shortcut_config,
	generate_commands,
};
use vellum_extension::Capabilities;

use super::{QuickInsertVisibility, VisibilitySelection, quick_insert_items};

const CREATABLE_COMMANDS: &[&str] = &[
	"set_paragraph",
	"toggle_heading",
	"toggle_blockquote",
	"toggle_code_block",
	"toggle_bullet_list",
	"toggle_ordered_list",
	"toggle_task_list",
	"sink_list_item",
	"lift_list_item",
	"insert_horizontal_rule",
	"insert_image",
	"insert_table",
	"insert_embed",
	"insert_emoji",
	// Non-creatable capabilities, present to prove they stay off this surface.
	"toggle_bold",
	"undo",
	"insert_link",
];

fn full_caps() -> Capabilities {
	let mut caps = Capabilities::default();
	for key in CREATABLE_COMMANDS {
		caps.insert_command("test", *key, |_args| Ok(true));
	}
	caps
}

fn items_with(visibility: &QuickInsertVisibility) -> Vec<String> {
	let caps = full_caps();
	let gate = FeatureGate::default();
	let catalog = generate_commands(&CatalogOptions {
		heading_levels: vec![1, 2],
		..Default::default()
	});
	quick_insert_items(&catalog, &Availability { commands: &caps, gate: &gate }, visibility)
		.into_iter()
		.map(|item| item.id)
		.collect()
}

#[test]
fn only_creatable_entries_are_eligible() {
	let ids = items_with(&QuickInsertVisibility::All);
	assert_eq!(
		ids,
		vec![
			"block.paragraph",
			"block.heading1",
			"block.heading2",
			"block.quote",
			"block.code_block",
			"list.bullet",
			"list.ordered",
			"list.task",
			"list.indent",
			"list.outdent",
			"insert.horizontal_rule",
			"insert.image",
			"insert.table",
			"insert.embed",
			"insert.emoji",
		]
	);
}

#[test]
fn formatting_link_and_history_entries_never_appear() {
	let ids = items_with(&QuickInsertVisibility::All);
	assert!(!ids.iter().any(|id| id.starts_with("format.")));
	assert!(!ids.iter().any(|id| id.starts_with("link.")));
	assert!(!ids.iter().any(|id| id.starts_with("history.")));
}

#[test]
fn unavailable_entries_fall_out() {
	let mut caps = Capabilities::default();
	caps.insert_command("test", "insert_table", |_args| Ok(true));
	let gate = FeatureGate::default();
	let catalog = generate_commands(&CatalogOptions::default());

	let items = quick_insert_items(
		&catalog,
		&Availability { commands: &caps, gate: &gate },
		&QuickInsertVisibility::All,
	);

	let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
	assert_eq!(ids, vec!["insert.table"]);
}

#[test]
fn allow_set_keeps_only_listed_ids() {
	let visibility = QuickInsertVisibility::Sets {
		allow: Some(vec!["insert.image".to_string(), "block.quote".to_string()]),
		deny: Vec::new(),
	};
	// Catalog order, not allow-list order.
	assert_eq!(items_with(&visibility), vec!["block.quote", "insert.image"]);
}

#[test]
fn deny_set_drops_listed_ids() {
	let visibility = QuickInsertVisibility::Sets {
		allow: None,
		deny: vec!["insert.emoji".to_string(), "list.task".to_string()],
	};
	let ids = items_with(&visibility);
	assert!(!ids.contains(&"insert.emoji".to_string()));
	assert!(!ids.contains(&"list.task".to_string()));
	assert!(ids.contains(&"insert.image".to_string()));
}

#[test]
fn deny_overrides_allow() {
	let visibility = QuickInsertVisibility::Sets {
		allow: Some(vec!["insert.image".to_string(), "insert.table".to_string()]),
		deny: vec!["insert.table".to_string()],
	};
	assert_eq!(items_with(&visibility), vec!["insert.image"]);
}

#[test]
fn last_selection_for_an_id_wins() {
	let visibility = QuickInsertVisibility::Selections(vec![
		VisibilitySelection { id: "insert.image".to_string(), enabled: true },
		VisibilitySelection { id: "insert.table".to_string(), enabled: true },
		VisibilitySelection { id: "insert.image".to_string(), enabled: false },
		VisibilitySelection { id: "block.quote".to_string(), enabled: false },
		VisibilitySelection { id: "block.quote".to_string(), enabled: true },
	]);

	// block.quote precedes insert.table in the catalog even though the
	// selection list enables it later.
	assert_eq!(items_with(&visibility), vec!["block.quote", "insert.table"]);
}

#[test]
fn empty_selection_list_shows_everything() {
	let all = items_with(&QuickInsertVisibility::All);
	let selected = items_with(&QuickInsertVisibility::Selections(Vec::new()));
	assert_eq!(all, selected);
}

#[test]
fn selections_without_enabled_ids_hide_everything() {
	let visibility = QuickInsertVisibility::Selections(vec![
		VisibilitySelection { id: "insert.image".to_string(), enabled: false },
	]);
	assert!(items_with(&visibility).is_empty());
}

#[test]
fn disabling_a_command_removes_it_from_quick_insert() {
	let caps = full_caps();
	let gate = FeatureGate::default();
	let config = ShortcutConfig {
		disabled_ids: vec!["insert.table".to_string()],
		..Default::default()
	};
	let catalog = apply_shortcut_config(generate_commands(&CatalogOptions::default()), &config);

	let items = quick_insert_items(
		&catalog,
		&Availability { commands: &caps, gate: &gate },
		&QuickInsertVisibility::All,
	);

	assert!(!items.iter().any(|item| item.id == "insert.table"));
	assert!(items.iter().any(|item| item.id == "insert.image"));
}

#[test]
fn visibility_deserializes_from_selection_lists() {
	let visibility: QuickInsertVisibility = serde_json::from_value(json!([
		{ "id": "insert.image", "enabled": true },
		{ "id": "insert.image", "enabled": false },
	]))
	.unwrap();

	match &visibility {
		QuickInsertVisibility::Selections(selections) => assert_eq!(selections.len(), 2),
		other => panic!("unexpected variant: {other:?}"),
	}
	assert!(items_with(&visibility).is_empty());
}

#[test]
fn visibility_deserializes_from_allow_deny_objects() {
	let visibility: QuickInsertVisibility = serde_json::from_value(json!({
		"allow": ["insert.emoji"],
	}))
	.unwrap();
	assert_eq!(items_with(&visibility), vec!["insert.emoji"]);
}
