use pretty_assertions::assert_eq;
use serde_json::json;
use vellum_extension::Capabilities;

use super::{CatalogOptions, generate_commands};
use crate::entry::{Availability, FeatureGate};

fn heading_ids(options: &CatalogOptions) -> Vec<String> {
	generate_commands(options)
		.into_iter()
		.filter(|entry| entry.id.starts_with("block.heading"))
		.map(|entry| entry.id)
		.collect()
}

#[test]
fn heading_entries_follow_the_requested_subset() {
	let options = CatalogOptions { heading_levels: vec![2, 4], ..Default::default() };
	assert_eq!(heading_ids(&options), vec!["block.heading2", "block.heading4"]);
}

#[test]
fn empty_heading_selection_defaults_to_all_six() {
	let options = CatalogOptions::default();
	assert_eq!(
		heading_ids(&options),
		vec![
			"block.heading1",
			"block.heading2",
			"block.heading3",
			"block.heading4",
			"block.heading5",
			"block.heading6",
		]
	);
}

#[test]
fn invalid_heading_levels_are_silently_dropped() {
	let options = CatalogOptions { heading_levels: vec![0, 3, 7, 9], ..Default::default() };
	assert_eq!(heading_ids(&options), vec!["block.heading3"]);
}

#[test]
fn fully_invalid_heading_selection_falls_back_to_all_six() {
	let options = CatalogOptions { heading_levels: vec![0, 7, 200], ..Default::default() };
	assert_eq!(heading_ids(&options).len(), 6);
}

#[test]
fn duplicate_heading_levels_keep_first_occurrence_order() {
	let options = CatalogOptions { heading_levels: vec![3, 1, 3, 1], ..Default::default() };
	assert_eq!(heading_ids(&options), vec!["block.heading3", "block.heading1"]);
}

#[test]
fn heading_entries_carry_ctrl_alt_level_shortcuts() {
	let options = CatalogOptions { heading_levels: vec![2], ..Default::default() };
	let catalog = generate_commands(&options);
	let heading = catalog.iter().find(|e| e.id == "block.heading2").unwrap();

	assert_eq!(heading.shortcuts.len(), 1);
	let shortcut = &heading.shortcuts[0];
	assert_eq!(shortcut.key, "2");
	assert!(shortcut.modifiers.ctrl && shortcut.modifiers.alt);
	assert!(!shortcut.modifiers.meta && !shortcut.modifiers.shift);
	assert_eq!(heading.description.as_deref(), Some("Convert block to level 2 heading"));
	assert_eq!(heading.action.args, json!({ "level": 2 }));
}

#[test]
fn paragraph_label_override_applies() {
	let options = CatalogOptions {
		paragraph_label: Some("Body Text".to_string()),
		..Default::default()
	};
	let catalog = generate_commands(&options);
	let paragraph = catalog.iter().find(|e| e.id == "block.paragraph").unwrap();
	assert_eq!(paragraph.label, "Body Text");
}

#[test]
fn blank_paragraph_label_falls_back_to_default() {
	let options = CatalogOptions {
		paragraph_label: Some("   ".to_string()),
		..Default::default()
	};
	let catalog = generate_commands(&options);
	let paragraph = catalog.iter().find(|e| e.id == "block.paragraph").unwrap();
	assert_eq!(paragraph.label, "Paragraph");
}

#[test]
fn generation_is_pure() {
	let options = CatalogOptions {
		heading_levels: vec![1, 2, 3],
		paragraph_label: Some("Body".to_string()),
	};
	assert_eq!(generate_commands(&options), generate_commands(&options));
}

#[test]
fn catalog_order_groups_categories_canonically() {
	let catalog = generate_commands(&CatalogOptions::default());
	let first = catalog.first().unwrap();
	let last = catalog.last().unwrap();
	assert_eq!(first.id, "format.bold");
	assert_eq!(last.id, "view.fullscreen");

	// Block conversions come after every formatting toggle.
	let last_format = catalog.iter().rposition(|e| e.id.starts_with("format.")).unwrap();
	let first_block = catalog.iter().position(|e| e.id.starts_with("block.")).unwrap();
	assert!(last_format < first_block);
}

#[test]
fn availability_requires_gate_and_capability_presence() {
	let gate = FeatureGate::default();
	let catalog = generate_commands(&CatalogOptions::default());
	let bold = catalog.iter().find(|e| e.id == "format.bold").unwrap();

	// No extension exposes toggle_bold: unavailable despite the open gate.
	let empty = Capabilities::default();
	assert!(!bold.available(&Availability { commands: &empty, gate: &gate }));

	let mut caps = Capabilities::default();
	caps.insert_command("format", "toggle_bold", |_args| Ok(true));
	assert!(bold.available(&Availability { commands: &caps, gate: &gate }));

	let closed = FeatureGate::allow_only(["italic"]);
	assert!(!bold.available(&Availability { commands: &caps, gate: &closed }));
}
