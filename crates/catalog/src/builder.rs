//! The canonical command catalog.
//!
//! [`generate_commands`] emits a fixed, hand-curated ordered list covering
//! formatting toggles, block-type conversions, list operations, links,
//! block-level inserts, and history/view commands. Whether an entry is
//! actually offered is decided downstream by [`Availability`] filtering and
//! shortcut resolution, never here.
//!
//! [`Availability`]: crate::entry::Availability

use serde_json::json;
use tracing::debug;
use vellum_primitives::{Modifiers, Shortcut};

use crate::entry::{CatalogEntry, CommandCategory, Invocation};

/// Heading levels offered when the configuration selects none.
pub const DEFAULT_HEADING_LEVELS: [u8; 6] = [1, 2, 3, 4, 5, 6];

const DEFAULT_PARAGRAPH_LABEL: &str = "Paragraph";

/// Static configuration the catalog is generated from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogOptions {
	/// Allowed heading levels (1–6). Unknown levels are dropped, duplicates
	/// ignored; empty or fully-invalid input selects all six.
	pub heading_levels: Vec<u8>,
	/// Overrides the label of the convert-to-paragraph entry.
	/// Blank or whitespace-only values fall back to the default label.
	pub paragraph_label: Option<String>,
}

fn normalized_heading_levels(requested: &[u8]) -> Vec<u8> {
	let mut levels: Vec<u8> = Vec::with_capacity(DEFAULT_HEADING_LEVELS.len());
	for &level in requested {
		if !(1..=6).contains(&level) {
			debug!(level, "ignoring unknown heading level");
			continue;
		}
		if !levels.contains(&level) {
			levels.push(level);
		}
	}
	if levels.is_empty() {
		levels.extend(DEFAULT_HEADING_LEVELS);
	}
	levels
}

fn paragraph_label(options: &CatalogOptions) -> String {
	match options.paragraph_label.as_deref().map(str::trim) {
		Some(label) if !label.is_empty() => label.to_string(),
		_ => DEFAULT_PARAGRAPH_LABEL.to_string(),
	}
}

/// Generates the full catalog from static configuration.
///
/// Pure: identical options yield structurally identical catalogs. The
/// emitted order is the canonical presentation and conflict-resolution
/// order for every downstream consumer.
pub fn generate_commands(options: &CatalogOptions) -> Vec<CatalogEntry> {
	let mut entries = Vec::with_capacity(32);

	// Formatting toggles. Reserved-native entries carry both the ctrl and
	// meta variants of their binding.
	entries.push(
		CatalogEntry::new(
			"format.bold",
			"Bold",
			CommandCategory::Format,
			"bold",
			Invocation::bare("toggle_bold"),
		)
		.with_shortcut(Shortcut::new("b", Modifiers::CTRL))
		.with_shortcut(Shortcut::new("b", Modifiers::META))
		.with_keywords(&["strong"]),
	);
	entries.push(
		CatalogEntry::new(
			"format.italic",
			"Italic",
			CommandCategory::Format,
			"italic",
			Invocation::bare("toggle_italic"),
		)
		.with_shortcut(Shortcut::new("i", Modifiers::CTRL))
		.with_shortcut(Shortcut::new("i", Modifiers::META))
		.with_keywords(&["emphasis"]),
	);
	entries.push(
		CatalogEntry::new(
			"format.underline",
			"Underline",
			CommandCategory::Format,
			"underline",
			Invocation::bare("toggle_underline"),
		)
		.with_shortcut(Shortcut::new("u", Modifiers::CTRL))
		.with_shortcut(Shortcut::new("u", Modifiers::META)),
	);
	entries.push(
		CatalogEntry::new(
			"format.strikethrough",
			"Strikethrough",
			CommandCategory::Format,
			"strikethrough",
			Invocation::bare("toggle_strikethrough"),
		)
		.with_shortcut(Shortcut::new("x", Modifiers::CTRL.shift()))
		.with_shortcut(Shortcut::new("x", Modifiers::META.shift()))
		.with_keywords(&["strike"]),
	);
	entries.push(
		CatalogEntry::new(
			"format.code",
			"Inline Code",
			CommandCategory::Format,
			"code",
			Invocation::bare("toggle_code"),
		)
		.with_shortcut(Shortcut::new("e", Modifiers::CTRL))
		.with_shortcut(Shortcut::new("e", Modifiers::META))
		.with_keywords(&["monospace"]),
	);
	entries.push(CatalogEntry::new(
		"format.subscript",
		"Subscript",
		CommandCategory::Format,
		"subscript",
		Invocation::bare("toggle_subscript"),
	));
	entries.push(CatalogEntry::new(
		"format.superscript",
		"Superscript",
		CommandCategory::Format,
		"superscript",
		Invocation::bare("toggle_superscript"),
	));

	// Block-type conversions. Headings follow the configured subset; the
	// paragraph entry is the baseline every block can fall back to.
	entries.push(
		CatalogEntry::new(
			"block.paragraph",
			paragraph_label(options),
			CommandCategory::Block,
			"paragraph",
			Invocation::bare("set_paragraph"),
		)
		.with_description("Convert block to plain text")
		.with_shortcut(Shortcut::new("0", Modifiers::CTRL.alt()))
		.with_keywords(&["text", "body"]),
	);
	for level in normalized_heading_levels(&options.heading_levels) {
		entries.push(
			CatalogEntry::new(
				format!("block.heading{level}"),
				format!("Heading {level}"),
				CommandCategory::Block,
				"heading",
				Invocation::with_args("toggle_heading", json!({ "level": level })),
			)
			.with_description(format!("Convert block to level {level} heading"))
			.with_shortcut(Shortcut::new(level.to_string(), Modifiers::CTRL.alt()))
			.with_keywords(&["title", "section"]),
		);
	}
	entries.push(
		CatalogEntry::new(
			"block.quote",
			"Quote",
			CommandCategory::Block,
			"blockquote",
			Invocation::bare("toggle_blockquote"),
		)
		.with_keywords(&["blockquote", "citation"]),
	);
	entries.push(
		CatalogEntry::new(
			"block.code_block",
			"Code Block",
			CommandCategory::Block,
			"code_block",
			Invocation::bare("toggle_code_block"),
		)
		.with_shortcut(Shortcut::new("c", Modifiers::CTRL.alt()))
		.with_keywords(&["fence", "snippet"]),
	);

	// List operations.
	entries.push(
		CatalogEntry::new(
			"list.bullet",
			"Bullet List",
			CommandCategory::List,
			"bullet_list",
			Invocation::bare("toggle_bullet_list"),
		)
		.with_shortcut(Shortcut::new("8", Modifiers::CTRL.shift()))
		.with_keywords(&["unordered"]),
	);
	entries.push(
		CatalogEntry::new(
			"list.ordered",
			"Ordered List",
			CommandCategory::List,
			"ordered_list",
			Invocation::bare("toggle_ordered_list"),
		)
		.with_shortcut(Shortcut::new("7", Modifiers::CTRL.shift()))
		.with_keywords(&["numbered"]),
	);
	entries.push(
		CatalogEntry::new(
			"list.task",
			"Task List",
			CommandCategory::List,
			"task_list",
			Invocation::bare("toggle_task_list"),
		)
		.with_shortcut(Shortcut::new("9", Modifiers::CTRL.shift()))
		.with_keywords(&["todo", "checkbox"]),
	);
	entries.push(
		CatalogEntry::new(
			"list.indent",
			"Indent List Item",
			CommandCategory::List,
			"list_item",
			Invocation::bare("sink_list_item"),
		)
		.with_keywords(&["nest"]),
	);
	entries.push(
		CatalogEntry::new(
			"list.outdent",
			"Outdent List Item",
			CommandCategory::List,
			"list_item",
			Invocation::bare("lift_list_item"),
		)
		.with_keywords(&["unnest"]),
	);

	// Links.
	entries.push(
		CatalogEntry::new(
			"link.insert",
			"Insert Link",
			CommandCategory::Link,
			"link",
			Invocation::bare("insert_link"),
		)
		.with_shortcut(Shortcut::new("k", Modifiers::CTRL))
		.with_shortcut(Shortcut::new("k", Modifiers::META))
		.with_keywords(&["url", "href"]),
	);
	entries.push(CatalogEntry::new(
		"link.remove",
		"Remove Link",
		CommandCategory::Link,
		"link",
		Invocation::bare("remove_link"),
	));

	// Block-level inserts.
	entries.push(
		CatalogEntry::new(
			"insert.horizontal_rule",
			"Horizontal Rule",
			CommandCategory::Insert,
			"horizontal_rule",
			Invocation::bare("insert_horizontal_rule"),
		)
		.with_keywords(&["divider", "hr"]),
	);
	entries.push(
		CatalogEntry::new(
			"insert.image",
			"Image",
			CommandCategory::Insert,
			"image",
			Invocation::bare("insert_image"),
		)
		.with_keywords(&["picture", "photo"]),
	);
	entries.push(
		CatalogEntry::new(
			"insert.table",
			"Table",
			CommandCategory::Insert,
			"table",
			Invocation::bare("insert_table"),
		)
		.with_keywords(&["grid"]),
	);
	entries.push(
		CatalogEntry::new(
			"insert.embed",
			"Embed",
			CommandCategory::Insert,
			"embed",
			Invocation::bare("insert_embed"),
		)
		.with_keywords(&["iframe", "video"]),
	);
	entries.push(
		CatalogEntry::new(
			"insert.emoji",
			"Emoji",
			CommandCategory::Insert,
			"emoji",
			Invocation::bare("insert_emoji"),
		)
		.with_keywords(&["emoticon"]),
	);

	// History and view.
	entries.push(
		CatalogEntry::new(
			"history.undo",
			"Undo",
			CommandCategory::History,
			"history",
			Invocation::bare("undo"),
		)
		.with_shortcut(Shortcut::new("z", Modifiers::CTRL))
		.with_shortcut(Shortcut::new("z", Modifiers::META)),
	);
	entries.push(
		CatalogEntry::new(
			"history.redo",
			"Redo",
			CommandCategory::History,
			"history",
			Invocation::bare("redo"),
		)
		.with_shortcut(Shortcut::new("y", Modifiers::CTRL))
		.with_shortcut(Shortcut::new("z", Modifiers::META.shift())),
	);
	entries.push(
		CatalogEntry::new(
			"view.fullscreen",
			"Fullscreen",
			CommandCategory::View,
			"fullscreen",
			Invocation::bare("toggle_fullscreen"),
		)
		.with_keywords(&["zen", "focus"]),
	);

	entries
}

#[cfg(test)]
mod tests;
