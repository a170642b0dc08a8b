//! The searchable command palette surface.

use vellum_catalog::{Availability, CatalogEntry, CommandCategory, Invocation};
use vellum_primitives::Shortcut;

/// Options for the palette surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaletteOptions {
	/// Keep only entries that still carry at least one shortcut after
	/// resolution.
	pub shortcut_only: bool,
}

/// One display row of the command palette.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteItem {
	/// Stable id of the backing catalog entry.
	pub id: String,
	/// Display label.
	pub label: String,
	/// Optional longer description.
	pub description: Option<String>,
	/// Grouping category.
	pub category: CommandCategory,
	/// Extra search keywords.
	pub keywords: &'static [&'static str],
	/// Display label of the first surviving shortcut.
	pub shortcut: Option<String>,
	/// Capability call to perform when the row is chosen.
	pub action: Invocation,
}

/// Filters the resolved catalog into palette rows, in catalog order.
///
/// Entries whose availability predicate fails are excluded; with
/// [`PaletteOptions::shortcut_only`], entries without a surviving shortcut
/// are excluded as well.
pub fn palette_items(
	catalog: &[CatalogEntry],
	ctx: &Availability<'_>,
	options: PaletteOptions,
) -> Vec<PaletteItem> {
	catalog
		.iter()
		.filter(|entry| entry.available(ctx))
		.filter(|entry| !options.shortcut_only || !entry.shortcuts.is_empty())
		.map(|entry| PaletteItem {
			id: entry.id.clone(),
			label: entry.label.clone(),
			description: entry.description.clone(),
			category: entry.category,
			keywords: entry.keywords,
			shortcut: entry.primary_shortcut().map(shortcut_label),
			action: entry.action.clone(),
		})
		.collect()
}

/// Human-readable shortcut label.
///
/// Modifier order is fixed (Ctrl, Cmd, Alt, Shift), followed by the
/// uppercased key, joined with `+`.
pub fn shortcut_label(shortcut: &Shortcut) -> String {
	let mut parts: Vec<&str> = Vec::with_capacity(4);
	if shortcut.modifiers.ctrl {
		parts.push("Ctrl");
	}
	if shortcut.modifiers.meta {
		parts.push("Cmd");
	}
	if shortcut.modifiers.alt {
		parts.push("Alt");
	}
	if shortcut.modifiers.shift {
		parts.push("Shift");
	}

	let key = shortcut.normalized_key().to_uppercase();
	let mut label = parts.join("+");
	if !label.is_empty() {
		label.push('+');
	}
	label.push_str(&key);
	label
}
