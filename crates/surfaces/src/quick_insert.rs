//! The quick-insert ("slash command") surface.
//!
//! A restricted view of the catalog limited to creatable blocks: the
//! insert- and list-category entries plus the block conversions a user can
//! reach from an empty paragraph. Visibility narrows further by allow/deny
//! sets or ordered per-id selections; output order always follows catalog
//! order, independent of how the selection list was authored.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use vellum_catalog::{Availability, CatalogEntry, CommandCategory, Invocation};

/// Block conversions eligible for quick insertion besides the insert and
/// list categories.
const QUICK_INSERT_BLOCK_IDS: &[&str] = &["block.paragraph", "block.quote", "block.code_block"];

const HEADING_ID_PREFIX: &str = "block.heading";

/// One per-id visibility selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VisibilitySelection {
	/// Catalog entry id the selection applies to.
	pub id: String,
	/// Whether the entry is visible.
	pub enabled: bool,
}

/// Allow/deny narrowing of the quick-insert surface.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QuickInsertVisibility {
	/// Explicit allow/deny id sets; `allow: None` admits everything not
	/// denied.
	Sets {
		/// Ids to keep; `None` keeps all eligible entries.
		#[serde(default)]
		allow: Option<Vec<String>>,
		/// Ids to drop, applied after `allow`.
		#[serde(default)]
		deny: Vec<String>,
	},
	/// Ordered per-id selections. The last occurrence of an id wins, and
	/// when any selection exists only ids explicitly enabled are kept.
	Selections(Vec<VisibilitySelection>),
	/// Every eligible entry is visible.
	#[default]
	All,
}

enum VisibilityFilter<'a> {
	All,
	Explicit {
		allow: Option<FxHashSet<&'a str>>,
		deny: FxHashSet<&'a str>,
	},
	Enabled(FxHashSet<&'a str>),
}

impl<'a> VisibilityFilter<'a> {
	fn compile(visibility: &'a QuickInsertVisibility) -> Self {
		match visibility {
			QuickInsertVisibility::All => Self::All,
			QuickInsertVisibility::Sets { allow, deny } => Self::Explicit {
				allow: allow
					.as_ref()
					.map(|ids| ids.iter().map(String::as_str).collect()),
				deny: deny.iter().map(String::as_str).collect(),
			},
			QuickInsertVisibility::Selections(selections) => {
				if selections.is_empty() {
					return Self::All;
				}
				// Later selections for the same id override earlier ones.
				let mut last: FxHashMap<&str, bool> = FxHashMap::default();
				for selection in selections {
					last.insert(selection.id.as_str(), selection.enabled);
				}
				Self::Enabled(
					last.into_iter()
						.filter_map(|(id, enabled)| enabled.then_some(id))
						.collect(),
				)
			}
		}
	}

	fn admits(&self, id: &str) -> bool {
		match self {
			Self::All => true,
			Self::Explicit { allow, deny } => {
				allow.as_ref().is_none_or(|allowed| allowed.contains(id)) && !deny.contains(id)
			}
			Self::Enabled(enabled) => enabled.contains(id),
		}
	}
}

/// One row of the quick-insert menu.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickInsertItem {
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
	/// Capability call to perform when the row is chosen.
	pub action: Invocation,
}

fn is_quick_insert_entry(entry: &CatalogEntry) -> bool {
	matches!(entry.category, CommandCategory::Insert | CommandCategory::List)
		|| QUICK_INSERT_BLOCK_IDS.contains(&entry.id.as_str())
		|| entry.id.starts_with(HEADING_ID_PREFIX)
}

/// Filters the resolved catalog into quick-insert rows, in catalog order.
pub fn quick_insert_items(
	catalog: &[CatalogEntry],
	ctx: &Availability<'_>,
	visibility: &QuickInsertVisibility,
) -> Vec<QuickInsertItem> {
	let filter = VisibilityFilter::compile(visibility);
	catalog
		.iter()
		.filter(|entry| is_quick_insert_entry(entry))
		.filter(|entry| entry.available(ctx))
		.filter(|entry| filter.admits(&entry.id))
		.map(|entry| QuickInsertItem {
			id: entry.id.clone(),
			label: entry.label.clone(),
			description: entry.description.clone(),
			category: entry.category,
			keywords: entry.keywords,
			action: entry.action.clone(),
		})
		.collect()
}

#[cfg(test)]
mod tests;
