//! Per-session shortcut overrides and deterministic conflict resolution.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use smallvec::SmallVec;
use tracing::debug;
use vellum_primitives::{Shortcut, ShortcutSignature};

use crate::entry::CatalogEntry;

/// Replacement for one entry's shortcut list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BindingOverride {
	/// `false` or `null` clears the entry's shortcuts. Any other boolean is
	/// malformed configuration and normalizes to the same safe default.
	Cleared(Option<bool>),
	/// Replace the list with a single shortcut.
	One(Shortcut),
	/// Replace the list with these shortcuts.
	Many(Vec<Shortcut>),
}

impl BindingOverride {
	/// The normalized replacement list: keys trimmed, blank keys dropped.
	fn shortcuts(&self) -> SmallVec<[Shortcut; 2]> {
		let list: &[Shortcut] = match self {
			Self::Cleared(_) => &[],
			Self::One(shortcut) => std::slice::from_ref(shortcut),
			Self::Many(list) => list,
		};
		list.iter()
			.filter(|shortcut| {
				if shortcut.is_blank() {
					debug!("dropping blank-key shortcut from binding override");
					return false;
				}
				true
			})
			.map(Shortcut::normalized)
			.collect()
	}
}

fn default_true() -> bool {
	true
}

/// Per-session shortcut configuration.
///
/// A pure transform applied to a generated catalog by
/// [`apply_shortcut_config`]; never mutated in place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
	/// Command ids removed from the resolved catalog entirely.
	pub disabled_ids: Vec<String>,
	/// Replacement shortcut lists keyed by command id.
	pub bindings: IndexMap<String, BindingOverride>,
	/// Drop shortcuts whose signature an earlier entry already claimed.
	#[serde(default = "default_true")]
	pub prevent_collisions: bool,
	/// Drop shortcuts reserved by native editing surfaces.
	#[serde(default = "default_true")]
	pub prevent_native_conflicts: bool,
}

impl Default for ShortcutConfig {
	fn default() -> Self {
		Self {
			disabled_ids: Vec::new(),
			bindings: IndexMap::new(),
			prevent_collisions: true,
			prevent_native_conflicts: true,
		}
	}
}

/// Applies `config` to a generated catalog.
///
/// Steps run in a fixed order so resolution is deterministic:
/// 1. entries named by `disabled_ids` drop out;
/// 2. explicit binding overrides replace shortcut lists wholesale;
/// 3. with `prevent_native_conflicts`, reserved native bindings are
///    filtered from every entry's list (the resolver applies a second,
///    event-time guard for catalogs that skip this transform);
/// 4. with `prevent_collisions`, each surviving shortcut claims its
///    signature in catalog order and later claimants are dropped.
pub fn apply_shortcut_config(
	catalog: Vec<CatalogEntry>,
	config: &ShortcutConfig,
) -> Vec<CatalogEntry> {
	let disabled: FxHashSet<&str> = config.disabled_ids.iter().map(String::as_str).collect();
	let mut claimed: FxHashSet<ShortcutSignature> = FxHashSet::default();
	let mut resolved = Vec::with_capacity(catalog.len());

	for mut entry in catalog {
		if disabled.contains(entry.id.as_str()) {
			continue;
		}

		if let Some(replacement) = config.bindings.get(entry.id.as_str()) {
			entry.shortcuts = replacement.shortcuts();
		}

		if config.prevent_native_conflicts {
			entry.shortcuts.retain(|shortcut| {
				let keep = !shortcut.is_reserved_native();
				if !keep {
					debug!(id = %entry.id, key = %shortcut.key, "dropping reserved native binding");
				}
				keep
			});
		}

		if config.prevent_collisions {
			entry.shortcuts.retain(|shortcut| claimed.insert(shortcut.signature()));
		}

		resolved.push(entry);
	}

	resolved
}
