//! Keyboard shortcut descriptors and collision signatures.

use serde::{Deserialize, Serialize};

use super::Modifiers;

/// Keys the host surface handles natively (bold, italic, underline, link)
/// when combined with ctrl or meta and without alt.
const RESERVED_NATIVE_KEYS: &[&str] = &["b", "i", "u", "k"];

/// A key string plus modifier flags, as declared by catalog entries and
/// per-session binding overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
	/// Logical key (e.g. `"b"`, `"2"`, `` "`" ``). Compared case-insensitively.
	pub key: String,
	/// Modifier flags; all four must match exactly.
	#[serde(flatten)]
	pub modifiers: Modifiers,
	/// Whether a match suppresses the surface's default action.
	/// `None` means yes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub prevent_default: Option<bool>,
}

impl Shortcut {
	/// Creates a shortcut with default-action suppression left at the default.
	pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
		Self {
			key: key.into(),
			modifiers,
			prevent_default: None,
		}
	}

	/// Returns a copy with an explicit prevent-default setting.
	pub fn prevent_default(mut self, prevent: bool) -> Self {
		self.prevent_default = Some(prevent);
		self
	}

	/// The trimmed, lowercased key used for matching and collisions.
	pub fn normalized_key(&self) -> String {
		self.key.trim().to_lowercase()
	}

	/// True when the trimmed key is empty. Blank shortcuts are dropped
	/// during override normalization.
	pub fn is_blank(&self) -> bool {
		self.key.trim().is_empty()
	}

	/// Returns a copy with the key trimmed.
	pub fn normalized(&self) -> Self {
		Self {
			key: self.key.trim().to_string(),
			modifiers: self.modifiers,
			prevent_default: self.prevent_default,
		}
	}

	/// The signature two shortcuts collide on: normalized key plus the
	/// exact modifier bitset.
	pub fn signature(&self) -> ShortcutSignature {
		ShortcutSignature {
			key: self.normalized_key(),
			modifiers: self.modifiers.bits(),
		}
	}

	/// Whether a match should suppress the surface's default action.
	pub fn suppresses_default(&self) -> bool {
		self.prevent_default.unwrap_or(true)
	}

	/// True for combinations reserved by native editing surfaces:
	/// ctrl or meta plus one of b/i/u/k, with alt not held.
	pub fn is_reserved_native(&self) -> bool {
		let mods = self.modifiers;
		(mods.ctrl || mods.meta)
			&& !mods.alt
			&& RESERVED_NATIVE_KEYS.contains(&self.normalized_key().as_str())
	}
}

/// Collision identity of a shortcut. Two shortcuts collide iff their
/// signatures are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortcutSignature {
	key: String,
	modifiers: u8,
}
