//! Key events as delivered by the host surface.

use vellum_primitives::{Modifiers, ScopeId, Shortcut};

/// Where a key event originated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTarget {
	/// True when the target is an editable region of the engine's surface.
	pub editable: bool,
	/// Scopes enclosing the target, innermost first.
	pub scopes: Vec<ScopeId>,
}

impl EventTarget {
	/// A non-editable target inside `scope`.
	pub fn in_scope(scope: ScopeId) -> Self {
		Self { editable: false, scopes: vec![scope] }
	}

	/// An editable target inside `scope`.
	pub fn editable_in(scope: ScopeId) -> Self {
		Self { editable: true, scopes: vec![scope] }
	}

	/// True when `scope` encloses the target.
	pub fn contains(&self, scope: ScopeId) -> bool {
		self.scopes.contains(&scope)
	}
}

/// A key-down event from the listening surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
	/// Logical key as reported by the layout (e.g. `"b"`, `"2"`).
	pub key: String,
	/// Physical key code when the surface reports one (e.g. `"Backquote"`).
	pub code: Option<String>,
	/// Modifier flags at event time.
	pub modifiers: Modifiers,
	/// Origin of the event.
	pub target: EventTarget,
}

impl KeyInput {
	/// An event with no physical code and a default target.
	pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
		Self {
			key: key.into(),
			code: None,
			modifiers,
			target: EventTarget::default(),
		}
	}

	/// Returns a copy with the physical key code set.
	pub fn with_code(mut self, code: impl Into<String>) -> Self {
		self.code = Some(code.into());
		self
	}

	/// Returns a copy with the target replaced.
	pub fn with_target(mut self, target: EventTarget) -> Self {
		self.target = target;
		self
	}

	/// True when this event's key matches `shortcut`'s, tolerating the
	/// backtick/grave layout variance via the physical code.
	pub(crate) fn key_matches(&self, shortcut: &Shortcut) -> bool {
		let want = shortcut.normalized_key();
		if self.key.trim().to_lowercase() == want {
			return true;
		}
		want == "`" && matches!(self.code.as_deref(), Some("Backquote" | "IntlBackquote"))
	}
}
