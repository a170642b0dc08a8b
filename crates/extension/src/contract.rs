//! The capability contract every extension satisfies.

use std::sync::Arc;

use serde_json::Value;

use crate::capabilities::{CommandSet, QuerySet};
use crate::error::RegistryError;
use crate::host::Host;

/// Classification tag used for UI placement of an extension's contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionCategory {
	/// Inline formatting (bold, italic, code spans).
	Formatting,
	/// Block-level structure (headings, quotes, code blocks).
	Block,
	/// List structure and list item movement.
	List,
	/// Links and references.
	Link,
	/// Content inserted as standalone blocks (images, tables, embeds).
	Insert,
	/// Editing history.
	History,
	/// Viewport and chrome behavior.
	View,
	/// Anything that doesn't fit the buckets above.
	Utility,
}

/// Mount points the host exposes for UI fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiSlot {
	/// The persistent toolbar.
	Toolbar,
	/// The floating selection menu.
	FloatingMenu,
	/// A modal or popover overlay.
	Overlay,
	/// The status bar.
	StatusBar,
}

/// A UI contribution rendered by the host.
///
/// Fragments are opaque to the core: the host UI resolves [`UiSlot`] to a
/// mount point and interprets the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct UiFragment {
	/// Stable identifier, unique within the contributing extension.
	pub id: String,
	/// Where the host should mount this fragment.
	pub slot: UiSlot,
	/// Renderer-specific data.
	pub payload: Value,
}

/// Teardown handle returned from [`Extension::register`].
///
/// Runs its teardown exactly once. Disposing again is a no-op; dropping an
/// undisposed handle runs the teardown as a last resort.
pub struct Disposer(Option<Box<dyn FnOnce() + Send>>);

impl Disposer {
	/// Wraps a teardown closure.
	pub fn new(teardown: impl FnOnce() + Send + 'static) -> Self {
		Self(Some(Box::new(teardown)))
	}

	/// A disposer with no side effects.
	pub fn noop() -> Self {
		Self(None)
	}

	/// Runs the teardown if it has not run yet.
	pub fn dispose(&mut self) {
		if let Some(teardown) = self.0.take() {
			teardown();
		}
	}

	/// True while the teardown has not run.
	pub fn is_armed(&self) -> bool {
		self.0.is_some()
	}
}

impl Drop for Disposer {
	fn drop(&mut self) {
		self.dispose();
	}
}

impl std::fmt::Debug for Disposer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Disposer").field(&self.is_armed()).finish()
	}
}

/// The shape every extension satisfies.
///
/// Extensions are constructed once per session (never as shared module
/// state), configured before or after construction via [`configure`],
/// registered when the host mounts, and disposed when it unmounts. An
/// extension is registered at most once per host at a time; the
/// [`ExtensionSession`] enforces this.
///
/// [`configure`]: Extension::configure
/// [`ExtensionSession`]: crate::ExtensionSession
pub trait Extension {
	/// Unique identity, used in diagnostics and collision reporting.
	fn name(&self) -> &str;

	/// Classification tags for UI placement.
	fn categories(&self) -> &[ExtensionCategory] {
		&[]
	}

	/// Shallow-merges `patch` into the extension's configuration value.
	///
	/// Top-level keys in `patch` replace existing keys; nothing is merged
	/// recursively. See [`shallow_merge`](crate::shallow_merge).
	fn configure(&mut self, patch: Value) {
		let _ = patch;
	}

	/// Registers side effects against the host and returns their teardown.
	///
	/// Calling the returned [`Disposer`] fully reverses the side effects.
	fn register(&mut self, host: &Arc<dyn Host>) -> Result<Disposer, RegistryError>;

	/// Commands this extension contributes to the aggregated surface.
	fn commands(&self, host: &Arc<dyn Host>) -> CommandSet {
		let _ = host;
		CommandSet::default()
	}

	/// Asynchronous state probes this extension contributes.
	fn state_queries(&self, host: &Arc<dyn Host>) -> QuerySet {
		let _ = host;
		QuerySet::default()
	}

	/// UI fragments the host should render for this extension.
	fn ui_fragments(&self) -> Vec<UiFragment> {
		Vec::new()
	}
}
