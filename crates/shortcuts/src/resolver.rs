//! First-match shortcut dispatch and surface binding.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;
use vellum_catalog::{Availability, CatalogEntry, FeatureGate};
use vellum_extension::{Capabilities, CommandResult};
use vellum_primitives::ScopeId;

use crate::event::KeyInput;

/// Outcome of dispatching one key-down event.
///
/// "Out of scope" and "no match" are normal, silent outcomes; the resolver
/// never errors for them. Action errors travel inside [`Dispatch::Matched`],
/// uncaught by the dispatch loop.
#[derive(Debug)]
pub enum Dispatch {
	/// The event originated outside the resolver's scope.
	OutOfScope,
	/// No catalog shortcut matched; the event passes through unchanged.
	NoMatch,
	/// A shortcut matched and consumed the event.
	Matched {
		/// Id of the matching catalog entry.
		id: String,
		/// Whether the surface should suppress its default action.
		prevent_default: bool,
		/// The action's result; `None` when the entry's availability check
		/// failed at event time and the action was not invoked.
		result: Option<CommandResult>,
	},
}

impl Dispatch {
	/// True when an entry consumed the event.
	pub fn consumed(&self) -> bool {
		matches!(self, Self::Matched { .. })
	}

	/// Id of the consuming entry, if any.
	pub fn matched_id(&self) -> Option<&str> {
		match self {
			Self::Matched { id, .. } => Some(id),
			_ => None,
		}
	}
}

/// Stateless dispatcher over one resolved catalog.
///
/// Walk order is catalog order; the first matching shortcut consumes the
/// event whether or not its entry is currently available.
pub struct ShortcutResolver {
	catalog: Vec<CatalogEntry>,
	scope: Option<ScopeId>,
	prevent_native_conflicts: bool,
}

impl ShortcutResolver {
	/// Builds a resolver over an already-resolved catalog.
	pub fn new(catalog: Vec<CatalogEntry>) -> Self {
		Self {
			catalog,
			scope: None,
			prevent_native_conflicts: true,
		}
	}

	/// Restricts dispatch to events originating inside `scope`.
	pub fn scoped(mut self, scope: ScopeId) -> Self {
		self.scope = Some(scope);
		self
	}

	/// Controls the event-time reserved-native guard (default on).
	///
	/// The guard only fires on editable targets: a reserved combination is
	/// skipped there so the surface's native editing behavior handles it.
	pub fn prevent_native_conflicts(mut self, prevent: bool) -> Self {
		self.prevent_native_conflicts = prevent;
		self
	}

	/// The catalog this resolver walks.
	pub fn catalog(&self) -> &[CatalogEntry] {
		&self.catalog
	}

	/// Dispatches one key-down event against live capabilities.
	pub fn dispatch(&self, event: &KeyInput, ctx: &Availability<'_>) -> Dispatch {
		if let Some(scope) = self.scope
			&& !event.target.contains(scope)
		{
			return Dispatch::OutOfScope;
		}

		for entry in &self.catalog {
			for shortcut in &entry.shortcuts {
				if self.prevent_native_conflicts
					&& event.target.editable
					&& shortcut.is_reserved_native()
				{
					continue;
				}
				if !event.key_matches(shortcut) || event.modifiers != shortcut.modifiers {
					continue;
				}

				// First match wins; the event is consumed even when the
				// entry is unavailable right now.
				let prevent_default = shortcut.suppresses_default();
				let result = entry.available(ctx).then(|| entry.action.run(ctx.commands));
				trace!(id = %entry.id, invoked = result.is_some(), "shortcut matched");
				return Dispatch::Matched {
					id: entry.id.clone(),
					prevent_default,
					result,
				};
			}
		}

		Dispatch::NoMatch
	}

	/// Attaches this resolver to `surface`.
	///
	/// The listener resolves availability against the captured capability
	/// surface and gate; rebuild the binding when either changes.
	pub fn bind(self, surface: Arc<dyn KeySurface>, caps: Capabilities, gate: FeatureGate) -> Binding {
		let resolver = Arc::new(self);
		let listener: KeyListener = Arc::new(move |event| {
			let ctx = Availability { commands: &caps, gate: &gate };
			resolver.dispatch(event, &ctx)
		});
		let id = surface.attach(listener);
		Binding {
			surface,
			listener: Mutex::new(Some(id)),
		}
	}
}

impl std::fmt::Debug for ShortcutResolver {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ShortcutResolver")
			.field("entries", &self.catalog.len())
			.field("scope", &self.scope)
			.field("prevent_native_conflicts", &self.prevent_native_conflicts)
			.finish()
	}
}

/// Callback invoked by the surface for every key-down event.
pub type KeyListener = Arc<dyn Fn(&KeyInput) -> Dispatch + Send + Sync>;

/// Token identifying one attached listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Host contract for attaching key listeners to a listening surface.
pub trait KeySurface: Send + Sync {
	/// Attaches `listener` and returns a token identifying exactly it.
	fn attach(&self, listener: KeyListener) -> ListenerId;

	/// Detaches the listener previously returned as `id`.
	fn detach(&self, id: ListenerId);
}

/// A resolver attached to a surface.
///
/// Detaches exactly the listener it added, exactly once: explicit
/// [`detach`](Binding::detach) calls after the first are no-ops, and drop
/// detaches as a last resort. Surface re-renders cannot double-detach.
pub struct Binding {
	surface: Arc<dyn KeySurface>,
	listener: Mutex<Option<ListenerId>>,
}

impl Binding {
	/// Detaches the listener. Calling this twice is a no-op.
	pub fn detach(&self) {
		if let Some(id) = self.listener.lock().take() {
			self.surface.detach(id);
		}
	}

	/// True while the listener is still attached.
	pub fn is_attached(&self) -> bool {
		self.listener.lock().is_some()
	}
}

impl Drop for Binding {
	fn drop(&mut self) {
		self.detach();
	}
}

impl std::fmt::Debug for Binding {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Binding").field("attached", &self.is_attached()).finish()
	}
}
