//! Per-session extension ownership and lifecycle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;
use tracing::debug;

use crate::capabilities::{Capabilities, MergePolicy};
use crate::contract::{Disposer, Extension, UiFragment};
use crate::error::RegistryError;
use crate::host::Host;

/// Owns one editor session's ordered extension instances.
///
/// Order is the only conflict-resolution input: later extensions win
/// capability key collisions and register after earlier ones. Instances are
/// constructed per session by the caller; nothing here is shared module
/// state.
pub struct ExtensionSession {
	extensions: Vec<Box<dyn Extension>>,
	policy: MergePolicy,
	live: Arc<AtomicBool>,
}

impl ExtensionSession {
	/// Takes ownership of an ordered extension list.
	pub fn new(extensions: Vec<Box<dyn Extension>>) -> Self {
		Self {
			extensions,
			policy: MergePolicy::default(),
			live: Arc::new(AtomicBool::new(false)),
		}
	}

	/// Replaces the aggregation policy (default: last-wins with diagnostics).
	pub fn with_policy(mut self, policy: MergePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Number of extensions in the session.
	pub fn len(&self) -> usize {
		self.extensions.len()
	}

	/// True when the session holds no extensions.
	pub fn is_empty(&self) -> bool {
		self.extensions.is_empty()
	}

	/// Ordered access for hosts that render per-extension UI.
	pub fn extensions(&self) -> impl Iterator<Item = &dyn Extension> {
		self.extensions.iter().map(|extension| extension.as_ref())
	}

	/// Applies a configuration patch to the named extension.
	///
	/// Unknown names are ignored (configuration errors are never fatal);
	/// returns whether the extension was found.
	pub fn configure(&mut self, name: &str, patch: Value) -> bool {
		match self.extensions.iter_mut().find(|ext| ext.name() == name) {
			Some(ext) => {
				ext.configure(patch);
				true
			}
			None => {
				debug!(extension = name, "configure target not present in session");
				false
			}
		}
	}

	/// Registers every extension against `host`, in order.
	///
	/// At most one live registration per session: a second call before the
	/// returned disposer runs is [`RegistryError::AlreadyRegistered`]. The
	/// disposer tears extensions down in reverse registration order. If an
	/// extension fails to register, the already-registered prefix is
	/// disposed before the error returns.
	pub fn register_all(&mut self, host: &Arc<dyn Host>) -> Result<Disposer, RegistryError> {
		if self.live.load(Ordering::Acquire) {
			return Err(RegistryError::AlreadyRegistered);
		}

		let mut disposers: Vec<Disposer> = Vec::with_capacity(self.extensions.len());
		for extension in &mut self.extensions {
			match extension.register(host) {
				Ok(disposer) => disposers.push(disposer),
				Err(err) => {
					for mut disposer in disposers.into_iter().rev() {
						disposer.dispose();
					}
					return Err(err);
				}
			}
		}

		self.live.store(true, Ordering::Release);
		let live = Arc::clone(&self.live);
		Ok(Disposer::new(move || {
			for mut disposer in disposers.into_iter().rev() {
				disposer.dispose();
			}
			live.store(false, Ordering::Release);
		}))
	}

	/// Merges every extension's command and state-query surface, in order.
	///
	/// Extensions without contributions participate as no-ops. Under
	/// [`MergePolicy::Strict`] a key collision aborts with an error;
	/// otherwise the later extension wins and the collision is recorded.
	pub fn capabilities(&self, host: &Arc<dyn Host>) -> Result<Capabilities, RegistryError> {
		let mut caps = Capabilities::default();
		for extension in &self.extensions {
			let name = extension.name();
			for (key, command) in extension.commands(host) {
				caps.add_command(name, key, command, self.policy)?;
			}
			for (key, query) in extension.state_queries(host) {
				caps.add_query(name, key, query, self.policy)?;
			}
		}
		Ok(caps)
	}

	/// All UI fragments, in extension order.
	pub fn ui_fragments(&self) -> Vec<UiFragment> {
		self.extensions.iter().flat_map(|ext| ext.ui_fragments()).collect()
	}
}

impl std::fmt::Debug for ExtensionSession {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ExtensionSession")
			.field("extensions", &self.extensions.iter().map(|e| e.name()).collect::<Vec<_>>())
			.field("policy", &self.policy)
			.field("live", &self.live.load(Ordering::Relaxed))
			.finish()
	}
}
