//! Capability aggregation: the flat command and state-query surface.
//!
//! Commands are duck-typed at the capability level: presence of a key on the
//! aggregated surface implies the capability exists. Merging is best-effort,
//! not validated. Under the default [`MergePolicy::LastWins`] the later
//! extension silently wins a key collision, and every overwritten key is
//! recorded on [`Capabilities::shadowed`] for diagnostics.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::warn;
use vellum_primitives::BoxFutureStatic;

use crate::error::{CommandError, RegistryError};

/// Arguments passed to a command invocation.
pub type CommandArgs = Value;

/// Outcome of a command: whether the engine applied the change.
pub type CommandResult = Result<bool, CommandError>;

/// A capability-level callable contributed by an extension.
pub type CommandFn = Arc<dyn Fn(&CommandArgs) -> CommandResult + Send + Sync>;

/// Value produced by a state query (a boolean or richer context value).
pub type QueryResult = Result<Value, CommandError>;

/// An asynchronous probe of current editing context.
///
/// Queries sample engine state that may need a read transaction; callers
/// must tolerate resolution after the triggering interaction has passed.
pub type QueryFn = Arc<dyn Fn() -> BoxFutureStatic<QueryResult> + Send + Sync>;

/// Ordered set of commands contributed by a single extension.
#[derive(Default, Clone)]
pub struct CommandSet(IndexMap<String, CommandFn>);

impl CommandSet {
	/// An empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a command under `key`, replacing any previous one in this set.
	pub fn with(
		mut self,
		key: impl Into<String>,
		command: impl Fn(&CommandArgs) -> CommandResult + Send + Sync + 'static,
	) -> Self {
		self.0.insert(key.into(), Arc::new(command));
		self
	}

	/// Number of commands in the set.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// True when the set contributes nothing.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl IntoIterator for CommandSet {
	type Item = (String, CommandFn);
	type IntoIter = indexmap::map::IntoIter<String, CommandFn>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// Ordered set of state queries contributed by a single extension.
#[derive(Default, Clone)]
pub struct QuerySet(IndexMap<String, QueryFn>);

impl QuerySet {
	/// An empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a query under `key`, replacing any previous one in this set.
	pub fn with(
		mut self,
		key: impl Into<String>,
		query: impl Fn() -> BoxFutureStatic<QueryResult> + Send + Sync + 'static,
	) -> Self {
		self.0.insert(key.into(), Arc::new(query));
		self
	}

	/// Number of queries in the set.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// True when the set contributes nothing.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl IntoIterator for QuerySet {
	type Item = (String, QueryFn);
	type IntoIter = indexmap::map::IntoIter<String, QueryFn>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// Which capability surface a key lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityKind {
	/// The command surface.
	Command,
	/// The state-query surface.
	StateQuery,
}

/// A capability key overwritten during aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedKey {
	/// Surface the collision happened on.
	pub kind: CapabilityKind,
	/// The colliding key.
	pub key: String,
	/// Extension whose entry was overwritten.
	pub shadowed: String,
	/// Extension whose entry won.
	pub winner: String,
}

/// How the aggregator treats colliding capability keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
	/// Later extension silently wins; collisions are recorded on
	/// [`Capabilities::shadowed`] and logged.
	#[default]
	LastWins,
	/// Collisions abort aggregation with a [`RegistryError`].
	Strict,
}

#[derive(Clone)]
struct CommandSlot {
	provider: String,
	command: CommandFn,
}

#[derive(Clone)]
struct QuerySlot {
	provider: String,
	query: QueryFn,
}

/// The merged, flat capability surface of all active extensions.
///
/// Key order follows extension order, then declaration order within each
/// extension, so iteration is deterministic across runs.
#[derive(Default, Clone)]
pub struct Capabilities {
	commands: IndexMap<String, CommandSlot>,
	queries: IndexMap<String, QuerySlot>,
	/// Keys overwritten during the merge, in merge order.
	pub shadowed: Vec<ShadowedKey>,
}

impl Capabilities {
	/// True if some active extension exposes `command`.
	pub fn has_command(&self, command: &str) -> bool {
		self.commands.contains_key(command)
	}

	/// True if some active extension exposes the state query `key`.
	pub fn has_query(&self, key: &str) -> bool {
		self.queries.contains_key(key)
	}

	/// Invokes `command` with `args`.
	///
	/// Unknown keys are a structured error, not a panic: availability
	/// filtering normally prevents this call, and a bypass degrades to a
	/// guarded no-op at the call site.
	pub fn invoke(&self, command: &str, args: &CommandArgs) -> CommandResult {
		match self.commands.get(command) {
			Some(slot) => (slot.command)(args),
			None => Err(CommandError::Unknown(command.to_string())),
		}
	}

	/// Starts the state query under `key`, if present.
	pub fn query(&self, key: &str) -> Option<BoxFutureStatic<QueryResult>> {
		self.queries.get(key).map(|slot| (slot.query)())
	}

	/// Extension that provided `command`, if present.
	pub fn command_provider(&self, command: &str) -> Option<&str> {
		self.commands.get(command).map(|slot| slot.provider.as_str())
	}

	/// Keys of the command surface, in merge order.
	pub fn command_keys(&self) -> impl Iterator<Item = &str> {
		self.commands.keys().map(String::as_str)
	}

	/// Keys of the state-query surface, in merge order.
	pub fn query_keys(&self) -> impl Iterator<Item = &str> {
		self.queries.keys().map(String::as_str)
	}

	/// Inserts a command directly, outside any session merge.
	///
	/// Hosts use this to graft host-level commands onto an aggregated
	/// surface; collisions behave like [`MergePolicy::LastWins`].
	pub fn insert_command(
		&mut self,
		provider: &str,
		key: impl Into<String>,
		command: impl Fn(&CommandArgs) -> CommandResult + Send + Sync + 'static,
	) {
		self.insert_command_fn(provider, key.into(), Arc::new(command));
	}

	/// Inserts a state query directly, outside any session merge.
	pub fn insert_query(
		&mut self,
		provider: &str,
		key: impl Into<String>,
		query: impl Fn() -> BoxFutureStatic<QueryResult> + Send + Sync + 'static,
	) {
		self.insert_query_fn(provider, key.into(), Arc::new(query));
	}

	fn insert_command_fn(&mut self, provider: &str, key: String, command: CommandFn) {
		let slot = CommandSlot { provider: provider.to_string(), command };
		if let Some(previous) = self.commands.insert(key.clone(), slot) {
			warn!(
				key = %key,
				shadowed = %previous.provider,
				winner = %provider,
				"command key shadowed during aggregation"
			);
			self.shadowed.push(ShadowedKey {
				kind: CapabilityKind::Command,
				key,
				shadowed: previous.provider,
				winner: provider.to_string(),
			});
		}
	}

	fn insert_query_fn(&mut self, provider: &str, key: String, query: QueryFn) {
		let slot = QuerySlot { provider: provider.to_string(), query };
		if let Some(previous) = self.queries.insert(key.clone(), slot) {
			warn!(
				key = %key,
				shadowed = %previous.provider,
				winner = %provider,
				"state query key shadowed during aggregation"
			);
			self.shadowed.push(ShadowedKey {
				kind: CapabilityKind::StateQuery,
				key,
				shadowed: previous.provider,
				winner: provider.to_string(),
			});
		}
	}

	pub(crate) fn add_command(
		&mut self,
		provider: &str,
		key: String,
		command: CommandFn,
		policy: MergePolicy,
	) -> Result<(), RegistryError> {
		if policy == MergePolicy::Strict
			&& let Some(existing) = self.commands.get(&key)
		{
			return Err(RegistryError::DuplicateCommand {
				key,
				first: existing.provider.clone(),
				second: provider.to_string(),
			});
		}
		self.insert_command_fn(provider, key, command);
		Ok(())
	}

	pub(crate) fn add_query(
		&mut self,
		provider: &str,
		key: String,
		query: QueryFn,
		policy: MergePolicy,
	) -> Result<(), RegistryError> {
		if policy == MergePolicy::Strict
			&& let Some(existing) = self.queries.get(&key)
		{
			return Err(RegistryError::DuplicateQuery {
				key,
				first: existing.provider.clone(),
				second: provider.to_string(),
			});
		}
		self.insert_query_fn(provider, key, query);
		Ok(())
	}
}

impl std::fmt::Debug for Capabilities {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Capabilities")
			.field("commands", &self.commands.keys().collect::<Vec<_>>())
			.field("queries", &self.queries.keys().collect::<Vec<_>>())
			.field("shadowed", &self.shadowed)
			.finish()
	}
}

#[cfg(test)]
mod tests;
