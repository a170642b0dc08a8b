//! Host engine contract.
//!
//! The rich-text engine is an external collaborator: vellum never touches
//! its data model, only orchestrates who may act on it and how actions are
//! triggered. Extensions receive the host as an opaque handle exposing a
//! synchronized update/read pair plus the root scope shortcuts listen under.

use std::any::Any;

use serde_json::Value;
use thiserror::Error;
use vellum_primitives::ScopeId;

/// Error surfaced by the host engine's update/read contract.
#[derive(Debug, Error)]
pub enum HostError {
	/// The engine rejected or failed a write transaction.
	#[error("engine update failed: {0}")]
	Update(String),
	/// The engine could not service a read query.
	#[error("engine read failed: {0}")]
	Read(String),
	/// The host surface is gone (unmounted while a handle was still live).
	#[error("host detached")]
	Detached,
}

/// Opaque handle to the rich-text engine.
///
/// Engine state stays untyped (`dyn Any`): the contract is update/read
/// synchronization and scoping, not the data model. Mutation of engine
/// state happens only inside [`Host::update`]; concurrent callers are
/// serialized by the engine, not by this core.
pub trait Host: Send + Sync {
	/// Runs `mutator` inside the engine's write transaction.
	fn update(&self, mutator: &mut dyn FnMut(&mut dyn Any)) -> Result<(), HostError>;

	/// Runs `query` against a read snapshot of engine state.
	fn read(&self, query: &mut dyn FnMut(&dyn Any) -> Value) -> Result<Value, HostError>;

	/// Root scope for shortcut listening on this host's surface.
	fn scope(&self) -> ScopeId;
}
