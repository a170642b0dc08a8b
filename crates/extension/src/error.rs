//! Error taxonomy for registration and command execution.

use thiserror::Error;

use crate::host::HostError;

/// Errors raised while registering extensions or aggregating capabilities.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// A session's extensions were registered again before disposal.
	#[error("extensions are already registered; dispose the previous registration first")]
	AlreadyRegistered,
	/// Two extensions declared the same command key under [`MergePolicy::Strict`].
	///
	/// [`MergePolicy::Strict`]: crate::MergePolicy::Strict
	#[error("command `{key}` declared by both `{first}` and `{second}`")]
	DuplicateCommand {
		/// The colliding capability key.
		key: String,
		/// Extension that declared the key first.
		first: String,
		/// Extension that declared it again.
		second: String,
	},
	/// Two extensions declared the same state query under [`MergePolicy::Strict`].
	///
	/// [`MergePolicy::Strict`]: crate::MergePolicy::Strict
	#[error("state query `{key}` declared by both `{first}` and `{second}`")]
	DuplicateQuery {
		/// The colliding capability key.
		key: String,
		/// Extension that declared the key first.
		first: String,
		/// Extension that declared it again.
		second: String,
	},
	/// Registration side effects failed inside the host.
	#[error(transparent)]
	Host(#[from] HostError),
}

/// Errors raised by command execution.
#[derive(Debug, Error)]
pub enum CommandError {
	/// No active extension exposes the named command.
	#[error("unknown command `{0}`")]
	Unknown(String),
	/// The command rejected its arguments.
	#[error("command `{command}` rejected arguments: {reason}")]
	InvalidArgs {
		/// Capability key of the rejecting command.
		command: String,
		/// What the command objected to.
		reason: String,
	},
	/// The underlying engine transaction failed.
	#[error(transparent)]
	Host(#[from] HostError),
	/// Extension-specific failure.
	#[error("{0}")]
	Failed(String),
}
