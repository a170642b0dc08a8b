//! Capability contract, extension lifecycle, and capability aggregation.
//!
//! Extensions are self-contained units of editing capability. This crate
//! defines the shape every extension satisfies ([`Extension`]), the opaque
//! [`Host`] contract they register against, and the aggregation that merges
//! their command and state-query surfaces into one flat [`Capabilities`]
//! facade.
//!
//! Data flows one direction: contract → instances → [`ExtensionSession`] →
//! [`Capabilities`], which the catalog and resolver crates consume.

pub use capabilities::{
	Capabilities, CapabilityKind, CommandArgs, CommandFn, CommandResult, CommandSet, MergePolicy,
	QueryFn, QueryResult, QuerySet, ShadowedKey,
};
pub use config::shallow_merge;
pub use contract::{Disposer, Extension, ExtensionCategory, UiFragment, UiSlot};
pub use error::{CommandError, RegistryError};
pub use host::{Host, HostError};
pub use session::ExtensionSession;

mod capabilities;
mod config;
mod contract;
mod error;
mod host;
mod session;
