//! Shared primitives for the vellum extension core.
//!
//! Provides the vocabulary the higher-level crates agree on:
//! - [`Modifiers`] and [`Shortcut`]: key combinations with collision
//!   signatures and the reserved native-editing predicate
//! - [`ScopeId`]: opaque tokens identifying listening subtrees
//! - [`BoxFutureStatic`] and friends: boxed-future aliases for asynchronous
//!   state queries

pub use future::{BoxFutureLocal, BoxFutureSend, BoxFutureStatic, poll_once};
pub use key::{Modifiers, Shortcut, ShortcutSignature};
pub use scope::ScopeId;

mod future;
mod key;
mod scope;
