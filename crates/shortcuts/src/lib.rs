//! Scoped keyboard shortcut dispatch over the resolved catalog.
//!
//! The resolver is a stateless dispatcher bound to one listening surface:
//! every key-down event is checked against the resolved catalog in order and
//! the first matching, non-conflicting command wins. Reserved native-editing
//! bindings are skipped on editable targets so the host surface's own
//! behavior fires instead.

pub use event::{EventTarget, KeyInput};
pub use resolver::{Binding, Dispatch, KeyListener, KeySurface, ListenerId, ShortcutResolver};

mod event;
mod resolver;
