//! Key combination types: modifiers, shortcuts, and collision signatures.

pub use modifiers::Modifiers;
pub use shortcut::{Shortcut, ShortcutSignature};

mod modifiers;
mod shortcut;

#[cfg(test)]
mod tests;
