//! Key modifier types (Ctrl, Meta, Shift, Alt).

use serde::{Deserialize, Serialize};

/// Key modifiers (Ctrl, Meta, Shift, Alt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	#[serde(default)]
	pub ctrl: bool,
	/// Whether Meta (Cmd on macOS, Win elsewhere) is held.
	#[serde(default)]
	pub meta: bool,
	/// Whether Shift is held.
	#[serde(default)]
	pub shift: bool,
	/// Whether Alt is held.
	#[serde(default)]
	pub alt: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		meta: false,
		shift: false,
		alt: false,
	};

	/// Only Ctrl pressed.
	pub const CTRL: Self = Self { ctrl: true, ..Self::NONE };

	/// Only Meta pressed.
	pub const META: Self = Self { meta: true, ..Self::NONE };

	/// Only Shift pressed.
	pub const SHIFT: Self = Self { shift: true, ..Self::NONE };

	/// Only Alt pressed.
	pub const ALT: Self = Self { alt: true, ..Self::NONE };

	/// Returns a copy with Ctrl added.
	pub fn ctrl(self) -> Self {
		Self { ctrl: true, ..self }
	}

	/// Returns a copy with Meta added.
	pub fn meta(self) -> Self {
		Self { meta: true, ..self }
	}

	/// Returns a copy with Shift added.
	pub fn shift(self) -> Self {
		Self { shift: true, ..self }
	}

	/// Returns a copy with Alt added.
	pub fn alt(self) -> Self {
		Self { alt: true, ..self }
	}

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.meta && !self.shift && !self.alt
	}

	/// Packs the four flags into a bitset for signature comparison.
	pub fn bits(self) -> u8 {
		(self.ctrl as u8) | (self.meta as u8) << 1 | (self.shift as u8) << 2 | (self.alt as u8) << 3
	}
}
