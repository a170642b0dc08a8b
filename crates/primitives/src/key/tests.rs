use pretty_assertions::assert_eq;

use super::{Modifiers, Shortcut};

#[test]
fn signatures_are_case_insensitive_on_the_key() {
	let lower = Shortcut::new("m", Modifiers::CTRL);
	let upper = Shortcut::new("M", Modifiers::CTRL);
	assert_eq!(lower.signature(), upper.signature());
}

#[test]
fn signatures_trim_surrounding_whitespace() {
	let padded = Shortcut::new(" b ", Modifiers::META);
	let plain = Shortcut::new("b", Modifiers::META);
	assert_eq!(padded.signature(), plain.signature());
}

#[test]
fn signatures_separate_distinct_modifier_sets() {
	let ctrl = Shortcut::new("k", Modifiers::CTRL);
	let ctrl_shift = Shortcut::new("k", Modifiers::CTRL.shift());
	assert_ne!(ctrl.signature(), ctrl_shift.signature());
}

#[test]
fn reserved_native_requires_ctrl_or_meta_without_alt() {
	assert!(Shortcut::new("b", Modifiers::CTRL).is_reserved_native());
	assert!(Shortcut::new("i", Modifiers::META).is_reserved_native());
	assert!(Shortcut::new("u", Modifiers::CTRL.shift()).is_reserved_native());
	assert!(Shortcut::new("K", Modifiers::META).is_reserved_native());

	assert!(!Shortcut::new("b", Modifiers::CTRL.alt()).is_reserved_native());
	assert!(!Shortcut::new("b", Modifiers::NONE).is_reserved_native());
	assert!(!Shortcut::new("z", Modifiers::CTRL).is_reserved_native());
}

#[test]
fn prevent_default_defaults_to_true() {
	assert!(Shortcut::new("b", Modifiers::CTRL).suppresses_default());
	assert!(!Shortcut::new("b", Modifiers::CTRL).prevent_default(false).suppresses_default());
}

#[test]
fn blank_keys_are_detected_after_trimming() {
	assert!(Shortcut::new("   ", Modifiers::CTRL).is_blank());
	assert!(!Shortcut::new("a", Modifiers::NONE).is_blank());
}

#[test]
fn shortcuts_deserialize_from_flat_config_objects() {
	let shortcut: Shortcut = serde_json::from_value(serde_json::json!({
		"key": "m",
		"ctrl": true,
		"shift": true,
	}))
	.unwrap();
	assert_eq!(shortcut.key, "m");
	assert_eq!(shortcut.modifiers, Modifiers::CTRL.shift());
	assert_eq!(shortcut.prevent_default, None);
}

#[test]
fn modifier_bits_distinguish_every_flag() {
	let all = [Modifiers::CTRL, Modifiers::META, Modifiers::SHIFT, Modifiers::ALT];
	for (i, a) in all.iter().enumerate() {
		for b in &all[i + 1..] {
			assert_ne!(a.bits(), b.bits());
		}
	}
	assert_eq!(Modifiers::NONE.bits(), 0);
}
