use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use vellum_primitives::poll_once;

use super::{Capabilities, CapabilityKind, CommandFn, MergePolicy, QueryFn};
use crate::error::{CommandError, RegistryError};

fn noop_command() -> CommandFn {
	Arc::new(|_args| Ok(true))
}

fn ready_query(value: Value) -> QueryFn {
	Arc::new(move || {
		let value = value.clone();
		Box::pin(async move { Ok(value) })
	})
}

#[test]
fn later_provider_wins_command_collisions() {
	let mut caps = Capabilities::default();
	let first: CommandFn = Arc::new(|_| Ok(false));
	let second: CommandFn = Arc::new(|_| Ok(true));
	caps.add_command("base", "toggle_bold".into(), first, MergePolicy::LastWins)
		.unwrap();
	caps.add_command("override", "toggle_bold".into(), second, MergePolicy::LastWins)
		.unwrap();

	assert_eq!(caps.invoke("toggle_bold", &Value::Null).unwrap(), true);
	assert_eq!(caps.command_provider("toggle_bold"), Some("override"));
}

#[test]
fn collisions_are_recorded_as_shadowed_keys() {
	let mut caps = Capabilities::default();
	caps.add_command("base", "toggle_bold".into(), noop_command(), MergePolicy::LastWins)
		.unwrap();
	caps.add_command("override", "toggle_bold".into(), noop_command(), MergePolicy::LastWins)
		.unwrap();

	assert_eq!(caps.shadowed.len(), 1);
	let shadow = &caps.shadowed[0];
	assert_eq!(shadow.kind, CapabilityKind::Command);
	assert_eq!(shadow.key, "toggle_bold");
	assert_eq!(shadow.shadowed, "base");
	assert_eq!(shadow.winner, "override");
}

#[test]
fn strict_policy_rejects_command_collisions() {
	let mut caps = Capabilities::default();
	caps.add_command("base", "toggle_bold".into(), noop_command(), MergePolicy::Strict)
		.unwrap();
	let err = caps
		.add_command("override", "toggle_bold".into(), noop_command(), MergePolicy::Strict)
		.unwrap_err();

	match err {
		RegistryError::DuplicateCommand { key, first, second } => {
			assert_eq!(key, "toggle_bold");
			assert_eq!(first, "base");
			assert_eq!(second, "override");
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn invoking_an_unknown_command_is_a_structured_error() {
	let caps = Capabilities::default();
	match caps.invoke("toggle_bold", &Value::Null) {
		Err(CommandError::Unknown(key)) => assert_eq!(key, "toggle_bold"),
		other => panic!("unexpected outcome: {other:?}"),
	}
}

#[test]
fn command_args_reach_the_callable() {
	let mut caps = Capabilities::default();
	let command: CommandFn = Arc::new(|args| {
		let level = args.get("level").and_then(Value::as_u64);
		Ok(level == Some(2))
	});
	caps.add_command("headings", "toggle_heading".into(), command, MergePolicy::LastWins)
		.unwrap();

	assert_eq!(caps.invoke("toggle_heading", &json!({ "level": 2 })).unwrap(), true);
	assert_eq!(caps.invoke("toggle_heading", &json!({ "level": 3 })).unwrap(), false);
}

#[test]
fn queries_resolve_asynchronously() {
	let mut caps = Capabilities::default();
	caps.add_query("format", "is_bold".into(), ready_query(json!(true)), MergePolicy::LastWins)
		.unwrap();

	let fut = caps.query("is_bold").expect("query registered");
	let value = poll_once(fut).expect("ready future").unwrap();
	assert_eq!(value, json!(true));

	assert!(caps.query("is_italic").is_none());
}

#[test]
fn key_order_follows_merge_order() {
	let mut caps = Capabilities::default();
	caps.add_command("a", "undo".into(), noop_command(), MergePolicy::LastWins)
		.unwrap();
	caps.add_command("a", "redo".into(), noop_command(), MergePolicy::LastWins)
		.unwrap();
	caps.add_command("b", "toggle_bold".into(), noop_command(), MergePolicy::LastWins)
		.unwrap();

	let keys: Vec<&str> = caps.command_keys().collect();
	assert_eq!(keys, vec!["undo", "redo", "toggle_bold"]);
}
