//! Catalog entry types and availability.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;
use vellum_extension::{Capabilities, CommandResult};
use vellum_primitives::Shortcut;

/// Grouping category for catalog entries, used by presentation surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandCategory {
	/// Inline formatting toggles.
	Format,
	/// Block-type conversions.
	Block,
	/// List operations.
	List,
	/// Link insert/remove.
	Link,
	/// Block-level inserts.
	Insert,
	/// Undo/redo.
	History,
	/// Viewport behavior.
	View,
}

/// The capability call a catalog entry performs when activated.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
	/// Capability key on the aggregated command surface.
	pub command: &'static str,
	/// Arguments forwarded to the command.
	pub args: Value,
}

impl Invocation {
	/// An invocation without arguments.
	pub fn bare(command: &'static str) -> Self {
		Self { command, args: Value::Null }
	}

	/// An invocation carrying arguments.
	pub fn with_args(command: &'static str, args: Value) -> Self {
		Self { command, args }
	}

	/// Runs the invocation against the live capability surface.
	pub fn run(&self, caps: &Capabilities) -> CommandResult {
		caps.invoke(self.command, &self.args)
	}
}

/// External feature gate consulted by entry availability.
///
/// Defaults to every feature enabled.
#[derive(Clone)]
pub struct FeatureGate(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl FeatureGate {
	/// Gate backed by an arbitrary predicate.
	pub fn new(gate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
		Self(Arc::new(gate))
	}

	/// Gate that enables only the listed features.
	pub fn allow_only<I, S>(features: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let allowed: Vec<String> = features.into_iter().map(Into::into).collect();
		Self::new(move |feature| allowed.iter().any(|f| f == feature))
	}

	/// Whether `feature` is enabled.
	pub fn enabled(&self, feature: &str) -> bool {
		(self.0)(feature)
	}
}

impl Default for FeatureGate {
	fn default() -> Self {
		Self(Arc::new(|_| true))
	}
}

impl std::fmt::Debug for FeatureGate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("FeatureGate(..)")
	}
}

/// Live context an entry's availability predicate runs against.
#[derive(Clone, Copy)]
pub struct Availability<'a> {
	/// Aggregated command surface of the active extensions.
	pub commands: &'a Capabilities,
	/// External feature gate.
	pub gate: &'a FeatureGate,
}

/// One command in the canonical catalog.
///
/// Entries are plain data, generated fresh from static configuration on
/// every catalog request; the catalog itself holds no mutable state.
/// Entries whose supporting capability is never present stay in the list
/// and fall out downstream at filter time.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
	/// Stable dotted id (e.g. `block.heading2`).
	pub id: String,
	/// Display label.
	pub label: String,
	/// Optional longer description.
	pub description: Option<String>,
	/// Grouping category.
	pub category: CommandCategory,
	/// Capability call performed on activation.
	pub action: Invocation,
	/// Default shortcuts; replaced or emptied by per-session config.
	pub shortcuts: SmallVec<[Shortcut; 2]>,
	/// Extra search keywords for the palette.
	pub keywords: &'static [&'static str],
	/// Logical feature name consulted against the [`FeatureGate`].
	pub feature: &'static str,
}

impl CatalogEntry {
	/// Creates an entry with the required fields and no extras.
	pub fn new(
		id: impl Into<String>,
		label: impl Into<String>,
		category: CommandCategory,
		feature: &'static str,
		action: Invocation,
	) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			description: None,
			category,
			action,
			shortcuts: SmallVec::new(),
			keywords: &[],
			feature,
		}
	}

	/// Returns a copy with a description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Returns a copy with `shortcut` appended to the default list.
	pub fn with_shortcut(mut self, shortcut: Shortcut) -> Self {
		self.shortcuts.push(shortcut);
		self
	}

	/// Returns a copy with search keywords.
	pub fn with_keywords(mut self, keywords: &'static [&'static str]) -> Self {
		self.keywords = keywords;
		self
	}

	/// The entry's availability predicate: the feature gate enables
	/// [`feature`](Self::feature) and the live surface exposes the command
	/// this entry calls.
	pub fn available(&self, ctx: &Availability<'_>) -> bool {
		ctx.gate.enabled(self.feature) && ctx.commands.has_command(self.action.command)
	}

	/// First shortcut, if any survive resolution.
	pub fn primary_shortcut(&self) -> Option<&Shortcut> {
		self.shortcuts.first()
	}
}
