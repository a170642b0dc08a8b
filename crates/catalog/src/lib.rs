//! Canonical command catalog and shortcut configuration.
//!
//! The catalog declares every possible editor command independently of which
//! extensions are present: a stable id, label, grouping category, the
//! capability call it performs, optional default shortcuts, and the data its
//! availability predicate runs on. [`generate_commands`] is a pure function
//! of static configuration; [`apply_shortcut_config`] layers per-session
//! overrides and deterministic conflict resolution on top.

pub use builder::{CatalogOptions, DEFAULT_HEADING_LEVELS, generate_commands};
pub use entry::{Availability, CatalogEntry, CommandCategory, FeatureGate, Invocation};
pub use shortcut_config::{BindingOverride, ShortcutConfig, apply_shortcut_config};

mod builder;
mod entry;
mod shortcut_config;
