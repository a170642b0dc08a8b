//! Presentation views over the resolved catalog.
//!
//! Two surfaces consume the catalog downstream of availability filtering and
//! shortcut resolution: the searchable command palette and the restricted
//! quick-insert ("slash command") menu. Both emit items in catalog order,
//! never in configuration order, so presentation is deterministic.

pub use palette::{PaletteItem, PaletteOptions, palette_items, shortcut_label};
pub use quick_insert::{
	QuickInsertItem, QuickInsertVisibility, VisibilitySelection, quick_insert_items,
};

mod palette;
mod quick_insert;
