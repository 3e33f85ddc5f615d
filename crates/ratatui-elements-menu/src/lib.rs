//! Hierarchical navigation menu for ratatui.
//!
//! The menu is registration-based: a [`menu::RootMenu`] controller owns a
//! registry of items and submenus keyed by string index, an ordered set of
//! open submenus, and the active selection. Descendants do not mutate any of
//! that directly; they register themselves and route every interaction
//! through the controller, which recomputes derived state and hands back
//! [`menu::MenuEvent`] values for the app to act on.
//!
//! [`view::MenuView`] is the ratatui-facing widget: it owns a controller,
//! registers a declarative entry tree against it, renders vertical,
//! collapsed, and horizontal layouts, and translates key events into
//! controller calls. The responsive overflow computation behind the
//! horizontal "more" group lives in [`overflow`] as a pure algorithm over a
//! pluggable measurement capability, so it is testable without a terminal.
pub mod active;
pub mod menu;
pub mod open_state;
pub mod overflow;
pub mod registry;
pub mod view;
