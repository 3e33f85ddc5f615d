//! `ratatui-elements-core` provides the shared primitives behind the element widgets.
//!
//! This crate is intentionally small: theming, backend-agnostic input types, a global
//! configuration chain, icon glyphs, and width-aware label rendering. The actual
//! components (menu, message, notification, dialog, backtop) live in the other crates
//! of the workspace and build on these pieces.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime: all components run on the main thread.
//! - Side effects are app-controlled: components emit action/event values and the
//!   caller decides how to integrate them (navigation, clipboard, timers).
//!
//! Most users should depend on the facade crate `ratatui-elements`. Use this crate
//! directly if you only need the primitives.
pub mod config;
pub mod icon;
pub mod input;
pub mod render;
pub mod theme;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;
