//! Element-style widgets for ratatui.
//!
//! The heavyweight piece is the menu subsystem (re-exported from
//! `ratatui-elements-menu`): a hierarchical, registration-based navigation
//! component with open-state tracking, active-item resolution, and
//! responsive overflow in horizontal mode. Around it this crate carries the
//! lighter feedback components: transient [`message`]s, corner-anchored
//! [`notification`]s, a modal [`dialog`], and a [`backtop`] helper.
//!
//! All components follow the same contract: they are event-loop agnostic,
//! render into a `ratatui` buffer, and communicate side effects through
//! returned action/event values the app decides how to integrate
//! (navigation, timers, scrolling).
pub use ratatui_elements_core::config;
pub use ratatui_elements_core::icon;
pub use ratatui_elements_core::input;
pub use ratatui_elements_core::render;
pub use ratatui_elements_core::theme;

#[cfg(feature = "crossterm")]
pub use ratatui_elements_core::crossterm_input;

pub use ratatui_elements_menu::active;
pub use ratatui_elements_menu::menu;
pub use ratatui_elements_menu::open_state;
pub use ratatui_elements_menu::overflow;
pub use ratatui_elements_menu::registry;
pub use ratatui_elements_menu::view;

pub mod backtop;
pub mod dialog;
pub mod message;
pub mod notification;
