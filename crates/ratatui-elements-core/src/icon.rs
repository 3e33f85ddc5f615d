//! Named glyphs shared by the element widgets.
//!
//! Terminal stand-ins for the icon font of a graphical toolkit: expand arrows
//! for submenus, the overflow ellipsis for a horizontal menu's "more" group,
//! kind marks for messages and notifications, and a couple of utility glyphs.

pub const ARROW_RIGHT: &str = "▸";
pub const ARROW_DOWN: &str = "▾";
pub const ARROW_UP: &str = "▴";
pub const MORE: &str = "…";
pub const SUCCESS: &str = "✔";
pub const WARNING: &str = "⚠";
pub const ERROR: &str = "✖";
pub const INFO: &str = "ℹ";
pub const CLOSE: &str = "✕";
pub const CARET_TOP: &str = "▲";

/// Looks up a glyph by its icon name, for callers that configure icons as
/// strings ("arrow-right", "more", "success", ...).
pub fn glyph(name: &str) -> Option<&'static str> {
    match name {
        "arrow-right" => Some(ARROW_RIGHT),
        "arrow-down" => Some(ARROW_DOWN),
        "arrow-up" => Some(ARROW_UP),
        "more" => Some(MORE),
        "success" => Some(SUCCESS),
        "warning" => Some(WARNING),
        "error" => Some(ERROR),
        "info" => Some(INFO),
        "close" => Some(CLOSE),
        "caret-top" => Some(CARET_TOP),
        _ => None,
    }
}
