//! Back-to-top helper.
//!
//! Tracks a scroll offset the app feeds in and shows a fixed button once the
//! offset passes the visibility threshold. Activation emits an action; the
//! app owns the actual scrolling and reports the new offset back through
//! [`Backtop::set_scroll`].

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui_elements_core::icon;
use ratatui_elements_core::render;
use ratatui_elements_core::theme::Theme;

pub const DEFAULT_VISIBILITY_HEIGHT: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BacktopAction {
    None,
    ScrollToTop,
}

#[derive(Clone, Copy, Debug)]
pub struct Backtop {
    /// Scroll offset at which the button becomes visible.
    pub visibility_height: u32,
    /// Offset from the right edge of the render area.
    pub right: u16,
    /// Offset from the bottom edge of the render area.
    pub bottom: u16,
    scroll: u32,
}

impl Default for Backtop {
    fn default() -> Self {
        Self {
            visibility_height: DEFAULT_VISIBILITY_HEIGHT,
            right: 4,
            bottom: 2,
            scroll: 0,
        }
    }
}

impl Backtop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the tracked offset. Returns `true` when visibility flipped,
    /// as a redraw hint.
    pub fn set_scroll(&mut self, y: u32) -> bool {
        let before = self.visible();
        self.scroll = y;
        before != self.visible()
    }

    pub fn scroll(&self) -> u32 {
        self.scroll
    }

    pub fn visible(&self) -> bool {
        self.scroll >= self.visibility_height
    }

    /// Invisible buttons ignore activation.
    pub fn activate(&self) -> BacktopAction {
        if self.visible() {
            BacktopAction::ScrollToTop
        } else {
            BacktopAction::None
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.visible() || area.width == 0 || area.height == 0 {
            return;
        }
        let x = (area.x + area.width)
            .saturating_sub(self.right + 1)
            .max(area.x);
        let y = (area.y + area.height)
            .saturating_sub(self.bottom + 1)
            .max(area.y);
        render::render_label(x, y, 1, buf, icon::CARET_TOP, theme.accent);
    }
}
