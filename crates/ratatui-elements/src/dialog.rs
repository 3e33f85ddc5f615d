//! Modal dialog.
//!
//! Open/close state plus a centered render over whatever the app drew
//! underneath. Esc closes by default; the returned action tells the app a
//! close happened so it can move focus back.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Widget;
use ratatui_elements_core::icon;
use ratatui_elements_core::input::InputEvent;
use ratatui_elements_core::input::KeyCode;
use ratatui_elements_core::render;
use ratatui_elements_core::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Closed,
}

#[derive(Clone, Debug)]
pub struct Dialog {
    pub title: String,
    pub body: Vec<String>,
    /// Width of the dialog as a percentage of the render area.
    pub width_percent: u16,
    pub close_on_esc: bool,
    pub show_close: bool,
    open: bool,
}

impl Dialog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
            width_percent: 50,
            close_on_esc: true,
            show_close: true,
            open: false,
        }
    }

    pub fn with_body(mut self, lines: Vec<String>) -> Self {
        self.body = lines;
        self
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> DialogAction {
        if !self.open {
            return DialogAction::None;
        }
        if let InputEvent::Key(key) = event {
            if key.code == KeyCode::Esc && self.close_on_esc {
                self.open = false;
                return DialogAction::Closed;
            }
        }
        DialogAction::None
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.open || area.width < 4 || area.height < 3 {
            return;
        }
        let width = ((area.width as u32 * self.width_percent.min(100) as u32 / 100) as u16)
            .clamp(4, area.width);
        let height = (self.body.len() as u16 + 2).min(area.height);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let rect = Rect::new(x, y, width, height);

        Clear.render(rect, buf);
        let block = Block::default()
            .title(self.title.clone())
            .borders(Borders::ALL)
            .style(theme.text_primary)
            .border_style(theme.overlay);
        let inner = block.inner(rect);
        block.render(rect, buf);

        if self.show_close && rect.width >= 3 {
            render::render_label(
                rect.x + rect.width - 2,
                rect.y,
                1,
                buf,
                icon::CLOSE,
                theme.text_muted,
            );
        }

        for (i, line) in self.body.iter().enumerate().take(inner.height as usize) {
            render::render_label(
                inner.x,
                inner.y + i as u16,
                inner.width,
                buf,
                line,
                theme.text_primary,
            );
        }
    }
}
