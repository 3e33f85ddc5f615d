//! Transient message stack.
//!
//! Messages appear at the top of the area, stacked downward in push order,
//! and expire after their duration worth of [`MessageStack::tick`] calls.
//! The stack never owns a timer; the app forwards its frame delta.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui_elements_core::icon;
use ratatui_elements_core::render;
use ratatui_elements_core::theme::Theme;
use slotmap::new_key_type;
use slotmap::SlotMap;
use std::time::Duration;

new_key_type! {
    pub struct MessageId;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Warning,
    #[default]
    Info,
    Error,
}

impl MessageKind {
    pub fn glyph(self) -> &'static str {
        match self {
            MessageKind::Success => icon::SUCCESS,
            MessageKind::Warning => icon::WARNING,
            MessageKind::Info => icon::INFO,
            MessageKind::Error => icon::ERROR,
        }
    }

    pub fn style(self, theme: &Theme) -> Style {
        match self {
            MessageKind::Success => theme.success,
            MessageKind::Warning => theme.warning,
            MessageKind::Info => theme.info,
            MessageKind::Error => theme.danger,
        }
    }
}

pub const DEFAULT_MESSAGE_DURATION: Duration = Duration::from_millis(3000);

#[derive(Clone, Debug)]
pub struct Message {
    pub kind: MessageKind,
    pub content: String,
    /// Zero means sticky: the message only goes away through
    /// [`MessageStack::close`].
    pub duration: Duration,
    pub closable: bool,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::default(),
            content: content.into(),
            duration: DEFAULT_MESSAGE_DURATION,
            closable: false,
        }
    }

    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn closable(mut self) -> Self {
        self.closable = true;
        self
    }
}

#[derive(Clone, Debug)]
struct Entry {
    message: Message,
    remaining: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct MessageStack {
    entries: SlotMap<MessageId, Entry>,
    order: Vec<MessageId>,
}

impl MessageStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) -> MessageId {
        let remaining = message.duration;
        let id = self.entries.insert(Entry { message, remaining });
        self.order.push(id);
        id
    }

    /// Removes a message. Silent no-op for ids that already expired.
    pub fn close(&mut self, id: MessageId) {
        if self.entries.remove(id).is_some() {
            self.order.retain(|i| *i != id);
        }
    }

    /// Advances every non-sticky message by `dt` and drops the expired ones.
    pub fn tick(&mut self, dt: Duration) {
        let mut expired = Vec::new();
        for (id, entry) in &mut self.entries {
            if entry.message.duration.is_zero() {
                continue;
            }
            entry.remaining = entry.remaining.saturating_sub(dt);
            if entry.remaining.is_zero() {
                expired.push(id);
            }
        }
        for id in expired {
            self.close(id);
        }
    }

    pub fn contains(&self, id: MessageId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        for (line, id) in self.order.iter().enumerate().take(area.height as usize) {
            let Some(entry) = self.entries.get(*id) else {
                continue;
            };
            let mut text = format!("{} {}", entry.message.kind.glyph(), entry.message.content);
            if entry.message.closable {
                text.push(' ');
                text.push_str(icon::CLOSE);
            }
            let width = render::display_width(&text).min(area.width);
            let x = area.x + (area.width - width) / 2;
            let y = area.y + line as u16;
            render::render_label(x, y, width, buf, &text, entry.message.kind.style(theme));
        }
    }
}
