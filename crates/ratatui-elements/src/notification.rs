//! Corner-anchored notification stack.
//!
//! Same id/tick/close contract as [`crate::message`], with a title+body
//! shape and a configurable corner. Top corners stack downward, bottom
//! corners upward, newest furthest from the anchor edge.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui_elements_core::icon;
use ratatui_elements_core::render;
use ratatui_elements_core::theme::Theme;
use slotmap::new_key_type;
use slotmap::SlotMap;
use std::time::Duration;

use crate::message::MessageKind;

new_key_type! {
    pub struct NotificationId;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(4500);

#[derive(Clone, Debug)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub kind: Option<MessageKind>,
    /// Zero means sticky.
    pub duration: Duration,
    pub closable: bool,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind: None,
            duration: DEFAULT_NOTIFICATION_DURATION,
            closable: true,
        }
    }

    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

#[derive(Clone, Debug)]
struct Entry {
    notification: Notification,
    remaining: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationStack {
    entries: SlotMap<NotificationId, Entry>,
    order: Vec<NotificationId>,
    pub position: NotificationPosition,
}

impl NotificationStack {
    pub fn new(position: NotificationPosition) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let remaining = notification.duration;
        let id = self.entries.insert(Entry {
            notification,
            remaining,
        });
        self.order.push(id);
        id
    }

    /// Removes a notification. Silent no-op for ids that already expired.
    pub fn close(&mut self, id: NotificationId) {
        if self.entries.remove(id).is_some() {
            self.order.retain(|i| *i != id);
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        let mut expired = Vec::new();
        for (id, entry) in &mut self.entries {
            if entry.notification.duration.is_zero() {
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

    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = (area.width / 3).clamp(16.min(area.width), area.width);
        let left = matches!(
            self.position,
            NotificationPosition::TopLeft | NotificationPosition::BottomLeft
        );
        let top = matches!(
            self.position,
            NotificationPosition::TopLeft | NotificationPosition::TopRight
        );
        let x = if left {
            area.x
        } else {
            area.x + area.width - width
        };

        // two lines per notification plus a separating blank
        for (slot, id) in self.order.iter().enumerate() {
            let Some(entry) = self.entries.get(*id) else {
                continue;
            };
            let offset = (slot as u16).saturating_mul(3);
            if offset + 2 > area.height {
                break;
            }
            let y = if top {
                area.y + offset
            } else {
                area.y + area.height - offset - 2
            };

            let mut title = match entry.notification.kind {
                Some(kind) => format!("{} {}", kind.glyph(), entry.notification.title),
                None => entry.notification.title.clone(),
            };
            if entry.notification.closable {
                title.push(' ');
                title.push_str(icon::CLOSE);
            }
            let title_style = entry
                .notification
                .kind
                .map(|k| k.style(theme))
                .unwrap_or(theme.text_primary);
            render::render_label(x, y, width, buf, &title, title_style);
            render::render_label(x, y + 1, width, buf, &entry.notification.body, theme.text_muted);
        }
    }
}
