use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui_elements_core::icon;
use ratatui_elements_core::input::key_char;
use ratatui_elements_core::input::key_event_matches;
use ratatui_elements_core::input::InputEvent;
use ratatui_elements_core::input::KeyCode;
use ratatui_elements_core::input::KeyEvent;
use ratatui_elements_core::render;
use ratatui_elements_core::theme::Theme;

use crate::menu::MenuEvent;
use crate::menu::MenuMode;
use crate::menu::MenuOptions;
use crate::menu::RootMenu;
use crate::overflow;
use crate::overflow::MeasureChildren;
use crate::overflow::OverflowPlan;
use crate::registry::ItemRecord;
use crate::registry::SubmenuRecord;

/// Index of the synthetic submenu that holds overflowed children in
/// horizontal mode.
pub const MORE_INDEX: &str = "menu-more";

#[derive(Clone, Debug)]
pub enum MenuEntry {
    Item(ItemDef),
    Submenu(SubmenuDef),
}

#[derive(Clone, Debug)]
pub struct ItemDef {
    pub index: String,
    pub label: String,
    pub route: Option<String>,
    pub disabled: bool,
}

impl ItemDef {
    pub fn new(index: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            label: label.into(),
            route: None,
            disabled: false,
        }
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Clone, Debug)]
pub struct SubmenuDef {
    pub index: String,
    pub label: String,
    pub children: Vec<MenuEntry>,
}

impl SubmenuDef {
    pub fn new(
        index: impl Into<String>,
        label: impl Into<String>,
        children: Vec<MenuEntry>,
    ) -> Self {
        Self {
            index: index.into(),
            label: label.into(),
            children,
        }
    }
}

/// Key bindings for menu navigation.
#[derive(Clone, Debug)]
pub struct MenuBindings {
    pub up: Vec<KeyEvent>,
    pub down: Vec<KeyEvent>,
    pub activate: Vec<KeyEvent>,
    /// Close the submenu at the cursor, or ascend to the parent and close it.
    pub ascend: Vec<KeyEvent>,
    /// Open the submenu at the cursor.
    pub descend: Vec<KeyEvent>,
    /// Dismiss every fly-out panel (popup modes only).
    pub dismiss: Vec<KeyEvent>,
}

impl Default for MenuBindings {
    fn default() -> Self {
        Self {
            up: vec![KeyEvent::new(KeyCode::Up), key_char('k')],
            down: vec![KeyEvent::new(KeyCode::Down), key_char('j')],
            activate: vec![KeyEvent::new(KeyCode::Enter)],
            ascend: vec![KeyEvent::new(KeyCode::Left), key_char('h')],
            descend: vec![KeyEvent::new(KeyCode::Right), key_char('l')],
            dismiss: vec![KeyEvent::new(KeyCode::Esc)],
        }
    }
}

impl MenuBindings {
    pub fn is_up(&self, key: &KeyEvent) -> bool {
        self.up.iter().any(|p| key_event_matches(p, key))
    }

    pub fn is_down(&self, key: &KeyEvent) -> bool {
        self.down.iter().any(|p| key_event_matches(p, key))
    }

    pub fn is_activate(&self, key: &KeyEvent) -> bool {
        self.activate.iter().any(|p| key_event_matches(p, key))
    }

    pub fn is_ascend(&self, key: &KeyEvent) -> bool {
        self.ascend.iter().any(|p| key_event_matches(p, key))
    }

    pub fn is_descend(&self, key: &KeyEvent) -> bool {
        self.descend.iter().any(|p| key_event_matches(p, key))
    }

    pub fn is_dismiss(&self, key: &KeyEvent) -> bool {
        self.dismiss.iter().any(|p| key_event_matches(p, key))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuViewAction {
    None,
    Redraw,
    Event(MenuEvent),
}

#[derive(Clone, Debug)]
pub struct MenuViewOptions {
    /// Columns of indentation per nesting level in vertical layouts.
    pub indent: u16,
    /// Width of the icon strip in collapsed mode.
    pub collapse_width: u16,
    /// Width reserved for the "more" cell when planning horizontal overflow.
    pub more_width: u16,
    /// Horizontal padding inside each bar cell.
    pub cell_padding: u16,
    pub style: Style,
    pub cursor_style: Style,
    pub active_style: Style,
}

impl Default for MenuViewOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            collapse_width: 4,
            more_width: 8,
            cell_padding: 1,
            style: Style::default(),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            active_style: Style::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowKind {
    Item,
    Submenu,
}

/// One navigable line of the current layout: bar cells and panel lines in
/// horizontal mode, indented lines in vertical mode.
#[derive(Clone, Debug)]
struct Row {
    index: String,
    label: String,
    depth: u16,
    kind: RowKind,
    open: bool,
    disabled: bool,
}

/// Ratatui-facing menu widget.
///
/// Owns a [`RootMenu`] controller and a declarative entry tree. Entries are
/// registered with the controller on construction and re-registered on
/// [`set_entries`](MenuView::set_entries), which is how mount/unmount reaches
/// the registry. Key events turn into controller calls; controller events
/// come back through [`MenuViewAction::Event`].
pub struct MenuView {
    pub bindings: MenuBindings,
    options: MenuViewOptions,
    menu: RootMenu,
    entries: Vec<MenuEntry>,
    cursor: usize,
    cached_width: Option<u16>,
    plan: OverflowPlan,
}

impl MenuView {
    pub fn new(options: MenuOptions, entries: Vec<MenuEntry>) -> Self {
        let plan = OverflowPlan::all_visible(entries.len());
        let mut view = Self {
            bindings: MenuBindings::default(),
            options: MenuViewOptions::default(),
            menu: RootMenu::new(options),
            entries,
            cursor: 0,
            cached_width: None,
            plan,
        };
        view.register_entries();
        view
    }

    pub fn with_view_options(mut self, options: MenuViewOptions) -> Self {
        self.options = options;
        self
    }

    pub fn view_options(&self) -> &MenuViewOptions {
        &self.options
    }

    pub fn menu(&self) -> &RootMenu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut RootMenu {
        &mut self.menu
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Replaces the entry tree: unregisters the old entries, registers the
    /// new ones, and invalidates the overflow layout.
    pub fn set_entries(&mut self, entries: Vec<MenuEntry>) {
        let old = std::mem::replace(&mut self.entries, entries);
        for entry in &old {
            Self::unregister_entry(&mut self.menu, entry);
        }
        if self.menu.submenu(MORE_INDEX).is_some() {
            self.menu.unregister_submenu(MORE_INDEX);
        }
        self.plan = OverflowPlan::all_visible(self.entries.len());
        self.cached_width = None;
        self.cursor = 0;
        self.register_entries();
    }

    /// Forces a replan on the next render. Needed when children change
    /// without a width change; a resize replans on its own.
    pub fn invalidate_layout(&mut self) {
        self.cached_width = None;
    }

    // -- registration -------------------------------------------------------

    fn register_entries(&mut self) {
        let entries = std::mem::take(&mut self.entries);
        let horizontal = self.menu.mode() == MenuMode::Horizontal;
        let mut more_registered = false;

        for (i, entry) in entries.iter().enumerate() {
            let overflowed = horizontal && self.plan.is_overflowed(i);
            if overflowed && !more_registered {
                self.menu.register_submenu(SubmenuRecord::new(
                    MORE_INDEX,
                    vec![MORE_INDEX.to_string()],
                ));
                more_registered = true;
            }
            let prefix: Vec<String> = if overflowed {
                vec![MORE_INDEX.to_string()]
            } else {
                Vec::new()
            };
            Self::register_entry(&mut self.menu, entry, &prefix);
        }

        self.entries = entries;
    }

    fn register_entry(menu: &mut RootMenu, entry: &MenuEntry, prefix: &[String]) {
        match entry {
            MenuEntry::Item(def) => {
                let mut path = prefix.to_vec();
                path.push(def.index.clone());
                let mut record = ItemRecord::new(def.index.clone(), path);
                if let Some(route) = &def.route {
                    record = record.with_route(route.clone());
                }
                menu.register_item(record);
            }
            MenuEntry::Submenu(def) => {
                let mut path = prefix.to_vec();
                path.push(def.index.clone());
                menu.register_submenu(SubmenuRecord::new(def.index.clone(), path.clone()));
                for child in &def.children {
                    Self::register_entry(menu, child, &path);
                }
            }
        }
    }

    fn unregister_entry(menu: &mut RootMenu, entry: &MenuEntry) {
        match entry {
            MenuEntry::Item(def) => menu.unregister_item(&def.index),
            MenuEntry::Submenu(def) => {
                for child in &def.children {
                    Self::unregister_entry(menu, child);
                }
                menu.unregister_submenu(&def.index);
            }
        }
    }

    /// Unregisters and re-registers the whole tree. Run after the overflow
    /// plan changes so overflowed subtrees re-parent under the "more" group
    /// and path-dependent state (exclusivity, active highlighting) keeps
    /// working inside the panel.
    fn reregister_entries(&mut self) {
        let entries = std::mem::take(&mut self.entries);
        for entry in &entries {
            Self::unregister_entry(&mut self.menu, entry);
        }
        self.entries = entries;
        if self.menu.submenu(MORE_INDEX).is_some() {
            self.menu.unregister_submenu(MORE_INDEX);
        }
        self.register_entries();
    }

    // -- events -------------------------------------------------------------

    pub fn handle_event(&mut self, event: InputEvent) -> MenuViewAction {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(_) => MenuViewAction::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> MenuViewAction {
        let rows = self.build_rows();
        if rows.is_empty() {
            return MenuViewAction::None;
        }
        self.cursor = self.cursor.min(rows.len() - 1);

        if self.bindings.is_up(&key) {
            return self.move_cursor(-1, &rows);
        }
        if self.bindings.is_down(&key) {
            return self.move_cursor(1, &rows);
        }
        if self.bindings.is_activate(&key) {
            let row = rows[self.cursor].clone();
            return match row.kind {
                RowKind::Item => self.activate_item(&row),
                RowKind::Submenu => self.toggle_submenu(&row.index),
            };
        }
        if self.bindings.is_descend(&key) {
            let row = &rows[self.cursor];
            if row.kind == RowKind::Submenu && !row.open {
                let index = row.index.clone();
                return self.toggle_submenu(&index);
            }
            return MenuViewAction::None;
        }
        if self.bindings.is_ascend(&key) {
            return self.ascend(&rows);
        }
        if self.bindings.is_dismiss(&key) {
            if self.menu.is_menu_popup() && !self.menu.opened_menus().is_empty() {
                for index in self.menu.opened_menus().to_vec() {
                    self.menu.close(&index);
                }
                self.clamp_cursor();
                return MenuViewAction::Redraw;
            }
            return MenuViewAction::None;
        }

        MenuViewAction::None
    }

    fn activate_item(&mut self, row: &Row) -> MenuViewAction {
        if row.disabled {
            return MenuViewAction::None;
        }
        match self.menu.handle_item_click(&row.index) {
            Some(event) => {
                self.clamp_cursor();
                MenuViewAction::Event(event)
            }
            None => MenuViewAction::None,
        }
    }

    fn toggle_submenu(&mut self, index: &str) -> MenuViewAction {
        match self.menu.handle_submenu_click(index) {
            Some(event) => {
                self.clamp_cursor();
                MenuViewAction::Event(event)
            }
            None => MenuViewAction::None,
        }
    }

    /// Left key: close the submenu at the cursor if it is open, otherwise
    /// close the nearest open ancestor and move the cursor onto it.
    fn ascend(&mut self, rows: &[Row]) -> MenuViewAction {
        let row = &rows[self.cursor];
        if row.kind == RowKind::Submenu && row.open {
            let index = row.index.clone();
            return self.toggle_submenu(&index);
        }
        let depth = row.depth;
        let parent = rows[..self.cursor]
            .iter()
            .rposition(|r| r.kind == RowKind::Submenu && r.depth < depth);
        match parent {
            Some(pos) => {
                self.cursor = pos;
                let index = rows[pos].index.clone();
                self.toggle_submenu(&index)
            }
            None => MenuViewAction::None,
        }
    }

    fn move_cursor(&mut self, delta: i64, rows: &[Row]) -> MenuViewAction {
        let mut i = self.cursor as i64;
        loop {
            i += delta;
            if i < 0 || i >= rows.len() as i64 {
                return MenuViewAction::None;
            }
            if !rows[i as usize].disabled {
                self.cursor = i as usize;
                return MenuViewAction::Redraw;
            }
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.build_rows().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    // -- rows ---------------------------------------------------------------

    fn build_rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        if self.menu.mode() == MenuMode::Horizontal {
            let visible = self.plan.visible().min(self.entries.len());
            for entry in &self.entries[..visible] {
                self.push_rows(&mut rows, entry, 0);
            }
            if visible < self.entries.len() {
                let open = self.menu.is_open(MORE_INDEX);
                rows.push(Row {
                    index: MORE_INDEX.to_string(),
                    label: icon::MORE.to_string(),
                    depth: 0,
                    kind: RowKind::Submenu,
                    open,
                    disabled: false,
                });
                if open {
                    for entry in &self.entries[visible..] {
                        self.push_rows(&mut rows, entry, 1);
                    }
                }
            }
        } else {
            for entry in &self.entries {
                self.push_rows(&mut rows, entry, 0);
            }
        }
        rows
    }

    fn push_rows(&self, rows: &mut Vec<Row>, entry: &MenuEntry, depth: u16) {
        match entry {
            MenuEntry::Item(def) => rows.push(Row {
                index: def.index.clone(),
                label: def.label.clone(),
                depth,
                kind: RowKind::Item,
                open: false,
                disabled: def.disabled,
            }),
            MenuEntry::Submenu(def) => {
                let open = self.menu.is_open(&def.index);
                rows.push(Row {
                    index: def.index.clone(),
                    label: def.label.clone(),
                    depth,
                    kind: RowKind::Submenu,
                    open,
                    disabled: false,
                });
                if open {
                    for child in &def.children {
                        self.push_rows(rows, child, depth + 1);
                    }
                }
            }
        }
    }

    // -- rendering ----------------------------------------------------------

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        match (self.menu.mode(), self.menu.is_collapsed()) {
            (MenuMode::Horizontal, _) => self.render_horizontal(area, buf, theme),
            (MenuMode::Vertical, true) => self.render_collapsed(area, buf, theme),
            (MenuMode::Vertical, false) => self.render_vertical(area, buf, theme),
        }
    }

    fn base_style(&self, theme: &Theme) -> Style {
        if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        }
    }

    fn row_style(&self, row: &Row, at_cursor: bool, theme: &Theme) -> Style {
        let active = match row.kind {
            RowKind::Item => self.menu.is_item_active(&row.index),
            RowKind::Submenu => self.menu.is_submenu_active(&row.index),
        };
        let mut style = if row.disabled {
            theme.text_muted
        } else if active {
            self.options.active_style.patch(theme.accent)
        } else {
            self.base_style(theme)
        };
        if at_cursor {
            style = style.patch(self.options.cursor_style);
        }
        style
    }

    fn row_label(row: &Row) -> String {
        match row.kind {
            RowKind::Item => row.label.clone(),
            RowKind::Submenu => {
                let arrow = if row.open {
                    icon::ARROW_DOWN
                } else {
                    icon::ARROW_RIGHT
                };
                format!("{arrow} {}", row.label)
            }
        }
    }

    fn render_vertical(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let rows = self.build_rows();
        self.cursor = self.cursor.min(rows.len().saturating_sub(1));
        buf.set_style(area, self.base_style(theme));

        for (i, row) in rows.iter().enumerate().take(area.height as usize) {
            let y = area.y + i as u16;
            let x = area.x + (row.depth * self.options.indent).min(area.width.saturating_sub(1));
            let max_cols = (area.x + area.width).saturating_sub(x);
            let style = self.row_style(row, i == self.cursor, theme);
            render::render_label(x, y, max_cols, buf, &Self::row_label(row), style);
        }
    }

    fn render_collapsed(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let rows = self.build_rows();
        self.cursor = self.cursor.min(rows.len().saturating_sub(1));
        buf.set_style(area, self.base_style(theme));

        let strip_w = self.options.collapse_width.min(area.width);
        let panel_x = area.x + strip_w + 1;
        let mut strip_line = 0u16;
        let mut anchor_y = area.y;
        let mut panel_line = 0u16;

        for (i, row) in rows.iter().enumerate() {
            let style = self.row_style(row, i == self.cursor, theme);
            if row.depth == 0 {
                if strip_line >= area.height {
                    break;
                }
                let y = area.y + strip_line;
                let glyph: String = row.label.chars().take(1).collect();
                render::render_label(area.x, y, strip_w, buf, &glyph, style);
                strip_line += 1;
                anchor_y = y;
                panel_line = 0;
            } else {
                // fly-out panel to the right of the strip, anchored at the
                // parent's line
                let y = anchor_y + panel_line;
                if y >= area.y + area.height || panel_x >= area.x + area.width {
                    continue;
                }
                let x = panel_x + (row.depth - 1) * self.options.indent;
                let max_cols = (area.x + area.width).saturating_sub(x);
                render::render_label(x, y, max_cols, buf, &Self::row_label(row), style);
                panel_line += 1;
            }
        }
    }

    fn render_horizontal(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        // the width change on the root area is the resize signal
        if self.cached_width != Some(area.width) {
            self.cached_width = Some(area.width);
            self.replan(area.width);
        }

        let rows = self.build_rows();
        self.cursor = self.cursor.min(rows.len().saturating_sub(1));
        buf.set_style(Rect::new(area.x, area.y, area.width, 1), self.base_style(theme));

        let pad = " ".repeat(self.options.cell_padding as usize);
        let mut x = area.x;
        let mut panel_x = area.x;
        let mut panel_line = 1u16;

        for (i, row) in rows.iter().enumerate() {
            let style = self.row_style(row, i == self.cursor, theme);
            if row.depth == 0 {
                let text = match row.kind {
                    RowKind::Item => format!("{pad}{}{pad}", row.label),
                    RowKind::Submenu => {
                        let arrow = if row.open { icon::ARROW_UP } else { icon::ARROW_DOWN };
                        format!("{pad}{} {arrow}{pad}", row.label)
                    }
                };
                let width = render::display_width(&text);
                if x >= area.x + area.width {
                    continue;
                }
                let max_cols = (area.x + area.width).saturating_sub(x);
                render::render_label(x, area.y, max_cols, buf, &text, style);
                panel_x = x;
                panel_line = 1;
                x = x.saturating_add(width);
            } else {
                // panel below the bar, anchored under the cell it belongs to
                let y = area.y + panel_line;
                if y >= area.y + area.height || panel_x >= area.x + area.width {
                    continue;
                }
                let px = panel_x + (row.depth - 1) * self.options.indent;
                let max_cols = (area.x + area.width).saturating_sub(px);
                render::render_label(px, y, max_cols, buf, &Self::row_label(row), style);
                panel_line += 1;
            }
        }
    }

    fn replan(&mut self, width: u16) {
        let measure = EntryMeasure {
            entries: &self.entries,
            width,
            cell_padding: self.options.cell_padding,
        };
        let plan = overflow::plan(&measure, self.entries.len(), self.options.more_width);
        if plan != self.plan {
            self.plan = plan;
            self.reregister_entries();
        }
    }
}

struct EntryMeasure<'a> {
    entries: &'a [MenuEntry],
    width: u16,
    cell_padding: u16,
}

impl MeasureChildren for EntryMeasure<'_> {
    fn container_width(&self) -> u16 {
        self.width
    }

    fn child_width(&self, index: usize) -> u16 {
        flattened_width(&self.entries[index], self.cell_padding)
    }
}

/// Width a top-level child contributes to the overflow plan. A submenu with
/// children contributes the flattened widths of its leaves; a childless
/// submenu contributes its header width so it never measures as zero.
fn flattened_width(entry: &MenuEntry, cell_padding: u16) -> u16 {
    let cell = |label: &str, extra: u16| {
        render::display_width(label)
            .saturating_add(cell_padding * 2)
            .saturating_add(extra)
    };
    match entry {
        MenuEntry::Item(def) => cell(&def.label, 0),
        MenuEntry::Submenu(def) if def.children.is_empty() => cell(&def.label, 2),
        MenuEntry::Submenu(def) => def
            .children
            .iter()
            .fold(0u16, |acc, c| acc.saturating_add(flattened_width(c, cell_padding))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::NavigationOutcome;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code))
    }

    fn sample_entries() -> Vec<MenuEntry> {
        vec![
            MenuEntry::Item(ItemDef::new("1", "Home")),
            MenuEntry::Submenu(SubmenuDef::new(
                "2",
                "Settings",
                vec![
                    MenuEntry::Item(ItemDef::new("2-1", "Profile")),
                    MenuEntry::Item(ItemDef::new("2-2", "Security")),
                ],
            )),
            MenuEntry::Item(ItemDef::new("3", "About")),
        ]
    }

    #[test]
    fn construction_registers_the_tree() {
        let view = MenuView::new(MenuOptions::default(), sample_entries());
        assert!(view.menu().item("1").is_some());
        assert!(view.menu().submenu("2").is_some());
        assert_eq!(
            view.menu().item("2-1").unwrap().index_path,
            vec!["2".to_string(), "2-1".to_string()]
        );
    }

    #[test]
    fn default_active_initializes_selection_and_open_set() {
        let view = MenuView::new(
            MenuOptions {
                default_active: "2-1".into(),
                ..Default::default()
            },
            sample_entries(),
        );
        assert_eq!(view.menu().active_index(), Some("2-1"));
        assert_eq!(view.menu().opened_menus(), ["2"]);
    }

    #[test]
    fn enter_on_item_selects_it() {
        let mut view = MenuView::new(MenuOptions::default(), sample_entries());
        let action = view.handle_event(key(KeyCode::Enter));
        assert!(matches!(
            action,
            MenuViewAction::Event(MenuEvent::Select { ref index, .. }) if index == "1"
        ));
        assert_eq!(view.menu().active_index(), Some("1"));
    }

    #[test]
    fn submenu_toggling_extends_and_shrinks_rows() {
        let mut view = MenuView::new(MenuOptions::default(), sample_entries());
        view.handle_event(key(KeyCode::Down));
        let action = view.handle_event(key(KeyCode::Enter));
        assert!(matches!(
            action,
            MenuViewAction::Event(MenuEvent::Open { ref index, .. }) if index == "2"
        ));
        assert_eq!(view.build_rows().len(), 5);

        // Left on the open submenu closes it again
        let action = view.handle_event(key(KeyCode::Left));
        assert!(matches!(
            action,
            MenuViewAction::Event(MenuEvent::Close { ref index, .. }) if index == "2"
        ));
        assert_eq!(view.build_rows().len(), 3);
    }

    #[test]
    fn ascend_from_child_closes_the_parent() {
        let mut view = MenuView::new(MenuOptions::default(), sample_entries());
        view.menu_mut().open("2");
        // move onto "2-1"
        view.handle_event(key(KeyCode::Down));
        view.handle_event(key(KeyCode::Down));
        let action = view.handle_event(key(KeyCode::Left));
        assert!(matches!(
            action,
            MenuViewAction::Event(MenuEvent::Close { ref index, .. }) if index == "2"
        ));
        assert!(view.menu().opened_menus().is_empty());
    }

    #[test]
    fn cursor_skips_disabled_items() {
        let entries = vec![
            MenuEntry::Item(ItemDef::new("1", "One")),
            MenuEntry::Item(ItemDef::new("2", "Two").disabled()),
            MenuEntry::Item(ItemDef::new("3", "Three")),
        ];
        let mut view = MenuView::new(MenuOptions::default(), entries);
        view.handle_event(key(KeyCode::Down));
        let action = view.handle_event(key(KeyCode::Enter));
        assert!(matches!(
            action,
            MenuViewAction::Event(MenuEvent::Select { ref index, .. }) if index == "3"
        ));
    }

    #[test]
    fn esc_dismisses_popup_panels() {
        let mut view = MenuView::new(
            MenuOptions {
                collapse: true,
                ..Default::default()
            },
            sample_entries(),
        );
        view.menu_mut().handle_submenu_click("2");
        assert_eq!(view.menu().opened_menus(), ["2"]);

        let action = view.handle_event(key(KeyCode::Esc));
        assert_eq!(action, MenuViewAction::Redraw);
        assert!(view.menu().opened_menus().is_empty());
    }

    #[test]
    fn narrow_horizontal_render_replans_into_more_group() {
        let mut view = MenuView::new(
            MenuOptions {
                mode: MenuMode::Horizontal,
                ..Default::default()
            },
            sample_entries(),
        );
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 4));
        view.render(Rect::new(0, 0, 20, 4), &mut buf, &Theme::default());

        assert!(view.plan.has_overflow());
        // overflowed entries re-registered under the synthetic more group
        let last = view.menu().item("3").unwrap();
        assert_eq!(last.index_path.first().map(String::as_str), Some(MORE_INDEX));
        assert!(view.menu().submenu(MORE_INDEX).is_some());

        // the more row is navigable and opens its panel
        let rows = view.build_rows();
        assert_eq!(rows.last().unwrap().index, MORE_INDEX);
    }

    #[test]
    fn wide_horizontal_render_keeps_everything_visible() {
        let mut view = MenuView::new(
            MenuOptions {
                mode: MenuMode::Horizontal,
                ..Default::default()
            },
            sample_entries(),
        );
        let mut buf = Buffer::empty(Rect::new(0, 0, 120, 4));
        view.render(Rect::new(0, 0, 120, 4), &mut buf, &Theme::default());

        assert!(!view.plan.has_overflow());
        assert!(view.menu().submenu(MORE_INDEX).is_none());
        assert_eq!(
            view.menu().item("3").unwrap().index_path,
            vec!["3".to_string()]
        );
    }

    #[test]
    fn resize_triggers_replan_and_content_change_needs_invalidate() {
        let mut view = MenuView::new(
            MenuOptions {
                mode: MenuMode::Horizontal,
                ..Default::default()
            },
            sample_entries(),
        );
        let mut buf = Buffer::empty(Rect::new(0, 0, 120, 4));
        view.render(Rect::new(0, 0, 120, 4), &mut buf, &Theme::default());
        assert!(!view.plan.has_overflow());

        // shrinking the render area is the resize signal
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 4));
        view.render(Rect::new(0, 0, 20, 4), &mut buf, &Theme::default());
        assert!(view.plan.has_overflow());
    }

    #[test]
    fn router_select_resolves_through_the_controller() {
        let mut view = MenuView::new(
            MenuOptions {
                router: true,
                ..Default::default()
            },
            sample_entries(),
        );
        let MenuViewAction::Event(MenuEvent::Select { navigation, .. }) =
            view.handle_event(key(KeyCode::Enter))
        else {
            panic!("expected select event");
        };
        assert_eq!(view.menu().active_index(), None);
        view.menu_mut()
            .resolve_navigation(navigation.unwrap(), NavigationOutcome::Done);
        assert_eq!(view.menu().active_index(), Some("1"));
    }

    #[test]
    fn vertical_render_smoke() {
        let mut view = MenuView::new(
            MenuOptions {
                default_active: "2-1".into(),
                ..Default::default()
            },
            sample_entries(),
        );
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default());

        let text: String = (0..6)
            .map(|y| {
                (0..30)
                    .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Home"));
        assert!(text.contains("Settings"));
        // the active item's submenu is expanded
        assert!(text.contains("Profile"));
    }

    #[test]
    fn collapsed_render_smoke() {
        let mut view = MenuView::new(
            MenuOptions {
                collapse: true,
                ..Default::default()
            },
            sample_entries(),
        );
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &Theme::default());
        // strip shows first glyphs only
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "H");
        assert_eq!(buf.cell((0, 1)).unwrap().symbol(), "S");
    }
}
