use crate::active;
use crate::open_state::OpenState;
use crate::registry::ItemRecord;
use crate::registry::MenuRegistry;
use crate::registry::SubmenuRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuMode {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuTrigger {
    #[default]
    Hover,
    Click,
}

#[derive(Clone, Debug)]
pub struct MenuOptions {
    pub mode: MenuMode,
    pub default_active: String,
    pub default_openeds: Vec<String>,
    pub unique_opened: bool,
    /// When set, item clicks defer selection to an app-driven navigation;
    /// see [`RootMenu::resolve_navigation`].
    pub router: bool,
    pub menu_trigger: MenuTrigger,
    pub collapse: bool,
    /// Whether vertical mode wraps output in an animated wrapper. Presentation
    /// detail consumed by the view layer.
    pub collapse_transition: bool,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            mode: MenuMode::Vertical,
            default_active: String::new(),
            default_openeds: Vec::new(),
            unique_opened: false,
            router: false,
            menu_trigger: MenuTrigger::Hover,
            collapse: false,
            collapse_transition: true,
        }
    }
}

/// Handle for one in-flight navigation started by an item click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavigationId(u64);

/// What the app's navigation service reported back for a pushed route.
///
/// Only `Done` (completed, no redirect) applies the deferred selection;
/// a redirected or failed navigation leaves the active index unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    Done,
    Redirected,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Select {
        index: String,
        index_path: Vec<String>,
        route: Option<String>,
        navigation: Option<NavigationId>,
    },
    Open {
        index: String,
        index_path: Vec<String>,
    },
    Close {
        index: String,
        index_path: Vec<String>,
    },
}

/// Root menu controller.
///
/// Sole mutator of the registry and the open set. Descendant entries
/// register themselves here and route every interaction through the public
/// methods; each mutating method re-runs the resolution pass itself, so
/// derived state is always current when it returns.
#[derive(Debug)]
pub struct RootMenu {
    options: MenuOptions,
    registry: MenuRegistry,
    open_state: OpenState,
    active_index: Option<String>,
    altered_collapse: bool,
    pending: Vec<(NavigationId, String)>,
    next_navigation: u64,
}

impl RootMenu {
    pub fn new(options: MenuOptions) -> Self {
        let open_state = if options.collapse {
            OpenState::default()
        } else {
            OpenState::from_openeds(&options.default_openeds)
        };
        let active_index = if options.default_active.is_empty() {
            None
        } else {
            Some(options.default_active.clone())
        };

        Self {
            options,
            registry: MenuRegistry::default(),
            open_state,
            active_index,
            altered_collapse: false,
            pending: Vec::new(),
            next_navigation: 0,
        }
    }

    pub fn options(&self) -> &MenuOptions {
        &self.options
    }

    pub fn mode(&self) -> MenuMode {
        self.options.mode
    }

    /// How submenus expect to be triggered. Advisory for the view layer;
    /// the core never consumes it.
    pub fn trigger(&self) -> MenuTrigger {
        self.options.menu_trigger
    }

    pub fn is_collapsed(&self) -> bool {
        self.options.collapse
    }

    /// Whether submenus open as fly-out panels instead of inline expansion:
    /// horizontal mode, or vertical mode while collapsed.
    pub fn is_menu_popup(&self) -> bool {
        self.options.mode == MenuMode::Horizontal
            || (self.options.mode == MenuMode::Vertical && self.options.collapse)
    }

    pub fn opened_menus(&self) -> &[String] {
        self.open_state.as_slice()
    }

    pub fn is_open(&self, index: &str) -> bool {
        self.open_state.is_open(index)
    }

    pub fn active_index(&self) -> Option<&str> {
        self.active_index.as_deref()
    }

    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }

    pub fn item(&self, index: &str) -> Option<&ItemRecord> {
        self.registry.item(index)
    }

    pub fn submenu(&self, index: &str) -> Option<&SubmenuRecord> {
        self.registry.submenu(index)
    }

    pub fn is_item_active(&self, index: &str) -> bool {
        self.active_index.as_deref() == Some(index)
    }

    /// A submenu is active when the selected item sits somewhere below it.
    pub fn is_submenu_active(&self, index: &str) -> bool {
        self.active_index
            .as_deref()
            .and_then(|active| self.registry.item(active))
            .is_some_and(|item| item.index_path.iter().any(|p| p == index))
    }

    // -- registration -------------------------------------------------------

    pub fn register_item(&mut self, record: ItemRecord) {
        self.registry.insert_item(record);
        self.refresh_active();
    }

    pub fn unregister_item(&mut self, index: &str) {
        self.registry.remove_item(index);
        self.refresh_active();
    }

    pub fn register_submenu(&mut self, record: SubmenuRecord) {
        self.registry.insert_submenu(record);
        self.refresh_active();
    }

    pub fn unregister_submenu(&mut self, index: &str) {
        self.registry.remove_submenu(index);
        self.refresh_active();
    }

    // -- imperative open/close ---------------------------------------------

    /// Opens the named submenu and every ancestor on its path, root first.
    /// Unknown index is a silent no-op.
    pub fn open(&mut self, index: &str) {
        let Some(path) = self.registry.submenu(index).map(|s| s.index_path.clone()) else {
            return;
        };
        for i in &path {
            self.open_state.open(i, &path, self.options.unique_opened);
        }
    }

    /// Closes only the named submenu, never its ancestors.
    pub fn close(&mut self, index: &str) {
        self.open_state.close(index);
    }

    // -- interaction --------------------------------------------------------

    /// Toggles a submenu. Returns the open or close event to emit, or `None`
    /// for a stale index.
    pub fn handle_submenu_click(&mut self, index: &str) -> Option<MenuEvent> {
        let path = self.registry.submenu(index)?.index_path.clone();

        if self.open_state.is_open(index) {
            self.open_state.close(index);
            Some(MenuEvent::Close {
                index: index.to_string(),
                index_path: path,
            })
        } else {
            self.open_state
                .open(index, &path, self.options.unique_opened);
            Some(MenuEvent::Open {
                index: index.to_string(),
                index_path: path,
            })
        }
    }

    /// Handles an item activation.
    ///
    /// In popup mode any click dismisses the fly-out panels, even a stale
    /// one. A stale index stops there: no selection change, no event. With
    /// `router` enabled the selection is deferred behind a [`NavigationId`]
    /// carried in the returned select event; otherwise it applies
    /// immediately.
    pub fn handle_item_click(&mut self, index: &str) -> Option<MenuEvent> {
        if self.is_menu_popup() {
            self.open_state.clear();
        }

        let item = self.registry.item(index)?;
        let index = item.index.clone();
        let index_path = item.index_path.clone();

        if self.options.router {
            let route = item
                .route
                .clone()
                .unwrap_or_else(|| index.clone());
            let id = NavigationId(self.next_navigation);
            self.next_navigation += 1;
            self.pending.push((id, index.clone()));
            Some(MenuEvent::Select {
                index,
                index_path,
                route: Some(route),
                navigation: Some(id),
            })
        } else {
            let route = item.route.clone();
            self.active_index = Some(index.clone());
            Some(MenuEvent::Select {
                index,
                index_path,
                route,
                navigation: None,
            })
        }
    }

    /// Applies the outcome of a navigation started by [`handle_item_click`].
    ///
    /// The only place the selection changes asynchronously. Unknown ids are
    /// ignored. Two in-flight navigations resolve independently in
    /// completion order; the last `Done` wins.
    pub fn resolve_navigation(&mut self, id: NavigationId, outcome: NavigationOutcome) {
        let Some(pos) = self.pending.iter().position(|(p, _)| *p == id) else {
            return;
        };
        let (_, index) = self.pending.remove(pos);
        if outcome == NavigationOutcome::Done {
            self.active_index = Some(index);
        }
    }

    pub fn pending_navigations(&self) -> usize {
        self.pending.len()
    }

    // -- configuration changes ---------------------------------------------

    /// External default-active change. A value that is not registered clears
    /// the current selection before resolving, so the resolver cannot fall
    /// back to it.
    pub fn set_default_active(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.registry.item(&value).is_none() {
            self.active_index = None;
        }
        self.options.default_active = value.clone();
        self.resolve_with(&value);
    }

    /// Collapse toggle. Any change arms the "just collapsed" marker that
    /// keeps an empty resolution pass from clearing the selection; entering
    /// collapse also dismisses every open submenu.
    pub fn set_collapse(&mut self, value: bool) {
        if value != self.options.collapse {
            self.altered_collapse = true;
        }
        self.options.collapse = value;
        if value {
            self.open_state.clear();
        }
    }

    /// Runtime mode switch. Entering horizontal layout dismisses every open
    /// submenu.
    pub fn set_mode(&mut self, mode: MenuMode) {
        self.options.mode = mode;
        if mode == MenuMode::Horizontal {
            self.open_state.clear();
        }
    }

    // -- resolution ---------------------------------------------------------

    fn refresh_active(&mut self) {
        let candidate = self
            .active_index
            .clone()
            .unwrap_or_else(|| self.options.default_active.clone());
        self.resolve_with(&candidate);
    }

    fn resolve_with(&mut self, candidate: &str) {
        let resolved = active::resolve(
            self.registry.items(),
            candidate,
            self.active_index.as_deref(),
            &self.options.default_active,
        )
        .cloned();

        match resolved {
            Some(item) => {
                self.active_index = Some(item.index.clone());
                self.expand_active_path(&item);
            }
            None => {
                if self.altered_collapse {
                    self.altered_collapse = false;
                } else {
                    self.active_index = None;
                }
            }
        }
    }

    /// Expands every submenu on the active item's path, root to leaf. The
    /// leaf's own index is on the path too but never resolves as a submenu.
    fn expand_active_path(&mut self, item: &ItemRecord) {
        if self.options.mode == MenuMode::Horizontal || self.options.collapse {
            return;
        }
        for index in &item.index_path {
            let Some(path) = self.registry.submenu(index).map(|s| s.index_path.clone()) else {
                continue;
            };
            self.open_state
                .open(index, &path, self.options.unique_opened);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_tree(menu: &mut RootMenu) {
        // "1", "2" (submenu) > "2-1"
        menu.register_item(ItemRecord::new("1", vec!["1".into()]));
        menu.register_submenu(SubmenuRecord::new("2", vec!["2".into()]));
        menu.register_item(ItemRecord::new("2-1", vec!["2".into(), "2-1".into()]));
    }

    #[test]
    fn default_active_expands_its_path_on_registration() {
        let mut menu = RootMenu::new(MenuOptions {
            default_active: "2-1".into(),
            ..Default::default()
        });
        register_tree(&mut menu);

        assert_eq!(menu.active_index(), Some("2-1"));
        assert_eq!(menu.opened_menus(), ["2"]);
        assert!(menu.is_submenu_active("2"));
    }

    #[test]
    fn initialization_skips_expansion_in_popup_modes() {
        let mut menu = RootMenu::new(MenuOptions {
            default_active: "2-1".into(),
            mode: MenuMode::Horizontal,
            ..Default::default()
        });
        register_tree(&mut menu);

        assert_eq!(menu.active_index(), Some("2-1"));
        assert!(menu.opened_menus().is_empty());
    }

    #[test]
    fn item_click_selects_and_emits() {
        let mut menu = RootMenu::new(MenuOptions::default());
        register_tree(&mut menu);

        let event = menu.handle_item_click("1").unwrap();
        assert_eq!(
            event,
            MenuEvent::Select {
                index: "1".into(),
                index_path: vec!["1".into()],
                route: None,
                navigation: None,
            }
        );
        assert_eq!(menu.active_index(), Some("1"));
    }

    #[test]
    fn stale_item_click_changes_nothing() {
        let mut menu = RootMenu::new(MenuOptions::default());
        register_tree(&mut menu);
        menu.handle_item_click("1");

        assert!(menu.handle_item_click("missing").is_none());
        assert_eq!(menu.active_index(), Some("1"));
    }

    #[test]
    fn popup_click_dismisses_panels_even_for_stale_items() {
        let mut menu = RootMenu::new(MenuOptions {
            mode: MenuMode::Horizontal,
            ..Default::default()
        });
        register_tree(&mut menu);
        menu.handle_submenu_click("2");
        assert_eq!(menu.opened_menus(), ["2"]);

        assert!(menu.handle_item_click("missing").is_none());
        assert!(menu.opened_menus().is_empty());
    }

    #[test]
    fn submenu_click_toggles_with_events() {
        let mut menu = RootMenu::new(MenuOptions::default());
        register_tree(&mut menu);

        let open = menu.handle_submenu_click("2").unwrap();
        assert_eq!(
            open,
            MenuEvent::Open {
                index: "2".into(),
                index_path: vec!["2".into()],
            }
        );
        let close = menu.handle_submenu_click("2").unwrap();
        assert!(matches!(close, MenuEvent::Close { .. }));
        assert!(menu.opened_menus().is_empty());
        assert!(menu.handle_submenu_click("missing").is_none());
    }

    #[test]
    fn imperative_open_walks_ancestors_and_close_does_not() {
        let mut menu = RootMenu::new(MenuOptions::default());
        menu.register_submenu(SubmenuRecord::new("a", vec!["a".into()]));
        menu.register_submenu(SubmenuRecord::new("a-1", vec!["a".into(), "a-1".into()]));

        menu.open("a-1");
        assert_eq!(menu.opened_menus(), ["a", "a-1"]);

        menu.close("a-1");
        assert_eq!(menu.opened_menus(), ["a"]);

        // unknown index is a silent no-op
        menu.open("missing");
        assert_eq!(menu.opened_menus(), ["a"]);
    }

    #[test]
    fn unique_opened_keeps_only_the_latest_chain() {
        let mut menu = RootMenu::new(MenuOptions {
            unique_opened: true,
            ..Default::default()
        });
        menu.register_submenu(SubmenuRecord::new("a", vec!["a".into()]));
        menu.register_submenu(SubmenuRecord::new("b", vec!["b".into()]));

        menu.handle_submenu_click("a");
        menu.handle_submenu_click("b");
        assert_eq!(menu.opened_menus(), ["b"]);
    }

    #[test]
    fn router_defers_selection_until_navigation_done() {
        let mut menu = RootMenu::new(MenuOptions {
            router: true,
            ..Default::default()
        });
        menu.register_item(ItemRecord::new("1", vec!["1".into()]).with_route("/one"));

        let Some(MenuEvent::Select {
            route, navigation, ..
        }) = menu.handle_item_click("1")
        else {
            panic!("expected select event");
        };
        assert_eq!(route.as_deref(), Some("/one"));
        assert_eq!(menu.active_index(), None);

        menu.resolve_navigation(navigation.unwrap(), NavigationOutcome::Done);
        assert_eq!(menu.active_index(), Some("1"));
    }

    #[test]
    fn redirected_navigation_leaves_selection_unchanged() {
        let mut menu = RootMenu::new(MenuOptions {
            router: true,
            ..Default::default()
        });
        menu.register_item(ItemRecord::new("1", vec!["1".into()]));

        let Some(MenuEvent::Select { navigation, .. }) = menu.handle_item_click("1") else {
            panic!("expected select event");
        };
        menu.resolve_navigation(navigation.unwrap(), NavigationOutcome::Redirected);
        assert_eq!(menu.active_index(), None);
        assert_eq!(menu.pending_navigations(), 0);
    }

    #[test]
    fn route_defaults_to_the_index_when_router_is_on() {
        let mut menu = RootMenu::new(MenuOptions {
            router: true,
            ..Default::default()
        });
        menu.register_item(ItemRecord::new("1", vec!["1".into()]));

        let Some(MenuEvent::Select { route, .. }) = menu.handle_item_click("1") else {
            panic!("expected select event");
        };
        assert_eq!(route.as_deref(), Some("1"));
    }

    #[test]
    fn two_inflight_navigations_resolve_in_completion_order() {
        let mut menu = RootMenu::new(MenuOptions {
            router: true,
            ..Default::default()
        });
        menu.register_item(ItemRecord::new("1", vec!["1".into()]));
        menu.register_item(ItemRecord::new("2", vec!["2".into()]));

        let Some(MenuEvent::Select {
            navigation: first, ..
        }) = menu.handle_item_click("1")
        else {
            panic!("expected select event");
        };
        let Some(MenuEvent::Select {
            navigation: second, ..
        }) = menu.handle_item_click("2")
        else {
            panic!("expected select event");
        };

        // the second click resolves first; the first click's completion wins
        menu.resolve_navigation(second.unwrap(), NavigationOutcome::Done);
        assert_eq!(menu.active_index(), Some("2"));
        menu.resolve_navigation(first.unwrap(), NavigationOutcome::Done);
        assert_eq!(menu.active_index(), Some("1"));

        // stale id after resolution is ignored
        menu.resolve_navigation(first.unwrap(), NavigationOutcome::Done);
        assert_eq!(menu.active_index(), Some("1"));
    }

    #[test]
    fn set_collapse_clears_open_set_and_preserves_selection() {
        let mut menu = RootMenu::new(MenuOptions {
            default_active: "2-1".into(),
            ..Default::default()
        });
        register_tree(&mut menu);
        assert_eq!(menu.opened_menus(), ["2"]);

        menu.set_collapse(true);
        assert!(menu.opened_menus().is_empty());
        assert_eq!(menu.active_index(), Some("2-1"));
    }

    #[test]
    fn collapse_marker_shields_one_empty_resolution_pass() {
        let mut menu = RootMenu::new(MenuOptions {
            default_active: "x".into(),
            ..Default::default()
        });
        menu.register_item(ItemRecord::new("x", vec!["x".into()]));
        assert_eq!(menu.active_index(), Some("x"));

        menu.set_collapse(true);
        // the item unmounts while collapsed; the marker keeps the selection
        menu.unregister_item("x");
        assert_eq!(menu.active_index(), Some("x"));

        // the marker is consumed; a second empty pass clears for real
        menu.set_default_active("y");
        assert_eq!(menu.active_index(), None);
    }

    #[test]
    fn set_default_active_falls_back_then_clears() {
        let mut menu = RootMenu::new(MenuOptions::default());
        register_tree(&mut menu);
        menu.handle_item_click("1");

        // unknown value clears the current selection first, so nothing to
        // fall back to besides the (also unknown) default
        menu.set_default_active("missing");
        assert_eq!(menu.active_index(), None);

        menu.set_default_active("2-1");
        assert_eq!(menu.active_index(), Some("2-1"));
        assert_eq!(menu.opened_menus(), ["2"]);
    }

    #[test]
    fn removing_inactive_item_keeps_selection() {
        let mut menu = RootMenu::new(MenuOptions {
            default_active: "b".into(),
            ..Default::default()
        });
        menu.register_item(ItemRecord::new("a", vec!["a".into()]));
        menu.register_item(ItemRecord::new("b", vec!["b".into()]));
        menu.register_item(ItemRecord::new("c", vec!["c".into()]));
        assert_eq!(menu.active_index(), Some("b"));

        menu.unregister_item("a");
        assert_eq!(menu.active_index(), Some("b"));
    }

    #[test]
    fn set_mode_horizontal_clears_open_set() {
        let mut menu = RootMenu::new(MenuOptions::default());
        register_tree(&mut menu);
        menu.open("2");
        assert_eq!(menu.opened_menus(), ["2"]);

        menu.set_mode(MenuMode::Horizontal);
        assert!(menu.opened_menus().is_empty());
        assert!(menu.is_menu_popup());
    }
}
