use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::Terminal;
use ratatui_elements::crossterm_input::input_event_from_crossterm;
use ratatui_elements::menu::MenuEvent;
use ratatui_elements::menu::MenuMode;
use ratatui_elements::menu::MenuOptions;
use ratatui_elements::theme::Theme;
use ratatui_elements::view::ItemDef;
use ratatui_elements::view::MenuEntry;
use ratatui_elements::view::MenuView;
use ratatui_elements::view::MenuViewAction;
use ratatui_elements::view::SubmenuDef;
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::default();
    let entries = vec![
        MenuEntry::Item(ItemDef::new("home", "Home")),
        MenuEntry::Submenu(SubmenuDef::new(
            "workspace",
            "Workspace",
            vec![
                MenuEntry::Item(ItemDef::new("files", "Files")),
                MenuEntry::Item(ItemDef::new("search", "Search")),
                MenuEntry::Submenu(SubmenuDef::new(
                    "remote",
                    "Remote",
                    vec![
                        MenuEntry::Item(ItemDef::new("hosts", "Hosts")),
                        MenuEntry::Item(ItemDef::new("keys", "Keys")),
                    ],
                )),
            ],
        )),
        MenuEntry::Submenu(SubmenuDef::new(
            "settings",
            "Settings",
            vec![
                MenuEntry::Item(ItemDef::new("profile", "Profile")),
                MenuEntry::Item(ItemDef::new("security", "Security").disabled()),
            ],
        )),
        MenuEntry::Item(ItemDef::new("about", "About")),
    ];
    let mut view = MenuView::new(
        MenuOptions {
            default_active: "files".into(),
            unique_opened: true,
            ..Default::default()
        },
        entries,
    );

    let res = run(&mut terminal, &theme, &mut view);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend<Error = io::Error>>(
    terminal: &mut Terminal<B>,
    theme: &Theme,
    view: &mut MenuView,
) -> io::Result<()> {
    let mut last_event = String::from("navigate with j/k or arrows, Enter to select");

    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [main, status] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .areas(area);

            let block = Block::default()
                .title("MenuView (j/k, Enter, h/l, Esc; c collapse, m mode, q quit)")
                .borders(Borders::ALL);
            let inner = block.inner(main);
            f.render_widget(block, main);

            view.render(inner, f.buffer_mut(), theme);

            let buf = f.buffer_mut();
            buf.set_stringn(
                status.x,
                status.y,
                &last_event,
                status.width as usize,
                theme.text_muted,
            );
        })?;

        if crossterm::event::poll(Duration::from_millis(50))? {
            let ev = crossterm::event::read()?;
            if let Event::Key(key) = &ev {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('c') => {
                            let collapsed = view.menu().is_collapsed();
                            view.menu_mut().set_collapse(!collapsed);
                            continue;
                        }
                        KeyCode::Char('m') => {
                            let mode = match view.menu().mode() {
                                MenuMode::Vertical => MenuMode::Horizontal,
                                MenuMode::Horizontal => MenuMode::Vertical,
                            };
                            view.menu_mut().set_mode(mode);
                            continue;
                        }
                        _ => {}
                    }
                }
            }
            if let Some(input) = input_event_from_crossterm(ev) {
                match view.handle_event(input) {
                    MenuViewAction::Event(MenuEvent::Select { index, .. }) => {
                        last_event = format!("selected {index}");
                    }
                    MenuViewAction::Event(MenuEvent::Open { index, .. }) => {
                        last_event = format!("opened {index}");
                    }
                    MenuViewAction::Event(MenuEvent::Close { index, .. }) => {
                        last_event = format!("closed {index}");
                    }
                    MenuViewAction::Redraw | MenuViewAction::None => {}
                }
            }
        }
    }
}
