use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use ratatui_elements::backtop::Backtop;
use ratatui_elements::backtop::BacktopAction;
use ratatui_elements::crossterm_input::input_event_from_crossterm;
use ratatui_elements::dialog::Dialog;
use ratatui_elements::message::Message;
use ratatui_elements::message::MessageKind;
use ratatui_elements::message::MessageStack;
use ratatui_elements::notification::Notification;
use ratatui_elements::notification::NotificationStack;
use ratatui_elements::theme::Theme;
use std::io;
use std::time::Duration;
use std::time::Instant;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend<Error = io::Error>>(
    terminal: &mut Terminal<B>,
) -> io::Result<()> {
    let theme = Theme::default();
    let mut messages = MessageStack::new();
    let mut notifications = NotificationStack::default();
    let mut dialog = Dialog::new("About").with_body(vec![
        "ratatui-elements feedback demo".into(),
        "press Esc to close".into(),
    ]);
    let mut backtop = Backtop::new();
    let mut scroll: u32 = 0;
    let mut last_tick = Instant::now();

    loop {
        let dt = last_tick.elapsed();
        last_tick = Instant::now();
        messages.tick(dt);
        notifications.tick(dt);

        terminal.draw(|f| {
            let area = f.area();
            let buf = f.buffer_mut();
            buf.set_stringn(
                area.x,
                area.y + area.height.saturating_sub(1),
                format!(
                    "scroll {scroll}  [s/i/w/e message, n notification, d dialog, j/k scroll, t top, q quit]"
                ),
                area.width as usize,
                theme.text_muted,
            );
            messages.render(area, buf, &theme);
            notifications.render(area, buf, &theme);
            backtop.render(area, buf, &theme);
            dialog.render(area, buf, &theme);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let ev = crossterm::event::read()?;
        if let Event::Key(key) = &ev {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('s') => {
                        messages.push(Message::new("saved").with_kind(MessageKind::Success));
                    }
                    KeyCode::Char('i') => {
                        messages.push(Message::new("for your information"));
                    }
                    KeyCode::Char('w') => {
                        messages.push(Message::new("disk almost full").with_kind(MessageKind::Warning));
                    }
                    KeyCode::Char('e') => {
                        messages.push(Message::new("request failed").with_kind(MessageKind::Error));
                    }
                    KeyCode::Char('n') => {
                        notifications.push(Notification::new(
                            "update available",
                            "restart to apply the new version",
                        ));
                    }
                    KeyCode::Char('d') => dialog.open(),
                    KeyCode::Char('j') => {
                        scroll = scroll.saturating_add(40);
                        backtop.set_scroll(scroll);
                    }
                    KeyCode::Char('k') => {
                        scroll = scroll.saturating_sub(40);
                        backtop.set_scroll(scroll);
                    }
                    KeyCode::Char('t') => {
                        if backtop.activate() == BacktopAction::ScrollToTop {
                            scroll = 0;
                            backtop.set_scroll(0);
                        }
                    }
                    _ => {}
                }
            }
        }
        if let Some(input) = input_event_from_crossterm(ev) {
            dialog.handle_event(&input);
        }
    }
}
