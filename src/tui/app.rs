//! Terminal setup and the browse event loop

use super::error::{Result, UiError};
use super::events::{self, Action};
use super::theme::Theme;
use super::widgets::{HelpBar, ItemList, KeyHint, PageFooter, SearchBar, TagSidebar};
use crate::browse::{BrowseSession, SessionEvent};
use crossterm::event::Event;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, IsTerminal, Stdout};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;
use tracing::debug;

type Tui = Terminal<CrosstermBackend<Stdout>>;

enum Wake {
    Input(Option<Event>),
    Session(SessionEvent),
}

/// Run the browse screen until the user quits
///
/// The session is shut down before returning, aborting any fetch still in
/// flight.
///
/// # Errors
///
/// Returns `UiError` if stdout is not a terminal or terminal I/O fails.
pub async fn run(mut session: BrowseSession) -> Result<()> {
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return Err(UiError::NotATerminal);
    }

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut session).await;
    session.shutdown();
    cleanup_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

fn cleanup_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn event_loop(terminal: &mut Tui, session: &mut BrowseSession) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let stop = Arc::new(AtomicBool::new(false));
    let reader = events::spawn_input_reader(tx, Arc::clone(&stop));

    let theme = Theme::from_env();
    let hints = HelpBar::default_hints();

    let result = loop {
        if let Err(e) = terminal.draw(|frame| render(frame, session, &theme, &hints)) {
            break Err(e.into());
        }

        let wake = tokio::select! {
            input = rx.recv() => Wake::Input(input),
            event = session.next_event() => Wake::Session(event),
        };

        match wake {
            Wake::Input(None) => break Err(UiError::InputClosed),
            Wake::Input(Some(Event::Key(key))) => {
                if let Some(action) = events::map_key(key) {
                    if action == Action::Quit {
                        break Ok(());
                    }
                    events::apply(session, action);
                }
            }
            Wake::Input(Some(_)) => {}
            Wake::Session(event) => debug!(?event, "session event"),
        }
    };

    stop.store(true, Ordering::Relaxed);
    drop(rx);
    let _ = reader.join();
    result
}

fn render(frame: &mut Frame, session: &BrowseSession, theme: &Theme, hints: &[KeyHint]) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Items + tag sidebar
            Constraint::Length(1), // Page window
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_layout[1]);

    let view = session.view();
    let label = session.resource().label();

    let search = SearchBar::new(view.search_input(), label, theme).pending(view.search_pending());
    frame.render_widget(search, main_layout[0]);

    let title = format!(" {label} · page {} ", view.page());
    let list = match session.items() {
        Some(state) => ItemList::new(&state.data.items, theme)
            .loading(state.loading)
            .error(state.error.as_deref()),
        None => ItemList::new(&[], theme).loading(true),
    };
    frame.render_widget(list.title(title), body[0]);

    let tags = session.tags();
    let sidebar = TagSidebar::new(view.tags(), theme).error(tags.error.as_deref());
    frame.render_widget(sidebar, body[1]);

    frame.render_widget(PageFooter::new(session.paginator(), theme), main_layout[2]);
    frame.render_widget(HelpBar::new(hints, theme), main_layout[3]);
}
