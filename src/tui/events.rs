//! Event handling for the browse TUI
//!
//! Maps key events to [`Action`]s and applies them to a [`BrowseSession`].
//! Terminal input is read on a blocking thread and forwarded over a channel
//! so the async loop can `select!` over it.

use crate::browse::BrowseSession;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Input(char),
    Backspace,
    ClearSearch,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    SwitchScope,
    NextCategory,
    PrevCategory,
    ToggleCategory,
    CycleTag,
    Refresh,
}

/// Map a key event to an action, if it has one
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => Action::CycleTag,
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::Refresh,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearSearch,
        (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Action::Input(c)
        }
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Right | KeyCode::PageDown, _) => Action::NextPage,
        (KeyCode::Left | KeyCode::PageUp, _) => Action::PrevPage,
        (KeyCode::Home, _) => Action::FirstPage,
        (KeyCode::End, _) => Action::LastPage,
        (KeyCode::Tab, _) => Action::SwitchScope,
        (KeyCode::Down, _) => Action::NextCategory,
        (KeyCode::Up, _) => Action::PrevCategory,
        (KeyCode::Enter, _) => Action::ToggleCategory,
        _ => return None,
    };
    Some(action)
}

/// Apply an action; returns `false` when the TUI should exit
pub fn apply(session: &mut BrowseSession, action: Action) -> bool {
    match action {
        Action::Quit => return false,
        Action::Input(c) => session.push_search_char(c),
        Action::Backspace => session.pop_search_char(),
        Action::ClearSearch => session.set_search_input(""),
        Action::NextPage => session.next_page(),
        Action::PrevPage => session.prev_page(),
        Action::FirstPage => session.jump_to(1),
        Action::LastPage => {
            let last = session.paginator().total_pages();
            session.jump_to(last);
        }
        Action::SwitchScope => session.switch_scope(),
        Action::NextCategory => session.cycle_category(true),
        Action::PrevCategory => session.cycle_category(false),
        Action::ToggleCategory => session.toggle_category(),
        Action::CycleTag => session.cycle_tag(),
        Action::Refresh => session.refresh(),
    }
    true
}

/// Forward terminal events to `tx` until `stop` is set or the receiver drops
pub fn spawn_input_reader(tx: UnboundedSender<Event>, stop: Arc<AtomicBool>) -> JoinHandle<()> {
    thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            match event::poll(POLL_INTERVAL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::browse::SessionConfig;
    use crate::query::StrategyRegistry;
    use crate::testing::StaticResource;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_plain_chars_are_search_input() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Input('q')));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT)),
            Some(Action::Input('B'))
        );
    }

    #[test]
    fn test_control_bindings() {
        assert_eq!(map_key(ctrl('t')), Some(Action::CycleTag));
        assert_eq!(map_key(ctrl('r')), Some(Action::Refresh));
        assert_eq!(map_key(ctrl('c')), Some(Action::Quit));
        assert_eq!(map_key(ctrl('x')), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Right)), Some(Action::NextPage));
        assert_eq!(map_key(key(KeyCode::Left)), Some(Action::PrevPage));
        assert_eq!(map_key(key(KeyCode::Tab)), Some(Action::SwitchScope));
        assert_eq!(map_key(key(KeyCode::Down)), Some(Action::NextCategory));
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Action::ToggleCategory));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }

    #[tokio::test]
    async fn test_apply_edits_search_and_quits() {
        let resource = Arc::new(StaticResource::new("model", Vec::new()));
        let client = ApiClient::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        let mut session = BrowseSession::new(
            client,
            StrategyRegistry::new(resource),
            SessionConfig::default(),
        );

        assert!(apply(&mut session, Action::Input('a')));
        assert!(apply(&mut session, Action::Input('b')));
        assert!(apply(&mut session, Action::Backspace));
        assert_eq!(session.view().search_input(), "a");

        assert!(apply(&mut session, Action::ClearSearch));
        assert_eq!(session.view().search_input(), "");

        assert!(!apply(&mut session, Action::Quit));
    }
}
