use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use log::warn;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }

    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Maps a raw crossterm event onto a `TuiEvent`. Unhandled input yields `None`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Only presses; releases show up when the terminal reports event types
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) | (_, KeyCode::Char(' ')) => Some(TuiEvent::ScrollPageDown),
        (_, KeyCode::Home) => Some(TuiEvent::ScrollToTop),
        (_, KeyCode::End) => Some(TuiEvent::ScrollToBottom),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate(key(KeyCode::Char('q'), KeyModifiers::NONE)), Some(TuiEvent::Quit));
        assert_eq!(translate(key(KeyCode::Esc, KeyModifiers::NONE)), Some(TuiEvent::Quit));
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_scroll_keys() {
        assert_eq!(translate(key(KeyCode::Up, KeyModifiers::NONE)), Some(TuiEvent::ScrollUp));
        assert_eq!(translate(key(KeyCode::Down, KeyModifiers::NONE)), Some(TuiEvent::ScrollDown));
        assert_eq!(translate(key(KeyCode::PageDown, KeyModifiers::NONE)), Some(TuiEvent::ScrollPageDown));
        assert_eq!(translate(key(KeyCode::Home, KeyModifiers::NONE)), Some(TuiEvent::ScrollToTop));
        assert_eq!(translate(key(KeyCode::End, KeyModifiers::NONE)), Some(TuiEvent::ScrollToBottom));
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_mouse_wheel() {
        let wheel = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(wheel), Some(TuiEvent::ScrollDown));
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
