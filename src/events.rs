use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::{App, Control};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Dispatch a terminal event to the app.
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        // Terminal will redraw on next iteration
        _ => {}
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Only handle key press events (not release)
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // Direct controls
        KeyCode::Char('s') => app.press(Control::Start),
        KeyCode::Char('x') => app.press(Control::Stop),

        // Button focus
        KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Char('h')
        | KeyCode::Char('l') => app.toggle_focus(),

        // Press focused button
        KeyCode::Enter | KeyCode::Char(' ') => app.press_focused(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if app.show_help {
            app.show_help = false;
            return;
        }
        if let Some(control) = app.control_areas.hit(mouse.column, mouse.row) {
            app.focus = control;
            app.press(control);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ControlAreas, MonitorState};
    use crate::source::SimulatedSource;
    use crate::ui::Theme;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn app() -> App {
        App::new(Box::new(SimulatedSource::with_seed(21)), Theme::dark())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_and_stop_keys() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('s')));
        assert_eq!(app.state, MonitorState::Active);

        handle_key_event(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.state, MonitorState::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_presses_focused_button() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.state, MonitorState::Active);
        assert_eq!(app.focus, Control::Stop);

        handle_key_event(&mut app, press(KeyCode::Char(' ')));
        assert_eq!(app.state, MonitorState::Stopped);
    }

    #[test]
    fn test_tab_moves_focus() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus, Control::Stop);
        handle_key_event(&mut app, press(KeyCode::Left));
        assert_eq!(app.focus, Control::Start);
    }

    #[test]
    fn test_stop_key_ignored_when_idle() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.state, MonitorState::Ready);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key_event(&mut app, release);
        assert!(app.running);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = self::app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('?')));
        assert!(app.show_help);

        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_presses_button() {
        let mut app = app();
        app.control_areas = ControlAreas {
            start: Rect::new(1, 1, 20, 1),
            stop: Rect::new(23, 1, 8, 1),
        };

        handle_mouse_event(&mut app, click(5, 1));
        assert_eq!(app.state, MonitorState::Active);

        handle_mouse_event(&mut app, click(25, 1));
        assert_eq!(app.state, MonitorState::Stopped);
        assert_eq!(app.focus, Control::Start);

        handle_mouse_event(&mut app, click(50, 10));
        assert_eq!(app.state, MonitorState::Stopped);
    }
}
