//! Event handler for processing input events.

use super::{InputEvent, Key, KeyBinding};
use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::Action;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Key bindings resolved from their config strings.
#[derive(Debug, Clone, Copy)]
struct Bindings {
    quit: KeyBinding,
    help: KeyBinding,
    up: KeyBinding,
    down: KeyBinding,
    back: KeyBinding,
    refresh: KeyBinding,
}

impl Bindings {
    fn parse(config: &KeyBindings) -> Result<Self> {
        Ok(Self {
            quit: config.quit.parse()?,
            help: config.help.parse()?,
            up: config.up.parse()?,
            down: config.down.parse()?,
            back: config.back.parse()?,
            refresh: config.refresh.parse()?,
        })
    }
}

/// Handles input events and produces actions.
pub struct EventHandler {
    bindings: Bindings,
    poll_timeout: Duration,
}

impl EventHandler {
    /// Create a new event handler. Fails on a binding that doesn't parse.
    pub fn new(keybindings: &KeyBindings, tick_rate_ms: u64) -> Result<Self> {
        Ok(Self {
            bindings: Bindings::parse(keybindings)?,
            poll_timeout: Duration::from_millis(tick_rate_ms),
        })
    }

    /// Get the next action from user input.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            let event = event::read()?;
            match event {
                CrosstermEvent::Key(key) => return Ok(self.handle_key(key)),
                CrosstermEvent::Mouse(mouse) => return Ok(self.handle_mouse(mouse)),
                CrosstermEvent::Resize(_, _) => {
                    // Terminal will automatically redraw
                }
                _ => {}
            }
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }
        self.handle_input(InputEvent::from(key))
    }

    fn handle_input(&self, input: InputEvent) -> Option<Action> {
        let b = &self.bindings;

        if input.matches(&b.quit) || (input.ctrl() && input.key == Key::Char('c')) {
            return Some(Action::Quit);
        }
        if input.matches(&b.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&b.back) {
            return Some(Action::DismissOverlay);
        }
        if input.matches(&b.refresh) {
            return Some(Action::Refresh);
        }

        // Company selection
        if input.matches(&b.down) || input.key == Key::Down {
            return Some(Action::NextCompany);
        }
        if input.matches(&b.up) || input.key == Key::Up {
            return Some(Action::PreviousCompany);
        }

        match input.key {
            Key::Home => Some(Action::FirstCompany),
            Key::End => Some(Action::LastCompany),
            Key::PageUp => Some(Action::PageNewsUp),
            Key::PageDown => Some(Action::PageNewsDown),
            Key::Char(c @ '1'..='9') => Some(Action::SelectCompany(c as usize - '1' as usize)),
            Key::Char('0') => Some(Action::SelectCompany(9)),
            _ => None,
        }
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollNewsUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollNewsDown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn handler() -> EventHandler {
        EventHandler::new(&KeyBindings::default(), 250).unwrap()
    }

    fn press(code: KeyCode) -> Option<Action> {
        handler().handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_default_bindings() {
        assert!(matches!(press(KeyCode::Char('q')), Some(Action::Quit)));
        assert!(matches!(press(KeyCode::Char('?')), Some(Action::ToggleHelp)));
        assert!(matches!(press(KeyCode::Esc), Some(Action::DismissOverlay)));
        assert!(matches!(press(KeyCode::Char('r')), Some(Action::Refresh)));
        assert!(matches!(press(KeyCode::Char('j')), Some(Action::NextCompany)));
        assert!(matches!(press(KeyCode::Down), Some(Action::NextCompany)));
        assert!(matches!(press(KeyCode::Char('k')), Some(Action::PreviousCompany)));
        assert!(matches!(press(KeyCode::Up), Some(Action::PreviousCompany)));
        assert!(matches!(press(KeyCode::PageDown), Some(Action::PageNewsDown)));
        assert!(matches!(press(KeyCode::PageUp), Some(Action::PageNewsUp)));
        assert!(press(KeyCode::Char('x')).is_none());
    }

    #[test]
    fn test_digits_select_directly() {
        assert!(matches!(press(KeyCode::Char('1')), Some(Action::SelectCompany(0))));
        assert!(matches!(press(KeyCode::Char('0')), Some(Action::SelectCompany(9))));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let action = handler().handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(action, Some(Action::Quit)));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(handler().handle_key(key).is_none());
    }

    #[test]
    fn test_custom_binding() {
        let bindings = KeyBindings {
            quit: "Ctrl+x".to_string(),
            ..KeyBindings::default()
        };
        let handler = EventHandler::new(&bindings, 250).unwrap();
        assert!(handler
            .handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))
            .is_none());
        assert!(matches!(
            handler.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_invalid_binding_is_config_error() {
        let bindings = KeyBindings {
            refresh: "nope".to_string(),
            ..KeyBindings::default()
        };
        assert!(matches!(
            EventHandler::new(&bindings, 250),
            Err(crate::Error::Config(_))
        ));
    }

    #[test]
    fn test_mouse_wheel_scrolls_news() {
        let scroll = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(matches!(
            handler().handle_mouse(scroll(MouseEventKind::ScrollDown)),
            Some(Action::ScrollNewsDown)
        ));
        assert!(matches!(
            handler().handle_mouse(scroll(MouseEventKind::ScrollUp)),
            Some(Action::ScrollNewsUp)
        ));
    }
}
