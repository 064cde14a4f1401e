//! Input event types and key mappings.

use crate::error::{Error, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::str::FromStr;

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Unknown,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unknown,
        }
    }
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            shift: mods.contains(KeyModifiers::SHIFT),
        }
    }
}

/// A key binding parsed from its config string (e.g. "Ctrl+q", "Enter", "?").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl FromStr for KeyBinding {
    type Err = Error;

    fn from_str(binding: &str) -> Result<Self> {
        let mut modifiers = Modifiers::default();
        let mut key = None;

        // A lone "+" is the plus key, not a separator.
        let parts: Vec<&str> = if binding == "+" {
            vec!["+"]
        } else {
            binding.split('+').collect()
        };

        for part in parts {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                _ if key.is_some() => {
                    return Err(Error::config(format!(
                        "Key binding {:?} names more than one key",
                        binding
                    )));
                }
                _ => key = Some(parse_key(part, binding)?),
            }
        }

        let key = key.ok_or_else(|| {
            Error::config(format!("Key binding {:?} has no key", binding))
        })?;
        Ok(Self { key, modifiers })
    }
}

fn parse_key(part: &str, binding: &str) -> Result<Key> {
    let lower = part.to_lowercase();
    let key = match lower.as_str() {
        "enter" => Key::Enter,
        "esc" | "escape" => Key::Escape,
        "backspace" => Key::Backspace,
        "tab" => Key::Tab,
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "space" => Key::Char(' '),
        s if s.len() > 1 && s.starts_with('f') => s[1..]
            .parse::<u8>()
            .map(Key::F)
            .map_err(|_| Error::config(format!("Unknown key in binding {:?}", binding)))?,
        _ => {
            let mut chars = part.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c.to_ascii_lowercase()),
                _ => {
                    return Err(Error::config(format!(
                        "Unknown key in binding {:?}",
                        binding
                    )));
                }
            }
        }
    };
    Ok(key)
}

/// A processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            modifiers: Modifiers::from(event.modifiers),
        }
    }
}

impl InputEvent {
    /// Create a new input event.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Check if Ctrl is held.
    pub fn ctrl(&self) -> bool {
        self.modifiers.ctrl
    }

    /// Check if this event triggers a binding.
    ///
    /// Shift is ignored for characters: terminals report `?` as Shift+`/`
    /// on some layouts.
    pub fn matches(&self, binding: &KeyBinding) -> bool {
        if self.modifiers.ctrl != binding.modifiers.ctrl
            || self.modifiers.alt != binding.modifiers.alt
        {
            return false;
        }

        match (self.key, binding.key) {
            (Key::Char(got), Key::Char(want)) => got.to_ascii_lowercase() == want,
            (got, want) => got == want && self.modifiers.shift == binding.modifiers.shift,
        }
    }
}
