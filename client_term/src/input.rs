//! Keyboard input handling
//!
//! Terminals report key presses, and only report releases when the keyboard
//! enhancement protocol is active. Without releases a press counts as held for
//! a short window that auto-repeat keeps refreshing.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{Control, InputSource, MenuKey};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Ticks a press stays held when no release event will arrive
const HOLD_TICKS: u8 = 8;

/// Map a key code to the paddle control it drives
pub fn control_for(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Control::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Control::Down),
        _ => None,
    }
}

/// Map a key code to its replay menu meaning
pub fn menu_key_for(code: KeyCode) -> MenuKey {
    match code {
        KeyCode::Char('3') => MenuKey::Three,
        KeyCode::Char('5') => MenuKey::Five,
        KeyCode::Char('7') => MenuKey::Seven,
        KeyCode::Esc => MenuKey::Escape,
        _ => MenuKey::Other,
    }
}

#[derive(Debug, Default)]
pub struct TermInput {
    up: u8, // Ticks left held
    down: u8,
    keys: VecDeque<MenuKey>,
    quit: bool,
    resized: Option<(u16, u16)>,
    release_events: bool,
}

impl TermInput {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            ..Self::default()
        }
    }

    /// Drain pending terminal events without blocking. Call once per tick
    pub fn poll(&mut self) -> io::Result<()> {
        if !self.release_events {
            self.up = self.up.saturating_sub(1);
            self.down = self.down.saturating_sub(1);
        }

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => self.on_key(key),
                Event::Resize(cols, rows) => self.resized = Some((cols, rows)),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        let held = match key.kind {
            KeyEventKind::Press => {
                self.keys.push_back(menu_key_for(key.code));
                HOLD_TICKS
            }
            KeyEventKind::Repeat => HOLD_TICKS,
            KeyEventKind::Release => 0,
        };

        match control_for(key.code) {
            Some(Control::Up) => self.up = held,
            Some(Control::Down) => self.down = held,
            _ => {}
        }
    }

    /// New terminal size, if it changed since the last call
    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resized.take()
    }
}

impl InputSource for TermInput {
    fn is_held(&self, control: Control) -> bool {
        match control {
            Control::Up => self.up > 0,
            Control::Down => self.down > 0,
            Control::Quit => self.quit,
        }
    }

    fn next_key(&mut self) -> Option<MenuKey> {
        self.keys.pop_front()
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(control_for(KeyCode::Char('w')), Some(Control::Up));
        assert_eq!(control_for(KeyCode::Down), Some(Control::Down));
        assert_eq!(control_for(KeyCode::Char('3')), None);
        assert_eq!(menu_key_for(KeyCode::Char('7')), MenuKey::Seven);
        assert_eq!(menu_key_for(KeyCode::Esc), MenuKey::Escape);
        assert_eq!(menu_key_for(KeyCode::Char('w')), MenuKey::Other);
    }

    #[test]
    fn test_press_then_release() {
        let mut input = TermInput::new(true);
        input.on_key(key(KeyCode::Char('s'), KeyEventKind::Press));
        assert!(input.is_held(Control::Down));
        assert!(!input.is_held(Control::Up));

        input.on_key(key(KeyCode::Char('s'), KeyEventKind::Release));
        assert!(!input.is_held(Control::Down));
    }

    #[test]
    fn test_presses_queue_menu_keys() {
        let mut input = TermInput::new(false);
        input.on_key(key(KeyCode::Char('5'), KeyEventKind::Press));
        input.on_key(key(KeyCode::Esc, KeyEventKind::Press));
        input.on_key(key(KeyCode::Char('5'), KeyEventKind::Release));

        assert_eq!(input.next_key(), Some(MenuKey::Five));
        assert_eq!(input.next_key(), Some(MenuKey::Escape));
        assert_eq!(input.next_key(), None);
    }

    #[test]
    fn test_ctrl_c_requests_quit() {
        let mut input = TermInput::new(false);
        input.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(input.quit_requested());
    }
}
