//! Raw input codes — crossterm events flattened to curses-style key numbers.
//!
//! The dispatcher works on plain integers so that every keypress, resize
//! and unknown key has exactly one representation. Printable characters
//! keep their code point; special keys use the classic curses `KEY_*`
//! values.

use std::fmt;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One raw input code as read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawCode(pub u32);

/// `KEY_F0`; `KEY_F(n)` is `F0 + n`.
const KEY_F0: u32 = 264;
/// Highest function key curses defines.
const KEY_F_MAX: u32 = 63;

impl RawCode {
    pub const TAB: Self = Self(9);
    pub const ENTER: Self = Self(10);
    pub const ESCAPE: Self = Self(27);
    pub const DOWN: Self = Self(258);
    pub const UP: Self = Self(259);
    pub const LEFT: Self = Self(260);
    pub const RIGHT: Self = Self(261);
    pub const HOME: Self = Self(262);
    pub const BACKSPACE: Self = Self(263);
    pub const DELETE: Self = Self(330);
    pub const INSERT: Self = Self(331);
    pub const PAGE_DOWN: Self = Self(338);
    pub const PAGE_UP: Self = Self(339);
    pub const BACK_TAB: Self = Self(353);
    pub const END: Self = Self(360);
    pub const RESIZE: Self = Self(410);

    /// Code for function key `n` (F1 = 265).
    pub fn function(n: u8) -> Self {
        Self(KEY_F0 + u32::from(n))
    }

    /// Code for a plain character key.
    pub fn char(c: char) -> Self {
        Self(u32::from(c))
    }

    /// Function key number if this is F1–F63.
    pub fn function_number(self) -> Option<u8> {
        match self.0.checked_sub(KEY_F0) {
            Some(n @ 1..=KEY_F_MAX) => u8::try_from(n).ok(),
            _ => None,
        }
    }

    /// Translate a terminal event. Events that are not keypresses or
    /// resizes (mouse, focus, paste, key release) have no code.
    pub fn from_event(event: &CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Resize(_, _) => Some(Self::RESIZE),
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Self::from_key(key),
            _ => None,
        }
    }

    /// Translate a keypress. Keys curses has no number for yield None.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        let code = match key.code {
            // Control chords arrive as the ASCII control code, ^A = 1.
            KeyCode::Char(c)
                if key.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() =>
            {
                Self(u32::from(c.to_ascii_lowercase()) - u32::from('a') + 1)
            }
            KeyCode::Char(c) => Self::char(c),
            KeyCode::Tab => Self::TAB,
            KeyCode::Enter => Self::ENTER,
            KeyCode::Esc => Self::ESCAPE,
            KeyCode::F(n) => Self::function(n),
            KeyCode::Down => Self::DOWN,
            KeyCode::Up => Self::UP,
            KeyCode::Left => Self::LEFT,
            KeyCode::Right => Self::RIGHT,
            KeyCode::Home => Self::HOME,
            KeyCode::Backspace => Self::BACKSPACE,
            KeyCode::Delete => Self::DELETE,
            KeyCode::Insert => Self::INSERT,
            KeyCode::PageDown => Self::PAGE_DOWN,
            KeyCode::PageUp => Self::PAGE_UP,
            KeyCode::BackTab => Self::BACK_TAB,
            KeyCode::End => Self::END,
            _ => return None,
        };
        Some(code)
    }
}

impl fmt::Display for RawCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn characters_keep_their_code_point() {
        assert_eq!(
            RawCode::from_event(&press(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(RawCode(81))
        );
        assert_eq!(
            RawCode::from_event(&press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(RawCode(113))
        );
    }

    #[test]
    fn function_keys_use_curses_numbers() {
        assert_eq!(
            RawCode::from_event(&press(KeyCode::F(1), KeyModifiers::NONE)),
            Some(RawCode(265))
        );
        assert_eq!(
            RawCode::from_event(&press(KeyCode::F(6), KeyModifiers::NONE)),
            Some(RawCode(270))
        );
        assert_eq!(RawCode(270).function_number(), Some(6));
        assert_eq!(RawCode(264).function_number(), None);
        assert_eq!(RawCode(113).function_number(), None);
        assert_eq!(RawCode::RESIZE.function_number(), None);
    }

    #[test]
    fn control_chords_become_control_codes() {
        assert_eq!(
            RawCode::from_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(RawCode(3))
        );
        assert_eq!(
            RawCode::from_event(&press(KeyCode::Char('A'), KeyModifiers::CONTROL)),
            Some(RawCode(1))
        );
    }

    #[test]
    fn resize_is_a_code() {
        assert_eq!(
            RawCode::from_event(&CrosstermEvent::Resize(100, 15)),
            Some(RawCode::RESIZE)
        );
    }

    #[test]
    fn non_key_events_are_skipped() {
        let release = CrosstermEvent::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        let mouse = CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });

        assert_eq!(RawCode::from_event(&release), None);
        assert_eq!(RawCode::from_event(&mouse), None);
        assert_eq!(RawCode::from_event(&CrosstermEvent::FocusGained), None);
        assert_eq!(
            RawCode::from_event(&press(KeyCode::CapsLock, KeyModifiers::NONE)),
            None
        );
    }
}
