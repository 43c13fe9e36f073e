//! Input dispatcher — turns one raw code into exactly one [`KeyOutcome`].

use crate::event::RawCode;
use crate::screen::ScreenState;

/// Highest code treated as a plain character for label guessing.
const PRINTABLE_MAX: u32 = 126;

/// Best-effort names for special keys that do nothing in the dashboard.
/// Only used to describe a keypress on the status line.
pub const KNOWN_UNSUPPORTED_KEYS: &[(RawCode, &str)] = &[
    (RawCode::DOWN, "Down Arrow"),
    (RawCode::UP, "Up Arrow"),
    (RawCode::LEFT, "Left Arrow"),
    (RawCode::RIGHT, "Right Arrow"),
    (RawCode::HOME, "Home"),
    (RawCode::BACKSPACE, "Backspace"),
    (RawCode(265), "F1"),
    (RawCode(266), "F2"),
    (RawCode(267), "F3"),
    (RawCode(268), "F4"),
    (RawCode(273), "F9"),
    (RawCode(274), "F10"),
    (RawCode(275), "F11"),
    (RawCode(276), "F12"),
    (RawCode::DELETE, "Delete"),
    (RawCode::INSERT, "Insert"),
    (RawCode::PAGE_DOWN, "Page Down"),
    (RawCode::PAGE_UP, "Page Up"),
    (RawCode::BACK_TAB, "Shift+Tab"),
    (RawCode::END, "End"),
];

/// What the controller should do with one input code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Switch the content view.
    Navigate(ScreenState),
    /// The terminal changed size; re-query it.
    Resize,
    /// Leave the main loop.
    Quit,
    /// Nothing is bound to this code.
    Unsupported { code: u32, label: Option<String> },
}

/// Interpret a raw code. Navigation keys win over resize, resize over quit,
/// and anything else is reported as unsupported.
pub fn interpret(code: RawCode) -> KeyOutcome {
    if let Some(state) = code
        .function_number()
        .and_then(ScreenState::from_function_key)
    {
        return KeyOutcome::Navigate(state);
    }

    if code == RawCode::RESIZE {
        return KeyOutcome::Resize;
    }

    if code == RawCode::char('q') || code == RawCode::char('Q') {
        return KeyOutcome::Quit;
    }

    KeyOutcome::Unsupported {
        code: code.0,
        label: guess_label(code),
    }
}

/// Guess which key produced `code`.
///
/// Anything up to 126 is assumed to be a literal character, even though
/// terminals send some control sequences in that range too.
pub fn guess_label(code: RawCode) -> Option<String> {
    if code.0 <= PRINTABLE_MAX {
        let c = char::from_u32(code.0)?;
        let shown = if c.is_control() {
            c.escape_default().to_string()
        } else {
            c.to_string()
        };
        return Some(format!("Probably the '{shown}' key"));
    }

    KNOWN_UNSUPPORTED_KEYS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| format!("Probably the '{name}' key"))
}

/// Status line text for an unsupported key.
pub fn describe_unsupported(code: u32, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("Unsupported key code {code}: {label}"),
        None => format!("Unsupported key code {code}"),
    }
}
