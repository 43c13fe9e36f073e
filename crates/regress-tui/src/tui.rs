//! Terminal initialization, restoration, and panic-safe cleanup.
//!
//! Wraps the crossterm + ratatui terminal lifecycle so the rest of the app
//! never has to think about raw mode or alternate screen. The dashboard
//! only talks to the terminal through the [`Console`] trait.

use std::io::{Stdout, stdout};
use std::time::Duration;

use color_eyre::eyre::{Result, bail};
use crossterm::{
    ExecutableCommand, cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tracing::{trace, warn};

use crate::event::RawCode;
use crate::layout::TerminalSize;

pub type Backend = CrosstermBackend<Stdout>;

/// The terminal as the dashboard sees it.
pub trait Console {
    /// Block until the next input code (keypress or resize).
    fn read_code(&mut self) -> Result<RawCode>;

    /// Current terminal dimensions.
    fn size(&mut self) -> Result<TerminalSize>;

    /// Draw and flush one frame.
    fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame);

    /// Block without reading input.
    fn pause(&mut self, duration: Duration);
}

/// Terminal wrapper that handles setup, teardown, and panic recovery.
pub struct Tui {
    pub terminal: Terminal<Backend>,
}

impl Tui {
    /// Create a new terminal instance (does NOT enter raw mode yet).
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    /// Enter TUI mode: alternate screen, raw mode, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(cursor::Hide)?;
        self.terminal.clear()?;
        Ok(())
    }
}

impl Console for Tui {
    fn read_code(&mut self) -> Result<RawCode> {
        loop {
            if let Some(code) = translate(&event::read()?)? {
                return Ok(code);
            }
        }
    }

    fn size(&mut self) -> Result<TerminalSize> {
        // Pick up the new size before the next draw so the diff starts clean.
        self.terminal.autoresize()?;
        Ok(TerminalSize::from(self.terminal.size()?))
    }

    fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Translate one terminal event into an input code.
///
/// Raw mode stops the terminal from turning Ctrl+C into SIGINT, so the
/// chord is handled here as an interrupt: an error that unwinds every loop,
/// the too-small wait included, and lets `main` restore the terminal.
pub fn translate(event: &Event) -> Result<Option<RawCode>> {
    let interrupt = matches!(
        event,
        Event::Key(key)
            if key.kind == KeyEventKind::Press
                && key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c' | 'C'))
    );
    if interrupt {
        warn!("interrupted by Ctrl+C");
        bail!("interrupted");
    }

    let code = RawCode::from_event(event);
    if code.is_none() {
        trace!(?event, "ignoring event without a key code");
    }
    Ok(code)
}

impl Drop for Tui {
    /// Exit TUI mode: restore terminal to its original state.
    fn drop(&mut self) {
        restore();
    }
}

/// Best-effort restoration; partial failures are ignored.
fn restore() {
    let _ = stdout().execute(cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Install panic and error hooks that restore the terminal before printing.
///
/// Must be called BEFORE entering the terminal, so panics during init
/// also get clean output.
pub fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .into_hooks();

    eyre_hook.install()?;

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        panic_hook(info);
    }));

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn ctrl_c_interrupts() {
        for c in ['c', 'C'] {
            let err = translate(&press(KeyCode::Char(c), KeyModifiers::CONTROL)).unwrap_err();
            assert_eq!(err.to_string(), "interrupted");
        }
    }

    #[test]
    fn other_chords_and_keys_pass_through() {
        assert_eq!(
            translate(&press(KeyCode::Char('d'), KeyModifiers::CONTROL)).unwrap(),
            Some(RawCode(4))
        );
        assert_eq!(
            translate(&press(KeyCode::Char('c'), KeyModifiers::NONE)).unwrap(),
            Some(RawCode::char('c'))
        );
        assert_eq!(translate(&Event::FocusGained).unwrap(), None);
    }
}
