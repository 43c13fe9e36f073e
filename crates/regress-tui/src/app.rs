//! Application core — startup, the blocking event loop, screen management.

use std::collections::HashMap;
use std::ops::ControlFlow;
use std::time::Duration;

use color_eyre::eyre::Result;
use tracing::{debug, info, trace, warn};

use crate::component::ContentView;
use crate::input::{KeyOutcome, describe_unsupported, interpret};
use crate::layout::{MIN_SIZE, Regions, TerminalSize};
use crate::render;
use crate::screen::ScreenState;
use crate::screens::create_views;
use crate::tui::Console;

/// Status line text before anything has happened.
pub const DEFAULT_STATUS: &str = "Status updates here";

/// Top-level dashboard state and event loop.
pub struct Dashboard {
    /// Current content view.
    state: ScreenState,
    /// Last queried terminal size.
    size: TerminalSize,
    /// Status line text, replaced on resize and unsupported keys.
    status: String,
    /// Content views, keyed by the state that shows them.
    views: HashMap<ScreenState, Box<dyn ContentView>>,
    /// Splash banner dwell, or None to skip it.
    splash: Option<Duration>,
}

impl Dashboard {
    /// Create a dashboard with the built-in content views.
    pub fn new(splash: Option<Duration>) -> Self {
        Self {
            state: ScreenState::default(),
            size: MIN_SIZE,
            status: DEFAULT_STATUS.to_owned(),
            views: create_views().into_iter().collect(),
            splash,
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn size(&self) -> TerminalSize {
        self.size
    }

    /// Run until the user quits. This is the heart of the TUI.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<()> {
        self.start(console)?;
        info!("dashboard event loop started");

        while self.step(console)?.is_continue() {}

        info!("dashboard event loop ended");
        Ok(())
    }

    /// Size check, splash banner, and the first full redraw.
    pub fn start<C: Console>(&mut self, console: &mut C) -> Result<()> {
        self.size = console.size()?;
        info!(size = %self.size, "dashboard starting");
        self.wait_for_minimum_size(console)?;

        if let Some(dwell) = self.splash {
            console.draw(render::splash)?;
            console.pause(dwell);
            // The terminal may have been resized while the banner was up.
            self.size = console.size()?;
            self.wait_for_minimum_size(console)?;
        }

        self.redraw(console)
    }

    /// Read one input code, apply it, and redraw unless it was quit.
    pub fn step<C: Console>(&mut self, console: &mut C) -> Result<ControlFlow<()>> {
        let code = console.read_code()?;
        let outcome = interpret(code);

        if self.apply(console, &outcome)?.is_break() {
            info!("quit requested");
            return Ok(ControlFlow::Break(()));
        }

        self.redraw(console)?;
        Ok(ControlFlow::Continue(()))
    }

    fn apply<C: Console>(
        &mut self,
        console: &mut C,
        outcome: &KeyOutcome,
    ) -> Result<ControlFlow<()>> {
        match outcome {
            KeyOutcome::Navigate(_) => {
                let next = self.state.apply(outcome);
                if next != self.state {
                    debug!("switching screen: {} → {}", self.state, next);
                }
                self.state = next;
            }

            KeyOutcome::Resize => {
                self.size = console.size()?;
                info!(size = %self.size, "terminal resized");
                self.wait_for_minimum_size(console)?;
                self.status = format!(
                    "Terminal resized to {} columns x {} rows",
                    self.size.cols, self.size.rows
                );
            }

            KeyOutcome::Unsupported { code, label } => {
                debug!(code, label = label.as_deref().unwrap_or("-"), "unsupported key");
                self.status = describe_unsupported(*code, label.as_deref());
            }

            KeyOutcome::Quit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Too-small sub-loop: show a warning and consume input until a resize
    /// brings the terminal back up to [`MIN_SIZE`]. Everything but resize
    /// is dropped, including quit.
    fn wait_for_minimum_size<C: Console>(&mut self, console: &mut C) -> Result<()> {
        if !self.size.is_below_minimum() {
            return Ok(());
        }

        warn!(size = %self.size, minimum = %MIN_SIZE, "terminal below minimum size");
        while self.size.is_below_minimum() {
            let size = self.size;
            console.draw(|frame| render::too_small(frame, size))?;

            loop {
                let code = console.read_code()?;
                if interpret(code) == KeyOutcome::Resize {
                    break;
                }
                debug!(%code, "ignoring input while terminal is too small");
            }
            self.size = console.size()?;
        }
        info!(size = %self.size, "terminal large enough again");
        Ok(())
    }

    fn redraw<C: Console>(&self, console: &mut C) -> Result<()> {
        let regions = Regions::compute(self.size);
        let view = self.views.get(&self.state).map(|view| &**view);
        trace!(view = view.map_or("-", ContentView::id), size = %self.size, "redraw");
        console.draw(|frame| render::redraw(frame, self.state, &regions, &self.status, view))
    }
}
