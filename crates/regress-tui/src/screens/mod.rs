//! Content view implementations, one per navigable screen state.
//!
//! The regression tool's real settings editor, file picker, run summary,
//! and log viewer live outside the dashboard core. Until they are wired in,
//! each state gets a `PlaceholderView` describing what belongs there.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
};

use crate::component::ContentView;
use crate::screen::ScreenState;
use crate::theme;

/// Renders a short description of the view it stands in for.
pub struct PlaceholderView {
    state: ScreenState,
}

impl PlaceholderView {
    pub fn new(state: ScreenState) -> Self {
        Self { state }
    }

    fn description(&self) -> &'static str {
        match self.state {
            ScreenState::Settings => {
                "Regression settings: build directories, the test subset, and run options."
            }
            ScreenState::FileSelection => {
                "Choose the input files to include in the next regression run."
            }
            ScreenState::LastRunSummary => {
                "Results of the most recent regression run are summarized here."
            }
            ScreenState::LogMessages => "Messages logged during regression runs are listed here.",
            ScreenState::Unknown => "",
        }
    }
}

impl ContentView for PlaceholderView {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let area = area.intersection(frame.area());
        if area.is_empty() {
            return;
        }

        let text = Text::from(vec![
            Line::from(""),
            Line::from(format!(" {}", self.description())),
        ]);
        let paragraph = Paragraph::new(text)
            .style(theme::regular())
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn id(&self) -> &str {
        self.state.label()
    }
}

/// Create one view per navigable state.
pub fn create_views() -> Vec<(ScreenState, Box<dyn ContentView>)> {
    ScreenState::NAVIGABLE
        .iter()
        .map(|&state| {
            let view: Box<dyn ContentView> = Box::new(PlaceholderView::new(state));
            (state, view)
        })
        .collect()
}
