//! Content view trait — the pluggable renderers behind each screen state.

use ratatui::{Frame, layout::Rect};

/// A renderer for one content view.
///
/// The dashboard calls `render` once per redraw for the active view only.
/// Implementations must stay inside `area`.
pub trait ContentView {
    /// Render into the provided frame area.
    fn render(&self, frame: &mut Frame, area: Rect);

    /// Identifier used in logs.
    fn id(&self) -> &str;
}
