//! Render coordinator — draws whole frames in a fixed order.
//!
//! A redraw clears everything and paints title, rule, content, rule,
//! navigation, rule, status, in that order. The middle rule is painted over
//! the content region's last row, so the order matters. The frame is
//! flushed once by the caller's `draw`, which makes every redraw atomic.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::component::ContentView;
use crate::layout::{MIN_SIZE, Regions, TerminalSize};
use crate::screen::ScreenState;
use crate::theme;

/// Static title bar label.
pub const TITLE: &str = "The Curses of the EnergyPlus Regression Tool";

/// Columns between the starts of consecutive navigation entries.
const NAV_STRIDE: u16 = 25;
/// Width of one navigation entry; the divider starts right after it.
const NAV_ENTRY_WIDTH: u16 = 20;
const NAV_DIVIDER: &str = " ||| ";

/// Block-letter banner shown while the dashboard starts.
const BANNER: &str = r" ____                              _               _____           _
|  _ \ ___  __ _ _ __ ___  ___ ___(_) ___  _ __   |_   _|__   ___ | |
| |_) / _ \/ _` | '__/ _ \/ __/ __| |/ _ \| '_ \    | |/ _ \ / _ \| |
|  _ <  __/ (_| | | |  __/\__ \__ \ | (_) | | | |   | | (_) | (_) | |
|_| \_\___|\__, |_|  \___||___/___/_|\___/|_| |_|   |_|\___/ \___/|_|
           |___/";

/// Draw the full dashboard.
pub fn redraw(
    frame: &mut Frame,
    state: ScreenState,
    regions: &Regions,
    status: &str,
    view: Option<&dyn ContentView>,
) {
    frame.render_widget(Clear, frame.area());

    draw_title(frame, regions.title);
    draw_separator(frame, regions.separators[0]);
    draw_content(frame, state, regions, view);
    draw_separator(frame, regions.separators[1]);
    draw_navigation(frame, regions.navigation);
    draw_separator(frame, regions.separators[2]);
    draw_status(frame, regions.status, status);
}

/// Navigation bar entries: one per navigable view, then quit.
pub fn navigation_entries() -> Vec<String> {
    let mut entries: Vec<String> = ScreenState::NAVIGABLE
        .iter()
        .filter_map(|state| {
            let key = state.function_key()?;
            let label = format!("{}:", state.label());
            Some(format!("{label:<16}F{key}  "))
        })
        .collect();
    entries.push(format!("{:<16} Q  ", "Quit Program:"));
    entries
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let area = clamp(frame, Rect { height: 1, ..area });
    frame.render_widget(
        Paragraph::new(Span::styled(TITLE, theme::title())),
        area,
    );
}

fn draw_separator(frame: &mut Frame, row: u16) {
    let area = clamp(frame, Rect::new(0, row, frame.area().width, 1));
    if area.is_empty() {
        return;
    }
    frame.render_widget(
        Block::new()
            .borders(Borders::TOP)
            .border_style(theme::border()),
        area,
    );
}

fn draw_content(
    frame: &mut Frame,
    state: ScreenState,
    regions: &Regions,
    view: Option<&dyn ContentView>,
) {
    let header_style = match state {
        ScreenState::Unknown => theme::alert(),
        ScreenState::Settings
        | ScreenState::FileSelection
        | ScreenState::LastRunSummary
        | ScreenState::LogMessages => theme::header_active(),
    };
    let header_area = clamp(frame, regions.content_header());
    frame.render_widget(
        Paragraph::new(Span::styled(state.header(), header_style)),
        header_area,
    );

    if let Some(view) = view {
        let body = clamp(frame, regions.content_body());
        if !body.is_empty() {
            view.render(frame, body);
        }
    }
}

fn draw_navigation(frame: &mut Frame, area: Rect) {
    let area = clamp(frame, area);
    if area.is_empty() {
        return;
    }

    let entries = navigation_entries();
    let last = entries.len().saturating_sub(1);
    let right = area.right();
    let buf = frame.buffer_mut();

    for (slot, entry) in (0u16..).zip(entries.iter()) {
        let x = area.x.saturating_add(slot.saturating_mul(NAV_STRIDE));
        if x >= right {
            break;
        }
        buf.set_stringn(x, area.y, entry, usize::from(right - x), theme::regular());

        let divider_x = x.saturating_add(NAV_ENTRY_WIDTH);
        if usize::from(slot) < last && divider_x < right {
            buf.set_stringn(
                divider_x,
                area.y,
                NAV_DIVIDER,
                usize::from(right - divider_x),
                theme::regular(),
            );
        }
    }
}

fn draw_status(frame: &mut Frame, area: Rect, status: &str) {
    let area = clamp(frame, area);
    frame.render_widget(
        Paragraph::new(Line::from(format!(" {status}"))).style(theme::regular()),
        area,
    );
}

/// Warning shown while the terminal is below the minimum size.
pub fn too_small(frame: &mut Frame, size: TerminalSize) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!("current {size}, need at least {MIN_SIZE}")),
        Line::from("Resize the window to continue"),
    ];
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .style(theme::alert());

    // Center vertically; on a one-row terminal only the first line shows.
    let y_offset = area.height.saturating_sub(height) / 2;
    let centered = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: height.min(area.height),
    };
    frame.render_widget(paragraph, centered);
}

/// Startup banner, centered in a bordered box.
pub fn splash(frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = BANNER.lines().map(Line::from).collect();
    let text_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let box_width = u16::try_from(text_width + 2)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let box_height = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);

    let x = area.width.saturating_sub(box_width) / 2;
    let y = area.height.saturating_sub(box_height) / 2;
    let splash_area = Rect::new(area.x + x, area.y + y, box_width, box_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border());
    let inner = block.inner(splash_area);
    frame.render_widget(block, splash_area);
    frame.render_widget(Paragraph::new(lines).style(theme::alert()), inner);
}

fn clamp(frame: &Frame, area: Rect) -> Rect {
    area.intersection(frame.area())
}
