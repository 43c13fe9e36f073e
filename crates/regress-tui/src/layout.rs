//! Geometry model: region rectangles derived from the terminal size.
//!
//! Everything is recomputed from [`TerminalSize`] on every redraw. Nothing
//! here remembers a previous layout.

use std::fmt;

use ratatui::layout::{Rect, Size};

/// Smallest terminal the dashboard will draw into.
pub const MIN_SIZE: TerminalSize = TerminalSize {
    rows: 19,
    cols: 120,
};

/// Title region height (label row + top separator row).
const TITLE_HEIGHT: u16 = 2;

/// Rows outside the content region: title (2), navigation and status (1
/// each) and the separator between them.
const RESERVED_ROWS: u16 = 5;

/// Current terminal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub rows: u16,
    pub cols: u16,
}

impl TerminalSize {
    /// Both dimensions are clamped to at least 1.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn is_below_minimum(self) -> bool {
        self.rows < MIN_SIZE.rows || self.cols < MIN_SIZE.cols
    }
}

impl From<Size> for TerminalSize {
    fn from(size: Size) -> Self {
        Self::new(size.height, size.width)
    }
}

impl fmt::Display for TerminalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// The four dashboard regions plus the separator rows between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub title: Rect,
    pub content: Rect,
    pub navigation: Rect,
    pub status: Rect,
    /// Horizontal rules: title/content, content/navigation, navigation/status.
    pub separators: [u16; 3],
}

impl Regions {
    /// Compute all regions for `size`.
    ///
    /// Only meaningful when `size` meets [`MIN_SIZE`]; smaller sizes are
    /// handled with saturating arithmetic so nothing underflows, but the
    /// regions may then be empty or overlap.
    pub fn compute(size: TerminalSize) -> Self {
        let TerminalSize { rows, cols } = size;

        Self {
            title: Rect::new(0, 0, cols, TITLE_HEIGHT.min(rows)),
            content: Rect::new(0, TITLE_HEIGHT, cols, rows.saturating_sub(RESERVED_ROWS)),
            navigation: Rect::new(0, rows.saturating_sub(3), cols, 1),
            status: Rect::new(0, rows.saturating_sub(1), cols, 1),
            separators: [1, rows.saturating_sub(4), rows.saturating_sub(2)],
        }
    }

    /// First row of the content region, where the view header goes.
    pub fn content_header(&self) -> Rect {
        Rect {
            height: self.content.height.min(1),
            ..self.content
        }
    }

    /// Content region minus the header row and the row the middle
    /// separator draws over. This is what content views receive.
    pub fn content_body(&self) -> Rect {
        Rect {
            y: self.content.y + 1,
            height: self.content.height.saturating_sub(2),
            ..self.content
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn minimum_size_boundaries() {
        assert!(!TerminalSize::new(19, 120).is_below_minimum());
        assert!(TerminalSize::new(18, 120).is_below_minimum());
        assert!(TerminalSize::new(19, 119).is_below_minimum());
        assert!(TerminalSize::new(15, 100).is_below_minimum());
    }

    #[test]
    fn zero_dimensions_clamp_to_one() {
        assert_eq!(TerminalSize::new(0, 0), TerminalSize { rows: 1, cols: 1 });
    }

    #[test]
    fn minimum_size_layout() {
        let regions = Regions::compute(MIN_SIZE);
        assert_eq!(regions.title, Rect::new(0, 0, 120, 2));
        assert_eq!(regions.content, Rect::new(0, 2, 120, 14));
        assert_eq!(regions.navigation, Rect::new(0, 16, 120, 1));
        assert_eq!(regions.status, Rect::new(0, 18, 120, 1));
        assert_eq!(regions.separators, [1, 15, 17]);
        assert_eq!(regions.content_header(), Rect::new(0, 2, 120, 1));
        assert_eq!(regions.content_body(), Rect::new(0, 3, 120, 12));
    }

    #[test]
    fn tiny_sizes_do_not_underflow() {
        let regions = Regions::compute(TerminalSize::new(1, 1));
        assert_eq!(regions.content.height, 0);
        assert_eq!(regions.content_body().height, 0);
        assert_eq!(regions.separators, [1, 0, 0]);
    }

    proptest! {
        #[test]
        fn regions_stack_disjointly(rows in 19u16..200, cols in 120u16..300) {
            let size = TerminalSize::new(rows, cols);
            let r = Regions::compute(size);
            let stack = [r.title, r.content, r.navigation, r.status];

            for pair in stack.windows(2) {
                prop_assert!(pair[0].bottom() <= pair[1].top());
                prop_assert!(!pair[0].intersects(pair[1]));
            }
            for region in stack {
                prop_assert!(region.height >= 1);
                prop_assert_eq!(region.left(), 0);
                prop_assert_eq!(region.right(), cols);
            }
            prop_assert_eq!(r.title.top(), 0);
            prop_assert_eq!(r.status.bottom(), rows);

            // Separators fall on the boundaries between regions.
            prop_assert_eq!(r.separators[0] + 1, r.content.top());
            prop_assert_eq!(r.separators[1] + 1, r.content.bottom());
            prop_assert_eq!(r.separators[2], r.navigation.bottom());
            prop_assert_eq!(r.separators[2] + 1, r.status.top());
        }

        #[test]
        fn regions_follow_the_latest_size(
            (rows_a, cols_a) in (19u16..200, 120u16..300),
            (rows_b, cols_b) in (19u16..200, 120u16..300),
        ) {
            let before = Regions::compute(TerminalSize::new(rows_a, cols_a));
            let after = Regions::compute(TerminalSize::new(rows_b, cols_b));

            prop_assert_eq!(after.status.y, rows_b - 1);
            prop_assert_eq!(after.navigation.y, rows_b - 3);
            prop_assert_eq!(after.content.height, rows_b - 5);
            prop_assert_eq!(after.separators, [1, rows_b - 4, rows_b - 2]);
            prop_assert_eq!(after.title.width, cols_b);
            prop_assert_eq!(after.status.width, cols_b);
            prop_assert_eq!(before == after, (rows_a, cols_a) == (rows_b, cols_b));
        }
    }
}
