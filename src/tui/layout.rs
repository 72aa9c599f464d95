// Layout helpers - grid math and responsive breakpoints
//
// Single source of truth for width thresholds and the 3x3 view grid, so no
// magic numbers end up scattered in render code.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 70 cols: drop secondary panes
    Compact,
    /// 70-109 cols: standard layout
    Normal,
    /// 110+ cols: room for descriptions and timestamps
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=69 => Breakpoint::Compact,
            70..=109 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

/// Index of the centre cell in a [`grid3`] result
pub const GRID_CENTRE: usize = 4;

/// Split an area into a 3x3 grid, row-major.
///
/// The middle row and column get the leftover percentage so the centre cell
/// is never starved on odd sizes.
pub fn grid3(area: Rect) -> [Rect; 9] {
    let thirds = [
        Constraint::Percentage(33),
        Constraint::Percentage(34),
        Constraint::Percentage(33),
    ];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(thirds)
        .split(area);

    let mut cells = [Rect::default(); 9];
    for (r, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(thirds)
            .split(*row);
        for (c, cell) in cols.iter().enumerate() {
            cells[r * 3 + c] = *cell;
        }
    }
    cells
}

/// A rect of at most `width` x `height`, centred within `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(69), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(70), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(109), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(110), Breakpoint::Wide);
    }

    #[test]
    fn at_least_comparisons() {
        let normal = Breakpoint::Normal;
        assert!(normal.at_least(Breakpoint::Compact));
        assert!(normal.at_least(Breakpoint::Normal));
        assert!(!normal.at_least(Breakpoint::Wide));
    }

    #[test]
    fn grid_cells_cover_the_area_row_major() {
        let area = Rect::new(0, 0, 90, 30);
        let cells = grid3(area);

        // Row-major: cell 0 top-left, cell 4 centre, cell 8 bottom-right.
        assert_eq!(cells[0].x, 0);
        assert_eq!(cells[0].y, 0);
        assert!(cells[GRID_CENTRE].x > cells[3].x.saturating_sub(1));
        assert!(cells[GRID_CENTRE].y > 0);
        assert_eq!(cells[8].right(), area.right());
        assert_eq!(cells[8].bottom(), area.bottom());

        for cell in cells {
            assert!(cell.right() <= area.right());
            assert!(cell.bottom() <= area.bottom());
        }
    }

    #[test]
    fn centered_clamps_to_the_area() {
        let area = Rect::new(0, 0, 20, 10);

        let inner = centered(area, 10, 4);
        assert_eq!(inner, Rect::new(5, 3, 10, 4));

        // Requested size larger than the area is clamped, not overflowed.
        let clamped = centered(area, 100, 100);
        assert_eq!(clamped, area);
    }
}
