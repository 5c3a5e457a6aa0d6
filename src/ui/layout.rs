//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Full-bleed canvas with an optional one-line hint bar at the bottom.
pub struct AppLayout {
    pub canvas_area: Rect,
    /// Zero-height when the hint bar is hidden.
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect, show_status: bool) -> Self {
        let status_height = if show_status { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),                 // canvas (takes everything)
                Constraint::Length(status_height),  // hint bar
            ])
            .split(area);

        Self {
            canvas_area: chunks[0],
            status_area: chunks[1],
        }
    }
}
