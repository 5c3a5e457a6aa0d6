//! The canvas widget — paints every animated row for the current frame.
//!
//! Pure function of the row states, the theme flag, and the cursor blink
//! flag; it never advances the simulation.  The frame driver guarantees the
//! update pass has fully completed before this runs.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::Widget,
};

use crate::core::row::{Phase, Row};

use super::theme::{blend, Theme};

/// Block glyph drawn after the last typed character while a row is typing.
const CURSOR_GLYPH: char = '▌';

/// Renders the row pool into the frame buffer.  Created fresh each frame.
pub struct CodeCanvas<'a> {
    rows: &'a [Row],
    /// Active palette: `true` selects light ink on a dark background.
    dark: bool,
    /// Current half-period of the wall-clock cursor blink.
    cursor_on: bool,
}

impl<'a> CodeCanvas<'a> {
    pub fn new(rows: &'a [Row], dark: bool, cursor_on: bool) -> Self {
        Self { rows, dark, cursor_on }
    }
}

impl Widget for CodeCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let ink = Theme::ink(self.dark);
        let bg = Theme::background(self.dark);

        // Clear the whole surface to the theme background.
        buf.set_style(area, Style::default().bg(Theme::background_color(self.dark)));

        for row in self.rows {
            if row.awaiting_start() {
                continue;
            }
            let y = area.y + row.y;
            if y >= area.bottom() {
                continue;
            }

            // Each character advances the column even when fully faded, so
            // later characters keep their monospace alignment.
            let mut x = area.x + row.x;
            for (c, ch) in row.text.chars().take(row.revealed).enumerate() {
                if x >= area.right() {
                    break;
                }
                let alpha = row.alpha[c];
                if alpha > 0.0 {
                    if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                        cell.set_char(ch);
                        cell.fg = blend(ink, bg, alpha);
                    }
                }
                x += 1;
            }

            if row.phase == Phase::Typing && self.cursor_on && x < area.right() {
                if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                    cell.set_char(CURSOR_GLYPH);
                    cell.fg = Theme::cursor(self.dark);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_buf(rows: &[Row], dark: bool, cursor_on: bool) -> Buffer {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        CodeCanvas::new(rows, dark, cursor_on).render(area, &mut buf);
        buf
    }

    fn visible_row(text: &'static str, phase: Phase) -> Row {
        let len = text.chars().count();
        Row {
            text,
            len,
            x: 3,
            y: 2,
            revealed: len,
            alpha: vec![1.0; len],
            phase,
            timer: 0.0,
            speed: 0.5,
            hold: 40.0,
            fade: 0.015,
            delay: 0,
        }
    }

    fn symbol(buf: &Buffer, x: u16, y: u16) -> &str {
        buf.cell(Position::new(x, y)).expect("in bounds").symbol()
    }

    #[test]
    fn delayed_rows_draw_nothing() {
        let mut row = visible_row("hi", Phase::Typing);
        row.delay = 5;
        let buf = canvas_buf(&[row], true, true);
        for x in 0..40 {
            for y in 0..10 {
                assert_eq!(symbol(&buf, x, y), " ");
            }
        }
    }

    #[test]
    fn characters_land_at_monospace_offsets() {
        let buf = canvas_buf(&[visible_row("abc", Phase::Holding)], true, true);
        assert_eq!(symbol(&buf, 3, 2), "a");
        assert_eq!(symbol(&buf, 4, 2), "b");
        assert_eq!(symbol(&buf, 5, 2), "c");
    }

    #[test]
    fn faded_characters_leave_a_gap_without_shifting_the_rest() {
        let mut row = visible_row("abc", Phase::Holding);
        row.alpha[1] = 0.0;
        let buf = canvas_buf(&[row], true, true);
        assert_eq!(symbol(&buf, 3, 2), "a");
        assert_eq!(symbol(&buf, 4, 2), " ");
        assert_eq!(symbol(&buf, 5, 2), "c");
    }

    #[test]
    fn cursor_blinks_only_while_typing() {
        let mut row = visible_row("ab", Phase::Typing);
        row.revealed = 1;
        row.alpha = vec![1.0, 0.0];

        let buf = canvas_buf(&[row.clone()], true, true);
        assert_eq!(symbol(&buf, 4, 2), "▌");

        let buf = canvas_buf(&[row.clone()], true, false);
        assert_eq!(symbol(&buf, 4, 2), " ");

        row.phase = Phase::Holding;
        row.revealed = 2;
        row.alpha = vec![1.0, 1.0];
        let buf = canvas_buf(&[row], true, true);
        assert_eq!(symbol(&buf, 5, 2), " ");
    }

    #[test]
    fn theme_flag_changes_colour_and_nothing_else() {
        let row = visible_row("ok", Phase::Holding);
        let dark = canvas_buf(&[row.clone()], true, true);
        let light = canvas_buf(&[row], false, true);

        // Same glyphs in both palettes.
        assert_eq!(symbol(&dark, 3, 2), "o");
        assert_eq!(symbol(&light, 3, 2), "o");

        let dark_fg = dark.cell(Position::new(3, 2)).unwrap().fg;
        let light_fg = light.cell(Position::new(3, 2)).unwrap().fg;
        assert_ne!(dark_fg, light_fg);
        assert_eq!(dark_fg, blend(Theme::ink(true), Theme::background(true), 1.0));
        assert_eq!(light_fg, blend(Theme::ink(false), Theme::background(false), 1.0));
    }

    #[test]
    fn rows_below_the_surface_are_clipped() {
        let mut row = visible_row("tall", Phase::Holding);
        row.y = 50;
        // Must not panic or write anywhere.
        let buf = canvas_buf(&[row], true, true);
        for x in 0..40 {
            for y in 0..10 {
                assert_eq!(symbol(&buf, x, y), " ");
            }
        }
    }
}
