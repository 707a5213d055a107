#![forbid(unsafe_code)]

//! Drawing primitives for the screen.
//!
//! Helpers on top of [`Screen::set`] so collaborators can draw lines, borders
//! and text without their own cell loops. Every write goes through the clip
//! region, so nothing here needs bounds checks.
//!
//! Border cells are marked `auto_merge`, letting adjoining borders join up
//! when [`Screen::apply_shader`] runs.

use glyphgrid_core::geometry::Rect;
use glyphgrid_text::glyphs;

use crate::cell::{Cell, GlyphText};
use crate::screen::Screen;

/// Characters used to draw a border around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    /// Light box-drawing characters (U+250x).
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Rounded corners.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// Double-line border.
    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    /// Heavy (thick) border.
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };
}

/// Extension trait for drawing on a [`Screen`].
pub trait Draw {
    /// Draw a horizontal line of cells.
    fn draw_horizontal_line(&mut self, x: u16, y: u16, width: u16, cell: Cell);

    /// Draw a vertical line of cells.
    fn draw_vertical_line(&mut self, x: u16, y: u16, height: u16, cell: Cell);

    /// Fill a rectangle with copies of `cell`.
    fn draw_rect_filled(&mut self, rect: Rect, cell: Cell);

    /// Print text one glyph per cell, starting at `(x, y)`.
    ///
    /// Text is segmented into glyphs first: combining marks stay with their
    /// base, control characters are dropped and a full-width glyph takes two
    /// cells (the second holding the empty placeholder). Colors, style,
    /// hyperlink and `auto_merge` come from `base_cell`.
    ///
    /// Stops at the right edge of the screen and never starts a full-width
    /// glyph that would not fit. Returns the column after the last glyph.
    fn print_text(&mut self, x: u16, y: u16, text: &str, base_cell: Cell) -> u16;

    /// Draw a border inside `rect` (edges and corners).
    ///
    /// Colors and style come from `base_cell`; border cells are always
    /// eligible for auto-merge.
    fn draw_border(&mut self, rect: Rect, chars: BorderChars, base_cell: Cell);
}

impl Draw for Screen {
    fn draw_horizontal_line(&mut self, x: u16, y: u16, width: u16, cell: Cell) {
        for i in 0..width {
            self.set(x.saturating_add(i), y, cell.clone());
        }
    }

    fn draw_vertical_line(&mut self, x: u16, y: u16, height: u16, cell: Cell) {
        for i in 0..height {
            self.set(x, y.saturating_add(i), cell.clone());
        }
    }

    fn draw_rect_filled(&mut self, rect: Rect, cell: Cell) {
        for y in rect.y..rect.bottom() {
            self.draw_horizontal_line(rect.x, y, rect.width, cell.clone());
        }
    }

    fn print_text(&mut self, x: u16, y: u16, text: &str, base_cell: Cell) -> u16 {
        let max_x = self.width();
        let mut cx = x;
        let mut iter = glyphs(text).peekable();
        while let Some(glyph) = iter.next() {
            if cx >= max_x {
                break;
            }
            // A placeholder always follows a full-width glyph.
            let wide = iter.peek().is_some_and(|next| next.is_empty());
            if wide && cx + 1 >= max_x {
                break;
            }
            self.set(
                cx,
                y,
                Cell {
                    text: GlyphText::new(&glyph),
                    ..base_cell.clone()
                },
            );
            cx += 1;
        }
        cx
    }

    fn draw_border(&mut self, rect: Rect, chars: BorderChars, base_cell: Cell) {
        if rect.is_empty() {
            return;
        }

        let make_cell = |c: char| -> Cell {
            Cell {
                text: GlyphText::from_char(c),
                auto_merge: true,
                ..base_cell.clone()
            }
        };

        let h_cell = make_cell(chars.horizontal);
        let v_cell = make_cell(chars.vertical);
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        self.draw_horizontal_line(rect.x, rect.y, rect.width, h_cell.clone());
        if rect.height > 1 {
            self.draw_horizontal_line(rect.x, bottom, rect.width, h_cell);
        }

        // Sides, excluding corners.
        if rect.height > 2 {
            self.draw_vertical_line(rect.x, rect.y + 1, rect.height - 2, v_cell.clone());
            if rect.width > 1 {
                self.draw_vertical_line(right, rect.y + 1, rect.height - 2, v_cell);
            }
        }

        // Corners last so they overwrite the edges.
        self.set(rect.x, rect.y, make_cell(chars.top_left));
        if rect.width > 1 {
            self.set(right, rect.y, make_cell(chars.top_right));
        }
        if rect.height > 1 {
            self.set(rect.x, bottom, make_cell(chars.bottom_left));
        }
        if rect.width > 1 && rect.height > 1 {
            self.set(right, bottom, make_cell(chars.bottom_right));
        }
    }
}
