#![forbid(unsafe_code)]

//! Screen grid storage.
//!
//! The [`Screen`] is a fixed-size grid of [`Cell`]s plus the state that goes
//! with one rendered frame: a clip region, the cursor and the hyperlink table.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. The clip region always lies inside the grid
//! 4. Accesses outside the clip region never touch `cells`: reads see a
//!    default cell, writes land in a scratch cell that is reset before every
//!    hand-out

use std::io::{self, Write};

use glyphgrid_core::cursor::Cursor;
use glyphgrid_core::geometry::Rect;
use glyphgrid_core::info_span;

use crate::cell::Cell;
use crate::encoder::{self, StyleDiffEncoder};
use crate::hyperlink::HyperlinkTable;
use crate::shader;

/// A grid of terminal cells for one frame.
///
/// # Example
///
/// ```
/// use glyphgrid_render::{Cell, Screen, StyleFlags};
///
/// let mut screen = Screen::new(4, 1);
/// screen.set_glyph(0, 0, "h");
/// screen.set_glyph(1, 0, "i");
/// screen.cell_mut(1, 0).style = StyleFlags::BOLD;
/// assert_eq!(screen.to_ansi_string(), "h\x1b[1mi\x1b[22m  ");
/// ```
#[derive(Debug, Clone)]
pub struct Screen {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    clip: Rect,
    cursor: Cursor,
    links: HyperlinkTable,
    blank: Cell,
    scratch: Cell,
}

impl Screen {
    /// Create a `width` x `height` grid of default cells.
    ///
    /// The clip region covers the whole grid and the cursor sits at the origin.
    pub fn new(width: u16, height: u16) -> Self {
        let size = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            clip: Rect::from_size(width, height),
            cursor: Cursor::default(),
            links: HyperlinkTable::new(),
            blank: Cell::default(),
            scratch: Cell::default(),
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Bounding rect of the entire grid.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Linear index of `(x, y)` if it lies inside the clip region.
    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        self.clip
            .contains(x, y)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// The cell at `(x, y)`.
    ///
    /// Outside the clip region this is a default cell that is not part of the
    /// grid.
    #[inline]
    pub fn cell(&self, x: u16, y: u16) -> &Cell {
        match self.index(x, y) {
            Some(i) => &self.cells[i],
            None => &self.blank,
        }
    }

    /// Mutable access to the cell at `(x, y)`.
    ///
    /// Outside the clip region this returns a scratch cell, reset to default,
    /// whose contents are never rendered. Drawing code can therefore write
    /// without bounds checks.
    #[inline]
    pub fn cell_mut(&mut self, x: u16, y: u16) -> &mut Cell {
        match self.index(x, y) {
            Some(i) => &mut self.cells[i],
            None => {
                self.scratch.reset();
                &mut self.scratch
            }
        }
    }

    /// Replace the cell at `(x, y)`. No-op outside the clip region.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Glyph text of the cell at `(x, y)`.
    #[inline]
    pub fn at(&self, x: u16, y: u16) -> &str {
        self.cell(x, y).text.as_str()
    }

    /// Replace the glyph text at `(x, y)`, keeping its style.
    pub fn set_glyph(&mut self, x: u16, y: u16, glyph: &str) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].text.set(glyph);
        }
    }

    /// Cells of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u16) -> &[Cell] {
        let width = usize::from(self.width);
        let start = usize::from(y) * width;
        &self.cells[start..start + width]
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    // ========== Clip region ==========

    #[inline]
    pub const fn clip_region(&self) -> Rect {
        self.clip
    }

    /// Restrict cell access to `rect`, clamped to the grid.
    pub fn set_clip_region(&mut self, rect: Rect) {
        self.clip = rect.clamp_to(self.width, self.height);
    }

    /// Make the whole grid accessible again.
    pub fn reset_clip_region(&mut self) {
        self.clip = self.bounds();
    }

    // ========== Cursor ==========

    #[inline]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    // ========== Frame lifecycle ==========

    /// Reset every cell, park the cursor at the bottom-right cell and drop
    /// all registered hyperlinks.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
        self.cursor.x = self.width.saturating_sub(1);
        self.cursor.y = self.height.saturating_sub(1);
        self.links.clear();
    }

    // ========== Hyperlinks ==========

    /// Id for `target`, registering it if needed. See [`HyperlinkTable::register`].
    #[inline]
    pub fn register_hyperlink(&mut self, target: &str) -> u8 {
        self.links.register(target)
    }

    /// Target registered under `id`, `""` if none.
    #[inline]
    pub fn hyperlink(&self, id: u8) -> &str {
        self.links.get(id)
    }

    #[inline]
    pub fn hyperlinks(&self) -> &HyperlinkTable {
        &self.links
    }

    // ========== Output ==========

    /// Join adjoining box-drawing pieces. Returns the number of cells rewritten.
    pub fn apply_shader(&mut self) -> usize {
        shader::auto_merge(&mut self.cells, usize::from(self.width))
    }

    /// Render the whole grid to a string of glyphs and escape sequences.
    ///
    /// The output ends in the default style with no open hyperlink.
    pub fn to_ansi_string(&self) -> String {
        let mut encoder = StyleDiffEncoder::new(Vec::with_capacity(self.cells.len() * 2));
        // Writing into a Vec cannot fail.
        let _ = encoder.encode(self);
        String::from_utf8_lossy(encoder.get_ref()).into_owned()
    }

    /// Write the rendered grid to stdout and flush.
    pub fn print(&self) -> io::Result<()> {
        let span = info_span!("print", width = self.width, height = self.height);
        let _guard = span.enter();
        let stdout = io::stdout();
        let mut encoder = StyleDiffEncoder::new(io::BufWriter::new(stdout.lock()));
        encoder.encode(self)?;
        encoder.get_mut().flush()
    }

    /// Bytes that move the cursor from the end of this grid's output back to
    /// its first column and row. With `clear`, every line is erased on the way.
    pub fn reset_position(&self, clear: bool) -> String {
        encoder::reset_position(self.height, clear)
    }
}

impl PartialEq for Screen {
    /// Grids are equal when their dimensions and cells are.
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{GlyphText, StyleFlags};
    use glyphgrid_core::cursor::CursorShape;

    #[test]
    fn new_screen_is_default() {
        let screen = Screen::new(10, 5);
        assert_eq!(screen.width(), 10);
        assert_eq!(screen.height(), 5);
        assert_eq!(screen.cells().len(), 50);
        assert!(screen.cells().iter().all(|c| *c == Cell::default()));
        assert_eq!(screen.clip_region(), Rect::new(0, 0, 10, 5));
        assert_eq!((screen.cursor().x, screen.cursor().y), (0, 0));
    }

    #[test]
    fn clear_parks_cursor_bottom_right() {
        let mut screen = Screen::new(10, 5);
        screen.set_glyph(3, 3, "x");
        screen.register_hyperlink("https://example.com");
        screen.clear();
        assert_eq!((screen.cursor().x, screen.cursor().y), (9, 4));
        assert!(screen.cells().iter().all(|c| *c == Cell::default()));
        assert!(screen.hyperlinks().is_empty());
    }

    #[test]
    fn clear_keeps_cursor_shape() {
        let mut screen = Screen::new(3, 3);
        screen.set_cursor(Cursor::new(1, 1, CursorShape::Bar));
        screen.clear();
        assert_eq!(screen.cursor(), Cursor::new(2, 2, CursorShape::Bar));
    }

    #[test]
    fn clear_on_empty_grid() {
        let mut screen = Screen::new(0, 0);
        screen.clear();
        assert_eq!((screen.cursor().x, screen.cursor().y), (0, 0));
    }

    #[test]
    fn cell_access_in_bounds() {
        let mut screen = Screen::new(4, 2);
        screen.cell_mut(2, 1).style = StyleFlags::BOLD;
        screen.set_glyph(2, 1, "z");
        assert_eq!(screen.at(2, 1), "z");
        assert_eq!(screen.cell(2, 1).style, StyleFlags::BOLD);
        assert_eq!(screen.row(1)[2].text, "z");
    }

    #[test]
    fn out_of_bounds_writes_are_discarded() {
        let mut screen = Screen::new(4, 2);
        let before = screen.clone();
        screen.cell_mut(4, 0).text = GlyphText::new("x");
        screen.cell_mut(0, 2).style = StyleFlags::BLINK;
        screen.set_glyph(100, 100, "y");
        screen.set(9, 9, Cell::new("q"));
        assert_eq!(screen, before);
        assert_eq!(*screen.cell(4, 0), Cell::default());
    }

    #[test]
    fn scratch_cell_is_reset_between_handouts() {
        let mut screen = Screen::new(1, 1);
        screen.cell_mut(5, 5).text = GlyphText::new("x");
        assert_eq!(screen.cell_mut(6, 6).text, " ");
    }

    #[test]
    fn clip_region_limits_access() {
        let mut screen = Screen::new(6, 4);
        screen.set_clip_region(Rect::new(1, 1, 2, 2));
        screen.set_glyph(0, 0, "a");
        screen.set_glyph(1, 1, "b");
        screen.set_glyph(3, 3, "c");
        assert_eq!(screen.at(1, 1), "b");
        assert_eq!(screen.at(0, 0), " ");
        screen.reset_clip_region();
        assert_eq!(screen.at(0, 0), " ");
        assert_eq!(screen.at(3, 3), " ");
        assert_eq!(screen.at(1, 1), "b");
    }

    #[test]
    fn clip_region_is_clamped() {
        let mut screen = Screen::new(5, 5);
        screen.set_clip_region(Rect::new(3, 3, 10, 10));
        assert_eq!(screen.clip_region(), Rect::new(3, 3, 2, 2));
        screen.set_clip_region(Rect::new(9, 9, 1, 1));
        assert!(screen.clip_region().is_empty());
    }

    #[test]
    fn hyperlinks_register_and_resolve() {
        let mut screen = Screen::new(2, 1);
        let id = screen.register_hyperlink("https://a.example");
        assert_eq!(id, 1);
        assert_eq!(screen.register_hyperlink("https://a.example"), 1);
        assert_eq!(screen.hyperlink(1), "https://a.example");
        assert_eq!(screen.hyperlink(9), "");
    }

    #[test]
    fn apply_shader_merges_marked_cells() {
        let mut screen = Screen::new(2, 1);
        for (x, glyph) in [(0, "─"), (1, "│")] {
            screen.set_glyph(x, 0, glyph);
            screen.cell_mut(x, 0).auto_merge = true;
        }
        assert_eq!(screen.apply_shader(), 1);
        assert_eq!(screen.at(1, 0), "┤");
    }

    #[test]
    fn reset_position_sequences() {
        let screen = Screen::new(4, 3);
        assert_eq!(screen.reset_position(false), "\r\x1b[1A\x1b[1A");
        assert_eq!(
            screen.reset_position(true),
            "\r\x1b[2K\x1b[1A\x1b[2K\x1b[1A\x1b[2K"
        );
    }
}
