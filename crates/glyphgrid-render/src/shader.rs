#![forbid(unsafe_code)]

//! Box-drawing auto-merge.
//!
//! Widgets draw their own borders; where two borders touch, the cells end up
//! holding pieces that do not connect (`─` beside `│`). The shader walks the
//! grid once and, for every pair of adjacent cells marked `auto_merge`,
//! extends a piece whose facing connector is missing so that it meets its
//! neighbour:
//!
//! ```text
//!  before      after
//!  ──│         ──┤
//!    │           │
//! ```
//!
//! Each box-drawing glyph is described by a [`TileEncoding`]: the weight of
//! its connector on each side. Merging only ever turns a missing connector
//! into the neighbour's, never changes an existing one. When no glyph has the
//! resulting encoding, the cell is left as is.

use glyphgrid_core::{debug, debug_span};

use crate::cell::{Cell, GlyphText};

/// Weight of one connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LineWeight {
    None = 0,
    Light = 1,
    Heavy = 2,
    Double = 3,
}

impl LineWeight {
    const fn from_u8(w: u8) -> Self {
        match w {
            1 => Self::Light,
            2 => Self::Heavy,
            3 => Self::Double,
            _ => Self::None,
        }
    }
}

/// Connectors of a box-drawing glyph, ordered field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileEncoding {
    pub left: LineWeight,
    pub top: LineWeight,
    pub right: LineWeight,
    pub down: LineWeight,
    /// Rounded corner (`╭╮╯╰`).
    pub round: bool,
}

/// Direction along which two cells are adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// First cell on the left, second on the right.
    Horizontal,
    /// First cell on top, second below.
    Vertical,
}

impl TileEncoding {
    /// Connector facing the following cell (right or down).
    #[inline]
    pub const fn exit(self, axis: Axis) -> LineWeight {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.down,
        }
    }

    /// Connector facing the preceding cell (left or top).
    #[inline]
    pub const fn entry(self, axis: Axis) -> LineWeight {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    #[inline]
    const fn with_exit(mut self, axis: Axis, weight: LineWeight) -> Self {
        match axis {
            Axis::Horizontal => self.right = weight,
            Axis::Vertical => self.down = weight,
        }
        self
    }

    #[inline]
    const fn with_entry(mut self, axis: Axis, weight: LineWeight) -> Self {
        match axis {
            Axis::Horizontal => self.left = weight,
            Axis::Vertical => self.top = weight,
        }
        self
    }
}

const fn t(left: u8, top: u8, right: u8, down: u8) -> TileEncoding {
    TileEncoding {
        left: LineWeight::from_u8(left),
        top: LineWeight::from_u8(top),
        right: LineWeight::from_u8(right),
        down: LineWeight::from_u8(down),
        round: false,
    }
}

const fn r(left: u8, top: u8, right: u8, down: u8) -> TileEncoding {
    TileEncoding {
        round: true,
        ..t(left, top, right, down)
    }
}

// Sorted by glyph.
static GLYPH_TO_TILE: [(char, TileEncoding); 115] = [
    ('─', t(1, 0, 1, 0)),
    ('━', t(2, 0, 2, 0)),
    ('│', t(0, 1, 0, 1)),
    ('┃', t(0, 2, 0, 2)),
    ('┌', t(0, 0, 1, 1)),
    ('┍', t(0, 0, 2, 1)),
    ('┎', t(0, 0, 1, 2)),
    ('┏', t(0, 0, 2, 2)),
    ('┐', t(1, 0, 0, 1)),
    ('┑', t(2, 0, 0, 1)),
    ('┒', t(1, 0, 0, 2)),
    ('┓', t(2, 0, 0, 2)),
    ('└', t(0, 1, 1, 0)),
    ('┕', t(0, 1, 2, 0)),
    ('┖', t(0, 2, 1, 0)),
    ('┗', t(0, 2, 2, 0)),
    ('┘', t(1, 1, 0, 0)),
    ('┙', t(2, 1, 0, 0)),
    ('┚', t(1, 2, 0, 0)),
    ('┛', t(2, 2, 0, 0)),
    ('├', t(0, 1, 1, 1)),
    ('┝', t(0, 1, 2, 1)),
    ('┞', t(0, 2, 1, 1)),
    ('┟', t(0, 1, 1, 2)),
    ('┠', t(0, 2, 1, 2)),
    ('┡', t(0, 2, 2, 1)),
    ('┢', t(0, 1, 2, 2)),
    ('┣', t(0, 2, 2, 2)),
    ('┤', t(1, 1, 0, 1)),
    ('┥', t(2, 1, 0, 1)),
    ('┦', t(1, 2, 0, 1)),
    ('┧', t(1, 1, 0, 2)),
    ('┨', t(1, 2, 0, 2)),
    ('┩', t(2, 2, 0, 1)),
    ('┪', t(2, 1, 0, 2)),
    ('┫', t(2, 2, 0, 2)),
    ('┬', t(1, 0, 1, 1)),
    ('┭', t(2, 0, 1, 1)),
    ('┮', t(1, 0, 2, 1)),
    ('┯', t(2, 0, 2, 1)),
    ('┰', t(1, 0, 1, 2)),
    ('┱', t(2, 0, 1, 2)),
    ('┲', t(1, 0, 2, 2)),
    ('┳', t(2, 0, 2, 2)),
    ('┴', t(1, 1, 1, 0)),
    ('┵', t(2, 1, 1, 0)),
    ('┶', t(1, 1, 2, 0)),
    ('┷', t(2, 1, 2, 0)),
    ('┸', t(1, 2, 1, 0)),
    ('┹', t(2, 2, 1, 0)),
    ('┺', t(1, 2, 2, 0)),
    ('┻', t(2, 2, 2, 0)),
    ('┼', t(1, 1, 1, 1)),
    ('┽', t(2, 1, 1, 1)),
    ('┾', t(1, 1, 2, 1)),
    ('┿', t(2, 1, 2, 1)),
    ('╀', t(1, 2, 1, 1)),
    ('╁', t(1, 1, 1, 2)),
    ('╂', t(1, 2, 1, 2)),
    ('╃', t(2, 2, 1, 1)),
    ('╄', t(1, 2, 2, 1)),
    ('╅', t(2, 1, 1, 2)),
    ('╆', t(1, 1, 2, 2)),
    ('╇', t(2, 2, 2, 1)),
    ('╈', t(2, 1, 2, 2)),
    ('╉', t(2, 2, 1, 2)),
    ('╊', t(1, 2, 2, 2)),
    ('╋', t(2, 2, 2, 2)),
    ('╍', t(2, 0, 2, 0)),
    ('╏', t(0, 2, 0, 2)),
    ('═', t(3, 0, 3, 0)),
    ('║', t(0, 3, 0, 3)),
    ('╒', t(0, 0, 3, 1)),
    ('╓', t(0, 0, 1, 3)),
    ('╔', t(0, 0, 3, 3)),
    ('╕', t(3, 0, 0, 1)),
    ('╖', t(1, 0, 0, 3)),
    ('╗', t(3, 0, 0, 3)),
    ('╘', t(0, 1, 3, 0)),
    ('╙', t(0, 3, 1, 0)),
    ('╚', t(0, 3, 3, 0)),
    ('╛', t(3, 1, 0, 0)),
    ('╜', t(1, 3, 0, 0)),
    ('╝', t(3, 3, 0, 0)),
    ('╞', t(0, 1, 3, 1)),
    ('╟', t(0, 3, 1, 3)),
    ('╠', t(0, 3, 3, 3)),
    ('╡', t(3, 1, 0, 1)),
    ('╢', t(1, 3, 0, 3)),
    ('╣', t(3, 3, 0, 3)),
    ('╤', t(3, 0, 3, 1)),
    ('╥', t(1, 0, 1, 3)),
    ('╦', t(3, 0, 3, 3)),
    ('╧', t(3, 1, 3, 0)),
    ('╨', t(1, 3, 1, 0)),
    ('╩', t(3, 3, 3, 0)),
    ('╪', t(3, 1, 3, 1)),
    ('╫', t(1, 3, 1, 3)),
    ('╬', t(3, 3, 3, 3)),
    ('╭', r(0, 0, 1, 1)),
    ('╮', r(1, 0, 0, 1)),
    ('╯', r(1, 1, 0, 0)),
    ('╰', r(0, 1, 1, 0)),
    ('╴', t(1, 0, 0, 0)),
    ('╵', t(0, 1, 0, 0)),
    ('╶', t(0, 0, 1, 0)),
    ('╷', t(0, 0, 0, 1)),
    ('╸', t(2, 0, 0, 0)),
    ('╹', t(0, 2, 0, 0)),
    ('╺', t(0, 0, 2, 0)),
    ('╻', t(0, 0, 0, 2)),
    ('╼', t(1, 0, 2, 0)),
    ('╽', t(0, 1, 0, 2)),
    ('╾', t(2, 0, 1, 0)),
    ('╿', t(0, 2, 0, 1)),
];

// Sorted by encoding. Where two glyphs share an encoding (`━`/`╍`, `┃`/`╏`)
// the solid one is listed, so merges never produce a dashed line.
static TILE_TO_GLYPH: [(TileEncoding, char); 113] = [
    (t(0, 0, 0, 1), '╷'),
    (t(0, 0, 0, 2), '╻'),
    (t(0, 0, 1, 0), '╶'),
    (t(0, 0, 1, 1), '┌'),
    (r(0, 0, 1, 1), '╭'),
    (t(0, 0, 1, 2), '┎'),
    (t(0, 0, 1, 3), '╓'),
    (t(0, 0, 2, 0), '╺'),
    (t(0, 0, 2, 1), '┍'),
    (t(0, 0, 2, 2), '┏'),
    (t(0, 0, 3, 1), '╒'),
    (t(0, 0, 3, 3), '╔'),
    (t(0, 1, 0, 0), '╵'),
    (t(0, 1, 0, 1), '│'),
    (t(0, 1, 0, 2), '╽'),
    (t(0, 1, 1, 0), '└'),
    (r(0, 1, 1, 0), '╰'),
    (t(0, 1, 1, 1), '├'),
    (t(0, 1, 1, 2), '┟'),
    (t(0, 1, 2, 0), '┕'),
    (t(0, 1, 2, 1), '┝'),
    (t(0, 1, 2, 2), '┢'),
    (t(0, 1, 3, 0), '╘'),
    (t(0, 1, 3, 1), '╞'),
    (t(0, 2, 0, 0), '╹'),
    (t(0, 2, 0, 1), '╿'),
    (t(0, 2, 0, 2), '┃'),
    (t(0, 2, 1, 0), '┖'),
    (t(0, 2, 1, 1), '┞'),
    (t(0, 2, 1, 2), '┠'),
    (t(0, 2, 2, 0), '┗'),
    (t(0, 2, 2, 1), '┡'),
    (t(0, 2, 2, 2), '┣'),
    (t(0, 3, 0, 3), '║'),
    (t(0, 3, 1, 0), '╙'),
    (t(0, 3, 1, 3), '╟'),
    (t(0, 3, 3, 0), '╚'),
    (t(0, 3, 3, 3), '╠'),
    (t(1, 0, 0, 0), '╴'),
    (t(1, 0, 0, 1), '┐'),
    (r(1, 0, 0, 1), '╮'),
    (t(1, 0, 0, 2), '┒'),
    (t(1, 0, 0, 3), '╖'),
    (t(1, 0, 1, 0), '─'),
    (t(1, 0, 1, 1), '┬'),
    (t(1, 0, 1, 2), '┰'),
    (t(1, 0, 1, 3), '╥'),
    (t(1, 0, 2, 0), '╼'),
    (t(1, 0, 2, 1), '┮'),
    (t(1, 0, 2, 2), '┲'),
    (t(1, 1, 0, 0), '┘'),
    (r(1, 1, 0, 0), '╯'),
    (t(1, 1, 0, 1), '┤'),
    (t(1, 1, 0, 2), '┧'),
    (t(1, 1, 1, 0), '┴'),
    (t(1, 1, 1, 1), '┼'),
    (t(1, 1, 1, 2), '╁'),
    (t(1, 1, 2, 0), '┶'),
    (t(1, 1, 2, 1), '┾'),
    (t(1, 1, 2, 2), '╆'),
    (t(1, 2, 0, 0), '┚'),
    (t(1, 2, 0, 1), '┦'),
    (t(1, 2, 0, 2), '┨'),
    (t(1, 2, 1, 0), '┸'),
    (t(1, 2, 1, 1), '╀'),
    (t(1, 2, 1, 2), '╂'),
    (t(1, 2, 2, 0), '┺'),
    (t(1, 2, 2, 1), '╄'),
    (t(1, 2, 2, 2), '╊'),
    (t(1, 3, 0, 0), '╜'),
    (t(1, 3, 0, 3), '╢'),
    (t(1, 3, 1, 0), '╨'),
    (t(1, 3, 1, 3), '╫'),
    (t(2, 0, 0, 0), '╸'),
    (t(2, 0, 0, 1), '┑'),
    (t(2, 0, 0, 2), '┓'),
    (t(2, 0, 1, 0), '╾'),
    (t(2, 0, 1, 1), '┭'),
    (t(2, 0, 1, 2), '┱'),
    (t(2, 0, 2, 0), '━'),
    (t(2, 0, 2, 1), '┯'),
    (t(2, 0, 2, 2), '┳'),
    (t(2, 1, 0, 0), '┙'),
    (t(2, 1, 0, 1), '┥'),
    (t(2, 1, 0, 2), '┪'),
    (t(2, 1, 1, 0), '┵'),
    (t(2, 1, 1, 1), '┽'),
    (t(2, 1, 1, 2), '╅'),
    (t(2, 1, 2, 0), '┷'),
    (t(2, 1, 2, 1), '┿'),
    (t(2, 1, 2, 2), '╈'),
    (t(2, 2, 0, 0), '┛'),
    (t(2, 2, 0, 1), '┩'),
    (t(2, 2, 0, 2), '┫'),
    (t(2, 2, 1, 0), '┹'),
    (t(2, 2, 1, 1), '╃'),
    (t(2, 2, 1, 2), '╉'),
    (t(2, 2, 2, 0), '┻'),
    (t(2, 2, 2, 1), '╇'),
    (t(2, 2, 2, 2), '╋'),
    (t(3, 0, 0, 1), '╕'),
    (t(3, 0, 0, 3), '╗'),
    (t(3, 0, 3, 0), '═'),
    (t(3, 0, 3, 1), '╤'),
    (t(3, 0, 3, 3), '╦'),
    (t(3, 1, 0, 0), '╛'),
    (t(3, 1, 0, 1), '╡'),
    (t(3, 1, 3, 0), '╧'),
    (t(3, 1, 3, 1), '╪'),
    (t(3, 3, 0, 0), '╝'),
    (t(3, 3, 0, 3), '╣'),
    (t(3, 3, 3, 0), '╩'),
    (t(3, 3, 3, 3), '╬'),
];

/// Connectors of `glyph`, if it is a known box-drawing piece.
#[must_use]
pub fn tile_encoding(glyph: char) -> Option<TileEncoding> {
    GLYPH_TO_TILE
        .binary_search_by_key(&glyph, |&(c, _)| c)
        .ok()
        .map(|i| GLYPH_TO_TILE[i].1)
}

/// Glyph drawing exactly `encoding`, if one exists.
#[must_use]
pub fn glyph_for(encoding: TileEncoding) -> Option<char> {
    TILE_TO_GLYPH
        .binary_search_by_key(&encoding, |&(e, _)| e)
        .ok()
        .map(|i| TILE_TO_GLYPH[i].1)
}

/// Replacement glyphs for two adjacent pieces, `first` before `second`
/// along `axis`. `None` means the piece stays as drawn.
#[must_use]
pub fn merge(first: TileEncoding, second: TileEncoding, axis: Axis) -> (Option<char>, Option<char>) {
    let exit = first.exit(axis);
    let entry = second.entry(axis);
    let first_glyph = if exit == LineWeight::None && entry != LineWeight::None {
        glyph_for(first.with_exit(axis, entry))
    } else {
        None
    };
    let second_glyph = if entry == LineWeight::None && exit != LineWeight::None {
        glyph_for(second.with_entry(axis, exit))
    } else {
        None
    };
    (first_glyph, second_glyph)
}

/// Connectors of a cell the shader may rewrite.
///
/// Every piece of the box-drawing block is three bytes of UTF-8, so the
/// length test rejects most text before the table lookup.
fn cell_tile(cell: &Cell) -> Option<TileEncoding> {
    if !cell.auto_merge || cell.text.len() != 3 {
        return None;
    }
    let mut chars = cell.text.as_str().chars();
    let glyph = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    tile_encoding(glyph)
}

fn merge_cells(cells: &mut [Cell], first: usize, second: usize, axis: Axis) -> usize {
    let (Some(a), Some(b)) = (cell_tile(&cells[first]), cell_tile(&cells[second])) else {
        return 0;
    };
    let (new_first, new_second) = merge(a, b, axis);
    let mut upgraded = 0;
    if let Some(c) = new_first {
        cells[first].text = GlyphText::from_char(c);
        upgraded += 1;
    }
    if let Some(c) = new_second {
        cells[second].text = GlyphText::from_char(c);
        upgraded += 1;
    }
    upgraded
}

/// Merge box-drawing pieces across a row-major grid `width` cells wide.
///
/// Cells are visited in order; each is merged with its left neighbour, then
/// with the neighbour above, so rewrites made earlier in the pass are seen by
/// later cells. Returns the number of cells rewritten.
pub(crate) fn auto_merge(cells: &mut [Cell], width: usize) -> usize {
    let span = debug_span!("auto_merge", cells = cells.len());
    let _guard = span.enter();

    if width == 0 {
        return 0;
    }
    let mut upgraded = 0;
    for idx in 0..cells.len() {
        if cell_tile(&cells[idx]).is_none() {
            continue;
        }
        if idx % width > 0 {
            upgraded += merge_cells(cells, idx - 1, idx, Axis::Horizontal);
        }
        if idx >= width {
            upgraded += merge_cells(cells, idx - width, idx, Axis::Vertical);
        }
    }
    debug!(upgraded, "box-drawing merge pass");
    upgraded
}
