#![forbid(unsafe_code)]

//! Terminal cursor descriptor.
//!
//! A screen carries a [`Cursor`]: where the terminal cursor should rest after
//! a frame is drawn, and which shape it should take. The shape maps onto
//! DECSCUSR (`CSI n SP q`); [`CursorShape::Hidden`] maps onto DECTCEM hide.

use std::io::{self, Write};

/// Hide cursor: `CSI ? 25 l`
pub const CURSOR_HIDE: &[u8] = b"\x1b[?25l";

/// Show cursor: `CSI ? 25 h`
pub const CURSOR_SHOW: &[u8] = b"\x1b[?25h";

/// Cursor shape, numbered as DECSCUSR parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CursorShape {
    /// Cursor not displayed.
    #[default]
    Hidden = 0,
    /// Blinking block.
    BlockBlinking = 1,
    /// Steady block.
    Block = 2,
    /// Blinking underline.
    UnderlineBlinking = 3,
    /// Steady underline.
    Underline = 4,
    /// Blinking vertical bar.
    BarBlinking = 5,
    /// Steady vertical bar.
    Bar = 6,
}

impl CursorShape {
    /// DECSCUSR parameter for this shape.
    #[must_use]
    pub const fn decscusr(self) -> u8 {
        self as u8
    }

    /// Write the sequence that applies this shape.
    ///
    /// Visible shapes emit `CSI ? 25 h` followed by `CSI n SP q`; `Hidden`
    /// emits `CSI ? 25 l` only.
    pub fn write_sequence<W: Write>(self, w: &mut W) -> io::Result<()> {
        match self {
            Self::Hidden => w.write_all(CURSOR_HIDE),
            shape => {
                w.write_all(CURSOR_SHOW)?;
                write!(w, "\x1b[{} q", shape.decscusr())
            }
        }
    }
}

/// Cursor position and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    /// Column (0-indexed).
    pub x: u16,
    /// Row (0-indexed).
    pub y: u16,
    /// Displayed shape.
    pub shape: CursorShape,
}

impl Cursor {
    /// Create a cursor at the given cell.
    #[must_use]
    pub const fn new(x: u16, y: u16, shape: CursorShape) -> Self {
        Self { x, y, shape }
    }
}
