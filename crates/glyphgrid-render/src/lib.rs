#![forbid(unsafe_code)]

//! Render kernel for glyphgrid.
//!
//! # Role in glyphgrid
//! `glyphgrid-render` owns the cell grid a frame is drawn into and turns it
//! into terminal bytes. Layout and widgets live elsewhere; they write cells
//! here and hand the finished [`Screen`] to the encoder.
//!
//! # Primary responsibilities
//! - **Cell / Screen**: styled cells, clip region, cursor, hyperlink table.
//! - **Shader**: joins adjoining box-drawing pieces into continuous borders.
//! - **StyleDiffEncoder**: emits only the SGR and OSC 8 changes between cells.
//! - **Draw**: lines, borders and glyph-segmented text.
//!
//! # Example
//! ```
//! use glyphgrid_core::geometry::Rect;
//! use glyphgrid_render::{BorderChars, Cell, Draw, Screen};
//!
//! let mut screen = Screen::new(6, 3);
//! screen.draw_border(Rect::new(0, 0, 6, 3), BorderChars::SQUARE, Cell::default());
//! screen.print_text(1, 1, "hi", Cell::default());
//! screen.apply_shader();
//! assert_eq!(screen.to_ansi_string(), "┌────┐\r\n│hi  │\r\n└────┘");
//! ```

pub mod ansi;
pub mod cell;
pub mod color;
pub mod drawing;
pub mod encoder;
pub mod hyperlink;
pub mod screen;
pub mod shader;

pub use cell::{Cell, GlyphText, StyleFlags};
pub use color::{Ansi16, Color, Rgb};
pub use drawing::{BorderChars, Draw};
pub use encoder::{StyleDiffEncoder, render, render_to, reset_position};
pub use hyperlink::{HyperlinkTable, MAX_HYPERLINKS};
pub use screen::Screen;
pub use shader::{Axis, LineWeight, TileEncoding};

pub use glyphgrid_core::cursor::{Cursor, CursorShape};
pub use glyphgrid_core::geometry::Rect;
