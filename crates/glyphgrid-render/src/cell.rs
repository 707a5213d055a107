#![forbid(unsafe_code)]

//! Cell types.
//!
//! A [`Cell`] is one terminal column of one row: the glyph it displays, its
//! colors, style flags, hyperlink id and whether the box-drawing shader may
//! rewrite it.
//!
//! # Glyph storage
//!
//! ```text
//! GlyphText(SmallVec<[u8; 16]>)
//!   " "        default cell
//!   ""         placeholder after a full-width glyph
//!   "e\u{301}" base + combining marks, still inline
//! ```
//!
//! Up to 16 bytes stay inline, which covers every single code point and the
//! usual base-plus-marks clusters. Longer clusters spill to the heap.

use core::fmt;

use glyphgrid_text::string_width;
use smallvec::SmallVec;

use crate::color::Color;

/// UTF-8 text of one glyph.
///
/// Only ever built from `&str` or `char`, so the bytes are always valid UTF-8.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GlyphText(SmallVec<[u8; 16]>);

impl GlyphText {
    /// Glyph text from a string slice.
    #[inline]
    pub fn new(text: &str) -> Self {
        Self(SmallVec::from_slice(text.as_bytes()))
    }

    /// Glyph text holding a single character.
    #[inline]
    pub fn from_char(c: char) -> Self {
        let mut buf = [0u8; 4];
        Self::new(c.encode_utf8(&mut buf))
    }

    /// The empty placeholder standing for the second half of a full-width glyph.
    #[inline]
    pub fn placeholder() -> Self {
        Self(SmallVec::new())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty()
    }

    /// Display width, `None` if the text holds a control character.
    #[inline]
    pub fn width(&self) -> Option<usize> {
        string_width(self.as_str())
    }

    /// Replace the contents, reusing the inline buffer.
    pub fn set(&mut self, text: &str) {
        self.0.clear();
        self.0.extend_from_slice(text.as_bytes());
    }
}

impl Default for GlyphText {
    fn default() -> Self {
        Self::new(" ")
    }
}

impl fmt::Debug for GlyphText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for GlyphText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for GlyphText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<char> for GlyphText {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl PartialEq<str> for GlyphText {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for GlyphText {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

bitflags::bitflags! {
    /// 7-bit cell style flags.
    ///
    /// BOLD and DIM share one terminal reset (`22`), as do UNDERLINE and
    /// UNDERLINE_DOUBLE (`24`). The encoder relies on that pairing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BLINK            = 0b0000_0001;
        const BOLD             = 0b0000_0010;
        const DIM              = 0b0000_0100;
        /// Reverse video (swap fg/bg).
        const INVERTED         = 0b0000_1000;
        const UNDERLINE        = 0b0001_0000;
        const UNDERLINE_DOUBLE = 0b0010_0000;
        const STRIKETHROUGH    = 0b0100_0000;
    }
}

impl StyleFlags {
    /// Flags cleared by SGR 22.
    pub const INTENSITY: Self = Self::BOLD.union(Self::DIM);
    /// Flags cleared by SGR 24.
    pub const ANY_UNDERLINE: Self = Self::UNDERLINE.union(Self::UNDERLINE_DOUBLE);
}

/// One terminal cell.
///
/// Equality ignores the hyperlink id: two cells that look the same are equal
/// even if they link to different targets.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub text: GlyphText,
    /// Index into the grid's hyperlink table, 0 for none.
    pub hyperlink: u8,
    pub bg: Color,
    pub fg: Color,
    pub style: StyleFlags,
    /// Whether the box-drawing shader may rewrite this cell.
    pub auto_merge: bool,
}

impl Cell {
    /// A default-styled cell showing `text`.
    #[inline]
    pub fn new(text: &str) -> Self {
        Self {
            text: GlyphText::new(text),
            ..Self::default()
        }
    }

    /// A default-styled cell showing `c`.
    #[inline]
    pub fn from_char(c: char) -> Self {
        Self {
            text: GlyphText::from_char(c),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    #[must_use]
    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleFlags) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_hyperlink(mut self, id: u8) -> Self {
        self.hyperlink = id;
        self
    }

    #[must_use]
    pub fn with_auto_merge(mut self, auto_merge: bool) -> Self {
        self.auto_merge = auto_merge;
        self
    }

    /// Copy colors, style and hyperlink from `other`, keeping text and
    /// `auto_merge`.
    pub fn set_style_from(&mut self, other: &Cell) {
        self.fg = other.fg;
        self.bg = other.bg;
        self.style = other.style;
        self.hyperlink = other.hyperlink;
    }

    /// Whether both cells render with identical attributes (text aside).
    #[inline]
    pub fn same_style(&self, other: &Cell) -> bool {
        self.fg == other.fg
            && self.bg == other.bg
            && self.style == other.style
            && self.hyperlink == other.hyperlink
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.text.is_placeholder()
    }

    /// Reset to the default cell, keeping the glyph buffer allocation.
    pub fn reset(&mut self) {
        self.text.set(" ");
        self.hyperlink = 0;
        self.bg = Color::Default;
        self.fg = Color::Default;
        self.style = StyleFlags::empty();
        self.auto_merge = false;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.bg == other.bg
            && self.fg == other.fg
            && self.auto_merge == other.auto_merge
            && self.style == other.style
    }
}

impl Eq for Cell {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Ansi16;

    #[test]
    fn default_cell_is_a_space() {
        let cell = Cell::default();
        assert_eq!(cell.text, " ");
        assert_eq!(cell.hyperlink, 0);
        assert_eq!(cell.fg, Color::Default);
        assert_eq!(cell.bg, Color::Default);
        assert!(cell.style.is_empty());
        assert!(!cell.auto_merge);
    }

    #[test]
    fn glyph_text_stays_inline_for_clusters() {
        let text = GlyphText::new("e\u{301}\u{302}");
        assert_eq!(text.len(), 5);
        assert_eq!(text.as_str(), "e\u{301}\u{302}");
        assert!(!text.0.spilled());
    }

    #[test]
    fn glyph_text_width() {
        assert_eq!(GlyphText::new("中").width(), Some(2));
        assert_eq!(GlyphText::placeholder().width(), Some(0));
        assert_eq!(GlyphText::new("\x1b").width(), None);
    }

    #[test]
    fn placeholder_is_empty() {
        assert!(GlyphText::placeholder().is_placeholder());
        assert!(!GlyphText::default().is_placeholder());
        assert_eq!(GlyphText::placeholder().as_str(), "");
    }

    #[test]
    fn equality_ignores_hyperlink() {
        let a = Cell::new("x").with_hyperlink(1);
        let b = Cell::new("x").with_hyperlink(2);
        assert_eq!(a, b);
        assert!(!a.same_style(&b));
    }

    #[test]
    fn equality_covers_visible_fields() {
        let base = Cell::new("x");
        assert_ne!(base, Cell::new("y"));
        assert_ne!(base, base.clone().with_fg(Ansi16::Red.into()));
        assert_ne!(base, base.clone().with_bg(Color::Palette256(3)));
        assert_ne!(base, base.clone().with_style(StyleFlags::BOLD));
        assert_ne!(base, base.clone().with_auto_merge(true));
    }

    #[test]
    fn reset_restores_default() {
        let mut cell = Cell::new("中")
            .with_fg(Color::rgb(1, 2, 3))
            .with_style(StyleFlags::BLINK | StyleFlags::UNDERLINE)
            .with_hyperlink(4)
            .with_auto_merge(true);
        cell.reset();
        assert_eq!(cell, Cell::default());
        assert_eq!(cell.hyperlink, 0);
    }

    #[test]
    fn shared_reset_groups() {
        assert_eq!(StyleFlags::INTENSITY, StyleFlags::BOLD | StyleFlags::DIM);
        assert_eq!(
            StyleFlags::ANY_UNDERLINE,
            StyleFlags::UNDERLINE | StyleFlags::UNDERLINE_DOUBLE
        );
    }

    #[test]
    fn set_style_from_keeps_text() {
        let mut cell = Cell::new("a").with_auto_merge(true);
        let styled = Cell::new("b")
            .with_fg(Ansi16::Green.into())
            .with_style(StyleFlags::DIM)
            .with_hyperlink(3);
        cell.set_style_from(&styled);
        assert_eq!(cell.text, "a");
        assert!(cell.auto_merge);
        assert!(cell.same_style(&styled));
    }
}
