#![forbid(unsafe_code)]

//! Style-diff encoder: state-tracked ANSI emission for a whole grid.
//!
//! The encoder walks the grid row by row and tracks the attributes the
//! terminal currently has (the "pen"). Before each glyph it emits only the
//! sequences needed to move the pen to that cell's attributes.
//!
//! # Shared resets
//!
//! Terminals clear BOLD and DIM with the same code (`22`) and both
//! underline variants with `24`. When either member of a pair turns off, the
//! encoder resets the pair and re-asserts whatever should stay on.
//!
//! # Frame contract
//!
//! Every frame starts from the default pen and ends on it: the last row and
//! every row before a `\r\n` is followed by a transition back to default, so
//! the stream never leaves a style or hyperlink open.

use std::io::{self, Write};

use glyphgrid_core::{debug, info_span};

use crate::ansi;
use crate::cell::{Cell, StyleFlags};
use crate::color::Color;
use crate::hyperlink::HyperlinkTable;
use crate::screen::Screen;

/// Emission order for individually switched flags.
const FLAG_ORDER: [StyleFlags; 7] = [
    StyleFlags::BOLD,
    StyleFlags::DIM,
    StyleFlags::UNDERLINE,
    StyleFlags::BLINK,
    StyleFlags::INVERTED,
    StyleFlags::STRIKETHROUGH,
    StyleFlags::UNDERLINE_DOUBLE,
];

/// Attributes the terminal is currently drawing with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Pen {
    hyperlink: u8,
    fg: Color,
    bg: Color,
    style: StyleFlags,
}

impl Pen {
    fn from_cell(cell: &Cell) -> Self {
        Self {
            hyperlink: cell.hyperlink,
            fg: cell.fg,
            bg: cell.bg,
            style: cell.style,
        }
    }
}

/// Renders a [`Screen`] into a byte sink with minimal style changes.
#[derive(Debug)]
pub struct StyleDiffEncoder<W: Write> {
    writer: W,
    pen: Pen,
    /// Escape sequences written during the current frame.
    transitions: usize,
}

impl<W: Write> StyleDiffEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pen: Pen::default(),
            transitions: 0,
        }
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Escape sequences written by the last [`encode`](Self::encode).
    #[inline]
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    /// Write one full frame of `screen`.
    ///
    /// The placeholder cell after a full-width glyph is skipped entirely.
    pub fn encode(&mut self, screen: &Screen) -> io::Result<()> {
        let span = info_span!(
            "encode",
            width = screen.width(),
            height = screen.height()
        );
        let _guard = span.enter();

        self.pen = Pen::default();
        self.transitions = 0;
        let links = screen.hyperlinks();

        for y in 0..screen.height() {
            if y != 0 {
                self.transition(links, Pen::default())?;
                self.writer.write_all(ansi::CRLF.as_bytes())?;
            }
            let mut previous_full_width = false;
            for cell in screen.row(y) {
                if !previous_full_width {
                    self.transition(links, Pen::from_cell(cell))?;
                    self.writer.write_all(cell.text.as_bytes())?;
                }
                previous_full_width = cell.text.width() == Some(2);
            }
        }
        self.transition(links, Pen::default())?;

        debug!(transitions = self.transitions, "frame encoded");
        Ok(())
    }

    /// Move the pen to `next`, writing only what changed.
    fn transition(&mut self, links: &HyperlinkTable, next: Pen) -> io::Result<()> {
        let w = &mut self.writer;
        let prev = self.pen;

        if next.hyperlink != prev.hyperlink {
            ansi::hyperlink_start(w, links.get(next.hyperlink))?;
            self.transitions += 1;
        }

        let mut current = prev.style;
        let turned_off = current.difference(next.style);
        if turned_off.intersects(StyleFlags::INTENSITY) {
            ansi::sgr_code(w, ansi::SGR_BOLD.off)?;
            current.remove(StyleFlags::INTENSITY);
            self.transitions += 1;
        }
        if turned_off.intersects(StyleFlags::ANY_UNDERLINE) {
            ansi::sgr_code(w, ansi::SGR_UNDERLINE.off)?;
            current.remove(StyleFlags::ANY_UNDERLINE);
            self.transitions += 1;
        }

        // Recomputed after the shared resets, which may have cleared a flag
        // that `next` still wants.
        let on = next.style.difference(current);
        let off = current.difference(next.style);
        for flag in FLAG_ORDER {
            let Some(codes) = ansi::sgr_codes_for_flag(flag) else {
                continue;
            };
            if on.contains(flag) {
                ansi::sgr_code(w, codes.on)?;
                self.transitions += 1;
            } else if off.contains(flag) {
                ansi::sgr_code(w, codes.off)?;
                self.transitions += 1;
            }
        }

        if next.fg != prev.fg || next.bg != prev.bg {
            ansi::sgr_fg(w, next.fg)?;
            ansi::sgr_bg(w, next.bg)?;
            self.transitions += 2;
        }

        self.pen = next;
        Ok(())
    }
}

/// Write one frame of `screen` into `w`.
pub fn render_to<W: Write>(screen: &Screen, w: &mut W) -> io::Result<()> {
    StyleDiffEncoder::new(w).encode(screen)
}

/// One frame of `screen` as bytes.
pub fn render(screen: &Screen) -> Vec<u8> {
    let mut encoder = StyleDiffEncoder::new(Vec::with_capacity(screen.cells().len() * 2));
    // Writing into a Vec cannot fail.
    let _ = encoder.encode(screen);
    encoder.into_inner()
}

/// Bytes that return the cursor from the last row of a `height`-row frame to
/// the start of its first row.
///
/// Without `clear` this is `\r` followed by one cursor-up per row above the
/// last. With `clear` the current line is erased first and every line passed
/// on the way up is erased too.
pub fn reset_position(height: u16, clear: bool) -> String {
    let rows_above = usize::from(height.saturating_sub(1));
    let mut out = String::with_capacity(4 + rows_above * 8);
    out.push_str(ansi::CR);
    if clear {
        out.push_str(ansi::ERASE_LINE);
        for _ in 0..rows_above {
            out.push_str(ansi::CURSOR_UP);
            out.push_str(ansi::ERASE_LINE);
        }
    } else {
        for _ in 0..rows_above {
            out.push_str(ansi::CURSOR_UP);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Ansi16;

    fn encode(screen: &Screen) -> String {
        String::from_utf8(render(screen)).unwrap()
    }

    fn styled_row(styles: &[StyleFlags]) -> Screen {
        let mut screen = Screen::new(styles.len() as u16, 1);
        for (x, style) in styles.iter().enumerate() {
            let cell = screen.cell_mut(x as u16, 0);
            cell.text = "x".into();
            cell.style = *style;
        }
        screen
    }

    // =========================================================================
    // Plain output
    // =========================================================================

    #[test]
    fn default_grid_has_no_escapes() {
        let mut screen = Screen::new(3, 2);
        screen.set_glyph(0, 0, "a");
        screen.set_glyph(2, 1, "z");
        assert_eq!(encode(&screen), "a  \r\n  z");
    }

    #[test]
    fn empty_grid_renders_nothing() {
        assert_eq!(encode(&Screen::new(0, 0)), "");
        assert_eq!(encode(&Screen::new(0, 3)), "\r\n\r\n");
    }

    #[test]
    fn full_width_placeholder_is_skipped() {
        let mut screen = Screen::new(3, 1);
        screen.set_glyph(0, 0, "中");
        screen.set_glyph(1, 0, "");
        screen.set_glyph(2, 0, "!");
        assert_eq!(encode(&screen), "中!");
    }

    #[test]
    fn cell_after_full_width_is_skipped_even_if_not_placeholder() {
        let mut screen = Screen::new(3, 1);
        screen.set_glyph(0, 0, "中");
        screen.set_glyph(1, 0, "x");
        assert_eq!(encode(&screen), "中 ");
    }

    // =========================================================================
    // Style transitions
    // =========================================================================

    #[test]
    fn bold_on_then_off() {
        let screen = styled_row(&[StyleFlags::BOLD, StyleFlags::empty()]);
        assert_eq!(encode(&screen), "\x1b[1mx\x1b[22mx");
    }

    #[test]
    fn style_closed_at_end_of_frame() {
        let screen = styled_row(&[StyleFlags::UNDERLINE]);
        assert_eq!(encode(&screen), "\x1b[4mx\x1b[24m");
    }

    #[test]
    fn shared_reset_reasserts_dim() {
        let screen = styled_row(&[StyleFlags::BOLD | StyleFlags::DIM, StyleFlags::DIM]);
        assert_eq!(encode(&screen), "\x1b[1m\x1b[2mx\x1b[22m\x1b[2mx\x1b[22m");
    }

    #[test]
    fn shared_reset_reasserts_double_underline() {
        let screen = styled_row(&[
            StyleFlags::UNDERLINE | StyleFlags::UNDERLINE_DOUBLE,
            StyleFlags::UNDERLINE_DOUBLE,
        ]);
        assert_eq!(
            encode(&screen),
            "\x1b[4m\x1b[21mx\x1b[24m\x1b[21mx\x1b[24m"
        );
    }

    #[test]
    fn independent_flags_have_own_resets() {
        let all = StyleFlags::BLINK | StyleFlags::INVERTED | StyleFlags::STRIKETHROUGH;
        let screen = styled_row(&[all, StyleFlags::empty()]);
        assert_eq!(
            encode(&screen),
            "\x1b[5m\x1b[7m\x1b[9mx\x1b[25m\x1b[27m\x1b[29mx"
        );
    }

    #[test]
    fn unchanged_style_is_not_repeated() {
        let screen = styled_row(&[StyleFlags::BOLD, StyleFlags::BOLD, StyleFlags::BOLD]);
        assert_eq!(encode(&screen), "\x1b[1mxxx\x1b[22m");
    }

    #[test]
    fn style_reset_between_rows() {
        let mut screen = Screen::new(1, 2);
        screen.cell_mut(0, 0).style = StyleFlags::BOLD;
        screen.cell_mut(0, 1).style = StyleFlags::BOLD;
        assert_eq!(encode(&screen), "\x1b[1m \x1b[22m\r\n\x1b[1m \x1b[22m");
    }

    // =========================================================================
    // Colors
    // =========================================================================

    #[test]
    fn colors_are_emitted_together() {
        let mut screen = Screen::new(2, 1);
        screen.cell_mut(0, 0).fg = Ansi16::Red.into();
        assert_eq!(encode(&screen), "\x1b[31m\x1b[49m \x1b[39m\x1b[49m ");
    }

    #[test]
    fn background_change_also_writes_foreground() {
        let mut screen = Screen::new(1, 1);
        screen.cell_mut(0, 0).bg = Color::Palette256(208);
        assert_eq!(encode(&screen), "\x1b[39m\x1b[48;5;208m \x1b[39m\x1b[49m");
    }

    #[test]
    fn truecolor_sequences() {
        let mut screen = Screen::new(1, 1);
        screen.cell_mut(0, 0).fg = Color::rgb(1, 2, 3);
        screen.cell_mut(0, 0).bg = Color::rgb(4, 5, 6);
        assert_eq!(
            encode(&screen),
            "\x1b[38;2;1;2;3m\x1b[48;2;4;5;6m \x1b[39m\x1b[49m"
        );
    }

    // =========================================================================
    // Hyperlinks
    // =========================================================================

    #[test]
    fn hyperlink_opened_and_closed() {
        let mut screen = Screen::new(3, 1);
        let id = screen.register_hyperlink("https://example.com");
        screen.cell_mut(0, 0).hyperlink = id;
        screen.cell_mut(1, 0).hyperlink = id;
        assert_eq!(
            encode(&screen),
            "\x1b]8;;https://example.com\x1b\\  \x1b]8;;\x1b\\ "
        );
    }

    #[test]
    fn hyperlink_closed_at_row_end() {
        let mut screen = Screen::new(1, 2);
        let id = screen.register_hyperlink("https://a.example");
        screen.cell_mut(0, 0).hyperlink = id;
        assert_eq!(
            encode(&screen),
            "\x1b]8;;https://a.example\x1b\\ \x1b]8;;\x1b\\\r\n "
        );
    }

    #[test]
    fn unknown_hyperlink_id_opens_empty_target() {
        let mut screen = Screen::new(1, 1);
        screen.cell_mut(0, 0).hyperlink = 7;
        assert_eq!(encode(&screen), "\x1b]8;;\x1b\\ \x1b]8;;\x1b\\");
    }

    // =========================================================================
    // Encoder reuse and reset sequences
    // =========================================================================

    #[test]
    fn encoder_starts_each_frame_from_default() {
        let screen = styled_row(&[StyleFlags::BOLD]);
        let mut encoder = StyleDiffEncoder::new(Vec::new());
        encoder.encode(&screen).unwrap();
        encoder.encode(&screen).unwrap();
        assert_eq!(encoder.transitions(), 2);
        let out = String::from_utf8(encoder.into_inner()).unwrap();
        assert_eq!(out, "\x1b[1mx\x1b[22m\x1b[1mx\x1b[22m");
    }

    #[test]
    fn render_to_matches_render() {
        let screen = styled_row(&[StyleFlags::INVERTED, StyleFlags::empty()]);
        let mut out = Vec::new();
        render_to(&screen, &mut out).unwrap();
        assert_eq!(out, render(&screen));
    }

    #[test]
    fn reset_position_without_clear() {
        assert_eq!(reset_position(1, false), "\r");
        assert_eq!(reset_position(3, false), "\r\x1b[1A\x1b[1A");
        assert_eq!(reset_position(0, false), "\r");
    }

    #[test]
    fn reset_position_with_clear() {
        assert_eq!(reset_position(1, true), "\r\x1b[2K");
        assert_eq!(reset_position(2, true), "\r\x1b[2K\x1b[1A\x1b[2K");
    }

    #[test]
    fn reset_position_tall_frame() {
        let up = reset_position(100, false);
        assert_eq!(up.len(), 1 + 99 * ansi::CURSOR_UP.len());
        assert!(up.starts_with(ansi::CR));
        let cleared = reset_position(100, true);
        assert_eq!(cleared.matches(ansi::ERASE_LINE).count(), 100);
        assert_eq!(cleared.matches(ansi::CURSOR_UP).count(), 99);
    }
}
