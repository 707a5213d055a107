#![forbid(unsafe_code)]

//! ANSI escape sequence helpers.
//!
//! Pure byte generation: no state, the encoder decides what to emit.
//!
//! | Category | Sequence | Description |
//! |----------|----------|-------------|
//! | CSI | `ESC [ n m` | SGR (Select Graphic Rendition) |
//! | CSI | `ESC [ 1 A` | Cursor up one line |
//! | CSI | `ESC [ 2 K` | Erase entire line |
//! | OSC | `ESC ] 8 ; ; url ESC \` | Hyperlink (OSC 8) |

use std::io::{self, Write};

use crate::cell::StyleFlags;
use crate::color::Color;

// =============================================================================
// SGR (Select Graphic Rendition)
// =============================================================================

/// SGR codes for a style flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SgrCodes {
    pub on: u8,
    pub off: u8,
}

/// Bold (on=1, off=22). Shares its reset with dim.
pub const SGR_BOLD: SgrCodes = SgrCodes { on: 1, off: 22 };
/// Dim (on=2, off=22). Shares its reset with bold.
pub const SGR_DIM: SgrCodes = SgrCodes { on: 2, off: 22 };
/// Underline (on=4, off=24). Shares its reset with double underline.
pub const SGR_UNDERLINE: SgrCodes = SgrCodes { on: 4, off: 24 };
/// Blink (on=5, off=25).
pub const SGR_BLINK: SgrCodes = SgrCodes { on: 5, off: 25 };
/// Reverse video (on=7, off=27).
pub const SGR_INVERTED: SgrCodes = SgrCodes { on: 7, off: 27 };
/// Strikethrough (on=9, off=29).
pub const SGR_STRIKETHROUGH: SgrCodes = SgrCodes { on: 9, off: 29 };
/// Double underline (on=21, off=24). Shares its reset with underline.
pub const SGR_UNDERLINE_DOUBLE: SgrCodes = SgrCodes { on: 21, off: 24 };

/// Set/reset codes for a single style flag.
#[must_use]
pub const fn sgr_codes_for_flag(flag: StyleFlags) -> Option<SgrCodes> {
    match flag.bits() {
        0b0000_0001 => Some(SGR_BLINK),
        0b0000_0010 => Some(SGR_BOLD),
        0b0000_0100 => Some(SGR_DIM),
        0b0000_1000 => Some(SGR_INVERTED),
        0b0001_0000 => Some(SGR_UNDERLINE),
        0b0010_0000 => Some(SGR_UNDERLINE_DOUBLE),
        0b0100_0000 => Some(SGR_STRIKETHROUGH),
        _ => None,
    }
}

/// Write `CSI code m`.
#[inline]
pub fn sgr_code<W: Write>(w: &mut W, code: u8) -> io::Result<()> {
    write!(w, "\x1b[{code}m")
}

/// Write the foreground color: `CSI 39 m`, `CSI 31 m`, `CSI 38;5;n m`, ...
pub fn sgr_fg<W: Write>(w: &mut W, color: Color) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    color.write_sgr_params(w, false)?;
    w.write_all(b"m")
}

/// Write the background color: `CSI 49 m`, `CSI 41 m`, `CSI 48;5;n m`, ...
pub fn sgr_bg<W: Write>(w: &mut W, color: Color) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    color.write_sgr_params(w, true)?;
    w.write_all(b"m")
}

// =============================================================================
// Cursor and erase
// =============================================================================

/// Carriage return.
pub const CR: &str = "\r";

/// Row separator in rendered output.
pub const CRLF: &str = "\r\n";

/// Cursor up one line: `CSI 1 A`.
pub const CURSOR_UP: &str = "\x1b[1A";

/// Erase the entire line: `CSI 2 K`.
pub const ERASE_LINE: &str = "\x1b[2K";

// =============================================================================
// OSC 8 Hyperlinks
// =============================================================================

/// Open an OSC 8 hyperlink (`ESC ] 8 ; ; url ESC \`).
///
/// An empty `url` closes the current link.
pub fn hyperlink_start<W: Write>(w: &mut W, url: &str) -> io::Result<()> {
    write!(w, "\x1b]8;;{url}\x1b\\")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Ansi16;

    fn to_bytes<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> Vec<u8> {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        buf
    }

    #[test]
    fn sgr_code_bytes() {
        assert_eq!(to_bytes(|w| sgr_code(w, 1)), b"\x1b[1m");
        assert_eq!(to_bytes(|w| sgr_code(w, 22)), b"\x1b[22m");
    }

    #[test]
    fn flag_codes() {
        assert_eq!(sgr_codes_for_flag(StyleFlags::BOLD), Some(SGR_BOLD));
        assert_eq!(
            sgr_codes_for_flag(StyleFlags::UNDERLINE_DOUBLE),
            Some(SGR_UNDERLINE_DOUBLE)
        );
        assert_eq!(sgr_codes_for_flag(StyleFlags::BOLD | StyleFlags::DIM), None);
        assert_eq!(sgr_codes_for_flag(StyleFlags::empty()), None);
    }

    #[test]
    fn shared_resets() {
        assert_eq!(SGR_BOLD.off, SGR_DIM.off);
        assert_eq!(SGR_UNDERLINE.off, SGR_UNDERLINE_DOUBLE.off);
    }

    #[test]
    fn color_sequences() {
        assert_eq!(to_bytes(|w| sgr_fg(w, Color::Default)), b"\x1b[39m");
        assert_eq!(to_bytes(|w| sgr_bg(w, Color::Default)), b"\x1b[49m");
        assert_eq!(to_bytes(|w| sgr_fg(w, Ansi16::Blue.into())), b"\x1b[34m");
        assert_eq!(
            to_bytes(|w| sgr_bg(w, Color::rgb(10, 20, 30))),
            b"\x1b[48;2;10;20;30m"
        );
    }

    #[test]
    fn hyperlink_bytes() {
        assert_eq!(
            to_bytes(|w| hyperlink_start(w, "https://example.com")),
            b"\x1b]8;;https://example.com\x1b\\"
        );
        assert_eq!(to_bytes(|w| hyperlink_start(w, "")), b"\x1b]8;;\x1b\\");
    }
}
