#![forbid(unsafe_code)]

//! Terminal colors and their SGR parameters.
//!
//! | Color | Foreground | Background |
//! |-------|------------|------------|
//! | `Default` | `39` | `49` |
//! | `Palette16` 0-7 | `30`-`37` | `40`-`47` |
//! | `Palette16` 8-15 | `90`-`97` | `100`-`107` |
//! | `Palette256(n)` | `38;5;n` | `48;5;n` |
//! | `TrueColor` | `38;2;r;g;b` | `48;2;r;g;b` |

use std::io::{self, Write};

/// 24-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The 16 standard terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ansi16 {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Ansi16 {
    /// Palette index (0-15).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// SGR code for this color as foreground (30-37, 90-97).
    #[inline]
    pub const fn fg_code(self) -> u8 {
        let i = self.index();
        if i < 8 { 30 + i } else { 90 + i - 8 }
    }

    /// SGR code for this color as background (40-47, 100-107).
    #[inline]
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }
}

/// A cell's foreground or background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's own default.
    #[default]
    Default,
    Palette16(Ansi16),
    Palette256(u8),
    TrueColor(Rgb),
}

impl Color {
    /// Truecolor from components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::TrueColor(Rgb::new(r, g, b))
    }

    /// Write the SGR parameters (without `ESC [` and `m`).
    pub fn write_sgr_params<W: Write>(self, w: &mut W, background: bool) -> io::Result<()> {
        let base = if background { 48 } else { 38 };
        match self {
            Self::Default => write!(w, "{}", if background { 49 } else { 39 }),
            Self::Palette16(c) => {
                let code = if background { c.bg_code() } else { c.fg_code() };
                write!(w, "{code}")
            }
            Self::Palette256(n) => write!(w, "{base};5;{n}"),
            Self::TrueColor(Rgb { r, g, b }) => write!(w, "{base};2;{r};{g};{b}"),
        }
    }

    /// SGR parameters as a string, e.g. `"38;5;208"`.
    #[must_use]
    pub fn sgr_params(self, background: bool) -> String {
        let mut buf = Vec::with_capacity(16);
        // Writing into a Vec cannot fail.
        let _ = self.write_sgr_params(&mut buf, background);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl From<Ansi16> for Color {
    fn from(c: Ansi16) -> Self {
        Self::Palette16(c)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Self::TrueColor(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        assert_eq!(Color::Default.sgr_params(false), "39");
        assert_eq!(Color::Default.sgr_params(true), "49");
    }

    #[test]
    fn palette16_params() {
        assert_eq!(Color::from(Ansi16::Red).sgr_params(false), "31");
        assert_eq!(Color::from(Ansi16::Red).sgr_params(true), "41");
        assert_eq!(Color::from(Ansi16::BrightWhite).sgr_params(false), "97");
        assert_eq!(Color::from(Ansi16::BrightBlack).sgr_params(true), "100");
    }

    #[test]
    fn palette256_params() {
        assert_eq!(Color::Palette256(208).sgr_params(false), "38;5;208");
        assert_eq!(Color::Palette256(0).sgr_params(true), "48;5;0");
    }

    #[test]
    fn truecolor_params() {
        assert_eq!(Color::rgb(255, 128, 0).sgr_params(false), "38;2;255;128;0");
        assert_eq!(Color::rgb(1, 2, 3).sgr_params(true), "48;2;1;2;3");
    }

    #[test]
    fn ansi16_codes_cover_both_banks() {
        assert_eq!(Ansi16::Black.fg_code(), 30);
        assert_eq!(Ansi16::White.fg_code(), 37);
        assert_eq!(Ansi16::BrightBlack.fg_code(), 90);
        assert_eq!(Ansi16::BrightWhite.bg_code(), 107);
    }
}
