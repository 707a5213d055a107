#![forbid(unsafe_code)]

//! Per-code-point display classification.
//!
//! A code point is exactly one of: control (dropped, unmeasurable), combining
//! (zero width, attaches to the previous glyph), full-width (two cells) or
//! normal (one cell). Line feed counts as normal.

use core::cmp::Ordering;

use crate::tables::{EXTEND, FULL_WIDTH, Interval};

/// Display class of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Control,
    Combining,
    FullWidth,
    Normal,
}

impl CharClass {
    /// Number of cells a code point of this class occupies.
    ///
    /// `None` for control characters, which have no display width.
    #[inline]
    #[must_use]
    pub const fn width(self) -> Option<usize> {
        match self {
            Self::Control => None,
            Self::Combining => Some(0),
            Self::FullWidth => Some(2),
            Self::Normal => Some(1),
        }
    }
}

/// Binary search a sorted, non-overlapping interval table.
pub(crate) fn lookup<T>(table: &[T], cp: u32, bounds: impl Fn(&T) -> (u32, u32)) -> Option<&T> {
    let (first, _) = bounds(table.first()?);
    let (_, last) = bounds(table.last()?);
    if cp < first || cp > last {
        return None;
    }
    table
        .binary_search_by(|entry| {
            let (lo, hi) = bounds(entry);
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|i| &table[i])
}

#[inline]
fn in_table(ch: char, table: &[Interval]) -> bool {
    lookup(table, u32::from(ch), |iv| (iv.first, iv.last)).is_some()
}

/// NUL, C0 controls other than line feed, DEL and the C1 range.
#[inline]
#[must_use]
pub const fn is_control(ch: char) -> bool {
    matches!(ch as u32, 0..=9 | 11..=31 | 0x7F..=0x9F)
}

/// Whether `ch` has the Extend word-break property.
#[inline]
#[must_use]
pub fn is_combining(ch: char) -> bool {
    in_table(ch, &EXTEND)
}

/// Whether `ch` occupies two terminal cells.
#[inline]
#[must_use]
pub fn is_full_width(ch: char) -> bool {
    // Nothing below the combining diacritics block is wide.
    if u32::from(ch) < 0x300 {
        return false;
    }
    in_table(ch, &FULL_WIDTH)
}

/// Classify a code point. Control wins over combining, combining over width.
#[must_use]
pub fn char_class(ch: char) -> CharClass {
    if is_control(ch) {
        CharClass::Control
    } else if is_combining(ch) {
        CharClass::Combining
    } else if is_full_width(ch) {
        CharClass::FullWidth
    } else {
        CharClass::Normal
    }
}

/// Cell width of a single code point, `None` for control characters.
#[inline]
#[must_use]
pub fn char_width(ch: char) -> Option<usize> {
    char_class(ch).width()
}
