#![forbid(unsafe_code)]

//! Terminal glyph segmentation.
//!
//! A glyph is what one cell (or, for full-width text, two cells) of the grid
//! displays: a base code point plus every combining mark that follows it.
//! Control characters and malformed bytes never produce glyphs. A full-width
//! glyph is followed by an empty placeholder glyph standing for its second
//! cell, so the glyph sequence lines up one-to-one with grid columns.
//!
//! Navigation (`glyph_next`, `glyph_previous`, `glyph_iterate`) works on
//! byte offsets and treats combining marks as part of the preceding glyph.

use std::borrow::Cow;
use std::iter::Peekable;

use crate::classify::{char_class, CharClass};
use crate::codepoint::{codepoints, decode_utf8, Utf8Codepoints};

/// The empty glyph occupying the second cell of a full-width glyph.
pub const PLACEHOLDER: &str = "";

/// Lazy glyph iterator. See [`glyphs`].
#[derive(Debug, Clone)]
pub struct Glyphs<'a> {
    text: &'a str,
    spans: Peekable<Utf8Codepoints<'a>>,
    placeholder_pending: bool,
    emitted: bool,
}

impl<'a> Glyphs<'a> {
    /// Append every combining mark that follows the base glyph, skipping
    /// controls and malformed bytes in between.
    fn absorb_marks(&mut self, glyph: &mut Cow<'a, str>, mut end: usize) {
        let text = self.text;
        while let Some(span) = self.spans.peek().copied() {
            match span.ch.map(char_class) {
                None | Some(CharClass::Control) => {}
                Some(CharClass::Combining) => {
                    let contiguous_from = match glyph {
                        Cow::Borrowed(base) if span.start == end => Some(end - base.len()),
                        _ => None,
                    };
                    match contiguous_from {
                        Some(start) => *glyph = Cow::Borrowed(&text[start..span.end]),
                        None => glyph.to_mut().push_str(&text[span.start..span.end]),
                    }
                    end = span.end;
                }
                Some(CharClass::FullWidth | CharClass::Normal) => return,
            }
            self.spans.next();
        }
    }
}

impl<'a> Iterator for Glyphs<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Cow<'a, str>> {
        if self.placeholder_pending {
            self.placeholder_pending = false;
            return Some(Cow::Borrowed(PLACEHOLDER));
        }

        loop {
            let span = self.spans.next()?;
            let Some(ch) = span.ch else { continue };
            let class = char_class(ch);
            match class {
                CharClass::Control => continue,
                // Only reachable before the first glyph: later marks are
                // absorbed by the glyph they follow.
                CharClass::Combining if !self.emitted => continue,
                CharClass::Combining | CharClass::FullWidth | CharClass::Normal => {}
            }

            let text = self.text;
            let mut glyph = Cow::Borrowed(&text[span.start..span.end]);
            // Marks after a full-width glyph join the glyph itself, so the
            // placeholder cell that follows always stays empty.
            self.absorb_marks(&mut glyph, span.end);
            self.emitted = true;
            self.placeholder_pending = class == CharClass::FullWidth;
            return Some(glyph);
        }
    }
}

/// Iterate the glyphs of `text` lazily.
#[must_use]
pub fn glyphs(text: &str) -> Glyphs<'_> {
    Glyphs {
        text,
        spans: codepoints(text.as_bytes()).peekable(),
        placeholder_pending: false,
        emitted: false,
    }
}

/// Split `text` into glyphs, one per display cell.
///
/// Glyphs borrow from `text` unless a control character separated a base
/// from its combining mark, in which case the joined glyph is owned.
#[must_use]
pub fn segment_to_glyphs(text: &str) -> Vec<Cow<'_, str>> {
    glyphs(text).collect()
}

/// Whether the code point decoded at `start` can begin a glyph.
#[inline]
fn starts_glyph(bytes: &[u8], start: usize) -> (bool, usize) {
    match decode_utf8(bytes, start) {
        Ok(d) => (
            matches!(char_class(d.ch), CharClass::FullWidth | CharClass::Normal),
            d.next,
        ),
        Err(e) => (false, e.next),
    }
}

/// Byte offset of the glyph after the one at `start`.
///
/// Returns `text.len()` when there is no further glyph.
#[must_use]
pub fn glyph_next(text: &str, mut start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut found = false;
    while start < bytes.len() {
        let (base, next) = starts_glyph(bytes, start);
        if base {
            if found {
                return start;
            }
            found = true;
        }
        start = next;
    }
    bytes.len()
}

/// Byte offset of the glyph before `start`, or 0 if there is none.
#[must_use]
pub fn glyph_previous(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut pos = start.min(bytes.len());
    while pos > 0 {
        pos -= 1;
        if bytes[pos] & 0b1100_0000 == 0b1000_0000 {
            continue;
        }
        if starts_glyph(bytes, pos).0 {
            return pos;
        }
    }
    0
}

/// Move `offset` glyphs forward (positive) or backward (negative) from the
/// byte offset `start`.
///
/// Stops early once either end of `text` is reached.
#[must_use]
pub fn glyph_iterate(text: &str, offset: isize, start: usize) -> usize {
    let step: fn(&str, usize) -> usize = if offset >= 0 {
        glyph_next
    } else {
        glyph_previous
    };
    let mut pos = start;
    for _ in 0..offset.unsigned_abs() {
        let moved = step(text, pos);
        if moved == pos {
            break;
        }
        pos = moved;
    }
    pos
}

/// For every display cell of `text`, the index of the glyph occupying it.
///
/// Full-width glyphs fill two cells with the same index. A combining mark
/// with nothing before it takes a cell of its own as glyph 0.
#[must_use]
pub fn cell_to_glyph_index(text: &str) -> Vec<usize> {
    let mut out = Vec::with_capacity(text.len());
    let mut glyph = 0usize;
    for ch in codepoints(text.as_bytes()).filter_map(|span| span.ch) {
        match char_class(ch) {
            CharClass::Control => {}
            CharClass::Combining => {
                if glyph == 0 {
                    out.push(0);
                    glyph = 1;
                }
            }
            CharClass::FullWidth => {
                out.push(glyph);
                out.push(glyph);
                glyph += 1;
            }
            CharClass::Normal => {
                out.push(glyph);
                glyph += 1;
            }
        }
    }
    out
}

/// Number of glyphs in `text`, counting a leading orphan combining mark as
/// one glyph and a full-width glyph once.
#[must_use]
pub fn glyph_count(text: &str) -> usize {
    codepoints(text.as_bytes())
        .filter_map(|span| span.ch)
        .fold(0, |count, ch| match char_class(ch) {
            CharClass::Control => count,
            CharClass::Combining => count.max(1),
            CharClass::FullWidth | CharClass::Normal => count + 1,
        })
}

/// Display width of `text` in cells.
///
/// `None` if `text` contains any control character: such text cannot be laid
/// out, and no partial width is reported.
#[must_use]
pub fn string_width(text: &str) -> Option<usize> {
    codepoints(text.as_bytes())
        .filter_map(|span| span.ch)
        .try_fold(0usize, |width, ch| Some(width + char_class(ch).width()?))
}
