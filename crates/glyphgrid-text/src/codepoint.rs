#![forbid(unsafe_code)]

//! Code point decoding and encoding.
//!
//! Decoders read exactly one code point starting at an offset and report
//! where the next one starts. Malformed input is never fatal: the error value
//! carries the offset to resume from, so a caller scanning a buffer simply
//! steps over the bad unit and keeps going.
//!
//! ```text
//! ┏━━━━━━━━┳━━━━━━━━┳━━━━━━━━┳━━━━━━━━┓
//! ┃Byte 1  ┃Byte 2  ┃Byte 3  ┃Byte 4  ┃
//! ┡━━━━━━━━╇━━━━━━━━╇━━━━━━━━╇━━━━━━━━┩
//! │0xxxxxxx│        │        │        │
//! │110xxxxx│10xxxxxx│        │        │
//! │1110xxxx│10xxxxxx│10xxxxxx│        │
//! │11110xxx│10xxxxxx│10xxxxxx│10xxxxxx│
//! └────────┴────────┴────────┴────────┘
//! ```

use core::fmt;

use smallvec::SmallVec;

/// A successfully decoded code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded scalar value.
    pub ch: char,
    /// Offset of the first unit after this code point.
    pub next: usize,
}

/// A malformed or truncated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSequence {
    /// Offset of the malformed sequence.
    pub start: usize,
    /// Offset to resume decoding from.
    pub next: usize,
}

impl InvalidSequence {
    #[inline]
    fn at(start: usize, next: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(start, next, "skipping invalid code unit sequence");
        Self { start, next }
    }
}

impl fmt::Display for InvalidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid code unit sequence at offset {} (resume at {})",
            self.start, self.next
        )
    }
}

impl std::error::Error for InvalidSequence {}

/// Decode one UTF-8 code point from `bytes` at `start`.
///
/// Rejects truncated sequences, continuation bytes that are not `10xxxxxx`,
/// overlong forms, surrogates and values above U+10FFFF. Every failure
/// resumes at `start + 1`.
pub fn decode_utf8(bytes: &[u8], start: usize) -> Result<Decoded, InvalidSequence> {
    let invalid = || InvalidSequence::at(start, start + 1);
    let Some(&b0) = bytes.get(start) else {
        return Err(invalid());
    };

    let (len, lead, min) = match b0 {
        0x00..=0x7F => {
            return Ok(Decoded {
                ch: char::from(b0),
                next: start + 1,
            });
        }
        0xC0..=0xDF => (2, b0 & 0b0001_1111, 0x80),
        0xE0..=0xEF => (3, b0 & 0b0000_1111, 0x800),
        0xF0..=0xF7 => (4, b0 & 0b0000_0111, 0x1_0000),
        // Stray continuation byte or an unused lead byte.
        _ => return Err(invalid()),
    };

    let tail = bytes.get(start + 1..start + len).ok_or_else(invalid)?;
    let mut cp = u32::from(lead);
    for &b in tail {
        if b & 0b1100_0000 != 0b1000_0000 {
            return Err(invalid());
        }
        cp = (cp << 6) | u32::from(b & 0b0011_1111);
    }

    if cp < min {
        return Err(invalid());
    }
    char::from_u32(cp)
        .map(|ch| Decoded {
            ch,
            next: start + len,
        })
        .ok_or_else(invalid)
}

/// Decode one UTF-16 code point from `units` at `start`.
///
/// A high surrogate followed by a low surrogate combines into one
/// supplementary-plane code point. A high surrogate at the very end of the
/// input resumes past where its partner would be (`start + 2`); any other
/// lone surrogate resumes at `start + 1`.
pub fn decode_utf16(units: &[u16], start: usize) -> Result<Decoded, InvalidSequence> {
    let Some(&u0) = units.get(start) else {
        return Err(InvalidSequence::at(start, start + 1));
    };

    match u0 {
        0xD800..=0xDBFF => match units.get(start + 1) {
            None => Err(InvalidSequence::at(start, start + 2)),
            Some(&u1 @ 0xDC00..=0xDFFF) => {
                let cp = ((u32::from(u0) & 0x3FF) << 10) + (u32::from(u1) & 0x3FF) + 0x1_0000;
                char::from_u32(cp)
                    .map(|ch| Decoded {
                        ch,
                        next: start + 2,
                    })
                    .ok_or_else(|| InvalidSequence::at(start, start + 2))
            }
            Some(_) => Err(InvalidSequence::at(start, start + 1)),
        },
        0xDC00..=0xDFFF => Err(InvalidSequence::at(start, start + 1)),
        _ => char::from_u32(u32::from(u0))
            .map(|ch| Decoded {
                ch,
                next: start + 1,
            })
            .ok_or_else(|| InvalidSequence::at(start, start + 1)),
    }
}

/// Decode one UTF-32 code point from `units` at `start`.
pub fn decode_utf32(units: &[u32], start: usize) -> Result<Decoded, InvalidSequence> {
    units
        .get(start)
        .and_then(|&u| char::from_u32(u))
        .map(|ch| Decoded {
            ch,
            next: start + 1,
        })
        .ok_or_else(|| InvalidSequence::at(start, start + 1))
}

/// Canonical UTF-8 encoding of `ch` (1 to 4 bytes).
#[must_use]
pub fn encode_utf8(ch: char) -> SmallVec<[u8; 4]> {
    let mut buf = [0u8; 4];
    SmallVec::from_slice(ch.encode_utf8(&mut buf).as_bytes())
}

/// Canonical UTF-16 encoding of `ch` (1 or 2 units).
#[must_use]
pub fn encode_utf16(ch: char) -> SmallVec<[u16; 2]> {
    let mut buf = [0u16; 2];
    SmallVec::from_slice(ch.encode_utf16(&mut buf))
}

/// Convert UTF-16 text into a `String`.
///
/// Conversion stops at the first invalid sequence.
#[must_use]
pub fn utf16_to_string(units: &[u16]) -> String {
    let mut out = String::with_capacity(units.len());
    let mut pos = 0;
    while let Ok(decoded) = decode_utf16(units, pos) {
        out.push(decoded.ch);
        pos = decoded.next;
    }
    out
}

/// Convert UTF-32 text into a `String`.
///
/// Conversion stops at the first value that is not a Unicode scalar.
#[must_use]
pub fn utf32_to_string(units: &[u32]) -> String {
    let mut out = String::with_capacity(units.len());
    let mut pos = 0;
    while let Ok(decoded) = decode_utf32(units, pos) {
        out.push(decoded.ch);
        pos = decoded.next;
    }
    out
}

/// Convert a string into UTF-16 code units.
#[must_use]
pub fn string_to_utf16(text: &str) -> Vec<u16> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        out.extend_from_slice(&encode_utf16(ch));
    }
    out
}

/// One step of a UTF-8 scan: the byte range visited and what it decoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointSpan {
    /// First byte of the span.
    pub start: usize,
    /// One past the last byte of the span.
    pub end: usize,
    /// The decoded code point, or `None` for a malformed byte.
    pub ch: Option<char>,
}

/// Iterator over every code point (and every malformed byte) of a UTF-8 buffer.
#[derive(Debug, Clone)]
pub struct Utf8Codepoints<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Iterator for Utf8Codepoints<'_> {
    type Item = CodepointSpan;

    fn next(&mut self) -> Option<CodepointSpan> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        let start = self.pos;
        let span = match decode_utf8(self.bytes, start) {
            Ok(d) => CodepointSpan {
                start,
                end: d.next,
                ch: Some(d.ch),
            },
            Err(e) => CodepointSpan {
                start,
                end: e.next,
                ch: None,
            },
        };
        self.pos = span.end;
        Some(span)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.bytes.len().saturating_sub(self.pos);
        (rest.div_ceil(4), Some(rest))
    }
}

/// Scan `bytes` one code point at a time.
#[inline]
pub fn codepoints(bytes: &[u8]) -> Utf8Codepoints<'_> {
    Utf8Codepoints { bytes, pos: 0 }
}
